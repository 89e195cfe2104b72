pub mod keyword_controller;
