pub mod keyword_service;
