pub mod keyword_api_error;
