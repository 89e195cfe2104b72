pub mod keyword_trend;
pub mod search_request;
