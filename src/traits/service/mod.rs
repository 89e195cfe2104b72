pub mod keyword_service_trait;
