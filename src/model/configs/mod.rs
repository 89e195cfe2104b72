pub mod config;
pub mod elastic_config;
pub mod server_config;
