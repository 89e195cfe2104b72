pub mod configs;
pub mod elastic_dto;
pub mod keyword_dto;
