pub mod elastic_source_parser;
pub mod keyword_agg_query;
