use crate::common::*;

#[derive(Debug, Deserialize)]
pub struct AggregationResponse<T> {
    pub aggregations: Option<T>,
}

#[derive(Debug, Deserialize)]
pub struct KeywordAggregations {
    pub first_agg: KeywordHistogramAggregation,
}

#[derive(Debug, Deserialize)]
pub struct KeywordHistogramAggregation {
    pub buckets: Vec<KeywordHistogramBucket>,
}

#[derive(Debug, Deserialize)]
pub struct KeywordHistogramBucket {
    pub key_as_string: String,
    pub key: i64,
    pub doc_count: u64,
    pub second_agg: MediumTermsAggregation,
}

/* doc_count_error_upper_bound / sum_other_doc_count are ignored */
#[derive(Debug, Deserialize)]
pub struct MediumTermsAggregation {
    pub buckets: Vec<MediumTermsBucket>,
}

#[derive(Debug, Deserialize)]
pub struct MediumTermsBucket {
    pub key: String,
    pub doc_count: u64,
}
