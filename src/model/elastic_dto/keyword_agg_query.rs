use crate::common::*;

use crate::model::keyword_dto::search_request::*;

pub const TIMESTAMP_FIELD: &str = "timestamp";
pub const MEDIUM_FIELD: &str = "medium";

/* Only aggregation results are read back */
const RESULT_SIZE: u64 = 0;
/* Empty histogram buckets are never materialized */
const MIN_DOC_COUNT: u64 = 1;

#[doc = "Search body sent to Elasticsearch for a keyword trend request."]
#[derive(Debug, Clone, Serialize, Getters)]
#[getset(get = "pub")]
pub struct KeywordAggQuery {
    query: QueryClause,
    aggs: KeywordAggs,
    size: u64,
}

#[derive(Debug, Clone, Serialize, Getters)]
#[getset(get = "pub")]
pub struct QueryClause {
    #[serde(rename = "bool")]
    bool_query: BoolQuery,
}

#[derive(Debug, Clone, Serialize, Getters)]
#[getset(get = "pub")]
pub struct BoolQuery {
    must: Vec<MustClause>,
    filter: Vec<FilterClause>,
}

#[derive(Debug, Clone, Serialize, Getters)]
#[getset(get = "pub")]
pub struct MustClause {
    query_string: QueryString,
}

#[derive(Debug, Clone, Serialize, Getters)]
#[getset(get = "pub")]
pub struct QueryString {
    query: String,
}

#[derive(Debug, Clone, Serialize, Getters)]
#[getset(get = "pub")]
pub struct FilterClause {
    range: TimestampRange,
}

#[derive(Debug, Clone, Serialize, Getters)]
#[getset(get = "pub")]
pub struct TimestampRange {
    timestamp: RangeBounds,
}

#[derive(Debug, Clone, Serialize, Getters)]
#[getset(get = "pub")]
pub struct RangeBounds {
    #[serde(skip_serializing_if = "Option::is_none")]
    gte: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    lte: Option<String>,
}

#[derive(Debug, Clone, Serialize, Getters)]
#[getset(get = "pub")]
pub struct KeywordAggs {
    first_agg: DateHistogramAgg,
}

#[derive(Debug, Clone, Serialize, Getters)]
#[getset(get = "pub")]
pub struct DateHistogramAgg {
    date_histogram: DateHistogramSpec,
    aggs: MediumAggs,
}

#[derive(Debug, Clone, Serialize, Getters)]
#[getset(get = "pub")]
pub struct DateHistogramSpec {
    field: String,
    fixed_interval: String,
    min_doc_count: u64,
}

#[derive(Debug, Clone, Serialize, Getters)]
#[getset(get = "pub")]
pub struct MediumAggs {
    second_agg: TermsAgg,
}

/* No `size` override: the engine's default term count applies */
#[derive(Debug, Clone, Serialize, Getters)]
#[getset(get = "pub")]
pub struct TermsAgg {
    terms: TermsSpec,
}

#[derive(Debug, Clone, Serialize, Getters)]
#[getset(get = "pub")]
pub struct TermsSpec {
    field: String,
}

#[doc = "Builds the bool + date_histogram/terms aggregation query for a keyword search."]
/// The keyword goes into `query_string` untouched. Absent range bounds are left out.
///
/// # Arguments
/// * `search_request` - validated keyword search request
///
/// # Returns
/// * KeywordAggQuery
pub fn build_keyword_agg_query(search_request: &SearchRequest) -> KeywordAggQuery {
    KeywordAggQuery {
        query: QueryClause {
            bool_query: BoolQuery {
                must: vec![MustClause {
                    query_string: QueryString {
                        query: search_request.query_text().clone(),
                    },
                }],
                filter: vec![FilterClause {
                    range: TimestampRange {
                        timestamp: RangeBounds {
                            gte: search_request.after().clone(),
                            lte: search_request.before().clone(),
                        },
                    },
                }],
            },
        },
        aggs: KeywordAggs {
            first_agg: DateHistogramAgg {
                date_histogram: DateHistogramSpec {
                    field: TIMESTAMP_FIELD.to_string(),
                    fixed_interval: search_request.interval().clone(),
                    min_doc_count: MIN_DOC_COUNT,
                },
                aggs: MediumAggs {
                    second_agg: TermsAgg {
                        terms: TermsSpec {
                            field: MEDIUM_FIELD.to_string(),
                        },
                    },
                },
            },
        },
        size: RESULT_SIZE,
    }
}
