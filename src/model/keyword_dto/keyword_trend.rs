use crate::common::*;

use crate::errors::keyword_api_error::*;

use crate::model::elastic_dto::elastic_source_parser::*;

use crate::utils_modules::time_utils::*;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Getters, new)]
#[getset(get = "pub")]
pub struct KeywordTrendResponse {
    aggregations: TrendAggregations,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Getters, new)]
#[getset(get = "pub")]
pub struct TrendAggregations {
    first_agg: TrendHistogram,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Getters, new)]
#[getset(get = "pub")]
pub struct TrendHistogram {
    buckets: Vec<TrendBucket>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Getters, new)]
#[getset(get = "pub")]
pub struct TrendBucket {
    doc_count: u64,
    key: i64,
    /* calendar date (YYYY-MM-DD) of the bucket start */
    key_as_string: String,
    second_agg: MediumBreakdown,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Getters, new)]
#[getset(get = "pub")]
pub struct MediumBreakdown {
    buckets: Vec<MediumCount>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Getters, new)]
#[getset(get = "pub")]
pub struct MediumCount {
    key: String,
    doc_count: u64,
}

impl TrendBucket {
    fn try_from_histogram_bucket(bucket: KeywordHistogramBucket) -> Result<Self, KeywordApiError> {
        let date: NaiveDate = convert_str_to_calendar_date(&bucket.key_as_string)
            .map_err(|e| KeywordApiError::MalformedAggregation(e.to_string()))?;

        let mediums: Vec<MediumCount> = bucket
            .second_agg
            .buckets
            .into_iter()
            .map(|medium| MediumCount::new(medium.key, medium.doc_count))
            .collect();

        Ok(TrendBucket::new(
            bucket.doc_count,
            bucket.key,
            convert_date_to_str_ymd_dash(date),
            MediumBreakdown::new(mediums),
        ))
    }
}

#[doc = "Reshapes the raw `aggregations` object of a keyword search into the API response shape."]
/// Bucket order, counts and keys are carried over unchanged; the date label is reduced
/// to a calendar date.
///
/// # Arguments
/// * `aggregations` - `aggregations` object from the Elasticsearch search response
///
/// # Returns
/// * Result<TrendAggregations, KeywordApiError> - `MalformedAggregation` when the payload shape or a date label is invalid
pub fn convert_from_keyword_aggregations(
    aggregations: Value,
) -> Result<TrendAggregations, KeywordApiError> {
    let parsed: KeywordAggregations = serde_json::from_value(aggregations)
        .map_err(|e| KeywordApiError::MalformedAggregation(e.to_string()))?;

    let buckets: Vec<TrendBucket> = parsed
        .first_agg
        .buckets
        .into_iter()
        .map(TrendBucket::try_from_histogram_bucket)
        .collect::<Result<_, _>>()?;

    Ok(TrendAggregations::new(TrendHistogram::new(buckets)))
}
