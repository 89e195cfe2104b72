use crate::common::*;

use crate::errors::keyword_api_error::*;

pub const DEFAULT_INTERVAL: &str = "1d";

#[doc = "Raw query parameters of `GET /results`. Every field is optional at this stage."]
#[derive(Debug, Clone, Default)]
pub struct KeywordSearchParams {
    pub query: Option<String>,
    pub after: Option<String>,
    pub before: Option<String>,
    pub interval: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Getters, new)]
#[getset(get = "pub")]
pub struct SearchRequest {
    query_text: String,
    after: Option<String>,
    before: Option<String>,
    interval: String,
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl KeywordSearchParams {
    #[doc = "Collects the decoded query string pairs. A repeated parameter keeps its last value."]
    /// Unknown parameters are ignored.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        pairs
            .into_iter()
            .fold(Self::default(), |mut params, (name, value)| {
                match name.as_str() {
                    "query" => params.query = Some(value),
                    "after" => params.after = Some(value),
                    "before" => params.before = Some(value),
                    "interval" => params.interval = Some(value),
                    _ => {}
                }
                params
            })
    }

    #[doc = "Validates the keyword and applies defaults to the optional parameters."]
    /// Blank `after`/`before`/`interval` values are treated as absent.
    ///
    /// # Returns
    /// * Result<SearchRequest, KeywordApiError> - `Validation` when the keyword is absent or blank
    pub fn into_search_request(self) -> Result<SearchRequest, KeywordApiError> {
        let query_text: String = non_blank(self.query).ok_or(KeywordApiError::Validation)?;

        Ok(SearchRequest::new(
            query_text,
            non_blank(self.after),
            non_blank(self.before),
            non_blank(self.interval).unwrap_or_else(|| DEFAULT_INTERVAL.to_string()),
        ))
    }
}
