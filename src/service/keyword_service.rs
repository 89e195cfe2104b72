use crate::common::*;

use crate::errors::keyword_api_error::*;

use crate::model::elastic_dto::keyword_agg_query::*;
use crate::model::keyword_dto::{keyword_trend::*, search_request::*};

use crate::traits::{repository::es_repository_trait::*, service::keyword_service_trait::*};

#[derive(Clone, Debug, new)]
pub struct KeywordServiceImpl<R: EsRepository> {
    elastic_obj: Arc<R>,
    index_name: String,
}

#[async_trait]
impl<R> KeywordService for KeywordServiceImpl<R>
where
    R: EsRepository + Sync + Send,
{
    #[doc = "Runs the keyword aggregation against Elasticsearch and reshapes the result."]
    /// # Arguments
    /// * `search_request` - validated keyword search request
    ///
    /// # Returns
    /// * Result<KeywordTrendResponse, KeywordApiError>
    async fn get_keyword_trend(
        &self,
        search_request: &SearchRequest,
    ) -> Result<KeywordTrendResponse, KeywordApiError> {
        let es_query: KeywordAggQuery = build_keyword_agg_query(search_request);
        let es_query: Value = serde_json::to_value(&es_query).map_err(|e| {
            KeywordApiError::Backend(format!(
                "[KeywordServiceImpl->get_keyword_trend] Failed to serialize query: {}",
                e
            ))
        })?;

        let aggregations: Value = self
            .elastic_obj
            .get_agg_query(&es_query, &self.index_name)
            .await?
            .ok_or_else(|| {
                KeywordApiError::MalformedAggregation(String::from(
                    "response has no `aggregations` object",
                ))
            })?;

        let trend: TrendAggregations = convert_from_keyword_aggregations(aggregations)?;

        Ok(KeywordTrendResponse::new(trend))
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    /// Canned Elasticsearch stand-in that records every query it receives.
    pub(crate) struct MockEsRepository {
        result: Result<Option<Value>, String>,
        pub(crate) calls: AtomicUsize,
        pub(crate) last_query: Mutex<Option<(Value, String)>>,
    }

    impl MockEsRepository {
        pub(crate) fn returning(aggregations: Option<Value>) -> Self {
            Self {
                result: Ok(aggregations),
                calls: AtomicUsize::new(0),
                last_query: Mutex::new(None),
            }
        }

        pub(crate) fn failing(message: &str) -> Self {
            Self {
                result: Err(message.to_string()),
                calls: AtomicUsize::new(0),
                last_query: Mutex::new(None),
            }
        }

        pub(crate) fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl EsRepository for MockEsRepository {
        async fn get_agg_query(
            &self,
            es_query: &Value,
            index_name: &str,
        ) -> anyhow::Result<Option<Value>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.last_query.lock().unwrap() = Some((es_query.clone(), index_name.to_string()));

            match &self.result {
                Ok(aggregations) => Ok(aggregations.clone()),
                Err(message) => Err(anyhow!("{}", message)),
            }
        }
    }

    pub(crate) fn wilson_aggregations() -> Value {
        json!({
            "first_agg": {
                "buckets": [
                    {
                        "key_as_string": "2019-08-22T00:00:00.000Z",
                        "key": 1566432000000_i64,
                        "doc_count": 5615,
                        "second_agg": {
                            "doc_count_error_upper_bound": 0,
                            "sum_other_doc_count": 0,
                            "buckets": [
                                { "key": "Online", "doc_count": 1774 },
                                { "key": "TV", "doc_count": 518 },
                                { "key": "Radio", "doc_count": 375 },
                                { "key": "Print", "doc_count": 311 }
                            ]
                        }
                    }
                ]
            }
        })
    }

    fn wilson_request() -> SearchRequest {
        SearchRequest::new(
            "Wilson".into(),
            Some("2019-08-20T00:00:00".into()),
            Some("2019-08-30T23:59:59".into()),
            "5d".into(),
        )
    }

    #[tokio::test]
    async fn sends_built_query_to_configured_index() {
        let repo = Arc::new(MockEsRepository::returning(Some(wilson_aggregations())));
        let service = KeywordServiceImpl::new(Arc::clone(&repo), "news".to_string());

        let response = service.get_keyword_trend(&wilson_request()).await.unwrap();

        assert_eq!(repo.call_count(), 1);
        let (query, index) = repo.last_query.lock().unwrap().clone().unwrap();
        assert_eq!(index, "news");
        assert_eq!(query["query"]["bool"]["must"][0]["query_string"]["query"], "Wilson");
        assert_eq!(query["aggs"]["first_agg"]["date_histogram"]["fixed_interval"], "5d");
        assert_eq!(query["size"], 0);

        let first = &response.aggregations().first_agg().buckets()[0];
        assert_eq!(*first.doc_count(), 5615);
        assert_eq!(first.key_as_string(), "2019-08-22");
    }

    #[tokio::test]
    async fn backend_failure_keeps_message() {
        let repo = Arc::new(MockEsRepository::failing("Something went wrong"));
        let service = KeywordServiceImpl::new(repo, "news".to_string());

        let err = service.get_keyword_trend(&wilson_request()).await.unwrap_err();
        assert!(matches!(err, KeywordApiError::Backend(ref m) if m == "Something went wrong"));
    }

    #[tokio::test]
    async fn missing_aggregations_is_malformed() {
        let repo = Arc::new(MockEsRepository::returning(None));
        let service = KeywordServiceImpl::new(repo, "news".to_string());

        let err = service.get_keyword_trend(&wilson_request()).await.unwrap_err();
        assert!(matches!(err, KeywordApiError::MalformedAggregation(_)));
    }

    #[tokio::test]
    async fn wrong_shape_is_malformed() {
        let repo = Arc::new(MockEsRepository::returning(Some(json!({ "other_agg": {} }))));
        let service = KeywordServiceImpl::new(repo, "news".to_string());

        let err = service.get_keyword_trend(&wilson_request()).await.unwrap_err();
        assert!(matches!(err, KeywordApiError::MalformedAggregation(_)));
    }
}
