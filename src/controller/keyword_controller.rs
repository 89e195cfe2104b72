use crate::common::*;

use crate::errors::keyword_api_error::*;

use crate::model::keyword_dto::{keyword_trend::*, search_request::*};

use crate::traits::service::keyword_service_trait::*;

#[derive(Debug, new)]
pub struct KeywordController<S: KeywordService> {
    keyword_service: Arc<S>,
}

impl<S> KeywordController<S>
where
    S: KeywordService + Send + Sync + 'static,
{
    #[doc = "Routes served by the keyword trend API."]
    pub fn router(&self) -> Router {
        Router::new()
            .route("/results", get(results_handler::<S>))
            .with_state(Arc::clone(&self.keyword_service))
    }

    #[doc = "Binds the HTTP listener and serves until Ctrl+C is received."]
    /// # Arguments
    /// * `bind_addr` - `host:port` to listen on
    ///
    /// # Returns
    /// * anyhow::Result<()>
    pub async fn run(&self, bind_addr: &str) -> anyhow::Result<()> {
        let addr: SocketAddr = bind_addr
            .parse()
            .map_err(|e| anyhow!("[KeywordController::run] invalid bind address '{}': {:?}", bind_addr, e))?;

        let listener: tokio::net::TcpListener = tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|e| anyhow!("[KeywordController::run] failed to bind {}: {:?}", addr, e))?;

        info!("[KeywordController::run] listening on {}", addr);

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| anyhow!("[KeywordController::run] server error: {:?}", e))?;

        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("[shutdown_signal] Failed to listen for Ctrl+C signal: {:?}", e);
    }
    info!("Shutting down...");
}

#[doc = "GET /results"]
/// Validates the keyword, runs the aggregation and returns the reshaped buckets.
async fn results_handler<S>(
    State(keyword_service): State<Arc<S>>,
    query_pairs: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<KeywordTrendResponse>, KeywordApiError>
where
    S: KeywordService + Send + Sync + 'static,
{
    /* An unreadable query string is answered like a missing keyword */
    let pairs: Vec<(String, String)> = match query_pairs {
        Ok(Query(pairs)) => pairs,
        Err(e) => {
            warn!("[results_handler] unreadable query string: {}", e);
            Vec::new()
        }
    };
    let params: KeywordSearchParams = KeywordSearchParams::from_pairs(pairs);

    let search_request: SearchRequest = params.into_search_request().map_err(|e| {
        warn!("[results_handler] rejected request: {}", e);
        e
    })?;

    match keyword_service.get_keyword_trend(&search_request).await {
        Ok(response) => {
            info!(
                "[results_handler] query='{}' interval={} buckets={}",
                search_request.query_text(),
                search_request.interval(),
                response.aggregations().first_agg().buckets().len()
            );
            Ok(Json(response))
        }
        Err(e) => {
            error!(
                "[results_handler] query='{}' failed: {:?}",
                search_request.query_text(),
                e
            );
            Err(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::service::keyword_service::{tests::*, KeywordServiceImpl};

    use axum::body::Body;
    use axum::http::Request;
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    fn router_with(repo: Arc<MockEsRepository>) -> Router {
        let service = Arc::new(KeywordServiceImpl::new(repo, "news".to_string()));
        KeywordController::new(service).router()
    }

    async fn call(router: Router, uri: &str) -> (StatusCode, Value) {
        let req = Request::builder().uri(uri).body(Body::empty()).unwrap();
        let resp = router.oneshot(req).await.unwrap();
        let status = resp.status();
        let bytes = resp.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn valid_request_returns_reshaped_aggregations() {
        let repo = Arc::new(MockEsRepository::returning(Some(wilson_aggregations())));
        let (status, body) = call(
            router_with(Arc::clone(&repo)),
            "/results?query=Wilson&before=2019-08-30T23:59:59&after=2019-08-20T00:00:00&interval=5d",
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        let first = &body["aggregations"]["first_agg"]["buckets"][0];
        assert_eq!(first["doc_count"], 5615);
        assert_eq!(first["key"], 1566432000000_i64);
        assert_eq!(first["key_as_string"], "2019-08-22");
        assert_eq!(
            first["second_agg"]["buckets"],
            json!([
                { "key": "Online", "doc_count": 1774 },
                { "key": "TV", "doc_count": 518 },
                { "key": "Radio", "doc_count": 375 },
                { "key": "Print", "doc_count": 311 }
            ])
        );

        let (query, _) = repo.last_query.lock().unwrap().clone().unwrap();
        assert_eq!(
            query["query"]["bool"]["filter"][0]["range"]["timestamp"],
            json!({ "gte": "2019-08-20T00:00:00", "lte": "2019-08-30T23:59:59" })
        );
    }

    #[tokio::test]
    async fn missing_query_is_bad_request_without_backend_call() {
        for uri in ["/results", "/results?query=", "/results?query=%20%20&interval=1d"] {
            let repo = Arc::new(MockEsRepository::returning(Some(wilson_aggregations())));
            let (status, body) = call(router_with(Arc::clone(&repo)), uri).await;

            assert_eq!(status, StatusCode::BAD_REQUEST, "{}", uri);
            assert_eq!(body, json!({ "error": "Keyword is required" }));
            assert_eq!(repo.call_count(), 0);
        }
    }

    #[tokio::test]
    async fn backend_error_is_internal_server_error_with_message() {
        let repo = Arc::new(MockEsRepository::failing("Something went wrong"));
        let (status, body) = call(
            router_with(repo),
            "/results?query=Wilson&before=2023-01-02T00:00:00&after=2023-01-01T00:00:00&interval=1d",
        )
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({ "error": "Something went wrong" }));
    }

    #[tokio::test]
    async fn repeated_parameters_use_last_value() {
        let repo = Arc::new(MockEsRepository::returning(Some(wilson_aggregations())));
        let (status, body) = call(
            router_with(Arc::clone(&repo)),
            "/results?query=Wilson&query=Biden&interval=1d&interval=5d",
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["aggregations"]["first_agg"]["buckets"][0]["doc_count"], 5615);
        assert_eq!(repo.call_count(), 1);

        let (query, _) = repo.last_query.lock().unwrap().clone().unwrap();
        assert_eq!(query["query"]["bool"]["must"][0]["query_string"]["query"], "Biden");
        assert_eq!(query["aggs"]["first_agg"]["date_histogram"]["fixed_interval"], "5d");
    }

    #[tokio::test]
    async fn repeated_parameters_ending_blank_are_bad_request_json() {
        let repo = Arc::new(MockEsRepository::returning(Some(wilson_aggregations())));
        let req = Request::builder()
            .uri("/results?query=Wilson&query=")
            .body(Body::empty())
            .unwrap();
        let resp = router_with(Arc::clone(&repo)).oneshot(req).await.unwrap();

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            resp.headers()["content-type"].to_str().unwrap(),
            "application/json"
        );
        let bytes = resp.into_body().collect().await.unwrap().to_bytes();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body, json!({ "error": "Keyword is required" }));
        assert_eq!(repo.call_count(), 0);
    }

    #[tokio::test]
    async fn malformed_payload_is_internal_server_error() {
        let repo = Arc::new(MockEsRepository::returning(Some(json!({ "first_agg": {} }))));
        let (status, body) = call(router_with(repo), "/results?query=Wilson").await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body["error"].as_str().unwrap().starts_with("Malformed aggregation"));
    }

    #[tokio::test]
    async fn interval_defaults_when_absent() {
        let repo = Arc::new(MockEsRepository::returning(Some(json!({ "first_agg": { "buckets": [] } }))));
        let (status, body) = call(router_with(Arc::clone(&repo)), "/results?query=Wilson").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "aggregations": { "first_agg": { "buckets": [] } } }));

        let (query, _) = repo.last_query.lock().unwrap().clone().unwrap();
        assert_eq!(query["aggs"]["first_agg"]["date_histogram"]["fixed_interval"], "1d");
        assert_eq!(query["query"]["bool"]["filter"][0]["range"]["timestamp"], json!({}));
    }
}
