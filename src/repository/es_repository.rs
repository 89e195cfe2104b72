use crate::common::*;

use crate::model::configs::elastic_config::*;
use crate::model::elastic_dto::elastic_source_parser::*;

use crate::traits::repository::es_repository_trait::*;

#[derive(Debug, Getters, Clone)]
pub struct EsRepositoryImpl {
    es_client: Elasticsearch,
    #[getset(get = "pub")]
    hosts: Vec<String>,
    #[getset(get = "pub")]
    log_requests: bool,
}

impl EsRepositoryImpl {
    #[doc = "Elasticsearch connection 생성자"]
    /// # Arguments
    /// * `hosts`        - Elasticsearch host 주소 벡터 (`host:port` or a full url)
    /// * `es_id`        - Elasticsearch 계정정보 - 아이디 (empty = no auth)
    /// * `es_pw`        - Elasticsearch 계정정보 - 비밀번호 (empty = no auth)
    /// * `timeout_secs` - per-request timeout
    /// * `log_requests` - log every query body and response status
    ///
    /// # Returns
    /// * Result<Self, anyhow::Error>
    pub fn new(
        hosts: Vec<String>,
        es_id: &str,
        es_pw: &str,
        timeout_secs: u64,
        log_requests: bool,
    ) -> anyhow::Result<Self> {
        let es_id_opt: Option<&str> = (!es_id.is_empty()).then_some(es_id);
        let es_pw_opt: Option<&str> = (!es_pw.is_empty()).then_some(es_pw);

        let es_client: Elasticsearch =
            Self::create_es_conn_pool(&hosts, es_id_opt, es_pw_opt, timeout_secs)
                .map_err(|e| anyhow!("[EsRepositoryImpl::new] {:?}", e))?;

        Ok(Self {
            es_client,
            hosts,
            log_requests,
        })
    }

    #[doc = "Builds the repository from the `[elastic]` config section."]
    pub fn from_config(elastic_config: &ElasticConfig) -> anyhow::Result<Self> {
        Self::new(
            elastic_config.hosts().clone(),
            elastic_config.es_id(),
            elastic_config.es_pw(),
            *elastic_config.timeout_secs(),
            *elastic_config.log_requests(),
        )
    }

    #[doc = "Function that create elasticsearch url"]
    fn build_es_url(host: &str) -> anyhow::Result<Url> {
        let url: String = if host.contains("://") {
            host.to_string()
        } else {
            format!("http://{}", host)
        };

        Url::parse(&url).map_err(|e| anyhow!("[build_es_url] invalid url '{}': {}", host, e))
    }

    #[doc = "Function that creates an Elasticsearch connection pool."]
    fn create_es_conn_pool(
        hosts: &[String],
        es_id_opt: Option<&str>,
        es_pw_opt: Option<&str>,
        timeout_secs: u64,
    ) -> anyhow::Result<Elasticsearch> {
        let cluster_urls: Vec<Url> = hosts
            .iter()
            .map(|host| Self::build_es_url(host))
            .collect::<anyhow::Result<_>>()
            .map_err(|e| anyhow!("[EsRepositoryImpl::create_es_conn_pool][cluster_urls] {:?}", e))?;

        let conn_pool: MultiNodeConnectionPool =
            MultiNodeConnectionPool::round_robin(cluster_urls, None);

        /* Aggregations over wide ranges are slow; keep the timeout generous */
        let mut builder: TransportBuilder =
            TransportBuilder::new(conn_pool).timeout(Duration::from_secs(timeout_secs));

        if let (Some(id), Some(pw)) = (es_id_opt, es_pw_opt) {
            builder = builder.auth(EsCredentials::Basic(id.to_string(), pw.to_string()));
        }

        let transport: EsTransport = builder
            .build()
            .map_err(|e| anyhow!("[EsRepositoryImpl::create_es_conn_pool] {:?}", e))?;

        Ok(Elasticsearch::new(transport))
    }
}

#[async_trait]
impl EsRepository for EsRepositoryImpl {
    #[doc = "특정 인덱스에서 aggregation 쿼리로 데이터를 가져와주는 함수"]
    /// # Arguments
    /// * `es_query`      - Elasticsearch aggregation 쿼리
    /// * `index_name`    - 인덱스 이름
    ///
    /// # Returns
    /// * anyhow::Result<Option<Value>> - `aggregations` object of the response, `None` when the response has none
    async fn get_agg_query(&self, es_query: &Value, index_name: &str) -> anyhow::Result<Option<Value>> {
        if self.log_requests {
            info!(
                "[EsRepositoryImpl->get_agg_query] POST /{}/_search {}",
                index_name, es_query
            );
        }

        let response: Response = self
            .es_client
            .search(SearchParts::Index(&[index_name]))
            .body(es_query)
            .send()
            .await?;

        if self.log_requests {
            info!(
                "[EsRepositoryImpl->get_agg_query] response status: {}",
                response.status_code()
            );
        }

        if response.status_code().is_success() {
            let parsed: AggregationResponse<Value> = response.json().await?;
            Ok(parsed.aggregations)
        } else {
            let status_code = response.status_code();
            let error_body: String = response.text().await?;
            error!(
                "[EsRepositoryImpl->get_agg_query] response status is failed: {} {}",
                status_code, error_body
            );
            /* Forwarded to the API caller as-is */
            Err(anyhow!("{} {}", status_code, error_body))
        }
    }
}
