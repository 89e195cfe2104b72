use crate::common::*;

#[async_trait]
pub trait EsRepository {
    async fn get_agg_query(&self, es_query: &Value, index_name: &str) -> anyhow::Result<Option<Value>>;
}
