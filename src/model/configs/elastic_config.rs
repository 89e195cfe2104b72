use crate::common::*;

#[derive(Serialize, Deserialize, Debug, Clone, Getters)]
#[getset(get = "pub")]
pub struct ElasticConfig {
    pub hosts: Vec<String>,
    #[serde(default)]
    pub es_id: String,
    #[serde(default)]
    pub es_pw: String,
    #[serde(default = "default_index_name")]
    pub index_name: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /* Logs every outgoing query body and the response status */
    #[serde(default)]
    pub log_requests: bool,
}

fn default_index_name() -> String {
    String::from("news")
}

fn default_timeout_secs() -> u64 {
    30
}
