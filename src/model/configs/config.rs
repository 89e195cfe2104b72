use crate::common::*;

use crate::utils_modules::io_utils::*;

use crate::model::configs::{elastic_config::*, server_config::*};

#[derive(Serialize, Deserialize, Debug, Clone, Getters)]
#[getset(get = "pub")]
pub struct Config {
    pub elastic: ElasticConfig,
    #[serde(default)]
    pub server: ServerConfig,
}

impl Config {
    #[doc = "Function to initialize System configuration information instances"]
    /// # Arguments
    /// * `config_path` - Path of the toml file holding the system configuration
    ///
    /// # Returns
    /// * Result<Config, anyhow::Error>
    pub fn load(config_path: &str) -> anyhow::Result<Self> {
        info!("[Config::load] read system config from '{}'", config_path);

        let system_config: Config = read_toml_from_file::<Config>(config_path)
            .map_err(|e| anyhow!("[Config::load] Failed to retrieve information 'system_config'. : {:?}", e))?;

        if system_config.elastic.hosts.is_empty() {
            return Err(anyhow!("[Config::load] 'elastic.hosts' must contain at least one host"));
        }

        Ok(system_config)
    }
}
