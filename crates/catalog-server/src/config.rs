//! Server configuration

use catalog_sdk::CatalogConfig;
use serde::{Deserialize, Serialize};

/// Server configuration
///
/// Missing keys fall back to [`ServerConfig::default`], so a partial file is enough.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Server host
    pub host: String,

    /// Server port (HTTP)
    pub port: u16,

    /// Log level
    pub log_level: String,

    /// Catalog settings (registry, paging, search fields)
    pub catalog: CatalogConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            log_level: "info".to_string(),
            catalog: CatalogConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables and config file
    pub fn load() -> anyhow::Result<Self> {
        // Load .env file if exists
        dotenvy::dotenv().ok();

        let config_result = config::Config::builder()
            .add_source(config::File::with_name("config/server").required(false))
            .add_source(
                config::Environment::with_prefix("CATALOG")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build();

        match config_result {
            Ok(cfg) => Self::from_config(cfg),
            Err(_) => {
                tracing::info!("No config file found, using default configuration");
                Ok(Self::default())
            }
        }
    }

    fn from_config(cfg: config::Config) -> anyhow::Result<Self> {
        let config: Self = cfg
            .try_deserialize()
            .map_err(|e| anyhow::anyhow!("Failed to deserialize config: {}", e))?;

        config
            .catalog
            .validate()
            .map_err(|e| anyhow::anyhow!("Invalid catalog config: {}", e))?;
        Ok(config)
    }

    /// Load configuration from an explicit file (YAML, TOML or JSON by extension)
    pub fn from_file(path: &std::path::Path) -> anyhow::Result<Self> {
        let cfg = config::Config::builder()
            .add_source(config::File::from(path))
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to read config {}: {}", path.display(), e))?;
        Self::from_config(cfg)
    }

    /// Socket address string
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
