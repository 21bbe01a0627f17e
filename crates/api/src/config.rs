//! API service configuration

use anyhow::Result;
use serde::Deserialize;

/// Service configuration, loaded from `CARBONSHIFT_*` environment variables
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// HTTP listen port
    #[serde(default = "default_api_port")]
    pub api_port: u16,

    /// Upper bound for one insight-generation call, in seconds.
    /// On timeout the response ships without a narrative insight.
    #[serde(default = "default_insight_timeout")]
    pub insight_timeout_secs: u64,
}

fn default_api_port() -> u16 {
    8080
}

fn default_insight_timeout() -> u64 {
    10
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            api_port: default_api_port(),
            insight_timeout_secs: default_insight_timeout(),
        }
    }
}

impl ApiConfig {
    /// Load configuration from the environment
    pub fn load() -> Result<Self> {
        let config = config::Config::builder()
            .add_source(config::Environment::with_prefix("CARBONSHIFT"))
            .build()?;

        Ok(config.try_deserialize().unwrap_or_default())
    }
}
