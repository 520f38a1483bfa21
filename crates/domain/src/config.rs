use crate::errors::ResolverError;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    #[serde(default)]
    pub upstream: UpstreamConfig,
    #[serde(default)]
    pub resolver: ResolverConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UpstreamConfig {
    /// Upstream DNS server, `ip:port`.
    #[serde(default = "default_upstream_address")]
    pub address: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ResolverConfig {
    #[serde(default = "default_query_timeout")]
    pub query_timeout_secs: u64,
    #[serde(default = "default_true")]
    pub cache_enabled: bool,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

/// Command-line overrides applied on top of the config file.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub upstream_address: Option<String>,
    pub query_timeout_secs: Option<u64>,
    pub log_level: Option<String>,
}

impl Config {
    pub fn from_toml_str(raw: &str) -> Result<Self, ResolverError> {
        toml::from_str(raw).map_err(|e| ResolverError::ConfigError(e.to_string()))
    }

    pub fn apply_overrides(&mut self, overrides: CliOverrides) {
        if let Some(address) = overrides.upstream_address {
            self.upstream.address = address;
        }
        if let Some(timeout) = overrides.query_timeout_secs {
            self.resolver.query_timeout_secs = timeout;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    pub fn upstream_addr(&self) -> Result<SocketAddr, ResolverError> {
        self.upstream
            .address
            .parse()
            .map_err(|_| ResolverError::InvalidServerAddress(self.upstream.address.clone()))
    }
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            address: default_upstream_address(),
        }
    }
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            query_timeout_secs: default_query_timeout(),
            cache_enabled: default_true(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_upstream_address() -> String {
    "8.8.8.8:53".to_string()
}

fn default_query_timeout() -> u64 {
    3
}

fn default_true() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}
