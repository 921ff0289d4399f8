use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use super::cli::CliConfig;
use super::constants::{
    CONFIG_FILE_NAME, DEFAULT_HOST, DEFAULT_PORT, FACTS_DEFAULT_BASE_URL,
    FACTS_DEFAULT_TIMEOUT_SECS,
};

/// Whether a host string binds every interface
pub fn is_all_interfaces(host: &str) -> bool {
    host == "0.0.0.0" || host == "::"
}

// =============================================================================
// File Config Structs (JSON deserialization)
// =============================================================================

/// Server configuration section
#[derive(Debug, Default, Clone, Deserialize)]
pub struct ServerFileConfig {
    pub host: Option<String>,
    pub port: Option<u16>,
}

/// Facts provider configuration section
#[derive(Debug, Default, Clone, Deserialize)]
pub struct FactsFileConfig {
    pub enabled: Option<bool>,
    pub base_url: Option<String>,
    pub timeout_secs: Option<u64>,
}

/// File-based configuration (JSON)
#[derive(Debug, Default, Deserialize)]
pub struct FileConfig {
    pub server: Option<ServerFileConfig>,
    pub facts: Option<FactsFileConfig>,
    #[serde(flatten)]
    pub extra: serde_json::Value,
}

impl FileConfig {
    /// Load configuration from a JSON file
    fn load_from_file(path: &Path) -> Result<Self> {
        tracing::debug!(path = %path.display(), "Loading config file");
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Self = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        Ok(config)
    }

    /// Warn about unknown fields in the config
    fn warn_unknown_fields(&self) {
        if let serde_json::Value::Object(map) = &self.extra
            && !map.is_empty()
        {
            let keys_str: String = map
                .keys()
                .map(|k| k.as_str())
                .collect::<Vec<_>>()
                .join(", ");
            tracing::warn!(
                fields = %keys_str,
                "Unknown fields in config file (possible typos)"
            );
        }
    }
}

// =============================================================================
// Runtime Config Structs (final merged configuration)
// =============================================================================

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Facts provider configuration
#[derive(Debug, Clone)]
pub struct FactsConfig {
    pub enabled: bool,
    pub base_url: String,
    pub timeout_secs: u64,
}

/// Final merged application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub facts: FactsConfig,
}

impl AppConfig {
    /// Load configuration from all sources
    ///
    /// Priority (lowest to highest):
    /// 1. Defaults
    /// 2. Local directory config OR CLI-specified config path
    /// 3. CLI arguments (which include env var fallbacks via clap)
    pub fn load(cli: &CliConfig) -> Result<Self> {
        tracing::debug!("Loading application configuration");

        let config_path = if let Some(ref path) = cli.config {
            if !path.exists() {
                anyhow::bail!("Config file not found: {}", path.display());
            }
            Some(path.clone())
        } else {
            let local = PathBuf::from(CONFIG_FILE_NAME);
            if local.exists() { Some(local) } else { None }
        };

        let file_config = match config_path {
            Some(path) => {
                let config = FileConfig::load_from_file(&path)?;
                config.warn_unknown_fields();
                tracing::debug!(path = %path.display(), "Config file loaded");
                config
            }
            None => FileConfig::default(),
        };

        let file_server = file_config.server.unwrap_or_default();
        let file_facts = file_config.facts.unwrap_or_default();

        let host = cli
            .host
            .clone()
            .or(file_server.host)
            .unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = cli.port.or(file_server.port).unwrap_or(DEFAULT_PORT);

        // facts.enabled: file config sets default, --no-facts CLI flag disables
        let facts_enabled = if cli.no_facts {
            false
        } else {
            file_facts.enabled.unwrap_or(true)
        };

        let facts_base_url = cli
            .facts_base_url
            .clone()
            .or(file_facts.base_url)
            .unwrap_or_else(|| FACTS_DEFAULT_BASE_URL.to_string());

        let facts_timeout_secs = cli
            .facts_timeout_secs
            .or(file_facts.timeout_secs)
            .unwrap_or(FACTS_DEFAULT_TIMEOUT_SECS);

        let config = Self {
            server: ServerConfig { host, port },
            facts: FactsConfig {
                enabled: facts_enabled,
                base_url: facts_base_url,
                timeout_secs: facts_timeout_secs,
            },
        };

        config.validate()?;

        tracing::debug!(
            host = %config.server.host,
            port = config.server.port,
            facts_enabled = config.facts.enabled,
            facts_base_url = %config.facts.base_url,
            facts_timeout_secs = config.facts.timeout_secs,
            "Configuration loaded"
        );

        Ok(config)
    }

    /// Validate the configuration for consistency and correctness
    fn validate(&self) -> Result<()> {
        if self.server.host.is_empty() {
            anyhow::bail!("Configuration error: server.host must not be empty");
        }

        // Port 0 would cause bind failure
        if self.server.port == 0 {
            anyhow::bail!("Configuration error: server.port must be greater than 0");
        }

        if self.facts.enabled {
            if self.facts.base_url.is_empty() {
                anyhow::bail!(
                    "Configuration error: facts.base_url must not be empty when facts are enabled"
                );
            }
            if self.facts.timeout_secs == 0 {
                anyhow::bail!(
                    "Configuration error: facts.timeout_secs must be greater than 0"
                );
            }
        }

        Ok(())
    }
}
