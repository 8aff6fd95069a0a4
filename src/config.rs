//! Configuration file support for depfresh.
//!
//! Provides YAML-based configuration through `depfresh.config.yml` files,
//! including data structures, file loading, and validation.

use anyhow::Context;
use depfresh::adapters::outbound::network::GitHubBranchClient;
use depfresh::shared::error::FreshnessError;
use depfresh::shared::Result;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

pub const CONFIG_FILENAME: &str = "depfresh.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    /// Base URL of the GitHub API (e.g. a GitHub Enterprise `/api/v3` root)
    pub api_url: Option<String>,
    /// Request timeout for the GitHub API, in seconds
    pub timeout_secs: Option<u64>,
    /// Substring patterns merged with `--exclude`
    pub exclude_packages: Option<Vec<String>>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

impl ConfigFile {
    pub fn api_url(&self) -> &str {
        self.api_url
            .as_deref()
            .unwrap_or(GitHubBranchClient::API_ENDPOINT)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(
            self.timeout_secs
                .unwrap_or(GitHubBranchClient::TIMEOUT_SECONDS),
        )
    }

    pub fn exclude_packages(&self) -> &[String] {
        self.exclude_packages.as_deref().unwrap_or(&[])
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(path, &config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(path: &Path, config: &ConfigFile) -> std::result::Result<(), FreshnessError> {
    let invalid = |reason: String| FreshnessError::Config {
        path: path.to_path_buf(),
        reason,
    };

    if let Some(ref api_url) = config.api_url {
        if !(api_url.starts_with("https://") || api_url.starts_with("http://")) {
            return Err(invalid(format!(
                "api_url must be an http(s) URL, got '{}'",
                api_url
            )));
        }
    }

    if config.timeout_secs == Some(0) {
        return Err(invalid("timeout_secs must be greater than 0".to_string()));
    }

    if let Some(ref patterns) = config.exclude_packages {
        for (i, pattern) in patterns.iter().enumerate() {
            if pattern.trim().is_empty() {
                return Err(invalid(format!(
                    "exclude_packages[{}] must not be empty",
                    i
                )));
            }
        }
    }

    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}
