//! Engine connection settings.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::errors::SearchError;

/// Connection settings for the search engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Base URL of the cluster.
    #[serde(default = "default_url")]
    pub url: String,
    /// Index every operation targets.
    #[serde(default = "default_index")]
    pub index: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            index: default_index(),
        }
    }
}

fn default_url() -> String {
    "http://localhost:9200".to_string()
}

fn default_index() -> String {
    "employees".to_string()
}

impl EngineConfig {
    /// Environment-driven settings: `ES_URL` and `ES_INDEX`, falling back
    /// to the localhost defaults.
    pub fn from_env() -> Self {
        Self {
            url: std::env::var("ES_URL").unwrap_or_else(|_| default_url()),
            index: std::env::var("ES_INDEX").unwrap_or_else(|_| default_index()),
        }
    }

    /// Load settings from a TOML file. Values of the form `${VAR}` are
    /// expanded from the environment; a reference to an unset variable is
    /// an error rather than a silent default.
    pub fn load(path: &Path) -> Result<Self, SearchError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: EngineConfig =
            toml::from_str(&content).map_err(|err| SearchError::InvalidRequest {
                message: format!("failed to parse {}: {err}", path.display()),
            })?;
        config.url = expand_env(&config.url)?;
        config.index = expand_env(&config.index)?;
        Ok(config)
    }
}

fn expand_env(value: &str) -> Result<String, SearchError> {
    if let Some(name) = value.strip_prefix("${").and_then(|rest| rest.strip_suffix('}')) {
        std::env::var(name).map_err(|_| SearchError::InvalidRequest {
            message: format!("environment variable {name} not set"),
        })
    } else {
        Ok(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_config_targets_localhost() {
        let config = EngineConfig::default();
        assert_eq!(config.url, "http://localhost:9200");
        assert_eq!(config.index, "employees");
    }

    #[test]
    fn config_round_trips_through_toml() {
        let config = EngineConfig::default();
        let rendered = toml::to_string_pretty(&config).unwrap();
        assert!(rendered.contains("url"));
        assert!(rendered.contains("index"));
        let parsed: EngineConfig = toml::from_str(&rendered).unwrap();
        assert_eq!(parsed.url, config.url);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let parsed: EngineConfig = toml::from_str("").unwrap();
        assert_eq!(parsed.url, "http://localhost:9200");
        assert_eq!(parsed.index, "employees");
    }

    #[test]
    fn load_reads_literal_values() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "url = \"http://search.internal:9200\"").unwrap();
        writeln!(file, "index = \"employees_test\"").unwrap();

        let config = EngineConfig::load(file.path()).unwrap();
        assert_eq!(config.url, "http://search.internal:9200");
        assert_eq!(config.index, "employees_test");
    }

    #[test]
    fn load_rejects_unset_environment_reference() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "url = \"${{EMPLOYEE_SEARCH_UNSET_TEST_VAR}}\"").unwrap();

        let err = EngineConfig::load(file.path()).expect_err("unset variable should fail");
        assert!(
            matches!(err, SearchError::InvalidRequest { message } if message.contains("EMPLOYEE_SEARCH_UNSET_TEST_VAR"))
        );
    }
}
