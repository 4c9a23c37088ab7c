//! Status codes and parameters shared with the WMS API
//!
//! `configs.json` holds the numeric status codes per entity scope,
//! `parameters.json` the other coded values plus a few UI settings. Both files
//! are embedded at compile time and exposed through [`StatusConfig`].

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

const CONFIGS_JSON: &str = include_str!("configs.json");
const PARAMETERS_JSON: &str = include_str!("parameters.json");

static EMBEDDED: Lazy<StatusConfig> = Lazy::new(|| {
    StatusConfig::from_json(CONFIGS_JSON, PARAMETERS_JSON)
        .expect("embedded configs.json / parameters.json are valid")
});

/// One named code of a scope
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigEntry {
    pub name: String,
    pub code: i64,
    /// i18n key of the code
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    Parse { file: &'static str, message: String },
    DuplicateName(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Parse { file, message } => write!(f, "invalid {}: {}", file, message),
            ConfigError::DuplicateName(name) => write!(f, "config name '{}' declared twice", name),
        }
    }
}

impl std::error::Error for ConfigError {}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
struct ParametersFile {
    list_page_size: u32,
    default_print_language: String,
    #[serde(rename = "scopes")]
    scopes: BTreeMap<String, Vec<ConfigEntry>>,
}

/// Status codes and parameters, looked up by constant name or by scope
#[derive(Debug, Clone, Default)]
pub struct StatusConfig {
    scopes: BTreeMap<String, Vec<ConfigEntry>>,
    pub list_page_size: u32,
    pub default_print_language: String,
}

impl StatusConfig {
    /// Configuration embedded in the binary
    pub fn embedded() -> &'static StatusConfig {
        &EMBEDDED
    }

    pub fn from_json(configs: &str, parameters: &str) -> Result<Self, ConfigError> {
        let mut scopes: BTreeMap<String, Vec<ConfigEntry>> =
            serde_json::from_str(configs).map_err(|e| ConfigError::Parse {
                file: "configs.json",
                message: e.to_string(),
            })?;
        let params: ParametersFile =
            serde_json::from_str(parameters).map_err(|e| ConfigError::Parse {
                file: "parameters.json",
                message: e.to_string(),
            })?;
        scopes.extend(params.scopes);

        let mut names = std::collections::HashSet::new();
        for entry in scopes.values().flatten() {
            if !names.insert(entry.name.as_str()) {
                return Err(ConfigError::DuplicateName(entry.name.clone()));
            }
        }

        Ok(Self {
            scopes,
            list_page_size: params.list_page_size,
            default_print_language: params.default_print_language,
        })
    }

    /// Numeric code of a constant, e.g. `DELIVERY_STATUS_CREATED`
    pub fn code(&self, name: &str) -> Option<i64> {
        self.scopes
            .values()
            .flatten()
            .find(|entry| entry.name == name)
            .map(|entry| entry.code)
    }

    /// i18n key of `code` within `scope`
    pub fn label_key(&self, scope: &str, code: i64) -> Option<&str> {
        self.options(scope)
            .iter()
            .find(|entry| entry.code == code)
            .map(|entry| entry.label.as_str())
    }

    /// Every code of a scope, in declaration order (select inputs)
    pub fn options(&self, scope: &str) -> &[ConfigEntry] {
        self.scopes.get(scope).map(Vec::as_slice).unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_config_loads() {
        let config = StatusConfig::from_json(CONFIGS_JSON, PARAMETERS_JSON);
        assert!(config.is_ok(), "{:?}", config.err());
        let config = StatusConfig::embedded();
        assert_eq!(config.list_page_size, 20);
        assert_eq!(config.default_print_language, "fr");
    }

    #[test]
    fn test_code_lookup() {
        let config = StatusConfig::embedded();
        assert_eq!(config.code("DELIVERY_STATUS_CREATED"), Some(10));
        assert_eq!(config.code("LOAD_STATUS_DISPATCHED"), Some(30));
        assert_eq!(config.code("STOCK_STATUS_QUARANTINE"), Some(2));
        assert_eq!(config.code("NOT_A_STATUS"), None);
    }

    #[test]
    fn test_label_and_options() {
        let config = StatusConfig::embedded();
        assert_eq!(
            config.label_key("delivery_status", 1000),
            Some("d:status-canceled")
        );
        assert_eq!(config.label_key("delivery_status", 999), None);
        assert_eq!(config.options("round_status").len(), 5);
        assert!(config.options("unknown_scope").is_empty());
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        let err = StatusConfig::from_json("{ nope", PARAMETERS_JSON).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { file: "configs.json", .. }));
    }

    #[test]
    fn test_duplicate_names_are_rejected() {
        let configs = r#"{
            "a": [{ "name": "X", "code": 1, "label": "d:x" }],
            "b": [{ "name": "X", "code": 2, "label": "d:x" }]
        }"#;
        let err = StatusConfig::from_json(configs, PARAMETERS_JSON).unwrap_err();
        assert_eq!(err, ConfigError::DuplicateName("X".to_string()));
    }
}
