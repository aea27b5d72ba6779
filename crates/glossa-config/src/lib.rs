use std::env;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use self::logging::LoggingConfig;
use self::storage::StorageConfig;

pub mod logging;
pub mod storage;

#[derive(Debug, Default, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct Config {
    pub storage: StorageConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Defaults overridden by `GLOSSA_*` environment variables
    pub fn new() -> Self {
        Self::default().with_env_overrides()
    }

    pub fn with_env_overrides(self) -> Self {
        self.with_overrides(|key| env::var(key).ok())
    }

    fn with_overrides(mut self, var: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(dir) = var("GLOSSA_DATA_DIR").filter(|v| !v.is_empty()) {
            self.storage.data_dir = PathBuf::from(dir);
        }

        if let Some(atomic) = var("GLOSSA_ATOMIC_WRITES").and_then(|v| parse_bool(&v)) {
            self.storage.atomic_writes = atomic;
        }

        if let Some(filter) = var("GLOSSA_LOG").filter(|v| !v.is_empty()) {
            self.logging.filter = filter;
        }

        if let Some(json) = var("GLOSSA_LOG_JSON").and_then(|v| parse_bool(&v)) {
            self.logging.json = json;
        }

        self
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.storage.data_dir, PathBuf::from("word_source"));
        assert!(config.storage.atomic_writes);
        assert_eq!(config.logging.filter, "info");
        assert!(!config.logging.json);
    }

    #[test]
    fn test_env_overrides() {
        let config = Config::default().with_overrides(lookup(&[
            ("GLOSSA_DATA_DIR", "/var/lib/glossa"),
            ("GLOSSA_ATOMIC_WRITES", "off"),
            ("GLOSSA_LOG", "glossa_store=debug"),
            ("GLOSSA_LOG_JSON", "1"),
        ]));

        assert_eq!(config.storage.data_dir, PathBuf::from("/var/lib/glossa"));
        assert!(!config.storage.atomic_writes);
        assert_eq!(config.logging.filter, "glossa_store=debug");
        assert!(config.logging.json);
    }

    #[test]
    fn test_invalid_env_values_are_ignored() {
        let config = Config::default().with_overrides(lookup(&[
            ("GLOSSA_DATA_DIR", ""),
            ("GLOSSA_ATOMIC_WRITES", "maybe"),
        ]));

        assert_eq!(config.storage.data_dir, PathBuf::from("word_source"));
        assert!(config.storage.atomic_writes);
    }

    #[test]
    fn test_partial_json_falls_back_to_defaults() {
        let config: Config =
            serde_json::from_str(r#"{ "storage": { "data_dir": "dict" } }"#).unwrap();

        assert_eq!(config.storage.data_dir, PathBuf::from("dict"));
        assert!(config.storage.atomic_writes);
        assert_eq!(config.logging.filter, "info");
    }
}
