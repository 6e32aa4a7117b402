use std::env;
use std::path::Path;

use serde::{Deserialize, Serialize};

use self::conjugation::ConjugationConfig;
use self::pos_display::PosDisplayConfig;

pub mod conjugation;
pub mod pos_display;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    pub conjugation: ConjugationConfig,
    pub pos_display: PosDisplayConfig,
}

impl Config {
    /// Defaults, overridden by environment variables
    pub fn new() -> Self {
        let mut config = Self::default();

        if let Some(prefer_kana_form) = env_flag("PREFER_KANA_FORM") {
            config.conjugation.prefer_kana_form = prefer_kana_form;
        }

        if let Some(shorten) = env_flag("POS_SHORTEN") {
            config.pos_display.shorten = shorten;
        }

        if let Some(prefix) = env_flag("POS_PREFIX") {
            config.pos_display.prefix = prefix;
        }

        config
    }

    /// Parse a JSON config; missing fields keep their defaults
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        tracing::info!("Loading config from file: {}", path.display());
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }
}

fn env_flag(name: &str) -> Option<bool> {
    env::var(name).ok().and_then(|v| parse_flag(&v))
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_keep_defaults() {
        let config = Config::from_json_str(r#"{"pos_display": {"prefix": true}}"#).unwrap();
        assert!(config.pos_display.prefix);
        assert!(config.pos_display.shorten);
        assert!(!config.conjugation.prefer_kana_form);
        assert!(config.conjugation.normalize_readings);
    }

    #[test]
    fn test_empty_object_is_default() {
        assert_eq!(Config::from_json_str("{}").unwrap(), Config::default());
    }

    #[test]
    fn test_rejects_malformed_json() {
        assert!(matches!(
            Config::from_json_str("{"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = Config::load_from_file(Path::new("/nonexistent/kotoba.json"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_flag_parsing() {
        assert_eq!(parse_flag("TRUE"), Some(true));
        assert_eq!(parse_flag(" off "), Some(false));
        assert_eq!(parse_flag("maybe"), None);
    }
}
