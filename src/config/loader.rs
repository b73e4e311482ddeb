//! Configuration loader

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;

use crate::error::{BiasLensError, ConfigError};

use super::{CustomRulesConfig, RuleConfig};

/// Name of the configuration file looked up in the working directory
pub const CONFIG_FILENAME: &str = ".biaslens.toml";

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Built-in rule overrides, keyed by rule id
    #[serde(default)]
    pub rules: BTreeMap<String, RuleConfig>,

    /// User-defined rules
    #[serde(default)]
    pub custom: CustomRulesConfig,

    /// Advice overrides, keyed by category name
    #[serde(default)]
    pub suggestions: HashMap<String, String>,
}

impl Config {
    /// Load configuration from an explicit path, or from the working
    /// directory when no path is given
    pub fn load(path: Option<&Path>) -> Result<Self, BiasLensError> {
        match path {
            Some(path) => Self::load_from_file(path),
            None => Self::load_or_default(),
        }
    }

    /// Load configuration from file or return default
    pub fn load_or_default() -> Result<Self, BiasLensError> {
        let config_path = Path::new(CONFIG_FILENAME);

        if config_path.exists() {
            Self::load_from_file(config_path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file
    pub fn load_from_file(path: &Path) -> Result<Self, BiasLensError> {
        let content = fs::read_to_string(path).map_err(|e| {
            BiasLensError::Config(ConfigError::FileRead {
                path: path.display().to_string(),
                source: e,
            })
        })?;

        toml::from_str(&content).map_err(Into::into)
    }

    /// Serialize configuration to TOML
    pub fn to_toml(&self) -> Result<String, BiasLensError> {
        toml::to_string_pretty(self).map_err(Into::into)
    }

    /// Check if a built-in rule is enabled
    pub fn is_rule_enabled(&self, rule_id: &str) -> bool {
        self.rules.get(rule_id).map(|r| r.enabled).unwrap_or(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.rules.is_empty());
        assert!(config.custom.rules.is_empty());
        assert!(config.suggestions.is_empty());
        assert!(config.is_rule_enabled("GEN001"));
    }

    #[test]
    fn test_rule_overrides_parsing() {
        let toml_content = r#"
[rules.GEN002]
enabled = false

[rules.AGE001]
"#;
        let config: Config = toml::from_str(toml_content).unwrap();
        assert!(!config.is_rule_enabled("GEN002"));
        assert!(config.is_rule_enabled("AGE001"));
        assert!(config.is_rule_enabled("RAC001"));
    }

    #[test]
    fn test_custom_rules_config_parsing() {
        let toml_content = r#"
[custom.chairman]
pattern = "\\bchairman\\b"
category = "gender"
label = "gendered job title"

[custom.guys]
pattern = "hey guys"
"#;
        let config: Config = toml::from_str(toml_content).unwrap();
        assert_eq!(config.custom.rules.len(), 2);

        let rule = config.custom.rules.get("chairman").unwrap();
        assert_eq!(rule.pattern, r"\bchairman\b");
        assert_eq!(rule.category, "gender");
        assert_eq!(rule.label.as_deref(), Some("gendered job title"));

        let rule = config.custom.rules.get("guys").unwrap();
        assert_eq!(rule.category, "custom");
        assert!(rule.label.is_none());
    }

    #[test]
    fn test_suggestions_parsing() {
        let toml_content = r#"
[suggestions]
custom = "Follow the house style guide."
"#;
        let config: Config = toml::from_str(toml_content).unwrap();
        assert_eq!(
            config.suggestions.get("custom").map(String::as_str),
            Some("Follow the house style guide.")
        );
    }

    #[test]
    fn test_load_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("biaslens.toml");
        fs::write(&path, "[rules.SOC001]\nenabled = false\n").unwrap();

        let config = Config::load(Some(path.as_path())).unwrap();
        assert!(!config.is_rule_enabled("SOC001"));
    }

    #[test]
    fn test_load_missing_file_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing.toml");

        let err = Config::load_from_file(&path).unwrap_err();
        assert!(matches!(
            err,
            BiasLensError::Config(ConfigError::FileRead { .. })
        ));
    }

    #[test]
    fn test_load_invalid_toml_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("broken.toml");
        fs::write(&path, "[custom.x\npattern = ").unwrap();

        let err = Config::load_from_file(&path).unwrap_err();
        assert!(matches!(err, BiasLensError::Config(ConfigError::Parse(_))));
    }

    #[test]
    fn test_to_toml_roundtrip() {
        let mut config = Config::default();
        config
            .rules
            .insert("GEN001".to_string(), RuleConfig { enabled: false });
        config
            .suggestions
            .insert("age".to_string(), "Drop the age reference.".to_string());

        let rendered = config.to_toml().unwrap();
        let parsed: Config = toml::from_str(&rendered).unwrap();

        assert!(!parsed.is_rule_enabled("GEN001"));
        assert_eq!(
            parsed.suggestions.get("age").map(String::as_str),
            Some("Drop the age reference.")
        );
    }
}
