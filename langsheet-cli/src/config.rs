//! Optional TOML configuration for the CLI.
//!
//! ```toml
//! [extract]
//! format = "ts"
//! nested = true
//! commonjs = false
//! first_sheet_only = false
//!
//! [aggregate]
//! format = "ts"
//! sheet_name = "Translations"
//! ```
//!
//! Every field is optional. Command-line arguments take precedence.

use std::fs;
use std::path::Path;

use serde::Deserialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub extract: ExtractConfig,
    pub aggregate: AggregateConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExtractConfig {
    pub format: Option<String>,
    pub nested: Option<bool>,
    pub commonjs: Option<bool>,
    pub first_sheet_only: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AggregateConfig {
    pub format: Option<String>,
    pub sheet_name: Option<String>,
}

impl Config {
    /// Parse a config from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, String> {
        toml::from_str(content).map_err(|e| format!("Invalid config: {}", e))
    }

    /// Load a config file.
    pub fn load(path: &Path) -> Result<Self, String> {
        let content = fs::read_to_string(path)
            .map_err(|e| format!("Error reading config {}: {}", path.display(), e))?;
        Self::from_toml_str(&content)
    }

    /// Load the config file if one was given, otherwise use the defaults.
    pub fn load_optional(path: Option<&str>) -> Result<Self, String> {
        match path {
            Some(path) => Self::load(Path::new(path)),
            None => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let config = Config::from_toml_str(
            r#"
            [extract]
            format = "js"
            nested = true
            commonjs = true

            [aggregate]
            format = "json"
            sheet_name = "Strings"
            "#,
        )
        .unwrap();

        assert_eq!(config.extract.format.as_deref(), Some("js"));
        assert_eq!(config.extract.nested, Some(true));
        assert_eq!(config.extract.commonjs, Some(true));
        assert_eq!(config.extract.first_sheet_only, None);
        assert_eq!(config.aggregate.sheet_name.as_deref(), Some("Strings"));
    }

    #[test]
    fn test_empty_config_is_default() {
        assert_eq!(Config::from_toml_str("").unwrap(), Config::default());
    }

    #[test]
    fn test_unknown_keys_are_rejected() {
        let err = Config::from_toml_str("[extract]\nnesting = true\n").unwrap_err();
        assert!(err.starts_with("Invalid config"));
    }

    #[test]
    fn test_missing_config_file() {
        let err = Config::load_optional(Some("/definitely/not/here.toml")).unwrap_err();
        assert!(err.contains("Error reading config"));
    }
}
