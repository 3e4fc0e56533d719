//! Configuration parsing
//!
//! Supports TOML (primary) and JSON (optional) formats.

use contracts::{AnchorError, SinkOptions};

/// Configuration file format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// TOML format (recommended)
    Toml,
    /// JSON format
    Json,
}

impl ConfigFormat {
    /// Infer format from a file extension
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "toml" => Some(Self::Toml),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Parse TOML-format options
pub fn parse_toml(content: &str) -> Result<SinkOptions, AnchorError> {
    toml::from_str(content)
        .map_err(|e| AnchorError::config_parse(format!("TOML parse error: {e}")))
}

/// Parse JSON-format options
pub fn parse_json(content: &str) -> Result<SinkOptions, AnchorError> {
    serde_json::from_str(content)
        .map_err(|e| AnchorError::config_parse(format!("JSON parse error: {e}")))
}

/// Parse options in the given format
pub fn parse(content: &str, format: ConfigFormat) -> Result<SinkOptions, AnchorError> {
    match format {
        ConfigFormat::Toml => parse_toml(content),
        ConfigFormat::Json => parse_json(content),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_toml_minimal() {
        let options = parse_toml("debounce_ms = 10\nmetrics_port = 9100").unwrap();
        assert_eq!(options.debounce_ms, 10);
        assert_eq!(options.metrics_port, Some(9100));
    }

    #[test]
    fn test_parse_toml_syntax_error() {
        let result = parse_toml("invalid toml [[[");
        assert!(result.is_err());
        assert!(matches!(
            result.unwrap_err(),
            AnchorError::ConfigParse { .. }
        ));
    }

    #[test]
    fn test_parse_json_minimal() {
        let options = parse_json(r#"{ "debounce_ms": 10 }"#).unwrap();
        assert_eq!(options.debounce_ms, 10);
    }

    #[test]
    fn test_format_from_extension() {
        assert_eq!(
            ConfigFormat::from_extension("toml"),
            Some(ConfigFormat::Toml)
        );
        assert_eq!(
            ConfigFormat::from_extension("TOML"),
            Some(ConfigFormat::Toml)
        );
        assert_eq!(
            ConfigFormat::from_extension("json"),
            Some(ConfigFormat::Json)
        );
        assert_eq!(ConfigFormat::from_extension("yaml"), None);
    }
}
