//! # Config Loader
//!
//! Configuration loading and parsing module.
//!
//! Responsibilities:
//! - Parse TOML/JSON configuration files
//! - Validate configuration legality
//! - Produce [`SinkOptions`]
//!
//! # Example
//!
//! ```no_run
//! use config_loader::ConfigLoader;
//! use std::path::Path;
//!
//! let options = ConfigLoader::load_from_path(Path::new("sink.toml")).unwrap();
//! println!("Debounce: {}ms", options.debounce_ms);
//! ```

mod parser;
mod validator;

pub use contracts::SinkOptions;
pub use parser::ConfigFormat;

use contracts::AnchorError;
use std::path::Path;

/// Configuration loader
///
/// Provides static methods to load sink options from files or strings.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load options from a file path
    ///
    /// Automatically detects format from file extension (.toml / .json).
    ///
    /// # Errors
    /// - File read failure
    /// - Unsupported format
    /// - Parse failure
    /// - Validation failure
    pub fn load_from_path(path: &Path) -> Result<SinkOptions, AnchorError> {
        let format = Self::detect_format(path)?;
        let content = Self::read_file(path)?;
        Self::load_from_str(&content, format)
    }

    /// Load options from a string
    ///
    /// # Errors
    /// - Parse failure
    /// - Validation failure
    pub fn load_from_str(content: &str, format: ConfigFormat) -> Result<SinkOptions, AnchorError> {
        let options = parser::parse(content, format)?;
        validator::validate(&options)?;
        Ok(options)
    }

    /// Serialize options to a TOML string
    pub fn to_toml(options: &SinkOptions) -> Result<String, AnchorError> {
        toml::to_string_pretty(options)
            .map_err(|e| AnchorError::config_parse(format!("TOML serialize error: {e}")))
    }

    /// Serialize options to a JSON string
    pub fn to_json(options: &SinkOptions) -> Result<String, AnchorError> {
        serde_json::to_string_pretty(options)
            .map_err(|e| AnchorError::config_parse(format!("JSON serialize error: {e}")))
    }
}

impl ConfigLoader {
    /// Infer configuration format from file extension
    fn detect_format(path: &Path) -> Result<ConfigFormat, AnchorError> {
        let ext = path.extension().and_then(|e| e.to_str()).ok_or_else(|| {
            AnchorError::config_parse("cannot determine file format from extension")
        })?;

        ConfigFormat::from_extension(ext)
            .ok_or_else(|| AnchorError::config_parse(format!("unsupported config format: .{ext}")))
    }

    /// Read configuration file content
    fn read_file(path: &Path) -> Result<String, AnchorError> {
        std::fs::read_to_string(path)
            .map_err(|e| AnchorError::config_parse(format!("cannot read {}: {e}", path.display())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_from_str_toml() {
        let options =
            ConfigLoader::load_from_str("debounce_ms = 250", ConfigFormat::Toml).unwrap();
        assert_eq!(options.debounce_ms, 250);
        assert_eq!(options.metrics_port, None);
    }

    #[test]
    fn test_load_from_str_json() {
        let options = ConfigLoader::load_from_str(
            r#"{ "debounce_ms": 50, "metrics_port": 9000 }"#,
            ConfigFormat::Json,
        )
        .unwrap();
        assert_eq!(options.debounce_ms, 50);
        assert_eq!(options.metrics_port, Some(9000));
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let options = ConfigLoader::load_from_str("", ConfigFormat::Toml).unwrap();
        assert_eq!(options.debounce_ms, 100);
    }

    #[test]
    fn test_round_trip_toml() {
        let options = ConfigLoader::load_from_str("debounce_ms = 42", ConfigFormat::Toml).unwrap();
        let serialized = ConfigLoader::to_toml(&options).unwrap();
        let reloaded = ConfigLoader::load_from_str(&serialized, ConfigFormat::Toml).unwrap();
        assert_eq!(options.debounce_ms, reloaded.debounce_ms);
    }

    #[test]
    fn test_round_trip_json() {
        let options = ConfigLoader::load_from_str(
            r#"{ "debounce_ms": 7, "metrics_port": 9100 }"#,
            ConfigFormat::Json,
        )
        .unwrap();
        let serialized = ConfigLoader::to_json(&options).unwrap();
        let reloaded = ConfigLoader::load_from_str(&serialized, ConfigFormat::Json).unwrap();
        assert_eq!(reloaded.debounce_ms, 7);
        assert_eq!(reloaded.metrics_port, Some(9100));
    }

    #[test]
    fn test_validation_runs_after_parse() {
        let result = ConfigLoader::load_from_str("debounce_ms = 9999999", ConfigFormat::Toml);
        assert!(result.is_err());
    }
}
