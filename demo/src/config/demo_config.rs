use config_loader::ConfigError;
use json_codec::impl_json;
use std::path::Path;

use crate::config::LoggingConfig;

/// Name searched for by [`DemoConfig::find`].
pub const CONFIG_FILE_NAME: &str = "json-demo.json";

/// json-demo configuration
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DemoConfig {
    /// Reject unknown escapes and malformed `null` literals.
    pub strict: bool,
    /// Escape quotes and control characters when writing strings.
    pub escape_strings: bool,
    pub logging: LoggingConfig,
}

impl_json! {
    DemoConfig {
        strict: bool,
        escape_strings: bool,
        logging: LoggingConfig,
    }
}

impl DemoConfig {
    /// Load configuration from a JSON file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        config_loader::load_json_config(path)
    }

    /// Load `json-demo.json` from the locations `config_loader` searches
    pub fn find() -> Result<Self, ConfigError> {
        let path = config_loader::find_config_file(CONFIG_FILE_NAME)?;
        Self::load_from_file(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use json_codec::{from_str, serialize};
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config: DemoConfig =
            from_str(r#"{"strict": true, "logging": {"log_level": "debug"}}"#).unwrap();

        assert!(config.strict);
        assert!(!config.escape_strings);
        assert_eq!(config.logging.log_level, "debug");
        assert_eq!(config.logging.log_file_path, "json-demo.log");
        assert!(!config.logging.enable_file);
        assert!(config.logging.enable_console);
    }

    #[test]
    fn test_config_serializes_in_field_order() {
        let json = serialize(&DemoConfig::default());
        assert_eq!(
            json,
            r#"{"strict":false,"escape_strings":false,"logging":{"log_file_path":"json-demo.log","log_level":"info","enable_console":true,"enable_file":false}}"#
        );
        assert_eq!(from_str::<DemoConfig>(&json).unwrap(), DemoConfig::default());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, r#"{ "escape_strings": true }"#).unwrap();

        let config = DemoConfig::load_from_file(&path).unwrap();
        assert!(config.escape_strings);
        assert_eq!(config.logging, LoggingConfig::default());
    }

    #[test]
    fn test_load_from_file_errors() {
        let dir = tempdir().unwrap();
        assert!(matches!(
            DemoConfig::load_from_file(dir.path().join("missing.json")),
            Err(ConfigError::FileNotFound(_))
        ));

        let path = dir.path().join("bad.json");
        fs::write(&path, r#"{ "strict": "yes" }"#).unwrap();
        assert!(matches!(
            DemoConfig::load_from_file(&path),
            Err(ConfigError::Parse(_))
        ));
    }
}
