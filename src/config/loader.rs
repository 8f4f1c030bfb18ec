//! Configuration loading from disk.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use thiserror::Error;

use crate::config::schema::ServiceConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(std::io::Error),

    #[error("Parse error: {0}")]
    Parse(toml::de::Error),

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<ServiceConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(ConfigError::Io)?;
    parse_config(&content)
}

/// Like [`load_config`], but a missing file yields the (validated) defaults.
pub fn load_or_default(path: &Path) -> Result<ServiceConfig, ConfigError> {
    match fs::read_to_string(path) {
        Ok(content) => parse_config(&content),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            let config = ServiceConfig::default();
            validate_config(&config).map_err(ConfigError::Validation)?;
            Ok(config)
        }
        Err(e) => Err(ConfigError::Io(e)),
    }
}

/// Parse and validate configuration text.
pub fn parse_config(content: &str) -> Result<ServiceConfig, ConfigError> {
    let config: ServiceConfig = toml::from_str(content).map_err(ConfigError::Parse)?;

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let config = load_or_default(Path::new("does-not-exist.toml")).unwrap();
        assert_eq!(config.listener.bind_address, "0.0.0.0:8080");
    }

    #[test]
    fn test_missing_file_is_error_for_strict_load() {
        assert!(matches!(
            load_config(Path::new("does-not-exist.toml")),
            Err(ConfigError::Io(_))
        ));
    }

    #[test]
    fn test_parse_error() {
        assert!(matches!(
            parse_config("[listener\nbind_address = 1"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_invalid_values_rejected() {
        let err = parse_config("[timeouts]\nrequest_secs = 0").unwrap_err();
        match err {
            ConfigError::Validation(errors) => assert_eq!(errors.len(), 1),
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_validation_message_lists_every_field() {
        let err = parse_config("[timeouts]\nrequest_secs = 0\n[database]\nmax_connections = 0")
            .unwrap_err();
        let message = err.to_string();
        assert!(message.starts_with("Validation failed: "));
        assert!(message.contains("timeouts.request_secs"));
        assert!(message.contains("database.max_connections"));
        assert!(message.contains(", "));
    }

    #[test]
    fn test_load_from_file() {
        let path = "test_product_service_config.toml";
        std::fs::write(path, "[listener]\nbind_address = \"127.0.0.1:9999\"\n").unwrap();

        let config = load_config(Path::new(path)).unwrap();
        assert_eq!(config.listener.bind_address, "127.0.0.1:9999");

        // Cleanup
        std::fs::remove_file(path).unwrap_or_default();
    }
}
