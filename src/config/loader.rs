//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::RegistrarConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", format_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn format_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<RegistrarConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: RegistrarConfig = toml::from_str(&content)?;

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::ContextMode;

    #[test]
    fn test_minimal_toml_parses_with_defaults() {
        let config: RegistrarConfig = toml::from_str("").unwrap();
        assert_eq!(config.mode, ContextMode::Direct);
        assert_eq!(config.context.id, "sample");
    }

    #[test]
    fn test_mode_parses_from_snake_case() {
        let config: RegistrarConfig = toml::from_str("mode = \"whiteboard\"").unwrap();
        assert_eq!(config.mode, ContextMode::Whiteboard);
    }
}
