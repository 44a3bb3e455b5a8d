//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate path shapes and required fields
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Validation is a pure function: RegistrarConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use crate::config::schema::RegistrarConfig;

/// A single semantic validation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is empty.
    EmptyField(&'static str),
    /// A path field does not start with '/'.
    InvalidPath { field: &'static str, value: String },
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::EmptyField(field) => write!(f, "{} must not be empty", field),
            ValidationError::InvalidPath { field, value } => {
                write!(f, "{} must start with '/', got '{}'", field, value)
            }
        }
    }
}

/// Validate a configuration, collecting every error.
pub fn validate_config(config: &RegistrarConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.context.id.is_empty() {
        errors.push(ValidationError::EmptyField("context.id"));
    }
    if !config.context.path.starts_with('/') {
        errors.push(ValidationError::InvalidPath {
            field: "context.path",
            value: config.context.path.clone(),
        });
    }
    if config.endpoint.name.is_empty() {
        errors.push(ValidationError::EmptyField("endpoint.name"));
    }
    if !config.endpoint.pattern.starts_with('/') {
        errors.push(ValidationError::InvalidPath {
            field: "endpoint.pattern",
            value: config.endpoint.pattern.clone(),
        });
    }
    if config.mapping.page.is_empty() {
        errors.push(ValidationError::EmptyField("mapping.page"));
    }
    if config.security.enabled && config.security.token.is_empty() {
        errors.push(ValidationError::EmptyField("security.token"));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&RegistrarConfig::default()).is_ok());
    }

    #[test]
    fn test_all_errors_are_collected() {
        let mut config = RegistrarConfig::default();
        config.context.id = String::new();
        config.context.path = "sample".to_string();
        config.endpoint.pattern = "index".to_string();

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 3);
        assert!(errors.contains(&ValidationError::EmptyField("context.id")));
    }

    #[test]
    fn test_enabled_security_requires_token() {
        let mut config = RegistrarConfig::default();
        config.security.enabled = true;
        config.security.token = String::new();

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors, vec![ValidationError::EmptyField("security.token")]);
    }
}
