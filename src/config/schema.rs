//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the
//! registrar. All types derive Serde traits for deserialization from
//! config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the registrar.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct RegistrarConfig {
    /// How dependent resources reference their context.
    pub mode: ContextMode,

    /// HTTP context settings.
    pub context: ContextConfig,

    /// Path mapping settings.
    pub mapping: MappingConfig,

    /// Endpoint settings.
    pub endpoint: EndpointConfig,

    /// Security wrapping settings.
    pub security: SecurityConfig,

    /// Demo listener settings.
    pub listener: ListenerConfig,
}

/// How dependent resources reference their context.
///
/// A single enum rather than independent toggles, so only the two
/// meaningful configurations exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ContextMode {
    /// Reference the context directly by id.
    #[default]
    Direct,
    /// Reference the context through a whiteboard select filter.
    Whiteboard,
}

impl std::fmt::Display for ContextMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContextMode::Direct => f.write_str("direct"),
            ContextMode::Whiteboard => f.write_str("whiteboard"),
        }
    }
}

/// HTTP context settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ContextConfig {
    /// Context identifier.
    pub id: String,

    /// Context path prefix.
    pub path: String,
}

impl Default for ContextConfig {
    fn default() -> Self {
        Self {
            id: "sample".to_string(),
            path: "/sample".to_string(),
        }
    }
}

/// Path mapping settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct MappingConfig {
    /// Page the mapping targets within the context.
    pub page: String,
}

impl Default for MappingConfig {
    fn default() -> Self {
        Self {
            page: "index.html".to_string(),
        }
    }
}

/// Endpoint settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct EndpointConfig {
    /// Endpoint name; also the handler binding key.
    pub name: String,

    /// Exact request path the endpoint answers.
    pub pattern: String,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            name: "index".to_string(),
            pattern: "/index".to_string(),
        }
    }
}

/// Security wrapping settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SecurityConfig {
    /// Wrap the context with a token-checking policy.
    pub enabled: bool,

    /// Header carrying the token.
    pub header: String,

    /// Expected token value.
    pub token: String,
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            header: "x-api-key".to_string(),
            token: String::new(),
        }
    }
}

/// Demo listener settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "127.0.0.1:8080").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1:8080".to_string(),
        }
    }
}
