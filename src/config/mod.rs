//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → RegistrarConfig (validated, immutable)
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; it is set once at startup
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use validation::{validate_config, ValidationError};
pub use schema::{
    ContextConfig, ContextMode, EndpointConfig, ListenerConfig, MappingConfig, RegistrarConfig,
    SecurityConfig,
};
