//! Registry error definitions.

use thiserror::Error;

/// Errors that can occur while registering a resource.
#[derive(Debug, Error)]
pub enum RegistrationError {
    /// The descriptor failed the registry's integrity checks.
    #[error("invalid descriptor: {0}")]
    InvalidDescriptor(String),

    /// The registry could not service the request.
    #[error("registry unavailable: {0}")]
    Unavailable(String),

    /// The lifecycle already holds active handles.
    ///
    /// Registering on top of them would make a handle double-active.
    #[error("registrar already started; stop() before starting again")]
    AlreadyStarted,
}

/// Errors that can occur while unregistering a resource.
#[derive(Debug, Error)]
pub enum UnregistrationError {
    /// The handle is not known to the registry.
    #[error("unknown handle: {0}")]
    UnknownHandle(uuid::Uuid),

    /// The registry could not service the request.
    #[error("registry unavailable: {0}")]
    Unavailable(String),
}
