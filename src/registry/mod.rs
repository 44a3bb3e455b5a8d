//! Registry subsystem.
//!
//! # Data Flow
//! ```text
//! Lifecycle start:
//!     ResourceDescriptor → Registry::register → RegistrationHandle
//!
//! Lifecycle stop:
//!     RegistrationHandle → Registry::unregister
//!
//! Demo dispatch (LocalRegistry only):
//!     Request → match endpoint pattern → context security check → handler
//! ```
//!
//! # Design Decisions
//! - Registry calls are synchronous, atomic external requests; retry and
//!   backoff belong to registry implementations, not callers
//! - Handles are opaque uuid tokens; callers only hold and return them
//! - Descriptors are immutable once built

pub mod descriptor;
pub mod error;
pub mod handle;
pub mod local;

pub use descriptor::{ResourceDescriptor, ResourceKind};
pub use error::{RegistrationError, UnregistrationError};
pub use handle::RegistrationHandle;
pub use local::LocalRegistry;

/// External registry consumed by the lifecycle.
///
/// Implementations accept resource descriptors and hand back opaque
/// handles usable later for removal.
pub trait Registry: Send + Sync {
    /// Register a resource described by `descriptor`.
    ///
    /// Fails with [`RegistrationError`] on an invalid descriptor or an
    /// unavailable registry.
    fn register(
        &self,
        descriptor: &ResourceDescriptor,
    ) -> Result<RegistrationHandle, RegistrationError>;

    /// Remove a previously registered resource.
    ///
    /// Fails with [`UnregistrationError`] if the handle is unknown to the
    /// registry.
    fn unregister(&self, handle: &RegistrationHandle) -> Result<(), UnregistrationError>;
}
