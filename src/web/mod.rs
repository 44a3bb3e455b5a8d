//! Web resource collaborators.
//!
//! # Data Flow
//! ```text
//! Incoming request (demo dispatch):
//!     → context.rs (handle_security gate)
//!     → handler.rs (named handler produces response)
//!
//! Context composition:
//!     DefaultContext → optionally wrapped by SecuredContext (security.rs)
//! ```
//!
//! # Design Decisions
//! - Security is an injectable strategy, not a conditional inside
//!   registration code
//! - Handlers are named types testable without any registration plumbing

pub mod context;
pub mod handler;
pub mod security;

pub use context::{DefaultContext, HttpContext};
pub use handler::{PageHandler, RequestHandler};
pub use security::{AllowAll, HeaderToken, SecuredContext, SecurityPolicy};
