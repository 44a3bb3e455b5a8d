//! Whiteboard-Style Web Resource Registrar Library
//!
//! Registers a bounded set of named web resources — an HTTP context, a
//! path mapping, and an endpoint — with an external registry, tracks the
//! opaque handles the registry returns, and guarantees idempotent,
//! best-effort teardown.

pub mod config;
pub mod lifecycle;
pub mod registry;
pub mod web;

pub use config::RegistrarConfig;
pub use lifecycle::{Registrar, Shutdown};
pub use registry::{LocalRegistry, Registry};
