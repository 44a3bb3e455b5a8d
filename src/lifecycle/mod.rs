//! Registration lifecycle subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (registrar.rs):
//!     Settings → plan.rs (build descriptors) → register in dependency
//!     order (context → mapping → endpoint) → store handles
//!
//! Teardown (registrar.rs):
//!     Take each slot → unregister → record failures → report
//!
//! Shutdown (shutdown.rs):
//!     ctrl-c → broadcast → host stops accepting → registrar.stop()
//! ```
//!
//! # Design Decisions
//! - Ordered startup: a mapping or endpoint never registers before its
//!   context
//! - Teardown is best-effort and order-independent; resources are
//!   independent once registered
//! - No rollback on partial startup failure; the caller invokes stop()

pub mod plan;
pub mod registrar;
pub mod shutdown;

pub use registrar::{Registrar, TeardownReport};
pub use shutdown::Shutdown;
