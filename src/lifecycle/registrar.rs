//! Registration lifecycle.
//!
//! # Responsibilities
//! - Register context, mapping, and endpoint in dependency order
//! - Own the handle slots; store each handle before the next attempt
//! - Best-effort, idempotent teardown
//!
//! # State machine per handle slot
//! ```text
//! absent → register() → active → unregister() → absent (terminal)
//! ```
//! Unregister on an absent slot is a no-op.

use std::sync::Arc;

use crate::config::RegistrarConfig;
use crate::lifecycle::plan::registration_plan;
use crate::registry::{
    RegistrationError, RegistrationHandle, Registry, ResourceDescriptor, ResourceKind,
    UnregistrationError,
};

/// Outcome of a teardown pass.
///
/// Teardown never fails fast; every failure is recorded here so the
/// caller is informed while remaining handles are still processed.
#[derive(Debug, Default)]
pub struct TeardownReport {
    /// Handles successfully released.
    pub released: usize,
    /// Per-resource unregistration failures.
    pub failures: Vec<(ResourceKind, UnregistrationError)>,
}

impl TeardownReport {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Owns the registration handles for one activation cycle.
///
/// `start` and `stop` are invoked sequentially by the host; `&mut self`
/// enforces that no two calls overlap on the same instance.
pub struct Registrar {
    registry: Arc<dyn Registry>,
    context: Option<RegistrationHandle>,
    mapping: Option<RegistrationHandle>,
    endpoint: Option<RegistrationHandle>,
}

impl Registrar {
    pub fn new(registry: Arc<dyn Registry>) -> Self {
        Self {
            registry,
            context: None,
            mapping: None,
            endpoint: None,
        }
    }

    /// Register all resources in dependency order.
    ///
    /// On failure the already-registered handles stay active — there is
    /// no rollback; the caller must invoke [`Registrar::stop`] to
    /// release them.
    pub fn start(&mut self, config: &RegistrarConfig) -> Result<(), RegistrationError> {
        if self.active_handles() > 0 {
            return Err(RegistrationError::AlreadyStarted);
        }

        let [context, mapping, endpoint] = registration_plan(config);

        self.context = Some(self.register_one(&context)?);
        self.mapping = Some(self.register_one(&mapping)?);
        self.endpoint = Some(self.register_one(&endpoint)?);

        tracing::info!(mode = %config.mode, "Registrar started");
        Ok(())
    }

    fn register_one(
        &self,
        descriptor: &ResourceDescriptor,
    ) -> Result<RegistrationHandle, RegistrationError> {
        let handle = self.registry.register(descriptor)?;
        metrics::counter!(
            "registrar_registrations_total",
            "kind" => descriptor.kind().as_str()
        )
        .increment(1);
        tracing::info!(
            handle = %handle,
            name = %descriptor.name(),
            "Resource registered"
        );
        Ok(handle)
    }

    /// Release every active handle, best-effort.
    ///
    /// Idempotent: absent slots are skipped, so calling this twice in
    /// succession performs no duplicate unregister calls. A failure on
    /// one handle does not abort the others.
    pub fn stop(&mut self) -> TeardownReport {
        let registry = Arc::clone(&self.registry);
        let mut report = TeardownReport::default();

        for slot in [&mut self.context, &mut self.mapping, &mut self.endpoint] {
            let Some(handle) = slot.take() else {
                continue;
            };
            match registry.unregister(&handle) {
                Ok(()) => {
                    metrics::counter!(
                        "registrar_unregistrations_total",
                        "kind" => handle.kind().as_str()
                    )
                    .increment(1);
                    tracing::info!(handle = %handle, "Resource unregistered");
                    report.released += 1;
                }
                Err(err) => {
                    metrics::counter!(
                        "registrar_teardown_failures_total",
                        "kind" => handle.kind().as_str()
                    )
                    .increment(1);
                    tracing::warn!(
                        handle = %handle,
                        error = %err,
                        "Unregistration failed; continuing teardown"
                    );
                    report.failures.push((handle.kind(), err));
                }
            }
        }

        tracing::info!(
            released = report.released,
            failures = report.failures.len(),
            "Registrar stopped"
        );
        report
    }

    /// Number of handles currently active.
    pub fn active_handles(&self) -> usize {
        [&self.context, &self.mapping, &self.endpoint]
            .into_iter()
            .filter(|slot| slot.is_some())
            .count()
    }
}
