//! In-process registry.
//!
//! # Responsibilities
//! - Accept descriptors and issue handles
//! - Validate descriptor integrity at registration time
//! - Track provider bindings (contexts, handlers) referenced by name
//! - Dispatch a request to a registered endpoint (demo surface)
//!
//! # Design Decisions
//! - Handle table is a DashMap so the registry can be shared via Arc
//!   across server tasks without an outer lock
//! - Dispatch is exact-pattern only; whiteboard matching semantics are a
//!   different system's job
//! - Provider bindings are keyed by descriptor name, so a descriptor for
//!   an unbound provider is rejected up front instead of failing at
//!   request time

use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    response::{IntoResponse, Response},
};
use dashmap::DashMap;
use uuid::Uuid;

use crate::registry::{
    descriptor::{keys, ResourceDescriptor, ResourceKind},
    error::{RegistrationError, UnregistrationError},
    handle::RegistrationHandle,
    Registry,
};
use crate::web::{context::HttpContext, handler::RequestHandler};

/// In-process registry for tests and the demo host.
#[derive(Default)]
pub struct LocalRegistry {
    /// Active registrations by handle id.
    entries: DashMap<Uuid, ResourceDescriptor>,
    /// Context providers by descriptor name.
    contexts: DashMap<String, Arc<dyn HttpContext>>,
    /// Request handlers by descriptor name.
    handlers: DashMap<String, Arc<dyn RequestHandler>>,
}

impl LocalRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a context provider under the name its descriptor will carry.
    pub fn bind_context(&self, name: impl Into<String>, context: Arc<dyn HttpContext>) {
        self.contexts.insert(name.into(), context);
    }

    /// Bind a request handler under the name its descriptor will carry.
    pub fn bind_handler(&self, name: impl Into<String>, handler: Arc<dyn RequestHandler>) {
        self.handlers.insert(name.into(), handler);
    }

    /// Number of currently active registrations.
    pub fn active_registrations(&self) -> usize {
        self.entries.len()
    }

    /// Route a request to the matching registered endpoint.
    ///
    /// Exact pattern match only. The bound context's security check runs
    /// before the handler; a denial short-circuits with 403.
    pub fn dispatch(&self, req: Request<Body>) -> Response {
        let path = req.uri().path().to_string();

        // Clone out of the map so no shard guard is held across the
        // second lookup below.
        let endpoint = self
            .entries
            .iter()
            .find(|entry| {
                entry.value().kind() == ResourceKind::Endpoint
                    && entry.value().property(keys::ENDPOINT_PATTERN) == Some(path.as_str())
            })
            .map(|entry| entry.value().clone());
        let Some(endpoint) = endpoint else {
            tracing::debug!(path = %path, "No endpoint registered for path");
            return StatusCode::NOT_FOUND.into_response();
        };

        let handler = self
            .handlers
            .get(endpoint.name())
            .map(|entry| entry.value().clone());
        let Some(handler) = handler else {
            // Bindings are validated at registration, so this means the
            // handler was unbound while the registration stayed active.
            tracing::warn!(endpoint = %endpoint.name(), "Handler binding missing");
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        };

        if let Some(context) = self.active_context() {
            if !context.handle_security(&req) {
                tracing::debug!(path = %path, "Security check denied request");
                return StatusCode::FORBIDDEN.into_response();
            }
        }

        handler.handle(&req)
    }

    /// The context provider backing the currently active context
    /// registration, if any.
    fn active_context(&self) -> Option<Arc<dyn HttpContext>> {
        let name = self
            .entries
            .iter()
            .find(|entry| entry.value().kind() == ResourceKind::Context)
            .map(|entry| entry.value().name().to_string())?;
        self.contexts.get(&name).map(|entry| entry.value().clone())
    }

    /// Integrity checks applied before a handle is issued.
    fn validate(&self, descriptor: &ResourceDescriptor) -> Result<(), RegistrationError> {
        if descriptor.name().is_empty() {
            return Err(RegistrationError::InvalidDescriptor(
                "descriptor name is empty".into(),
            ));
        }
        match descriptor.kind() {
            ResourceKind::Context => {
                if !self.contexts.contains_key(descriptor.name()) {
                    return Err(RegistrationError::InvalidDescriptor(format!(
                        "no context bound under '{}'",
                        descriptor.name()
                    )));
                }
            }
            ResourceKind::Endpoint => {
                if !self.handlers.contains_key(descriptor.name()) {
                    return Err(RegistrationError::InvalidDescriptor(format!(
                        "no handler bound under '{}'",
                        descriptor.name()
                    )));
                }
                if descriptor.property(keys::ENDPOINT_PATTERN).is_none() {
                    return Err(RegistrationError::InvalidDescriptor(
                        "endpoint descriptor lacks a pattern".into(),
                    ));
                }
            }
            ResourceKind::Mapping => {}
        }
        Ok(())
    }
}

impl Registry for LocalRegistry {
    fn register(
        &self,
        descriptor: &ResourceDescriptor,
    ) -> Result<RegistrationHandle, RegistrationError> {
        self.validate(descriptor)?;

        let handle = RegistrationHandle::issue(descriptor.kind());
        self.entries.insert(handle.id(), descriptor.clone());

        tracing::debug!(
            handle = %handle,
            name = %descriptor.name(),
            "Resource registered"
        );
        Ok(handle)
    }

    fn unregister(&self, handle: &RegistrationHandle) -> Result<(), UnregistrationError> {
        match self.entries.remove(&handle.id()) {
            Some((_, descriptor)) => {
                tracing::debug!(
                    handle = %handle,
                    name = %descriptor.name(),
                    "Resource unregistered"
                );
                Ok(())
            }
            None => Err(UnregistrationError::UnknownHandle(handle.id())),
        }
    }
}
