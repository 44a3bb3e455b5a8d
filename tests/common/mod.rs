//! Shared fixtures for integration tests.

use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use uuid::Uuid;
use whiteboard_registrar::registry::{
    RegistrationError, RegistrationHandle, Registry, ResourceDescriptor, ResourceKind,
    UnregistrationError,
};

/// Scripted registry recording every call, with optional failure points.
#[derive(Default)]
pub struct ScriptedRegistry {
    register_calls: AtomicUsize,
    unregister_calls: AtomicUsize,
    /// Zero-based index of the register call that should fail.
    fail_register_at: Option<usize>,
    /// Kinds whose unregistration should fail.
    fail_unregister_kinds: Vec<ResourceKind>,
    active: Mutex<HashSet<Uuid>>,
}

#[allow(dead_code)]
impl ScriptedRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_register_at(call: usize) -> Self {
        Self {
            fail_register_at: Some(call),
            ..Default::default()
        }
    }

    pub fn failing_unregister(kinds: &[ResourceKind]) -> Self {
        Self {
            fail_unregister_kinds: kinds.to_vec(),
            ..Default::default()
        }
    }

    pub fn register_calls(&self) -> usize {
        self.register_calls.load(Ordering::SeqCst)
    }

    pub fn unregister_calls(&self) -> usize {
        self.unregister_calls.load(Ordering::SeqCst)
    }

    pub fn active_count(&self) -> usize {
        self.active.lock().unwrap().len()
    }
}

impl Registry for ScriptedRegistry {
    fn register(
        &self,
        descriptor: &ResourceDescriptor,
    ) -> Result<RegistrationHandle, RegistrationError> {
        let call = self.register_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_register_at == Some(call) {
            return Err(RegistrationError::Unavailable(format!(
                "scripted failure at register call {call}"
            )));
        }
        let handle = RegistrationHandle::issue(descriptor.kind());
        self.active.lock().unwrap().insert(handle.id());
        Ok(handle)
    }

    fn unregister(&self, handle: &RegistrationHandle) -> Result<(), UnregistrationError> {
        self.unregister_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_unregister_kinds.contains(&handle.kind()) {
            return Err(UnregistrationError::Unavailable(
                "scripted unregister failure".into(),
            ));
        }
        if self.active.lock().unwrap().remove(&handle.id()) {
            Ok(())
        } else {
            Err(UnregistrationError::UnknownHandle(handle.id()))
        }
    }
}
