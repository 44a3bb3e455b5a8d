//! Registration handles.

use uuid::Uuid;

use crate::registry::descriptor::ResourceKind;

/// Opaque token representing an active registration.
///
/// Issued by a registry on register and used only for later
/// unregistration. A handle is either held in a lifecycle slot (active)
/// or has been taken for unregistration (absent); it is never
/// double-active.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RegistrationHandle {
    id: Uuid,
    kind: ResourceKind,
}

impl RegistrationHandle {
    /// Issue a fresh handle for a resource of the given kind.
    ///
    /// Called by registry implementations, not by lifecycle code.
    pub fn issue(kind: ResourceKind) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn kind(&self) -> ResourceKind {
        self.kind
    }
}

impl std::fmt::Display for RegistrationHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.kind, self.id)
    }
}
