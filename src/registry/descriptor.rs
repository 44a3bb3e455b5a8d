//! Resource descriptors.
//!
//! # Design Decisions
//! - Descriptors are immutable once built; a fresh one is constructed per
//!   registration attempt
//! - Properties use a BTreeMap so identical inputs always yield
//!   structurally identical descriptors
//! - The kind discriminates the three resource roles without the registry
//!   having to parse property names

use std::collections::BTreeMap;

/// Well-known descriptor property keys.
///
/// Direct-mode resources carry `CONTEXT_ID`/`CONTEXT_PATH`; whiteboard-mode
/// resources carry the `WHITEBOARD_*` keys and reference their context via
/// a `WHITEBOARD_CONTEXT_SELECT` filter.
pub mod keys {
    pub const CONTEXT_ID: &str = "context.id";
    pub const CONTEXT_PATH: &str = "context.path";
    pub const WHITEBOARD_CONTEXT_NAME: &str = "whiteboard.context.name";
    pub const WHITEBOARD_CONTEXT_PATH: &str = "whiteboard.context.path";
    pub const WHITEBOARD_CONTEXT_SELECT: &str = "whiteboard.context.select";
    pub const MAPPING_PAGE: &str = "mapping.page";
    pub const ENDPOINT_PATTERN: &str = "endpoint.pattern";
    pub const ENDPOINT_NAME: &str = "endpoint.name";
}

/// The role a registered resource plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    /// HTTP context: resource lookup, MIME resolution, security check.
    Context,
    /// Path mapping binding a page to a context.
    Mapping,
    /// Request endpoint served by a named handler.
    Endpoint,
}

impl ResourceKind {
    /// Stable label for logs and metrics.
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceKind::Context => "context",
            ResourceKind::Mapping => "mapping",
            ResourceKind::Endpoint => "endpoint",
        }
    }
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Immutable named configuration bundle describing a resource to register.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceDescriptor {
    kind: ResourceKind,
    name: String,
    properties: BTreeMap<String, String>,
}

impl ResourceDescriptor {
    /// Start building a descriptor of the given kind and name.
    pub fn builder(kind: ResourceKind, name: impl Into<String>) -> ResourceDescriptorBuilder {
        ResourceDescriptorBuilder {
            kind,
            name: name.into(),
            properties: BTreeMap::new(),
        }
    }

    pub fn kind(&self) -> ResourceKind {
        self.kind
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Look up a single property value.
    pub fn property(&self, key: &str) -> Option<&str> {
        self.properties.get(key).map(String::as_str)
    }

    pub fn properties(&self) -> &BTreeMap<String, String> {
        &self.properties
    }
}

/// Builder collecting key-value options before the descriptor is frozen.
#[derive(Debug)]
pub struct ResourceDescriptorBuilder {
    kind: ResourceKind,
    name: String,
    properties: BTreeMap<String, String>,
}

impl ResourceDescriptorBuilder {
    /// Add a key-value option.
    pub fn property(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }

    /// Freeze into an immutable descriptor.
    pub fn build(self) -> ResourceDescriptor {
        ResourceDescriptor {
            kind: self.kind,
            name: self.name,
            properties: self.properties,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_freezes_properties() {
        let desc = ResourceDescriptor::builder(ResourceKind::Context, "sample")
            .property("context.path", "/sample")
            .build();

        assert_eq!(desc.kind(), ResourceKind::Context);
        assert_eq!(desc.name(), "sample");
        assert_eq!(desc.property("context.path"), Some("/sample"));
        assert_eq!(desc.property("missing"), None);
    }

    #[test]
    fn test_identical_inputs_yield_identical_descriptors() {
        let build = || {
            ResourceDescriptor::builder(ResourceKind::Endpoint, "index")
                .property("endpoint.pattern", "/index")
                .property("context.id", "sample")
                .build()
        };
        assert_eq!(build(), build());
    }

    #[test]
    fn test_property_insertion_order_does_not_matter() {
        let a = ResourceDescriptor::builder(ResourceKind::Mapping, "jsp")
            .property("a", "1")
            .property("b", "2")
            .build();
        let b = ResourceDescriptor::builder(ResourceKind::Mapping, "jsp")
            .property("b", "2")
            .property("a", "1")
            .build();
        assert_eq!(a, b);
    }
}
