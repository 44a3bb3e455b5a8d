//! Registration planning.
//!
//! # Responsibilities
//! - Build the three resource descriptors from validated settings
//! - Encode the context-mode property layout in one place
//!
//! # Design Decisions
//! - Pure function: settings in, descriptors out, no side effects
//! - Deterministic: identical settings yield structurally identical
//!   descriptors
//! - Array order is the registration dependency order

use crate::config::{ContextMode, RegistrarConfig};
use crate::registry::descriptor::{
    keys, ResourceDescriptor, ResourceDescriptorBuilder, ResourceKind,
};

/// Build the descriptors to register, in dependency order:
/// context, then mapping, then endpoint.
pub fn registration_plan(config: &RegistrarConfig) -> [ResourceDescriptor; 3] {
    [
        context_descriptor(config),
        mapping_descriptor(config),
        endpoint_descriptor(config),
    ]
}

fn context_descriptor(config: &RegistrarConfig) -> ResourceDescriptor {
    let builder = ResourceDescriptor::builder(ResourceKind::Context, &config.context.id);
    match config.mode {
        ContextMode::Direct => builder
            .property(keys::CONTEXT_ID, &config.context.id)
            .property(keys::CONTEXT_PATH, &config.context.path),
        ContextMode::Whiteboard => builder
            .property(keys::WHITEBOARD_CONTEXT_NAME, &config.context.id)
            .property(keys::WHITEBOARD_CONTEXT_PATH, &config.context.path),
    }
    .build()
}

fn mapping_descriptor(config: &RegistrarConfig) -> ResourceDescriptor {
    let name = format!("{}-jsp", config.context.id);
    let builder = ResourceDescriptor::builder(ResourceKind::Mapping, name)
        .property(keys::MAPPING_PAGE, &config.mapping.page);
    with_context_reference(builder, config).build()
}

fn endpoint_descriptor(config: &RegistrarConfig) -> ResourceDescriptor {
    let builder = ResourceDescriptor::builder(ResourceKind::Endpoint, &config.endpoint.name)
        .property(keys::ENDPOINT_PATTERN, &config.endpoint.pattern)
        .property(keys::ENDPOINT_NAME, &config.endpoint.name);
    with_context_reference(builder, config).build()
}

/// Dependent resources reference their context directly by id, or via a
/// whiteboard select filter.
fn with_context_reference(
    builder: ResourceDescriptorBuilder,
    config: &RegistrarConfig,
) -> ResourceDescriptorBuilder {
    match config.mode {
        ContextMode::Direct => builder.property(keys::CONTEXT_ID, &config.context.id),
        ContextMode::Whiteboard => builder.property(
            keys::WHITEBOARD_CONTEXT_SELECT,
            format!("({}={})", keys::WHITEBOARD_CONTEXT_NAME, config.context.id),
        ),
    }
}
