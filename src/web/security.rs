//! Security policies and the secured context wrapper.
//!
//! # Design Decisions
//! - The policy is injected, so security behavior is unit-testable in
//!   isolation from registration plumbing
//! - SecuredContext overrides only the security check; resource and MIME
//!   lookups delegate to the wrapped context

use std::sync::Arc;

use axum::{body::Body, http::Request};

use crate::web::context::HttpContext;

/// Strategy deciding whether a request may proceed.
pub trait SecurityPolicy: Send + Sync {
    fn allow(&self, req: &Request<Body>) -> bool;
}

/// Policy that admits every request.
pub struct AllowAll;

impl SecurityPolicy for AllowAll {
    fn allow(&self, _req: &Request<Body>) -> bool {
        true
    }
}

/// Policy requiring an exact token in a configured header.
pub struct HeaderToken {
    header: String,
    token: String,
}

impl HeaderToken {
    pub fn new(header: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            token: token.into(),
        }
    }
}

impl SecurityPolicy for HeaderToken {
    fn allow(&self, req: &Request<Body>) -> bool {
        req.headers()
            .get(&self.header)
            .and_then(|v| v.to_str().ok())
            .map(|v| v == self.token)
            .unwrap_or(false)
    }
}

/// Context wrapper answering security from an injected policy.
pub struct SecuredContext {
    inner: Arc<dyn HttpContext>,
    policy: Arc<dyn SecurityPolicy>,
}

impl SecuredContext {
    pub fn new(inner: Arc<dyn HttpContext>, policy: Arc<dyn SecurityPolicy>) -> Self {
        Self { inner, policy }
    }
}

impl HttpContext for SecuredContext {
    fn resource(&self, name: &str) -> Option<Vec<u8>> {
        self.inner.resource(name)
    }

    fn mime_type(&self, name: &str) -> &'static str {
        self.inner.mime_type(name)
    }

    fn handle_security(&self, req: &Request<Body>) -> bool {
        self.policy.allow(req)
    }
}
