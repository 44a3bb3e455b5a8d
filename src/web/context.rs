//! HTTP contexts.
//!
//! A context answers resource lookups, resolves MIME types, and gates
//! requests through a security check. The default implementation serves
//! from an in-memory resource set and allows every request.

use std::collections::HashMap;

use axum::{body::Body, http::Request};

/// Capability exposed by an HTTP context.
pub trait HttpContext: Send + Sync {
    /// Look up a named resource.
    fn resource(&self, name: &str) -> Option<Vec<u8>>;

    /// Resolve the MIME type for a resource name.
    fn mime_type(&self, name: &str) -> &'static str;

    /// Gate a request. Returning false rejects it before any handler runs.
    fn handle_security(&self, req: &Request<Body>) -> bool;
}

/// Context backed by an in-memory resource set.
pub struct DefaultContext {
    name: String,
    resources: HashMap<String, Vec<u8>>,
}

impl DefaultContext {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            resources: HashMap::new(),
        }
    }

    /// Add a resource under the given name.
    pub fn with_resource(mut self, name: impl Into<String>, content: Vec<u8>) -> Self {
        self.resources.insert(name.into(), content);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl HttpContext for DefaultContext {
    fn resource(&self, name: &str) -> Option<Vec<u8>> {
        self.resources.get(name).cloned()
    }

    fn mime_type(&self, name: &str) -> &'static str {
        match name.rsplit('.').next() {
            Some("html") | Some("htm") | Some("jsp") => "text/html",
            Some("css") => "text/css",
            Some("js") => "application/javascript",
            Some("json") => "application/json",
            Some("png") => "image/png",
            Some("txt") => "text/plain",
            _ => "application/octet-stream",
        }
    }

    fn handle_security(&self, _req: &Request<Body>) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_lookup() {
        let ctx = DefaultContext::new("sample").with_resource("index.html", b"hi".to_vec());
        assert_eq!(ctx.resource("index.html"), Some(b"hi".to_vec()));
        assert_eq!(ctx.resource("missing.html"), None);
    }

    #[test]
    fn test_mime_type_resolution() {
        let ctx = DefaultContext::new("sample");
        assert_eq!(ctx.mime_type("index.html"), "text/html");
        assert_eq!(ctx.mime_type("page.jsp"), "text/html");
        assert_eq!(ctx.mime_type("style.css"), "text/css");
        assert_eq!(ctx.mime_type("blob"), "application/octet-stream");
    }

    #[test]
    fn test_default_context_allows_all() {
        let ctx = DefaultContext::new("sample");
        let req = Request::builder().body(Body::empty()).unwrap();
        assert!(ctx.handle_security(&req));
    }
}
