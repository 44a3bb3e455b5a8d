//! Request handlers.
//!
//! The page handler replaces an inline anonymous handler with a named
//! type that can be tested without going through registration.

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    response::{IntoResponse, Response},
};

use crate::web::context::HttpContext;

/// Capability of answering a request with a response.
pub trait RequestHandler: Send + Sync {
    fn handle(&self, req: &Request<Body>) -> Response;
}

/// Handler serving a fixed page from its context.
pub struct PageHandler {
    context: Arc<dyn HttpContext>,
    page: String,
}

impl PageHandler {
    pub fn new(context: Arc<dyn HttpContext>, page: impl Into<String>) -> Self {
        Self {
            context,
            page: page.into(),
        }
    }
}

impl RequestHandler for PageHandler {
    fn handle(&self, req: &Request<Body>) -> Response {
        match self.context.resource(&self.page) {
            Some(content) => {
                tracing::debug!(path = %req.uri().path(), page = %self.page, "Serving page");
                let mime = self.context.mime_type(&self.page);
                (StatusCode::OK, [(header::CONTENT_TYPE, mime)], content).into_response()
            }
            None => {
                tracing::warn!(page = %self.page, "Page missing from context");
                StatusCode::NOT_FOUND.into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::web::context::DefaultContext;

    #[test]
    fn test_page_handler_serves_page() {
        let ctx = Arc::new(
            DefaultContext::new("sample").with_resource("index.html", b"<h1>hi</h1>".to_vec()),
        );
        let handler = PageHandler::new(ctx, "index.html");

        let req = Request::builder()
            .uri("http://localhost/index")
            .body(Body::empty())
            .unwrap();
        let resp = handler.handle(&req);
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            resp.headers().get(header::CONTENT_TYPE).unwrap(),
            "text/html"
        );
    }

    #[test]
    fn test_page_handler_missing_page_is_404() {
        let ctx = Arc::new(DefaultContext::new("sample"));
        let handler = PageHandler::new(ctx, "index.html");

        let req = Request::builder().body(Body::empty()).unwrap();
        assert_eq!(handler.handle(&req).status(), StatusCode::NOT_FOUND);
    }
}
