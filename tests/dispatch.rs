//! End-to-end dispatch tests against the in-process registry.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};

use whiteboard_registrar::config::RegistrarConfig;
use whiteboard_registrar::lifecycle::Registrar;
use whiteboard_registrar::registry::LocalRegistry;
use whiteboard_registrar::web::{
    DefaultContext, HeaderToken, HttpContext, PageHandler, SecuredContext,
};

const PAGE: &[u8] = b"<h1>hello</h1>";

fn registry_with(context: Arc<dyn HttpContext>) -> Arc<LocalRegistry> {
    let registry = Arc::new(LocalRegistry::new());
    registry.bind_context("sample", Arc::clone(&context));
    registry.bind_handler("index", Arc::new(PageHandler::new(context, "index.html")));
    registry
}

fn get(path: &str) -> Request<Body> {
    Request::builder()
        .uri(format!("http://localhost{path}"))
        .body(Body::empty())
        .unwrap()
}

#[test]
fn test_registered_endpoint_serves_page() {
    let context = Arc::new(DefaultContext::new("sample").with_resource("index.html", PAGE.to_vec()));
    let registry = registry_with(context);
    let mut registrar = Registrar::new(registry.clone());
    registrar.start(&RegistrarConfig::default()).unwrap();

    assert_eq!(registry.dispatch(get("/index")).status(), StatusCode::OK);
    assert_eq!(
        registry.dispatch(get("/other")).status(),
        StatusCode::NOT_FOUND
    );
}

#[test]
fn test_secured_context_gates_dispatch() {
    let base = Arc::new(DefaultContext::new("sample").with_resource("index.html", PAGE.to_vec()));
    let policy = Arc::new(HeaderToken::new("x-api-key", "secret"));
    let context: Arc<dyn HttpContext> = Arc::new(SecuredContext::new(base, policy));
    let registry = registry_with(context);
    let mut registrar = Registrar::new(registry.clone());
    registrar.start(&RegistrarConfig::default()).unwrap();

    assert_eq!(
        registry.dispatch(get("/index")).status(),
        StatusCode::FORBIDDEN
    );

    let allowed = Request::builder()
        .uri("http://localhost/index")
        .header("x-api-key", "secret")
        .body(Body::empty())
        .unwrap();
    assert_eq!(registry.dispatch(allowed).status(), StatusCode::OK);
}

#[test]
fn test_dispatch_after_stop_is_404() {
    let context = Arc::new(DefaultContext::new("sample").with_resource("index.html", PAGE.to_vec()));
    let registry = registry_with(context);
    let mut registrar = Registrar::new(registry.clone());
    registrar.start(&RegistrarConfig::default()).unwrap();

    let report = registrar.stop();
    assert!(report.is_clean());
    assert_eq!(registry.active_registrations(), 0);
    assert_eq!(
        registry.dispatch(get("/index")).status(),
        StatusCode::NOT_FOUND
    );
}
