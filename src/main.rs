//! Whiteboard Registrar Demo Host
//!
//! Wires the registration lifecycle against an in-process registry and
//! serves the registered endpoint until ctrl-c.
//!
//! # Architecture Overview
//!
//! ```text
//!                    ┌──────────────────────────────────────────────┐
//!                    │                 DEMO HOST                     │
//!                    │                                               │
//!    activation      │  ┌─────────┐   ┌───────────┐   ┌──────────┐  │
//!    ───────────────▶│  │ config  │──▶│ lifecycle │──▶│ registry │  │
//!                    │  │ loader  │   │ registrar │   │ (local)  │  │
//!                    │  └─────────┘   └───────────┘   └────┬─────┘  │
//!                    │                                      │        │
//!    HTTP request    │  ┌──────────────────────────────────▼─────┐  │
//!    ───────────────▶│  │ dispatch: pattern → security → handler │  │
//!                    │  └────────────────────────────────────────┘  │
//!                    │                                               │
//!    ctrl-c          │  ┌──────────┐        ┌───────────────────┐   │
//!    ───────────────▶│  │ shutdown │───────▶│ registrar.stop()  │   │
//!                    │  └──────────┘        └───────────────────┘   │
//!                    └──────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use axum::{
    body::Body,
    extract::State,
    http::Request,
    response::Response,
    Router,
};
use clap::Parser;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use whiteboard_registrar::config::{load_config, RegistrarConfig};
use whiteboard_registrar::lifecycle::{Registrar, Shutdown};
use whiteboard_registrar::registry::LocalRegistry;
use whiteboard_registrar::web::{
    DefaultContext, HeaderToken, HttpContext, PageHandler, SecuredContext,
};

const DEMO_PAGE: &[u8] = b"<html><body><h1>Hello from the whiteboard registrar</h1></body></html>";

#[derive(Parser)]
#[command(name = "whiteboard-registrar", about = "Whiteboard registrar demo host")]
struct Args {
    /// Path to a TOML configuration file.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "whiteboard_registrar=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("whiteboard-registrar v0.1.0 starting");

    let args = Args::parse();
    let config = match args.config {
        Some(path) => load_config(&path)?,
        None => RegistrarConfig::default(),
    };

    tracing::info!(
        mode = %config.mode,
        context = %config.context.id,
        endpoint = %config.endpoint.pattern,
        security = config.security.enabled,
        "Configuration loaded"
    );

    // Build collaborators: context (optionally security-wrapped) and the
    // page handler, then bind them into the registry.
    let base = Arc::new(
        DefaultContext::new(config.context.id.as_str())
            .with_resource(config.mapping.page.as_str(), DEMO_PAGE.to_vec()),
    );
    let context: Arc<dyn HttpContext> = if config.security.enabled {
        let policy = HeaderToken::new(
            config.security.header.as_str(),
            config.security.token.as_str(),
        );
        Arc::new(SecuredContext::new(base, Arc::new(policy)))
    } else {
        base
    };
    let handler = Arc::new(PageHandler::new(
        Arc::clone(&context),
        config.mapping.page.as_str(),
    ));

    let registry = Arc::new(LocalRegistry::new());
    registry.bind_context(config.context.id.as_str(), context);
    registry.bind_handler(config.endpoint.name.as_str(), handler);

    // Activation: register context, mapping, endpoint in order.
    let mut registrar = Registrar::new(registry.clone());
    registrar.start(&config)?;

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(
        address = %listener.local_addr()?,
        "Listening for connections"
    );

    let shutdown = Shutdown::new();
    let mut shutdown_rx = shutdown.subscribe();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("ctrl-c received, shutting down");
            shutdown.trigger();
        }
    });

    let app = Router::new()
        .fallback(dispatch_handler)
        .with_state(registry.clone());
    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            let _ = shutdown_rx.recv().await;
        })
        .await?;

    // Deactivation: best-effort teardown; failures are reported, not fatal.
    let report = registrar.stop();
    if !report.is_clean() {
        tracing::error!(
            failures = report.failures.len(),
            "Teardown finished with failures"
        );
    }

    tracing::info!("Shutdown complete");
    Ok(())
}

async fn dispatch_handler(
    State(registry): State<Arc<LocalRegistry>>,
    req: Request<Body>,
) -> Response {
    registry.dispatch(req)
}
