//! Agency antifraud registry server
//!
//! Registers tourism agencies, issues digital certificates and serves QR
//! verification codes.
//!
//! Configuration via environment variables:
//!   AGENCIA_ADDR      - listen address (default 127.0.0.1:8080)
//!   AGENCIA_BASE_URL  - public base URL used inside QR codes
//!                       (default http://localhost:8080)
//!   AGENCIA_QR_DIR    - directory for cached QR artifacts
//!                       (default qr_codes)
//!
//! Usage:
//!   cargo run --package agencia-server

use std::net::SocketAddr;
use std::sync::Arc;

use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use agencia_core::{AgencyService, InMemoryRegistry, OsRandom};
use agencia_http::{router, AppState};
use agencia_qr::FsArtifactStore;

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "agencia_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let addr: SocketAddr = std::env::var("AGENCIA_ADDR")
        .unwrap_or_else(|_| "127.0.0.1:8080".to_string())
        .parse()
        .expect("AGENCIA_ADDR must be a valid socket address");
    let base_url =
        std::env::var("AGENCIA_BASE_URL").unwrap_or_else(|_| "http://localhost:8080".to_string());
    let qr_dir = std::env::var("AGENCIA_QR_DIR").unwrap_or_else(|_| "qr_codes".to_string());

    let service = AgencyService::new(
        Arc::new(InMemoryRegistry::new()),
        Arc::new(FsArtifactStore::new(&qr_dir)),
        Arc::new(OsRandom),
        base_url.clone(),
    );

    let app = router(AppState::new(Arc::new(service)))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        );

    tracing::info!("Starting agency antifraud registry");
    tracing::info!(%addr, %base_url, %qr_dir, "Configuration");
    tracing::info!("Endpoints:");
    tracing::info!("  GET  /                       - registration page");
    tracing::info!("  POST /registrar_agencia      - register a new agency");
    tracing::info!("  GET  /verificar_agencia/{{id}} - verify an agency");
    tracing::info!("  GET  /qr/{{id}}                - QR verification code");
    tracing::info!("  GET  /api/agencias           - list registered agencies");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("failed to bind listen address");
    tracing::info!("Listening on http://{}", addr);

    axum::serve(listener, app)
        .await
        .expect("server terminated unexpectedly");
}
