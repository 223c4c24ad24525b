//! # Agencia HTTP Transport
//!
//! HTTP surface of the agency antifraud registry.
//!
//! This crate provides:
//! - Axum handlers for registration, verification, QR serving and listing
//! - Error-to-status-code mapping that keeps the service layer free of
//!   protocol concerns
//! - HTML page rendering for the registration form, the verified-agency
//!   page and the fraud-warning page
//! - A reqwest-based client for programmatic use
//!
//! ## Server Example
//!
//! ```rust,ignore
//! use agencia_http::{router, AppState};
//!
//! let state = AppState::new(service);
//! let app = router(state);
//! axum::serve(listener, app).await?;
//! ```
//!
//! ## Client Example
//!
//! ```rust,ignore
//! use agencia_core::RegistrationForm;
//! use agencia_http::AgenciaClient;
//!
//! let client = AgenciaClient::new("http://localhost:8080");
//! let registered = client
//!     .register(&RegistrationForm::new("Aventuras Colombia", "900123456-1", "RNT-12345"))
//!     .await?;
//! ```

mod api;
mod client;
mod error;
mod handlers;
mod pages;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;

use agencia_core::AgencyService;

pub use api::{AgencyListing, ErrorBody, RegisterResponse};
pub use client::{AgenciaClient, ClientError, VerificationPage};
pub use error::HttpError;

/// Shared application state for the handlers.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<AgencyService>,
}

impl AppState {
    pub fn new(service: Arc<AgencyService>) -> Self {
        Self { service }
    }
}

/// Build the application router with all routes of the public contract.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::home))
        .route("/registrar_agencia", post(handlers::register_agency))
        .route("/verificar_agencia/:id", get(handlers::verify_agency))
        .route("/qr/:id", get(handlers::agency_qr))
        .route("/api/agencias", get(handlers::list_agencies))
        .with_state(state)
}
