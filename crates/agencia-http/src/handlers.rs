//! Request handlers for the public API

use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use axum::Json;
use uuid::Uuid;

use agencia_core::RegistrationForm;

use crate::api::{AgencyListing, RegisterResponse};
use crate::error::HttpError;
use crate::pages;
use crate::AppState;

/// `GET /` - registration form page.
pub async fn home() -> Html<String> {
    Html(pages::home())
}

/// `POST /registrar_agencia` - register a new agency.
///
/// Returns 201 with the full record and verification URL; 400 on missing
/// fields, 409 on a duplicate NIT.
pub async fn register_agency(
    State(state): State<AppState>,
    Json(form): Json<RegistrationForm>,
) -> Result<(StatusCode, Json<RegisterResponse>), HttpError> {
    let agency = state.service.register(form)?;
    let url = state.service.verification_url(agency.id);

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse::from_agency(agency, url)),
    ))
}

/// `GET /verificar_agencia/{id}` - human-facing verification page.
///
/// A known identifier renders the full record with 200. Anything else -
/// unknown UUID or not a UUID at all - renders the fraud-warning page with
/// 404: for a relying party an unmatched identifier means "unverifiable",
/// never just "no data".
pub async fn verify_agency(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Response {
    let Ok(parsed) = id.parse::<Uuid>() else {
        return fraud_response(&id);
    };

    match state.service.verify(parsed) {
        Ok(agency) => Html(pages::verified(&agency)).into_response(),
        Err(err) => {
            tracing::info!(id = %id, error = %err, "Verification lookup failed");
            fraud_response(&id)
        }
    }
}

fn fraud_response(searched_id: &str) -> Response {
    (StatusCode::NOT_FOUND, Html(pages::fraud_warning(searched_id))).into_response()
}

/// `GET /qr/{id}` - QR verification artifact as PNG.
///
/// Serves the cached artifact if present, regenerating it on demand for
/// known identifiers; 404 otherwise.
pub async fn agency_qr(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, HttpError> {
    let png = state.service.qr_png(id)?;
    Ok(([(header::CONTENT_TYPE, "image/png")], png))
}

/// `GET /api/agencias` - public listing, certificates omitted.
pub async fn list_agencies(State(state): State<AppState>) -> Json<AgencyListing> {
    let agencies = state.service.list_summaries();
    Json(AgencyListing {
        total: agencies.len(),
        agencies,
    })
}
