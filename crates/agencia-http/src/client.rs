//! Reqwest-based client for the agency registry API
//!
//! Used by the demonstration CLI and the integration tests.

use reqwest::{Client, StatusCode};
use thiserror::Error;
use uuid::Uuid;

use agencia_core::RegistrationForm;

use crate::api::{AgencyListing, ErrorBody, RegisterResponse};

/// Errors raised by [`AgenciaClient`] calls.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Request error: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Server returned {status}: {message}")]
    Api { status: u16, message: String },
}

/// Outcome of a verification page request.
#[derive(Debug, Clone)]
pub struct VerificationPage {
    /// `true` when the server confirmed the agency (HTTP 200).
    pub verified: bool,
    /// The rendered HTML body, including the fraud warning when unverified.
    pub html: String,
}

/// HTTP client for the agency registry.
///
/// # Example
///
/// ```ignore
/// use agencia_http::AgenciaClient;
///
/// let client = AgenciaClient::new("http://localhost:8080");
/// let listing = client.list().await?;
/// ```
pub struct AgenciaClient {
    client: Client,
    base_url: String,
}

impl AgenciaClient {
    /// Create a new client with the given base URL (no trailing slash).
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Create a client with custom reqwest settings.
    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Register an agency via `POST /registrar_agencia`.
    pub async fn register(
        &self,
        form: &RegistrationForm,
    ) -> Result<RegisterResponse, ClientError> {
        let response = self
            .client
            .post(format!("{}/registrar_agencia", self.base_url))
            .json(form)
            .send()
            .await?;

        if response.status() == StatusCode::CREATED {
            Ok(response.json().await?)
        } else {
            Err(api_error(response).await)
        }
    }

    /// Fetch the verification page for an identifier.
    ///
    /// Both outcomes are regular results: a 200 confirms the agency, a 404
    /// carries the fraud warning. Any other status is an error.
    pub async fn verify(&self, id: Uuid) -> Result<VerificationPage, ClientError> {
        let response = self
            .client
            .get(format!("{}/verificar_agencia/{}", self.base_url, id))
            .send()
            .await?;

        match response.status() {
            StatusCode::OK => Ok(VerificationPage {
                verified: true,
                html: response.text().await?,
            }),
            StatusCode::NOT_FOUND => Ok(VerificationPage {
                verified: false,
                html: response.text().await?,
            }),
            _ => Err(api_error(response).await),
        }
    }

    /// Download the QR artifact for an identifier.
    pub async fn qr_png(&self, id: Uuid) -> Result<Vec<u8>, ClientError> {
        let response = self
            .client
            .get(format!("{}/qr/{}", self.base_url, id))
            .send()
            .await?;

        if response.status() == StatusCode::OK {
            Ok(response.bytes().await?.to_vec())
        } else {
            Err(api_error(response).await)
        }
    }

    /// Fetch the public listing via `GET /api/agencias`.
    pub async fn list(&self) -> Result<AgencyListing, ClientError> {
        let response = self
            .client
            .get(format!("{}/api/agencias", self.base_url))
            .send()
            .await?;

        if response.status() == StatusCode::OK {
            Ok(response.json().await?)
        } else {
            Err(api_error(response).await)
        }
    }
}

async fn api_error(response: reqwest::Response) -> ClientError {
    let status = response.status().as_u16();
    let message = match response.json::<ErrorBody>().await {
        Ok(body) => body.message,
        Err(_) => "Unrecognized error body".to_string(),
    };
    ClientError::Api { status, message }
}
