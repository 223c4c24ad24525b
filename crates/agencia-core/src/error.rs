//! Error taxonomy for the registration and verification service
//!
//! The service reports error kinds, not HTTP statuses; the transport layer
//! maps each kind to a status code.

use thiserror::Error;
use uuid::Uuid;

use crate::registry::RegistryError;

/// Errors produced by [`AgencyService`](crate::service::AgencyService)
/// operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// A required registration field is absent or empty.
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// An agency with the same NIT is already registered.
    #[error("An agency with NIT '{0}' is already registered")]
    DuplicateNit(String),

    /// Verification lookup failed: the identifier was never issued.
    ///
    /// This is a trust-negative result, not an ordinary "no data": callers
    /// must present it as grounds for suspicion.
    #[error("No agency registered under id {0}")]
    UnknownAgency(Uuid),

    /// No QR artifact exists and the identifier does not resolve.
    #[error("No QR artifact for id {0}")]
    QrNotFound(Uuid),

    /// Unexpected failure; the message is safe to log but not meant for
    /// end users.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<RegistryError> for ServiceError {
    fn from(err: RegistryError) -> Self {
        match err {
            RegistryError::DuplicateNit(nit) => ServiceError::DuplicateNit(nit),
        }
    }
}
