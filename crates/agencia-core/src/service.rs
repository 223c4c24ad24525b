//! Registration and verification service
//!
//! The service validates registration input, mints identifiers and
//! certificates from the injected random source, inserts into the registry,
//! and drives best-effort generation of the QR verification artifact.

use std::fmt::Write as _;
use std::sync::Arc;

use chrono::Utc;
use sha2::{Digest, Sha256};
use uuid::Uuid;

use agencia_qr::{encode_verification_qr, verification_url, ArtifactStore};

use crate::error::ServiceError;
use crate::random::RandomSource;
use crate::registry::AgencyRegistry;
use crate::types::{Agency, AgencyStatus, AgencySummary, RegistrationForm};

/// The registration and verification service.
///
/// All collaborators are injected: the registry so it can be swapped for a
/// persistent store, the artifact store so artifact generation stays a
/// side channel, and the random source so tests can assert exact
/// derivations.
pub struct AgencyService {
    registry: Arc<dyn AgencyRegistry>,
    artifacts: Arc<dyn ArtifactStore>,
    random: Arc<dyn RandomSource>,
    base_url: String,
}

impl AgencyService {
    pub fn new(
        registry: Arc<dyn AgencyRegistry>,
        artifacts: Arc<dyn ArtifactStore>,
        random: Arc<dyn RandomSource>,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            registry,
            artifacts,
            random,
            base_url: base_url.into(),
        }
    }

    /// Register a new agency.
    ///
    /// Validates that all three fields are present and non-empty, enforces
    /// NIT uniqueness through the registry, and mints the identifier and
    /// certificate. QR artifact generation is attempted as a side effect;
    /// its failure is logged and never fails the registration, because the
    /// record is the authoritative result and the artifact is regenerable.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::MissingField`] for absent or empty input and
    /// [`ServiceError::DuplicateNit`] when the NIT is already registered.
    /// On error the registry is unchanged.
    pub fn register(&self, form: RegistrationForm) -> Result<Agency, ServiceError> {
        let name = required("nombre", form.name)?;
        let nit = required("nit", form.nit)?;
        let rnt = required("rnt", form.rnt)?;

        let agency = Agency {
            id: self.mint_id(),
            name,
            nit,
            rnt,
            certificate: self.mint_certificate(),
            status: AgencyStatus::Verified,
            registered_at: Utc::now(),
        };

        self.registry.insert(agency.clone())?;

        tracing::info!(id = %agency.id, nit = %agency.nit, "Registered agency");

        if let Err(err) = self.generate_artifact(agency.id) {
            tracing::warn!(
                id = %agency.id,
                error = %err,
                "QR artifact generation failed; it will be regenerated on demand"
            );
        }

        Ok(agency)
    }

    /// Look up an agency by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::UnknownAgency`] when the identifier was never
    /// issued. This is a trust-negative result: an unmatched identifier
    /// means "unverifiable", not merely "no data".
    pub fn verify(&self, id: Uuid) -> Result<Agency, ServiceError> {
        self.registry
            .find_by_id(id)
            .ok_or(ServiceError::UnknownAgency(id))
    }

    /// Serve the QR artifact for an identifier, regenerating it on demand.
    ///
    /// A stored artifact is returned unchanged; since content is a
    /// deterministic function of id and base URL, the same identifier
    /// always yields byte-identical output.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::QrNotFound`] when no artifact exists and the
    /// identifier does not resolve to a registered agency.
    pub fn qr_png(&self, id: Uuid) -> Result<Vec<u8>, ServiceError> {
        match self.artifacts.load(id) {
            Ok(Some(bytes)) => return Ok(bytes),
            Ok(None) => {}
            Err(err) => {
                // An unreadable cache entry is treated as a miss; the
                // regeneration path below covers it.
                tracing::warn!(id = %id, error = %err, "Failed to load QR artifact");
            }
        }

        if self.registry.find_by_id(id).is_none() {
            return Err(ServiceError::QrNotFound(id));
        }

        self.generate_artifact(id)
    }

    /// Public listing of all registered agencies, certificates omitted.
    pub fn list_summaries(&self) -> Vec<AgencySummary> {
        self.registry.list().iter().map(Agency::summary).collect()
    }

    /// The verification URL for an identifier.
    pub fn verification_url(&self, id: Uuid) -> String {
        verification_url(&self.base_url, id)
    }

    fn mint_id(&self) -> Uuid {
        let mut bytes = [0u8; 16];
        self.random.fill(&mut bytes);
        uuid::Builder::from_random_bytes(bytes).into_uuid()
    }

    // certificate = hex(sha256(32 csprng bytes))
    fn mint_certificate(&self) -> String {
        let mut seed = [0u8; 32];
        self.random.fill(&mut seed);
        hex_encode(&Sha256::digest(seed))
    }

    fn generate_artifact(&self, id: Uuid) -> Result<Vec<u8>, ServiceError> {
        let url = verification_url(&self.base_url, id);
        let png = encode_verification_qr(&url)
            .map_err(|err| ServiceError::Internal(err.to_string()))?;

        if let Err(err) = self.artifacts.store(id, &png) {
            // The bytes are still good; persisting them is a cache fill.
            tracing::warn!(id = %id, error = %err, "Failed to persist QR artifact");
        }

        Ok(png)
    }
}

fn required(field: &'static str, value: Option<String>) -> Result<String, ServiceError> {
    let value = value.ok_or(ServiceError::MissingField(field))?;
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ServiceError::MissingField(field));
    }
    Ok(trimmed.to_string())
}

/// Convert bytes to lowercase hex string
fn hex_encode(bytes: &[u8]) -> String {
    let mut hex = String::with_capacity(bytes.len() * 2);
    for byte in bytes {
        write!(hex, "{:02x}", byte).unwrap();
    }
    hex
}
