//! Record model for the agency registry
//!
//! Wire field names follow the reference API contract (Spanish keys), while
//! the Rust names stay idiomatic. An [`Agency`] is created exactly once by
//! the registration service and never updated or deleted afterwards.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A registered tourism agency.
///
/// The sole entity of the system. The `nit` (tax identifier) is the business
/// key: no two records may share it. The certificate is a high-entropy token
/// asserting "this record was minted by this system"; it is not part of the
/// public listing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Agency {
    pub id: Uuid,

    #[serde(rename = "nombre")]
    pub name: String,

    pub nit: String,

    pub rnt: String,

    #[serde(rename = "certificado")]
    pub certificate: String,

    #[serde(rename = "estado")]
    pub status: AgencyStatus,

    #[serde(rename = "fecha_registro")]
    pub registered_at: DateTime<Utc>,
}

impl Agency {
    /// Public listing projection, with the certificate omitted.
    pub fn summary(&self) -> AgencySummary {
        AgencySummary {
            id: self.id,
            name: self.name.clone(),
            nit: self.nit.clone(),
            rnt: self.rnt.clone(),
            status: self.status,
            registered_at: self.registered_at,
        }
    }
}

/// Record status.
///
/// There is no suspension or revocation workflow: every record is `Verified`
/// from creation and never transitions.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum AgencyStatus {
    #[default]
    Verified,
}

/// Listing projection of an [`Agency`] without the certificate field.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AgencySummary {
    pub id: Uuid,

    #[serde(rename = "nombre")]
    pub name: String,

    pub nit: String,

    pub rnt: String,

    #[serde(rename = "estado")]
    pub status: AgencyStatus,

    #[serde(rename = "fecha_registro")]
    pub registered_at: DateTime<Utc>,
}

/// Registration input as received on the wire.
///
/// All fields are optional so that a missing JSON key surfaces as a
/// validation error from the service rather than a deserialization failure
/// at the transport boundary.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct RegistrationForm {
    #[serde(rename = "nombre")]
    pub name: Option<String>,

    pub nit: Option<String>,

    pub rnt: Option<String>,
}

impl RegistrationForm {
    /// Convenience constructor for callers that already hold all fields.
    pub fn new(
        name: impl Into<String>,
        nit: impl Into<String>,
        rnt: impl Into<String>,
    ) -> Self {
        Self {
            name: Some(name.into()),
            nit: Some(nit.into()),
            rnt: Some(rnt.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_agency_serialization_uses_wire_names() {
        let agency = Agency {
            id: Uuid::new_v4(),
            name: "Aventuras Colombia Ltda".to_string(),
            nit: "900123456-1".to_string(),
            rnt: "RNT-12345".to_string(),
            certificate: "ab".repeat(32),
            status: AgencyStatus::Verified,
            registered_at: Utc::now(),
        };

        let value = serde_json::to_value(&agency).unwrap();
        assert_eq!(value["nombre"], "Aventuras Colombia Ltda");
        assert_eq!(value["estado"], "verified");
        assert!(value.get("certificado").is_some());
        assert!(value.get("fecha_registro").is_some());
        // No leakage of the Rust-side field names.
        assert!(value.get("name").is_none());
        assert!(value.get("certificate").is_none());
    }

    #[test]
    fn test_agency_roundtrip() {
        let agency = Agency {
            id: Uuid::new_v4(),
            name: "Turismo del Café S.A.S".to_string(),
            nit: "800987654-2".to_string(),
            rnt: "RNT-67890".to_string(),
            certificate: "0f".repeat(32),
            status: AgencyStatus::Verified,
            registered_at: Utc::now(),
        };

        let json = serde_json::to_string(&agency).unwrap();
        let parsed: Agency = serde_json::from_str(&json).unwrap();
        assert_eq!(agency, parsed);
    }

    #[test]
    fn test_summary_omits_certificate() {
        let agency = Agency {
            id: Uuid::new_v4(),
            name: "Expediciones Amazónicas".to_string(),
            nit: "700555444-3".to_string(),
            rnt: "RNT-11111".to_string(),
            certificate: "11".repeat(32),
            status: AgencyStatus::Verified,
            registered_at: Utc::now(),
        };

        let value = serde_json::to_value(agency.summary()).unwrap();
        assert!(value.get("certificado").is_none());
        assert_eq!(value["nit"], "700555444-3");
    }

    #[test]
    fn test_form_with_missing_keys_deserializes() {
        let form: RegistrationForm = serde_json::from_str(r#"{"nombre":"X"}"#).unwrap();
        assert_eq!(form.name.as_deref(), Some("X"));
        assert!(form.nit.is_none());
        assert!(form.rnt.is_none());
    }
}
