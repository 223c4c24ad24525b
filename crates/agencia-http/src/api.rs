//! Wire types for the JSON endpoints
//!
//! Shared between the handlers and the client so both sides of the contract
//! stay in sync.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use agencia_core::{Agency, AgencyStatus, AgencySummary};

/// Body of a successful `POST /registrar_agencia` (201).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RegisterResponse {
    #[serde(rename = "mensaje")]
    pub message: String,

    pub id: Uuid,

    #[serde(rename = "nombre")]
    pub name: String,

    pub nit: String,

    pub rnt: String,

    #[serde(rename = "certificado")]
    pub certificate: String,

    #[serde(rename = "estado")]
    pub status: AgencyStatus,

    #[serde(rename = "url_verificacion")]
    pub verification_url: String,
}

impl RegisterResponse {
    pub fn from_agency(agency: Agency, verification_url: String) -> Self {
        Self {
            message: "Agencia registrada exitosamente".to_string(),
            id: agency.id,
            name: agency.name,
            nit: agency.nit,
            rnt: agency.rnt,
            certificate: agency.certificate,
            status: agency.status,
            verification_url,
        }
    }
}

/// Body of `GET /api/agencias`. Certificates are never included.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AgencyListing {
    pub total: usize,

    #[serde(rename = "agencias")]
    pub agencies: Vec<AgencySummary>,
}

/// JSON error body returned by all failing endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ErrorBody {
    pub error: String,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_register_response_wire_names() {
        let agency = Agency {
            id: Uuid::new_v4(),
            name: "Agencia".to_string(),
            nit: "900-1".to_string(),
            rnt: "RNT-1".to_string(),
            certificate: "ab".repeat(32),
            status: AgencyStatus::Verified,
            registered_at: Utc::now(),
        };
        let url = format!("http://localhost:8080/verificar_agencia/{}", agency.id);

        let value = serde_json::to_value(RegisterResponse::from_agency(agency, url)).unwrap();

        assert_eq!(value["estado"], "verified");
        assert!(value.get("mensaje").is_some());
        assert!(value.get("url_verificacion").is_some());
        assert!(value.get("certificado").is_some());
    }

    #[test]
    fn test_listing_roundtrip() {
        let listing = AgencyListing {
            total: 0,
            agencies: vec![],
        };
        let json = serde_json::to_string(&listing).unwrap();
        let parsed: AgencyListing = serde_json::from_str(&json).unwrap();
        assert_eq!(listing, parsed);
    }
}
