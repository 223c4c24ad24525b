//! # Agencia Core
//!
//! Registry and registration/verification service for the tourism agency
//! antifraud system.
//!
//! This crate provides:
//! - The [`Agency`](types::Agency) record model and its public listing
//!   projection
//! - The [`AgencyRegistry`](registry::AgencyRegistry) abstraction with an
//!   in-memory implementation
//! - The [`AgencyService`](service::AgencyService) that validates
//!   registrations, mints identifiers and certificates, and drives QR
//!   artifact generation
//!
//! ## Example
//!
//! ```rust,ignore
//! use agencia_core::{AgencyService, InMemoryRegistry, OsRandom, RegistrationForm};
//!
//! let service = AgencyService::new(registry, artifacts, random, base_url);
//! let agency = service.register(form)?;
//! let looked_up = service.verify(agency.id)?;
//! ```

pub mod error;
pub mod random;
pub mod registry;
pub mod service;
pub mod types;

// Re-exports for convenience
pub use error::ServiceError;
pub use random::{OsRandom, RandomSource};
pub use registry::{AgencyRegistry, InMemoryRegistry, RegistryError};
pub use service::AgencyService;
pub use types::{Agency, AgencyStatus, AgencySummary, RegistrationForm};
