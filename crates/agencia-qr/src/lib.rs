//! # Agencia QR
//!
//! Verification artifact handling for the agency registry.
//!
//! This crate provides:
//! - Deterministic QR PNG encoding of verification URLs
//! - The [`ArtifactStore`] abstraction with filesystem and in-memory
//!   implementations
//!
//! The artifact is a cache, not a source of truth: it is a pure function of
//! the verification URL and can be deleted and regenerated at any time
//! without semantic loss.
//!
//! ## Example
//!
//! ```rust,ignore
//! use agencia_qr::{encode_verification_qr, verification_url, FsArtifactStore, ArtifactStore};
//!
//! let url = verification_url("http://localhost:8080", id);
//! let png = encode_verification_qr(&url)?;
//! store.store(id, &png)?;
//! ```

mod encode;
mod error;
mod store;

pub use encode::{encode_verification_qr, verification_url};
pub use error::QrError;
pub use store::{ArtifactStore, FsArtifactStore, MemoryArtifactStore};
