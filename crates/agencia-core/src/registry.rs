//! Registry abstraction and in-memory implementation
//!
//! The registry owns the set of [`Agency`] records for the lifetime of the
//! process. Only the registration service inserts into it; everything else
//! reads.

use std::collections::HashMap;
use std::sync::RwLock;

use thiserror::Error;
use uuid::Uuid;

use crate::types::Agency;

/// Errors that can occur during registry operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("An agency with NIT '{0}' is already registered")]
    DuplicateNit(String),
}

/// Storage abstraction over the set of registered agencies.
///
/// Implementations must make `insert` atomic with respect to its own NIT
/// uniqueness check: two concurrent inserts with the same NIT must result in
/// exactly one success.
///
/// # Object Safety
///
/// This trait is object-safe and can be used with `dyn AgencyRegistry`.
pub trait AgencyRegistry: Send + Sync {
    /// Insert a new record.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::DuplicateNit`] if a record with the same NIT
    /// already exists. On error the registry is unchanged.
    fn insert(&self, agency: Agency) -> Result<(), RegistryError>;

    /// Look up a record by identifier. Total function, no failure mode.
    fn find_by_id(&self, id: Uuid) -> Option<Agency>;

    /// Look up a record by its business key (NIT).
    fn find_by_nit(&self, nit: &str) -> Option<Agency>;

    /// Snapshot of all records in insertion order.
    ///
    /// Inserts racing with the snapshot appear entirely before or after it,
    /// never torn.
    fn list(&self) -> Vec<Agency>;
}

#[derive(Default)]
struct RegistryInner {
    // Insertion-ordered records plus an index per lookup key. The Vec is the
    // source of truth; the maps hold positions into it.
    records: Vec<Agency>,
    by_id: HashMap<Uuid, usize>,
    by_nit: HashMap<String, usize>,
}

/// In-memory [`AgencyRegistry`] backed by an `RwLock`.
///
/// Lost on process exit, which matches the system's persistence scope: the
/// registry is authoritative only for the lifetime of the process.
#[derive(Default)]
pub struct InMemoryRegistry {
    inner: RwLock<RegistryInner>,
}

impl InMemoryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of registered agencies.
    pub fn len(&self) -> usize {
        self.read().records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, RegistryInner> {
        // A poisoned lock means a writer panicked mid-insert. Readers tolerate
        // a dangling index entry (lookups go through `records.get`), so
        // recover instead of propagating the poison.
        self.inner.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, RegistryInner> {
        self.inner.write().unwrap_or_else(|e| e.into_inner())
    }
}

impl AgencyRegistry for InMemoryRegistry {
    fn insert(&self, agency: Agency) -> Result<(), RegistryError> {
        // Uniqueness check and insert under one write lock: concurrent
        // registrations with the same NIT get exactly one winner.
        let mut inner = self.write();
        if inner.by_nit.contains_key(&agency.nit) {
            return Err(RegistryError::DuplicateNit(agency.nit));
        }

        let pos = inner.records.len();
        inner.by_id.insert(agency.id, pos);
        inner.by_nit.insert(agency.nit.clone(), pos);
        inner.records.push(agency);
        Ok(())
    }

    fn find_by_id(&self, id: Uuid) -> Option<Agency> {
        let inner = self.read();
        inner
            .by_id
            .get(&id)
            .and_then(|&pos| inner.records.get(pos))
            .cloned()
    }

    fn find_by_nit(&self, nit: &str) -> Option<Agency> {
        let inner = self.read();
        inner
            .by_nit
            .get(nit)
            .and_then(|&pos| inner.records.get(pos))
            .cloned()
    }

    fn list(&self) -> Vec<Agency> {
        self.read().records.clone()
    }
}
