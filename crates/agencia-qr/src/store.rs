//! Artifact storage abstraction
//!
//! Artifacts are keyed by agency identifier and effectively
//! write-once-then-immutable: the content is a deterministic function of the
//! identifier and base URL, so concurrent regeneration races are benign.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use uuid::Uuid;

use crate::error::QrError;

/// Trait for QR artifact storage backends.
///
/// # Object Safety
///
/// This trait is object-safe and can be used with `dyn ArtifactStore`.
pub trait ArtifactStore: Send + Sync {
    /// Store artifact bytes for an identifier, replacing any previous
    /// content.
    ///
    /// # Errors
    ///
    /// Returns an error if storage fails (disk full, permission denied,
    /// etc.).
    fn store(&self, id: Uuid, bytes: &[u8]) -> Result<(), QrError>;

    /// Retrieve the artifact for an identifier, or `None` if absent.
    fn load(&self, id: Uuid) -> Result<Option<Vec<u8>>, QrError>;

    /// Check whether an artifact exists for an identifier.
    fn exists(&self, id: Uuid) -> Result<bool, QrError>;

    /// Delete the artifact for an identifier.
    ///
    /// Deleting an absent artifact is not an error.
    fn delete(&self, id: Uuid) -> Result<(), QrError>;
}

/// Filesystem-backed [`ArtifactStore`].
///
/// Each artifact lives at `{dir}/{id}.png`. The directory is created on
/// first store. Writes go to a temp file and are renamed into place so
/// readers never observe a torn artifact.
#[derive(Debug, Clone)]
pub struct FsArtifactStore {
    dir: PathBuf,
}

impl FsArtifactStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Directory holding the artifacts.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, id: Uuid) -> PathBuf {
        self.dir.join(format!("{id}.png"))
    }
}

impl ArtifactStore for FsArtifactStore {
    fn store(&self, id: Uuid, bytes: &[u8]) -> Result<(), QrError> {
        fs::create_dir_all(&self.dir)?;

        let path = self.path_for(id);
        let tmp = self.dir.join(format!("{id}.png.tmp"));
        fs::write(&tmp, bytes)?;
        fs::rename(&tmp, &path)?;
        Ok(())
    }

    fn load(&self, id: Uuid) -> Result<Option<Vec<u8>>, QrError> {
        match fs::read(self.path_for(id)) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn exists(&self, id: Uuid) -> Result<bool, QrError> {
        Ok(self.path_for(id).exists())
    }

    fn delete(&self, id: Uuid) -> Result<(), QrError> {
        match fs::remove_file(self.path_for(id)) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

/// In-memory [`ArtifactStore`] for tests and ephemeral deployments.
#[derive(Debug, Default)]
pub struct MemoryArtifactStore {
    artifacts: Mutex<HashMap<Uuid, Vec<u8>>>,
}

impl MemoryArtifactStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<Uuid, Vec<u8>>> {
        self.artifacts.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl ArtifactStore for MemoryArtifactStore {
    fn store(&self, id: Uuid, bytes: &[u8]) -> Result<(), QrError> {
        self.lock().insert(id, bytes.to_vec());
        Ok(())
    }

    fn load(&self, id: Uuid) -> Result<Option<Vec<u8>>, QrError> {
        Ok(self.lock().get(&id).cloned())
    }

    fn exists(&self, id: Uuid) -> Result<bool, QrError> {
        Ok(self.lock().contains_key(&id))
    }

    fn delete(&self, id: Uuid) -> Result<(), QrError> {
        self.lock().remove(&id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Verify trait is object-safe
    fn _assert_object_safe(_: &dyn ArtifactStore) {}

    #[test]
    fn test_fs_store_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let store = FsArtifactStore::new(dir.path());
        let id = Uuid::new_v4();

        store.store(id, b"png bytes").unwrap();
        assert!(store.exists(id).unwrap());
        assert_eq!(store.load(id).unwrap(), Some(b"png bytes".to_vec()));
    }

    #[test]
    fn test_fs_store_creates_directory() {
        let dir = tempfile::tempdir().unwrap();
        let store = FsArtifactStore::new(dir.path().join("qr_codes"));
        store.store(Uuid::new_v4(), b"x").unwrap();
        assert!(store.dir().is_dir());
    }

    #[test]
    fn test_fs_load_missing_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = FsArtifactStore::new(dir.path());
        assert_eq!(store.load(Uuid::new_v4()).unwrap(), None);
    }

    #[test]
    fn test_fs_delete_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let store = FsArtifactStore::new(dir.path());
        let id = Uuid::new_v4();

        store.store(id, b"x").unwrap();
        store.delete(id).unwrap();
        store.delete(id).unwrap();
        assert!(!store.exists(id).unwrap());
    }

    #[test]
    fn test_memory_store_roundtrip() {
        let store = MemoryArtifactStore::new();
        let id = Uuid::new_v4();

        store.store(id, b"bytes").unwrap();
        assert_eq!(store.load(id).unwrap(), Some(b"bytes".to_vec()));
        store.delete(id).unwrap();
        assert_eq!(store.load(id).unwrap(), None);
    }
}
