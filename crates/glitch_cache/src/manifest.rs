//! The `.hash` manifest recording the last successfully processed inputs.
//!
//! The manifest is a single line of text in the codegen root: the aggregate
//! hash of the schema and every document. It holds nothing else, so it is
//! only useful for deciding whether a run can be skipped entirely.

use std::io;
use std::path::{Path, PathBuf};

use glitch_common::{ContentHash, ContentHasher};
use glitch_diagnostics::{Category, DiagnosticCode};

use crate::error::CacheError;

/// Name of the manifest file within the codegen root.
pub const MANIFEST_FILE: &str = ".hash";

/// The manifest could not be written.
pub const MANIFEST_WRITE: DiagnosticCode = DiagnosticCode::new(Category::Error, 401);

/// Aggregate hash over a schema hash and the sorted document hashes.
///
/// Callers must pass `document_hashes` sorted; the result depends on order.
pub fn aggregate_hash(schema_hash: &ContentHash, document_hashes: &[ContentHash]) -> ContentHash {
    let mut hasher = ContentHasher::new();
    hasher.update_hash(schema_hash);
    for hash in document_hashes {
        hasher.update_hash(hash);
    }
    hasher.finish()
}

/// The persisted aggregate hash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HashManifest {
    /// String form of the aggregate hash.
    pub total: String,
}

impl HashManifest {
    /// Creates a manifest for the given aggregate hash.
    pub fn new(total: &ContentHash) -> Self {
        Self {
            total: total.to_string(),
        }
    }

    /// Path of the manifest file inside `codegen_root`.
    pub fn path(codegen_root: &Path) -> PathBuf {
        codegen_root.join(MANIFEST_FILE)
    }

    /// Loads the manifest, returning `None` if it is missing or unreadable.
    ///
    /// This is fail-safe: any error is a cache miss, and only errors other
    /// than "not found" are logged.
    pub fn load(codegen_root: &Path) -> Option<Self> {
        let path = Self::path(codegen_root);
        match std::fs::read_to_string(&path) {
            Ok(content) => Some(Self {
                total: content.trim_end().to_string(),
            }),
            Err(e) if e.kind() == io::ErrorKind::NotFound => None,
            Err(e) => {
                log::warn!("ignoring unreadable manifest {}: {e}", path.display());
                None
            }
        }
    }

    /// Returns `true` if this manifest records `total`.
    pub fn matches(&self, total: &ContentHash) -> bool {
        self.total == total.to_string()
    }

    /// Saves the manifest, creating `codegen_root` if it doesn't exist.
    pub fn save(&self, codegen_root: &Path) -> Result<(), CacheError> {
        std::fs::create_dir_all(codegen_root).map_err(|e| CacheError::Io {
            path: codegen_root.to_path_buf(),
            source: e,
        })?;
        let path = Self::path(codegen_root);
        std::fs::write(&path, &self.total).map_err(|e| CacheError::Io { path, source: e })
    }

    /// Deletes the manifest. Returns `false` if there was none.
    pub fn remove(codegen_root: &Path) -> Result<bool, CacheError> {
        let path = Self::path(codegen_root);
        match std::fs::remove_file(&path) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(CacheError::Io { path, source: e }),
        }
    }
}
