//! Gathering the schema and document sources of a run.

use std::collections::BTreeSet;
use std::io;
use std::path::{Path, PathBuf};

use glitch_source::{FileId, SourceDb, SourceFile};

use crate::error::CollectError;

/// The inputs of one run: a schema plus documents in discovery order.
pub struct SourceSet {
    db: SourceDb,
    schema: FileId,
    documents: Vec<FileId>,
}

impl SourceSet {
    /// Creates a set holding only the schema.
    pub fn new(schema_path: impl Into<PathBuf>, schema_source: impl Into<String>) -> Self {
        let mut db = SourceDb::new();
        let schema = db.add_source(schema_path, schema_source.into());
        Self {
            db,
            schema,
            documents: Vec::new(),
        }
    }

    /// Adds a document under its logical path.
    pub fn add_document(&mut self, path: impl Into<PathBuf>, source: impl Into<String>) -> FileId {
        let id = self.db.add_source(path, source.into());
        self.documents.push(id);
        id
    }

    /// Reads the document at `path` from disk and adds it under
    /// `logical_path`.
    pub fn load_document(&mut self, path: &Path, logical_path: &Path) -> io::Result<FileId> {
        let id = self.db.load_file(path, logical_path)?;
        self.documents.push(id);
        Ok(id)
    }

    /// The database holding every source in the set.
    pub fn source_db(&self) -> &SourceDb {
        &self.db
    }

    /// The schema source.
    pub fn schema(&self) -> &SourceFile {
        self.db.get_file(self.schema)
    }

    /// The document sources in discovery order.
    pub fn documents(&self) -> impl Iterator<Item = &SourceFile> {
        self.documents.iter().map(|&id| self.db.get_file(id))
    }

    /// Number of documents.
    pub fn document_count(&self) -> usize {
        self.documents.len()
    }
}

/// Something that can produce the sources of a run.
pub trait SourceCollector {
    /// Collects the current schema and documents.
    fn collect(&self) -> Result<SourceSet, CollectError>;
}

/// Collects sources from the file system.
///
/// Document paths are matched against `include` glob patterns and dropped if
/// they match any `exclude` pattern. Patterns are expected to be absolute
/// (anchored at the project directory). Sources are registered under their
/// path relative to `project_dir`, which is what diagnostics show and what
/// document hashes cover.
#[derive(Debug, Clone)]
pub struct FsCollector {
    /// Project root; logical paths are relative to it.
    pub project_dir: PathBuf,
    /// The schema file.
    pub schema_path: PathBuf,
    /// Document include patterns.
    pub include: Vec<String>,
    /// Document exclude patterns.
    pub exclude: Vec<String>,
}

impl FsCollector {
    fn logical_path(&self, path: &Path) -> PathBuf {
        path.strip_prefix(&self.project_dir)
            .map(Path::to_path_buf)
            .unwrap_or_else(|_| path.to_path_buf())
    }

    /// Expands the include patterns, minus excludes, sorted and de-duplicated.
    pub fn document_paths(&self) -> Result<Vec<PathBuf>, CollectError> {
        let excludes = self
            .exclude
            .iter()
            .map(|p| {
                glob::Pattern::new(p).map_err(|source| CollectError::Pattern {
                    pattern: p.clone(),
                    source,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let mut paths = BTreeSet::new();
        for pattern in &self.include {
            let entries = glob::glob(pattern).map_err(|source| CollectError::Pattern {
                pattern: pattern.clone(),
                source,
            })?;
            for entry in entries {
                let path = entry.map_err(|e| CollectError::Io {
                    path: e.path().to_path_buf(),
                    source: e.into(),
                })?;
                if !path.is_file() || excludes.iter().any(|ex| ex.matches_path(&path)) {
                    continue;
                }
                paths.insert(path);
            }
        }
        log::debug!("matched {} document(s)", paths.len());
        Ok(paths.into_iter().collect())
    }
}

impl SourceCollector for FsCollector {
    fn collect(&self) -> Result<SourceSet, CollectError> {
        let schema = std::fs::read_to_string(&self.schema_path).map_err(|e| CollectError::Io {
            path: self.schema_path.clone(),
            source: e,
        })?;
        let mut set = SourceSet::new(self.logical_path(&self.schema_path), schema);

        for path in self.document_paths()? {
            set.load_document(&path, &self.logical_path(&path))
                .map_err(|e| CollectError::Io {
                    path: path.clone(),
                    source: e,
                })?;
        }
        Ok(set)
    }
}
