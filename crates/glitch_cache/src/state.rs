//! In-memory codegen state carried across runs.

use glitch_common::ContentHash;
use glitch_document::{Artifact, Schema};
use indexmap::IndexMap;

/// Parsed schema and artifacts from the last successful run.
///
/// Artifacts are keyed by the identity hash of their document (logical path
/// plus text), in the order they were first added.
#[derive(Debug, Default)]
pub struct CodegenState {
    pub(crate) schema: Option<Schema>,
    pub(crate) schema_hash: Option<ContentHash>,
    pub(crate) artifacts: IndexMap<ContentHash, Artifact>,
    /// Set when committed changes have not yet been reported by a run that
    /// also wrote the manifest.
    pub(crate) pending_refresh: bool,
}

impl CodegenState {
    /// Creates an empty state: no schema, no artifacts.
    pub fn new() -> Self {
        Self::default()
    }

    /// The parsed schema, if one has been committed.
    pub fn schema(&self) -> Option<&Schema> {
        self.schema.as_ref()
    }

    /// Hash of the committed schema text.
    pub fn schema_hash(&self) -> Option<ContentHash> {
        self.schema_hash
    }

    /// All artifacts in insertion order.
    pub fn artifacts(&self) -> impl Iterator<Item = &Artifact> {
        self.artifacts.values()
    }

    /// Returns `true` if committed changes still await a persisted run.
    ///
    /// The next run reports `refreshed` even when its own diff is empty.
    pub fn pending_refresh(&self) -> bool {
        self.pending_refresh
    }

    /// Looks up an artifact by operation or fragment name.
    pub fn artifact(&self, name: &str) -> Option<&Artifact> {
        self.artifacts.values().find(|a| a.name == name)
    }

    /// Number of artifacts.
    pub fn len(&self) -> usize {
        self.artifacts.len()
    }

    /// Returns `true` if there are no artifacts.
    pub fn is_empty(&self) -> bool {
        self.artifacts.is_empty()
    }
}
