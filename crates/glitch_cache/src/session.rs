//! The incremental collection run.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use glitch_common::ContentHash;
use glitch_diagnostics::{Diagnostic, DiagnosticSink};
use glitch_document::{parse_document, validate_artifacts, Schema};
use glitch_source::Span;
use log::debug;

use crate::diff::ArtifactDiff;
use crate::manifest::{aggregate_hash, HashManifest, MANIFEST_WRITE};
use crate::sources::SourceSet;
use crate::state::CodegenState;

/// Knobs for a single [`CodegenSession::collect_documents`] run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollectOptions {
    /// Ignore a matching manifest and run the full pipeline.
    pub force: bool,
    /// Write the manifest after a successful run.
    pub persist: bool,
}

impl Default for CollectOptions {
    fn default() -> Self {
        Self {
            force: false,
            persist: true,
        }
    }
}

/// Result of a run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollectOutcome {
    /// `false` if any source failed to parse or validate, or the manifest
    /// could not be written. Downstream generation must not proceed.
    pub success: bool,
    /// `true` if the schema or the artifact set changed, so downstream
    /// generation has work to do. Changes committed by an earlier run that
    /// failed to write the manifest, or did not persist it, count too.
    pub refreshed: bool,
    /// Artifact names removed and added by this run.
    pub diff: ArtifactDiff,
}

impl CollectOutcome {
    fn failed() -> Self {
        Self::default()
    }

    fn unchanged() -> Self {
        Self {
            success: true,
            ..Self::default()
        }
    }
}

/// Codegen state for one project, brought up to date run by run.
///
/// Each run computes its changes on a copy of the artifacts and commits them
/// only once the whole set has validated, so a failed run leaves the state
/// and the manifest exactly as they were.
pub struct CodegenSession {
    codegen_root: PathBuf,
    state: CodegenState,
}

impl CodegenSession {
    /// Creates a session with empty state writing its manifest into
    /// `codegen_root`.
    pub fn new(codegen_root: impl Into<PathBuf>) -> Self {
        Self {
            codegen_root: codegen_root.into(),
            state: CodegenState::new(),
        }
    }

    /// Directory holding the manifest.
    pub fn codegen_root(&self) -> &Path {
        &self.codegen_root
    }

    /// The committed state.
    pub fn state(&self) -> &CodegenState {
        &self.state
    }

    /// Brings the state up to date with `inputs`.
    ///
    /// Problems in sources are reported to `sink`; this never returns an
    /// error or panics on bad input.
    pub fn collect_documents(
        &mut self,
        inputs: &SourceSet,
        options: CollectOptions,
        sink: &DiagnosticSink,
    ) -> CollectOutcome {
        let schema_file = inputs.schema();
        let schema_hash = schema_file.content_hash;

        let staged_schema = if self.state.schema_hash != Some(schema_hash) {
            debug!("schema {} changed, parsing", schema_file.path.display());
            match Schema::parse(schema_file.id, inputs.source_db(), sink) {
                Some(schema) => Some(schema),
                None => return CollectOutcome::failed(),
            }
        } else {
            None
        };
        let schema_refreshed = staged_schema.is_some();

        let mut document_hashes: Vec<ContentHash> =
            inputs.documents().map(|f| f.identity_hash).collect();
        document_hashes.sort();
        let total = aggregate_hash(&schema_hash, &document_hashes);

        if !options.force {
            if let Some(manifest) = HashManifest::load(&self.codegen_root) {
                if manifest.matches(&total) {
                    debug!("manifest {total} matches, skipping");
                    self.commit_schema(staged_schema, schema_hash);
                    self.state.pending_refresh = false;
                    return CollectOutcome::unchanged();
                }
            }
        }

        let current: HashSet<ContentHash> = document_hashes.iter().copied().collect();
        let mut diff = ArtifactDiff::default();
        let mut artifacts = self.state.artifacts.clone();

        artifacts.retain(|hash, artifact| {
            let keep = current.contains(hash);
            if !keep {
                diff.removed.push(artifact.name.clone());
            }
            keep
        });

        let mut parsed = true;
        for file in inputs.documents() {
            if artifacts.contains_key(&file.identity_hash) {
                continue;
            }
            debug!("parsing {}", file.path.display());
            match parse_document(file.id, inputs.source_db(), sink) {
                Some(artifact) => {
                    diff.added.push(artifact.name.clone());
                    artifacts.insert(file.identity_hash, artifact);
                }
                None => parsed = false,
            }
        }
        if !parsed {
            return CollectOutcome::failed();
        }

        let schema = staged_schema.as_ref().or(self.state.schema.as_ref());
        if !validate_artifacts(artifacts.values(), schema, inputs.source_db(), sink) {
            return CollectOutcome::failed();
        }

        debug!(
            "committing {} artifact(s): {} removed, {} added",
            artifacts.len(),
            diff.removed.len(),
            diff.added.len()
        );
        self.state.artifacts = artifacts;
        self.commit_schema(staged_schema, schema_hash);

        let refreshed = schema_refreshed || !diff.is_empty() || self.state.pending_refresh;
        if !options.persist {
            self.state.pending_refresh = refreshed;
            return CollectOutcome {
                success: true,
                refreshed,
                diff,
            };
        }

        if let Err(err) = HashManifest::new(&total).save(&self.codegen_root) {
            self.state.pending_refresh = refreshed;
            sink.emit(
                Diagnostic::error(
                    MANIFEST_WRITE,
                    format!("cannot write codegen manifest: {err}"),
                    Span::DUMMY,
                )
                .with_note("the next run reports these changes as refreshed again"),
            );
            return CollectOutcome {
                diff,
                ..CollectOutcome::failed()
            };
        }

        self.state.pending_refresh = false;
        CollectOutcome {
            success: true,
            refreshed,
            diff,
        }
    }

    fn commit_schema(&mut self, staged: Option<Schema>, hash: ContentHash) {
        if let Some(schema) = staged {
            self.state.schema = Some(schema);
            self.state.schema_hash = Some(hash);
        }
    }
}
