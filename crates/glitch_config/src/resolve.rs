//! Path resolution: anchoring configured paths at the project directory.

use crate::types::GlitchConfig;
use std::path::{Path, PathBuf};

/// Every configured path, resolved against the project directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPaths {
    /// The directory containing `glitch.toml`.
    pub project_dir: PathBuf,
    /// Absolute path of the schema file.
    pub schema_path: PathBuf,
    /// Include glob patterns, prefixed with the project directory.
    pub include: Vec<String>,
    /// Exclude glob patterns, prefixed with the project directory.
    pub exclude: Vec<String>,
    /// Output directory holding the manifest.
    pub codegen_root: PathBuf,
}

/// Resolves every path in `config` relative to `project_dir`.
///
/// Blank patterns are dropped. Absolute schema paths and patterns are kept
/// as they are.
pub fn resolve_paths(config: &GlitchConfig, project_dir: &Path) -> ResolvedPaths {
    ResolvedPaths {
        project_dir: project_dir.to_path_buf(),
        schema_path: project_dir.join(&config.schema.path),
        include: anchor_patterns(&config.documents.include, project_dir),
        exclude: anchor_patterns(&config.documents.exclude, project_dir),
        codegen_root: project_dir.join(&config.codegen.root),
    }
}

fn anchor_patterns(patterns: &[String], project_dir: &Path) -> Vec<String> {
    patterns
        .iter()
        .map(|p| p.trim())
        .filter(|p| !p.is_empty())
        .map(|p| project_dir.join(p).to_string_lossy().into_owned())
        .collect()
}
