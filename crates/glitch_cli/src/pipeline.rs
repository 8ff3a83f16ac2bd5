//! Shared pipeline helpers for CLI commands.
//!
//! Project root resolution, configuration loading and diagnostic rendering
//! used by `codegen`, `check` and `clean`.

use std::path::{Path, PathBuf};

use glitch_cache::FsCollector;
use glitch_config::{GlitchConfig, ResolvedPaths, CONFIG_FILE};
use glitch_diagnostics::{DiagnosticRenderer, DiagnosticSink, TerminalRenderer};
use glitch_source::SourceDb;

use crate::GlobalArgs;

/// A loaded project: its configuration and resolved paths.
pub struct Project {
    /// The parsed configuration.
    pub config: GlitchConfig,
    /// Every configured path anchored at the project directory.
    pub paths: ResolvedPaths,
}

impl Project {
    /// A file-system collector over the project's schema and documents.
    pub fn collector(&self) -> FsCollector {
        FsCollector {
            project_dir: self.paths.project_dir.clone(),
            schema_path: self.paths.schema_path.clone(),
            include: self.paths.include.clone(),
            exclude: self.paths.exclude.clone(),
        }
    }
}

/// Walks up from `start` looking for the nearest directory containing `glitch.toml`.
///
/// Returns the directory containing `glitch.toml`, or an error if none is found.
pub fn find_project_root(start: &Path) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let mut current = start.to_path_buf();
    loop {
        if current.join(CONFIG_FILE).exists() {
            return Ok(current);
        }
        if !current.pop() {
            return Err(format!(
                "could not find {CONFIG_FILE} in {} or any parent directory",
                start.display()
            )
            .into());
        }
    }
}

/// Resolves the project root and config file from global CLI args.
///
/// If `--config` is specified, uses that path (file → its directory, dir →
/// `<dir>/glitch.toml`). Otherwise walks up from the current directory
/// looking for `glitch.toml`.
pub fn resolve_project_root(
    global: &GlobalArgs,
) -> Result<(PathBuf, PathBuf), Box<dyn std::error::Error>> {
    let root = match global.config {
        Some(ref config_path) => {
            let p = PathBuf::from(config_path);
            if p.is_file() {
                let dir = match p.parent() {
                    Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
                    _ => PathBuf::from("."),
                };
                return Ok((dir, p));
            }
            p
        }
        None => find_project_root(&std::env::current_dir()?)?,
    };
    let config_file = root.join(CONFIG_FILE);
    Ok((root, config_file))
}

/// Loads `glitch.toml` and resolves its paths.
pub fn load_project(global: &GlobalArgs) -> Result<Project, Box<dyn std::error::Error>> {
    let (project_dir, config_file) = resolve_project_root(global)?;
    let config = glitch_config::load_config_from_path(&config_file)
        .map_err(|e| format!("{}: {e}", config_file.display()))?;
    let paths = glitch_config::resolve_paths(&config, &project_dir);
    log::debug!(
        "project `{}` at {}, codegen root {}",
        config.project.name,
        project_dir.display(),
        paths.codegen_root.display()
    );
    Ok(Project { config, paths })
}

/// Renders all diagnostics from a sink to stderr using the terminal renderer.
///
/// Returns the number of diagnostics rendered.
pub fn render_diagnostics(sink: &DiagnosticSink, source_db: &SourceDb, color: bool) -> usize {
    let diagnostics = sink.diagnostics();
    let renderer = TerminalRenderer::new(color, 100);
    for diag in &diagnostics {
        eprintln!("{}", renderer.render(diag, source_db));
    }
    diagnostics.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const CONFIG: &str = "[project]\nname = \"t\"\n\n[schema]\npath = \"schema.graphql\"\n\n[documents]\ninclude = \"src/**/*.graphql\"\n";

    fn global(config: Option<&Path>) -> GlobalArgs {
        GlobalArgs {
            quiet: true,
            verbose: false,
            color: false,
            config: config.map(|p| p.to_string_lossy().into_owned()),
        }
    }

    #[test]
    fn find_project_root_in_current_dir() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("glitch.toml"), CONFIG).unwrap();
        let root = find_project_root(tmp.path()).unwrap();
        assert_eq!(root, tmp.path());
    }

    #[test]
    fn find_project_root_in_parent() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("glitch.toml"), CONFIG).unwrap();
        let sub = tmp.path().join("src").join("routes");
        fs::create_dir_all(&sub).unwrap();
        let root = find_project_root(&sub).unwrap();
        assert_eq!(root, tmp.path());
    }

    #[test]
    fn find_project_root_not_found() {
        let tmp = TempDir::new().unwrap();
        let result = find_project_root(tmp.path());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("could not find glitch.toml"));
    }

    #[test]
    fn config_flag_accepts_file_or_directory() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("glitch.toml");
        fs::write(&file, CONFIG).unwrap();

        let (dir, config) = resolve_project_root(&global(Some(&file))).unwrap();
        assert_eq!(dir, tmp.path());
        assert_eq!(config, file);

        let (dir, config) = resolve_project_root(&global(Some(tmp.path()))).unwrap();
        assert_eq!(dir, tmp.path());
        assert_eq!(config, file);
    }

    #[test]
    fn load_project_resolves_paths() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("glitch.toml"), CONFIG).unwrap();
        let project = load_project(&global(Some(tmp.path()))).unwrap();
        assert_eq!(project.config.project.name, "t");
        assert_eq!(project.paths.codegen_root, tmp.path().join(".glitch"));

        let collector = project.collector();
        assert_eq!(collector.schema_path, tmp.path().join("schema.graphql"));
        assert_eq!(collector.include.len(), 1);
    }

    #[test]
    fn load_project_reports_config_path() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("glitch.toml"), "[project]\nname = \"\"").unwrap();
        let err = load_project(&global(Some(tmp.path()))).err().unwrap();
        assert!(err.to_string().contains("glitch.toml"));
    }
}
