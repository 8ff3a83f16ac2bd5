//! `glitch clean`: remove cache outputs from the codegen root.

use std::fs;
use std::io;

use glitch_cache::HashManifest;

use crate::codegen::ARTIFACT_INDEX_FILE;
use crate::pipeline::load_project;
use crate::GlobalArgs;

/// Runs the `glitch clean` command.
///
/// Deletes the `.hash` manifest and `artifacts.json` so the next `codegen`
/// run processes every document. Returns exit code 0.
pub fn run(global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let project = load_project(global)?;
    let root = &project.paths.codegen_root;

    let mut removed = Vec::new();
    if HashManifest::remove(root)? {
        removed.push(HashManifest::path(root));
    }

    let index = root.join(ARTIFACT_INDEX_FILE);
    match fs::remove_file(&index) {
        Ok(()) => removed.push(index),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {}
        Err(e) => return Err(format!("cannot remove {}: {e}", index.display()).into()),
    }

    if !global.quiet {
        if removed.is_empty() {
            eprintln!("   Nothing to clean in {}", root.display());
        }
        for path in &removed {
            eprintln!("     Removed {}", path.display());
        }
    }
    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;
    use tempfile::TempDir;

    fn global(root: &Path) -> GlobalArgs {
        GlobalArgs {
            quiet: true,
            verbose: false,
            color: false,
            config: Some(root.to_string_lossy().into_owned()),
        }
    }

    fn project() -> TempDir {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join("glitch.toml"),
            "[project]\nname = \"t\"\n[schema]\npath = \"schema.graphql\"\n[documents]\ninclude = \"*.graphql\"\n[codegen]\nroot = \"out\"\n",
        )
        .unwrap();
        tmp
    }

    #[test]
    fn removes_manifest_and_index() {
        let tmp = project();
        let out = tmp.path().join("out");
        fs::create_dir_all(&out).unwrap();
        fs::write(out.join(".hash"), "abc").unwrap();
        fs::write(out.join("artifacts.json"), "[]").unwrap();
        fs::write(out.join("keep.ts"), "").unwrap();

        assert_eq!(run(&global(tmp.path())).unwrap(), 0);
        assert!(!out.join(".hash").exists());
        assert!(!out.join("artifacts.json").exists());
        assert!(out.join("keep.ts").exists());
    }

    #[test]
    fn clean_without_outputs_succeeds() {
        let tmp = project();
        assert_eq!(run(&global(tmp.path())).unwrap(), 0);
    }
}
