//! `glitch init`: project scaffolding command.
//!
//! Creates a `glitch.toml`, a starter `schema.graphql`, and one query and one
//! fragment under `src/` so that `glitch codegen` has something to do.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use glitch_config::CONFIG_FILE;

use crate::GlobalArgs;

const SCHEMA: &str = r#"type Query {
  me: User
}

type User {
  id: ID!
  name: String!
}
"#;

const ME_QUERY: &str = r#"query Me {
  me {
    ...UserFields
  }
}
"#;

const USER_FRAGMENT: &str = r#"fragment UserFields on User {
  id
  name
}
"#;

/// Runs the `glitch init` command.
///
/// If `name` is `Some`, creates a new subdirectory with that name.
/// Otherwise initializes in the current working directory.
/// Returns exit code 0 on success.
pub fn run(name: Option<String>, global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let project_dir = match &name {
        Some(n) => {
            let dir = PathBuf::from(n);
            if dir.exists() {
                return Err(format!("directory '{n}' already exists").into());
            }
            fs::create_dir_all(&dir)?;
            dir
        }
        None => std::env::current_dir()?,
    };

    if project_dir.join(CONFIG_FILE).exists() {
        return Err(format!("{CONFIG_FILE} already exists in {}", project_dir.display()).into());
    }

    let project_name = project_dir
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("my_project")
        .to_string();

    if !global.quiet {
        eprintln!("  Creating new Glitch project `{project_name}`");
    }

    let created = scaffold(&project_dir, &project_name)?;

    if !global.quiet {
        for path in created {
            eprintln!("     Created {}", path.display());
        }
    }
    Ok(0)
}

/// Writes the project files into `root` and returns their paths.
fn scaffold(root: &Path, name: &str) -> io::Result<Vec<PathBuf>> {
    let files = [
        (PathBuf::from(CONFIG_FILE), config_toml(name)),
        (PathBuf::from("schema.graphql"), SCHEMA.to_string()),
        (Path::new("src").join("queries").join("me.graphql"), ME_QUERY.to_string()),
        (Path::new("src").join("fragments").join("user.graphql"), USER_FRAGMENT.to_string()),
    ];

    let mut created = Vec::new();
    for (rel, content) in files {
        let path = root.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, content)?;
        created.push(path);
    }
    Ok(created)
}

fn config_toml(name: &str) -> String {
    format!(
        r#"[project]
name = "{name}"

[schema]
path = "schema.graphql"

[documents]
include = ["src/**/*.graphql"]

[codegen]
root = ".glitch"
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codegen;
    use crate::CodegenArgs;
    use tempfile::TempDir;

    #[test]
    fn scaffold_creates_files() {
        let tmp = TempDir::new().unwrap();
        let created = scaffold(tmp.path(), "demo").unwrap();
        assert_eq!(created.len(), 4);
        for path in &created {
            assert!(path.is_file(), "{} missing", path.display());
        }
    }

    #[test]
    fn generated_config_loads() {
        let config = glitch_config::load_config_from_str(&config_toml("demo")).unwrap();
        assert_eq!(config.project.name, "demo");
        assert_eq!(config.documents.include, vec!["src/**/*.graphql"]);
    }

    #[test]
    fn scaffolded_project_passes_codegen() {
        let tmp = TempDir::new().unwrap();
        scaffold(tmp.path(), "demo").unwrap();
        let global = GlobalArgs {
            quiet: true,
            verbose: false,
            color: false,
            config: Some(tmp.path().to_string_lossy().into_owned()),
        };
        let code = codegen::run(&CodegenArgs { force: false }, &global).unwrap();
        assert_eq!(code, 0);
        assert!(tmp.path().join(".glitch").join(".hash").exists());
    }
}
