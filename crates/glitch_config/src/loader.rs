//! Configuration file loading and validation.

use crate::error::ConfigError;
use crate::types::GlitchConfig;
use std::path::Path;

/// Name of the configuration file looked up in a project directory.
pub const CONFIG_FILE: &str = "glitch.toml";

/// Loads and validates `<project_dir>/glitch.toml`.
pub fn load_config(project_dir: &Path) -> Result<GlitchConfig, ConfigError> {
    load_config_from_path(&project_dir.join(CONFIG_FILE))
}

/// Loads and validates a configuration file at an explicit path.
pub fn load_config_from_path(config_path: &Path) -> Result<GlitchConfig, ConfigError> {
    let content = std::fs::read_to_string(config_path)?;
    load_config_from_str(&content)
}

/// Parses and validates a configuration from a string.
pub fn load_config_from_str(content: &str) -> Result<GlitchConfig, ConfigError> {
    let config: GlitchConfig =
        toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
    validate_config(&config)?;
    Ok(config)
}

/// Validates that required fields are present and values are usable.
fn validate_config(config: &GlitchConfig) -> Result<(), ConfigError> {
    if config.project.name.trim().is_empty() {
        return Err(ConfigError::MissingField("project.name".to_string()));
    }
    if config.schema.path.trim().is_empty() {
        return Err(ConfigError::MissingField("schema.path".to_string()));
    }
    if config.documents.include.iter().all(|p| p.trim().is_empty()) {
        return Err(ConfigError::MissingField("documents.include".to_string()));
    }
    if config.codegen.root.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "codegen.root must not be empty".to_string(),
        ));
    }
    if Path::new(&config.codegen.root).is_absolute() {
        return Err(ConfigError::ValidationError(format!(
            "codegen.root must be relative to the project, got '{}'",
            config.codegen.root
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"
[project]
name = "penxle"

[schema]
path = "schema.graphql"

[documents]
include = ["src/**/*.graphql"]
"#;

    #[test]
    fn parse_minimal_config() {
        let config = load_config_from_str(MINIMAL).unwrap();
        assert_eq!(config.project.name, "penxle");
        assert_eq!(config.schema.path, "schema.graphql");
        assert_eq!(config.documents.include, vec!["src/**/*.graphql"]);
    }

    #[test]
    fn missing_name_errors() {
        let toml = MINIMAL.replace("name = \"penxle\"", "name = \"\"");
        let err = load_config_from_str(&toml).unwrap_err();
        assert!(matches!(err, ConfigError::MissingField(ref f) if f == "project.name"));
    }

    #[test]
    fn missing_schema_path_errors() {
        let toml = MINIMAL.replace("path = \"schema.graphql\"", "path = \" \"");
        let err = load_config_from_str(&toml).unwrap_err();
        assert!(matches!(err, ConfigError::MissingField(ref f) if f == "schema.path"));
    }

    #[test]
    fn empty_include_errors() {
        let toml = MINIMAL.replace("include = [\"src/**/*.graphql\"]", "include = []");
        let err = load_config_from_str(&toml).unwrap_err();
        assert!(matches!(err, ConfigError::MissingField(ref f) if f == "documents.include"));
    }

    #[test]
    fn absolute_codegen_root_errors() {
        let toml = format!("{MINIMAL}\n[codegen]\nroot = \"/tmp/out\"\n");
        let err = load_config_from_str(&toml).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn missing_documents_section_is_parse_error() {
        let toml = "[project]\nname = \"x\"\n[schema]\npath = \"s.graphql\"\n";
        let err = load_config_from_str(toml).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn invalid_toml_errors() {
        let err = load_config_from_str("this is not valid toml {{{}}}").unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn load_from_project_dir() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE), MINIMAL).unwrap();
        let config = load_config(dir.path()).unwrap();
        assert_eq!(config.project.name, "penxle");
    }

    #[test]
    fn io_error_from_nonexistent_dir() {
        let err = load_config(Path::new("/nonexistent/dir")).unwrap_err();
        assert!(matches!(err, ConfigError::IoError(_)));
    }
}
