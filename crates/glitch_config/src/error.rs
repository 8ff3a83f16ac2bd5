//! Error types for configuration loading and validation.

/// Errors that can occur when loading or validating a `glitch.toml`.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("cannot read glitch.toml: {0}")]
    IoError(#[from] std::io::Error),

    /// The file is not valid TOML or does not match the expected tables.
    #[error("malformed glitch.toml: {0}")]
    ParseError(String),

    /// A required key is absent or blank.
    #[error("glitch.toml is missing `{0}`")]
    MissingField(String),

    /// A key is present but its value cannot be used.
    #[error("invalid glitch.toml: {0}")]
    ValidationError(String),
}
