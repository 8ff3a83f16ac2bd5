//! Parsing and validation of `glitch.toml` project configuration files.
//!
//! This crate reads the project configuration and produces a strongly-typed
//! [`GlitchConfig`], then resolves its relative paths against the project
//! directory into [`ResolvedPaths`].

#![warn(missing_docs)]

pub mod error;
pub mod loader;
pub mod resolve;
pub mod types;

pub use error::ConfigError;
pub use loader::{load_config, load_config_from_path, load_config_from_str, CONFIG_FILE};
pub use resolve::{resolve_paths, ResolvedPaths};
pub use types::*;
