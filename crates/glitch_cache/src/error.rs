//! Error types for cache and source collection operations.

use std::path::PathBuf;

/// Errors that can occur while reading or writing the cache manifest.
///
/// Reads are fail-safe and never produce this error: an unreadable manifest
/// is a cache miss. It surfaces from writes and from `glitch clean`.
#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    /// An I/O error occurred while reading or writing cache files.
    #[error("cache I/O error at {path}: {source}")]
    Io {
        /// The path that caused the error.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },
}

/// Errors that can occur while gathering the schema and document sources.
#[derive(Debug, thiserror::Error)]
pub enum CollectError {
    /// A source file or directory could not be read.
    #[error("cannot read {path}: {source}")]
    Io {
        /// The path that caused the error.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// A document include or exclude pattern is not a valid glob.
    #[error("invalid document pattern `{pattern}`: {source}")]
    Pattern {
        /// The offending pattern.
        pattern: String,
        /// The glob parser's complaint.
        source: glob::PatternError,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_error_display() {
        let err = CacheError::Io {
            path: PathBuf::from(".glitch/.hash"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        let msg = err.to_string();
        assert!(msg.contains("cache I/O error"));
        assert!(msg.contains(".hash"));
    }

    #[test]
    fn collect_io_display() {
        let err = CollectError::Io {
            path: PathBuf::from("schema.graphql"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert_eq!(err.to_string(), "cannot read schema.graphql: not found");
    }

    #[test]
    fn pattern_error_display() {
        let source = glob::Pattern::new("src/[*.graphql").unwrap_err();
        let err = CollectError::Pattern {
            pattern: "src/[*.graphql".to_string(),
            source,
        };
        assert!(err.to_string().starts_with("invalid document pattern `src/[*.graphql`"));
    }
}
