//! Incremental codegen cache for GraphQL documents.
//!
//! A [`CodegenSession`] owns the parsed schema and artifacts of a project and
//! brings them up to date with the sources of each run. A run hashes the
//! schema and every document; when the aggregate hash matches the `.hash`
//! manifest in the codegen root nothing is parsed. Otherwise only documents
//! with new hashes are parsed, the full set is validated, and the result is
//! committed as a whole. A failed run leaves both the session state and the
//! manifest untouched.

#![warn(missing_docs)]

pub mod diff;
pub mod error;
pub mod manifest;
pub mod session;
pub mod sources;
pub mod state;

pub use diff::{ArtifactDiff, DiffEvent};
pub use error::{CacheError, CollectError};
pub use manifest::HashManifest;
pub use session::{CodegenSession, CollectOptions, CollectOutcome};
pub use sources::{FsCollector, SourceCollector, SourceSet};
pub use state::CodegenState;
