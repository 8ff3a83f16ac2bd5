//! GraphQL schema and document parsing for the codegen cache.
//!
//! Documents are parsed with `apollo-parser` into [`Artifact`]s: one named
//! operation or fragment per document. [`Schema`] wraps the parsed schema and
//! the set of type names it defines. The [`validate`] module checks a whole
//! artifact set for consistency before code generation.
//!
//! Problems in sources are reported as diagnostics; every entry point returns
//! `Option`/`bool` and leaves the details in the [`DiagnosticSink`](glitch_diagnostics::DiagnosticSink).

#![warn(missing_docs)]

pub mod artifact;
pub mod codes;
pub mod parse;
pub mod schema;
mod syntax;
pub mod validate;

pub use artifact::{Artifact, ArtifactKind, FragmentSpread};
pub use parse::parse_document;
pub use schema::Schema;
pub use validate::validate_artifacts;
