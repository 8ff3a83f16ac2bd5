//! Source text management for schema and document files.
//!
//! This crate provides the [`SourceDb`] that owns every GraphQL source read in
//! a codegen run, [`FileId`] and [`Span`] for pointing into it, and
//! [`ResolvedSpan`] for turning byte offsets into line/column coordinates.

#![warn(missing_docs)]

pub mod file_id;
pub mod resolved_span;
pub mod source_db;
pub mod source_file;
pub mod span;

pub use file_id::FileId;
pub use resolved_span::ResolvedSpan;
pub use source_db::SourceDb;
pub use source_file::SourceFile;
pub use span::Span;
