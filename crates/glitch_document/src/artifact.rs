//! Parsed, named GraphQL operations and fragments.

use apollo_parser::cst;
use serde::Serialize;
use std::fmt;
use std::ops::Range;
use std::path::PathBuf;

/// What a document defines.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtifactKind {
    /// A `query` operation.
    Query,
    /// A `mutation` operation.
    Mutation,
    /// A `subscription` operation.
    Subscription,
    /// A `fragment` definition.
    Fragment,
}

impl ArtifactKind {
    /// Returns `true` for queries, mutations and subscriptions.
    pub fn is_operation(self) -> bool {
        !matches!(self, ArtifactKind::Fragment)
    }

    /// The GraphQL keyword for this kind.
    pub fn as_str(self) -> &'static str {
        match self {
            ArtifactKind::Query => "query",
            ArtifactKind::Mutation => "mutation",
            ArtifactKind::Subscription => "subscription",
            ArtifactKind::Fragment => "fragment",
        }
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A `...Name` spread found inside a document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FragmentSpread {
    /// The spread fragment's name.
    pub name: String,
    /// Byte range of the name within the artifact's source.
    pub range: Range<u32>,
}

/// A parsed GraphQL operation or fragment tracked by the codegen cache.
///
/// Each artifact comes from exactly one document holding exactly one named
/// definition. Byte ranges are relative to `source`, so they stay valid for
/// as long as the artifact does, across runs that reload the file.
#[derive(Clone, Debug)]
pub struct Artifact {
    /// Operation type, or fragment.
    pub kind: ArtifactKind,
    /// The operation or fragment name.
    pub name: String,
    /// Logical path of the source document.
    pub file_path: PathBuf,
    /// Raw document text.
    pub source: String,
    /// Parsed document.
    pub document: cst::Document,
    /// Byte range of the defining name within `source`.
    pub name_range: Range<u32>,
    /// For fragments, the type named in `on Type`.
    pub type_condition: Option<String>,
    /// Every fragment spread in the document, in source order.
    pub fragment_spreads: Vec<FragmentSpread>,
}

impl Artifact {
    /// Names of the fragments this artifact spreads, without duplicates.
    pub fn spread_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for spread in &self.fragment_spreads {
            if !names.contains(&spread.name.as_str()) {
                names.push(&spread.name);
            }
        }
        names
    }
}
