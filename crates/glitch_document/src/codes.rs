//! Diagnostic codes emitted while parsing and validating GraphQL sources.

use glitch_diagnostics::{Category, DiagnosticCode};

/// The schema does not parse.
pub const SCHEMA_SYNTAX: DiagnosticCode = DiagnosticCode::new(Category::Error, 101);
/// The schema contains an operation or fragment.
pub const SCHEMA_EXECUTABLE_DEFINITION: DiagnosticCode = DiagnosticCode::new(Category::Error, 102);

/// A document does not parse.
pub const DOCUMENT_SYNTAX: DiagnosticCode = DiagnosticCode::new(Category::Error, 111);
/// A document has no definitions.
pub const EMPTY_DOCUMENT: DiagnosticCode = DiagnosticCode::new(Category::Error, 112);
/// A document has more than one definition.
pub const MULTIPLE_DEFINITIONS: DiagnosticCode = DiagnosticCode::new(Category::Error, 113);
/// A document contains a schema (type-system) definition.
pub const TYPE_SYSTEM_IN_DOCUMENT: DiagnosticCode = DiagnosticCode::new(Category::Error, 114);
/// A document's operation has no name.
pub const ANONYMOUS_DEFINITION: DiagnosticCode = DiagnosticCode::new(Category::Error, 115);

/// Two artifacts share a name.
pub const DUPLICATE_NAME: DiagnosticCode = DiagnosticCode::new(Category::Error, 201);
/// A fragment spread names no known fragment.
pub const UNKNOWN_FRAGMENT: DiagnosticCode = DiagnosticCode::new(Category::Error, 202);
/// Fragments spread each other in a cycle.
pub const FRAGMENT_CYCLE: DiagnosticCode = DiagnosticCode::new(Category::Error, 203);
/// A fragment's type condition names a type missing from the schema.
pub const UNKNOWN_TYPE_CONDITION: DiagnosticCode = DiagnosticCode::new(Category::Error, 204);
