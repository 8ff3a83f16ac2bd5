//! The parsed GraphQL schema.

use std::collections::BTreeSet;

use apollo_parser::cst;
use apollo_parser::Parser;
use glitch_diagnostics::{Diagnostic, DiagnosticSink, Label};
use glitch_source::{FileId, SourceDb, Span};

use crate::codes;
use crate::syntax::{is_blank, node_range, report_syntax_errors};

/// Scalars every schema has without declaring them.
pub const BUILTIN_SCALARS: [&str; 5] = ["Int", "Float", "String", "Boolean", "ID"];

/// A parsed schema and the names of the types it defines.
#[derive(Clone, Debug)]
pub struct Schema {
    /// Parsed schema document.
    pub document: cst::Document,
    types: BTreeSet<String>,
}

impl Schema {
    /// Parses the schema file `file_id`.
    ///
    /// Syntax errors and executable definitions (operations, fragments) are
    /// reported to `sink` and yield `None`. A blank or comment-only schema is
    /// valid and defines only the built-in scalars.
    pub fn parse(file_id: FileId, source_db: &SourceDb, sink: &DiagnosticSink) -> Option<Schema> {
        let file = source_db.get_file(file_id);
        let tree = Parser::new(&file.content).parse();

        if !is_blank(&file.content)
            && report_syntax_errors(
                tree.errors(),
                file,
                file_id,
                codes::SCHEMA_SYNTAX,
                "schema",
                sink,
            )
        {
            return None;
        }

        let document = tree.document();
        let mut types: BTreeSet<String> =
            BUILTIN_SCALARS.iter().map(|s| s.to_string()).collect();
        let mut valid = true;

        for definition in document.definitions() {
            let name = match &definition {
                cst::Definition::ObjectTypeDefinition(d) => d.name(),
                cst::Definition::InterfaceTypeDefinition(d) => d.name(),
                cst::Definition::UnionTypeDefinition(d) => d.name(),
                cst::Definition::EnumTypeDefinition(d) => d.name(),
                cst::Definition::ScalarTypeDefinition(d) => d.name(),
                cst::Definition::InputObjectTypeDefinition(d) => d.name(),
                cst::Definition::ObjectTypeExtension(d) => d.name(),
                cst::Definition::InterfaceTypeExtension(d) => d.name(),
                cst::Definition::UnionTypeExtension(d) => d.name(),
                cst::Definition::EnumTypeExtension(d) => d.name(),
                cst::Definition::ScalarTypeExtension(d) => d.name(),
                cst::Definition::InputObjectTypeExtension(d) => d.name(),
                cst::Definition::OperationDefinition(_) | cst::Definition::FragmentDefinition(_) => {
                    let range = node_range(&definition);
                    let span = Span::new(file_id, range.start, range.end);
                    sink.emit(
                        Diagnostic::error(
                            codes::SCHEMA_EXECUTABLE_DEFINITION,
                            "GraphQL schema error: the schema may not contain operations or fragments",
                            span,
                        )
                        .with_label(Label::primary(span, "executable definition"))
                        .with_help("move it into a document matched by `documents.include`"),
                    );
                    valid = false;
                    None
                }
                _ => None,
            };
            if let Some(name) = name {
                types.insert(name.text().to_string());
            }
        }

        valid.then_some(Schema { document, types })
    }

    /// Returns `true` if the schema defines (or builds in) a type named `name`.
    pub fn has_type(&self, name: &str) -> bool {
        self.types.contains(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(source: &str) -> (Option<Schema>, DiagnosticSink) {
        let mut db = SourceDb::new();
        let id = db.add_source("schema.graphql", source.to_string());
        let sink = DiagnosticSink::new();
        let schema = Schema::parse(id, &db, &sink);
        (schema, sink)
    }

    #[test]
    fn collects_type_names() {
        let (schema, sink) = parse(
            "type Query { me: User }\n\
             type User implements Node { id: ID! }\n\
             interface Node { id: ID! }\n\
             union SearchResult = User\n\
             enum Role { ADMIN USER }\n\
             scalar DateTime\n\
             input FollowInput { id: ID! }\n\
             extend type Post { id: ID! }\n",
        );
        assert!(!sink.has_errors());
        let schema = schema.unwrap();
        for name in [
            "Query",
            "User",
            "Node",
            "SearchResult",
            "Role",
            "DateTime",
            "FollowInput",
            "Post",
        ] {
            assert!(schema.has_type(name), "missing {name}");
        }
        assert!(!schema.has_type("Missing"));
    }

    #[test]
    fn builtin_scalars_always_present() {
        let (schema, _) = parse("type Query { ok: Boolean }");
        let schema = schema.unwrap();
        for name in BUILTIN_SCALARS {
            assert!(schema.has_type(name));
        }
    }

    #[test]
    fn syntax_error() {
        let (schema, sink) = parse("type Query { me: ");
        assert!(schema.is_none());
        let diags = sink.diagnostics();
        assert!(!diags.is_empty());
        assert!(diags.iter().all(|d| d.code.to_string() == "E101"));
        assert!(diags[0].message.starts_with("GraphQL schema error:"));
    }

    #[test]
    fn executable_definition_rejected() {
        let (schema, sink) = parse("type Query { id: ID }\nquery Me { id }");
        assert!(schema.is_none());
        let codes: Vec<String> = sink
            .diagnostics()
            .iter()
            .map(|d| d.code.to_string())
            .collect();
        assert_eq!(codes, vec!["E102"]);
    }

    #[test]
    fn empty_schema_is_valid() {
        let (schema, sink) = parse("");
        assert!(!sink.has_errors());
        assert!(schema.unwrap().has_type("String"));
    }

    #[test]
    fn comment_only_schema_is_valid() {
        let (schema, sink) = parse("# types come later
");
        assert!(!sink.has_errors());
        let schema = schema.unwrap();
        assert!(schema.has_type("ID"));
        assert!(!schema.has_type("Query"));
    }
}
