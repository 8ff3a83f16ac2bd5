//! Parsing a single document into an [`Artifact`].

use apollo_parser::cst;
use apollo_parser::Parser;
use glitch_diagnostics::{Diagnostic, DiagnosticSink, Label};
use glitch_source::{FileId, SourceDb, SourceFile, Span};

use crate::artifact::{Artifact, ArtifactKind};
use crate::codes;
use crate::syntax::{collect_spreads, is_blank, name_range, node_range, report_syntax_errors};

/// Parses the document `file_id` and checks its shape.
///
/// A valid document holds exactly one executable definition, and that
/// definition is named. Anything else is reported to `sink` and yields
/// `None`.
pub fn parse_document(
    file_id: FileId,
    source_db: &SourceDb,
    sink: &DiagnosticSink,
) -> Option<Artifact> {
    let file = source_db.get_file(file_id);
    if is_blank(&file.content) {
        report_empty(file, file_id, sink);
        return None;
    }

    let tree = Parser::new(&file.content).parse();
    if report_syntax_errors(
        tree.errors(),
        file,
        file_id,
        codes::DOCUMENT_SYNTAX,
        "document",
        sink,
    ) {
        return None;
    }

    let document = tree.document();
    let definitions: Vec<cst::Definition> = document.definitions().collect();

    let definition = match definitions.as_slice() {
        [] => {
            report_empty(file, file_id, sink);
            return None;
        }
        [single] => single.clone(),
        [_, second, ..] => {
            let range = node_range(second);
            let span = Span::new(file_id, range.start, range.end);
            sink.emit(
                Diagnostic::error(
                    codes::MULTIPLE_DEFINITIONS,
                    format!(
                        "GraphQL document error: expected exactly one definition, found {}",
                        definitions.len()
                    ),
                    span,
                )
                .with_label(Label::primary(span, "extra definition"))
                .with_help("move each operation and fragment into its own file"),
            );
            return None;
        }
    };

    let (kind, name, selection_set, type_condition) = match &definition {
        cst::Definition::OperationDefinition(op) => {
            let kind = operation_kind(op.operation_type());
            (kind, op.name(), op.selection_set(), None)
        }
        cst::Definition::FragmentDefinition(frag) => {
            let type_condition = frag
                .type_condition()
                .and_then(|tc| tc.named_type())
                .and_then(|nt| nt.name())
                .map(|n| n.text().to_string());
            (
                ArtifactKind::Fragment,
                frag.fragment_name().and_then(|n| n.name()),
                frag.selection_set(),
                type_condition,
            )
        }
        other => {
            let range = node_range(other);
            let span = Span::new(file_id, range.start, range.end);
            sink.emit(
                Diagnostic::error(
                    codes::TYPE_SYSTEM_IN_DOCUMENT,
                    "GraphQL document error: documents may only contain operations and fragments",
                    span,
                )
                .with_label(Label::primary(span, "schema definition"))
                .with_help("move type definitions into the schema file"),
            );
            return None;
        }
    };

    let Some(name) = name else {
        let range = node_range(&definition);
        let span = Span::new(file_id, range.start, range.start);
        sink.emit(
            Diagnostic::error(
                codes::ANONYMOUS_DEFINITION,
                format!("GraphQL document error: anonymous {kind}"),
                span,
            )
            .with_note("generated code is keyed by definition name")
            .with_help(format!("name it, e.g. `{kind} MyName {{ ... }}`")),
        );
        return None;
    };

    let mut fragment_spreads = Vec::new();
    if let Some(set) = selection_set {
        collect_spreads(&set, &mut fragment_spreads);
    }

    Some(Artifact {
        kind,
        name: name.text().to_string(),
        file_path: file.path.clone(),
        source: file.content.clone(),
        document,
        name_range: name_range(&name),
        type_condition,
        fragment_spreads,
    })
}

/// Maps the operation keyword to an artifact kind; the `{ ... }` shorthand is
/// a query.
fn operation_kind(ty: Option<cst::OperationType>) -> ArtifactKind {
    match ty {
        Some(ty) if ty.mutation_token().is_some() => ArtifactKind::Mutation,
        Some(ty) if ty.subscription_token().is_some() => ArtifactKind::Subscription,
        _ => ArtifactKind::Query,
    }
}

fn report_empty(file: &SourceFile, file_id: FileId, sink: &DiagnosticSink) {
    sink.emit(
        Diagnostic::error(
            codes::EMPTY_DOCUMENT,
            format!("GraphQL document error: {} has no definitions", file.path.display()),
            Span::file_start(file_id),
        )
        .with_help("add one named operation or fragment, or delete the file"),
    );
}
