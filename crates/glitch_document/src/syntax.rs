//! Shared helpers over the `apollo-parser` CST.

use std::ops::Range;

use apollo_parser::cst::{self, CstNode};
use glitch_diagnostics::{Diagnostic, DiagnosticCode, DiagnosticSink, Label};
use glitch_source::{FileId, SourceFile, Span};

use crate::artifact::FragmentSpread;

/// Emits one diagnostic per parser error. Returns `true` if any were emitted.
pub(crate) fn report_syntax_errors<'a>(
    errors: impl IntoIterator<Item = &'a apollo_parser::Error>,
    file: &SourceFile,
    file_id: FileId,
    code: DiagnosticCode,
    what: &str,
    sink: &DiagnosticSink,
) -> bool {
    let mut any = false;
    for err in errors {
        any = true;
        let start = (err.index() as u32).min(file.len());
        let end = (start + err.data().len() as u32).min(file.len());
        let span = Span::new(file_id, start, end);
        sink.emit(
            Diagnostic::error(code, format!("GraphQL {what} error: {}", err.message()), span)
                .with_label(Label::primary(span, err.message().to_string())),
        );
    }
    any
}

/// Returns `true` if `source` holds nothing but ignored tokens: whitespace,
/// commas and comments. The parser rejects such input, so callers check first.
pub(crate) fn is_blank(source: &str) -> bool {
    source.split(['\n', '\r']).all(|line| {
        let line = line.trim_start_matches(|c: char| c.is_whitespace() || c == ',' || c == '\u{feff}');
        line.is_empty() || line.starts_with('#')
    })
}

/// Byte range of a node within its source.
pub(crate) fn node_range<N: CstNode>(node: &N) -> Range<u32> {
    let range = node.syntax().text_range();
    u32::from(range.start())..u32::from(range.end())
}

/// Byte range covering only the identifier of a name.
pub(crate) fn name_range(name: &cst::Name) -> Range<u32> {
    let start = u32::from(name.syntax().text_range().start());
    start..start + name.text().to_string().len() as u32
}

/// Collects every fragment spread in a selection set, recursing into fields
/// and inline fragments.
pub(crate) fn collect_spreads(set: &cst::SelectionSet, out: &mut Vec<FragmentSpread>) {
    for selection in set.selections() {
        match selection {
            cst::Selection::Field(field) => {
                if let Some(nested) = field.selection_set() {
                    collect_spreads(&nested, out);
                }
            }
            cst::Selection::FragmentSpread(spread) => {
                if let Some(name) = spread.fragment_name().and_then(|n| n.name()) {
                    out.push(FragmentSpread {
                        name: name.text().to_string(),
                        range: name_range(&name),
                    });
                }
            }
            cst::Selection::InlineFragment(inline) => {
                if let Some(nested) = inline.selection_set() {
                    collect_spreads(&nested, out);
                }
            }
        }
    }
}

/// Span for a source-relative byte range, or the dummy span when the file is
/// not loaded.
pub(crate) fn span_in(file: Option<FileId>, range: &Range<u32>) -> Span {
    match file {
        Some(id) => Span::new(id, range.start, range.end),
        None => Span::DUMMY,
    }
}
