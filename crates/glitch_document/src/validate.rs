//! Whole-set validation of artifacts.
//!
//! Each document is checked in isolation by [`parse_document`](crate::parse_document);
//! the checks here need every artifact at once: unique names, resolvable
//! fragment spreads, acyclic fragments and, when a schema is known, type
//! conditions that name real types.

use std::collections::HashMap;

use glitch_diagnostics::{Diagnostic, DiagnosticSink, Label};
use glitch_source::SourceDb;
use petgraph::algo::tarjan_scc;
use petgraph::graphmap::DiGraphMap;

use crate::artifact::{Artifact, ArtifactKind};
use crate::codes;
use crate::schema::Schema;
use crate::syntax::span_in;

/// Validates a complete artifact set. Returns `true` if no errors were found.
///
/// Diagnostics locate artifacts through `source_db` by their `file_path`; an
/// artifact whose file is not loaded is reported without a source location.
pub fn validate_artifacts<'a>(
    artifacts: impl IntoIterator<Item = &'a Artifact>,
    schema: Option<&Schema>,
    source_db: &SourceDb,
    sink: &DiagnosticSink,
) -> bool {
    let artifacts: Vec<&Artifact> = artifacts.into_iter().collect();
    let errors_before = sink.error_count();

    let by_name = check_duplicate_names(&artifacts, source_db, sink);
    check_fragment_spreads(&artifacts, &by_name, source_db, sink);
    check_fragment_cycles(&by_name, source_db, sink);
    if let Some(schema) = schema {
        check_type_conditions(&artifacts, schema, source_db, sink);
    }

    sink.error_count() == errors_before
}

/// Reports every artifact reusing an earlier artifact's name. Returns the
/// first artifact seen for each name.
fn check_duplicate_names<'a>(
    artifacts: &[&'a Artifact],
    source_db: &SourceDb,
    sink: &DiagnosticSink,
) -> HashMap<&'a str, &'a Artifact> {
    let mut by_name: HashMap<&str, &Artifact> = HashMap::new();
    for &artifact in artifacts {
        match by_name.get(artifact.name.as_str()) {
            Some(first) => {
                let span = span_in(source_db.find(&artifact.file_path), &artifact.name_range);
                let first_span = span_in(source_db.find(&first.file_path), &first.name_range);
                sink.emit(
                    Diagnostic::error(
                        codes::DUPLICATE_NAME,
                        format!("duplicate name `{}`", artifact.name),
                        span,
                    )
                    .with_label(Label::primary(span, format!("{} redefined here", artifact.kind)))
                    .with_label(Label::secondary(first_span, "first defined here"))
                    .with_note(format!("`{}` is also defined in {}", artifact.name, first.file_path.display()))
                    .with_help("operation and fragment names must be unique across all documents"),
                );
            }
            None => {
                by_name.insert(artifact.name.as_str(), artifact);
            }
        }
    }
    by_name
}

fn check_fragment_spreads(
    artifacts: &[&Artifact],
    by_name: &HashMap<&str, &Artifact>,
    source_db: &SourceDb,
    sink: &DiagnosticSink,
) {
    for &artifact in artifacts {
        let file = source_db.find(&artifact.file_path);
        for spread in &artifact.fragment_spreads {
            let target = by_name.get(spread.name.as_str());
            if matches!(target, Some(a) if a.kind == ArtifactKind::Fragment) {
                continue;
            }
            let span = span_in(file, &spread.range);
            let mut diag = Diagnostic::error(
                codes::UNKNOWN_FRAGMENT,
                format!("unknown fragment `{}`", spread.name),
                span,
            )
            .with_label(Label::primary(span, "not defined in any document"));
            if let Some(other) = target.filter(|a| a.kind.is_operation()) {
                diag = diag.with_note(format!(
                    "`{}` is a {}, not a fragment ({})",
                    spread.name,
                    other.kind,
                    other.file_path.display()
                ));
            }
            sink.emit(diag);
        }
    }
}

fn check_fragment_cycles(
    by_name: &HashMap<&str, &Artifact>,
    source_db: &SourceDb,
    sink: &DiagnosticSink,
) {
    let mut graph: DiGraphMap<&str, ()> = DiGraphMap::new();
    for (&name, artifact) in by_name {
        if artifact.kind != ArtifactKind::Fragment {
            continue;
        }
        graph.add_node(name);
        for target in artifact.spread_names() {
            if matches!(by_name.get(target), Some(a) if a.kind == ArtifactKind::Fragment) {
                graph.add_edge(name, target, ());
            }
        }
    }

    let mut cycles: Vec<Vec<&str>> = tarjan_scc(&graph)
        .into_iter()
        .filter(|scc| scc.len() > 1 || graph.contains_edge(scc[0], scc[0]))
        .map(|mut scc| {
            scc.sort_unstable();
            scc
        })
        .collect();
    cycles.sort();

    for cycle in cycles {
        let head = by_name[cycle[0]];
        let span = span_in(source_db.find(&head.file_path), &head.name_range);
        let names: Vec<String> = cycle.iter().map(|n| format!("`{n}`")).collect();
        let mut diag = Diagnostic::error(
            codes::FRAGMENT_CYCLE,
            format!("fragment cycle: {}", names.join(" -> ")),
            span,
        )
        .with_label(Label::primary(span, "fragment spreads itself"));
        for &name in &cycle[1..] {
            let member = by_name[name];
            diag = diag.with_label(Label::secondary(
                span_in(source_db.find(&member.file_path), &member.name_range),
                format!("`{name}` is part of the cycle"),
            ));
        }
        sink.emit(diag.with_help("break the cycle by removing one of the spreads"));
    }
}

fn check_type_conditions(
    artifacts: &[&Artifact],
    schema: &Schema,
    source_db: &SourceDb,
    sink: &DiagnosticSink,
) {
    for &artifact in artifacts {
        let Some(ty) = &artifact.type_condition else {
            continue;
        };
        if schema.has_type(ty) {
            continue;
        }
        let span = span_in(source_db.find(&artifact.file_path), &artifact.name_range);
        sink.emit(
            Diagnostic::error(
                codes::UNKNOWN_TYPE_CONDITION,
                format!("fragment `{}` is on unknown type `{ty}`", artifact.name),
                span,
            )
            .with_label(Label::primary(span, format!("declared `on {ty}`")))
            .with_help("check the type name against the schema"),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::parse_document;

    struct Fixture {
        db: SourceDb,
        artifacts: Vec<Artifact>,
    }

    fn fixture(docs: &[(&str, &str)]) -> Fixture {
        let mut db = SourceDb::new();
        let sink = DiagnosticSink::new();
        let mut artifacts = Vec::new();
        for (path, source) in docs {
            let id = db.add_source(*path, source.to_string());
            artifacts.push(parse_document(id, &db, &sink).expect("fixture must parse"));
        }
        assert!(!sink.has_errors());
        Fixture { db, artifacts }
    }

    fn run(f: &Fixture, schema: Option<&Schema>) -> (bool, Vec<Diagnostic>) {
        let sink = DiagnosticSink::new();
        let ok = validate_artifacts(&f.artifacts, schema, &f.db, &sink);
        (ok, sink.take_all())
    }

    fn codes_of(diags: &[Diagnostic]) -> Vec<String> {
        diags.iter().map(|d| d.code.to_string()).collect()
    }

    #[test]
    fn valid_set() {
        let f = fixture(&[
            ("a.graphql", "query Me { me { ...UserFields } }"),
            ("b.graphql", "fragment UserFields on User { id ...Avatar }"),
            ("c.graphql", "fragment Avatar on User { avatarUrl }"),
        ]);
        let (ok, diags) = run(&f, None);
        assert!(ok);
        assert!(diags.is_empty());
    }

    #[test]
    fn empty_set_is_valid() {
        let db = SourceDb::new();
        let sink = DiagnosticSink::new();
        assert!(validate_artifacts(std::iter::empty(), None, &db, &sink));
    }

    #[test]
    fn duplicate_names_across_files() {
        let f = fixture(&[
            ("a.graphql", "query Me { id }"),
            ("b.graphql", "query Me { name }"),
        ]);
        let (ok, diags) = run(&f, None);
        assert!(!ok);
        assert_eq!(codes_of(&diags), vec!["E201"]);
        let diag = &diags[0];
        assert_eq!(f.db.resolve_span(diag.primary_span).file_path.to_str(), Some("b.graphql"));
        assert!(diag.labels.iter().any(|l| l.message == "first defined here"));
    }

    #[test]
    fn fragment_and_operation_share_name() {
        let f = fixture(&[
            ("a.graphql", "query User { id }"),
            ("b.graphql", "fragment User on User { id }"),
        ]);
        let (_, diags) = run(&f, None);
        assert_eq!(codes_of(&diags), vec!["E201"]);
    }

    #[test]
    fn unknown_fragment() {
        let f = fixture(&[("a.graphql", "query Me {\n  ...UserFields\n}\n")]);
        let (ok, diags) = run(&f, None);
        assert!(!ok);
        assert_eq!(codes_of(&diags), vec!["E202"]);
        assert_eq!(f.db.snippet(diags[0].primary_span), "UserFields");
    }

    #[test]
    fn spreading_an_operation_is_unknown_fragment() {
        let f = fixture(&[
            ("a.graphql", "query Me { ...Other }"),
            ("b.graphql", "query Other { id }"),
        ]);
        let (_, diags) = run(&f, None);
        assert_eq!(codes_of(&diags), vec!["E202"]);
        assert!(diags[0].notes[0].contains("is a query, not a fragment"));
    }

    #[test]
    fn fragment_cycle() {
        let f = fixture(&[
            ("a.graphql", "fragment A on User { ...B }"),
            ("b.graphql", "fragment B on User { ...A }"),
        ]);
        let (ok, diags) = run(&f, None);
        assert!(!ok);
        assert_eq!(codes_of(&diags), vec!["E203"]);
        assert!(diags[0].message.contains("`A` -> `B`"));
    }

    #[test]
    fn self_spread_is_a_cycle() {
        let f = fixture(&[("a.graphql", "fragment A on User { id ...A }")]);
        let (_, diags) = run(&f, None);
        assert_eq!(codes_of(&diags), vec!["E203"]);
    }

    #[test]
    fn diamond_is_not_a_cycle() {
        let f = fixture(&[
            ("a.graphql", "fragment A on User { ...B ...C }"),
            ("b.graphql", "fragment B on User { ...D }"),
            ("c.graphql", "fragment C on User { ...D }"),
            ("d.graphql", "fragment D on User { id }"),
        ]);
        let (ok, _) = run(&f, None);
        assert!(ok);
    }

    #[test]
    fn unknown_type_condition_with_schema() {
        let mut db = SourceDb::new();
        let schema_id = db.add_source("schema.graphql", "type User { id: ID! }".to_string());
        let sink = DiagnosticSink::new();
        let schema = Schema::parse(schema_id, &db, &sink).unwrap();

        let f = fixture(&[
            ("a.graphql", "fragment Good on User { id }"),
            ("b.graphql", "fragment Bad on Ghost { id }"),
        ]);
        let (ok, diags) = run(&f, Some(&schema));
        assert!(!ok);
        assert_eq!(codes_of(&diags), vec!["E204"]);
        assert!(diags[0].message.contains("`Ghost`"));

        // Without a schema the type condition is not checked.
        let (ok, _) = run(&f, None);
        assert!(ok);
    }

    #[test]
    fn unloaded_file_uses_dummy_span() {
        let f = fixture(&[("a.graphql", "query Me { ...Missing }")]);
        let empty = SourceDb::new();
        let sink = DiagnosticSink::new();
        assert!(!validate_artifacts(&f.artifacts, None, &empty, &sink));
        assert!(sink.diagnostics()[0].primary_span.is_dummy());
    }
}
