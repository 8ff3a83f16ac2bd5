//! Diagnostic rendering for the console.

use crate::diagnostic::Diagnostic;
use crate::label::LabelStyle;
use crate::severity::Severity;
use glitch_source::SourceDb;

/// Trait for rendering diagnostics into formatted output strings.
pub trait DiagnosticRenderer {
    /// Renders a single diagnostic into a formatted string.
    fn render(&self, diag: &Diagnostic, source_db: &SourceDb) -> String;
}

/// Renders diagnostics in a rustc-style terminal format.
///
/// Produces output like:
/// ```text
/// 💥 error[E202]: unknown fragment `UserFields`
///   --> src/routes/me.graphql:3:8
///    |
///  3 |     ...UserFields
///    |        ^^^^^^^^^^ not defined in any document
///    |
///   ::: src/fragments/user.graphql:1:10 similar fragment
///    = help: ...
/// ```
pub struct TerminalRenderer {
    /// Whether to use ANSI color codes in output.
    pub color: bool,
    /// The terminal width; source lines longer than this are truncated.
    pub width: u16,
}

impl TerminalRenderer {
    /// Creates a new terminal renderer.
    pub fn new(color: bool, width: u16) -> Self {
        Self { color, width }
    }

    fn paint(&self, severity: Severity, text: &str) -> String {
        if !self.color {
            return text.to_string();
        }
        let code = match severity {
            Severity::Error => "1;31",
            Severity::Warning => "1;33",
            Severity::Note | Severity::Help => "1;36",
        };
        format!("\x1b[{code}m{text}\x1b[0m")
    }
}

impl DiagnosticRenderer for TerminalRenderer {
    fn render(&self, diag: &Diagnostic, source_db: &SourceDb) -> String {
        let mut out = String::new();

        // Header line: marker severity[CODE]: message
        let header = format!("{}[{}]", diag.severity, diag.code);
        out.push_str(&format!(
            "{} {}: {}\n",
            diag.severity.marker(),
            self.paint(diag.severity, &header),
            diag.message
        ));

        if !diag.primary_span.is_dummy() {
            let resolved = source_db.resolve_span(diag.primary_span);
            out.push_str(&format!("  --> {resolved}\n"));

            let file = source_db.get_file(diag.primary_span.file);
            let (line, col) = file.line_col(diag.primary_span.start.min(file.len()));
            let line_num = format!("{line}");
            let padding = " ".repeat(line_num.len());

            let line_content = get_source_line(&file.content, diag.primary_span.start);
            let line_content: String = line_content.chars().take(self.width as usize).collect();

            out.push_str(&format!("{padding} |\n"));
            out.push_str(&format!("{line_num} | {line_content}\n"));

            let span_len = (diag.primary_span.end.saturating_sub(diag.primary_span.start)).max(1)
                as usize;
            let carets = "^".repeat(span_len);
            let col_padding = " ".repeat((col as usize).saturating_sub(1));

            let primary_msg = diag
                .labels
                .iter()
                .find(|l| l.style == LabelStyle::Primary)
                .map(|l| format!(" {}", l.message))
                .unwrap_or_default();

            out.push_str(&format!(
                "{padding} | {col_padding}{}{primary_msg}\n",
                self.paint(diag.severity, &carets)
            ));

            for label in diag
                .labels
                .iter()
                .filter(|l| l.style == LabelStyle::Secondary && !l.span.is_dummy())
            {
                let at = source_db.resolve_span(label.span);
                out.push_str(&format!("{padding} ::: {at} {}\n", label.message));
            }
        }

        for note in &diag.notes {
            out.push_str(&format!("   = note: {note}\n"));
        }

        for help in &diag.help {
            out.push_str(&format!("   = help: {help}\n"));
        }

        out
    }
}

/// Extracts the line of source code containing the given byte offset.
fn get_source_line(content: &str, byte_offset: u32) -> &str {
    let mut offset = (byte_offset as usize).min(content.len());
    while !content.is_char_boundary(offset) {
        offset -= 1;
    }
    let start = content[..offset].rfind('\n').map_or(0, |pos| pos + 1);
    let end = content[offset..]
        .find('\n')
        .map_or(content.len(), |pos| offset + pos);
    &content[start..end]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::code::{Category, DiagnosticCode};
    use crate::label::Label;
    use glitch_source::Span;

    #[test]
    fn render_error_with_span() {
        let mut source_db = SourceDb::new();
        let file_id = source_db.add_source(
            "src/me.graphql",
            "query Me {\n  ...UserFields\n}\n".to_string(),
        );

        let code = DiagnosticCode::new(Category::Error, 202);
        let span = Span::new(file_id, 16, 26);
        let diag = Diagnostic::error(code, "unknown fragment `UserFields`", span)
            .with_label(Label::primary(span, "not defined in any document"));

        let output = TerminalRenderer::new(false, 80).render(&diag, &source_db);

        assert!(output.starts_with("💥 error[E202]: unknown fragment `UserFields`"));
        assert!(output.contains("--> src/me.graphql:2:6"));
        assert!(output.contains("  ...UserFields"));
        assert!(output.contains("^^^^^^^^^^ not defined in any document"));
    }

    #[test]
    fn render_secondary_label_location() {
        let mut source_db = SourceDb::new();
        let a = source_db.add_source("a.graphql", "query Me { id }".to_string());
        let b = source_db.add_source("b.graphql", "query Me { name }".to_string());

        let code = DiagnosticCode::new(Category::Error, 201);
        let diag = Diagnostic::error(code, "duplicate name `Me`", Span::new(b, 6, 8))
            .with_label(Label::secondary(Span::new(a, 6, 8), "first defined here"));

        let output = TerminalRenderer::new(false, 80).render(&diag, &source_db);
        assert!(output.contains("--> b.graphql:1:7"));
        assert!(output.contains("::: a.graphql:1:7 first defined here"));
    }

    #[test]
    fn render_warning_with_notes() {
        let source_db = SourceDb::new();
        let code = DiagnosticCode::new(Category::Warning, 201);
        let diag = Diagnostic::warning(code, "unused fragment", Span::DUMMY)
            .with_note("fragment `X` is never spread")
            .with_help("remove it");

        let output = TerminalRenderer::new(false, 80).render(&diag, &source_db);
        assert!(output.contains("warning[W201]: unused fragment"));
        assert!(output.contains("= note: fragment `X` is never spread"));
        assert!(output.contains("= help: remove it"));
        assert!(!output.contains("-->"));
    }

    #[test]
    fn render_with_color_wraps_header() {
        let source_db = SourceDb::new();
        let code = DiagnosticCode::new(Category::Error, 401);
        let diag = Diagnostic::error(code, "cannot write manifest", Span::DUMMY);
        let output = TerminalRenderer::new(true, 80).render(&diag, &source_db);
        assert!(output.contains("\x1b[1;31merror[E401]\x1b[0m"));
    }

    #[test]
    fn source_line_past_end_is_last_line() {
        assert_eq!(get_source_line("query\nA", 100), "A");
        assert_eq!(get_source_line("", 0), "");
    }
}
