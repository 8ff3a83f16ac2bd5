//! Diagnostic creation, severity management, and terminal rendering.
//!
//! [`Diagnostic`] carries a severity, a code, a primary span, labels, notes
//! and help text. The thread-safe [`DiagnosticSink`] accumulates them during a
//! codegen run and [`TerminalRenderer`] formats them for the console.

#![warn(missing_docs)]

pub mod code;
pub mod diagnostic;
pub mod label;
pub mod renderer;
pub mod severity;
pub mod sink;

pub use code::{Category, DiagnosticCode};
pub use diagnostic::Diagnostic;
pub use label::{Label, LabelStyle};
pub use renderer::{DiagnosticRenderer, TerminalRenderer};
pub use severity::Severity;
pub use sink::DiagnosticSink;
