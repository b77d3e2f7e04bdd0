//! Diagnostics and error reporting for the BL frontend.
//!
//! There is exactly one error kind: [`ParseError`]. The first violation found by
//! the lexer or the parser is fatal to the pipeline and is reported alone; there
//! is no recovery pass and no error list.

use std::fmt;

use miette::{Diagnostic, LabeledSpan, NamedSource, Report};
use thiserror::Error;

use crate::ast::Span;

/// A lex- or parse-time error with location information.
///
/// ## Notes
/// - `message` describes the violated rule; `notes` and `hints` carry optional
///   context rendered with the report.
/// - Construction never aborts the process; the error travels up as an ordinary
///   `Result::Err`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ParseError {
    pub message: String,
    pub span: Span,
    pub notes: Vec<String>,
    pub hints: Vec<String>,
}

impl ParseError {
    pub fn new(message: impl Into<String>, span: Span) -> Self {
        Self {
            message: message.into(),
            span,
            notes: Vec::new(),
            hints: Vec::new(),
        }
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hints.push(hint.into());
        self
    }
}

impl Diagnostic for ParseError {
    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        Some(Box::new(std::iter::once(LabeledSpan::new_with_span(
            None,
            self.span.start..self.span.end,
        ))))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        if self.notes.is_empty() && self.hints.is_empty() {
            return None;
        }
        let mut lines: Vec<String> = Vec::new();
        lines.extend(self.notes.iter().map(|note| format!("note: {note}")));
        lines.extend(self.hints.iter().cloned());
        Some(Box::new(lines.join("\n")))
    }
}

/// Render an error as a rich report with source context.
///
/// ## Parameters
/// - `file_name`: Display name for the source (shown in the snippet header).
/// - `source`: The full source text the error's span points into.
/// - `error`: The error to render.
///
/// ## Returns
/// - The formatted report, ready to print to stderr.
pub fn render(file_name: &str, source: &str, error: &ParseError) -> String {
    let report =
        Report::new(error.clone()).with_source_code(NamedSource::new(file_name, source.to_string()));
    format!("{report:?}")
}
