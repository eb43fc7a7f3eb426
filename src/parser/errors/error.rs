//! Diagnostic value type and collector
//!
//! A [`Diagnostic`] carries:
//! - a severity level
//! - a categorized error code
//! - a human-readable message
//! - the source span it refers to
//! - optional notes (hints, context)

use std::fmt;

use super::codes::ErrorCode;
use super::context::ParseContext;
use crate::base::Span;

/// Severity level for diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Severity {
    /// Input that could not be interpreted
    #[default]
    Error,
    /// Input that was interpreted with a guess or skipped
    Warning,
    /// Informational note about how input was handled
    Info,
}

impl Severity {
    /// Check if this is an error
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error)
    }

    /// Get string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A diagnostic with location and message
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Diagnostic {
    pub severity: Severity,
    pub code: ErrorCode,
    pub message: String,
    pub span: Span,
    pub notes: Vec<String>,
}

impl Diagnostic {
    /// Create a new diagnostic with minimal information
    pub fn new(severity: Severity, code: ErrorCode, message: impl Into<String>, span: Span) -> Self {
        Self {
            severity,
            code,
            message: message.into(),
            span,
            notes: Vec::new(),
        }
    }

    pub fn error(code: ErrorCode, message: impl Into<String>, span: Span) -> Self {
        Self::new(Severity::Error, code, message, span)
    }

    pub fn warning(code: ErrorCode, message: impl Into<String>, span: Span) -> Self {
        Self::new(Severity::Warning, code, message, span)
    }

    pub fn info(code: ErrorCode, message: impl Into<String>, span: Span) -> Self {
        Self::new(Severity::Info, code, message, span)
    }

    /// Create a builder for more complex diagnostic construction
    pub fn builder(code: ErrorCode) -> DiagnosticBuilder {
        DiagnosticBuilder::new(code)
    }

    /// Add a note to this diagnostic
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// Set the severity
    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    pub fn is_error(&self) -> bool {
        self.severity.is_error()
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}: {}[{}]: {}",
            self.span.line, self.span.column, self.severity, self.code, self.message
        )
    }
}

/// Builder for creating diagnostics with notes
pub struct DiagnosticBuilder {
    code: ErrorCode,
    message: Option<String>,
    span: Span,
    severity: Severity,
    notes: Vec<String>,
}

impl DiagnosticBuilder {
    /// Create a new builder with an error code
    pub fn new(code: ErrorCode) -> Self {
        let severity = if code.is_warning_code() {
            Severity::Warning
        } else {
            Severity::Error
        };
        Self {
            code,
            message: None,
            span: Span::default(),
            severity,
            notes: Vec::new(),
        }
    }

    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// Build the diagnostic, falling back to the code's default message
    pub fn build(self) -> Diagnostic {
        Diagnostic {
            message: self
                .message
                .unwrap_or_else(|| self.code.default_message().to_string()),
            span: self.span,
            code: self.code,
            severity: self.severity,
            notes: self.notes,
        }
    }
}

/// Build an "expected X, found Y" diagnostic for a parse context
pub fn expected_in_context(expected: &str, found: &str, context: ParseContext, span: Span) -> Diagnostic {
    Diagnostic::builder(ErrorCode::E0202)
        .message(format!("expected {} {}, found {}", expected, context.description(), found))
        .span(span)
        .build()
}

/// Ordered collection of diagnostics for one parse
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DiagnosticCollector {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, diagnostic: Diagnostic) {
        tracing::trace!(code = %diagnostic.code, line = diagnostic.span.line, "{}", diagnostic.message);
        self.diagnostics.push(diagnostic);
    }

    pub fn extend(&mut self, diagnostics: impl IntoIterator<Item = Diagnostic>) {
        for diagnostic in diagnostics {
            self.add(diagnostic);
        }
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn error_count(&self) -> usize {
        self.diagnostics.iter().filter(|d| d.is_error()).count()
    }

    pub fn warning_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Warning)
            .count()
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(Diagnostic::is_error)
    }

    pub fn into_vec(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagnostic_new() {
        let span = Span::new(10, 11, 2, 3);
        let diag = Diagnostic::error(ErrorCode::E0202, "expected ','", span);

        assert_eq!(diag.message, "expected ','");
        assert_eq!(diag.code, ErrorCode::E0202);
        assert_eq!(diag.severity, Severity::Error);
        assert!(diag.notes.is_empty());
    }

    #[test]
    fn test_builder_defaults_from_code() {
        let diag = Diagnostic::builder(ErrorCode::W0401).build();
        assert_eq!(diag.severity, Severity::Warning);
        assert_eq!(diag.message, "unrecognized observation");
    }

    #[test]
    fn test_expected_in_context_message() {
        let diag = expected_in_context("','", "end of line", ParseContext::UnitLocation, Span::default());
        assert_eq!(diag.message, "expected ',' in unit location line, found end of line");
    }

    #[test]
    fn test_collector_counts() {
        let mut collector = DiagnosticCollector::new();
        collector.add(Diagnostic::error(ErrorCode::E0401, "bad", Span::default()));
        collector.add(Diagnostic::warning(ErrorCode::W0401, "odd", Span::default()));
        collector.add(Diagnostic::info(ErrorCode::E0504, "ignored", Span::default()));
        assert_eq!(collector.len(), 3);
        assert_eq!(collector.error_count(), 1);
        assert_eq!(collector.warning_count(), 1);
        assert!(collector.has_errors());
        assert_eq!(collector.into_vec()[2].code, ErrorCode::E0504);
    }
}
