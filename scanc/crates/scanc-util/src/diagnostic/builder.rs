//! Fluent builder for [`Diagnostic`] values.

use super::{Diagnostic, DiagnosticCode, Level};
use crate::Span;

/// Builder for constructing diagnostics with a fluent API
///
/// # Examples
///
/// ```
/// use scanc_util::diagnostic::{DiagnosticBuilder, DiagnosticCode, Level};
/// use scanc_util::Span;
///
/// let diag = DiagnosticBuilder::error("unterminated string literal")
///     .code(DiagnosticCode::E_LEXER_UNTERMINATED_STRING)
///     .span(Span::new(4, 9, 1))
///     .note("string literals may not span the end of input")
///     .build();
///
/// assert_eq!(diag.level, Level::Error);
/// assert_eq!(diag.notes.len(), 1);
/// ```
#[derive(Debug)]
pub struct DiagnosticBuilder {
    level: Level,
    message: String,
    span: Span,
    code: Option<DiagnosticCode>,
    notes: Vec<String>,
}

impl DiagnosticBuilder {
    /// Create a new diagnostic builder
    pub fn new(level: Level, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            span: Span::DUMMY,
            code: None,
            notes: Vec::new(),
        }
    }

    /// Create an error builder
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Level::Error, message)
    }

    /// Create a warning builder
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Level::Warning, message)
    }

    /// Set the diagnostic code
    pub fn code(mut self, code: DiagnosticCode) -> Self {
        self.code = Some(code);
        self
    }

    /// Set the source span
    pub fn span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    /// Add a note to the diagnostic
    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// Build the diagnostic
    pub fn build(self) -> Diagnostic {
        Diagnostic {
            level: self.level,
            message: self.message,
            span: self.span,
            code: self.code,
            notes: self.notes,
        }
    }

    /// Build and emit the diagnostic to the given handler
    pub fn emit(self, handler: &super::Handler) {
        handler.emit_diagnostic(self.build());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostic::Handler;

    #[test]
    fn test_builder_error() {
        let diag = DiagnosticBuilder::error("test error")
            .span(Span::new(1, 2, 1))
            .build();
        assert_eq!(diag.level, Level::Error);
        assert_eq!(diag.message, "test error");
        assert_eq!(diag.span, Span::new(1, 2, 1));
        assert!(diag.code.is_none());
    }

    #[test]
    fn test_builder_warning_with_code() {
        let diag = DiagnosticBuilder::warning("odd byte")
            .code(DiagnosticCode::new("W", 1))
            .build();
        assert_eq!(diag.level, Level::Warning);
        assert_eq!(diag.code, Some(DiagnosticCode::new("W", 1)));
        assert_eq!(diag.span, Span::DUMMY);
    }

    #[test]
    fn test_builder_notes_keep_order() {
        let diag = DiagnosticBuilder::warning("odd byte")
            .note("first")
            .note("second")
            .build();
        assert_eq!(diag.notes, ["first", "second"]);
    }

    #[test]
    fn test_builder_emit() {
        let handler = Handler::new();
        DiagnosticBuilder::error("boom").emit(&handler);
        assert!(handler.has_errors());
        assert_eq!(handler.diagnostics().len(), 1);
    }
}
