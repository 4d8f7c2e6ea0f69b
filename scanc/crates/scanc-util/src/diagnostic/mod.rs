//! Diagnostic module - Error and warning reporting infrastructure.
//!
//! Diagnostics are rendered as a single line:
//!
//! ```text
//! error[E1001]: expected `"` but found end of input (line 1, bytes 5..5)
//! ```
//!
//! # Examples
//!
//! ```
//! use scanc_util::diagnostic::{DiagnosticBuilder, DiagnosticCode, Handler};
//! use scanc_util::Span;
//!
//! let handler = Handler::new();
//! DiagnosticBuilder::error("unterminated block comment")
//!     .code(DiagnosticCode::E_LEXER_UNTERMINATED_COMMENT)
//!     .span(Span::new(0, 7, 1))
//!     .emit(&handler);
//!
//! assert!(handler.has_errors());
//! assert_eq!(
//!     handler.render(),
//!     vec!["error[E1003]: unterminated block comment (line 1, bytes 0..7)".to_string()]
//! );
//! ```

mod builder;
mod codes;
mod level;

pub use builder::DiagnosticBuilder;
pub use codes::DiagnosticCode;
pub use level::Level;

use crate::Span;
use std::cell::RefCell;
use std::fmt;

/// A diagnostic message with severity and location
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    /// Diagnostic severity level
    pub level: Level,
    /// Main diagnostic message
    pub message: String,
    /// Source location
    pub span: Span,
    /// Optional diagnostic code
    pub code: Option<DiagnosticCode>,
    /// Additional notes for context
    pub notes: Vec<String>,
}

impl Diagnostic {
    /// Create a new diagnostic
    pub fn new(level: Level, message: impl Into<String>, span: Span) -> Self {
        Self {
            level,
            message: message.into(),
            span,
            code: None,
            notes: Vec::new(),
        }
    }

    /// Create an error diagnostic
    pub fn error(message: impl Into<String>, span: Span) -> Self {
        Self::new(Level::Error, message, span)
    }

    /// Set the diagnostic code
    pub fn with_code(mut self, code: DiagnosticCode) -> Self {
        self.code = Some(code);
        self
    }

    /// Returns true if this is an error
    pub fn is_error(&self) -> bool {
        self.level.is_error()
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code {
            Some(code) => write!(f, "{}[{}]: {}", self.level, code, self.message)?,
            None => write!(f, "{}: {}", self.level, self.message)?,
        }
        if self.span != Span::DUMMY {
            write!(f, " ({})", self.span)?;
        }
        for note in &self.notes {
            write!(f, "; note: {}", note)?;
        }
        Ok(())
    }
}

/// Collects diagnostics emitted while scanning a buffer.
#[derive(Debug, Default)]
pub struct Handler {
    diagnostics: RefCell<Vec<Diagnostic>>,
}

impl Handler {
    /// Create a new handler
    pub fn new() -> Self {
        Self::default()
    }

    /// Emit a pre-built diagnostic
    pub fn emit_diagnostic(&self, diagnostic: Diagnostic) {
        self.diagnostics.borrow_mut().push(diagnostic);
    }

    /// Check if any errors have been reported
    pub fn has_errors(&self) -> bool {
        self.diagnostics.borrow().iter().any(Diagnostic::is_error)
    }

    /// Snapshot of all diagnostics, in emission order
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.borrow().clone()
    }

    /// Render every diagnostic as a one-line message
    pub fn render(&self) -> Vec<String> {
        self.diagnostics
            .borrow()
            .iter()
            .map(ToString::to_string)
            .collect()
    }
}
