//! Common types and utilities for scant commands.
//!
//! This module provides the input and output plumbing shared by every
//! command: where the source comes from, how listings are formatted, and
//! how scan failures are reported.

use std::fmt;
use std::io::{self, Read};
use std::path::PathBuf;

use clap::ValueEnum;
use scanc_lex::{Scanner, ScannerConfig, TokenKind, TokenStream};
use scanc_util::{DiagnosticBuilder, DiagnosticCode, Handler};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Result, ScantError};

// ============================================================================
// Output Format
// ============================================================================

/// Supported token listing formats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One token per line
    #[default]
    Text,
    /// A JSON array of token objects
    Json,
}

// ============================================================================
// Input
// ============================================================================

/// Where a command reads its source from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// Standard input, selected with `-`.
    Stdin,
    /// A file on disk.
    File(PathBuf),
}

impl From<PathBuf> for Input {
    fn from(path: PathBuf) -> Self {
        if path.as_os_str() == "-" {
            Input::Stdin
        } else {
            Input::File(path)
        }
    }
}

impl fmt::Display for Input {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Input::Stdin => f.write_str("<stdin>"),
            Input::File(path) => write!(f, "{}", path.display()),
        }
    }
}

impl Input {
    /// Read the whole source into memory.
    pub fn read_to_string(&self) -> Result<String> {
        match self {
            Input::Stdin => {
                let mut source = String::new();
                io::stdin().read_to_string(&mut source)?;
                Ok(source)
            },
            Input::File(path) => std::fs::read_to_string(path).map_err(|e| {
                ScantError::FileOperation(format!("cannot read {}: {}", path.display(), e))
            }),
        }
    }
}

// ============================================================================
// Scanning
// ============================================================================

/// Outcome of scanning one input.
#[derive(Debug)]
pub struct ScanReport {
    /// The complete token stream.
    pub stream: TokenStream,
    /// Warnings for unclassified characters.
    pub handler: Handler,
}

/// Scan `source` and collect a warning for every erroneous token.
///
/// A fatal error is printed as a diagnostic prefixed with the input name
/// and returned as [`ScantError::Lex`].
pub fn scan_source(input: &Input, source: &str, config: ScannerConfig) -> Result<ScanReport> {
    debug!(input = %input, bytes = source.len(), "scanning");

    let stream = match Scanner::with_config(source, config).scan_all() {
        Ok(stream) => stream,
        Err(err) => {
            let handler = Handler::new();
            handler.emit_diagnostic(err.to_diagnostic());
            print_diagnostics(input, &handler);
            return Err(err.into());
        },
    };

    let handler = Handler::new();
    for token in stream.iter().filter(|t| t.kind() == TokenKind::Erroneous) {
        DiagnosticBuilder::warning(format!("unclassified character {:?}", token.text()))
            .code(DiagnosticCode::W_LEXER_UNCLASSIFIED_CHAR)
            .span(token.span())
            .note("kept as an ERRONEOUS token")
            .emit(&handler);
    }

    Ok(ScanReport { stream, handler })
}

/// Print every collected diagnostic to stderr, one per line.
pub fn print_diagnostics(input: &Input, handler: &Handler) {
    for line in handler.render() {
        eprintln!("{}: {}", input, line);
    }
}
