//! scanc-util - Shared foundation types for the scanc workspace.
//!
//! This crate holds the pieces that are not specific to scanning itself:
//!
//! - [`span`] - byte ranges with line information
//! - [`diagnostic`] - severity levels, diagnostic codes, one-line rendering
//!   and a collecting [`Handler`]
//!
//! It has no dependencies so that any consumer of the token stream can use
//! the same location and diagnostic types without pulling in the scanner.

#![warn(missing_docs)]

pub mod diagnostic;
pub mod span;

pub use diagnostic::{Diagnostic, DiagnosticBuilder, DiagnosticCode, Handler, Level};
pub use span::Span;
