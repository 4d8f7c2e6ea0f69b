//! Scanner module.
//!
//! The implementation is split by lexical category:
//! - `core` - Scanner struct, dispatch and public entry points
//! - `comment` - Layout and comment elision
//! - `identifier` - Identifier recognition
//! - `number` - Number recognition
//! - `string` - String and character literal recognition

mod comment;
mod core;
mod identifier;
mod number;
mod string;

pub use core::Scanner;
