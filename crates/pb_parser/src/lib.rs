//! JavaScript/JSX parser for playbox snippets.
//!
//! Wraps the SWC parser: accepts modern JavaScript with JSX enabled and
//! reports the first syntax error as a structured value instead of
//! emitting diagnostics to stderr. Malformed input is never silently
//! recovered from.

pub mod parse;

pub use parse::{locate, parse_module, ParseResult, SyntaxError};
