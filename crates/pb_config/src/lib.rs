//! Compiler configuration for playbox.
//!
//! One value of [`CompilerConfig`] describes a whole compile: which
//! lowering passes run and the identifiers the lowered code calls into.
//! The defaults target a React preview sandbox.

use serde::{Deserialize, Serialize};

/// Options controlling which lowering passes run and what they emit.
///
/// Supplied by the caller per compile and never mutated. Disabling a pass
/// leaves its syntax untouched in the output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompilerConfig {
    /// Lower destructuring variable declarations to simple declarations.
    pub destructuring: bool,
    /// Rewrite ES module imports (and strip export wrappers) to
    /// synchronous loader calls.
    pub imports: bool,
    /// Hoist tagged template literals into frozen raw-string arrays.
    pub tagged_templates: bool,
    /// Lower JSX to element-constructor calls, wrapping a bare JSX
    /// snippet in the fragment constructor first.
    pub jsx: bool,
    /// Name of the synchronous module loader, e.g. `require`.
    pub loader: String,
    /// Element constructor JSX lowers to, e.g. `React.createElement`.
    pub pragma: String,
    /// Fragment constructor used to group sibling elements and to wrap a
    /// bare JSX snippet, e.g. `React.Fragment`.
    pub pragma_frag: String,
}

impl Default for CompilerConfig {
    fn default() -> Self {
        Self {
            destructuring: true,
            imports: true,
            tagged_templates: true,
            jsx: true,
            loader: "require".to_string(),
            pragma: "React.createElement".to_string(),
            pragma_frag: "React.Fragment".to_string(),
        }
    }
}
