/// Which pipeline stage failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Syntax,
    Transform,
    Print,
}

/// A compilation failure with its source position.
///
/// `line` is 1-indexed, `column` 0-indexed. Syntax errors carry the
/// position of the first offending token; transform errors the position
/// of the node that could not be rewritten. Print failures carry no
/// position and default to the start of the snippet.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct CompileError {
    pub kind: ErrorKind,
    pub message: String,
    pub line: usize,
    pub column: usize,
}
