use swc_common::Span;

/// A pass hit a node shape it cannot safely rewrite.
///
/// The span is best-effort and points at the offending node in the
/// original source.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{message}")]
pub struct TransformError {
    pub message: String,
    pub span: Span,
}

impl TransformError {
    pub fn new(message: impl Into<String>, span: Span) -> Self {
        Self {
            message: message.into(),
            span,
        }
    }
}
