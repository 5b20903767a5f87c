use swc_common::{
    comments::SingleThreadedComments, sync::Lrc, BytePos, FileName, SourceMap, Span,
};
use swc_ecma_ast::EsVersion;
use swc_ecma_parser::{EsSyntax, Syntax};

/// A parse failure with the position of the first offending token.
///
/// `line` is 1-indexed and `column` 0-indexed, matching common JS parser
/// conventions. `message` has the shape `Unexpected token (<line>:<column>)`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct SyntaxError {
    pub message: String,
    pub line: usize,
    pub column: usize,
}

/// Result of parsing a snippet.
///
/// The source map travels with the module: downstream stages need it to
/// resolve node spans for error reporting and for code generation.
pub struct ParseResult {
    pub module: swc_ecma_ast::Module,
    pub comments: SingleThreadedComments,
    pub source_map: Lrc<SourceMap>,
}

/// Parse a JavaScript/JSX source string into a module.
///
/// Errors the SWC parser recovered from are still treated as failures:
/// the snippet either parses cleanly or the first offending position is
/// reported.
pub fn parse_module(source: &str, filename: &str) -> Result<ParseResult, SyntaxError> {
    let source_map: Lrc<SourceMap> = Default::default();
    let source_file = source_map.new_source_file(
        Lrc::new(FileName::Custom(filename.to_string())),
        source.to_string(),
    );

    let comments = SingleThreadedComments::default();

    let syntax = Syntax::Es(EsSyntax {
        jsx: true,
        ..Default::default()
    });

    let mut recovered = Vec::new();
    let module = swc_ecma_parser::parse_file_as_module(
        &source_file,
        syntax,
        EsVersion::latest(),
        Some(&comments),
        &mut recovered,
    )
    .map_err(|e| syntax_error_at(&source_map, e.span()))?;

    if let Some(err) = recovered.into_iter().next() {
        return Err(syntax_error_at(&source_map, err.span()));
    }

    Ok(ParseResult {
        module,
        comments,
        source_map,
    })
}

fn syntax_error_at(source_map: &SourceMap, span: Span) -> SyntaxError {
    let (line, column) = locate(source_map, span);
    SyntaxError {
        message: format!("Unexpected token ({line}:{column})"),
        line,
        column,
    }
}

/// Resolve a span to a 1-indexed line and 0-indexed column.
///
/// A dummy span carries no position and maps to the start of the snippet.
pub fn locate(source_map: &SourceMap, span: Span) -> (usize, usize) {
    if span.lo == BytePos(0) {
        return (1, 0);
    }
    let loc = source_map.lookup_char_pos(span.lo);
    (loc.line, loc.col.0)
}
