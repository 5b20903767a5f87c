use pb_config::CompilerConfig;
use pb_parser::{locate, parse_module, ParseResult};
use pb_transform::transform_module;

use crate::emit;
use crate::error::{CompileError, ErrorKind};

/// Compile a snippet, returning the emitted script or the first error.
///
/// The pipeline is parse → transform (canonical pass order) → emit; a
/// failure at any stage aborts the whole compile.
pub fn compile(source: &str, config: &CompilerConfig) -> Result<String, CompileError> {
    let ParseResult {
        mut module,
        source_map,
        ..
    } = parse_module(source, "snippet.jsx").map_err(|err| CompileError {
        kind: ErrorKind::Syntax,
        message: err.message,
        line: err.line,
        column: err.column,
    })?;

    transform_module(&mut module, config).map_err(|err| {
        let (line, column) = locate(&source_map, err.span);
        CompileError {
            kind: ErrorKind::Transform,
            message: err.message,
            line,
            column,
        }
    })?;

    emit::emit_module(&module, source_map).map_err(|message| CompileError {
        kind: ErrorKind::Print,
        message,
        line: 1,
        column: 0,
    })
}

/// Compile for the preview host.
///
/// Failures are reported through `on_error` (at most one invocation per
/// call, none on success) and yield an empty string instead of an error
/// value. Without a callback, failures are silently swallowed.
pub fn compile_code<F>(source: &str, config: &CompilerConfig, on_error: Option<F>) -> String
where
    F: FnOnce(CompileError),
{
    match compile(source, config) {
        Ok(code) => code,
        Err(err) => {
            if let Some(on_error) = on_error {
                on_error(err);
            }
            String::new()
        }
    }
}
