//! Printer adapter over the SWC code generator.

use swc_common::{sync::Lrc, SourceMap};
use swc_ecma_ast::Module;
use swc_ecma_codegen::{text_writer::JsWriter, Emitter, Node};

/// Serialize a module back to source text.
///
/// Output is deterministic for a given tree and statements are never
/// reordered; formatting fidelity to the original source is not a goal.
pub(crate) fn emit_module(module: &Module, source_map: Lrc<SourceMap>) -> Result<String, String> {
    let mut buf = Vec::new();
    {
        let writer = JsWriter::new(source_map.clone(), "\n", &mut buf, None);
        let mut emitter = Emitter {
            cfg: swc_ecma_codegen::Config::default()
                .with_target(swc_ecma_ast::EsVersion::latest()),
            cm: source_map,
            comments: None,
            wr: writer,
        };
        module.emit_with(&mut emitter).map_err(|e| e.to_string())?;
    }
    String::from_utf8(buf).map_err(|e| e.to_string())
}
