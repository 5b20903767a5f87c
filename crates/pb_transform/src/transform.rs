//! Pass orchestration.

use pb_config::CompilerConfig;
use swc_ecma_ast as ast;

use crate::error::TransformError;
use crate::{destructure, fragment, imports, jsx, tagged_template};

/// Apply the enabled lowering passes to a parsed module, in canonical
/// order.
///
/// Fragment wrapping runs first so a bare JSX snippet is wrapped while it
/// is still JSX; the JSX pass then lowers the wrapped tree. Tagged
/// templates lower before JSX so a tag expression that produces JSX is
/// rewritten as well.
pub fn transform_module(
    module: &mut ast::Module,
    config: &CompilerConfig,
) -> Result<(), TransformError> {
    if config.jsx {
        fragment::wrap_sole_jsx(module, config);
    }
    if config.destructuring {
        destructure::lower(module)?;
    }
    if config.imports {
        imports::lower(module, config)?;
    }
    if config.tagged_templates {
        tagged_template::lower(module);
    }
    if config.jsx {
        jsx::lower(module, config)?;
    }
    Ok(())
}
