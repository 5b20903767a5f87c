//! Fragment wrapping for bare JSX snippets.
//!
//! A snippet whose whole body is a single bare JSX expression statement
//! is the implicit render target of the preview, so its root element is
//! wrapped in the configured fragment constructor. Anything else is left
//! alone: surrounding statements, assignments, and returns mean the
//! expression is ordinary code, not the snippet's value.
//!
//! Runs before JSX lowering, while the tree still has JSX shapes.

use pb_config::CompilerConfig;
use swc_common::DUMMY_SP;
use swc_ecma_ast as ast;

use crate::util;

/// Wrap the root element when the module body is exactly one bare JSX
/// expression statement.
pub fn wrap_sole_jsx(module: &mut ast::Module, config: &CompilerConfig) {
    if module.body.len() != 1 {
        return;
    }
    let Some(ast::ModuleItem::Stmt(ast::Stmt::Expr(expr_stmt))) = module.body.first_mut() else {
        return;
    };
    if !matches!(
        &*expr_stmt.expr,
        ast::Expr::JSXElement(_) | ast::Expr::JSXFragment(_)
    ) {
        return;
    }

    let span = expr_stmt.span;
    let inner = std::mem::replace(
        &mut expr_stmt.expr,
        Box::new(ast::Expr::Invalid(ast::Invalid { span: DUMMY_SP })),
    );
    let child = match *inner {
        ast::Expr::JSXElement(el) => ast::JSXElementChild::JSXElement(el),
        ast::Expr::JSXFragment(frag) => ast::JSXElementChild::JSXFragment(frag),
        other => {
            expr_stmt.expr = Box::new(other);
            return;
        }
    };

    let name = util::jsx_name(&config.pragma_frag, span);
    expr_stmt.expr = Box::new(ast::Expr::JSXElement(Box::new(ast::JSXElement {
        span,
        opening: ast::JSXOpeningElement {
            name: name.clone(),
            span,
            attrs: vec![],
            self_closing: false,
            type_args: None,
        },
        children: vec![child],
        closing: Some(ast::JSXClosingElement { span, name }),
    })));
}
