//! Import and export lowering.
//!
//! Rewrites ES module syntax into synchronous loader calls so the
//! emitted snippet can run inside a plain script sandbox:
//!
//! - `import foo from 'bar'`       → `const foo = require('bar');`
//! - `import {a, b as c} from 'm'` → `const a = require('m').a;`
//!                                   `const c = require('m').b;`
//! - `import * as ns from 'm'`     → `const ns = require('m');`
//! - `import 'm'`                  → `require('m');`
//!
//! Export wrappers are stripped down to the declarations they carry;
//! re-exports keep only the load side effect. Statement order is
//! preserved, so a leading run of imports stays a leading run of loader
//! calls.

use swc_common::{Span, Spanned};
use swc_ecma_ast as ast;

use pb_config::CompilerConfig;

use crate::error::TransformError;
use crate::util;

pub fn lower(module: &mut ast::Module, config: &CompilerConfig) -> Result<(), TransformError> {
    let items = std::mem::take(&mut module.body);
    let mut out = Vec::with_capacity(items.len());
    for item in items {
        match item {
            ast::ModuleItem::ModuleDecl(decl) => lower_module_decl(decl, config, &mut out)?,
            stmt => out.push(stmt),
        }
    }
    module.body = out;
    Ok(())
}

fn lower_module_decl(
    decl: ast::ModuleDecl,
    config: &CompilerConfig,
    out: &mut Vec<ast::ModuleItem>,
) -> Result<(), TransformError> {
    match decl {
        ast::ModuleDecl::Import(import) => {
            let ast::ImportDecl {
                span,
                specifiers,
                src,
                ..
            } = import;
            if specifiers.is_empty() {
                out.push(expr_stmt(require_call(config, &src, span), span));
                return Ok(());
            }
            for spec in specifiers {
                let (local, init) = match spec {
                    ast::ImportSpecifier::Default(spec) => {
                        (spec.local, require_call(config, &src, spec.span))
                    }
                    ast::ImportSpecifier::Namespace(spec) => {
                        (spec.local, require_call(config, &src, spec.span))
                    }
                    ast::ImportSpecifier::Named(spec) => {
                        let call = require_call(config, &src, spec.span);
                        let init = match spec.imported {
                            Some(ast::ModuleExportName::Ident(imported)) => {
                                util::named_member(call, imported.sym.as_str(), spec.span)
                            }
                            Some(ast::ModuleExportName::Str(name)) => util::computed_member(
                                call,
                                ast::Expr::Lit(ast::Lit::Str(name)),
                                spec.span,
                            ),
                            None => util::named_member(call, spec.local.sym.as_str(), spec.span),
                        };
                        (spec.local, init)
                    }
                };
                out.push(ast::ModuleItem::Stmt(util::binding_stmt(
                    ast::VarDeclKind::Const,
                    local,
                    Some(init),
                    span,
                )));
            }
            Ok(())
        }
        ast::ModuleDecl::ExportDecl(export) => {
            out.push(ast::ModuleItem::Stmt(ast::Stmt::Decl(export.decl)));
            Ok(())
        }
        ast::ModuleDecl::ExportDefaultDecl(export) => {
            let stmt = match export.decl {
                ast::DefaultDecl::Fn(func) => match func.ident.clone() {
                    Some(ident) => ast::Stmt::Decl(ast::Decl::Fn(ast::FnDecl {
                        ident,
                        declare: false,
                        function: func.function,
                    })),
                    None => stmt_of(ast::Expr::Fn(func), export.span),
                },
                ast::DefaultDecl::Class(class) => match class.ident.clone() {
                    Some(ident) => ast::Stmt::Decl(ast::Decl::Class(ast::ClassDecl {
                        ident,
                        declare: false,
                        class: class.class,
                    })),
                    None => stmt_of(ast::Expr::Class(class), export.span),
                },
                ast::DefaultDecl::TsInterfaceDecl(decl) => {
                    return Err(TransformError::new(
                        "unsupported export declaration",
                        decl.span,
                    ));
                }
            };
            out.push(ast::ModuleItem::Stmt(stmt));
            Ok(())
        }
        ast::ModuleDecl::ExportDefaultExpr(export) => {
            out.push(ast::ModuleItem::Stmt(ast::Stmt::Expr(ast::ExprStmt {
                span: export.span,
                expr: export.expr,
            })));
            Ok(())
        }
        ast::ModuleDecl::ExportNamed(export) => {
            // Re-exports keep the load side effect; local re-exports have
            // nothing left to bind.
            if let Some(src) = export.src {
                out.push(expr_stmt(require_call(config, &src, export.span), export.span));
            }
            Ok(())
        }
        ast::ModuleDecl::ExportAll(export) => {
            out.push(expr_stmt(
                require_call(config, &export.src, export.span),
                export.span,
            ));
            Ok(())
        }
        other => Err(TransformError::new(
            "unsupported module declaration",
            other.span(),
        )),
    }
}

fn require_call(config: &CompilerConfig, src: &ast::Str, span: Span) -> ast::Expr {
    ast::Expr::Call(ast::CallExpr {
        span,
        callee: ast::Callee::Expr(Box::new(util::dotted_expr(&config.loader, span))),
        args: vec![ast::ExprOrSpread {
            spread: None,
            expr: Box::new(ast::Expr::Lit(ast::Lit::Str(src.clone()))),
        }],
        type_args: None,
        ..Default::default()
    })
}

fn expr_stmt(expr: ast::Expr, span: Span) -> ast::ModuleItem {
    ast::ModuleItem::Stmt(stmt_of(expr, span))
}

fn stmt_of(expr: ast::Expr, span: Span) -> ast::Stmt {
    ast::Stmt::Expr(ast::ExprStmt {
        span,
        expr: Box::new(expr),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pb_parser::parse_module;

    fn lowered(source: &str) -> ast::Module {
        let mut parsed = parse_module(source, "test.js").unwrap();
        lower(&mut parsed.module, &CompilerConfig::default()).unwrap();
        parsed.module
    }

    #[test]
    fn output_has_no_module_declarations() {
        let module = lowered(
            "import foo from 'bar';\nimport {a} from 'm';\nexport const x = 1;\nexport default x;",
        );
        assert!(module
            .body
            .iter()
            .all(|item| matches!(item, ast::ModuleItem::Stmt(_))));
    }

    #[test]
    fn default_import_becomes_const_binding() {
        let module = lowered("import foo from 'bar';");
        let Some(ast::ModuleItem::Stmt(ast::Stmt::Decl(ast::Decl::Var(var)))) =
            module.body.first()
        else {
            panic!("expected a variable declaration");
        };
        assert_eq!(var.kind, ast::VarDeclKind::Const);
    }

    #[test]
    fn side_effect_import_keeps_only_the_call() {
        let module = lowered("import 'polyfill';");
        assert!(matches!(
            module.body.first(),
            Some(ast::ModuleItem::Stmt(ast::Stmt::Expr(_)))
        ));
    }
}
