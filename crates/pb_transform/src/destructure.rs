//! Destructuring lowering.
//!
//! Rewrites a variable declaration binding an object or array pattern
//! into one simple `var` declaration per bound name, in declared order:
//!
//! `const {foo, bar} = baz` → `var foo = baz.foo; var bar = baz.bar;`
//!
//! Default values lower to a conditional on `undefined`. Nested patterns
//! and rest elements are rejected. Applies at any statement-list depth;
//! function parameters and loop heads are out of scope.

use swc_common::{Span, Spanned};
use swc_ecma_ast as ast;
use swc_ecma_visit::{VisitMut, VisitMutWith};

use crate::error::TransformError;
use crate::util;

pub fn lower(module: &mut ast::Module) -> Result<(), TransformError> {
    let mut pass = Lowering { errors: Vec::new() };
    module.visit_mut_with(&mut pass);
    match pass.errors.into_iter().next() {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

struct Lowering {
    errors: Vec<TransformError>,
}

impl Lowering {
    fn expand(&mut self, stmt: ast::Stmt) -> Vec<ast::Stmt> {
        match stmt {
            ast::Stmt::Decl(ast::Decl::Var(var))
                if var
                    .decls
                    .iter()
                    .any(|d| !matches!(d.name, ast::Pat::Ident(_))) =>
            {
                match expand_var_decl(*var) {
                    Ok(stmts) => stmts,
                    Err(err) => {
                        self.errors.push(err);
                        Vec::new()
                    }
                }
            }
            other => vec![other],
        }
    }
}

impl VisitMut for Lowering {
    fn visit_mut_stmts(&mut self, stmts: &mut Vec<ast::Stmt>) {
        let mut out = Vec::with_capacity(stmts.len());
        for stmt in stmts.drain(..) {
            for mut expanded in self.expand(stmt) {
                expanded.visit_mut_children_with(self);
                out.push(expanded);
            }
        }
        *stmts = out;
    }

    fn visit_mut_module_items(&mut self, items: &mut Vec<ast::ModuleItem>) {
        let mut out = Vec::with_capacity(items.len());
        for item in items.drain(..) {
            match item {
                ast::ModuleItem::Stmt(stmt) => {
                    for mut expanded in self.expand(stmt) {
                        expanded.visit_mut_children_with(self);
                        out.push(ast::ModuleItem::Stmt(expanded));
                    }
                }
                mut other => {
                    other.visit_mut_children_with(self);
                    out.push(other);
                }
            }
        }
        *items = out;
    }
}

fn expand_var_decl(var: ast::VarDecl) -> Result<Vec<ast::Stmt>, TransformError> {
    let mut out = Vec::new();
    for decl in var.decls {
        match decl.name {
            ast::Pat::Ident(name) => {
                out.push(util::binding_stmt(
                    ast::VarDeclKind::Var,
                    name.id,
                    decl.init.map(|init| *init),
                    decl.span,
                ));
            }
            ast::Pat::Object(pat) => {
                let init = require_init(decl.init, pat.span)?;
                expand_object(pat, &init, decl.span, &mut out)?;
            }
            ast::Pat::Array(pat) => {
                let init = require_init(decl.init, pat.span)?;
                expand_array(pat, &init, decl.span, &mut out)?;
            }
            other => {
                return Err(TransformError::new(
                    "unsupported binding pattern in variable declaration",
                    other.span(),
                ));
            }
        }
    }
    Ok(out)
}

fn require_init(
    init: Option<Box<ast::Expr>>,
    span: Span,
) -> Result<ast::Expr, TransformError> {
    match init {
        Some(expr) => Ok(*expr),
        None => Err(TransformError::new(
            "destructuring declaration has no initializer",
            span,
        )),
    }
}

fn expand_object(
    pat: ast::ObjectPat,
    init: &ast::Expr,
    span: Span,
    out: &mut Vec<ast::Stmt>,
) -> Result<(), TransformError> {
    for prop in pat.props {
        match prop {
            ast::ObjectPatProp::Assign(prop) => {
                let name = prop.key.id;
                let access = util::named_member(init.clone(), name.sym.as_str(), prop.span);
                let value = match prop.value {
                    Some(default) => with_default(access, *default, prop.span),
                    None => access,
                };
                out.push(util::binding_stmt(
                    ast::VarDeclKind::Var,
                    name,
                    Some(value),
                    span,
                ));
            }
            ast::ObjectPatProp::KeyValue(prop) => {
                let access = key_access(init, &prop.key)?;
                bind_target(*prop.value, access, span, out)?;
            }
            ast::ObjectPatProp::Rest(prop) => {
                return Err(TransformError::new(
                    "rest elements in destructuring are not supported",
                    prop.span,
                ));
            }
        }
    }
    Ok(())
}

fn expand_array(
    pat: ast::ArrayPat,
    init: &ast::Expr,
    span: Span,
    out: &mut Vec<ast::Stmt>,
) -> Result<(), TransformError> {
    for (index, elem) in pat.elems.into_iter().enumerate() {
        // Holes skip the index without binding anything.
        let Some(elem) = elem else { continue };
        let access = util::computed_member(
            init.clone(),
            ast::Expr::Lit(ast::Lit::Num(ast::Number {
                span,
                value: index as f64,
                raw: None,
            })),
            span,
        );
        bind_target(elem, access, span, out)?;
    }
    Ok(())
}

/// Bind the target of one pattern slot: a plain name or a defaulted name.
fn bind_target(
    pat: ast::Pat,
    access: ast::Expr,
    span: Span,
    out: &mut Vec<ast::Stmt>,
) -> Result<(), TransformError> {
    match pat {
        ast::Pat::Ident(name) => {
            out.push(util::binding_stmt(
                ast::VarDeclKind::Var,
                name.id,
                Some(access),
                span,
            ));
            Ok(())
        }
        ast::Pat::Assign(assign) => match *assign.left {
            ast::Pat::Ident(name) => {
                let value = with_default(access, *assign.right, assign.span);
                out.push(util::binding_stmt(
                    ast::VarDeclKind::Var,
                    name.id,
                    Some(value),
                    span,
                ));
                Ok(())
            }
            other => Err(TransformError::new(
                "unsupported destructuring nesting",
                other.span(),
            )),
        },
        ast::Pat::Rest(rest) => Err(TransformError::new(
            "rest elements in destructuring are not supported",
            rest.span,
        )),
        other => Err(TransformError::new(
            "unsupported destructuring nesting",
            other.span(),
        )),
    }
}

fn key_access(init: &ast::Expr, key: &ast::PropName) -> Result<ast::Expr, TransformError> {
    Ok(match key {
        ast::PropName::Ident(id) => util::named_member(init.clone(), id.sym.as_str(), id.span),
        ast::PropName::Str(s) => {
            util::computed_member(init.clone(), ast::Expr::Lit(ast::Lit::Str(s.clone())), s.span)
        }
        ast::PropName::Num(n) => {
            util::computed_member(init.clone(), ast::Expr::Lit(ast::Lit::Num(n.clone())), n.span)
        }
        ast::PropName::Computed(c) => {
            util::computed_member(init.clone(), (*c.expr).clone(), c.span)
        }
        ast::PropName::BigInt(b) => {
            return Err(TransformError::new(
                "bigint keys in destructuring are not supported",
                b.span,
            ));
        }
    })
}

/// `access === undefined ? default : access`
fn with_default(access: ast::Expr, default: ast::Expr, span: Span) -> ast::Expr {
    let undefined = ast::Expr::Ident(ast::Ident::new_no_ctxt("undefined".into(), span));
    ast::Expr::Cond(ast::CondExpr {
        span,
        test: Box::new(ast::Expr::Bin(ast::BinExpr {
            span,
            op: ast::BinaryOp::EqEqEq,
            left: Box::new(access.clone()),
            right: Box::new(undefined),
        })),
        cons: Box::new(default),
        alt: Box::new(access),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pb_parser::parse_module;

    fn lowered(source: &str) -> Result<ast::Module, TransformError> {
        let mut parsed = parse_module(source, "test.js").unwrap();
        lower(&mut parsed.module)?;
        Ok(parsed.module)
    }

    fn bound_names(module: &ast::Module) -> Vec<String> {
        module
            .body
            .iter()
            .filter_map(|item| match item {
                ast::ModuleItem::Stmt(ast::Stmt::Decl(ast::Decl::Var(var))) => {
                    match &var.decls[0].name {
                        ast::Pat::Ident(name) => Some(name.id.sym.to_string()),
                        _ => None,
                    }
                }
                _ => None,
            })
            .collect()
    }

    #[test]
    fn object_pattern_expands_in_declared_order() {
        let module = lowered("const {foo, bar} = baz;").unwrap();
        assert_eq!(bound_names(&module), ["foo", "bar"]);
        assert_eq!(module.body.len(), 2);
    }

    #[test]
    fn array_pattern_skips_holes() {
        let module = lowered("const [a, , c] = xs;").unwrap();
        assert_eq!(bound_names(&module), ["a", "c"]);
    }

    #[test]
    fn nested_patterns_are_rejected() {
        let err = lowered("const {a: {b}} = c;").unwrap_err();
        assert!(err.message.contains("nesting"));
    }

    #[test]
    fn rest_elements_are_rejected() {
        let err = lowered("const {a, ...rest} = c;").unwrap_err();
        assert!(err.message.contains("rest"));
    }
}
