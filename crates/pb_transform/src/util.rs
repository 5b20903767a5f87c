//! Shared AST-building helpers for the lowering passes.

use swc_common::Span;
use swc_ecma_ast as ast;

/// Build an expression from a dotted path like `React.createElement`.
pub(crate) fn dotted_expr(path: &str, span: Span) -> ast::Expr {
    let mut parts = path.split('.');
    let first = parts.next().unwrap_or(path);
    let mut expr = ast::Expr::Ident(ast::Ident::new_no_ctxt(first.into(), span));
    for part in parts {
        expr = ast::Expr::Member(ast::MemberExpr {
            span,
            obj: Box::new(expr),
            prop: ast::MemberProp::Ident(ast::IdentName::new(part.into(), span)),
        });
    }
    expr
}

/// Build a JSX element name from a dotted path like `React.Fragment`.
pub(crate) fn jsx_name(path: &str, span: Span) -> ast::JSXElementName {
    let parts: Vec<&str> = path.split('.').collect();
    if parts.len() == 1 {
        return ast::JSXElementName::Ident(ast::Ident::new_no_ctxt(parts[0].into(), span));
    }
    let mut obj = ast::JSXObject::Ident(ast::Ident::new_no_ctxt(parts[0].into(), span));
    for part in &parts[1..parts.len() - 1] {
        obj = ast::JSXObject::JSXMemberExpr(Box::new(ast::JSXMemberExpr {
            span,
            obj,
            prop: ast::IdentName::new((*part).into(), span),
        }));
    }
    ast::JSXElementName::JSXMemberExpr(ast::JSXMemberExpr {
        span,
        obj,
        prop: ast::IdentName::new(parts[parts.len() - 1].into(), span),
    })
}

/// A single-declarator variable statement binding `name` to `init`.
pub(crate) fn binding_stmt(
    kind: ast::VarDeclKind,
    name: ast::Ident,
    init: Option<ast::Expr>,
    span: Span,
) -> ast::Stmt {
    ast::Stmt::Decl(ast::Decl::Var(Box::new(ast::VarDecl {
        span,
        ctxt: Default::default(),
        kind,
        declare: false,
        decls: vec![ast::VarDeclarator {
            span,
            name: ast::Pat::Ident(name.into()),
            init: init.map(Box::new),
            definite: false,
        }],
    })))
}

/// `obj.name`
pub(crate) fn named_member(obj: ast::Expr, name: &str, span: Span) -> ast::Expr {
    ast::Expr::Member(ast::MemberExpr {
        span,
        obj: Box::new(obj),
        prop: ast::MemberProp::Ident(ast::IdentName::new(name.into(), span)),
    })
}

/// `obj[key]`
pub(crate) fn computed_member(obj: ast::Expr, key: ast::Expr, span: Span) -> ast::Expr {
    ast::Expr::Member(ast::MemberExpr {
        span,
        obj: Box::new(obj),
        prop: ast::MemberProp::Computed(ast::ComputedPropName {
            span,
            expr: Box::new(key),
        }),
    })
}
