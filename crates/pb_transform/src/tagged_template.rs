//! Tagged template lowering.
//!
//! Each tagged template literal is split into a hoisted, frozen array of
//! its raw string parts and a plain call of the tag:
//!
//! ```text
//! const Button = styled.button`color: tomato;`;
//! ```
//!
//! becomes
//!
//! ```text
//! var templateObject = Object.freeze(["color: tomato;"]);
//! const Button = styled.button(templateObject);
//! ```
//!
//! The array is declared immediately before the statement containing the
//! tag use, at that statement's nesting level. Occurrences are named
//! `templateObject`, `templateObject$1`, `templateObject$2`, ... in
//! visitation order. Interpolated expressions become further call
//! arguments after the array.

use swc_common::{Span, DUMMY_SP};
use swc_ecma_ast as ast;
use swc_ecma_visit::{VisitMut, VisitMutWith};

use crate::util;

pub fn lower(module: &mut ast::Module) {
    let mut pass = Hoisting {
        count: 0,
        pending: Vec::new(),
    };
    module.visit_mut_with(&mut pass);
}

struct Hoisting {
    count: usize,
    /// Declarations waiting to be spliced in front of the statement
    /// currently being visited.
    pending: Vec<ast::Stmt>,
}

impl Hoisting {
    fn next_name(&mut self) -> String {
        let name = if self.count == 0 {
            "templateObject".to_string()
        } else {
            format!("templateObject${}", self.count)
        };
        self.count += 1;
        name
    }

    /// `var <name> = Object.freeze([...raw string parts]);`
    fn frozen_strings(&self, name: &str, quasis: &[ast::TplElement], span: Span) -> ast::Stmt {
        let elems = quasis
            .iter()
            .map(|quasi| {
                Some(ast::ExprOrSpread {
                    spread: None,
                    expr: Box::new(ast::Expr::Lit(ast::Lit::Str(ast::Str {
                        span: quasi.span,
                        value: quasi.raw.as_str().into(),
                        raw: None,
                    }))),
                })
            })
            .collect();
        let frozen = ast::Expr::Call(ast::CallExpr {
            span,
            callee: ast::Callee::Expr(Box::new(util::dotted_expr("Object.freeze", span))),
            args: vec![ast::ExprOrSpread {
                spread: None,
                expr: Box::new(ast::Expr::Array(ast::ArrayLit { span, elems })),
            }],
            type_args: None,
            ..Default::default()
        });
        util::binding_stmt(
            ast::VarDeclKind::Var,
            ast::Ident::new_no_ctxt(name.into(), span),
            Some(frozen),
            span,
        )
    }
}

impl VisitMut for Hoisting {
    fn visit_mut_expr(&mut self, expr: &mut ast::Expr) {
        expr.visit_mut_children_with(self);
        if let ast::Expr::TaggedTpl(tagged) = expr {
            let span = tagged.span;
            let name = self.next_name();
            let hoisted = self.frozen_strings(&name, &tagged.tpl.quasis, span);
            self.pending.push(hoisted);

            let tag = std::mem::replace(
                &mut tagged.tag,
                Box::new(ast::Expr::Invalid(ast::Invalid { span: DUMMY_SP })),
            );
            let mut args = vec![ast::ExprOrSpread {
                spread: None,
                expr: Box::new(ast::Expr::Ident(ast::Ident::new_no_ctxt(name.into(), span))),
            }];
            args.extend(tagged.tpl.exprs.drain(..).map(|expr| ast::ExprOrSpread {
                spread: None,
                expr,
            }));

            *expr = ast::Expr::Call(ast::CallExpr {
                span,
                callee: ast::Callee::Expr(tag),
                args,
                type_args: None,
                ..Default::default()
            });
        }
    }

    fn visit_mut_stmts(&mut self, stmts: &mut Vec<ast::Stmt>) {
        // Hoists from an enclosing statement must not leak into this list.
        let enclosing = std::mem::take(&mut self.pending);
        let mut out = Vec::with_capacity(stmts.len());
        for mut stmt in stmts.drain(..) {
            stmt.visit_mut_children_with(self);
            out.append(&mut self.pending);
            out.push(stmt);
        }
        *stmts = out;
        self.pending = enclosing;
    }

    fn visit_mut_module_items(&mut self, items: &mut Vec<ast::ModuleItem>) {
        let enclosing = std::mem::take(&mut self.pending);
        let mut out = Vec::with_capacity(items.len());
        for mut item in items.drain(..) {
            item.visit_mut_children_with(self);
            out.extend(self.pending.drain(..).map(ast::ModuleItem::Stmt));
            out.push(item);
        }
        *items = out;
        self.pending = enclosing;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pb_parser::parse_module;

    fn lowered(source: &str) -> ast::Module {
        let mut parsed = parse_module(source, "test.js").unwrap();
        lower(&mut parsed.module);
        parsed.module
    }

    fn var_names(module: &ast::Module) -> Vec<String> {
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
    fn hoists_one_array_per_occurrence() {
        let module = lowered("const a = tag`one`;\nconst b = tag`two`;");
        assert_eq!(
            var_names(&module),
            ["templateObject", "a", "templateObject$1", "b"]
        );
    }

    #[test]
    fn hoists_inside_the_enclosing_block() {
        let module = lowered("function render() {\n    return tag`inner`;\n}");
        // The hoisted declaration lands inside the function body, not at
        // the top level.
        assert_eq!(module.body.len(), 1);
    }
}
