//! JSX lowering.
//!
//! Rewrites JSX element trees into nested element-constructor calls:
//!
//! `<Button kind="primary">Go</Button>`
//! → `React.createElement(Button, { kind: "primary" }, "Go")`
//!
//! Lowercase and dashed tag names become string literals (intrinsic
//! elements); capitalized names stay identifier references (components);
//! member tags become member expressions. Elements without attributes get
//! `null` in attribute position; spread attributes fold the attribute
//! list into an `Object.assign` call. Text children are kept exactly as
//! written, whitespace included.

use swc_common::{Span, Spanned};
use swc_ecma_ast as ast;
use swc_ecma_visit::{VisitMut, VisitMutWith};

use pb_config::CompilerConfig;

use crate::error::TransformError;
use crate::util;

pub fn lower(module: &mut ast::Module, config: &CompilerConfig) -> Result<(), TransformError> {
    let mut pass = Lowering {
        config,
        errors: Vec::new(),
    };
    module.visit_mut_with(&mut pass);
    match pass.errors.into_iter().next() {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

/// True for tag names that refer to intrinsic elements (`div`,
/// `my-widget`) rather than component bindings (`Button`).
fn is_intrinsic_tag(name: &str) -> bool {
    name.chars().next().is_some_and(|c| c.is_ascii_lowercase()) || name.contains('-')
}

/// True when a name can be an object-literal key without quoting.
fn is_plain_ident(name: &str) -> bool {
    let mut chars = name.chars();
    chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_' || c == '$')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

struct Lowering<'a> {
    config: &'a CompilerConfig,
    errors: Vec<TransformError>,
}

impl Lowering<'_> {
    fn constructor_call(&self, args: Vec<ast::Expr>, span: Span) -> ast::Expr {
        ast::Expr::Call(ast::CallExpr {
            span,
            callee: ast::Callee::Expr(Box::new(util::dotted_expr(&self.config.pragma, span))),
            args: args
                .into_iter()
                .map(|expr| ast::ExprOrSpread {
                    spread: None,
                    expr: Box::new(expr),
                })
                .collect(),
            type_args: None,
            ..Default::default()
        })
    }

    fn lower_element(&mut self, el: ast::JSXElement) -> ast::Expr {
        let span = el.span;
        let tag = match self.tag_expr(el.opening.name) {
            Ok(tag) => tag,
            Err(err) => {
                self.errors.push(err);
                return ast::Expr::Invalid(ast::Invalid { span });
            }
        };
        let attrs = self.attrs_expr(el.opening.attrs, span);
        let mut args = vec![tag, attrs];
        self.push_children(el.children, &mut args);
        self.constructor_call(args, span)
    }

    fn lower_fragment(&mut self, frag: ast::JSXFragment) -> ast::Expr {
        let span = frag.span;
        let mut args = vec![
            util::dotted_expr(&self.config.pragma_frag, span),
            ast::Expr::Lit(ast::Lit::Null(ast::Null { span })),
        ];
        self.push_children(frag.children, &mut args);
        self.constructor_call(args, span)
    }

    fn tag_expr(&mut self, name: ast::JSXElementName) -> Result<ast::Expr, TransformError> {
        match name {
            ast::JSXElementName::Ident(ident) => {
                if is_intrinsic_tag(ident.sym.as_str()) {
                    Ok(ast::Expr::Lit(ast::Lit::Str(ast::Str {
                        span: ident.span,
                        value: ident.sym.as_str().into(),
                        raw: None,
                    })))
                } else {
                    Ok(ast::Expr::Ident(ident))
                }
            }
            ast::JSXElementName::JSXMemberExpr(member) => Ok(jsx_member_expr(member)),
            ast::JSXElementName::JSXNamespacedName(name) => Err(TransformError::new(
                "namespaced JSX tags are not supported",
                name.span(),
            )),
        }
    }

    fn attrs_expr(&mut self, attrs: Vec<ast::JSXAttrOrSpread>, span: Span) -> ast::Expr {
        if attrs.is_empty() {
            return ast::Expr::Lit(ast::Lit::Null(ast::Null { span }));
        }

        let has_spread = attrs
            .iter()
            .any(|attr| matches!(attr, ast::JSXAttrOrSpread::SpreadElement(_)));
        if !has_spread {
            let props = attrs
                .into_iter()
                .filter_map(|attr| match attr {
                    ast::JSXAttrOrSpread::JSXAttr(attr) => Some(self.attr_prop(attr)),
                    ast::JSXAttrOrSpread::SpreadElement(_) => None,
                })
                .collect();
            return ast::Expr::Object(ast::ObjectLit { span, props });
        }

        // Mixed spread and named attributes fold into Object.assign({}, ...),
        // grouping consecutive named attributes into object literals.
        let mut args: Vec<ast::ExprOrSpread> = vec![ast::ExprOrSpread {
            spread: None,
            expr: Box::new(ast::Expr::Object(ast::ObjectLit {
                span,
                props: vec![],
            })),
        }];
        let mut group: Vec<ast::PropOrSpread> = Vec::new();
        for attr in attrs {
            match attr {
                ast::JSXAttrOrSpread::JSXAttr(attr) => group.push(self.attr_prop(attr)),
                ast::JSXAttrOrSpread::SpreadElement(spread) => {
                    if !group.is_empty() {
                        args.push(object_arg(std::mem::take(&mut group), span));
                    }
                    args.push(ast::ExprOrSpread {
                        spread: None,
                        expr: spread.expr,
                    });
                }
            }
        }
        if !group.is_empty() {
            args.push(object_arg(group, span));
        }
        ast::Expr::Call(ast::CallExpr {
            span,
            callee: ast::Callee::Expr(Box::new(util::dotted_expr("Object.assign", span))),
            args,
            type_args: None,
            ..Default::default()
        })
    }

    fn attr_prop(&mut self, attr: ast::JSXAttr) -> ast::PropOrSpread {
        let span = attr.span;
        let key = match attr.name {
            ast::JSXAttrName::Ident(name) => {
                if is_plain_ident(name.sym.as_str()) {
                    ast::PropName::Ident(name)
                } else {
                    ast::PropName::Str(ast::Str {
                        span: name.span,
                        value: name.sym.as_str().into(),
                        raw: None,
                    })
                }
            }
            ast::JSXAttrName::JSXNamespacedName(name) => {
                let joined = format!("{}:{}", name.ns.sym, name.name.sym);
                ast::PropName::Str(ast::Str {
                    span,
                    value: joined.into(),
                    raw: None,
                })
            }
        };
        let value = match attr.value {
            None => ast::Expr::Lit(ast::Lit::Bool(ast::Bool { span, value: true })),
            Some(ast::JSXAttrValue::Lit(lit)) => ast::Expr::Lit(lit),
            Some(ast::JSXAttrValue::JSXExprContainer(container)) => match container.expr {
                ast::JSXExpr::Expr(expr) => *expr,
                ast::JSXExpr::JSXEmptyExpr(_) => {
                    ast::Expr::Lit(ast::Lit::Bool(ast::Bool { span, value: true }))
                }
            },
            Some(ast::JSXAttrValue::JSXElement(el)) => self.lower_element(*el),
            Some(ast::JSXAttrValue::JSXFragment(frag)) => self.lower_fragment(frag),
        };
        ast::PropOrSpread::Prop(Box::new(ast::Prop::KeyValue(ast::KeyValueProp {
            key,
            value: Box::new(value),
        })))
    }

    fn push_children(&mut self, children: Vec<ast::JSXElementChild>, args: &mut Vec<ast::Expr>) {
        for child in children {
            match child {
                ast::JSXElementChild::JSXText(text) => {
                    // Text is kept exactly as written; no whitespace trimming.
                    args.push(ast::Expr::Lit(ast::Lit::Str(ast::Str {
                        span: text.span,
                        value: text.value.to_string().into(),
                        raw: None,
                    })));
                }
                ast::JSXElementChild::JSXExprContainer(container) => {
                    if let ast::JSXExpr::Expr(expr) = container.expr {
                        args.push(*expr);
                    }
                }
                ast::JSXElementChild::JSXElement(el) => {
                    let lowered = self.lower_element(*el);
                    args.push(lowered);
                }
                ast::JSXElementChild::JSXFragment(frag) => {
                    let lowered = self.lower_fragment(frag);
                    args.push(lowered);
                }
                ast::JSXElementChild::JSXSpreadChild(spread) => {
                    self.errors.push(TransformError::new(
                        "JSX spread children are not supported",
                        spread.span,
                    ));
                }
            }
        }
    }
}

fn object_arg(props: Vec<ast::PropOrSpread>, span: Span) -> ast::ExprOrSpread {
    ast::ExprOrSpread {
        spread: None,
        expr: Box::new(ast::Expr::Object(ast::ObjectLit { span, props })),
    }
}

fn jsx_member_expr(member: ast::JSXMemberExpr) -> ast::Expr {
    let obj = match member.obj {
        ast::JSXObject::Ident(ident) => ast::Expr::Ident(ident),
        ast::JSXObject::JSXMemberExpr(inner) => jsx_member_expr(*inner),
    };
    ast::Expr::Member(ast::MemberExpr {
        span: member.span,
        obj: Box::new(obj),
        prop: ast::MemberProp::Ident(member.prop),
    })
}

impl VisitMut for Lowering<'_> {
    fn visit_mut_expr(&mut self, expr: &mut ast::Expr) {
        expr.visit_mut_children_with(self);
        if matches!(expr, ast::Expr::JSXElement(_) | ast::Expr::JSXFragment(_)) {
            let span = expr.span();
            let inner = std::mem::replace(expr, ast::Expr::Invalid(ast::Invalid { span }));
            *expr = match inner {
                ast::Expr::JSXElement(el) => self.lower_element(*el),
                ast::Expr::JSXFragment(frag) => self.lower_fragment(frag),
                other => other,
            };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercase_and_dashed_tags_are_intrinsic() {
        assert!(is_intrinsic_tag("div"));
        assert!(is_intrinsic_tag("my-widget"));
        assert!(!is_intrinsic_tag("Button"));
    }

    #[test]
    fn dashed_names_need_quoting_as_keys() {
        assert!(is_plain_ident("className"));
        assert!(is_plain_ident("$ref"));
        assert!(!is_plain_ident("data-id"));
    }
}
