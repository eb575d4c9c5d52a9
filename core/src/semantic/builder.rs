use tracing::trace;

use crate::parser::{Expr, ParsedExpr, Span};
use crate::semantic::{NodeId, SemanticTree, TreeArena};
use crate::types::AnnotationTable;

/// Converts a parsed expression into a semantic tree.
///
/// Every `expr :: type` found on the way is recorded in `annotations` under
/// the canonical form of `expr`, and the annotation itself disappears from the
/// tree. Infix operators become two nested applications of an operator node.
pub fn build(parsed: &ParsedExpr, annotations: &mut AnnotationTable) -> SemanticTree {
    let mut builder = Builder {
        arena: TreeArena::new(),
        annotations,
    };
    let root = builder.expr(parsed);
    builder.arena.finish(root)
}

struct Builder<'a> {
    arena: TreeArena,
    annotations: &'a mut AnnotationTable,
}

impl Builder<'_> {
    fn expr(&mut self, parsed: &ParsedExpr) -> NodeId {
        let span = parsed.span.clone();
        match &parsed.expr {
            Expr::Number(value) => self.arena.number(*value, span),
            Expr::Variable(name) => self.arena.variable(name.as_str(), span),
            Expr::Operator(symbol) => self.arena.operator(symbol.as_str(), span),
            Expr::Infix {
                op,
                op_span,
                left,
                right,
            } => {
                let operator = self.arena.operator(op.as_str(), op_span.clone());
                let left_id = self.expr(left);
                let partial = self.arena.application(
                    operator,
                    left_id,
                    Span::combine(&left.span, op_span),
                );
                let right_id = self.expr(right);
                self.arena.application(partial, right_id, span)
            }
            Expr::Lambda {
                param,
                param_span,
                body,
            } => {
                let body = self.expr(body);
                self.arena
                    .lambda(param.as_str(), param_span.clone(), body, span)
            }
            Expr::Application { function, argument } => {
                let function = self.expr(function);
                let argument = self.expr(argument);
                self.arena.application(function, argument, span)
            }
            Expr::Grouped(inner) => {
                let inner = self.expr(inner);
                self.arena.paren(inner, span)
            }
            Expr::Annotated { expr, ty } => {
                let id = self.expr(expr);
                let key = self.arena.canonical_form(id);
                let declared = ty.to_label();
                trace!(%key, %declared, "annotation");
                self.annotations.insert(key, declared);
                id
            }
        }
    }
}
