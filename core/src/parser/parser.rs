use lazy_static::lazy_static;
use pest::Parser;
use pest::iterators::{Pair, Pairs};
use pest::pratt_parser::{Assoc, Op, PrattParser};
use pest_derive::Parser;

use crate::parser::error::{ParseError, ParseErrorKind, convert_pest_error};
use crate::parser::{Expr, ParsedExpr, Span, TypeExpr};

lazy_static! {
    // Note: precedence is defined lowest to highest.
    static ref PRATT_PARSER: PrattParser<Rule> = PrattParser::new()
        .op(
            Op::infix(Rule::add, Assoc::Left) |
            Op::infix(Rule::sub, Assoc::Left)
        )                                               // `+`, `-`
        .op(
            Op::infix(Rule::mul, Assoc::Left) |
            Op::infix(Rule::div, Assoc::Left)
        )                                               // `*`, `/`
        ;
}

#[derive(Parser)]
#[grammar = "parser/hm.pest"]
pub struct ExpressionParser;

/// Nesting limit used by [`parse`].
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Parses a single (possibly annotated) expression.
pub fn parse(source: &str) -> Result<ParsedExpr, ParseError> {
    parse_with_max_depth(source, DEFAULT_MAX_DEPTH)
}

/// Like [`parse`], but rejects expressions nested deeper than `max_depth`.
///
/// Parentheses and lambdas are counted before the grammar runs, and the
/// height of the resulting tree is checked while it is built, so flat but
/// long application or operator chains are limited too.
pub fn parse_with_max_depth(source: &str, max_depth: usize) -> Result<ParsedExpr, ParseError> {
    check_nesting(source, max_depth)?;

    let mut pairs =
        ExpressionParser::parse(Rule::main, source).map_err(|e| convert_pest_error(e, source))?;
    let main = next_pair(&mut pairs, &Span::new(0, source.len()))?;
    let parsed = parse_expr(main, max_depth)?;
    Ok(parsed.expr)
}

/// Rejects sources whose bracket and lambda nesting exceeds `max_depth`.
///
/// A lambda body runs to the end of the enclosing group, so each `\` opens a
/// level that closes together with that group.
fn check_nesting(source: &str, max_depth: usize) -> Result<(), ParseError> {
    // Lambdas opened at each open group; the outermost entry is the source.
    let mut groups: Vec<usize> = vec![0];
    let mut depth = 0;

    for (offset, c) in source.char_indices() {
        match c {
            '(' => {
                groups.push(0);
                depth += 1;
            }
            '\\' => {
                if let Some(lambdas) = groups.last_mut() {
                    *lambdas += 1;
                }
                depth += 1;
            }
            ')' if groups.len() > 1 => {
                let lambdas = groups.pop().unwrap_or(0);
                depth -= 1 + lambdas;
            }
            _ => {}
        }
        if depth > max_depth {
            return Err(ParseError::new(
                ParseErrorKind::MaxDepthExceeded { depth, max_depth },
                Span::new(offset, offset + c.len_utf8()),
            ));
        }
    }
    Ok(())
}

/// A parsed node and the height of its subtree.
struct Parsed {
    expr: ParsedExpr,
    height: usize,
}

impl Parsed {
    fn leaf(expr: Expr, span: Span) -> Self {
        Self {
            expr: ParsedExpr::new(expr, span),
            height: 1,
        }
    }

    /// Builds a node one level above its tallest child.
    fn node(
        expr: Expr,
        span: Span,
        child_height: usize,
        max_depth: usize,
    ) -> Result<Self, ParseError> {
        let height = child_height + 1;
        if height > max_depth {
            return Err(ParseError::new(
                ParseErrorKind::MaxDepthExceeded {
                    depth: height,
                    max_depth,
                },
                span,
            ));
        }
        Ok(Self {
            expr: ParsedExpr::new(expr, span),
            height,
        })
    }
}

fn parse_expr(pair: Pair<Rule>, max_depth: usize) -> Result<Parsed, ParseError> {
    let span = Span::from(pair.as_span());
    match pair.as_rule() {
        Rule::main => parse_expr(next_pair(&mut pair.into_inner(), &span)?, max_depth),

        Rule::annotated => {
            let mut pairs = pair.into_inner();
            let expr = parse_expr(next_pair(&mut pairs, &span)?, max_depth)?;
            match pairs.next() {
                Some(annotation) => {
                    let ann_span = Span::from(annotation.as_span());
                    let ty = parse_type(next_pair(&mut annotation.into_inner(), &ann_span)?)?;
                    let height = expr.height;
                    Parsed::node(
                        Expr::Annotated {
                            expr: Box::new(expr.expr),
                            ty,
                        },
                        span,
                        height,
                        max_depth,
                    )
                }
                None => Ok(expr),
            }
        }

        Rule::expression => PRATT_PARSER
            .map_primary(|primary| parse_expr(primary, max_depth))
            .map_infix(|lhs, op, rhs| {
                let (left, right) = (lhs?, rhs?);
                let span = Span::combine(&left.expr.span, &right.expr.span);
                let height = left.height.max(right.height);
                match op.as_rule() {
                    Rule::add | Rule::sub | Rule::mul | Rule::div => Parsed::node(
                        Expr::Infix {
                            op: op.as_str().to_string(),
                            op_span: op.as_span().into(),
                            left: Box::new(left.expr),
                            right: Box::new(right.expr),
                        },
                        span,
                        height,
                        max_depth,
                    ),
                    rule => Err(ParseError::new(
                        ParseErrorKind::Other {
                            message: format!("Unknown binary operator: {:?}", rule),
                        },
                        op.as_span().into(),
                    )),
                }
            })
            .parse(pair.into_inner()),

        Rule::application => {
            let mut pairs = pair.into_inner();
            let mut function = parse_expr(next_pair(&mut pairs, &span)?, max_depth)?;
            for next in pairs {
                let argument = parse_expr(next, max_depth)?;
                let span = Span::combine(&function.expr.span, &argument.expr.span);
                let height = function.height.max(argument.height);
                function = Parsed::node(
                    Expr::Application {
                        function: Box::new(function.expr),
                        argument: Box::new(argument.expr),
                    },
                    span,
                    height,
                    max_depth,
                )?;
            }
            Ok(function)
        }

        Rule::lambda => {
            let mut pairs = pair.into_inner();
            let param = next_pair(&mut pairs, &span)?;
            let body = parse_expr(next_pair(&mut pairs, &span)?, max_depth)?;
            let height = body.height;
            Parsed::node(
                Expr::Lambda {
                    param: param.as_str().to_string(),
                    param_span: param.as_span().into(),
                    body: Box::new(body.expr),
                },
                span,
                height,
                max_depth,
            )
        }

        Rule::section => {
            let op = next_pair(&mut pair.into_inner(), &span)?;
            Ok(Parsed::leaf(Expr::Operator(op.as_str().to_string()), span))
        }

        Rule::grouped => {
            let inner = parse_expr(next_pair(&mut pair.into_inner(), &span)?, max_depth)?;
            let height = inner.height;
            Parsed::node(Expr::Grouped(Box::new(inner.expr)), span, height, max_depth)
        }

        Rule::number => {
            let text = pair.as_str();
            let value = text.parse().map_err(|_| {
                ParseError::new(
                    ParseErrorKind::InvalidNumber {
                        text: text.to_string(),
                    },
                    span.clone(),
                )
            })?;
            Ok(Parsed::leaf(Expr::Number(value), span))
        }

        Rule::variable => Ok(Parsed::leaf(Expr::Variable(pair.as_str().to_string()), span)),

        rule => Err(ParseError::new(
            ParseErrorKind::Other {
                message: format!("Unhandled rule: {:?}", rule),
            },
            span,
        )),
    }
}

fn parse_type(pair: Pair<Rule>) -> Result<TypeExpr, ParseError> {
    let span = Span::from(pair.as_span());
    match pair.as_rule() {
        Rule::type_name => Ok(TypeExpr::Name(pair.as_str().to_string())),
        Rule::type_expr => {
            let mut parts = pair
                .into_inner()
                .map(parse_type)
                .collect::<Result<Vec<_>, _>>()?;
            // `a -> b -> c` associates to the right.
            let mut ty = parts.pop().ok_or_else(|| missing_pair(span))?;
            while let Some(param) = parts.pop() {
                ty = TypeExpr::Arrow(Box::new(param), Box::new(ty));
            }
            Ok(ty)
        }
        rule => Err(ParseError::new(
            ParseErrorKind::Other {
                message: format!("Unhandled type rule: {:?}", rule),
            },
            span,
        )),
    }
}

fn next_pair<'i>(pairs: &mut Pairs<'i, Rule>, span: &Span) -> Result<Pair<'i, Rule>, ParseError> {
    pairs.next().ok_or_else(|| missing_pair(span.clone()))
}

fn missing_pair(span: Span) -> ParseError {
    ParseError::new(
        ParseErrorKind::Other {
            message: "missing expected pair in rule".to_string(),
        },
        span,
    )
}
