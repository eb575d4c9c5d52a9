mod parsed_expr;
#[allow(clippy::module_inception)]
pub mod parser;
mod syntax;
pub mod error;

// Re-export the parser and rule enum for external use
pub use parser::ExpressionParser;
pub use parser::Rule;
pub use parser::parse;
pub use parser::{DEFAULT_MAX_DEPTH, parse_with_max_depth};

pub use error::{ParseError, ParseErrorKind};
pub use parsed_expr::{Expr, ParsedExpr, TypeExpr};
pub use syntax::Span;


#[cfg(test)]
mod rule_valid_test;
