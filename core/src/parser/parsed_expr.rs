use crate::parser::Span;

/// Concrete syntax tree produced by [`crate::parser::parse`].
///
/// Unlike the semantic tree it still contains annotations and infix operators
/// exactly as they were written.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedExpr {
    pub expr: Expr,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Number(i64),
    Variable(String),
    /// Operator section, e.g. `(+)`.
    Operator(String),
    Infix {
        op: String,
        op_span: Span,
        left: Box<ParsedExpr>,
        right: Box<ParsedExpr>,
    },
    Lambda {
        param: String,
        param_span: Span,
        body: Box<ParsedExpr>,
    },
    Application {
        function: Box<ParsedExpr>,
        argument: Box<ParsedExpr>,
    },
    Grouped(Box<ParsedExpr>),
    Annotated {
        expr: Box<ParsedExpr>,
        ty: TypeExpr,
    },
}

/// Declared type as written after `::`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeExpr {
    Name(String),
    /// Right-associative arrow: `Arrow(a, Arrow(b, c))` is `a -> b -> c`.
    Arrow(Box<TypeExpr>, Box<TypeExpr>),
}

impl ParsedExpr {
    pub fn new(expr: Expr, span: Span) -> Self {
        Self { expr, span }
    }
}

impl TypeExpr {
    /// Renders the type the way resolved labels are written: a bare name for
    /// atoms, and one pair of parentheses around each arrow chain.
    ///
    /// ```
    /// use hmlabel_core::parser::TypeExpr;
    ///
    /// let n = || Box::new(TypeExpr::Name("N".to_string()));
    /// let ty = TypeExpr::Arrow(n(), Box::new(TypeExpr::Arrow(n(), n())));
    /// assert_eq!(ty.to_label(), "(N->N->N)");
    /// ```
    pub fn to_label(&self) -> String {
        match self {
            TypeExpr::Name(name) => name.clone(),
            TypeExpr::Arrow(..) => {
                let mut parts = Vec::new();
                let mut current = self;
                while let TypeExpr::Arrow(param, result) = current {
                    parts.push(param.to_label());
                    current = result;
                }
                parts.push(current.to_label());
                format!("({})", parts.join("->"))
            }
        }
    }
}

impl core::fmt::Display for TypeExpr {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            TypeExpr::Name(name) => write!(f, "{}", name),
            TypeExpr::Arrow(param, result) => match param.as_ref() {
                TypeExpr::Arrow(..) => write!(f, "({}) -> {}", param, result),
                TypeExpr::Name(_) => write!(f, "{} -> {}", param, result),
            },
        }
    }
}
