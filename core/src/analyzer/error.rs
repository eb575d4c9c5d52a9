use thiserror::Error;

use crate::api::{Diagnostic, RelatedInfo, Severity};
use crate::parser::Span;
use crate::types::Mismatch;

/// Type error with its source location
#[derive(Debug, Clone, PartialEq)]
pub struct TypeError {
    pub kind: TypeErrorKind,
    pub span: Span,
    pub related: Vec<RelatedInfo>,
}

/// Specific kinds of type errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TypeErrorKind {
    /// The argument's type is not the first part of the function's type
    #[error("Type mismatch: {function} vs {argument}")]
    TypeMismatch { function: String, argument: String },
    /// A lambda parameter was never constrained by an application
    #[error("Abstraction error: parameter '{param}' of type {placeholder} is never constrained")]
    Abstraction { param: String, placeholder: String },
    /// More distinct subexpressions than placeholder letters
    #[error("Out of placeholder names: at most {limit} distinct subexpressions are supported")]
    PlaceholdersExhausted { limit: usize },
}

impl TypeError {
    pub fn new(kind: TypeErrorKind, span: Span) -> Self {
        Self {
            kind,
            span,
            related: Vec::new(),
        }
    }

    pub(crate) fn mismatch(
        mismatch: Mismatch,
        span: Span,
        function_span: Span,
        argument_span: Span,
    ) -> Self {
        let related = vec![
            RelatedInfo {
                span: function_span,
                message: format!("function has type {}", mismatch.function),
            },
            RelatedInfo {
                span: argument_span,
                message: format!("argument has type {}", mismatch.argument),
            },
        ];
        Self {
            kind: TypeErrorKind::TypeMismatch {
                function: mismatch.function,
                argument: mismatch.argument,
            },
            span,
            related,
        }
    }

    /// Convert to a Diagnostic for API boundary
    pub fn to_diagnostic(&self) -> Diagnostic {
        let (code, help) = match &self.kind {
            TypeErrorKind::TypeMismatch { .. } => (
                "T001",
                "The argument's type must be the first part of the function's type",
            ),
            TypeErrorKind::Abstraction { .. } => (
                "T002",
                "Apply the lambda or annotate something it uses, so the parameter gets a type",
            ),
            TypeErrorKind::PlaceholdersExhausted { .. } => {
                ("T003", "Split the expression or annotate some subexpressions")
            }
        };

        Diagnostic {
            severity: Severity::Error,
            message: self.kind.to_string(),
            span: self.span.clone(),
            related: self.related.clone(),
            help: Some(help.to_string()),
            code: Some(code.to_string()),
        }
    }
}

impl core::fmt::Display for TypeError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let diagnostic = self.to_diagnostic();
        write!(f, "{}: {}", diagnostic.severity, diagnostic.message)?;

        if let Some(ref code) = diagnostic.code {
            write!(f, " [{}]", code)?;
        }

        if let Some(ref help) = diagnostic.help {
            write!(f, "\nhelp: {}", help)?;
        }

        Ok(())
    }
}

impl std::error::Error for TypeError {}
