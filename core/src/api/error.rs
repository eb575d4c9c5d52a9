//! Public error types.
//!
//! Stage errors ([`ParseError`], [`TypeError`]) are converted to these at the
//! API boundary.

use core::fmt;

use thiserror::Error;

use crate::analyzer::{TypeError, TypeErrorKind};
use crate::parser::{ParseError, Span};

/// Public error type for all session operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Parse or type errors, with the submitted text for rendering.
    #[error("Checking failed with {} error(s)", .diagnostics.len())]
    Compilation {
        diagnostics: Vec<Diagnostic>,
        input: String,
    },

    /// Resource limits exceeded (e.g. placeholder letters).
    #[error("Resource limit exceeded: {0}")]
    ResourceExceeded(String),
}

impl Error {
    pub(crate) fn parse(err: ParseError, input: &str) -> Self {
        Error::Compilation {
            diagnostics: vec![err.to_diagnostic()],
            input: input.to_string(),
        }
    }

    pub(crate) fn typing(err: TypeError, input: &str) -> Self {
        match err.kind {
            TypeErrorKind::PlaceholdersExhausted { .. } => {
                Error::ResourceExceeded(err.kind.to_string())
            }
            _ => Error::Compilation {
                diagnostics: vec![err.to_diagnostic()],
                input: input.to_string(),
            },
        }
    }

    /// Diagnostics carried by the error, if any.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        match self {
            Error::Compilation { diagnostics, .. } => diagnostics,
            Error::ResourceExceeded(_) => &[],
        }
    }
}

/// A diagnostic message with source location.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    /// Severity level.
    pub severity: Severity,

    /// Primary diagnostic message.
    pub message: String,

    /// Source location of the primary issue.
    pub span: Span,

    /// Related locations that provide additional context.
    pub related: Vec<RelatedInfo>,

    /// Optional help text suggesting how to fix the issue.
    pub help: Option<String>,

    /// Optional error code (e.g., "T001") for documentation lookup.
    pub code: Option<String>,
}

/// Severity level for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Error - checking cannot succeed.
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
        }
    }
}

/// Related information for a diagnostic (e.g., "function has type (N->N)").
#[derive(Debug, Clone, PartialEq)]
pub struct RelatedInfo {
    /// Source location of the related information.
    pub span: Span,

    /// Message explaining the relevance.
    pub message: String,
}
