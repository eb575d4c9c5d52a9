//! hmlabel - placeholder labelling and structural type inference for a small
//! lambda-calculus expression language.
//!
//! # Overview
//!
//! Every subexpression of an input such as `(\x -> f x) 1` is first given a
//! type label, either a declared type (`f :: N -> N`) or a fresh placeholder
//! letter, and then the labels are rewritten into arrow types by a single
//! bottom-up pass.
//!
//! # Quick Start
//!
//! ```
//! use hmlabel::{Session, SessionOptions};
//!
//! let mut session = Session::new(SessionOptions::default());
//!
//! // Declarations are remembered by the session.
//! session.check("f :: N -> N").unwrap();
//!
//! let checked = session.check("(\\x -> f x) 1").unwrap();
//! assert_eq!(checked.root_type(), "N");
//! println!("{}", checked.display());
//! ```
//!
//! # Errors
//!
//! Parse and type errors carry source spans and can be rendered with
//! [`render_error`]:
//!
//! ```no_run
//! use hmlabel::{Session, render_error};
//!
//! let mut session = Session::default();
//! if let Err(e) = session.check("\\x -> x") {
//!     render_error(&e);
//! }
//! ```

mod error_renderer;

// Re-export public API from hmlabel_core
pub use hmlabel_core::api::{
    CheckedExpression, Diagnostic, Error, LabeledExpression, RelatedInfo, Session, SessionOptions,
    Severity,
};

// Re-export the building blocks for hosts that drive the passes themselves
pub use hmlabel_core::analyzer::{self, TypeError, TypeErrorKind};
pub use hmlabel_core::parser::{self, ParseError};
pub use hmlabel_core::semantic::{self, Node, NodeId, SemanticTree, TreeDisplay};
pub use hmlabel_core::types::{self, AnnotationTable, CanonicalForm, ResolutionTable};

pub use error_renderer::{
    render_error, render_error_to, render_error_to_string, render_error_to_string_no_color,
};
