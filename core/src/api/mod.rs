//! Public API: a [`Session`] runs parse, build, assign and infer for each
//! submitted expression and keeps declared types between submissions.
//!
//! # Example
//!
//! ```
//! use hmlabel_core::api::{Session, SessionOptions};
//!
//! let mut session = Session::new(SessionOptions::default());
//! session.check("f :: N -> N").unwrap();
//!
//! let checked = session.check("\\x -> f x").unwrap();
//! assert_eq!(checked.root_type(), "(N->N)");
//! ```

pub mod error;
pub mod options;
pub mod session;

pub use error::{Diagnostic, Error, RelatedInfo, Severity};
pub use options::SessionOptions;
pub use session::{CheckedExpression, LabeledExpression, Session};
