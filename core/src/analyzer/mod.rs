//! The two labelling passes.
//!
//! [`assign`] gives every node a declared type or a placeholder letter;
//! [`infer`] then resolves those labels into arrow types bottom-up. Both are
//! pure with respect to the tree: labels live in [`crate::types::TypeLabels`].

mod assign;
mod error;
mod infer;

pub use assign::{Assignment, LabeledTree, assign};
pub use error::{TypeError, TypeErrorKind};
pub use infer::{ResolvedTree, infer, infer_with};
