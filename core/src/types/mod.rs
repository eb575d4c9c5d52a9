//! Textual type labels and the tables the labelling passes read and write.
//!
//! A label is either a one-letter placeholder (`a`) or a parenthesized arrow
//! chain (`(a->b)`, `((a->b)->c)`). Labels are compared purely as text.

pub mod codec;
mod labels;
mod tables;

pub use codec::{Mismatch, halve, subtract_prefix};
pub use labels::{PLACEHOLDER_LETTERS, PlaceholderSupply, TypeLabels, is_placeholder};
pub use tables::{AnnotationTable, CanonicalForm, PlaceholderMemo, ResolutionTable, Table};
