//! Semantic tree: the five expression forms stored in an index-addressed
//! arena, plus the builder that converts parser output into it.

mod builder;
mod display;
mod tree;

pub use builder::build;
pub use display::{NodeLabel, TreeDisplay, display_symbol};
pub use tree::{Node, NodeId, SemanticTree, TreeArena};
