use core::fmt;

use crate::semantic::{Node, NodeId, SemanticTree};
use crate::types::TypeLabels;

/// Symbol a renderer shows for a node: `λ`, `@`, `ParenExpr`, or the
/// literal/name itself for leaves.
pub fn display_symbol(tree: &SemanticTree, id: NodeId) -> String {
    match tree.node(id) {
        Node::Number(value) => value.to_string(),
        Node::Variable(name) => name.clone(),
        Node::Operator(symbol) => symbol.clone(),
        Node::Lambda { .. } => "λ".to_string(),
        Node::Application { .. } => "@".to_string(),
        Node::Paren(_) => "ParenExpr".to_string(),
    }
}

/// Display symbol of a node followed by its current type label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeLabel {
    pub symbol: String,
    pub ty: String,
}

impl NodeLabel {
    pub fn new(tree: &SemanticTree, labels: &TypeLabels, id: NodeId) -> Self {
        Self {
            symbol: display_symbol(tree, id),
            ty: labels.get(id).to_string(),
        }
    }
}

impl fmt::Display for NodeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.symbol, self.ty)
    }
}

/// Indented, one-node-per-line rendering of a labelled tree.
pub struct TreeDisplay<'a> {
    tree: &'a SemanticTree,
    labels: &'a TypeLabels,
}

impl<'a> TreeDisplay<'a> {
    pub fn new(tree: &'a SemanticTree, labels: &'a TypeLabels) -> Self {
        Self { tree, labels }
    }

    fn write_node(&self, f: &mut fmt::Formatter<'_>, id: NodeId, depth: usize) -> fmt::Result {
        writeln!(
            f,
            "{:indent$}{}",
            "",
            NodeLabel::new(self.tree, self.labels, id),
            indent = depth * 2
        )?;
        for child in self.tree.node(id).children() {
            self.write_node(f, child, depth + 1)?;
        }
        Ok(())
    }
}

impl fmt::Display for TreeDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_node(f, self.tree.root(), 0)
    }
}
