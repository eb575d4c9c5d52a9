use std::collections::VecDeque;

use tracing::trace;

use crate::analyzer::{TypeError, TypeErrorKind};
use crate::semantic::{NodeId, SemanticTree};
use crate::types::{
    AnnotationTable, PLACEHOLDER_LETTERS, PlaceholderMemo, PlaceholderSupply, TypeLabels,
};

/// A tree together with one type label per node.
#[derive(Debug, Clone)]
pub struct LabeledTree<'t> {
    tree: &'t SemanticTree,
    labels: TypeLabels,
}

impl<'t> LabeledTree<'t> {
    pub fn new(tree: &'t SemanticTree, labels: TypeLabels) -> Self {
        debug_assert_eq!(tree.len(), labels.len());
        Self { tree, labels }
    }

    pub fn tree(&self) -> &'t SemanticTree {
        self.tree
    }

    pub fn labels(&self) -> &TypeLabels {
        &self.labels
    }

    pub fn label(&self, id: NodeId) -> &str {
        self.labels.get(id)
    }

    pub fn into_labels(self) -> TypeLabels {
        self.labels
    }
}

/// Output of [`assign`].
#[derive(Debug, Clone)]
pub struct Assignment<'t> {
    pub labeled: LabeledTree<'t>,
    pub memo: PlaceholderMemo,
}

/// Labels every node in breadth-first order.
///
/// A node whose canonical form was declared in `annotations` takes the
/// declared type. Otherwise it reuses the placeholder already given to the
/// same canonical form, or draws the next unused letter.
pub fn assign<'t>(
    tree: &'t SemanticTree,
    annotations: &AnnotationTable,
) -> Result<Assignment<'t>, TypeError> {
    let mut labels = TypeLabels::with_len(tree.len());
    let mut memo = PlaceholderMemo::new();
    let mut supply = PlaceholderSupply::new();

    let mut queue = VecDeque::from([tree.root()]);
    while let Some(id) = queue.pop_front() {
        let key = tree.canonical_form(id);
        let label = if let Some(declared) = annotations.get(&key) {
            declared.to_string()
        } else if let Some(placeholder) = memo.get(&key) {
            placeholder.to_string()
        } else {
            let placeholder = supply.next_placeholder().ok_or_else(|| {
                TypeError::new(
                    TypeErrorKind::PlaceholdersExhausted {
                        limit: PLACEHOLDER_LETTERS,
                    },
                    tree.span(id).clone(),
                )
            })?;
            memo.insert(key.clone(), placeholder.clone());
            placeholder
        };
        trace!(node = %id, %key, %label, "assign");
        labels.set(id, label);
        queue.extend(tree.node(id).children());
    }

    Ok(Assignment {
        labeled: LabeledTree::new(tree, labels),
        memo,
    })
}
