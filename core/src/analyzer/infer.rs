use tracing::debug;

use crate::analyzer::{LabeledTree, TypeError, TypeErrorKind};
use crate::semantic::{Node, NodeId, SemanticTree};
use crate::types::{ResolutionTable, TypeLabels, halve, is_placeholder, subtract_prefix};

/// A tree whose labels went through [`infer`], plus the substitutions made.
#[derive(Debug, Clone)]
pub struct ResolvedTree<'t> {
    tree: &'t SemanticTree,
    labels: TypeLabels,
    resolutions: ResolutionTable,
}

impl<'t> ResolvedTree<'t> {
    pub fn tree(&self) -> &'t SemanticTree {
        self.tree
    }

    pub fn labels(&self) -> &TypeLabels {
        &self.labels
    }

    pub fn label(&self, id: NodeId) -> &str {
        self.labels.get(id)
    }

    /// Final type of the root node.
    pub fn root_type(&self) -> &str {
        self.labels.get(self.tree.root())
    }

    pub fn resolutions(&self) -> &ResolutionTable {
        &self.resolutions
    }

    /// Splits back into a labelled tree and its resolution table, e.g. to run
    /// [`infer_with`] again.
    pub fn into_parts(self) -> (LabeledTree<'t>, ResolutionTable) {
        (LabeledTree::new(self.tree, self.labels), self.resolutions)
    }
}

/// Resolves placeholder labels into arrow types, starting from an empty
/// resolution table.
pub fn infer(labeled: LabeledTree<'_>) -> Result<ResolvedTree<'_>, TypeError> {
    infer_with(labeled, ResolutionTable::new())
}

/// Like [`infer`], but continues from an existing resolution table.
///
/// The traversal is post-order and stops at the first error; on error the
/// partially filled table is dropped.
pub fn infer_with(
    labeled: LabeledTree<'_>,
    resolutions: ResolutionTable,
) -> Result<ResolvedTree<'_>, TypeError> {
    let tree = labeled.tree();
    let mut inference = Inference {
        tree,
        labels: labeled.into_labels(),
        resolutions,
    };
    inference.infer_node(tree.root())?;
    Ok(ResolvedTree {
        tree,
        labels: inference.labels,
        resolutions: inference.resolutions,
    })
}

struct Inference<'t> {
    tree: &'t SemanticTree,
    labels: TypeLabels,
    resolutions: ResolutionTable,
}

impl Inference<'_> {
    fn infer_node(&mut self, id: NodeId) -> Result<(), TypeError> {
        match *self.tree.node(id) {
            Node::Application { function, argument } => {
                self.infer_node(function)?;
                self.infer_node(argument)?;
                self.application(id, function, argument)
            }
            Node::Paren(inner) => {
                self.infer_node(inner)?;
                let ty = self.labels.get(inner).to_string();
                self.resolve(id, ty);
                Ok(())
            }
            Node::Lambda { param, body } => {
                // The parameter is typed by abstraction, never visited directly.
                self.infer_node(body)?;
                self.abstraction(param)?;
                let ty = format!("({}->{})", self.labels.get(param), self.labels.get(body));
                self.resolve(id, ty);
                Ok(())
            }
            Node::Number(_) | Node::Variable(_) | Node::Operator(_) => Ok(()),
        }
    }

    fn application(
        &mut self,
        id: NodeId,
        function: NodeId,
        argument: NodeId,
    ) -> Result<(), TypeError> {
        let function_ty = self.labels.get(function);
        let argument_ty = self.labels.get(argument);

        if is_placeholder(argument_ty) {
            // Nothing known about the argument yet: split the function type.
            let (result, param) = halve(function_ty);
            self.resolve(id, result);
            self.resolve(argument, param);
        } else {
            let remainder = subtract_prefix(function_ty, argument_ty).map_err(|mismatch| {
                TypeError::mismatch(
                    mismatch,
                    self.tree.span(id).clone(),
                    self.tree.span(function).clone(),
                    self.tree.span(argument).clone(),
                )
            })?;
            self.resolve(id, remainder);
        }
        Ok(())
    }

    fn abstraction(&mut self, param: NodeId) -> Result<(), TypeError> {
        let placeholder = self.labels.get(param);
        match self.resolutions.get(placeholder) {
            Some(ty) => {
                debug!(node = %param, %placeholder, %ty, "abstraction");
                let ty = ty.to_string();
                self.labels.set(param, ty);
                Ok(())
            }
            None => {
                let param_name = match self.tree.node(param) {
                    Node::Variable(name) => name.clone(),
                    _ => String::new(),
                };
                Err(TypeError::new(
                    TypeErrorKind::Abstraction {
                        param: param_name,
                        placeholder: placeholder.to_string(),
                    },
                    self.tree.span(param).clone(),
                ))
            }
        }
    }

    /// Records `label(id) := ty` in the resolution table and relabels `id`.
    fn resolve(&mut self, id: NodeId, ty: String) {
        let previous = self.labels.get(id).to_string();
        debug!(node = %id, from = %previous, to = %ty, "resolve");
        self.resolutions.insert(previous, ty.clone());
        self.labels.set(id, ty);
    }
}
