//! Checking session.

use tracing::debug;

use super::{Error, SessionOptions};
use crate::analyzer::{self, Assignment, LabeledTree};
use crate::parser;
use crate::semantic::{self, NodeId, SemanticTree, TreeDisplay};
use crate::types::{AnnotationTable, PlaceholderMemo, ResolutionTable, TypeLabels};

/// Processes one expression at a time.
///
/// Every submission gets a fresh tree, placeholder memo and resolution table.
/// Declared types are carried over between submissions when
/// [`SessionOptions::retain_annotations`] is set.
#[derive(Debug, Default)]
pub struct Session {
    options: SessionOptions,
    annotations: AnnotationTable,
}

impl Session {
    pub fn new(options: SessionOptions) -> Self {
        Self {
            options,
            annotations: AnnotationTable::new(),
        }
    }

    pub fn options(&self) -> &SessionOptions {
        &self.options
    }

    /// Declared types retained for the next submission.
    pub fn annotations(&self) -> &AnnotationTable {
        &self.annotations
    }

    /// Forgets every retained declaration.
    pub fn reset(&mut self) {
        self.annotations = AnnotationTable::new();
    }

    /// Parses `source`, builds its tree and runs the placeholder pass.
    ///
    /// Declarations found in `source` are retained even if a later stage
    /// fails.
    pub fn label(&mut self, source: &str) -> Result<LabeledExpression, Error> {
        let parsed = parser::parse_with_max_depth(source, self.options.max_depth)
            .map_err(|e| Error::parse(e, source))?;

        let mut annotations = if self.options.retain_annotations {
            self.annotations.clone()
        } else {
            AnnotationTable::new()
        };
        let tree = semantic::build(&parsed, &mut annotations);
        if self.options.retain_annotations {
            let mut retained = annotations.clone();
            retained.retain_textual();
            self.annotations = retained;
        }
        debug!(nodes = tree.len(), annotations = annotations.len(), "built tree");

        let Assignment { labeled, memo } =
            analyzer::assign(&tree, &annotations).map_err(|e| Error::typing(e, source))?;
        let labels = labeled.into_labels();

        Ok(LabeledExpression {
            source: source.to_string(),
            tree,
            annotations,
            labels,
            memo,
        })
    }

    /// Runs every stage on `source`.
    pub fn check(&mut self, source: &str) -> Result<CheckedExpression, Error> {
        self.label(source)?.infer()
    }
}

/// An expression after the placeholder pass.
#[derive(Debug, Clone)]
pub struct LabeledExpression {
    source: String,
    tree: SemanticTree,
    annotations: AnnotationTable,
    labels: TypeLabels,
    memo: PlaceholderMemo,
}

impl LabeledExpression {
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn tree(&self) -> &SemanticTree {
        &self.tree
    }

    /// Declared types in effect for this expression.
    pub fn annotations(&self) -> &AnnotationTable {
        &self.annotations
    }

    pub fn labels(&self) -> &TypeLabels {
        &self.labels
    }

    pub fn label(&self, id: NodeId) -> &str {
        self.labels.get(id)
    }

    pub fn memo(&self) -> &PlaceholderMemo {
        &self.memo
    }

    pub fn display(&self) -> TreeDisplay<'_> {
        TreeDisplay::new(&self.tree, &self.labels)
    }

    /// Runs structural inference over the assigned labels.
    pub fn infer(self) -> Result<CheckedExpression, Error> {
        let labeled = LabeledTree::new(&self.tree, self.labels.clone());
        let resolved = analyzer::infer(labeled).map_err(|e| Error::typing(e, &self.source))?;
        let (labeled, resolutions) = resolved.into_parts();
        let resolved = labeled.into_labels();

        Ok(CheckedExpression {
            labeled: self,
            resolved,
            resolutions,
        })
    }
}

/// An expression after both passes.
#[derive(Debug, Clone)]
pub struct CheckedExpression {
    labeled: LabeledExpression,
    resolved: TypeLabels,
    resolutions: ResolutionTable,
}

impl CheckedExpression {
    /// The expression as it was before inference.
    pub fn labeled(&self) -> &LabeledExpression {
        &self.labeled
    }

    pub fn tree(&self) -> &SemanticTree {
        &self.labeled.tree
    }

    pub fn annotations(&self) -> &AnnotationTable {
        &self.labeled.annotations
    }

    pub fn memo(&self) -> &PlaceholderMemo {
        &self.labeled.memo
    }

    /// Labels after inference.
    pub fn labels(&self) -> &TypeLabels {
        &self.resolved
    }

    pub fn label(&self, id: NodeId) -> &str {
        self.resolved.get(id)
    }

    pub fn resolutions(&self) -> &ResolutionTable {
        &self.resolutions
    }

    /// Final type of the whole expression.
    pub fn root_type(&self) -> &str {
        self.resolved.get(self.labeled.tree.root())
    }

    pub fn display(&self) -> TreeDisplay<'_> {
        TreeDisplay::new(&self.labeled.tree, &self.resolved)
    }
}
