use crate::parser::Span;
use crate::types::CanonicalForm;

/// Stable index of a node inside a [`SemanticTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u32);

impl NodeId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl core::fmt::Display for NodeId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One expression form. Children are referenced by id and owned by exactly
/// one parent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Number(i64),
    Variable(String),
    Operator(String),
    /// `param` always refers to a [`Node::Variable`].
    Lambda {
        param: NodeId,
        body: NodeId,
    },
    Application {
        function: NodeId,
        argument: NodeId,
    },
    Paren(NodeId),
}

impl Node {
    /// Children in the order the labelling pass visits them.
    pub fn children(&self) -> impl Iterator<Item = NodeId> {
        let (first, second) = match *self {
            Node::Number(_) | Node::Variable(_) | Node::Operator(_) => (None, None),
            Node::Lambda { param, body } => (Some(param), Some(body)),
            Node::Application { function, argument } => (Some(function), Some(argument)),
            Node::Paren(inner) => (Some(inner), None),
        };
        first.into_iter().chain(second)
    }
}

/// Append-only node storage used while a tree is being built.
#[derive(Debug, Default)]
pub struct TreeArena {
    nodes: Vec<Node>,
    spans: Vec<Span>,
}

impl TreeArena {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&mut self, node: Node, span: Span) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        self.spans.push(span);
        id
    }

    pub fn number(&mut self, value: i64, span: Span) -> NodeId {
        self.push(Node::Number(value), span)
    }

    pub fn variable(&mut self, name: impl Into<String>, span: Span) -> NodeId {
        self.push(Node::Variable(name.into()), span)
    }

    pub fn operator(&mut self, symbol: impl Into<String>, span: Span) -> NodeId {
        self.push(Node::Operator(symbol.into()), span)
    }

    /// Creates the parameter variable node together with the lambda.
    pub fn lambda(
        &mut self,
        param: impl Into<String>,
        param_span: Span,
        body: NodeId,
        span: Span,
    ) -> NodeId {
        let param = self.variable(param, param_span);
        self.push(Node::Lambda { param, body }, span)
    }

    pub fn application(&mut self, function: NodeId, argument: NodeId, span: Span) -> NodeId {
        self.push(Node::Application { function, argument }, span)
    }

    pub fn paren(&mut self, inner: NodeId, span: Span) -> NodeId {
        self.push(Node::Paren(inner), span)
    }

    pub fn canonical_form(&self, id: NodeId) -> CanonicalForm {
        canonical_form_of(&self.nodes[id.index()], id)
    }

    /// Freezes the arena with `root` as the top node.
    pub fn finish(self, root: NodeId) -> SemanticTree {
        SemanticTree {
            nodes: self.nodes,
            spans: self.spans,
            root,
        }
    }
}

/// Tree of semantic nodes. Its shape never changes once built; type labels
/// live in separate tables indexed by [`NodeId`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SemanticTree {
    nodes: Vec<Node>,
    spans: Vec<Span>,
    root: NodeId,
}

impl SemanticTree {
    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    pub fn span(&self, id: NodeId) -> &Span {
        &self.spans[id.index()]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = NodeId> + use<> {
        (0..self.nodes.len() as u32).map(NodeId)
    }

    /// Key under which a node is looked up in the annotation table and the
    /// placeholder memo.
    pub fn canonical_form(&self, id: NodeId) -> CanonicalForm {
        canonical_form_of(self.node(id), id)
    }
}

/// Leaves share a key with every leaf of the same text; compound nodes are
/// keyed by their own id, so two compound expressions never collide.
fn canonical_form_of(node: &Node, id: NodeId) -> CanonicalForm {
    match node {
        Node::Number(value) => CanonicalForm::Text(value.to_string()),
        Node::Variable(name) => CanonicalForm::Text(name.clone()),
        Node::Operator(symbol) => CanonicalForm::Text(symbol.clone()),
        Node::Lambda { .. } | Node::Application { .. } | Node::Paren(_) => CanonicalForm::Node(id),
    }
}
