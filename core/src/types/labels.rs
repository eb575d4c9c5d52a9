use core::ops::Index;

use crate::semantic::NodeId;

/// Number of distinct placeholders available to one labelling pass.
pub const PLACEHOLDER_LETTERS: usize = 26;

/// Whether `label` is a single lowercase ASCII letter.
///
/// This is the test inference uses to decide that an argument is still
/// unresolved. Any one-letter lowercase label passes, including a declared
/// type such as `a`.
pub fn is_placeholder(label: &str) -> bool {
    let mut chars = label.chars();
    matches!((chars.next(), chars.next()), (Some(c), None) if c.is_ascii_lowercase())
}

/// Issues `a`, `b`, `c`, … and never the same letter twice.
#[derive(Debug, Default, Clone)]
pub struct PlaceholderSupply {
    issued: usize,
}

impl PlaceholderSupply {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the next unused letter, or `None` once all 26 are taken.
    pub fn next_placeholder(&mut self) -> Option<String> {
        if self.issued >= PLACEHOLDER_LETTERS {
            return None;
        }
        let letter = char::from(b'a' + self.issued as u8);
        self.issued += 1;
        Some(letter.to_string())
    }

    pub fn issued(&self) -> usize {
        self.issued
    }
}

/// Type label of every node of one tree, indexed by [`NodeId`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeLabels(Vec<String>);

impl TypeLabels {
    pub(crate) fn with_len(len: usize) -> Self {
        Self(vec![String::new(); len])
    }

    pub fn get(&self, id: NodeId) -> &str {
        &self.0[id.index()]
    }

    pub(crate) fn set(&mut self, id: NodeId, label: String) {
        self.0[id.index()] = label;
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl Index<NodeId> for TypeLabels {
    type Output = str;

    fn index(&self, id: NodeId) -> &str {
        self.get(id)
    }
}
