use core::hash::Hash;

use indexmap::{Equivalent, IndexMap};

use crate::semantic::NodeId;

/// Key of the annotation table and the placeholder memo.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CanonicalForm {
    /// Literal value, variable name or operator symbol.
    Text(String),
    /// A compound expression, identified by its node.
    Node(NodeId),
}

impl CanonicalForm {
    pub fn text(text: impl Into<String>) -> Self {
        CanonicalForm::Text(text.into())
    }
}

impl core::fmt::Display for CanonicalForm {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            CanonicalForm::Text(text) => write!(f, "{}", text),
            CanonicalForm::Node(id) => write!(f, "{}", id),
        }
    }
}

/// Map from a key to a type label that remembers insertion order.
///
/// Inserting an existing key replaces its value without moving it.
#[derive(Debug, Clone)]
pub struct Table<K>(IndexMap<K, String>);

/// Declared types, keyed by the annotated expression.
pub type AnnotationTable = Table<CanonicalForm>;

/// Placeholder already handed to each canonical form.
pub type PlaceholderMemo = Table<CanonicalForm>;

/// Type each pre-resolution label was resolved to.
pub type ResolutionTable = Table<String>;

impl<K: Eq + Hash> Table<K> {
    pub fn new() -> Self {
        Self(IndexMap::new())
    }

    /// Inserts or overwrites, returning the previous value.
    pub fn insert(&mut self, key: K, value: String) -> Option<String> {
        self.0.insert(key, value)
    }

    pub fn get<Q>(&self, key: &Q) -> Option<&str>
    where
        Q: Hash + Equivalent<K> + ?Sized,
    {
        self.0.get(key).map(String::as_str)
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        Q: Hash + Equivalent<K> + ?Sized,
    {
        self.0.contains_key(key)
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (&K, &str)> {
        self.0.iter().map(|(k, v)| (k, v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn retain(&mut self, mut keep: impl FnMut(&K, &str) -> bool) {
        self.0.retain(|k, v| keep(k, v));
    }
}

impl Table<CanonicalForm> {
    /// Drops entries keyed by node id, which only mean something for the
    /// tree they were recorded against.
    pub fn retain_textual(&mut self) {
        self.retain(|key, _| matches!(key, CanonicalForm::Text(_)));
    }
}

impl<K: Eq + Hash> Default for Table<K> {
    fn default() -> Self {
        Self::new()
    }
}

// Equal tables hold the same entries in the same order.
impl<K: Eq + Hash> PartialEq for Table<K> {
    fn eq(&self, other: &Self) -> bool {
        self.0.iter().eq(other.0.iter())
    }
}

impl<K: Eq + Hash> Eq for Table<K> {}

impl<K: Eq + Hash> FromIterator<(K, String)> for Table<K> {
    fn from_iter<I: IntoIterator<Item = (K, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
