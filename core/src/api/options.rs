//! Configuration options for a checking session.

use crate::parser::DEFAULT_MAX_DEPTH;

/// Configuration options for a [`Session`](super::Session).
///
/// # Example
///
/// ```
/// use hmlabel_core::api::SessionOptions;
///
/// let options = SessionOptions {
///     retain_annotations: false,
///     max_depth: 32,
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionOptions {
    /// Keep declared types (`x :: N`) from earlier submissions.
    ///
    /// Only declarations on literals, variables and operators carry over;
    /// declarations on compound expressions belong to their own tree.
    ///
    /// Default: true
    pub retain_annotations: bool,

    /// Maximum nesting depth of a submitted expression.
    ///
    /// Deeper input is rejected by the parser instead of being walked.
    ///
    /// Default: 64
    pub max_depth: usize,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            retain_annotations: true,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}
