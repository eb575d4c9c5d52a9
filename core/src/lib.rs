//! Placeholder labelling and structural type inference for a small
//! lambda-calculus expression language.
//!
//! The pipeline is: [`parser`] produces a concrete syntax tree, the
//! [`semantic`] builder turns it into an arena tree, [`analyzer::assign`]
//! gives every node a type label and [`analyzer::infer`] rewrites those labels
//! into arrow types. [`api::Session`] wires the stages together.

pub mod analyzer;
pub mod api;
pub mod parser;
pub mod semantic;
pub mod types;

/// Test utilities for enabling logging in tests
#[cfg(test)]
pub mod test_utils {
    /// Initialize tracing subscriber for tests with DEBUG level
    /// Call this at the start of tests where you want to see logging output
    ///
    /// # Example
    /// ```ignore
    /// #[test]
    /// fn test_type_inference() {
    ///     test_utils::init_test_logging();
    ///     // ... your test code
    /// }
    /// ```
    pub fn init_test_logging() {
        use tracing_subscriber::{EnvFilter, fmt};

        // Try to initialize, ignore error if already initialized
        let _ = fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
            )
            .with_test_writer()
            .try_init();
    }
}
