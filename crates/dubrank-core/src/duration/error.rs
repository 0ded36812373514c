use thiserror::Error;
use tracing::error;

/// The arithmetic engine reported one or more errors for an expression.
///
/// Any failure invalidates the whole recomputation it happened in.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("failed to evaluate '{expression}': {}", errors.join("; "))]
pub struct ArithmeticFailure {
    pub expression: String,
    pub errors: Vec<String>,
}

impl ArithmeticFailure {
    /// Build the failure, logging each engine message individually.
    pub fn new(expression: impl Into<String>, errors: Vec<String>) -> Self {
        let expression = expression.into();
        for message in &errors {
            error!(%expression, error = %message, "arithmetic engine error");
        }
        Self { expression, errors }
    }
}
