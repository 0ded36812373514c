use thiserror::Error;

use crate::catalog::CatalogError;
use crate::config::ConfigError;
use crate::duration::ArithmeticFailure;

/// Top-level error type for the dubrank-core library.
#[derive(Debug, Error)]
pub enum DubrankError {
    /// Static catalog content is structurally broken.
    #[error("catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Configuration parse or validation error.
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    /// The arithmetic engine rejected an expression during recomputation.
    #[error("arithmetic error: {0}")]
    Arithmetic(#[from] ArithmeticFailure),
}

/// Convenience alias used throughout the library.
pub type Result<T> = std::result::Result<T, DubrankError>;
