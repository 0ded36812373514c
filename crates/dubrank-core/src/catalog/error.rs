use std::sync::Arc;

use thiserror::Error;

use crate::lang::LanguageCode;

/// Structural defect in catalog text. Catalogs are static assets, so any of
/// these is fatal at load time.
#[derive(Debug, Clone, Error)]
pub enum CatalogError {
    #[error("malformed catalog in '{category}' at line {line}: {reason}")]
    MalformedCatalog {
        category: String,
        line: usize,
        reason: String,
    },

    #[error("malformed delta '{value}' for {language} in entry '{entry}': {reason}")]
    MalformedDelta {
        entry: String,
        language: LanguageCode,
        value: String,
        reason: String,
    },

    #[error("failed to read catalog file '{path}': {source}")]
    Read {
        path: String,
        source: Arc<std::io::Error>,
    },
}
