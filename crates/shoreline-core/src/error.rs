//! Domain error types.

use thiserror::Error;

/// Top-level domain error type.
///
/// A search itself never fails: it always ends in an accepted candidate or
/// the configured fallback. Only dataset loading and input validation
/// produce errors.
#[derive(Debug, Error)]
pub enum DomainError {
    /// The coastline dataset could not be loaded or parsed.
    #[error("coastline dataset unavailable: {0}")]
    DatasetUnavailable(String),

    /// A validation error in caller input or configuration.
    #[error("validation error: {0}")]
    Validation(String),
}
