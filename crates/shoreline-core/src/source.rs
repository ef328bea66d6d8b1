//! Coastline source abstraction.
//!
//! Reading and parsing coastline files is infrastructure; the search only
//! ever sees the parsed [`CoastlineDataset`].

use async_trait::async_trait;

use crate::coastline::CoastlineDataset;
use crate::error::DomainError;

/// Produces a fully parsed coastline dataset.
#[async_trait]
pub trait CoastlineSource: Send + Sync {
    /// Loads the dataset.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::DatasetUnavailable` if the data cannot be read
    /// or parsed.
    async fn load(&self) -> Result<CoastlineDataset, DomainError>;
}
