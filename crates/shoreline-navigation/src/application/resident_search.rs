//! Search over an already-resident dataset.
//!
//! Used when the authoritative service cannot be reached. The algorithm and
//! the seeded sequence are the same as the service's; only the data differs,
//! typically a lower-resolution tier, so a seed may land somewhere else.

use std::sync::Arc;

use shoreline_core::coastline::CoastlineDataset;
use shoreline_core::error::DomainError;

use crate::domain::config::SearchConfig;
use crate::domain::location::Location;
use crate::domain::search::{SearchOutcome, search_seed};

/// Searches a dataset the caller has already loaded.
#[derive(Debug, Clone)]
pub struct ResidentSearch {
    dataset: Arc<CoastlineDataset>,
    config: SearchConfig,
}

impl ResidentSearch {
    /// Wraps a loaded dataset.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if `config` is inconsistent.
    pub fn new(dataset: Arc<CoastlineDataset>, config: SearchConfig) -> Result<Self, DomainError> {
        config.validate()?;
        Ok(Self { dataset, config })
    }

    /// The resident dataset.
    #[must_use]
    pub fn dataset(&self) -> &CoastlineDataset {
        &self.dataset
    }

    /// Finds the location for `seed` in the resident data.
    #[must_use]
    pub fn find_location(&self, seed: i64) -> Location {
        self.search(seed).location
    }

    /// Runs the search and reports how it ended.
    #[must_use]
    pub fn search(&self, seed: i64) -> SearchOutcome {
        search_seed(&self.dataset, &self.config, seed)
    }
}
