//! Authoritative location service.
//!
//! Owns the process-wide coastline dataset. The dataset is loaded at most
//! once, on first use or on [`LocationService::warm`], and concurrent first
//! callers wait on the same load instead of parsing the file again.

use std::sync::Arc;

use serde::Serialize;
use shoreline_core::coastline::{CoastlineDataset, ResolutionTier};
use shoreline_core::error::DomainError;
use shoreline_core::source::CoastlineSource;
use tokio::sync::OnceCell;
use tracing::{error, info, instrument};

use crate::domain::config::SearchConfig;
use crate::domain::location::Location;
use crate::domain::search::{SearchOutcome, search_seed};

/// Size and tier of the loaded dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DatasetSummary {
    /// Resolution tier.
    pub tier: ResolutionTier,
    /// Number of coastline features.
    pub features: usize,
}

impl DatasetSummary {
    fn of(dataset: &CoastlineDataset) -> Self {
        Self {
            tier: dataset.tier(),
            features: dataset.len(),
        }
    }
}

/// Finds coastal locations over the authoritative dataset.
pub struct LocationService {
    source: Arc<dyn CoastlineSource>,
    config: SearchConfig,
    dataset: OnceCell<CoastlineDataset>,
}

impl std::fmt::Debug for LocationService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocationService")
            .field("config", &self.config)
            .field("dataset", &self.dataset_summary())
            .finish_non_exhaustive()
    }
}

impl LocationService {
    /// Creates a service. Nothing is loaded until the first request or
    /// [`LocationService::warm`].
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if `config` is inconsistent.
    pub fn new(source: Arc<dyn CoastlineSource>, config: SearchConfig) -> Result<Self, DomainError> {
        config.validate()?;
        Ok(Self {
            source,
            config,
            dataset: OnceCell::new(),
        })
    }

    /// The active search configuration.
    #[must_use]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Summary of the dataset, or `None` if it has not been loaded yet.
    #[must_use]
    pub fn dataset_summary(&self) -> Option<DatasetSummary> {
        self.dataset.get().map(DatasetSummary::of)
    }

    /// Loads the dataset now if it is not loaded yet.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::DatasetUnavailable` if the source fails.
    pub async fn warm(&self) -> Result<DatasetSummary, DomainError> {
        self.dataset().await.map(DatasetSummary::of)
    }

    /// Finds the location for `seed`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::DatasetUnavailable` if the dataset cannot be
    /// loaded. The search itself cannot fail.
    pub async fn find_location(&self, seed: i64) -> Result<Location, DomainError> {
        Ok(self.search(seed).await?.location)
    }

    /// Like [`LocationService::find_location`], but also reports how the
    /// search ended.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::DatasetUnavailable` if the dataset cannot be
    /// loaded.
    #[instrument(skip(self))]
    pub async fn search(&self, seed: i64) -> Result<SearchOutcome, DomainError> {
        let dataset = self.dataset().await?;
        Ok(search_seed(dataset, &self.config, seed))
    }

    async fn dataset(&self) -> Result<&CoastlineDataset, DomainError> {
        self.dataset
            .get_or_try_init(|| async {
                match self.source.load().await {
                    Ok(dataset) => {
                        info!(
                            tier = %dataset.tier(),
                            features = dataset.len(),
                            "loaded coastline dataset"
                        );
                        Ok(dataset)
                    }
                    Err(e) => {
                        error!(error = %e, "failed to load coastline dataset");
                        Err(match e {
                            DomainError::DatasetUnavailable(_) => e,
                            other => DomainError::DatasetUnavailable(other.to_string()),
                        })
                    }
                }
            })
            .await
    }
}
