//! File-backed GeoJSON implementation of the `CoastlineSource` trait.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use shoreline_core::coastline::{CoastlineDataset, ResolutionTier};
use shoreline_core::error::DomainError;
use shoreline_core::source::CoastlineSource;
use tracing::instrument;

use crate::geojson::parse_feature_collection;

/// Loads a coastline dataset from a GeoJSON file on disk.
#[derive(Debug, Clone)]
pub struct GeoJsonCoastlineSource {
    path: PathBuf,
    tier: ResolutionTier,
}

impl GeoJsonCoastlineSource {
    /// Creates a source for the file at `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, tier: ResolutionTier) -> Self {
        Self {
            path: path.into(),
            tier,
        }
    }

    /// The file this source reads.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl CoastlineSource for GeoJsonCoastlineSource {
    #[instrument(skip(self), fields(path = %self.path.display(), tier = %self.tier))]
    async fn load(&self) -> Result<CoastlineDataset, DomainError> {
        let payload = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            DomainError::DatasetUnavailable(format!("read {}: {e}", self.path.display()))
        })?;
        parse_feature_collection(&payload, self.tier)
    }
}
