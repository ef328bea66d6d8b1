//! Mock `CoastlineSource` implementations for tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use shoreline_core::coastline::CoastlineDataset;
use shoreline_core::error::DomainError;
use shoreline_core::source::CoastlineSource;

/// A source that returns a clone of a fixed dataset on every load.
#[derive(Debug)]
pub struct StaticCoastlineSource {
    dataset: CoastlineDataset,
}

impl StaticCoastlineSource {
    /// Create a source that always yields `dataset`.
    #[must_use]
    pub fn new(dataset: CoastlineDataset) -> Self {
        Self { dataset }
    }
}

#[async_trait]
impl CoastlineSource for StaticCoastlineSource {
    async fn load(&self) -> Result<CoastlineDataset, DomainError> {
        Ok(self.dataset.clone())
    }
}

/// A source that counts loads and yields briefly before returning, so that
/// concurrent first callers overlap.
#[derive(Debug)]
pub struct CountingCoastlineSource {
    dataset: CoastlineDataset,
    loads: AtomicUsize,
}

impl CountingCoastlineSource {
    /// Create a counting source that yields `dataset`.
    #[must_use]
    pub fn new(dataset: CoastlineDataset) -> Self {
        Self {
            dataset,
            loads: AtomicUsize::new(0),
        }
    }

    /// Number of times `load` has been called.
    #[must_use]
    pub fn load_count(&self) -> usize {
        self.loads.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CoastlineSource for CountingCoastlineSource {
    async fn load(&self) -> Result<CoastlineDataset, DomainError> {
        self.loads.fetch_add(1, Ordering::SeqCst);
        tokio::time::sleep(Duration::from_millis(20)).await;
        Ok(self.dataset.clone())
    }
}

/// A source that always fails. Useful for testing startup and
/// error-handling paths.
#[derive(Debug)]
pub struct FailingCoastlineSource;

#[async_trait]
impl CoastlineSource for FailingCoastlineSource {
    async fn load(&self) -> Result<CoastlineDataset, DomainError> {
        Err(DomainError::DatasetUnavailable(
            "coast50.geojson: no such file".into(),
        ))
    }
}

/// A source whose first `failures` loads fail, after which it yields its
/// dataset.
#[derive(Debug)]
pub struct FlakyCoastlineSource {
    dataset: CoastlineDataset,
    failures: usize,
    loads: AtomicUsize,
}

impl FlakyCoastlineSource {
    /// Create a source that fails `failures` times before yielding `dataset`.
    #[must_use]
    pub fn new(dataset: CoastlineDataset, failures: usize) -> Self {
        Self {
            dataset,
            failures,
            loads: AtomicUsize::new(0),
        }
    }

    /// Number of times `load` has been called.
    #[must_use]
    pub fn load_count(&self) -> usize {
        self.loads.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CoastlineSource for FlakyCoastlineSource {
    async fn load(&self) -> Result<CoastlineDataset, DomainError> {
        let attempt = self.loads.fetch_add(1, Ordering::SeqCst);
        if attempt < self.failures {
            return Err(DomainError::DatasetUnavailable(format!(
                "coast50.geojson: transient read failure {}",
                attempt + 1
            )));
        }
        Ok(self.dataset.clone())
    }
}
