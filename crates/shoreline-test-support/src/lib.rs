//! Shared test mocks and utilities for the Shoreline coastal location finder.

mod dataset;
mod rng;
mod source;

pub use dataset::graticule_dataset;
pub use rng::SequenceRng;
pub use source::{
    CountingCoastlineSource, FailingCoastlineSource, FlakyCoastlineSource, StaticCoastlineSource,
};
