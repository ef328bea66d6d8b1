//! Domain layer for the coastal search context.

pub mod candidate;
pub mod config;
pub mod intersection;
pub mod location;
pub mod prefilter;
pub mod search;
