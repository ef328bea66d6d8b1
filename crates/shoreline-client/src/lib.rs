//! Shoreline client. Asks the location service for a seed's view and
//! falls back to searching resident coastline data when it cannot.

pub mod error;
pub mod locator;
pub mod remote;
pub mod seed;
