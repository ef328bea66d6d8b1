//! Shoreline navigation: coastal viewport search.
//!
//! Turns an integer seed into a map viewport whose frame is crossed by the
//! coastline, using only the seeded sequence so that the same seed always
//! lands on the same place.

pub mod application;
pub mod domain;
