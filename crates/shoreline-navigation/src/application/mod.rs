//! Application layer for the coastal search context.

pub mod location_service;
pub mod resident_search;
