//! Shared application state.

use std::sync::Arc;

use shoreline_navigation::application::location_service::LocationService;

/// Application state shared across all request handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Location search over the authoritative coastline dataset.
    pub location_service: Arc<LocationService>,
}

impl AppState {
    /// Create new application state.
    #[must_use]
    pub fn new(location_service: Arc<LocationService>) -> Self {
        Self { location_service }
    }
}
