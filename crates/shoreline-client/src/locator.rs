//! Remote-first location lookup with a resident fallback.

use serde::Serialize;
use shoreline_navigation::application::resident_search::ResidentSearch;
use shoreline_navigation::domain::location::Location;
use tracing::{debug, warn};

use crate::remote::RemoteLocationClient;

/// Where a location came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Origin {
    /// Answered by the location service.
    Remote,
    /// Searched locally over the resident dataset.
    Resident,
}

/// A location and its origin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Located {
    /// The view for the requested seed.
    pub location: Location,
    /// Which side produced `location`.
    pub origin: Origin,
}

/// Resolves seeds against the service, falling back to resident data.
#[derive(Debug, Clone)]
pub struct CoastalLocator {
    remote: RemoteLocationClient,
    resident: ResidentSearch,
}

impl CoastalLocator {
    /// Creates a locator that asks `remote` first and searches `resident`
    /// when the service cannot answer.
    #[must_use]
    pub fn new(remote: RemoteLocationClient, resident: ResidentSearch) -> Self {
        Self { remote, resident }
    }

    /// Finds the location for `seed`.
    ///
    /// Never fails: any service error is logged and the search runs over the
    /// resident dataset instead. The resident dataset is usually coarser, so
    /// a resident answer may differ from the service's for the same seed.
    pub async fn locate(&self, seed: i64) -> Located {
        match self.remote.fetch(seed).await {
            Ok(location) => {
                debug!(seed, "location served remotely");
                Located {
                    location,
                    origin: Origin::Remote,
                }
            }
            Err(e) => {
                warn!(
                    seed,
                    base_url = self.remote.base_url(),
                    error = %e,
                    "location service unavailable; searching resident coastline"
                );
                Located {
                    location: self.resident.find_location(seed),
                    origin: Origin::Resident,
                }
            }
        }
    }
}
