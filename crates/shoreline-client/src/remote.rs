//! HTTP access to the location service.

use shoreline_navigation::domain::location::Location;

use crate::error::ClientError;

/// Fetches locations from a running Shoreline API.
#[derive(Debug, Clone)]
pub struct RemoteLocationClient {
    base_url: String,
    client: reqwest::Client,
}

impl RemoteLocationClient {
    /// Creates a client for the service at `base_url`, e.g.
    /// `http://localhost:3000`.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(base_url, reqwest::Client::new())
    }

    /// Creates a client that reuses an existing `reqwest::Client`.
    #[must_use]
    pub fn with_client(base_url: impl Into<String>, client: reqwest::Client) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url, client }
    }

    /// The service base URL, without a trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn location_url(&self, seed: i64) -> String {
        format!("{}/api/coastal-location/{seed}", self.base_url)
    }

    /// Asks the service for the location of `seed`.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Http` if the service is unreachable or the body
    /// is not a location, and `ClientError::Status` for a non-2xx answer.
    pub async fn fetch(&self, seed: i64) -> Result<Location, ClientError> {
        let resp = self.client.get(self.location_url(seed)).send().await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(ClientError::Status { status, body });
        }

        Ok(resp.json::<Location>().await?)
    }
}
