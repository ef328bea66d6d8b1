//! Server configuration read from the environment.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;

use shoreline_core::coastline::ResolutionTier;
use shoreline_navigation::domain::config::SearchConfig;

use crate::error::AppError;

/// Everything the server needs to start.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Interface to bind.
    pub host: String,
    /// Port to bind.
    pub port: u16,
    /// GeoJSON coastline file.
    pub coastline_path: PathBuf,
    /// Resolution tier of the coastline file.
    pub resolution: ResolutionTier,
    /// Search tunables.
    pub search: SearchConfig,
}

impl ServerConfig {
    /// Reads configuration from process environment variables.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if any variable is present but invalid.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads configuration through `lookup`, which returns the value of a
    /// variable if it is set.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if any variable is present but invalid.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let port = parse_or(&lookup, "PORT", 3000)?;
        let coastline_path = lookup("COASTLINE_PATH")
            .map_or_else(|| PathBuf::from("public/coast50.geojson"), PathBuf::from);
        let resolution = match lookup("COASTLINE_RESOLUTION") {
            Some(raw) => raw
                .parse()
                .map_err(|e| AppError::Config(format!("COASTLINE_RESOLUTION: {e}")))?,
            None => ResolutionTier::Medium,
        };

        let defaults = SearchConfig::default();
        let search = SearchConfig {
            max_attempts: parse_or(&lookup, "SEARCH_MAX_ATTEMPTS", defaults.max_attempts)?,
            min_intersections: parse_or(
                &lookup,
                "SEARCH_MIN_INTERSECTIONS",
                defaults.min_intersections,
            )?,
            zoom_min: parse_or(&lookup, "SEARCH_ZOOM_MIN", defaults.zoom_min)?,
            zoom_max: parse_or(&lookup, "SEARCH_ZOOM_MAX", defaults.zoom_max)?,
            ..defaults
        };
        search
            .validate()
            .map_err(|e| AppError::Config(e.to_string()))?;

        Ok(Self {
            host,
            port,
            coastline_path,
            resolution,
            search,
        })
    }

    /// The socket address to listen on.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if `HOST:PORT` is not a valid address.
    pub fn socket_addr(&self) -> Result<SocketAddr, AppError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| AppError::Config(format!("invalid HOST:PORT combination: {e}")))
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T, AppError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|e| AppError::Config(format!("{key} is invalid: {e}"))),
        None => Ok(default),
    }
}
