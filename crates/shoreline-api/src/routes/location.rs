//! Routes for the coastal location search.

use axum::extract::{Path, State};
use axum::{Json, Router, routing::get};
use shoreline_core::error::DomainError;
use shoreline_navigation::domain::location::Location;
use shoreline_navigation::domain::search::Termination;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::error::ApiError;
use crate::state::AppState;

/// Parses a seed path segment as a base-10 integer.
///
/// # Errors
///
/// Returns `DomainError::Validation` for anything that is not an integer.
pub fn parse_seed(raw: &str) -> Result<i64, DomainError> {
    raw.trim()
        .parse()
        .map_err(|_| DomainError::Validation(format!("invalid seed parameter: {raw:?}")))
}

/// GET /{seed}
#[instrument(skip(state), fields(correlation_id = %Uuid::new_v4()))]
async fn get_location(
    State(state): State<AppState>,
    Path(seed): Path<String>,
) -> Result<Json<Location>, ApiError> {
    let seed = parse_seed(&seed)?;

    let outcome = state.location_service.search(seed).await?;

    info!(
        seed,
        attempts = outcome.attempts,
        fallback = matches!(outcome.termination, Termination::Fallback),
        "handled coastal location request"
    );

    Ok(Json(outcome.location))
}

/// Returns the router for the coastal location search.
pub fn router() -> Router<AppState> {
    Router::new().route("/{seed}", get(get_location))
}
