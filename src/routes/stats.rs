//! Backend statistics proxy.

use axum::{extract::State, Json};
use tracing::instrument;

use crate::backend::BackendStats;
use crate::error::AppError;
use crate::state::AppState;

/// Fetch the backend's health payload and return the reshaped stats.
///
/// Any failure of the outbound call becomes a 503 with the error text in
/// `detail`.
#[instrument(name = "stats::backend_stats", skip(state), fields(backend = %state.backend.health_url()))]
pub async fn backend_stats(State(state): State<AppState>) -> Result<Json<BackendStats>, AppError> {
    let stats = state.backend.fetch_stats().await?;

    tracing::debug!(
        total_profiles = %stats.total_profiles,
        backend_healthy = stats.backend_healthy,
        index_name = %stats.index_name,
        "Fetched backend stats"
    );

    Ok(Json(stats))
}
