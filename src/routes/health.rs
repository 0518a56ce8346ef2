//! Health check endpoint for container orchestration.
//!
//! Liveness only: it never consults the backend, so it answers 200 for as long
//! as the process can serve HTTP.

use axum::Json;
use serde::Serialize;

use crate::config::{SERVICE_NAME, SERVICE_VERSION};

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub message: String,
    pub version: &'static str,
}

/// Health check handler.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        message: format!("{} is running", SERVICE_NAME),
        version: SERVICE_VERSION,
    })
}
