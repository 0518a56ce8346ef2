//! Shared application state for request handlers.

use std::sync::Arc;

use crate::backend::{BackendClient, BackendError};
use crate::config::AppConfig;

/// Shared application state, cloneable across handlers via Arc-wrapped fields.
///
/// Contains the application configuration and the client for the remote
/// search backend.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub backend: BackendClient,
}

impl AppState {
    /// Creates a new application state from the given configuration and backend client.
    pub fn new(config: AppConfig, backend: BackendClient) -> Self {
        Self {
            config: Arc::new(config),
            backend,
        }
    }

    /// Builds the backend client from `config.backend` and wraps both into state.
    pub fn from_config(config: AppConfig) -> Result<Self, BackendError> {
        let backend = BackendClient::new(
            &config.backend.base_url,
            config.backend.timeout(),
            config.backend.fallback_index_name.clone(),
        )?;
        Ok(Self::new(config, backend))
    }
}
