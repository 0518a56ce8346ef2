//! Therapist search frontend server.
//!
//! Serves the static search page and proxies the search backend's health
//! statistics under `/api/stats`.

pub mod backend;
pub mod config;
pub mod error;
pub mod http;
pub mod middleware;
pub mod routes;
pub mod state;

pub use backend::{BackendClient, BackendError, BackendStats};
pub use config::{AppConfig, ConfigError};
pub use error::AppError;
pub use routes::create_router;
pub use state::AppState;
