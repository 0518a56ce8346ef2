//! HTTP server module.
//!
//! The server includes:
//! - Static asset services for the frontend page
//! - The CORS policy applied to every route
//! - Graceful shutdown on SIGTERM/SIGINT

pub mod cors;
mod server;
mod shutdown;
pub mod static_files;

pub use server::{listen_addr, start_server, ServerError};
