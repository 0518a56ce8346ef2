//! Therapist search frontend.
//!
//! This is the application entry point. It initializes tracing, loads
//! configuration, builds the backend client, sets up the Axum router and
//! starts the HTTP server.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use therapist_frontend::config::{AppConfig, DEFAULT_CONFIG_PATH, DEFAULT_LOG_FILTER};
use therapist_frontend::http::start_server;
use therapist_frontend::{create_router, AppState};

/// Therapist Search Frontend: serves the search page and backend stats
#[derive(Parser, Debug)]
#[command(name = "therapist-frontend", version, about)]
struct Args {
    /// Path to configuration file (optional; defaults apply when absent)
    #[arg(short, long)]
    config: Option<String>,

    /// Log level filter (e.g., "therapist_frontend=debug,tower_http=info")
    #[arg(short, long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // An explicitly named config file must exist; the default one may not
    let (config_path, required) = match &args.config {
        Some(path) => (path.as_str(), true),
        None => (DEFAULT_CONFIG_PATH, false),
    };
    let config = AppConfig::load(config_path, required)?;

    // Initialize tracing with priority: CLI > env > default
    let log_filter = args
        .log_level
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

    let registry =
        tracing_subscriber::registry().with(tracing_subscriber::EnvFilter::new(&log_filter));
    if config.logging.is_json() {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }

    tracing::info!(
        config = %config_path,
        backend = %config.backend.base_url,
        timeout_secs = config.backend.timeout_seconds,
        assets = %config.assets.dir,
        "Loaded configuration"
    );

    let state = AppState::from_config(config.clone())?;
    let app = create_router(state);

    start_server(app, &config).await?;

    Ok(())
}
