//! # An HTTP Service for Reversible Quote Identifiers
//!
//! `quotid-axum` wraps the [`quotid`] codec in a small axum service:
//! endpoints mint and decode nine-character quote numbers and
//! twelve-character composite identifiers, with panic recovery, request
//! tracing, and environment-aware log formatting around them.
//!
//! ## Running
//!
//! ```bash
//! quotid-axum --server-addr 0.0.0.0:3000 --environment dev
//! ```
//!
//! Both flags fall back to the `SERVER_ADDR` and `ENVIRONMENT` variables
//! (a `.env` file is honored), and `RUST_LOG` tunes verbosity.
//!
//! ## Endpoints
//!
//! - `POST /quotes` — mint a quote number
//! - `GET /quotes/{quote_number}` — recover the issue instant
//! - `POST /composites` — build a composite identifier from
//!   `{id, name, date_of_birth}`
//! - `GET /composites/{key}` — recover id, fingerprint, date of birth
//! - `GET /healthz` — liveness probe

mod config;
mod dates;
mod error;
mod handlers;
mod routes;
mod telemetry;

use clap::Parser;
use tokio::net::TcpListener;
use tokio::signal;

use crate::config::{CliArgs, ServerConfig};
use crate::handlers::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load from .env
    let _ = dotenvy::dotenv();
    let args = CliArgs::parse();
    let config = ServerConfig::try_from(args)?;

    telemetry::init_telemetry(config.is_dev());

    let app = routes::router(AppState::default());
    let listener = TcpListener::bind(&config.server_addr).await?;
    tracing::info!(
        addr = %config.server_addr,
        environment = %config.environment,
        "starting identifier service"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("service shut down");
    Ok(())
}

async fn shutdown_signal() {
    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    tokio::select! {
        () = ctrl_c => tracing::info!("received Ctrl+C"),
        () = terminate => tracing::info!("received SIGTERM"),
    }

    tracing::info!("shutdown signal received, terminating gracefully");
}
