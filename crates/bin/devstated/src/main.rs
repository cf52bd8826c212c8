//! # devstated — device state daemon
//!
//! Composition root that wires the device state service together and starts
//! the server.
//!
//! ## Responsibilities
//! - Parse configuration (env vars, optional config file)
//! - Install the `tracing` subscriber
//! - Construct the in-memory state store seeded with the configured defaults
//! - Construct the application service, injecting the store via its port trait
//! - Build the axum router, injecting the service
//! - Bind to a TCP port and serve
//! - Handle graceful shutdown (SIGTERM/SIGINT)
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use tracing_subscriber::EnvFilter;

use devstate_adapter_http_axum::state::AppState;
use devstate_app::memory_store::InMemoryDeviceStateStore;
use devstate_app::services::device_state_service::DeviceStateService;
use devstate_domain::device_state::DeviceState;
use devstate_domain::time::now;

use crate::config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&config.logging.filter)?)
        .init();

    // State
    let initial = DeviceState::with_defaults(config.device.defaults.clone(), now());
    tracing::info!(
        commands = initial.values().len(),
        "device state initialised in memory"
    );
    let store = InMemoryDeviceStateStore::new(initial);

    // HTTP
    let state = AppState::new(DeviceStateService::new(store));
    let app = devstate_adapter_http_axum::router::build(state);

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(
        "devstated listening on http://{bind_addr} (GET /, GET /api/state, POST /api/control, GET /api/device)"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("devstated stopped");
    Ok(())
}

/// Resolve once SIGINT (Ctrl-C) or, on unix, SIGTERM arrives.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("shutdown signal received, draining connections");
}
