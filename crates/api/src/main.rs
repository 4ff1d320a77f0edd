//! API server entry point.

use api::config::Config;
use tokio::signal;

/// Resolves with the name of the first shutdown signal received.
async fn shutdown_signal() -> &'static str {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install SIGINT handler");
        "SIGINT"
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
        "SIGTERM"
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<&'static str>();

    tokio::select! {
        name = ctrl_c => name,
        name = terminate => name,
    }
}

#[tokio::main]
async fn main() {
    // 1. Load configuration and initialize tracing
    let config = Config::from_env();
    api::init_tracing(&config);

    // 2. Install Prometheus metrics recorder
    let metrics_handle =
        api::install_metrics_recorder().expect("failed to install Prometheus recorder");

    // 3. Wire the ticket service to its seat reservation and payment services
    let state = api::create_default_state();
    let app = api::create_app(state, metrics_handle);

    // 4. Serve until SIGINT or SIGTERM
    let addr = config.addr();
    tracing::info!(%addr, log_format = ?config.log_format, "starting ticket API server");

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind address");
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let signal = shutdown_signal().await;
            tracing::info!(signal, "starting graceful shutdown");
        })
        .await
        .expect("server error");

    tracing::info!("server shut down gracefully");
}
