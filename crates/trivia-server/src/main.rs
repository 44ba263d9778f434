//! trivia-server - REST API server binary.

use std::net::SocketAddr;

use tokio::signal;
use tracing::{info, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use trivia_core::TriviaConfig;
use trivia_server::{create_catalog, create_server, AppState};

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

/// Config file from `TRIVIA_CONFIG` if set, with `TRIVIA_*` overrides on top.
fn load_config() -> Result<TriviaConfig, Box<dyn std::error::Error>> {
    let config = match std::env::var("TRIVIA_CONFIG") {
        Ok(path) => TriviaConfig::from_file(path)?.merge_env(),
        Err(_) => TriviaConfig::from_env(),
    };
    Ok(config)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(
            EnvFilter::from_default_env()
                .add_directive(Level::INFO.into())
                .add_directive("trivia_server=debug".parse()?),
        )
        .init();

    let host = std::env::var("TRIVIA_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port: u16 = std::env::var("TRIVIA_PORT")
        .unwrap_or_else(|_| "5000".to_string())
        .parse()?;

    let config = load_config()?;
    let catalog = create_catalog(&config)?;
    info!(page_size = catalog.page_size(), "Catalog ready");

    let app = create_server(AppState::new(catalog));

    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
    info!("Starting trivia-server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    // Serve with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            shutdown_signal().await;
            info!("Shutdown signal received");
        })
        .await?;

    info!("Server stopped cleanly");
    Ok(())
}
