use std::path::PathBuf;

use clap::Parser;
use greeter_core::config::{DEFAULT_PORT, DEFAULT_SERVER_HOST};
use greeter_core::logging::{init_tracing, Console, LogSettings, LoggingError};
use tokio::net::TcpListener;
use tracing::{debug, info};

/// Run the Witty Greeter API server.
#[derive(Debug, Parser)]
#[command(name = "greeter-server", version)]
struct Args {
    /// Host IP to bind the server to
    #[arg(long, default_value = DEFAULT_SERVER_HOST)]
    host: String,

    /// Port to run the server on
    #[arg(long, default_value_t = DEFAULT_PORT)]
    port: u16,

    /// Enable debug logging
    #[arg(long)]
    debug: bool,

    /// Also write logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    match init_tracing(&LogSettings::new(args.debug, args.log_file.clone(), Console::Stdout)) {
        // Already reported through the console layer.
        Ok(()) | Err(LoggingError::OpenLogFile { .. }) => {}
        Err(e) => return Err(e.into()),
    }
    debug!(?args, "parsed arguments");

    let addr = format!("{}:{}", args.host, args.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Starting server on {addr}");
    greeter_server::run_until(listener, shutdown_signal()).await?;
    Ok(())
}

/// Wait for Ctrl-C, or SIGTERM on Unix.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("failed to listen for Ctrl-C: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("failed to listen for SIGTERM: {e}");
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

    info!("Shutdown signal received, starting graceful shutdown");
}
