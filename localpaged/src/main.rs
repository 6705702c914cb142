//! localpage
//!
//! Serves the current directory over local HTTP and opens `Me.html` in the
//! default browser. No flags: run it next to the page and the site appears.
//! Ctrl+C stops the server.

use anyhow::Result;
use localpage_core::{ensure_target_exists, Config};
use localpaged::{browser, server, shutdown};
use std::time::Duration;
use tracing::{error, info};

/// Grace period between spawning the server task and opening the browser.
///
/// Best-effort readiness heuristic, not a synchronization guarantee; the
/// listener is normally accepting connections well within this window.
const STARTUP_GRACE: Duration = Duration::from_millis(500);

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let config = Config::default();

    // Precondition: the target page must exist before any socket is opened.
    if let Err(e) = ensure_target_exists(&config) {
        error!("{}", e);
        error!("Please make sure:");
        error!("  1. {} exists", config.target_file);
        error!(
            "  2. the program runs from the same directory as {}",
            config.target_file
        );
        std::process::exit(1);
    }

    // The server runs as a background task; main keeps the handle so a bind
    // failure stays observable instead of dying silently with the task.
    let mut server_task = tokio::spawn(server::run(config.clone()));

    tokio::time::sleep(STARTUP_GRACE).await;

    info!("Opening {}...", config.target_file);
    browser::launch(&config.target_url());

    tokio::select! {
        _ = shutdown::shutdown_signal() => {
            server_task.abort();
            info!("Server stopped");
        }
        res = &mut server_task => {
            match res {
                Ok(Err(e)) => {
                    error!("Server error: {:#}", e);
                    std::process::exit(1);
                }
                Ok(Ok(())) => info!("Server exited"),
                Err(e) => {
                    error!("Server task failed: {}", e);
                    std::process::exit(1);
                }
            }
        }
    }

    Ok(())
}

/// Initialize tracing subscriber for logging
fn init_tracing() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
