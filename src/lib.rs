//! Podwatch: health polling for a container runtime and the containers it runs.
//!
//! This library probes the runtime daemon and a configured set of containers
//! through the runtime CLI, classifies each target as healthy, unhealthy or
//! indeterminate, and reports the latest state to a status sink that a desktop
//! shell renders as colored indicators.
use std::path::PathBuf;

use error::ResultOkLogExt;
use probe::CommandProber;
use scheduler::Scheduler;
use sink::ChannelSink;

pub mod config;
pub mod error;
pub mod fsutil;
pub mod health;
pub mod probe;
pub mod scheduler;
pub mod sink;
pub mod target;

pub use error::{Error, Result};

/// Configuration file used when `PODWATCH_CONFIG` is not set.
pub const DEFAULT_CONFIG_PATH: &str = "cfg/config.ini";

/// Capacity of the status feed channel.
const FEED_CAPACITY: usize = 32;

/// Runs the monitor until Ctrl-C.
///
/// Loads the configuration, resolves the targets, and polls them, writing one
/// JSON line per status update to stdout.
///
/// # Errors
///
/// Possible errors include:
/// - An unreadable or invalid configuration file.
/// - A missing `[Containers]` section or container entry.
/// - Failure to install the Ctrl-C handler.
///
/// Configuration errors are returned before any probe is started.
pub async fn run() -> Result<()> {
    let path = std::env::var_os("PODWATCH_CONFIG")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));
    let config = config::Config::load(&path)?;
    let settings = config.monitor();
    log::debug!("Monitor settings: {settings:?}");

    let prober = CommandProber::new(settings.runtime.clone(), settings.probe_timeout);
    let scheduler = Scheduler::from_config(&config, prober)?;
    let board = scheduler.board();

    let (sink, mut rx) = ChannelSink::new(FEED_CAPACITY);
    let (shutdown_tx, shutdown_rx) = tokio::sync::watch::channel(false);

    let poller = tokio::spawn(scheduler.run(sink, shutdown_rx));
    let feed = tokio::spawn(async move {
        while let Some(update) = rx.recv().await {
            if let Some(line) = sink::feed_line(&update).ok_log() {
                println!("{line}");
            }
        }
    });

    tokio::signal::ctrl_c().await.map_err(Error::Signal)?;
    log::info!("Shutting down");
    // The receiver only goes away if the poller already stopped.
    let _ = shutdown_tx.send(true);
    poller.await?;
    feed.await?;

    for (name, state) in board.snapshot() {
        log::info!("Final state of {name}: {state}");
    }

    Ok(())
}
