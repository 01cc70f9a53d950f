/// Entry point for the podwatch health monitor.
///
/// Reads the configuration (path from `PODWATCH_CONFIG`, default
/// `cfg/config.ini`), then polls the container runtime and the configured
/// containers, printing one JSON status line per change to stdout until
/// interrupted.
///
/// # Errors
///
/// Returns an error if the configuration is missing or invalid; nothing is
/// polled in that case.
///
/// # Examples
///
/// ```bash
/// RUST_LOG=info PODWATCH_CONFIG=cfg/config.ini cargo run
/// ```
#[tokio::main]
async fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    podwatch::run().await?;
    Ok(())
}
