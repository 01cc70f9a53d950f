use std::time::Duration;

/// Errors that may occur while handing a status update to a sink.
///
/// They are never fatal: the scheduler logs them and keeps polling.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("status sink is closed")]
    Closed,
    #[error("status sink did not accept the update within {}ms", .0.as_millis())]
    TimedOut(Duration),
    #[error("failed to encode status update: {0}")]
    Encode(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
