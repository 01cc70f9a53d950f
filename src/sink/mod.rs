//! Status sinks.
//!
//! A sink receives `(target, state)` updates from the scheduler and is
//! responsible for showing them. It may live on another thread than the
//! scheduler; [`ChannelSink`] is the hand-off used for that.
use std::future::Future;
use std::time::Duration;

use crate::health::HealthState;

mod channel;
mod error;
mod feed;

pub use channel::ChannelSink;
pub use error::{Error, Result};
pub use feed::feed_line;

/// One target's current state, as pushed to a sink.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct StatusUpdate {
    pub target: String,
    pub state: HealthState,
}

impl StatusUpdate {
    pub fn new(target: impl Into<String>, state: HealthState) -> Self {
        Self {
            target: target.into(),
            state,
        }
    }
}

/// Consumer of status updates.
pub trait StatusSink: Send + Sync + 'static {
    fn on_status(&self, update: StatusUpdate) -> impl Future<Output = Result<()>> + Send;
}

/// Hands `update` to `sink`, giving up after `timeout`.
///
/// # Errors
///
/// Returns [`Error::TimedOut`] if the sink did not accept the update in time,
/// or the sink's own error.
pub async fn deliver<S: StatusSink>(
    sink: &S,
    update: StatusUpdate,
    timeout: Duration,
) -> Result<()> {
    tokio::time::timeout(timeout, sink.on_status(update))
        .await
        .map_err(|_| Error::TimedOut(timeout))?
}
