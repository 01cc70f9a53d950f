use tokio::sync::mpsc;

use super::{Error, Result, StatusSink, StatusUpdate};

/// Sink that forwards updates over a bounded channel.
///
/// The receiving half can be drained from any thread (e.g. with
/// [`mpsc::Receiver::blocking_recv`] on a UI thread), so the scheduler never
/// touches rendering state directly. A full channel applies back-pressure,
/// which the scheduler bounds with its sink timeout.
#[derive(Debug, Clone)]
pub struct ChannelSink {
    tx: mpsc::Sender<StatusUpdate>,
}

impl ChannelSink {
    /// Creates a sink and the receiver for its updates.
    pub fn new(capacity: usize) -> (Self, mpsc::Receiver<StatusUpdate>) {
        let (tx, rx) = mpsc::channel(capacity);
        (Self { tx }, rx)
    }
}

impl StatusSink for ChannelSink {
    async fn on_status(&self, update: StatusUpdate) -> Result<()> {
        self.tx.send(update).await.map_err(|_| Error::Closed)
    }
}
