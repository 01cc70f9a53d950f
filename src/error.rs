use crate::{config, target};

/// Top-level error of the monitor.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid configuration: {0}")]
    Config(#[from] config::Error),
    #[error("invalid configuration: {0}")]
    Targets(#[from] target::Error),
    #[error("failed to listen for the shutdown signal: {0}")]
    Signal(#[source] std::io::Error),
    #[error("polling task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

impl Error {
    /// Returns `true` for errors caused by the configuration, which are only
    /// ever raised before the first sweep.
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Config(_) | Self::Targets(_))
    }
}

pub type Result<T> = std::result::Result<T, Error>;

pub trait ResultOkLogExt<T, E> {
    /// Converts into an [`Option`], logging the error at `error` level.
    fn ok_log(self) -> Option<T>;
}

impl<T, E> ResultOkLogExt<T, E> for std::result::Result<T, E>
where
    E: std::error::Error,
{
    fn ok_log(self) -> Option<T> {
        match self {
            Ok(ok) => Some(ok),
            Err(err) => {
                log::error!("{err}");
                None
            }
        }
    }
}
