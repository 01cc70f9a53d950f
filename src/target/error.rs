/// Errors that may occur while resolving the monitored targets from configuration.
///
/// Any of these stops the monitor before the first probe is issued.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("missing configuration section `[{section}]`")]
    MissingSection { section: &'static str },
    #[error("missing key `{key}` in configuration section `[{section}]`")]
    MissingKey { section: &'static str, key: String },
    #[error("invalid container identifier for `{name}`: `{identifier}`")]
    InvalidIdentifier { name: String, identifier: String },
    #[error("target `{0}` is listed more than once")]
    DuplicateTarget(String),
}

pub type Result<T> = std::result::Result<T, Error>;
