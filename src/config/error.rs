use crate::fsutil;

use super::parser::ParseError;

/// Errors that may occur while loading the configuration file.
///
/// All of these are fatal: the monitor refuses to start polling with a
/// configuration it cannot fully understand.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    FileRead(#[from] fsutil::FileReadError),
    #[error("failed to parse configuration line {line}: {source}")]
    Parse {
        line: usize,
        #[source]
        source: ParseError,
    },
    #[error("entry on line {line} appears before any section header")]
    EntryOutsideSection { line: usize },
    #[error("duplicate section `[{section}]` on line {line}")]
    DuplicateSection { section: String, line: usize },
    #[error("duplicate key `{key}` in section `[{section}]` on line {line}")]
    DuplicateKey {
        section: String,
        key: String,
        line: usize,
    },
    #[error("invalid value `{value}` for `{section}.{key}`: {reason}")]
    InvalidSetting {
        section: &'static str,
        key: &'static str,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
