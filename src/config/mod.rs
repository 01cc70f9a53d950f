//! Configuration loading.
//!
//! The monitor is configured by an INI-style file shared with the desktop
//! shell. The `[Containers]` section maps logical container names to the
//! identifiers the runtime knows them by; the optional `[Monitor]` section
//! tunes polling.
//!
//! ```ini
//! [Containers]
//! ollama = ollama
//! openwebui = open-webui
//!
//! [Monitor]
//! runtime = podman
//! interval_ms = 5000
//! probe_timeout_ms = 3000
//! ```
use std::path::Path;
use std::str::FromStr;

mod document;
mod error;
mod parser;
mod settings;

pub use document::{Document, Section};
pub use error::{Error, Result};
pub use parser::ParseError;
pub use settings::{
    DEFAULT_POLL_INTERVAL, DEFAULT_PROBE_TIMEOUT, DEFAULT_RUNTIME, DEFAULT_SINK_TIMEOUT,
    DEFAULT_WATCH, MonitorSettings, NotifyPolicy, RuntimeCommand,
};

use crate::fsutil;

/// Section mapping logical container names to runtime identifiers.
pub const CONTAINERS_SECTION: &str = "Containers";
/// Optional section with polling tunables.
pub const MONITOR_SECTION: &str = "Monitor";

/// A loaded and validated configuration.
#[derive(Debug, Clone)]
pub struct Config {
    document: Document,
    monitor: MonitorSettings,
}

impl Config {
    /// Reads and parses the configuration file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::FileRead`] if the file cannot be read, and any error of
    /// [`Config::from_str`] otherwise.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fsutil::read_to_string(path)?;
        let config = text.parse::<Self>()?;
        log::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// The `[Containers]` section, if present.
    pub fn containers(&self) -> Option<&Section> {
        self.document.section(CONTAINERS_SECTION)
    }

    pub fn monitor(&self) -> &MonitorSettings {
        &self.monitor
    }
}

impl FromStr for Config {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let document = Document::parse(s)?;
        let monitor = MonitorSettings::from_section(document.section(MONITOR_SECTION))?;
        Ok(Self { document, monitor })
    }
}
