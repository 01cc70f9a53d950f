//! Monitored targets.
//!
//! A [`Target`] is either the container runtime daemon itself or a container
//! it manages. Targets are resolved once at startup by the [`Registry`] and are
//! immutable afterwards.
use std::fmt;
use std::sync::Arc;

mod error;
mod identifier;
mod registry;

pub use error::{Error, Result};
pub use identifier::ContainerRef;
pub use registry::Registry;

/// Name under which the runtime daemon is reported.
pub const DAEMON_TARGET_NAME: &str = "daemon";

/// Discriminant of a [`Target`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetKind {
    Daemon,
    Container,
}

/// Something whose health is polled.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Target {
    /// The container runtime daemon, checked with `<runtime> info`.
    Daemon,
    /// A runtime-managed container, checked with `<runtime> inspect`.
    Container {
        /// Logical name from the configuration, e.g. `ollama`.
        name: Arc<str>,
        /// Name or ID the runtime knows the container by.
        container: ContainerRef,
    },
}

impl Target {
    pub fn container(name: impl AsRef<str>, container: ContainerRef) -> Self {
        Self::Container {
            name: name.as_ref().into(),
            container,
        }
    }

    pub fn kind(&self) -> TargetKind {
        match self {
            Self::Daemon => TargetKind::Daemon,
            Self::Container { .. } => TargetKind::Container,
        }
    }

    /// The name reported to the status sink.
    pub fn name(&self) -> &str {
        match self {
            Self::Daemon => DAEMON_TARGET_NAME,
            Self::Container { name, .. } => name.as_ref(),
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Daemon => f.write_str(DAEMON_TARGET_NAME),
            Self::Container { name, container } => write!(f, "{name} ({container})"),
        }
    }
}
