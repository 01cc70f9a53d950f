//! Health classification.
//!
//! Maps probe outcomes to a small set of [`HealthState`]s and keeps the latest
//! state per target on a [`StatusBoard`].
mod board;
mod classify;

pub use board::StatusBoard;
pub use classify::classify;

use std::fmt;

/// Health of one target as shown by its indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthState {
    /// Not classified yet. Never re-entered after the first classification.
    #[default]
    Unknown,
    /// Reachable and running.
    Healthy,
    /// Reachable and known to be down, e.g. a stopped container.
    Unhealthy,
    /// The check itself failed, so the real state is not known.
    Indeterminate,
}

impl HealthState {
    /// Indicator color used by the desktop shell.
    pub fn color(&self) -> &'static str {
        match self {
            Self::Unknown => "gray",
            Self::Healthy => "green",
            Self::Unhealthy => "red",
            Self::Indeterminate => "yellow",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unknown => "unknown",
            Self::Healthy => "healthy",
            Self::Unhealthy => "unhealthy",
            Self::Indeterminate => "indeterminate",
        }
    }
}

impl fmt::Display for HealthState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn colors_distinguish_down_from_unknown() {
        assert_eq!(HealthState::default(), HealthState::Unknown);
        assert_eq!(HealthState::Unknown.color(), "gray");
        assert_eq!(HealthState::Healthy.color(), "green");
        assert_eq!(HealthState::Unhealthy.color(), "red");
        assert_eq!(HealthState::Indeterminate.color(), "yellow");
    }

    #[test]
    fn serializes_lowercase() {
        let json = serde_json::to_string(&HealthState::Indeterminate).unwrap();
        assert_eq!(json, "\"indeterminate\"");
        let state: HealthState = serde_json::from_str("\"healthy\"").unwrap();
        assert_eq!(state, HealthState::Healthy);
    }
}
