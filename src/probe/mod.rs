//! Probe execution.
//!
//! A probe runs one external runtime command for one [`Target`] and reports
//! what happened as a [`ProbeResult`]. Probes never fail with an error: spawn
//! failures, non-zero exits, timeouts and unexpected output are all values.
use std::fmt;
use std::future::Future;
use std::time::Duration;

use crate::target::Target;

mod command;

pub use command::CommandProber;

/// Exit code reported when the process produced none: it could not be
/// spawned, was killed after timing out, or died from a signal.
pub const NO_EXIT_CODE: i32 = -1;

/// Outcome of a single probe invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeResult {
    /// Exit status 0 and, for containers, a well-formed running flag.
    Succeeded { stdout: String },
    /// The runtime answered with a non-zero exit status.
    NonZeroExit {
        code: i32,
        stdout: String,
        stderr: String,
    },
    /// Exit status 0, but stdout was not `true` or `false`.
    Malformed { stdout: String },
    /// The process did not finish within the probe timeout and was killed.
    TimedOut { after: Duration },
    /// The process could not be started or its output could not be collected.
    SpawnFailed { reason: String },
}

impl ProbeResult {
    pub fn succeeded(&self) -> bool {
        matches!(self, Self::Succeeded { .. })
    }

    /// The process exit code, or [`NO_EXIT_CODE`] if there is none.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Succeeded { .. } | Self::Malformed { .. } => 0,
            Self::NonZeroExit { code, .. } => *code,
            Self::TimedOut { .. } | Self::SpawnFailed { .. } => NO_EXIT_CODE,
        }
    }

    /// Captured standard output, empty if the process never completed.
    pub fn stdout(&self) -> &str {
        match self {
            Self::Succeeded { stdout }
            | Self::NonZeroExit { stdout, .. }
            | Self::Malformed { stdout } => stdout.as_str(),
            Self::TimedOut { .. } | Self::SpawnFailed { .. } => "",
        }
    }

    pub fn timed_out(&self) -> bool {
        matches!(self, Self::TimedOut { .. })
    }
}

impl fmt::Display for ProbeResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Succeeded { .. } => f.write_str("succeeded"),
            Self::NonZeroExit { code, .. } => write!(f, "exited with code {code}"),
            Self::Malformed { stdout } => write!(f, "unexpected output `{}`", stdout.trim()),
            Self::TimedOut { after } => write!(f, "timed out after {}ms", after.as_millis()),
            Self::SpawnFailed { reason } => write!(f, "failed to run: {reason}"),
        }
    }
}

/// Runs health probes against targets.
pub trait Prober: Send + Sync + 'static {
    fn probe(&self, target: &Target) -> impl Future<Output = ProbeResult> + Send;
}
