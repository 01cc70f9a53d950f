use std::fmt;
use std::time::Duration;

use super::document::Section;
use super::{Error, MONITOR_SECTION, Result};

pub const DEFAULT_RUNTIME: &str = "podman";
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(5000);
pub const DEFAULT_PROBE_TIMEOUT: Duration = Duration::from_millis(3000);
pub const DEFAULT_SINK_TIMEOUT: Duration = Duration::from_millis(500);
pub const DEFAULT_WATCH: [&str; 2] = ["ollama", "openwebui"];

/// The container runtime CLI, split into the program and any fixed leading arguments.
///
/// `runtime = sudo -n podman` yields program `sudo` with args `["-n", "podman"]`;
/// probe arguments are appended after them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeCommand {
    program: String,
    args: Vec<String>,
}

impl RuntimeCommand {
    pub fn new(
        program: impl Into<String>,
        args: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// Splits a whitespace-separated command line. Returns `None` if it is blank.
    pub fn parse(src: &str) -> Option<Self> {
        let mut parts = src.split_whitespace();
        let program = parts.next()?;
        Some(Self::new(program, parts))
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }
}

impl Default for RuntimeCommand {
    fn default() -> Self {
        Self::new(DEFAULT_RUNTIME, std::iter::empty::<String>())
    }
}

impl fmt::Display for RuntimeCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// When the scheduler pushes a state to the status sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NotifyPolicy {
    /// Only when a target's state differs from the previous sweep.
    #[default]
    OnChange,
    /// Every target, every sweep.
    EverySweep,
}

/// Tunables from the optional `[Monitor]` section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonitorSettings {
    pub runtime: RuntimeCommand,
    pub poll_interval: Duration,
    pub probe_timeout: Duration,
    pub sink_timeout: Duration,
    pub notify: NotifyPolicy,
    /// Logical container names to monitor, in display order.
    pub watch: Vec<String>,
}

impl Default for MonitorSettings {
    fn default() -> Self {
        Self {
            runtime: RuntimeCommand::default(),
            poll_interval: DEFAULT_POLL_INTERVAL,
            probe_timeout: DEFAULT_PROBE_TIMEOUT,
            sink_timeout: DEFAULT_SINK_TIMEOUT,
            notify: NotifyPolicy::default(),
            watch: DEFAULT_WATCH.iter().map(|s| (*s).to_owned()).collect(),
        }
    }
}

impl MonitorSettings {
    /// Builds settings from the `[Monitor]` section, falling back to defaults
    /// for every key that is absent (or for the whole section).
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSetting`] if a present key has an unusable value.
    pub fn from_section(section: Option<&Section>) -> Result<Self> {
        let mut settings = Self::default();
        let Some(section) = section else {
            return Ok(settings);
        };

        for (key, value) in section.entries() {
            match key {
                "runtime" => {
                    settings.runtime = RuntimeCommand::parse(value)
                        .ok_or_else(|| invalid("runtime", value, "must not be empty"))?;
                }
                "interval_ms" => settings.poll_interval = parse_millis("interval_ms", value)?,
                "probe_timeout_ms" => {
                    settings.probe_timeout = parse_millis("probe_timeout_ms", value)?
                }
                "sink_timeout_ms" => {
                    settings.sink_timeout = parse_millis("sink_timeout_ms", value)?
                }
                "notify" => {
                    settings.notify = match value.to_ascii_lowercase().as_str() {
                        "change" => NotifyPolicy::OnChange,
                        "always" => NotifyPolicy::EverySweep,
                        _ => return Err(invalid("notify", value, "expected `change` or `always`")),
                    }
                }
                "watch" => {
                    let watch: Vec<String> = value
                        .split(',')
                        .map(str::trim)
                        .filter(|name| !name.is_empty())
                        .map(str::to_ascii_lowercase)
                        .collect();
                    if watch.is_empty() {
                        log::info!("`{MONITOR_SECTION}.watch` is empty, monitoring the daemon only");
                    }
                    settings.watch = watch;
                }
                other => log::warn!("ignoring unknown key `{MONITOR_SECTION}.{other}`"),
            }
        }

        Ok(settings)
    }
}

fn parse_millis(key: &'static str, value: &str) -> Result<Duration> {
    let millis = value
        .parse::<u64>()
        .map_err(|err| invalid(key, value, err.to_string()))?;
    if millis == 0 {
        return Err(invalid(key, value, "must be greater than zero"));
    }
    Ok(Duration::from_millis(millis))
}

fn invalid(key: &'static str, value: &str, reason: impl Into<String>) -> Error {
    Error::InvalidSetting {
        section: MONITOR_SECTION,
        key,
        value: value.to_owned(),
        reason: reason.into(),
    }
}
