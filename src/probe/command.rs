use std::process::Stdio;
use std::time::{Duration, Instant};

use crate::config::RuntimeCommand;
use crate::target::Target;

use super::{NO_EXIT_CODE, ProbeResult, Prober};

/// Go template passed to `inspect` to select the running flag.
const RUNNING_FLAG_TEMPLATE: &str = "{{.State.Running}}";

/// Probes targets by invoking the container runtime CLI.
///
/// - Daemon: `<runtime> info`, healthy on exit status 0.
/// - Container: `<runtime> inspect -f {{.State.Running}} <container>`, which
///   must exit 0 and print `true` or `false`.
///
/// Every invocation is bounded by the probe timeout. The child is killed when
/// the timeout elapses or the probe future is dropped, so an abandoned sweep
/// never leaves a runtime process behind.
#[derive(Debug, Clone)]
pub struct CommandProber {
    runtime: RuntimeCommand,
    timeout: Duration,
}

impl CommandProber {
    pub fn new(runtime: RuntimeCommand, timeout: Duration) -> Self {
        Self { runtime, timeout }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Runs the probe command for `target` and interprets its outcome.
    pub async fn run(&self, target: &Target) -> ProbeResult {
        let args = probe_args(target);
        log::debug!("Probing {target}: {} {}", self.runtime, args.join(" "));

        let child = match self.spawn(&args) {
            Ok(child) => child,
            Err(err) => {
                log::warn!(
                    "failed to spawn `{}` for {}: {}",
                    self.runtime.program(),
                    target,
                    err
                );
                return ProbeResult::SpawnFailed {
                    reason: err.to_string(),
                };
            }
        };

        let before = Instant::now();
        let output = match tokio::time::timeout(self.timeout, child.wait_with_output()).await {
            Ok(Ok(output)) => output,
            Ok(Err(err)) => {
                log::warn!("failed to collect probe output for {}: {}", target, err);
                return ProbeResult::SpawnFailed {
                    reason: err.to_string(),
                };
            }
            Err(_) => {
                log::warn!(
                    "probe for {} timed out after {}ms, killing it",
                    target,
                    self.timeout.as_millis()
                );
                return ProbeResult::TimedOut {
                    after: self.timeout,
                };
            }
        };
        log::trace!("probe for {} took {}ms", target, before.elapsed().as_millis());

        let result = interpret(
            target,
            output.status.code(),
            String::from_utf8_lossy(&output.stdout).into_owned(),
            String::from_utf8_lossy(&output.stderr).into_owned(),
        );
        if let ProbeResult::NonZeroExit { code, stderr, .. } = &result {
            log::debug!(
                "probe for {} exited with code {}: {}",
                target,
                code,
                stderr.trim()
            );
        }
        result
    }

    fn spawn(&self, args: &[&str]) -> std::io::Result<tokio::process::Child> {
        tokio::process::Command::new(self.runtime.program())
            .args(self.runtime.args())
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
    }
}

impl Prober for CommandProber {
    async fn probe(&self, target: &Target) -> ProbeResult {
        self.run(target).await
    }
}

/// Arguments appended after the runtime command for `target`.
fn probe_args(target: &Target) -> Vec<&str> {
    match target {
        Target::Daemon => vec!["info"],
        Target::Container { container, .. } => {
            vec!["inspect", "-f", RUNNING_FLAG_TEMPLATE, container.as_ref()]
        }
    }
}

/// Turns a finished process into a [`ProbeResult`].
///
/// `code` is `None` if the process was terminated by a signal.
fn interpret(
    target: &Target,
    code: Option<i32>,
    stdout: String,
    stderr: String,
) -> ProbeResult {
    match code {
        Some(0) => match target {
            Target::Daemon => ProbeResult::Succeeded { stdout },
            Target::Container { .. } => match stdout.trim() {
                flag @ ("true" | "false") => ProbeResult::Succeeded {
                    stdout: flag.to_owned(),
                },
                _ => ProbeResult::Malformed { stdout },
            },
        },
        code => ProbeResult::NonZeroExit {
            code: code.unwrap_or(NO_EXIT_CODE),
            stdout,
            stderr,
        },
    }
}
