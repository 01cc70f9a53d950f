use crate::probe::ProbeResult;
use crate::target::Target;

use super::HealthState;

/// Derives the health of `target` from one probe result.
///
/// The daemon is binary: it either answers `info` or it does not. A container
/// that the runtime reports as not running is [`HealthState::Unhealthy`],
/// whereas a container whose inspection failed for any reason is
/// [`HealthState::Indeterminate`].
///
/// Never returns [`HealthState::Unknown`].
pub fn classify(target: &Target, result: &ProbeResult) -> HealthState {
    match target {
        Target::Daemon if result.succeeded() => HealthState::Healthy,
        Target::Daemon => HealthState::Unhealthy,
        Target::Container { .. } => match (result.succeeded(), result.stdout().trim()) {
            (true, "true") => HealthState::Healthy,
            (true, "false") => HealthState::Unhealthy,
            _ => HealthState::Indeterminate,
        },
    }
}
