use std::sync::Arc;

use dashmap::DashMap;

use crate::target::Target;

use super::HealthState;

/// Latest health state per target.
///
/// The board is written only by the scheduler, but handles can be cloned and
/// read from any thread, e.g. by a UI that repaints on its own cadence.
/// Every registered target starts out as [`HealthState::Unknown`].
#[derive(Debug, Clone)]
pub struct StatusBoard {
    order: Arc<[Arc<str>]>,
    states: Arc<DashMap<Arc<str>, HealthState>>,
}

impl StatusBoard {
    pub fn new(targets: &[Target]) -> Self {
        let order: Arc<[Arc<str>]> = targets.iter().map(|t| Arc::from(t.name())).collect();
        let states: DashMap<Arc<str>, HealthState> = order
            .iter()
            .map(|name| (Arc::clone(name), HealthState::Unknown))
            .collect();
        Self {
            order,
            states: Arc::new(states),
        }
    }

    /// Returns the current state of the named target, or `None` if it is not registered.
    pub fn get(&self, name: &str) -> Option<HealthState> {
        self.states.get(name).map(|entry| *entry)
    }

    /// Returns `(name, state)` for every target, in registry order.
    pub fn snapshot(&self) -> Vec<(Arc<str>, HealthState)> {
        self.order
            .iter()
            .map(|name| (Arc::clone(name), self.get(name).unwrap_or_default()))
            .collect()
    }

    /// Returns `true` once every target has been classified at least once.
    pub fn is_settled(&self) -> bool {
        self.states
            .iter()
            .all(|entry| *entry.value() != HealthState::Unknown)
    }

    /// Records a new state for the named target and reports whether it changed.
    ///
    /// A target never goes back to [`HealthState::Unknown`]; such a write and
    /// writes for unregistered targets are ignored.
    pub(crate) fn record(&self, name: &str, state: HealthState) -> bool {
        if state == HealthState::Unknown {
            log::warn!("refusing to reset `{name}` to unknown");
            return false;
        }
        match self.states.get_mut(name) {
            Some(mut entry) => {
                let changed = *entry != state;
                *entry = state;
                changed
            }
            None => {
                log::warn!("ignoring state for unregistered target `{name}`");
                false
            }
        }
    }
}
