//! Poll scheduling.
//!
//! The [`Scheduler`] sweeps every registered target on a fixed period. A sweep
//! probes all targets concurrently, waits for every probe to return or time
//! out, then classifies the results in registry order, records them on the
//! [`StatusBoard`] and pushes updates to the status sink.
use std::sync::Arc;
use std::time::Duration;

use dashmap::DashMap;
use tokio::sync::watch;
use tokio::task::JoinSet;
use tokio::time::{Instant, MissedTickBehavior};

use crate::config::{Config, MonitorSettings, NotifyPolicy};
use crate::health::{HealthState, StatusBoard, classify};
use crate::probe::{ProbeResult, Prober};
use crate::sink::{self, StatusSink, StatusUpdate};
use crate::target::{self, Registry, Target};

/// Timing and notification settings of a [`Scheduler`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchedulerSettings {
    /// Time between the starts of two consecutive sweeps.
    pub poll_interval: Duration,
    /// Upper bound for a single probe; also the grace period for an
    /// in-flight sweep on shutdown.
    pub probe_timeout: Duration,
    /// Upper bound for handing one update to the sink.
    pub sink_timeout: Duration,
    pub notify: NotifyPolicy,
}

impl From<&MonitorSettings> for SchedulerSettings {
    fn from(settings: &MonitorSettings) -> Self {
        Self {
            poll_interval: settings.poll_interval,
            probe_timeout: settings.probe_timeout,
            sink_timeout: settings.sink_timeout,
            notify: settings.notify,
        }
    }
}

/// Drives periodic health sweeps over a fixed set of targets.
pub struct Scheduler<P> {
    targets: Arc<[Target]>,
    prober: Arc<P>,
    board: StatusBoard,
    /// Last state each target's sink actually accepted.
    delivered: DashMap<Arc<str>, HealthState>,
    settings: SchedulerSettings,
}

impl<P: Prober> Scheduler<P> {
    pub fn new(registry: &Registry, prober: P, settings: SchedulerSettings) -> Self {
        Self {
            targets: registry.to_arc(),
            prober: Arc::new(prober),
            board: StatusBoard::new(registry.targets()),
            delivered: DashMap::with_capacity(registry.len()),
            settings,
        }
    }

    /// Resolves the targets from `config` and builds a scheduler with the
    /// configured `[Monitor]` settings.
    ///
    /// Nothing is probed here; a configuration error is returned before any
    /// runtime process has been started.
    ///
    /// # Errors
    ///
    /// Returns the [`target::Error`] from [`Registry::resolve`].
    pub fn from_config(config: &Config, prober: P) -> target::Result<Self> {
        let registry = Registry::resolve(config)?;
        Ok(Self::new(&registry, prober, config.monitor().into()))
    }

    /// Returns a read handle to the latest state of every target.
    pub fn board(&self) -> StatusBoard {
        self.board.clone()
    }

    pub fn targets(&self) -> &[Target] {
        &self.targets
    }

    /// Runs sweeps until `shutdown` turns `true` or its sender is dropped.
    ///
    /// The first sweep starts immediately. The period is measured from the
    /// start of one sweep to the start of the next; a sweep that overruns the
    /// period is followed directly by the next one, without catching up on
    /// missed ticks. On shutdown an in-flight sweep gets at most one probe
    /// timeout to finish before it is abandoned and its probes are killed.
    pub async fn run<S: StatusSink>(self, sink: S, mut shutdown: watch::Receiver<bool>) {
        let mut interval = tokio::time::interval(self.settings.poll_interval);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        log::debug!(
            "Polling {} targets every {}ms",
            self.targets.len(),
            self.settings.poll_interval.as_millis()
        );

        loop {
            tokio::select! {
                biased;
                _ = wait_for_shutdown(&mut shutdown) => break,
                _ = interval.tick() => {}
            }

            let sweep = self.sweep_once(&sink);
            tokio::pin!(sweep);
            tokio::select! {
                biased;
                _ = &mut sweep => continue,
                _ = wait_for_shutdown(&mut shutdown) => {}
            }

            log::debug!("Shutdown requested during a sweep, waiting for it to finish");
            if tokio::time::timeout(self.settings.probe_timeout, &mut sweep)
                .await
                .is_err()
            {
                log::warn!(
                    "abandoning in-flight sweep after {}ms",
                    self.settings.probe_timeout.as_millis()
                );
            }
            break;
        }

        log::debug!("Scheduler stopped");
    }

    /// Runs a single sweep and returns the updates that reached the sink.
    pub async fn sweep_once<S: StatusSink>(&self, sink: &S) -> Vec<StatusUpdate> {
        let before = Instant::now();
        let results = self.probe_all().await;
        let mut published = Vec::new();

        for (target, result) in self.targets.iter().zip(results) {
            let state = classify(target, &result);
            if self.board.record(target.name(), state) {
                log::info!("{} is now {} ({})", target.name(), state, result);
            }
            // Compared against what the sink last accepted, so an update that
            // was dropped is sent again on the next sweep.
            let last = self.delivered.get(target.name()).map(|entry| *entry);
            if last == Some(state) && self.settings.notify == NotifyPolicy::OnChange {
                continue;
            }

            let update = StatusUpdate::new(target.name(), state);
            match sink::deliver(sink, update.clone(), self.settings.sink_timeout).await {
                Ok(()) => {
                    self.delivered.insert(Arc::from(target.name()), state);
                    published.push(update);
                }
                Err(err) => log::warn!("dropping status update for {}: {}", target.name(), err),
            }
        }

        log::trace!("sweep took {}ms", before.elapsed().as_millis());
        published
    }

    /// Probes every target concurrently and returns the results in registry order.
    async fn probe_all(&self) -> Vec<ProbeResult> {
        let mut probes = JoinSet::new();
        for (idx, target) in self.targets.iter().enumerate() {
            let prober = Arc::clone(&self.prober);
            let target = target.clone();
            probes.spawn(async move { (idx, prober.probe(&target).await) });
        }

        let mut results: Vec<Option<ProbeResult>> = vec![None; self.targets.len()];
        while let Some(joined) = probes.join_next().await {
            match joined {
                Ok((idx, result)) => results[idx] = Some(result),
                Err(err) => log::error!("probe task failed: {}", err),
            }
        }

        results
            .into_iter()
            .map(|result| {
                result.unwrap_or_else(|| ProbeResult::SpawnFailed {
                    reason: "probe task failed".to_owned(),
                })
            })
            .collect()
    }
}

/// Resolves once shutdown is requested or the signal's sender is gone.
async fn wait_for_shutdown(shutdown: &mut watch::Receiver<bool>) {
    let _ = shutdown.wait_for(|stop| *stop).await;
}
