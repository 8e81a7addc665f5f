//! Demo project status changes.

use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tokio::sync::watch;
use tokio::time::{interval_at, Instant, MissedTickBehavior};

use crate::domain::ProjectStatus;

use super::SharedApp;

/// A status change for the project at `index`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusUpdate {
    pub index: usize,
    pub status: ProjectStatus,
}

/// Produces the simulator's next status change.
pub trait StatusUpdateSource: Send {
    /// Next update for a list of `project_count` projects, if any.
    fn next_update(&mut self, project_count: usize) -> Option<StatusUpdate>;
}

/// Picks a project uniformly; it turns healthy with `healthy_probability`.
pub struct RandomStatusSource {
    rng: StdRng,
    healthy_probability: f64,
}

impl RandomStatusSource {
    pub fn new(healthy_probability: f64) -> Self {
        Self::with_rng(StdRng::from_entropy(), healthy_probability)
    }

    /// Deterministic source for reproducible runs.
    pub fn seeded(seed: u64, healthy_probability: f64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed), healthy_probability)
    }

    fn with_rng(rng: StdRng, healthy_probability: f64) -> Self {
        Self {
            rng,
            healthy_probability: healthy_probability.clamp(0.0, 1.0),
        }
    }
}

impl StatusUpdateSource for RandomStatusSource {
    fn next_update(&mut self, project_count: usize) -> Option<StatusUpdate> {
        if project_count == 0 {
            return None;
        }
        let index = self.rng.gen_range(0..project_count);
        let status = if self.rng.gen_bool(self.healthy_probability) {
            ProjectStatus::Healthy
        } else {
            ProjectStatus::Failed
        };
        Some(StatusUpdate { index, status })
    }
}

/// Applies a status update to the demo projects every `period`.
pub struct StatusSimulator {
    app: SharedApp,
    source: Box<dyn StatusUpdateSource>,
    period: Duration,
}

impl StatusSimulator {
    pub fn new(app: SharedApp, source: Box<dyn StatusUpdateSource>, period: Duration) -> Self {
        Self {
            app,
            source,
            period,
        }
    }

    /// Apply one update. Returns true if a project changed (and the cards
    /// were re-rendered).
    pub async fn step(&mut self) -> bool {
        let mut app = self.app.lock().await;
        let count = app.projects().len();
        let Some(update) = self.source.next_update(count) else {
            return false;
        };
        let changed = app.apply_project_update(update.index, update.status);
        if changed {
            tracing::debug!(
                index = update.index,
                status = update.status.label(),
                "Project status changed"
            );
        }
        changed
    }

    /// Step until `shutdown` flips to true or its sender is dropped.
    pub async fn run(mut self, mut shutdown: watch::Receiver<bool>) {
        let mut interval = interval_at(Instant::now() + self.period, self.period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                _ = interval.tick() => {
                    self.step().await;
                }
                changed = shutdown.changed() => {
                    if changed.is_err() || *shutdown.borrow() {
                        tracing::debug!("Status simulator stopped");
                        return;
                    }
                }
            }
        }
    }
}
