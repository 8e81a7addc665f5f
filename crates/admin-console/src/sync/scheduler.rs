//! Periodic refresh of the active page.

use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};

use super::SyncContext;

/// Re-runs the poll set of whichever page is active, every `period`.
pub struct Poller {
    ctx: SyncContext,
    period: Duration,
}

impl Poller {
    pub fn new(ctx: SyncContext, period: Duration) -> Self {
        Self { ctx, period }
    }

    /// One tick: start a refresh task per panel of the active page's poll
    /// set. The tasks are independent of each other and of later ticks.
    pub async fn tick(&self) -> Vec<JoinHandle<()>> {
        let page = self.ctx.app.lock().await.active_page();
        let panels = page.polls();
        if !panels.is_empty() {
            tracing::trace!(page = page.id(), panels = panels.len(), "Polling");
        }
        panels
            .iter()
            .map(|&panel| {
                let ctx = self.ctx.clone();
                tokio::spawn(async move { ctx.refresh_panel(panel).await })
            })
            .collect()
    }

    /// Tick until `shutdown` flips to true or its sender is dropped.
    pub async fn run(self, mut shutdown: watch::Receiver<bool>) {
        // The first tick fires one period from now; page loads cover startup.
        let mut interval = interval_at(Instant::now() + self.period, self.period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                _ = interval.tick() => {
                    self.tick().await;
                }
                changed = shutdown.changed() => {
                    if changed.is_err() || *shutdown.borrow() {
                        tracing::debug!("Poller stopped");
                        return;
                    }
                }
            }
        }
    }
}
