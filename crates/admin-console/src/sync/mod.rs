//! Synchronization between the backend and the application model.
//!
//! Everything here runs on tokio tasks and talks to the model through
//! [`SharedApp`]. The model lock is taken to stamp a request and again to
//! apply its response, never across the network call itself.

mod actions;
mod confirm;
mod controllers;
mod scheduler;
mod simulator;
#[cfg(test)]
pub(crate) mod testing;

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::task::{JoinHandle, JoinSet};

use crate::api::Backend;
use crate::domain::{App, Command, Page, PanelId, ServerStatus};

pub use actions::{ActionOutcome, RESTORE_DELAY};
pub use confirm::{AutoConfirm, Confirm, ModalConfirm};
pub use scheduler::Poller;
pub use simulator::{RandomStatusSource, StatusSimulator, StatusUpdate, StatusUpdateSource};

/// The application model shared between the event loop and background tasks.
pub type SharedApp = Arc<Mutex<App>>;

/// Handles needed by controllers and dispatchers.
#[derive(Clone)]
pub struct SyncContext {
    pub app: SharedApp,
    pub backend: Arc<dyn Backend>,
    pub confirm: Arc<dyn Confirm>,
    /// How long a success label stays before the button is restored.
    pub restore_delay: Duration,
}

impl SyncContext {
    pub fn new(app: SharedApp, backend: Arc<dyn Backend>, confirm: Arc<dyn Confirm>) -> Self {
        Self {
            app,
            backend,
            confirm,
            restore_delay: RESTORE_DELAY,
        }
    }

    /// Run the controller that owns `panel`.
    pub async fn refresh_panel(&self, panel: PanelId) {
        match panel {
            PanelId::Scripts => self.load_scripts().await,
            PanelId::Health => self.update_health_cards().await,
            PanelId::Logs | PanelId::WsLogs | PanelId::OrchestratorLogs => {
                if let Some(channel) = panel.log_channel() {
                    self.refresh_log(channel).await;
                }
            }
        }
    }

    /// Run every panel in `panels` concurrently and wait for all of them.
    pub async fn refresh_panels(&self, panels: &[PanelId]) {
        let mut set = JoinSet::new();
        for &panel in panels {
            let ctx = self.clone();
            set.spawn(async move { ctx.refresh_panel(panel).await });
        }
        while let Some(joined) = set.join_next().await {
            if let Err(e) = joined {
                tracing::error!(error = %e, "Panel refresh task failed");
            }
        }
    }

    /// Run the loads of a page that just became active.
    pub async fn load_page(&self, page: Page) {
        tracing::debug!(page = page.id(), "Loading page");
        self.refresh_panels(page.loads()).await;
    }

    /// Startup: probe the backend, load the dashboard and preload the
    /// scripts grid so it is ready before its page is first opened.
    pub async fn load_initial(&self) {
        let mut panels = Page::Dashboard.loads().to_vec();
        panels.push(PanelId::Scripts);
        tokio::join!(self.probe_server(), self.refresh_panels(&panels));
    }

    /// Probe `/api/health` and record the result in the header status.
    pub async fn probe_server(&self) {
        let status = match self.backend.server_health().await {
            Ok(health) => {
                tracing::info!(version = %health.version, "Backend reachable");
                ServerStatus::Online {
                    version: health.version,
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, "Backend health probe failed");
                ServerStatus::Offline(e.to_string())
            }
        };
        self.app.lock().await.server = status;
    }

    /// Carry out a command produced by a key press.
    pub async fn execute(&self, command: Command) {
        match command {
            Command::LoadPage(page) => self.load_page(page).await,
            Command::Refresh(page) => {
                tokio::join!(self.probe_server(), self.load_page(page));
            }
            Command::RunScript(name) => {
                self.run_script(&name).await;
            }
            Command::ClearLogs(channel) => {
                self.clear_logs(channel).await;
            }
            Command::Quick(action) => {
                self.run_quick_action(action).await;
            }
        }
    }

    /// Carry out a command on its own task so the event loop keeps drawing.
    pub fn spawn(&self, command: Command) -> JoinHandle<()> {
        let ctx = self.clone();
        tokio::spawn(async move { ctx.execute(command).await })
    }
}
