//! Panel controllers: fetch one endpoint and write the result into the
//! panel's binding. Failures become visible panel content; nothing
//! propagates past a controller.

use crate::api::LogChannel;
use crate::domain::{HealthId, PanelId, ScriptsState};
use crate::render::{health_card, log_text, script_card};

use super::SyncContext;

impl SyncContext {
    /// Fetch `/api/scripts` and render the scripts grid.
    pub async fn load_scripts(&self) {
        let ticket = {
            let mut app = self.app.lock().await;
            app.bindings.scripts.state = ScriptsState::Loading;
            app.bindings.issue(PanelId::Scripts)
        };

        let result = self.backend.list_scripts().await;

        let mut app = self.app.lock().await;
        if !app.bindings.accept(PanelId::Scripts, ticket) {
            tracing::debug!(panel = %PanelId::Scripts, ticket, "Discarding stale response");
            return;
        }
        match result {
            Ok(response) => {
                let cards = response.scripts.iter().map(script_card).collect();
                app.bindings.scripts.load(cards);
                app.mark_refreshed();
            }
            Err(e) => {
                tracing::error!(panel = %PanelId::Scripts, error = %e, "Error loading scripts");
                app.bindings.scripts.state =
                    ScriptsState::Failed(format!("Failed to load scripts: {e}"));
            }
        }
    }

    /// Fetch one log channel and replace its viewer, scrolled to the bottom.
    pub async fn refresh_log(&self, channel: LogChannel) {
        let panel = PanelId::for_channel(channel);
        let ticket = self.app.lock().await.bindings.issue(panel);

        let result = self.backend.fetch_logs(channel).await;

        let mut app = self.app.lock().await;
        if !app.bindings.accept(panel, ticket) {
            tracing::debug!(panel = %panel, ticket, "Discarding stale response");
            return;
        }
        match result {
            Ok(bundle) => {
                app.bindings.log_mut(channel).replace(log_text(channel, &bundle));
                app.mark_refreshed();
            }
            Err(e) => {
                tracing::error!(panel = %panel, error = %e, "Error loading {}", channel.label());
                app.bindings
                    .log_mut(channel)
                    .replace_error(format!("{}: {e}", load_error_prefix(channel)));
            }
        }
    }

    /// Fetch `/api/health-status` and update the three health cards.
    pub async fn update_health_cards(&self) {
        let ticket = self.app.lock().await.bindings.issue(PanelId::Health);

        let result = self.backend.health_status().await;

        let mut app = self.app.lock().await;
        if !app.bindings.accept(PanelId::Health, ticket) {
            tracing::debug!(panel = %PanelId::Health, ticket, "Discarding stale response");
            return;
        }
        match result {
            Ok(response) => {
                for id in HealthId::ALL {
                    // Ids missing from the response keep their last state.
                    if let Some(record) = response.health.get(&id.app_name()) {
                        let (status, healthy) = health_card(record);
                        app.bindings.health_card_mut(id).apply(status, healthy);
                    }
                }
                app.bindings.health_note = None;
                app.mark_refreshed();
            }
            Err(e) => {
                tracing::error!(panel = %PanelId::Health, error = %e, "Error updating health status");
                app.bindings.health_note = Some(format!("Health status unavailable: {e}"));
            }
        }
    }
}

fn load_error_prefix(channel: LogChannel) -> &'static str {
    match channel {
        LogChannel::General => "Error loading logs",
        LogChannel::WebSocket => "Error loading WebSocket logs",
        LogChannel::Orchestrator => "Error loading Orchestrator logs",
    }
}
