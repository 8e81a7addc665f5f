//! Action dispatchers: one-shot backend actions bound to a button.

use std::future::Future;
use std::time::Duration;

use crate::api::{ActionResponse, ApiError, LogChannel};
use crate::domain::{ButtonRef, NotificationKind, QuickAction};

use super::SyncContext;

/// How long a success label stays before the button is restored.
pub const RESTORE_DELAY: Duration = Duration::from_secs(2);

/// What happened to a triggered action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    Succeeded,
    /// The request failed; carries the reason shown to the user.
    Failed(String),
    /// The user declined the confirmation. No request was sent.
    Declined,
    /// The button was disabled or missing. No request was sent.
    Blocked,
}

/// Labels and messages of one dispatch.
struct Dispatch<'a> {
    target: ButtonRef,
    pending_label: &'a str,
    success_label: &'a str,
    error_prefix: &'a str,
}

impl SyncContext {
    /// Run a backend script (`/run/{name}`) from its card's button.
    pub async fn run_script(&self, name: &str) -> ActionOutcome {
        let dispatch = Dispatch {
            target: ButtonRef::Script(name.to_string()),
            pending_label: "⏳ Executing...",
            success_label: "✓ Executed",
            error_prefix: "❌ Error",
        };
        self.perform(dispatch, self.backend.run_script(name), |response| {
            format!(
                "✅ {}",
                response.message.as_deref().unwrap_or("Script executed")
            )
        })
        .await
    }

    /// Clear one log channel after an interactive confirmation, then
    /// refresh its viewer.
    pub async fn clear_logs(&self, channel: LogChannel) -> ActionOutcome {
        let target = ButtonRef::ClearLogs(channel);
        if self.button_disabled(&target).await {
            return ActionOutcome::Blocked;
        }
        if !self.confirm.confirm(clear_prompt(channel)).await {
            tracing::debug!(channel = channel.label(), "Clear declined");
            return ActionOutcome::Declined;
        }

        let dispatch = Dispatch {
            target,
            pending_label: "⏳ Clearing...",
            success_label: "✓ Cleared",
            error_prefix: "❌ Error clearing logs",
        };
        self.perform(dispatch, self.backend.clear_logs(channel), |_| {
            clear_success_message(channel).to_string()
        })
        .await
    }

    /// Run one of the dashboard's quick actions.
    pub async fn run_quick_action(&self, action: QuickAction) -> ActionOutcome {
        let dispatch = Dispatch {
            target: ButtonRef::Quick(action),
            pending_label: action.pending_label(),
            success_label: "✓ Opened Terminal",
            error_prefix: "❌ Error",
        };
        self.perform(dispatch, self.backend.run_script(action.script()), |_| {
            action.success_message().to_string()
        })
        .await
    }

    async fn button_disabled(&self, target: &ButtonRef) -> bool {
        let app = self.app.lock().await;
        app.button(target).map_or(true, |button| button.is_disabled())
    }

    async fn perform<F>(
        &self,
        dispatch: Dispatch<'_>,
        request: F,
        success_message: impl FnOnce(&ActionResponse) -> String,
    ) -> ActionOutcome
    where
        F: Future<Output = Result<ActionResponse, ApiError>>,
    {
        let Dispatch {
            target,
            pending_label,
            success_label,
            error_prefix,
        } = dispatch;

        {
            let mut app = self.app.lock().await;
            let started = app
                .button_mut(&target)
                .is_some_and(|button| button.try_begin(pending_label));
            if !started {
                tracing::debug!(button = ?target, "Action ignored, button disabled");
                return ActionOutcome::Blocked;
            }
        }

        let result = request.await.and_then(ActionResponse::into_result);

        match result {
            Ok(response) => {
                tracing::info!(button = ?target, "Action succeeded");
                {
                    let mut app = self.app.lock().await;
                    app.notify(success_message(&response), NotificationKind::Success);
                    if let Some(button) = app.button_mut(&target) {
                        button.show_success(success_label);
                    }
                }
                if let ButtonRef::ClearLogs(channel) = target {
                    // The restore timer runs from the response, not from the refetch.
                    let ctx = self.clone();
                    tokio::spawn(async move { ctx.refresh_log(channel).await });
                }
                tokio::time::sleep(self.restore_delay).await;
                self.restore(&target).await;
                ActionOutcome::Succeeded
            }
            Err(e) => {
                let reason = e.to_string();
                tracing::error!(button = ?target, error = %reason, "Action failed");
                {
                    let mut app = self.app.lock().await;
                    app.notify(format!("{error_prefix}: {reason}"), NotificationKind::Error);
                }
                self.restore(&target).await;
                ActionOutcome::Failed(reason)
            }
        }
    }

    async fn restore(&self, target: &ButtonRef) {
        // The button may be gone if the scripts grid was reloaded meanwhile.
        if let Some(button) = self.app.lock().await.button_mut(target) {
            button.restore();
        }
    }
}

fn clear_prompt(channel: LogChannel) -> &'static str {
    match channel {
        LogChannel::General => "Are you sure you want to clear all logs?",
        LogChannel::WebSocket => "Are you sure you want to clear the WebSocket server logs?",
        LogChannel::Orchestrator => "Are you sure you want to clear the Orchestrator logs?",
    }
}

fn clear_success_message(channel: LogChannel) -> &'static str {
    match channel {
        LogChannel::General => "✅ Logs cleared successfully",
        LogChannel::WebSocket => "✅ WebSocket logs cleared successfully",
        LogChannel::Orchestrator => "✅ Orchestrator logs cleared successfully",
    }
}
