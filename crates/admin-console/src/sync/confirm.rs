//! Interactive yes/no confirmation.

use async_trait::async_trait;
use tokio::sync::oneshot;

use super::SharedApp;

/// Asks the user to confirm a destructive action.
#[async_trait]
pub trait Confirm: Send + Sync {
    /// Returns true if the user accepted.
    async fn confirm(&self, prompt: &str) -> bool;
}

/// Confirmation through a modal drawn by the terminal UI.
///
/// The prompt is parked in the application model; the event loop routes
/// `y`/`n` to it while it is open.
pub struct ModalConfirm {
    app: SharedApp,
}

impl ModalConfirm {
    pub fn new(app: SharedApp) -> Self {
        Self { app }
    }
}

#[async_trait]
impl Confirm for ModalConfirm {
    async fn confirm(&self, prompt: &str) -> bool {
        let (tx, rx) = oneshot::channel();
        if self.app.lock().await.request_confirm(prompt, tx).is_err() {
            tracing::debug!(prompt, "Another confirmation is open; declining");
            return false;
        }
        // A dropped sender (shutdown) counts as a refusal.
        rx.await.unwrap_or(false)
    }
}

/// Fixed answer, for tests and non-interactive runs.
#[derive(Debug, Clone, Copy)]
pub struct AutoConfirm(pub bool);

#[async_trait]
impl Confirm for AutoConfirm {
    async fn confirm(&self, _prompt: &str) -> bool {
        self.0
    }
}
