//! Action button state.

/// A button bound to a one-shot async action.
///
/// `busy` is the only guard against duplicate submissions: a busy button
/// refuses [`ActionButton::try_begin`] until [`ActionButton::restore`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionButton {
    idle_label: String,
    label: String,
    available: bool,
    busy: bool,
}

impl ActionButton {
    /// Create an enabled button.
    pub fn new(label: impl Into<String>) -> Self {
        let label = label.into();
        Self {
            idle_label: label.clone(),
            label,
            available: true,
            busy: false,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn idle_label(&self) -> &str {
        &self.idle_label
    }

    /// Whether the target of the action exists at all.
    pub fn set_available(&mut self, available: bool) {
        self.available = available;
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn is_disabled(&self) -> bool {
        self.busy || !self.available
    }

    /// Disable the button and show `pending_label`. Returns false when the
    /// button is already disabled.
    pub fn try_begin(&mut self, pending_label: &str) -> bool {
        if self.is_disabled() {
            return false;
        }
        self.busy = true;
        self.label = pending_label.to_string();
        true
    }

    /// Show a success label while staying disabled.
    pub fn show_success(&mut self, label: &str) {
        self.label = label.to_string();
    }

    /// Restore the idle label and re-enable.
    pub fn restore(&mut self) {
        self.label = self.idle_label.clone();
        self.busy = false;
    }
}
