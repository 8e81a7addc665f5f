//! Console state: pages, panels, buttons and the application model.

mod accordion;
mod app;
mod button;
pub mod faq;
mod notification;
mod page;
mod panel;
mod project;

pub use accordion::Accordion;
pub use app::{
    App, AppState, ButtonRef, Command, PendingConfirm, QuickAction, ServerStatus, CLEAR_LABEL,
};
pub use button::ActionButton;
pub use faq::{demo_faqs, Faq};
pub use notification::{
    Notification, NotificationKind, NotificationPhase, NotificationSlot, HIDE_TRANSITION,
    SHOW_DELAY, VISIBLE_FOR,
};
pub use page::{Page, PageRouter};
pub use panel::{
    HealthCard, HealthClass, HealthId, LogView, PanelId, ScriptsState, ScriptsView,
    SequencePolicy, ViewBindings, EXECUTE_LABEL,
};
pub use project::{InMemoryProjects, Project, ProjectSource, ProjectStatus, StatusSummary};
