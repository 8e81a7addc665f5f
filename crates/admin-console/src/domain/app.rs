//! Application state management.

use std::collections::HashMap;

use crossterm::event::KeyCode;
use tokio::sync::oneshot;
use tokio::time::Instant;

use crate::api::LogChannel;
use crate::render::{project_card, ProjectCard};

use super::accordion::Accordion;
use super::button::ActionButton;
use super::faq::demo_faqs;
use super::notification::{NotificationKind, NotificationSlot};
use super::page::{Page, PageRouter};
use super::panel::{SequencePolicy, ViewBindings};
use super::project::{InMemoryProjects, Project, ProjectSource, ProjectStatus, StatusSummary};

/// Application state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppState {
    /// Normal operation.
    #[default]
    Running,
    /// Help overlay.
    Help,
    /// Quitting.
    Quit,
}

/// Backend liveness as last probed through `/api/health`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ServerStatus {
    #[default]
    Unknown,
    Online { version: String },
    Offline(String),
}

/// One-click dashboard actions that run a fixed backend script.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuickAction {
    UpgradeChecker,
    HealthSimulator,
}

impl QuickAction {
    pub const ALL: [QuickAction; 2] = [QuickAction::UpgradeChecker, QuickAction::HealthSimulator];

    /// Script passed to `/run/{name}`.
    pub fn script(&self) -> &'static str {
        match self {
            QuickAction::UpgradeChecker => "UpdateChecker.bat",
            QuickAction::HealthSimulator => "health_websocket_simulator.py",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            QuickAction::UpgradeChecker => "⬆ Run Upgrade Checker",
            QuickAction::HealthSimulator => "♥ Start Health Simulator",
        }
    }

    pub fn pending_label(&self) -> &'static str {
        match self {
            QuickAction::UpgradeChecker => "⏳ Running...",
            QuickAction::HealthSimulator => "⏳ Starting...",
        }
    }

    pub fn success_message(&self) -> &'static str {
        match self {
            QuickAction::UpgradeChecker => "✅ Upgrade checker opened in new terminal",
            QuickAction::HealthSimulator => "✅ Health WS Simulator opened in new terminal",
        }
    }

    pub fn hotkey(&self) -> char {
        match self {
            QuickAction::UpgradeChecker => 'u',
            QuickAction::HealthSimulator => 'h',
        }
    }
}

/// Addresses one action button in the model.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ButtonRef {
    Script(String),
    ClearLogs(LogChannel),
    Quick(QuickAction),
}

/// Idle label of the clear button of each log channel.
pub const CLEAR_LABEL: &str = "🗑 Clear Logs";

/// Async work requested by a key press, run by the caller after the model
/// lock is released.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// A page became active: run its loads now.
    LoadPage(Page),
    /// Manual refresh of the active page plus a backend health probe.
    Refresh(Page),
    RunScript(String),
    ClearLogs(LogChannel),
    Quick(QuickAction),
}

/// An interactive yes/no question waiting for the user.
#[derive(Debug)]
pub struct PendingConfirm {
    pub prompt: String,
    responder: oneshot::Sender<bool>,
}

/// Main application model.
pub struct App {
    /// Current application state.
    pub state: AppState,
    pub router: PageRouter,
    /// Binding table written by the panel controllers.
    pub bindings: ViewBindings,
    pub accordion: Accordion,
    pub notifications: NotificationSlot,
    projects: Box<dyn ProjectSource>,
    /// Rendered project cards, refreshed when a project changes.
    pub project_cards: Vec<ProjectCard>,
    pub summary: StatusSummary,
    clear_buttons: HashMap<LogChannel, ActionButton>,
    quick_buttons: HashMap<QuickAction, ActionButton>,
    /// Log viewer that receives scroll keys on the dashboard.
    pub focused_log: LogChannel,
    confirm: Option<PendingConfirm>,
    pub server: ServerStatus,
    /// Last time any panel applied a successful response.
    pub last_refresh: Option<chrono::DateTime<chrono::Utc>>,
}

impl Default for App {
    fn default() -> Self {
        Self::new(SequencePolicy::default(), Box::new(InMemoryProjects::demo()))
    }
}

impl App {
    /// Create a new application instance.
    pub fn new(policy: SequencePolicy, projects: Box<dyn ProjectSource>) -> Self {
        let mut app = Self {
            state: AppState::Running,
            router: PageRouter::new(),
            bindings: ViewBindings::new(policy),
            accordion: Accordion::new(demo_faqs()),
            notifications: NotificationSlot::default(),
            projects,
            project_cards: Vec::new(),
            summary: StatusSummary::default(),
            clear_buttons: LogChannel::ALL
                .into_iter()
                .map(|channel| (channel, ActionButton::new(CLEAR_LABEL)))
                .collect(),
            quick_buttons: QuickAction::ALL
                .into_iter()
                .map(|action| (action, ActionButton::new(action.label())))
                .collect(),
            focused_log: LogChannel::WebSocket,
            confirm: None,
            server: ServerStatus::Unknown,
            last_refresh: None,
        };
        app.render_projects();
        app
    }

    pub fn active_page(&self) -> Page {
        self.router.active()
    }

    pub fn projects(&self) -> Vec<Project> {
        self.projects.list()
    }

    /// Apply a status change from the update source. Re-renders the project
    /// cards and summary only when the stored value changed.
    pub fn apply_project_update(&mut self, index: usize, status: ProjectStatus) -> bool {
        let changed = self.projects.update(index, status);
        if changed {
            self.render_projects();
        }
        changed
    }

    fn render_projects(&mut self) {
        let projects = self.projects.list();
        self.project_cards = projects.iter().map(project_card).collect();
        self.summary = StatusSummary::from_projects(&projects);
    }

    /// Show a notification now.
    pub fn notify(&mut self, message: impl Into<String>, kind: NotificationKind) {
        self.notifications.show(message, kind, Instant::now());
    }

    pub fn mark_refreshed(&mut self) {
        self.last_refresh = Some(chrono::Utc::now());
    }

    pub fn button(&self, target: &ButtonRef) -> Option<&ActionButton> {
        match target {
            ButtonRef::Script(name) => self.bindings.scripts.button(name),
            ButtonRef::ClearLogs(channel) => self.clear_buttons.get(channel),
            ButtonRef::Quick(action) => self.quick_buttons.get(action),
        }
    }

    pub fn button_mut(&mut self, target: &ButtonRef) -> Option<&mut ActionButton> {
        match target {
            ButtonRef::Script(name) => self.bindings.scripts.button_mut(name),
            ButtonRef::ClearLogs(channel) => self.clear_buttons.get_mut(channel),
            ButtonRef::Quick(action) => self.quick_buttons.get_mut(action),
        }
    }

    /// Put a question on screen. Fails (handing the responder back) while
    /// another question is open.
    pub fn request_confirm(
        &mut self,
        prompt: impl Into<String>,
        responder: oneshot::Sender<bool>,
    ) -> Result<(), oneshot::Sender<bool>> {
        if self.confirm.is_some() {
            return Err(responder);
        }
        self.confirm = Some(PendingConfirm {
            prompt: prompt.into(),
            responder,
        });
        Ok(())
    }

    pub fn pending_confirm(&self) -> Option<&str> {
        self.confirm.as_ref().map(|c| c.prompt.as_str())
    }

    /// Answer the open question, if any.
    pub fn answer_confirm(&mut self, accepted: bool) {
        if let Some(pending) = self.confirm.take() {
            // The asking task may have been dropped at shutdown.
            let _ = pending.responder.send(accepted);
        }
    }

    /// Handle a key press. Returns async work for the caller to start.
    pub fn handle_key(&mut self, key: KeyCode) -> Option<Command> {
        if self.confirm.is_some() {
            match key {
                KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
                    self.answer_confirm(true)
                }
                KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                    self.answer_confirm(false)
                }
                _ => {}
            }
            return None;
        }

        match self.state {
            AppState::Help => {
                // Any key closes help
                self.state = AppState::Running;
                None
            }
            AppState::Quit => None,
            AppState::Running => self.handle_running_key(key),
        }
    }

    fn handle_running_key(&mut self, key: KeyCode) -> Option<Command> {
        match key {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.state = AppState::Quit;
                None
            }
            KeyCode::Char('?') => {
                self.state = AppState::Help;
                None
            }
            KeyCode::Char('r') | KeyCode::Char('R') => Some(Command::Refresh(self.active_page())),
            KeyCode::Tab => Some(Command::LoadPage(self.router.next())),
            KeyCode::BackTab => Some(Command::LoadPage(self.router.prev())),
            KeyCode::Char(c) if Page::from_hotkey(c).is_some() => {
                let page = Page::from_hotkey(c)?;
                Some(Command::LoadPage(self.router.activate(page)))
            }
            _ => match self.active_page() {
                Page::Dashboard => self.handle_dashboard_key(key),
                Page::Scripts => self.handle_scripts_key(key),
                Page::Logs => self.handle_logs_key(key),
                Page::Faqs => {
                    self.handle_faqs_key(key);
                    None
                }
            },
        }
    }

    fn handle_dashboard_key(&mut self, key: KeyCode) -> Option<Command> {
        match key {
            KeyCode::Char(c) => {
                let c = c.to_ascii_lowercase();
                if let Some(action) = QuickAction::ALL.into_iter().find(|a| a.hotkey() == c) {
                    return Some(Command::Quick(action));
                }
                match c {
                    'w' => Some(Command::ClearLogs(LogChannel::WebSocket)),
                    'o' => Some(Command::ClearLogs(LogChannel::Orchestrator)),
                    'v' => {
                        self.focused_log = match self.focused_log {
                            LogChannel::WebSocket => LogChannel::Orchestrator,
                            _ => LogChannel::WebSocket,
                        };
                        None
                    }
                    _ => None,
                }
            }
            _ => {
                self.scroll_log(self.focused_log, key);
                None
            }
        }
    }

    fn handle_scripts_key(&mut self, key: KeyCode) -> Option<Command> {
        let scripts = &mut self.bindings.scripts;
        match key {
            KeyCode::Up | KeyCode::Char('k') => scripts.select_prev(),
            KeyCode::Down | KeyCode::Char('j') => scripts.select_next(),
            KeyCode::Enter | KeyCode::Char('x') => {
                return scripts
                    .selected_card()
                    .map(|card| Command::RunScript(card.name.clone()));
            }
            _ => {}
        }
        None
    }

    fn handle_logs_key(&mut self, key: KeyCode) -> Option<Command> {
        match key {
            KeyCode::Char('c') | KeyCode::Char('C') => Some(Command::ClearLogs(LogChannel::General)),
            _ => {
                self.scroll_log(LogChannel::General, key);
                None
            }
        }
    }

    fn handle_faqs_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Up | KeyCode::Char('k') => self.accordion.cursor_prev(),
            KeyCode::Down | KeyCode::Char('j') => self.accordion.cursor_next(),
            KeyCode::Enter | KeyCode::Char(' ') => self.accordion.toggle_at_cursor(),
            _ => {}
        }
    }

    fn scroll_log(&mut self, channel: LogChannel, key: KeyCode) {
        let view = self.bindings.log_mut(channel);
        match key {
            KeyCode::Up => view.scroll_up(1),
            KeyCode::Down => view.scroll_down(1),
            KeyCode::PageUp => view.scroll_up(10),
            KeyCode::PageDown => view.scroll_down(10),
            KeyCode::End => view.scroll_to_bottom(),
            _ => {}
        }
    }

    /// Check if the app should quit.
    pub fn should_quit(&self) -> bool {
        self.state == AppState::Quit
    }
}
