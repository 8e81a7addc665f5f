//! View-model bindings for every display region the controllers write to.
//!
//! The binding table is built once in [`ViewBindings::new`] and handed to the
//! controllers through the application model; nothing looks panels up by a
//! free-form string at refresh time.

use std::collections::{BTreeMap, HashMap};

use crate::api::LogChannel;
use crate::render::ScriptCard;

use super::button::ActionButton;

/// Identifier of a panel owned by one controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PanelId {
    Scripts,
    Logs,
    WsLogs,
    OrchestratorLogs,
    Health,
}

impl PanelId {
    pub const ALL: [PanelId; 5] = [
        PanelId::Scripts,
        PanelId::Logs,
        PanelId::WsLogs,
        PanelId::OrchestratorLogs,
        PanelId::Health,
    ];

    /// Binding id of the panel's container.
    pub fn container_id(&self) -> &'static str {
        match self {
            PanelId::Scripts => "scripts-grid",
            PanelId::Logs => "logs-content",
            PanelId::WsLogs => "ws-terminal-content",
            PanelId::OrchestratorLogs => "orchestrator-terminal-content",
            PanelId::Health => "health-cards",
        }
    }

    /// The log channel shown in this panel, if it is a log viewer.
    pub fn log_channel(&self) -> Option<LogChannel> {
        match self {
            PanelId::Logs => Some(LogChannel::General),
            PanelId::WsLogs => Some(LogChannel::WebSocket),
            PanelId::OrchestratorLogs => Some(LogChannel::Orchestrator),
            PanelId::Scripts | PanelId::Health => None,
        }
    }

    /// The panel that displays a log channel.
    pub fn for_channel(channel: LogChannel) -> PanelId {
        match channel {
            LogChannel::General => PanelId::Logs,
            LogChannel::WebSocket => PanelId::WsLogs,
            LogChannel::Orchestrator => PanelId::OrchestratorLogs,
        }
    }
}

impl std::fmt::Display for PanelId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.container_id())
    }
}

/// How a panel treats responses that resolve out of order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SequencePolicy {
    /// Whichever response resolves last is displayed.
    #[default]
    LastResolvedWins,
    /// Responses issued before the last applied one are discarded.
    RejectStale,
}

/// Request sequence numbers for one panel.
#[derive(Debug, Clone, Copy, Default)]
struct PanelSequence {
    issued: u64,
    applied: u64,
}

/// Scrollable text viewport of one log channel.
#[derive(Debug, Clone, Default)]
pub struct LogView {
    text: String,
    is_error: bool,
    /// Lines scrolled up from the bottom; zero means tail-follow.
    from_bottom: usize,
}

impl LogView {
    /// Displayed text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Whether the displayed text is an error message.
    pub fn is_error(&self) -> bool {
        self.is_error
    }

    pub fn line_count(&self) -> usize {
        self.text.lines().count()
    }

    /// Replace the content and scroll to the bottom.
    pub fn replace(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.is_error = false;
        self.scroll_to_bottom();
    }

    /// Replace the content with an error message.
    pub fn replace_error(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.is_error = true;
        self.scroll_to_bottom();
    }

    pub fn scroll_to_bottom(&mut self) {
        self.from_bottom = 0;
    }

    pub fn is_at_bottom(&self) -> bool {
        self.from_bottom == 0
    }

    pub fn scroll_up(&mut self, lines: usize) {
        let max = self.line_count().saturating_sub(1);
        self.from_bottom = (self.from_bottom + lines).min(max);
    }

    pub fn scroll_down(&mut self, lines: usize) {
        self.from_bottom = self.from_bottom.saturating_sub(lines);
    }

    /// Index of the first visible line for a viewport `height` lines tall.
    pub fn first_visible_line(&self, height: usize) -> usize {
        self.line_count()
            .saturating_sub(height)
            .saturating_sub(self.from_bottom)
    }
}

/// What the scripts grid currently shows.
#[derive(Debug, Clone, PartialEq)]
pub enum ScriptsState {
    /// Nothing requested yet.
    Idle,
    Loading,
    Loaded(Vec<ScriptCard>),
    Failed(String),
}

/// Scripts grid plus one execute button per script.
#[derive(Debug, Clone)]
pub struct ScriptsView {
    pub state: ScriptsState,
    pub selected: usize,
    buttons: HashMap<String, ActionButton>,
}

/// Idle label of every execute button.
pub const EXECUTE_LABEL: &str = "▶ Execute Script";

impl Default for ScriptsView {
    fn default() -> Self {
        Self {
            state: ScriptsState::Idle,
            selected: 0,
            buttons: HashMap::new(),
        }
    }
}

impl ScriptsView {
    /// Show the rendered cards. Buttons of scripts still in flight keep
    /// their busy state; availability always follows the card.
    pub fn load(&mut self, cards: Vec<ScriptCard>) {
        self.buttons
            .retain(|name, _| cards.iter().any(|card| &card.name == name));
        for card in &cards {
            self.buttons
                .entry(card.name.clone())
                .and_modify(|button| button.set_available(card.runnable))
                .or_insert_with(|| {
                    let mut button = ActionButton::new(EXECUTE_LABEL);
                    button.set_available(card.runnable);
                    button
                });
        }
        self.selected = self.selected.min(cards.len().saturating_sub(1));
        self.state = ScriptsState::Loaded(cards);
    }

    pub fn cards(&self) -> &[ScriptCard] {
        match &self.state {
            ScriptsState::Loaded(cards) => cards,
            _ => &[],
        }
    }

    pub fn selected_card(&self) -> Option<&ScriptCard> {
        self.cards().get(self.selected)
    }

    pub fn button(&self, name: &str) -> Option<&ActionButton> {
        self.buttons.get(name)
    }

    pub fn button_mut(&mut self, name: &str) -> Option<&mut ActionButton> {
        self.buttons.get_mut(name)
    }

    pub fn select_next(&mut self) {
        let len = self.cards().len();
        if len > 0 {
            self.selected = (self.selected + 1) % len;
        }
    }

    pub fn select_prev(&mut self) {
        let len = self.cards().len();
        if len > 0 {
            self.selected = (self.selected + len - 1) % len;
        }
    }
}

/// One of the monitored sub-applications shown as a health card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum HealthId {
    One,
    Two,
    Three,
}

impl HealthId {
    pub const ALL: [HealthId; 3] = [HealthId::One, HealthId::Two, HealthId::Three];

    pub fn number(&self) -> u8 {
        match self {
            HealthId::One => 1,
            HealthId::Two => 2,
            HealthId::Three => 3,
        }
    }

    /// Key of this application in the `/api/health-status` map.
    pub fn app_name(&self) -> String {
        format!("{}.py", self.number())
    }

    pub fn card_id(&self) -> String {
        format!("health-card-{}", self.number())
    }

    pub fn indicator_id(&self) -> String {
        format!("indicator-{}", self.number())
    }

    pub fn status_id(&self) -> String {
        format!("status-{}", self.number())
    }
}

/// Health class carried by a card or its indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HealthClass {
    /// No report received yet.
    #[default]
    Unknown,
    Healthy,
    Unhealthy,
}

/// Status text plus card/indicator classes of one health card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HealthCard {
    pub status: String,
    pub card: HealthClass,
    pub indicator: HealthClass,
}

impl Default for HealthCard {
    fn default() -> Self {
        Self {
            status: "Checking...".to_string(),
            card: HealthClass::Unknown,
            indicator: HealthClass::Unknown,
        }
    }
}

impl HealthCard {
    /// Set status text and swap the healthy/unhealthy class on both
    /// card and indicator.
    pub fn apply(&mut self, status: impl Into<String>, healthy: bool) {
        self.status = status.into();
        let class = if healthy {
            HealthClass::Healthy
        } else {
            HealthClass::Unhealthy
        };
        self.card = class;
        self.indicator = class;
    }
}

/// Binding table for all panels and cards.
#[derive(Debug, Clone)]
pub struct ViewBindings {
    pub scripts: ScriptsView,
    logs: HashMap<LogChannel, LogView>,
    health: BTreeMap<HealthId, HealthCard>,
    /// Shown under the health cards when the last refresh failed.
    pub health_note: Option<String>,
    policy: SequencePolicy,
    sequences: HashMap<PanelId, PanelSequence>,
}

impl Default for ViewBindings {
    fn default() -> Self {
        Self::new(SequencePolicy::default())
    }
}

impl ViewBindings {
    pub fn new(policy: SequencePolicy) -> Self {
        Self {
            scripts: ScriptsView::default(),
            logs: LogChannel::ALL
                .into_iter()
                .map(|channel| (channel, LogView::default()))
                .collect(),
            health: HealthId::ALL
                .into_iter()
                .map(|id| (id, HealthCard::default()))
                .collect(),
            health_note: None,
            policy,
            sequences: PanelId::ALL
                .into_iter()
                .map(|id| (id, PanelSequence::default()))
                .collect(),
        }
    }

    pub fn policy(&self) -> SequencePolicy {
        self.policy
    }

    pub fn log(&self, channel: LogChannel) -> &LogView {
        &self.logs[&channel]
    }

    pub fn log_mut(&mut self, channel: LogChannel) -> &mut LogView {
        self.logs.entry(channel).or_default()
    }

    pub fn health_card(&self, id: HealthId) -> &HealthCard {
        &self.health[&id]
    }

    pub fn health_card_mut(&mut self, id: HealthId) -> &mut HealthCard {
        self.health.entry(id).or_default()
    }

    pub fn health_cards(&self) -> impl Iterator<Item = (HealthId, &HealthCard)> {
        self.health.iter().map(|(id, card)| (*id, card))
    }

    /// Stamp a new request for `panel`.
    pub fn issue(&mut self, panel: PanelId) -> u64 {
        let seq = self.sequences.entry(panel).or_default();
        seq.issued += 1;
        seq.issued
    }

    /// Decide whether the response to request `ticket` may be displayed,
    /// recording it as applied if so.
    pub fn accept(&mut self, panel: PanelId, ticket: u64) -> bool {
        let seq = self.sequences.entry(panel).or_default();
        match self.policy {
            SequencePolicy::LastResolvedWins => {
                seq.applied = ticket;
                true
            }
            SequencePolicy::RejectStale if ticket > seq.applied => {
                seq.applied = ticket;
                true
            }
            SequencePolicy::RejectStale => false,
        }
    }
}
