//! Page routing.
//!
//! Exactly one [`Page`] is active at a time. The active page decides both
//! what is drawn and which panels the poller refreshes.

use super::panel::PanelId;

/// Top-level views of the console.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Page {
    #[default]
    Dashboard,
    Scripts,
    Logs,
    Faqs,
}

impl Page {
    /// Navigation order.
    pub const ALL: [Page; 4] = [Page::Dashboard, Page::Scripts, Page::Logs, Page::Faqs];

    /// Navigation identifier (`data-page` of the nav entry).
    pub fn id(&self) -> &'static str {
        match self {
            Page::Dashboard => "dashboard",
            Page::Scripts => "scripts",
            Page::Logs => "logs",
            Page::Faqs => "faqs",
        }
    }

    pub fn from_id(id: &str) -> Option<Page> {
        Page::ALL.into_iter().find(|page| page.id() == id)
    }

    pub fn title(&self) -> &'static str {
        match self {
            Page::Dashboard => "Dashboard",
            Page::Scripts => "Scripts",
            Page::Logs => "Logs",
            Page::Faqs => "FAQs",
        }
    }

    pub fn hotkey(&self) -> char {
        match self {
            Page::Dashboard => 'd',
            Page::Scripts => 's',
            Page::Logs => 'l',
            Page::Faqs => 'f',
        }
    }

    pub fn from_hotkey(key: char) -> Option<Page> {
        Page::ALL
            .into_iter()
            .find(|page| page.hotkey() == key.to_ascii_lowercase())
    }

    /// Panels loaded when the page becomes active.
    pub fn loads(&self) -> &'static [PanelId] {
        match self {
            Page::Dashboard => &[PanelId::WsLogs, PanelId::OrchestratorLogs, PanelId::Health],
            Page::Scripts => &[PanelId::Scripts],
            Page::Logs => &[PanelId::Logs],
            Page::Faqs => &[],
        }
    }

    /// Panels refreshed on every poll tick while the page is active.
    pub fn polls(&self) -> &'static [PanelId] {
        match self {
            Page::Dashboard => &[PanelId::WsLogs, PanelId::OrchestratorLogs, PanelId::Health],
            Page::Logs => &[PanelId::Logs],
            Page::Scripts | Page::Faqs => &[],
        }
    }
}

/// Single-active-page state machine.
#[derive(Debug, Clone, Default)]
pub struct PageRouter {
    active: Page,
}

impl PageRouter {
    /// Start on the dashboard.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> Page {
        self.active
    }

    pub fn is_active(&self, page: Page) -> bool {
        self.active == page
    }

    /// Select a page by navigation identifier. Unknown identifiers leave the
    /// active page unchanged and return `None`.
    pub fn select(&mut self, id: &str) -> Option<Page> {
        let page = Page::from_id(id)?;
        Some(self.activate(page))
    }

    /// Make `page` the active page. Re-selecting the active page is still a
    /// transition (its loads run again).
    pub fn activate(&mut self, page: Page) -> Page {
        self.active = page;
        page
    }

    pub fn next(&mut self) -> Page {
        let idx = Page::ALL.iter().position(|&p| p == self.active).unwrap_or(0);
        self.activate(Page::ALL[(idx + 1) % Page::ALL.len()])
    }

    pub fn prev(&mut self) -> Page {
        let idx = Page::ALL.iter().position(|&p| p == self.active).unwrap_or(0);
        let len = Page::ALL.len();
        self.activate(Page::ALL[(idx + len - 1) % len])
    }
}
