//! Main layout orchestration.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │ ADMIN CONSOLE  Dashboard │ Scripts │ Logs │ FAQs   ● connected  │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  active page                                                    │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  page key hints                                                 │
//! └─────────────────────────────────────────────────────────────────┘
//! ```

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use tokio::time::Instant;

use crate::domain::{App, AppState, Page, ServerStatus};

use super::{dashboard, faqs, logs, scripts, widgets};

/// Render the entire UI.
pub fn render(frame: &mut Frame, app: &App) {
    let size = frame.area();

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Body
            Constraint::Length(3), // Footer (keybinds)
        ])
        .split(size);

    render_header(frame, main_chunks[0], app);
    match app.active_page() {
        Page::Dashboard => dashboard::render(frame, main_chunks[1], app),
        Page::Scripts => scripts::render(frame, main_chunks[1], app),
        Page::Logs => logs::render(frame, main_chunks[1], app),
        Page::Faqs => faqs::render(frame, main_chunks[1], app),
    }
    render_footer(frame, main_chunks[2], app.active_page());

    widgets::render_toast(frame, &app.notifications, Instant::now());

    if app.state == AppState::Help {
        widgets::render_help_overlay(frame);
    }
    if let Some(prompt) = app.pending_confirm() {
        widgets::render_confirm(frame, prompt);
    }
}

/// Render the header bar: title, page tabs, backend status, last refresh.
fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::styled(
        " ADMIN CONSOLE ",
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )];

    for (i, page) in Page::ALL.into_iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("│", Style::default().fg(Color::DarkGray)));
        }
        let style = if app.router.is_active(page) {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        spans.push(Span::styled(
            format!(" [{}] {} ", page.hotkey().to_ascii_uppercase(), page.title()),
            style,
        ));
    }

    let server = match &app.server {
        ServerStatus::Unknown => Span::styled("  ○ checking", Style::default().fg(Color::DarkGray)),
        ServerStatus::Online { version } => Span::styled(
            format!("  ● connected v{version}"),
            Style::default().fg(Color::Green),
        ),
        ServerStatus::Offline(_) => Span::styled("  ○ offline", Style::default().fg(Color::Red)),
    };
    spans.push(server);

    let refreshed = match app.last_refresh {
        Some(time) => format!("  Last refresh: {}", time.format("%H:%M:%S")),
        None => "  No data".to_string(),
    };
    spans.push(Span::styled(refreshed, Style::default().fg(Color::DarkGray)));

    let header = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );

    frame.render_widget(header, area);
}

fn hint(key: &'static str, text: &'static str) -> [Span<'static>; 2] {
    [
        Span::styled(key, Style::default().fg(Color::Yellow)),
        Span::raw(text),
    ]
}

/// Render the footer with the active page's keyboard shortcuts.
fn render_footer(frame: &mut Frame, area: Rect, page: Page) {
    let mut keybinds: Vec<Span> = Vec::new();
    match page {
        Page::Dashboard => {
            keybinds.extend(hint("[U]", " Upgrade checker  "));
            keybinds.extend(hint("[H]", " Health simulator  "));
            keybinds.extend(hint("[V]", " Switch viewer  "));
            keybinds.extend(hint("[↑↓/End]", " Scroll  "));
            keybinds.extend(hint("[W/O]", " Clear WS/Orchestrator  "));
        }
        Page::Scripts => {
            keybinds.extend(hint("[↑↓]", " Select  "));
            keybinds.extend(hint("[Enter]", " Execute  "));
        }
        Page::Logs => {
            keybinds.extend(hint("[↑↓/PgUp/PgDn/End]", " Scroll  "));
            keybinds.extend(hint("[C]", " Clear logs  "));
        }
        Page::Faqs => {
            keybinds.extend(hint("[↑↓]", " Move  "));
            keybinds.extend(hint("[Enter]", " Toggle  "));
        }
    }
    keybinds.extend(hint("[Tab]", " Next page  "));
    keybinds.extend(hint("[R]", " Refresh  "));
    keybinds.extend(hint("[?]", " Help  "));
    keybinds.extend(hint("[Q]", " Quit"));

    let footer = Paragraph::new(Line::from(keybinds))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .centered();

    frame.render_widget(footer, area);
}
