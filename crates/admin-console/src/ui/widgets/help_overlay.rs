//! Help overlay widget.

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::centered_rect;

fn key_line(key: &'static str, text: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {key:<9}"), Style::default().fg(Color::Yellow)),
        Span::raw(text),
    ])
}

fn section(title: &'static str) -> [Line<'static>; 2] {
    [
        Line::from(Span::styled(
            title,
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::raw(""),
    ]
}

/// Render a centered help overlay.
pub fn render_help_overlay(frame: &mut Frame) {
    let popup_area = centered_rect(60, 80, frame.area());

    frame.render_widget(Clear, popup_area);

    let mut help_text = vec![
        Line::from(Span::styled(
            "ADMIN CONSOLE HELP",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::raw(""),
    ];
    help_text.extend(section("Pages"));
    help_text.extend([
        key_line("D S L F", "Dashboard, Scripts, Logs, FAQs"),
        key_line("Tab", "Next page (Shift+Tab: previous)"),
        key_line("R", "Refresh page and backend status"),
        Line::raw(""),
    ]);
    help_text.extend(section("Dashboard"));
    help_text.extend([
        key_line("U", "Run upgrade checker"),
        key_line("H", "Start health WebSocket simulator"),
        key_line("V", "Switch between WebSocket and Orchestrator logs"),
        key_line("W / O", "Clear WebSocket / Orchestrator logs"),
        Line::raw(""),
    ]);
    help_text.extend(section("Scripts, Logs, FAQs"));
    help_text.extend([
        key_line("↑/↓", "Select script, scroll logs, move FAQ cursor"),
        key_line("Enter", "Execute script / toggle FAQ"),
        key_line("End", "Jump to the end of the logs"),
        key_line("C", "Clear logs (Logs page)"),
        Line::raw(""),
    ]);
    help_text.extend(section("General"));
    help_text.extend([
        key_line("Q / Esc", "Quit"),
        key_line("?", "Toggle this help"),
        Line::raw(""),
        Line::from(Span::styled(
            "Press any key to close",
            Style::default().fg(Color::DarkGray),
        )),
    ]);

    let paragraph = Paragraph::new(help_text).block(
        Block::default()
            .title(" Help ")
            .title_style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );

    frame.render_widget(paragraph, popup_area);
}
