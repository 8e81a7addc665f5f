//! Scrollable log viewer.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::domain::LogView;

/// Draw `view` tail-aligned: the last lines are visible unless the user
/// scrolled up.
///
/// Only the visible slice is handed to the paragraph; its own scroll offset
/// is a `u16` and cannot address long logs.
pub fn render_log_view(frame: &mut Frame, area: Rect, view: &LogView, title: &str, focused: bool) {
    let border = if focused { Color::Cyan } else { Color::DarkGray };
    let mut block = Block::default()
        .title(format!(" {title} "))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border));
    if !view.is_at_bottom() {
        block = block.title_bottom(Span::styled(
            " scrolled (End to follow) ",
            Style::default().fg(Color::Yellow),
        ));
    }

    let height = area.height.saturating_sub(2) as usize;
    let first = view.first_visible_line(height);
    let visible: Vec<Line> = view
        .text()
        .lines()
        .skip(first)
        .take(height)
        .map(Line::raw)
        .collect();
    let style = if view.is_error() {
        Style::default().fg(Color::Red)
    } else {
        Style::default().fg(Color::Gray)
    };

    let paragraph = Paragraph::new(visible).style(style).block(block);
    frame.render_widget(paragraph, area);
}
