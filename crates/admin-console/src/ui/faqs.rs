//! FAQs page: accordion of questions.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::domain::App;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let accordion = &app.accordion;
    let mut lines = Vec::new();
    let mut cursor_line = 0usize;

    for (i, faq) in accordion.items().iter().enumerate() {
        let open = accordion.is_open(i);
        let at_cursor = accordion.cursor() == i;
        if at_cursor {
            cursor_line = lines.len();
        }
        let marker = if open { "▾ " } else { "▸ " };
        let mut style = Style::default().add_modifier(Modifier::BOLD);
        if at_cursor {
            style = style.fg(Color::Black).bg(Color::Cyan);
        }
        lines.push(Line::from(Span::styled(
            format!("{marker}{}", faq.question),
            style,
        )));
        if open {
            lines.push(Line::from(Span::styled(
                format!("  {}", faq.answer),
                Style::default().fg(Color::Gray),
            )));
        }
        lines.push(Line::raw(""));
    }

    // Keep the cursor in view on short terminals.
    let height = area.height.saturating_sub(2) as usize;
    let offset = cursor_line.saturating_sub(height.saturating_sub(4));

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((offset.min(u16::MAX as usize) as u16, 0))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Frequently Asked Questions ")
                .border_style(Style::default().fg(Color::Blue)),
        );
    frame.render_widget(paragraph, area);
}
