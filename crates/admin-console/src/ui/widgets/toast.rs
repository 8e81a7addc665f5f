//! Notification toast in the top-right corner.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use tokio::time::Instant;

use crate::domain::{NotificationKind, NotificationPhase, NotificationSlot};

pub fn render_toast(frame: &mut Frame, slot: &NotificationSlot, now: Instant) {
    let Some((notification, phase)) = slot.current(now) else {
        return;
    };
    // Not yet shown.
    if phase == NotificationPhase::Entering {
        return;
    }

    let color = match notification.kind {
        NotificationKind::Info => Color::Cyan,
        NotificationKind::Success => Color::Green,
        NotificationKind::Error => Color::Red,
    };
    let mut style = Style::default().fg(color);
    if phase == NotificationPhase::Hiding {
        style = style.add_modifier(Modifier::DIM);
    }

    let screen = frame.area();
    let width = (notification.message.chars().count() as u16 + 4)
        .min(screen.width.saturating_sub(2))
        .max(10);
    let area = Rect {
        x: screen.width.saturating_sub(width + 1),
        y: 3,
        width: width.min(screen.width),
        height: 3,
    }
    .intersection(screen);
    if area.is_empty() {
        return;
    }

    frame.render_widget(Clear, area);
    frame.render_widget(
        Paragraph::new(notification.message.as_str())
            .style(style)
            .block(Block::default().borders(Borders::ALL).border_style(style)),
        area,
    );
}
