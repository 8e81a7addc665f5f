//! Dashboard page.
//!
//! ```text
//! ┌ App 1 ─────┐┌ App 2 ─────┐┌ App 3 ─────┐  Total 8  Healthy 6  Failed 2
//! ├ projects (4 per row) ───────────────────────────────────────────────┤
//! ├ quick actions ──────────────────────────────────────────────────────┤
//! ├ WebSocket logs ───────────────┬ Orchestrator logs ──────────────────┤
//! ```

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

use crate::api::LogChannel;
use crate::domain::{App, ButtonRef, QuickAction};
use crate::render::ProjectCard;

use super::widgets::render_log_view;
use super::{health_color, tone_color};

const CARDS_PER_ROW: usize = 4;

/// Render the dashboard.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let project_rows = app.project_cards.len().div_ceil(CARDS_PER_ROW).max(1) as u16;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),                // Health cards + summary
            Constraint::Length(project_rows * 6), // Project cards
            Constraint::Length(3),                // Quick actions
            Constraint::Min(6),                   // Log viewers
        ])
        .split(area);

    render_health_row(frame, chunks[0], app);
    render_projects(frame, chunks[1], app);
    render_quick_actions(frame, chunks[2], app);
    render_log_viewers(frame, chunks[3], app);
}

fn render_health_row(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 4),
            Constraint::Ratio(1, 4),
            Constraint::Ratio(1, 4),
            Constraint::Ratio(1, 4),
        ])
        .split(area);

    for (i, (id, card)) in app.bindings.health_cards().enumerate() {
        let color = health_color(card.card);
        let text = vec![
            Line::from(vec![
                Span::styled("● ", Style::default().fg(health_color(card.indicator))),
                Span::styled(
                    card.status.clone(),
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(Span::styled(
                id.app_name(),
                Style::default().fg(Color::DarkGray),
            )),
        ];
        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" App {} ", id.number()))
            .border_style(Style::default().fg(color));
        frame.render_widget(Paragraph::new(text).block(block), chunks[i]);
    }

    let summary = app.summary;
    let mut text = vec![
        Line::from(vec![
            Span::raw(" Total:   "),
            Span::styled(
                summary.total.to_string(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::raw(" Healthy: "),
            Span::styled(summary.healthy.to_string(), Style::default().fg(Color::Green)),
            Span::raw("  Failed: "),
            Span::styled(summary.failed.to_string(), Style::default().fg(Color::Red)),
        ]),
    ];
    if let Some(note) = &app.bindings.health_note {
        text.push(Line::from(Span::styled(
            format!(" {note}"),
            Style::default().fg(Color::Yellow),
        )));
    }
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Status ")
        .border_style(Style::default().fg(Color::Blue));
    frame.render_widget(Paragraph::new(text).block(block), chunks[3]);
}

fn render_projects(frame: &mut Frame, area: Rect, app: &App) {
    let rows = app.project_cards.chunks(CARDS_PER_ROW).collect::<Vec<_>>();
    let row_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Length(6); rows.len()])
        .split(area);

    for (row, row_area) in rows.iter().zip(row_areas.iter()) {
        let col_areas = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Ratio(1, CARDS_PER_ROW as u32); CARDS_PER_ROW])
            .split(*row_area);
        for (card, col_area) in row.iter().zip(col_areas.iter()) {
            render_project_card(frame, *col_area, card);
        }
    }
}

fn render_project_card(frame: &mut Frame, area: Rect, card: &ProjectCard) {
    let color = tone_color(card.badge.tone);
    let block = Block::default()
        .borders(Borders::ALL)
        .title(Line::from(vec![
            Span::raw(format!(" {} ", card.name)),
            Span::styled(format!("[{}] ", card.badge.text), Style::default().fg(color)),
        ]))
        .border_style(Style::default().fg(color));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(inner);

    frame.render_widget(
        Paragraph::new(card.description.as_str()).style(Style::default().fg(Color::Gray)),
        chunks[0],
    );
    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled("Resp ", Style::default().fg(Color::DarkGray)),
            Span::raw(card.response_time.clone()),
            Span::styled("  Checked ", Style::default().fg(Color::DarkGray)),
            Span::raw(card.last_check.clone()),
        ])),
        chunks[1],
    );
    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(color))
        .ratio(card.uptime_ratio.clamp(0.0, 1.0))
        .label(format!("Uptime {}", card.uptime));
    frame.render_widget(gauge, chunks[2]);
}

fn render_quick_actions(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = Vec::new();
    for action in QuickAction::ALL {
        let Some(button) = app.button(&ButtonRef::Quick(action)) else {
            continue;
        };
        let style = if button.is_disabled() {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default().fg(Color::Cyan)
        };
        spans.push(Span::styled(
            format!("[{}] ", action.hotkey().to_ascii_uppercase()),
            Style::default().fg(Color::Yellow),
        ));
        spans.push(Span::styled(button.label().to_string(), style));
        spans.push(Span::raw("    "));
    }
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Quick Actions ")
        .border_style(Style::default().fg(Color::DarkGray));
    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

fn render_log_viewers(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    for (channel, key, chunk) in [
        (LogChannel::WebSocket, 'W', chunks[0]),
        (LogChannel::Orchestrator, 'O', chunks[1]),
    ] {
        let clear = app
            .button(&ButtonRef::ClearLogs(channel))
            .map(|b| b.label().to_string())
            .unwrap_or_default();
        let title = format!("{}  [{key}] {clear}", channel.label());
        render_log_view(
            frame,
            chunk,
            app.bindings.log(channel),
            &title,
            app.focused_log == channel,
        );
    }
}
