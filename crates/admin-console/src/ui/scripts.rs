//! Scripts page: one card per backend script.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::domain::{App, ScriptsState};

use super::tone_color;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Scripts ")
        .border_style(Style::default().fg(Color::Blue));

    let scripts = &app.bindings.scripts;
    let cards = match &scripts.state {
        ScriptsState::Idle => {
            frame.render_widget(Paragraph::new("").block(block), area);
            return;
        }
        ScriptsState::Loading => {
            frame.render_widget(
                Paragraph::new("Loading scripts...")
                    .style(Style::default().fg(Color::DarkGray))
                    .block(block),
                area,
            );
            return;
        }
        ScriptsState::Failed(message) => {
            frame.render_widget(
                Paragraph::new(message.as_str())
                    .style(Style::default().fg(Color::Red))
                    .block(block),
                area,
            );
            return;
        }
        ScriptsState::Loaded(cards) if cards.is_empty() => {
            frame.render_widget(Paragraph::new("No scripts found").block(block), area);
            return;
        }
        ScriptsState::Loaded(cards) => cards,
    };

    let items: Vec<ListItem> = cards
        .iter()
        .map(|card| {
            let (label, enabled) = scripts
                .button(&card.name)
                .map(|b| (b.label().to_string(), !b.is_disabled()))
                .unwrap_or_default();
            let button_style = if enabled {
                Style::default().fg(Color::Cyan)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            ListItem::new(vec![
                Line::from(vec![
                    Span::styled(
                        card.name.clone(),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                    Span::raw("  "),
                    Span::styled(
                        format!("[{}]", card.badge.text),
                        Style::default().fg(tone_color(card.badge.tone)),
                    ),
                    Span::raw("  "),
                    Span::styled(label, button_style),
                ]),
                Line::from(vec![
                    Span::styled("  Size: ", Style::default().fg(Color::DarkGray)),
                    Span::raw(card.size.clone()),
                    Span::styled("  Modified: ", Style::default().fg(Color::DarkGray)),
                    Span::raw(card.modified.clone()),
                ]),
                Line::from(vec![
                    Span::styled("  Path: ", Style::default().fg(Color::DarkGray)),
                    Span::raw(card.path.clone()),
                ]),
                Line::raw(""),
            ])
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().bg(Color::DarkGray))
        .highlight_symbol("▶ ");
    let mut state = ListState::default().with_selected(Some(scripts.selected));
    frame.render_stateful_widget(list, area, &mut state);
}
