//! Logs page.

use ratatui::{layout::Rect, Frame};

use crate::api::LogChannel;
use crate::domain::{App, ButtonRef};

use super::widgets::render_log_view;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let clear = app
        .button(&ButtonRef::ClearLogs(LogChannel::General))
        .map(|b| b.label().to_string())
        .unwrap_or_default();
    render_log_view(
        frame,
        area,
        app.bindings.log(LogChannel::General),
        &format!("System Logs  [C] {clear}"),
        true,
    );
}
