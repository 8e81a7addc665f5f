//! Reusable UI components.

mod confirm;
mod help_overlay;
mod log_view;
mod toast;

use ratatui::layout::{Constraint, Flex, Layout, Rect};

pub use confirm::render_confirm;
pub use help_overlay::render_help_overlay;
pub use log_view::render_log_view;
pub use toast::render_toast;

/// Create a centered rectangle.
pub(crate) fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::vertical([Constraint::Percentage(percent_y)]).flex(Flex::Center);
    let horizontal = Layout::horizontal([Constraint::Percentage(percent_x)]).flex(Flex::Center);

    let [area] = vertical.areas(area);
    let [area] = horizontal.areas(area);
    area
}
