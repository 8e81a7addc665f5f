//! UI module - TUI rendering components.
//!
//! - `layout.rs`: header with page tabs, body dispatch, footer, overlays
//! - one module per page
//! - `widgets/`: reusable components (log viewer, toast, modals)

mod dashboard;
mod faqs;
mod layout;
mod logs;
mod scripts;

pub mod widgets;

use ratatui::style::Color;

use crate::domain::HealthClass;
use crate::render::Tone;

pub use layout::render;

pub(crate) fn tone_color(tone: Tone) -> Color {
    match tone {
        Tone::Good => Color::Green,
        Tone::Bad => Color::Red,
    }
}

pub(crate) fn health_color(class: HealthClass) -> Color {
    match class {
        HealthClass::Unknown => Color::DarkGray,
        HealthClass::Healthy => Color::Green,
        HealthClass::Unhealthy => Color::Red,
    }
}
