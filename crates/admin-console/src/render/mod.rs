//! Pure record-to-fragment renderers shared by controllers and the UI.

mod cards;

pub use cards::{
    format_size, health_card, log_text, project_card, script_card, Badge, ProjectCard,
    ScriptCard, Tone,
};
