//! Card renderers: pure mappings from a record to the fragment the UI draws.

use chrono::{DateTime, Utc};

use crate::api::{HealthRecord, LogBundle, LogChannel, ScriptInfo};
use crate::domain::{Project, ProjectStatus};

/// Colour family of a status badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Good,
    Bad,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Badge {
    pub text: &'static str,
    pub tone: Tone,
}

/// Rendered project card.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectCard {
    pub name: String,
    pub badge: Badge,
    pub description: String,
    pub uptime: String,
    pub response_time: String,
    pub last_check: String,
    /// Fill ratio of the status bar, 0.0 to 1.0.
    pub uptime_ratio: f64,
}

/// Rendered script card.
#[derive(Debug, Clone, PartialEq)]
pub struct ScriptCard {
    pub name: String,
    pub badge: Badge,
    pub size: String,
    pub path: String,
    pub modified: String,
    /// Whether the execute button may be enabled.
    pub runnable: bool,
}

pub fn project_card(project: &Project) -> ProjectCard {
    let tone = match project.status {
        ProjectStatus::Healthy => Tone::Good,
        ProjectStatus::Failed => Tone::Bad,
    };
    ProjectCard {
        name: project.name.clone(),
        badge: Badge {
            text: project.status.label(),
            tone,
        },
        description: project.description.clone(),
        uptime: project.uptime.clone(),
        response_time: project.response_time.clone(),
        last_check: project.last_check.clone(),
        uptime_ratio: parse_percent(&project.uptime) / 100.0,
    }
}

pub fn script_card(script: &ScriptInfo) -> ScriptCard {
    let badge = if script.exists {
        Badge {
            text: "Available",
            tone: Tone::Good,
        }
    } else {
        Badge {
            text: "Not Found",
            tone: Tone::Bad,
        }
    };
    ScriptCard {
        name: script.name.clone(),
        badge,
        size: script.size.map(format_size).unwrap_or_else(|| "N/A".to_string()),
        path: script
            .path
            .clone()
            .filter(|p| !p.is_empty())
            .unwrap_or_else(|| "Not available".to_string()),
        modified: script
            .modified
            .and_then(format_modified)
            .unwrap_or_else(|| "N/A".to_string()),
        runnable: script.exists,
    }
}

/// Status text and health flag of a health card.
pub fn health_card(record: &HealthRecord) -> (String, bool) {
    (record.status.clone(), record.healthy)
}

/// Text displayed for a log channel.
pub fn log_text(channel: LogChannel, bundle: &LogBundle) -> String {
    if let Some(logs) = bundle.logs.as_deref().filter(|l| !l.is_empty()) {
        return logs.to_string();
    }
    match channel {
        LogChannel::General => bundle
            .message
            .clone()
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| "No logs available".to_string()),
        LogChannel::WebSocket | LogChannel::Orchestrator => "No logs available".to_string(),
    }
}

/// Bytes below 1 KiB as `"N B"`, otherwise KiB with two decimals.
pub fn format_size(bytes: u64) -> String {
    if bytes < 1024 {
        format!("{} B", bytes)
    } else {
        format!("{:.2} KB", bytes as f64 / 1024.0)
    }
}

fn format_modified(epoch_secs: f64) -> Option<String> {
    if !epoch_secs.is_finite() {
        return None;
    }
    let dt = DateTime::<Utc>::from_timestamp(epoch_secs.trunc() as i64, 0)?;
    Some(dt.format("%Y-%m-%d %H:%M:%S UTC").to_string())
}

/// Leading number of a percentage string, clamped to 0..=100.
fn parse_percent(text: &str) -> f64 {
    let numeric: String = text
        .trim()
        .chars()
        .take_while(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    numeric.parse::<f64>().unwrap_or(0.0).clamp(0.0, 100.0)
}
