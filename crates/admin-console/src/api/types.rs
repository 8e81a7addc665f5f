//! API response types matching the admin backend's JSON payloads.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::client::ApiError;

/// A script known to the backend (`GET /api/scripts`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScriptInfo {
    pub name: String,
    #[serde(default)]
    pub exists: bool,
    /// File size in bytes (only present when the file exists).
    #[serde(default)]
    pub size: Option<u64>,
    /// Absolute path on the backend host.
    #[serde(default)]
    pub path: Option<String>,
    /// Last modification time, seconds since the Unix epoch.
    #[serde(default)]
    pub modified: Option<f64>,
}

/// Response from `GET /api/scripts`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScriptsResponse {
    pub scripts: Vec<ScriptInfo>,
}

/// Response from the log endpoints. The text is opaque.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LogBundle {
    #[serde(default)]
    pub logs: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub size: Option<u64>,
}

/// Response from the one-shot action endpoints (`/run/{name}`, clear-logs).
///
/// Failed requests come back as HTTP errors with a `detail` body, so every
/// field is optional and a missing `success` reads as failure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActionResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub detail: Option<serde_json::Value>,
}

impl ActionResponse {
    /// Reason shown to the user when the action did not succeed.
    pub fn failure_reason(&self) -> String {
        if let Some(error) = self.error.as_deref().filter(|e| !e.is_empty()) {
            return error.to_string();
        }
        match &self.detail {
            Some(serde_json::Value::String(detail)) if !detail.is_empty() => detail.clone(),
            Some(serde_json::Value::Null) | None => "Unknown error".to_string(),
            Some(other) => other.to_string(),
        }
    }

    /// Convert an application-level failure into an [`ApiError`].
    pub fn into_result(self) -> Result<Self, ApiError> {
        if self.success {
            Ok(self)
        } else {
            Err(ApiError::Rejected(self.failure_reason()))
        }
    }
}

/// Health of one monitored sub-application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthRecord {
    pub status: String,
    pub healthy: bool,
}

/// Response from `GET /api/health-status`, keyed by application file name.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HealthStatusResponse {
    #[serde(default)]
    pub health: HashMap<String, HealthRecord>,
}

/// Response from `GET /api/health` (backend liveness).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServerHealth {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub version: String,
}

/// The three log channels exposed by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogChannel {
    /// `log.txt`, shown on the logs page.
    General,
    /// WebSocket health-monitor server output.
    WebSocket,
    /// Orchestrator output.
    Orchestrator,
}

impl LogChannel {
    pub const ALL: [LogChannel; 3] = [
        LogChannel::General,
        LogChannel::WebSocket,
        LogChannel::Orchestrator,
    ];

    /// Path of the read endpoint.
    pub fn fetch_path(&self) -> &'static str {
        match self {
            LogChannel::General => "/api/logs",
            LogChannel::WebSocket => "/api/ws-logs",
            LogChannel::Orchestrator => "/api/orchestrator-logs",
        }
    }

    /// Path of the clear endpoint.
    pub fn clear_path(&self) -> &'static str {
        match self {
            LogChannel::General => "/clear-logs",
            LogChannel::WebSocket => "/api/clear-ws-logs",
            LogChannel::Orchestrator => "/api/clear-orchestrator-logs",
        }
    }

    /// Human-readable channel name used in messages.
    pub fn label(&self) -> &'static str {
        match self {
            LogChannel::General => "Logs",
            LogChannel::WebSocket => "WebSocket logs",
            LogChannel::Orchestrator => "Orchestrator logs",
        }
    }
}
