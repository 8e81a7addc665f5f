//! Scripted backend answering from JSON fixtures keyed by endpoint path.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;

use admin_console::api::{
    ActionResponse, ApiError, Backend, HealthStatusResponse, LogBundle, LogChannel,
    ScriptsResponse, ServerHealth,
};

/// One scripted reply: a JSON body, or a transport failure.
#[derive(Debug, Clone)]
enum Reply {
    Body(Value),
    Unreachable(String),
}

/// Backend whose every endpoint answers a preset JSON body.
///
/// Bodies go through the same serde types as the real client, so fixtures
/// are written exactly as the backend sends them.
#[derive(Default)]
pub struct FixtureBackend {
    replies: Mutex<HashMap<String, Reply>>,
    delays: Mutex<HashMap<String, Duration>>,
    calls: Mutex<Vec<String>>,
}

impl FixtureBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `path` with `body`.
    pub fn reply(&self, path: &str, body: Value) -> &Self {
        self.replies
            .lock()
            .unwrap()
            .insert(path.to_string(), Reply::Body(body));
        self
    }

    /// Fail `path` as if the backend were down.
    pub fn unreachable(&self, path: &str, reason: &str) -> &Self {
        self.replies
            .lock()
            .unwrap()
            .insert(path.to_string(), Reply::Unreachable(reason.to_string()));
        self
    }

    /// Delay every answer on `path`.
    pub fn delay(&self, path: &str, delay: Duration) -> &Self {
        self.delays.lock().unwrap().insert(path.to_string(), delay);
        self
    }

    /// Requests seen so far, as `"METHOD /path"`.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn count(&self, call: &str) -> usize {
        self.calls().iter().filter(|c| c.as_str() == call).count()
    }

    async fn answer<T: serde::de::DeserializeOwned>(
        &self,
        method: &str,
        path: &str,
    ) -> Result<T, ApiError> {
        self.calls.lock().unwrap().push(format!("{method} {path}"));
        let reply = self.replies.lock().unwrap().get(path).cloned();
        let delay = self.delays.lock().unwrap().get(path).copied();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        match reply {
            Some(Reply::Body(body)) => {
                serde_json::from_value(body).map_err(|e| ApiError::Parse(e.to_string()))
            }
            Some(Reply::Unreachable(reason)) => Err(ApiError::Connection(reason)),
            None => Err(ApiError::Parse(format!("no fixture for {path}"))),
        }
    }
}

#[async_trait]
impl Backend for FixtureBackend {
    async fn list_scripts(&self) -> Result<ScriptsResponse, ApiError> {
        self.answer("GET", "/api/scripts").await
    }

    async fn run_script(&self, name: &str) -> Result<ActionResponse, ApiError> {
        self.answer("GET", &format!("/run/{name}")).await
    }

    async fn fetch_logs(&self, channel: LogChannel) -> Result<LogBundle, ApiError> {
        self.answer("GET", channel.fetch_path()).await
    }

    async fn clear_logs(&self, channel: LogChannel) -> Result<ActionResponse, ApiError> {
        self.answer("POST", channel.clear_path()).await
    }

    async fn health_status(&self) -> Result<HealthStatusResponse, ApiError> {
        self.answer("GET", "/api/health-status").await
    }

    async fn server_health(&self) -> Result<ServerHealth, ApiError> {
        self.answer("GET", "/api/health").await
    }
}
