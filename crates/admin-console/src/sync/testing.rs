//! Scripted backend for controller and dispatcher tests.

use std::collections::HashMap;
use std::sync::{Arc, Mutex as StdMutex};
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::api::{
    ActionResponse, ApiError, Backend, HealthStatusResponse, LogBundle, LogChannel, ScriptInfo,
    ScriptsResponse, ServerHealth,
};
use crate::domain::{App, InMemoryProjects, SequencePolicy};

use super::{AutoConfirm, SyncContext};

type Scripted<T> = StdMutex<Result<T, String>>;

/// Backend answering from preset values. Errors are returned as
/// [`ApiError::Connection`] with the stored text.
pub(crate) struct MockBackend {
    scripts: Scripted<Vec<ScriptInfo>>,
    logs: StdMutex<HashMap<LogChannel, Result<LogBundle, String>>>,
    log_delay: StdMutex<Duration>,
    health: Scripted<HealthStatusResponse>,
    action: Scripted<ActionResponse>,
    calls: StdMutex<Vec<String>>,
}

impl Default for MockBackend {
    fn default() -> Self {
        Self {
            scripts: StdMutex::new(Ok(Vec::new())),
            logs: StdMutex::new(HashMap::new()),
            log_delay: StdMutex::new(Duration::ZERO),
            health: StdMutex::new(Ok(HealthStatusResponse::default())),
            action: StdMutex::new(Ok(ActionResponse {
                success: true,
                ..Default::default()
            })),
            calls: StdMutex::new(Vec::new()),
        }
    }
}

impl MockBackend {
    pub fn set_scripts(&self, value: Result<Vec<ScriptInfo>, String>) {
        *self.scripts.lock().unwrap() = value;
    }

    pub fn set_logs(&self, channel: LogChannel, value: Result<LogBundle, String>) {
        self.logs.lock().unwrap().insert(channel, value);
    }

    pub fn set_log_delay(&self, delay: Duration) {
        *self.log_delay.lock().unwrap() = delay;
    }

    pub fn set_health(&self, value: Result<HealthStatusResponse, String>) {
        *self.health.lock().unwrap() = value;
    }

    pub fn set_action(&self, value: Result<ActionResponse, String>) {
        *self.action.lock().unwrap() = value;
    }

    /// Request log, e.g. `"GET /api/logs"`.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl Backend for MockBackend {
    async fn list_scripts(&self) -> Result<ScriptsResponse, ApiError> {
        self.record("GET /api/scripts".into());
        self.scripts
            .lock()
            .unwrap()
            .clone()
            .map(|scripts| ScriptsResponse { scripts })
            .map_err(ApiError::Connection)
    }

    async fn run_script(&self, name: &str) -> Result<ActionResponse, ApiError> {
        self.record(format!("GET /run/{name}"));
        self.action.lock().unwrap().clone().map_err(ApiError::Connection)
    }

    async fn fetch_logs(&self, channel: LogChannel) -> Result<LogBundle, ApiError> {
        self.record(format!("GET {}", channel.fetch_path()));
        let result = self
            .logs
            .lock()
            .unwrap()
            .get(&channel)
            .cloned()
            .unwrap_or_else(|| Ok(LogBundle::default()));
        let delay = *self.log_delay.lock().unwrap();
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        result.map_err(ApiError::Connection)
    }

    async fn clear_logs(&self, channel: LogChannel) -> Result<ActionResponse, ApiError> {
        self.record(format!("POST {}", channel.clear_path()));
        self.action.lock().unwrap().clone().map_err(ApiError::Connection)
    }

    async fn health_status(&self) -> Result<HealthStatusResponse, ApiError> {
        self.record("GET /api/health-status".into());
        self.health.lock().unwrap().clone().map_err(ApiError::Connection)
    }

    async fn server_health(&self) -> Result<ServerHealth, ApiError> {
        self.record("GET /api/health".into());
        Ok(ServerHealth {
            status: "healthy".into(),
            message: "Admin backend is running".into(),
            version: "1.0.0".into(),
        })
    }
}

/// Context over a fresh demo model that accepts every confirmation.
pub(crate) fn context(backend: Arc<MockBackend>, policy: SequencePolicy) -> SyncContext {
    let app = App::new(policy, Box::new(InMemoryProjects::demo()));
    SyncContext::new(
        Arc::new(Mutex::new(app)),
        backend,
        Arc::new(AutoConfirm(true)),
    )
}
