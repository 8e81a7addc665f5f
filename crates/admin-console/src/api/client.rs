//! HTTP client for the admin backend.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{header, Client, Response, Url};
use serde::de::DeserializeOwned;
use thiserror::Error;

use super::types::*;

/// Errors that can occur when communicating with the admin backend.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Connection failed: {0}")]
    Connection(String),
    #[error("Failed to parse response: {0}")]
    Parse(String),
    #[error("Invalid endpoint URL: {0}")]
    InvalidUrl(String),
    /// The backend answered but reported `success: false`.
    #[error("{0}")]
    Rejected(String),
}

/// Everything the console consumes from the backend.
///
/// Panel controllers and action dispatchers only see this trait, so tests
/// can drive them with scripted responses.
#[async_trait]
pub trait Backend: Send + Sync {
    /// `GET /api/scripts`
    async fn list_scripts(&self) -> Result<ScriptsResponse, ApiError>;

    /// `GET /run/{name}`
    async fn run_script(&self, name: &str) -> Result<ActionResponse, ApiError>;

    /// `GET` the read endpoint of a log channel.
    async fn fetch_logs(&self, channel: LogChannel) -> Result<LogBundle, ApiError>;

    /// `POST` the clear endpoint of a log channel.
    async fn clear_logs(&self, channel: LogChannel) -> Result<ActionResponse, ApiError>;

    /// `GET /api/health-status`
    async fn health_status(&self) -> Result<HealthStatusResponse, ApiError>;

    /// `GET /api/health`
    async fn server_health(&self) -> Result<ServerHealth, ApiError>;
}

/// Admin backend client.
pub struct AdminApiClient {
    client: Client,
    base_url: Url,
}

impl AdminApiClient {
    /// Create a new client for the backend at `base_url`.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ApiError> {
        let base_url =
            Url::parse(base_url).map_err(|e| ApiError::InvalidUrl(format!("{base_url}: {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(ApiError::InvalidUrl(base_url.to_string()));
        }

        let client = Client::builder()
            .timeout(timeout)
            .connect_timeout(Duration::from_secs(2))
            .build()
            .map_err(ApiError::Http)?;

        Ok(Self { client, base_url })
    }

    /// Base URL requests are resolved against.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Build the URL for an endpoint path, percent-encoding each segment.
    fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(path.split('/').filter(|segment| !segment.is_empty()));
        Ok(url)
    }

    fn map_send_error(&self, e: reqwest::Error) -> ApiError {
        if e.is_connect() {
            ApiError::Connection(format!("Cannot connect to {}", self.base_url))
        } else {
            ApiError::Http(e)
        }
    }

    /// The body is decoded whatever the status code: the backend reports
    /// failures as JSON `detail` bodies on 4xx/5xx.
    async fn decode<R: DeserializeOwned>(response: Response) -> Result<R, ApiError> {
        let status = response.status();
        response
            .json()
            .await
            .map_err(|e| ApiError::Parse(format!("{e} (HTTP {status})")))
    }

    async fn get<R: DeserializeOwned>(&self, url: Url) -> Result<R, ApiError> {
        tracing::trace!(%url, "GET");
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| self.map_send_error(e))?;
        Self::decode(response).await
    }

    async fn post<R: DeserializeOwned>(&self, url: Url) -> Result<R, ApiError> {
        tracing::trace!(%url, "POST");
        let response = self
            .client
            .post(url)
            .header(header::CONTENT_TYPE, "application/json")
            .send()
            .await
            .map_err(|e| self.map_send_error(e))?;
        Self::decode(response).await
    }
}

#[async_trait]
impl Backend for AdminApiClient {
    async fn list_scripts(&self) -> Result<ScriptsResponse, ApiError> {
        self.get(self.endpoint("/api/scripts")?).await
    }

    async fn run_script(&self, name: &str) -> Result<ActionResponse, ApiError> {
        let mut url = self.endpoint("/run")?;
        url.path_segments_mut()
            .map_err(|_| ApiError::InvalidUrl(self.base_url.to_string()))?
            .push(name);
        self.get(url).await
    }

    async fn fetch_logs(&self, channel: LogChannel) -> Result<LogBundle, ApiError> {
        self.get(self.endpoint(channel.fetch_path())?).await
    }

    async fn clear_logs(&self, channel: LogChannel) -> Result<ActionResponse, ApiError> {
        self.post(self.endpoint(channel.clear_path())?).await
    }

    async fn health_status(&self) -> Result<HealthStatusResponse, ApiError> {
        self.get(self.endpoint("/api/health-status")?).await
    }

    async fn server_health(&self) -> Result<ServerHealth, ApiError> {
        self.get(self.endpoint("/api/health")?).await
    }
}
