//! Command-line and environment configuration.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use reqwest::Url;
use thiserror::Error;

use crate::domain::SequencePolicy;

/// Admin Console: terminal dashboard for the admin backend
#[derive(Parser, Debug, Clone)]
#[command(name = "admin-console")]
#[command(about = "TUI dashboard for the admin backend: scripts, logs and health status")]
pub struct ConsoleArgs {
    /// Base URL of the admin backend
    #[arg(short, long, env = "ADMIN_CONSOLE_ENDPOINT", default_value = "http://127.0.0.1:8000")]
    pub endpoint: String,

    /// Poll interval of the active page, in milliseconds
    #[arg(long, env = "ADMIN_CONSOLE_POLL_MS", default_value_t = 3000)]
    pub poll_ms: u64,

    /// Interval of the demo project status simulator, in milliseconds
    #[arg(long, env = "ADMIN_CONSOLE_SIMULATE_MS", default_value_t = 10_000)]
    pub simulate_ms: u64,

    /// Per-request timeout, in seconds
    #[arg(long, env = "ADMIN_CONSOLE_TIMEOUT_SECS", default_value_t = 10)]
    pub timeout_secs: u64,

    /// Probability that a simulated status change is healthy
    #[arg(long, env = "ADMIN_CONSOLE_HEALTHY_PROBABILITY", default_value_t = 0.8)]
    pub healthy_probability: f64,

    /// Discard responses that resolve after a newer one for the same panel
    #[arg(long, env = "ADMIN_CONSOLE_REJECT_STALE")]
    pub reject_stale: bool,

    /// File receiving the console's own logs
    #[arg(long, env = "ADMIN_CONSOLE_LOG_FILE", default_value = "admin-console.log")]
    pub log_file: PathBuf,

    /// Log filter (overridden by RUST_LOG)
    #[arg(long, env = "ADMIN_CONSOLE_LOG_LEVEL", default_value = "info")]
    pub log_level: String,
}

/// Validated console configuration.
#[derive(Debug, Clone)]
pub struct ConsoleConfig {
    pub endpoint: Url,
    pub poll_interval: Duration,
    pub simulate_interval: Duration,
    pub request_timeout: Duration,
    pub healthy_probability: f64,
    pub sequence_policy: SequencePolicy,
    pub log_file: PathBuf,
    pub log_level: String,
}

impl ConsoleConfig {
    /// Validate configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !matches!(self.endpoint.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidEndpoint(format!(
                "unsupported scheme '{}'",
                self.endpoint.scheme()
            )));
        }

        if self.poll_interval.is_zero() {
            return Err(ConfigError::InvalidInterval("poll interval cannot be 0".into()));
        }
        if self.simulate_interval.is_zero() {
            return Err(ConfigError::InvalidInterval(
                "simulate interval cannot be 0".into(),
            ));
        }
        if self.request_timeout.is_zero() {
            return Err(ConfigError::InvalidInterval(
                "request timeout cannot be 0".into(),
            ));
        }

        if !(0.0..=1.0).contains(&self.healthy_probability) {
            return Err(ConfigError::InvalidProbability(self.healthy_probability));
        }

        Ok(())
    }
}

impl TryFrom<ConsoleArgs> for ConsoleConfig {
    type Error = ConfigError;

    fn try_from(args: ConsoleArgs) -> Result<Self, Self::Error> {
        let endpoint = Url::parse(&args.endpoint)
            .map_err(|e| ConfigError::InvalidEndpoint(format!("{}: {e}", args.endpoint)))?;

        let config = Self {
            endpoint,
            poll_interval: Duration::from_millis(args.poll_ms),
            simulate_interval: Duration::from_millis(args.simulate_ms),
            request_timeout: Duration::from_secs(args.timeout_secs),
            healthy_probability: args.healthy_probability,
            sequence_policy: if args.reject_stale {
                SequencePolicy::RejectStale
            } else {
                SequencePolicy::LastResolvedWins
            },
            log_file: args.log_file,
            log_level: args.log_level,
        };
        config.validate()?;
        Ok(config)
    }
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Endpoint is not an http(s) URL
    #[error("invalid endpoint: {0}")]
    InvalidEndpoint(String),
    /// Zero-length period or timeout
    #[error("invalid interval: {0}")]
    InvalidInterval(String),
    /// Probability outside [0, 1]
    #[error("healthy probability must be within [0, 1], got {0}")]
    InvalidProbability(f64),
}
