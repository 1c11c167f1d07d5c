//! Client for the mock employee service the façade delegates to.
//!
//! The upstream owns storage and id assignment; this crate owns the wire
//! shapes it speaks (`employee_`-prefixed fields inside a `data`/`status`
//! envelope) and the translation to [`entity::Employee`].

use std::time::Duration;

pub mod client;
pub mod dto;

pub use client::{EmployeeClient, UpstreamError};
pub use dto::{Envelope, EmployeeRecord};

const DEFAULT_BASE_URL: &str = "http://localhost:8112/api/v1/employee";
const DEFAULT_CONNECT_TIMEOUT_MS: u64 = 3_000;
const DEFAULT_READ_TIMEOUT_MS: u64 = 10_000;

/// Connection settings for the employee service.
#[derive(Clone, Debug)]
pub struct UpstreamSettings {
    pub base_url: String,
    pub connect_timeout: Duration,
    pub read_timeout: Duration,
}

impl Default for UpstreamSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            connect_timeout: Duration::from_millis(DEFAULT_CONNECT_TIMEOUT_MS),
            read_timeout: Duration::from_millis(DEFAULT_READ_TIMEOUT_MS),
        }
    }
}

impl UpstreamSettings {
    /// Read settings from the environment, falling back to the local mock
    /// service defaults. Trailing slashes on the base URL are dropped so
    /// path joining stays predictable.
    pub fn from_env() -> Self {
        let base_url = std::env::var("UPSTREAM_BASE_URL")
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self {
            base_url,
            connect_timeout: duration_env("UPSTREAM_CONNECT_TIMEOUT_MS", DEFAULT_CONNECT_TIMEOUT_MS),
            read_timeout: duration_env("UPSTREAM_READ_TIMEOUT_MS", DEFAULT_READ_TIMEOUT_MS),
        }
    }
}

fn duration_env(key: &str, default_ms: u64) -> Duration {
    let ms = std::env::var(key)
        .ok()
        .and_then(|raw| raw.parse::<u64>().ok())
        .unwrap_or(default_ms);
    Duration::from_millis(ms)
}
