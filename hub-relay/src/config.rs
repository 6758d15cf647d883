//! Configuration module for environment variable parsing.
//!
//! Every setting has a default, so the relay starts with an empty environment
//! and simply forwards nothing.

use std::env;
use std::time::Duration;

use tracing::warn;

/// Route the hub posts forward actions to unless overridden.
pub const DEFAULT_FORWARD_ACTIONS_PATH: &str = "/neeo/forwardactions";

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Port for the web server to listen on
    pub port: u16,

    /// Path the forward-actions handler is mounted on
    pub forward_actions_path: String,

    /// Raw comma-separated list of subscriber URLs
    pub forward_chain: Option<String>,

    /// Maximum number of forward jobs running at once
    pub worker_concurrency: usize,

    /// Per-request timeout for forwarded POSTs, `None` keeps the transport default
    pub forward_timeout_ms: Option<u64>,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Config {
            port: parse_or("PORT", 8080),

            forward_actions_path: parse_path("FORWARD_ACTIONS_PATH"),

            forward_chain: env::var("FORWARD_CHAIN").ok(),

            worker_concurrency: parse_or("WORKER_CONCURRENCY", 16_usize).max(1),

            forward_timeout_ms: env::var("FORWARD_TIMEOUT_MS").ok().and_then(|raw| {
                match raw.trim().parse::<u64>() {
                    Ok(ms) if ms > 0 => Some(ms),
                    _ => {
                        warn!(env_var = "FORWARD_TIMEOUT_MS", value = %raw, "Invalid timeout, using transport default");
                        None
                    }
                }
            }),
        }
    }

    /// Timeout applied to each forwarded request, if configured.
    pub fn forward_timeout(&self) -> Option<Duration> {
        self.forward_timeout_ms.map(Duration::from_millis)
    }
}

/// Parse a variable, falling back to `default` when unset or invalid.
fn parse_or<T: std::str::FromStr>(name: &str, default: T) -> T {
    let raw = match env::var(name) {
        Ok(v) => v,
        Err(_) => return default,
    };

    match raw.trim().parse() {
        Ok(v) => v,
        Err(_) => {
            warn!(env_var = name, value = %raw, "Invalid value, using default");
            default
        }
    }
}

/// Parse a route path, making sure it starts with a slash.
fn parse_path(name: &str) -> String {
    match env::var(name) {
        Ok(raw) if !raw.trim().is_empty() => {
            let path = raw.trim();
            if path.starts_with('/') {
                path.to_string()
            } else {
                format!("/{}", path)
            }
        }
        _ => DEFAULT_FORWARD_ACTIONS_PATH.to_string(),
    }
}
