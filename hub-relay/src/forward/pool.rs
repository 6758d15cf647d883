//! Background worker pool for fan-out jobs.
//!
//! Each dispatched forward action becomes one tokio task. A semaphore caps how
//! many of those tasks talk to subscribers at the same time; the rest wait for
//! a permit. Jobs carry no ordering guarantee relative to each other.

use std::sync::Arc;

use reqwest::Client;
use tokio::sync::Semaphore;
use tokio::task::JoinHandle;
use tracing::{info, warn};

use super::chain::ForwardChain;
use super::sender::{forward_all, ForwardReport};
use crate::Config;

/// Shared pool that runs forward jobs off the request path.
#[derive(Clone)]
pub struct ForwardPool {
    client: Client,
    permits: Arc<Semaphore>,
}

impl ForwardPool {
    /// Create a pool running at most `concurrency` jobs at once (minimum 1).
    pub fn new(client: Client, concurrency: usize) -> Self {
        Self {
            client,
            permits: Arc::new(Semaphore::new(concurrency.max(1))),
        }
    }

    /// Build the shared client and pool from configuration.
    ///
    /// The client keeps the transport's default timeout unless one is configured.
    pub fn from_config(config: &Config) -> Result<Self, reqwest::Error> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.forward_timeout() {
            builder = builder.timeout(timeout);
        }

        Ok(Self::new(builder.build()?, config.worker_concurrency))
    }

    /// Schedule `json` for delivery to every target in `chain`.
    ///
    /// Returns `None` without spawning anything when the chain has no targets.
    /// Callers may drop the handle; the job keeps running.
    pub fn dispatch(&self, chain: &ForwardChain, json: String) -> Option<JoinHandle<ForwardReport>> {
        if chain.is_empty() {
            return None;
        }

        let targets = chain.targets();
        if targets.is_empty() {
            return None;
        }

        info!(targets = targets.len(), body_length = json.len(), "forward_job_scheduled");

        let client = self.client.clone();
        let permits = Arc::clone(&self.permits);

        Some(tokio::spawn(async move {
            let _permit = match permits.acquire_owned().await {
                Ok(permit) => Some(permit),
                Err(e) => {
                    warn!(error = %e, "forward_pool_closed");
                    None
                }
            };

            forward_all(&client, &targets, &json).await
        }))
    }

    /// Number of jobs that could start right now.
    pub fn available(&self) -> usize {
        self.permits.available_permits()
    }
}
