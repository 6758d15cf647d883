//! Local listeners notified of every forward action before it is relayed.

use tokio::sync::broadcast;
use tracing::{debug, info};

/// Callback invoked synchronously with each received forward action.
pub trait ForwardActionListener: Send + Sync {
    fn post(&self, json: &str);
}

/// Logs each forward action.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogListener;

impl ForwardActionListener for LogListener {
    fn post(&self, json: &str) {
        info!(body_length = json.len(), "forward_action_received");
        debug!(payload = %json, "forward_action_payload");
    }
}

/// Publishes each forward action on a broadcast channel for in-process consumers.
#[derive(Debug, Clone)]
pub struct BroadcastListener {
    sender: broadcast::Sender<String>,
}

impl BroadcastListener {
    /// Create a listener buffering up to `capacity` actions per subscriber.
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<String> {
        self.sender.subscribe()
    }
}

impl ForwardActionListener for BroadcastListener {
    fn post(&self, json: &str) {
        // Err only means nobody is subscribed.
        if self.sender.send(json.to_owned()).is_err() {
            debug!("forward_action_no_subscribers");
        }
    }
}
