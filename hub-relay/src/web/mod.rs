//! Web server module for receiving forward actions from the hub.
//!
//! This module provides a thin web server that:
//! - Receives forward-action events on a single POST route
//! - Hands each event to the local listener
//! - Schedules the fan-out to subscriber URLs
//! - Returns 200 OK without waiting for subscribers

pub mod handlers;

pub use handlers::{forward_actions, health, router, AppState, HealthResponse};
