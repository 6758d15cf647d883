//! HubRelay - Forward-action relay for home-automation hubs.
//!
//! The hub posts each forward action as JSON to one endpoint. The relay hands
//! the payload to a local listener and re-posts it, byte for byte, to every
//! URL in the configured forward chain.
//!
//! ## Architecture
//!
//! ```text
//! Hub → POST /neeo/forwardactions → Listener
//!                                 ↘ ForwardPool → subscriber URLs
//! ```
//!
//! The `hub-relay` binary wires in [`LogListener`]. [`BroadcastListener`] is
//! for embedding the router in a larger process that wants to observe actions
//! in-process: subscribe before serving and pass it to [`AppState::new`].

pub mod config;
pub mod forward;
pub mod listener;
pub mod web;

// Re-export commonly used types
pub use config::Config;
pub use forward::{ForwardChain, ForwardError, ForwardPool, ForwardReport};
pub use listener::{BroadcastListener, ForwardActionListener, LogListener};
pub use web::{router, AppState};
