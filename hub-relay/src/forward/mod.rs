//! Forwarding module for relaying forward actions to subscriber URLs.
//!
//! This module provides:
//! - The forward chain, split into targets at request time
//! - A sender that POSTs one payload to one target
//! - A worker pool that runs each fan-out as a background job
//!
//! ## Flow
//!
//! ```text
//! Handler → ForwardPool::dispatch() → forward_all() → forward_one() per target
//! ```

pub mod chain;
pub mod pool;
pub mod sender;

pub use chain::ForwardChain;
pub use pool::ForwardPool;
pub use sender::{forward_all, forward_one, ForwardError, ForwardReport};
