//! Heartbeat payload and the timed publish loop

pub mod service;
pub mod types;

pub use service::{PublishLoop, Publisher};
pub use types::{Heartbeat, DEFAULT_PUBLISH_INTERVAL_S, KEEPALIVE_TOPOLOGY};
