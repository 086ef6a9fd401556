//! Heartbeat payload types

use serde::{Deserialize, Serialize};

use crate::config::schema::ClientIdentity;

/// Default publish interval: 60 seconds
pub const DEFAULT_PUBLISH_INTERVAL_S: u64 = 60;

/// Name shared by the exchange, the queue, and the binding the
/// monitoring backend consumes from
pub const KEEPALIVE_TOPOLOGY: &str = "keepalives";

/// One liveness pulse
///
/// Built fresh on every publish cycle and discarded after the publish.
/// It has no identity beyond its timestamp; duplicates are harmless to
/// the consumer. The serialized field names and order are the wire
/// contract the monitoring backend parses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Heartbeat {
    pub name: String,
    pub address: String,
    pub subscriptions: Vec<String>,
    /// Unix seconds at construction time
    pub timestamp: i64,
}

impl Heartbeat {
    /// Build a heartbeat for `identity`, stamped with the current wall clock
    pub fn now(identity: &ClientIdentity) -> Self {
        Self {
            name: identity.name.clone(),
            address: identity.address.clone(),
            subscriptions: identity.subscriptions.clone(),
            timestamp: chrono::Utc::now().timestamp(),
        }
    }
}
