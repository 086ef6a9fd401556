//! Heartbeat publication

use async_trait::async_trait;
use lapin::options::BasicPublishOptions;
use lapin::types::ShortString;
use lapin::{BasicProperties, Channel};
use tracing::debug;

use pulse_core::config::schema::ClientIdentity;
use pulse_core::heartbeat::{Heartbeat, Publisher, KEEPALIVE_TOPOLOGY};
use pulse_core::{Error, Result};

/// Delivery-mode hint asking the broker to keep the message across its
/// own restarts; the queue itself is in-memory only.
const DELIVERY_MODE_PERSISTENT: u8 = 2;

/// Publishes one heartbeat per call onto the keepalive exchange
///
/// Owns the channel for the process lifetime; every publish reuses it.
pub struct KeepalivePublisher {
    channel: Channel,
    identity: ClientIdentity,
}

impl KeepalivePublisher {
    pub fn new(channel: Channel, identity: ClientIdentity) -> Self {
        Self { channel, identity }
    }
}

#[async_trait]
impl Publisher for KeepalivePublisher {
    async fn publish(&self) -> Result<()> {
        let heartbeat = Heartbeat::now(&self.identity);
        let payload =
            serde_json::to_vec(&heartbeat).map_err(|e| Error::Publish(e.to_string()))?;

        let properties = BasicProperties::default()
            .with_content_type(ShortString::from("application/octet-stream"))
            .with_delivery_mode(DELIVERY_MODE_PERSISTENT)
            .with_priority(0);

        // Routing key stays empty to match the queue binding.
        self.channel
            .basic_publish(
                KEEPALIVE_TOPOLOGY,
                "",
                BasicPublishOptions::default(),
                &payload,
                properties,
            )
            .await
            .map_err(|e| Error::Publish(e.to_string()))?
            .await
            .map_err(|e| Error::Publish(e.to_string()))?;

        debug!(
            "Published heartbeat for {} at {}",
            heartbeat.name, heartbeat.timestamp
        );
        Ok(())
    }
}
