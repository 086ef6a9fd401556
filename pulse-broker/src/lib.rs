//! RabbitMQ side of pulse
//!
//! Connection setup, keepalive topology declaration, and the heartbeat
//! publisher that feeds the core publish loop.

pub mod connection;
pub mod publisher;

pub use connection::{amqp_uri, connect, open_channel};
pub use publisher::KeepalivePublisher;
