//! Error types for pulse

use thiserror::Error;

/// The main error type for pulse operations
///
/// None of these are recovered internally: each one propagates to the
/// top-level handler, which logs it and terminates the process. Restart
/// responsibility sits with the service supervisor.
#[derive(Error, Debug)]
pub enum Error {
    /// Settings files missing, malformed, or failing validation
    #[error("Configuration error: {0}")]
    Config(String),

    /// Transport-level failure to reach or authenticate with the broker
    #[error("Connection error: {0}")]
    Connection(String),

    /// Channel or exchange/queue/binding declaration failure
    #[error("Topology error: {0}")]
    Topology(String),

    /// A single heartbeat the broker did not accept
    #[error("Publish error: {0}")]
    Publish(String),
}

/// A specialized Result type for pulse operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::Config("client.json: missing".to_string());
        assert_eq!(err.to_string(), "Configuration error: client.json: missing");

        let err = Error::Connection("connection refused".to_string());
        assert_eq!(err.to_string(), "Connection error: connection refused");

        let err = Error::Publish("channel closed".to_string());
        assert_eq!(err.to_string(), "Publish error: channel closed");
    }
}
