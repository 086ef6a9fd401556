//! Settings schema definitions

use serde::{Deserialize, Serialize};

/// Wrapper matching the top-level `"client"` key of `client.json`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientDocument {
    pub client: ClientIdentity,
}

/// Identity announced in every heartbeat
///
/// Immutable for the process lifetime; loaded once at startup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientIdentity {
    /// Client name as known to the monitoring backend
    pub name: String,
    /// Network address the client is reachable at
    pub address: String,
    /// Subscription topics, in announcement order
    #[serde(default)]
    pub subscriptions: Vec<String>,
}

/// Wrapper matching the top-level `"rabbitmq"` key of `rabbitmq.json`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrokerDocument {
    pub rabbitmq: BrokerSettings,
}

/// Broker endpoint and credentials
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrokerSettings {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    /// Vhost namespace; may itself contain `/`, which the connection
    /// address must percent-escape
    pub vhost: String,
}

impl Default for BrokerSettings {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 5672,
            user: "guest".to_string(),
            password: "guest".to_string(),
            vhost: "/".to_string(),
        }
    }
}

/// Settings assembled from both documents
#[derive(Debug, Clone)]
pub struct Settings {
    pub client: ClientIdentity,
    pub broker: BrokerSettings,
}

/// Logging configuration
///
/// Not part of the two settings documents; defaults below, with
/// `RUST_LOG` and `LOG_FORMAT` environment overrides.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log format (text, json)
    #[serde(default = "default_log_format")]
    pub format: String,
    /// Directory for log files
    #[serde(default = "default_log_dir")]
    pub dir: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "text".to_string()
}

fn default_log_dir() -> String {
    "logs".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            dir: default_log_dir(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_broker_settings_default() {
        let settings = BrokerSettings::default();
        assert_eq!(settings.host, "localhost");
        assert_eq!(settings.port, 5672);
        assert_eq!(settings.vhost, "/");
    }

    #[test]
    fn test_client_document_deserializes_wrapper_key() {
        let doc: ClientDocument = serde_json::from_str(
            r#"{"client":{"name":"host1","address":"10.0.0.5","subscriptions":["db","web"]}}"#,
        )
        .unwrap();
        assert_eq!(doc.client.name, "host1");
        assert_eq!(doc.client.address, "10.0.0.5");
        assert_eq!(doc.client.subscriptions, vec!["db", "web"]);
    }

    #[test]
    fn test_client_subscriptions_default_empty() {
        let doc: ClientDocument =
            serde_json::from_str(r#"{"client":{"name":"host1","address":"10.0.0.5"}}"#).unwrap();
        assert!(doc.client.subscriptions.is_empty());
    }

    #[test]
    fn test_broker_document_deserializes_wrapper_key() {
        let doc: BrokerDocument = serde_json::from_str(
            r#"{"rabbitmq":{"port":5672,"host":"localhost","user":"guest","password":"guest","vhost":"/"}}"#,
        )
        .unwrap();
        assert_eq!(doc.rabbitmq, BrokerSettings::default());
    }
}
