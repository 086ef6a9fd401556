//! Settings loading

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;

use super::schema::{BrokerDocument, ClientDocument, Settings};
use super::validate::validate_settings;

/// Document holding the client identity
const CLIENT_FILE: &str = "client.json";
/// Document holding the broker settings
const BROKER_FILE: &str = "rabbitmq.json";

/// Settings loader
///
/// Reads both documents from one directory, once, at process startup.
/// Any missing or malformed document is fatal to the caller.
pub struct ConfigLoader {
    config_dir: PathBuf,
}

impl ConfigLoader {
    /// Create a loader reading from the current working directory
    pub fn new() -> Self {
        let config_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        Self { config_dir }
    }

    /// Create a loader with a custom settings directory
    pub fn with_dir<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            config_dir: dir.as_ref().to_path_buf(),
        }
    }

    /// Load and validate both settings documents
    pub fn load(&self) -> crate::Result<Settings> {
        let client: ClientDocument = self.read_document(CLIENT_FILE)?;
        let broker: BrokerDocument = self.read_document(BROKER_FILE)?;

        let settings = Settings {
            client: client.client,
            broker: broker.rabbitmq,
        };
        validate_settings(&settings)?;
        Ok(settings)
    }

    fn read_document<T: DeserializeOwned>(&self, name: &str) -> crate::Result<T> {
        let path = self.config_dir.join(name);
        let content = std::fs::read_to_string(&path)
            .map_err(|e| crate::Error::Config(format!("{}: {}", path.display(), e)))?;
        serde_json::from_str(&content)
            .map_err(|e| crate::Error::Config(format!("{}: {}", path.display(), e)))
    }

    /// Get the settings directory path
    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const CLIENT_JSON: &str =
        r#"{"client":{"name":"host1","address":"10.0.0.5","subscriptions":["db","web"]}}"#;
    const BROKER_JSON: &str = r#"{"rabbitmq":{"port":5672,"host":"localhost","user":"guest","password":"guest","vhost":"/"}}"#;

    fn write_documents(dir: &TempDir, client: &str, broker: &str) {
        std::fs::write(dir.path().join("client.json"), client).unwrap();
        std::fs::write(dir.path().join("rabbitmq.json"), broker).unwrap();
    }

    #[test]
    fn test_load_both_documents() {
        let temp_dir = TempDir::new().unwrap();
        write_documents(&temp_dir, CLIENT_JSON, BROKER_JSON);

        let settings = ConfigLoader::with_dir(temp_dir.path()).load().unwrap();
        assert_eq!(settings.client.name, "host1");
        assert_eq!(settings.client.subscriptions, vec!["db", "web"]);
        assert_eq!(settings.broker.port, 5672);
        assert_eq!(settings.broker.vhost, "/");
    }

    #[test]
    fn test_load_missing_client_document() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("rabbitmq.json"), BROKER_JSON).unwrap();

        let err = ConfigLoader::with_dir(temp_dir.path()).load().unwrap_err();
        assert!(matches!(err, crate::Error::Config(_)));
        assert!(err.to_string().contains("client.json"));
    }

    #[test]
    fn test_load_missing_broker_document() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("client.json"), CLIENT_JSON).unwrap();

        let err = ConfigLoader::with_dir(temp_dir.path()).load().unwrap_err();
        assert!(err.to_string().contains("rabbitmq.json"));
    }

    #[test]
    fn test_load_malformed_document() {
        let temp_dir = TempDir::new().unwrap();
        write_documents(&temp_dir, "{not json", BROKER_JSON);

        let err = ConfigLoader::with_dir(temp_dir.path()).load().unwrap_err();
        assert!(matches!(err, crate::Error::Config(_)));
        assert!(err.to_string().contains("client.json"));
    }

    #[test]
    fn test_load_runs_validation() {
        let temp_dir = TempDir::new().unwrap();
        write_documents(
            &temp_dir,
            r#"{"client":{"name":"","address":"10.0.0.5"}}"#,
            BROKER_JSON,
        );

        let err = ConfigLoader::with_dir(temp_dir.path()).load().unwrap_err();
        assert!(err.to_string().contains("client.name"));
    }
}
