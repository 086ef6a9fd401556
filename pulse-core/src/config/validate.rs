//! Settings validation rules.

use super::schema::Settings;

/// Validate settings and return aggregated validation errors.
pub fn validate_settings(settings: &Settings) -> crate::Result<()> {
    let mut errors = Vec::new();

    if settings.client.name.trim().is_empty() {
        errors.push("client.name must not be empty".to_string());
    }
    if settings.broker.host.trim().is_empty() {
        errors.push("rabbitmq.host must not be empty".to_string());
    }
    if settings.broker.port == 0 {
        errors.push("rabbitmq.port must be > 0".to_string());
    }
    if settings.broker.user.trim().is_empty() {
        errors.push("rabbitmq.user must not be empty".to_string());
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(crate::Error::Config(errors.join("; ")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::{BrokerSettings, ClientIdentity};

    fn settings() -> Settings {
        Settings {
            client: ClientIdentity {
                name: "host1".to_string(),
                address: "10.0.0.5".to_string(),
                subscriptions: vec!["db".to_string()],
            },
            broker: BrokerSettings::default(),
        }
    }

    #[test]
    fn test_validate_accepts_complete_settings() {
        validate_settings(&settings()).unwrap();
    }

    #[test]
    fn test_validate_rejects_empty_client_name() {
        let mut s = settings();
        s.client.name = "  ".to_string();

        let err = validate_settings(&s).unwrap_err();
        assert!(err.to_string().contains("client.name"));
    }

    #[test]
    fn test_validate_rejects_zero_port() {
        let mut s = settings();
        s.broker.port = 0;

        let err = validate_settings(&s).unwrap_err();
        assert!(err.to_string().contains("rabbitmq.port"));
    }

    #[test]
    fn test_validate_aggregates_all_violations() {
        let mut s = settings();
        s.client.name = String::new();
        s.broker.host = String::new();

        let err = validate_settings(&s).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("client.name"));
        assert!(msg.contains("rabbitmq.host"));
    }
}
