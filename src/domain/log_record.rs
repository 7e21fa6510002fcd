use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Service name stamped on every record this process emits.
pub const SERVICE_NAME: &str = "go-development";
/// Deployment environment stamped on every record.
pub const ENVIRONMENT: &str = "development";

/// Free-form structured payload attached to a record.
pub type Payload = Map<String, Value>;

/// One structured log line shipped to a sink.
///
/// Fields are private: a record is built once, sent once and dropped.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct LogRecord {
    timestamp: DateTime<Utc>,
    level: String,
    message: String,
    service: String,
    environment: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    data: Option<Payload>,
}

impl LogRecord {
    /// Builds a record stamped with the current time and this process's
    /// service identity.
    pub fn new(level: impl Into<String>, message: impl Into<String>, data: Option<Payload>) -> Self {
        Self {
            timestamp: Utc::now(),
            level: level.into(),
            message: message.into(),
            service: SERVICE_NAME.to_string(),
            environment: ENVIRONMENT.to_string(),
            data,
        }
    }

    /// Record emitted once after the server has come up.
    pub fn startup() -> Self {
        Self::new("INFO", "Go development server started", None)
    }

    /// Record emitted by a trigger endpoint for the named sink.
    pub fn trigger(sink_label: &str, user_id: u64, remote_addr: &str) -> Self {
        let mut data = Payload::new();
        data.insert("user_id".to_string(), Value::from(user_id));
        data.insert("action".to_string(), Value::from("test_log"));
        data.insert("ip_address".to_string(), Value::from(remote_addr));

        Self::new(
            "INFO",
            format!("Test message from Go to {sink_label}"),
            Some(data),
        )
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn level(&self) -> &str {
        &self.level
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn service(&self) -> &str {
        &self.service
    }

    pub fn environment(&self) -> &str {
        &self.environment
    }

    pub fn data(&self) -> Option<&Payload> {
        self.data.as_ref()
    }
}
