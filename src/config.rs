use std::env;
use std::time::Duration;

use reqwest::Url;

use crate::error::ShipperError;

pub const DEFAULT_HTTP_PORT: u16 = 8080;
pub const DEFAULT_ELASTICSEARCH_URL: &str = "http://elasticsearch-master:9200/app-logs/_doc";
pub const DEFAULT_LOGSTASH_URL: &str = "http://logstash-server:8080";
pub const DEFAULT_STARTUP_LOG_DELAY_SECS: u64 = 5;

#[derive(Debug, Clone)]
pub struct Settings {
    /// HTTP listener port (health + trigger endpoints)
    pub http_port: u16,
    /// Search sink document endpoint
    pub elasticsearch_url: Url,
    /// Pipeline sink HTTP input
    pub logstash_url: Url,
    /// Delay before the one-shot startup record is sent
    pub startup_delay: Duration,
}

impl Settings {
    /// Builds settings from a variable lookup, falling back to the defaults for
    /// anything the lookup does not provide.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ShipperError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let http_port = match lookup("HTTP_PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|e| ShipperError::Config(format!("Invalid HTTP_PORT {raw:?}: {e}")))?,
            None => DEFAULT_HTTP_PORT,
        };

        let elasticsearch_url = parse_url(
            "ELASTICSEARCH_URL",
            &lookup("ELASTICSEARCH_URL").unwrap_or_else(|| DEFAULT_ELASTICSEARCH_URL.to_string()),
        )?;
        let logstash_url = parse_url(
            "LOGSTASH_URL",
            &lookup("LOGSTASH_URL").unwrap_or_else(|| DEFAULT_LOGSTASH_URL.to_string()),
        )?;

        let startup_delay_secs = match lookup("STARTUP_LOG_DELAY_SECS") {
            Some(raw) => raw.trim().parse::<u64>().map_err(|e| {
                ShipperError::Config(format!("Invalid STARTUP_LOG_DELAY_SECS {raw:?}: {e}"))
            })?,
            None => DEFAULT_STARTUP_LOG_DELAY_SECS,
        };

        let settings = Settings {
            http_port,
            elasticsearch_url,
            logstash_url,
            startup_delay: Duration::from_secs(startup_delay_secs),
        };

        // Validate settings before returning
        settings.validate()?;

        Ok(settings)
    }

    /// Validates the settings and returns an error if invalid.
    pub fn validate(&self) -> Result<(), ShipperError> {
        validate_port(self.http_port)?;
        validate_scheme(&self.elasticsearch_url)?;
        validate_scheme(&self.logstash_url)?;
        Ok(())
    }
}

/// Validates that the port is in valid range (1-65535).
fn validate_port(port: u16) -> Result<(), ShipperError> {
    if port == 0 {
        return Err(ShipperError::Config("Port cannot be 0".into()));
    }
    Ok(())
}

fn validate_scheme(url: &Url) -> Result<(), ShipperError> {
    match url.scheme() {
        "http" | "https" => Ok(()),
        other => Err(ShipperError::Config(format!(
            "Unsupported sink URL scheme {other:?} in {url}"
        ))),
    }
}

fn parse_url(name: &str, raw: &str) -> Result<Url, ShipperError> {
    raw.trim()
        .parse::<Url>()
        .map_err(|e| ShipperError::Config(format!("Invalid {name} {raw:?}: {e}")))
}

/// Reads settings from the process environment.
pub fn get_configuration() -> Result<Settings, ShipperError> {
    Settings::from_lookup(|name| env::var(name).ok())
}
