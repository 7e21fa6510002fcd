use crate::adapter::HttpSink;
use crate::adapter::http_sink::build_client;
use crate::config::Settings;
use crate::error::ShipperError;
use crate::port::LogSink;
use std::sync::Arc;

/// Shared application state holding the two sinks.
#[derive(Clone)]
pub struct AppState {
    /// Search/analytics store (Elasticsearch).
    pub search_sink: Arc<dyn LogSink>,
    /// Log-processing pipeline (Logstash).
    pub pipeline_sink: Arc<dyn LogSink>,
}

impl AppState {
    pub fn new(search_sink: Arc<dyn LogSink>, pipeline_sink: Arc<dyn LogSink>) -> Self {
        Self {
            search_sink,
            pipeline_sink,
        }
    }

    /// Create `AppState` from configuration settings.
    ///
    /// Both sinks share one pooled HTTP client.
    pub fn from_settings(settings: &Settings) -> Result<Self, ShipperError> {
        let client = build_client()?;

        let search_sink: Arc<dyn LogSink> = Arc::new(HttpSink::elasticsearch(
            client.clone(),
            settings.elasticsearch_url.clone(),
        ));
        let pipeline_sink: Arc<dyn LogSink> =
            Arc::new(HttpSink::logstash(client, settings.logstash_url.clone()));

        Ok(Self::new(search_sink, pipeline_sink))
    }
}
