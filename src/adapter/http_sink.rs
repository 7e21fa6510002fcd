use crate::domain::LogRecord;
use crate::error::{SendError, ShipperError};
use crate::port::LogSink;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Url};
use std::future::Future;
use std::pin::Pin;
use tracing::{debug, info};

const USER_AGENT: &str = concat!("log-shipper/", env!("CARGO_PKG_VERSION"));

/// Builds the HTTP client shared by every sink.
pub fn build_client() -> Result<Client, ShipperError> {
    Client::builder()
        .user_agent(USER_AGENT)
        .build()
        .map_err(|e| ShipperError::HttpClient(e.to_string()))
}

/// Sink that POSTs each record as a JSON document to a fixed URL.
///
/// Any HTTP response counts as delivered; only transport failures are errors.
#[derive(Debug, Clone)]
pub struct HttpSink {
    name: &'static str,
    client: Client,
    url: Url,
}

impl HttpSink {
    pub fn new(name: &'static str, client: Client, url: Url) -> Self {
        Self { name, client, url }
    }

    /// Search sink (document index endpoint).
    pub fn elasticsearch(client: Client, url: Url) -> Self {
        Self::new("Elasticsearch", client, url)
    }

    /// Pipeline sink (HTTP input plugin).
    pub fn logstash(client: Client, url: Url) -> Self {
        Self::new("Logstash", client, url)
    }

    async fn post(&self, record: LogRecord) -> Result<(), SendError> {
        let body = serde_json::to_vec(&record)?;

        let response = self
            .client
            .post(self.url.clone())
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| SendError::Transport {
                sink: self.name,
                source: Box::new(e),
            })?;

        debug!(
            "{} answered with status {}",
            self.name,
            response.status().as_u16()
        );
        // Body is never read; dropping the response releases the connection.
        drop(response);

        info!("Sent to {}: {:?}", self.name, record);
        Ok(())
    }
}

impl LogSink for HttpSink {
    fn name(&self) -> &'static str {
        self.name
    }

    fn send(
        &self,
        record: LogRecord,
    ) -> Pin<Box<dyn Future<Output = Result<(), SendError>> + Send + '_>> {
        Box::pin(self.post(record))
    }
}
