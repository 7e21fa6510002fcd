use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Error, Debug)]
pub enum ShipperError {
    #[error("Failed to load configuration: {0}")]
    Config(String),

    #[error("Failed to build HTTP client: {0}")]
    HttpClient(String),

    #[error("Failed to bind to address {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Server error: {0}")]
    Server(#[from] std::io::Error),
}

/// Failure of a single sink delivery attempt.
#[derive(Error, Debug)]
pub enum SendError {
    #[error("Failed to serialize log record: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Failed to send log record to {sink}: {source}")]
    Transport {
        sink: &'static str,
        #[source]
        source: BoxError,
    },
}

impl IntoResponse for SendError {
    fn into_response(self) -> Response {
        (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()).into_response()
    }
}
