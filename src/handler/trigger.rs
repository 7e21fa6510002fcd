use crate::app::state::AppState;
use crate::domain::LogRecord;
use crate::error::SendError;
use crate::handler::RemoteAddr;
use crate::port::LogSink;
use axum::Json;
use axum::extract::State;
use serde::Serialize;
use tracing::{error, info};

const ELASTICSEARCH_USER_ID: u64 = 456;
const LOGSTASH_USER_ID: u64 = 789;

#[derive(Serialize, Debug)]
pub struct SendStatus {
    pub status: &'static str,
}

/// Handler for GET|POST /test-elasticsearch
pub async fn test_elasticsearch_handler(
    State(state): State<AppState>,
    RemoteAddr(remote_addr): RemoteAddr,
) -> Result<Json<SendStatus>, SendError> {
    forward(state.search_sink.as_ref(), ELASTICSEARCH_USER_ID, &remote_addr).await
}

/// Handler for GET|POST /test-logstash
pub async fn test_logstash_handler(
    State(state): State<AppState>,
    RemoteAddr(remote_addr): RemoteAddr,
) -> Result<Json<SendStatus>, SendError> {
    forward(state.pipeline_sink.as_ref(), LOGSTASH_USER_ID, &remote_addr).await
}

async fn forward(
    sink: &dyn LogSink,
    user_id: u64,
    remote_addr: &str,
) -> Result<Json<SendStatus>, SendError> {
    info!("Test log requested for {} from {}", sink.name(), remote_addr);

    let record = LogRecord::trigger(sink.name(), user_id, remote_addr);
    match sink.send(record).await {
        Ok(()) => Ok(Json(SendStatus { status: "success" })),
        Err(e) => {
            error!("Failed to send test log to {}: {e}", sink.name());
            Err(e)
        }
    }
}
