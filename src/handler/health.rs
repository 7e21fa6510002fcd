use crate::domain::{ENVIRONMENT, SERVICE_NAME};
use axum::Json;
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;

#[derive(Serialize, Debug)]
pub struct HealthResponse {
    pub status: &'static str,
    pub timestamp: DateTime<Utc>,
    pub service: &'static str,
    pub environment: &'static str,
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    info!("Health check requested");
    Json(HealthResponse {
        status: "healthy",
        timestamp: Utc::now(),
        service: SERVICE_NAME,
        environment: ENVIRONMENT,
    })
}
