use crate::app::state::AppState;
use crate::handler::health::health_handler;
use crate::handler::trigger::{test_elasticsearch_handler, test_logstash_handler};
use axum::Router;
use axum::routing::get;

/// Build the HTTP router (health + both trigger endpoints).
pub fn main_router(state: AppState) -> Router {
    let health_router = Router::new().route("/health", get(health_handler));

    let trigger_router = Router::new()
        .route(
            "/test-elasticsearch",
            get(test_elasticsearch_handler).post(test_elasticsearch_handler),
        )
        .route(
            "/test-logstash",
            get(test_logstash_handler).post(test_logstash_handler),
        )
        .with_state(state);

    Router::new().merge(health_router).merge(trigger_router)
}
