use log_shipper::app::router::main_router;
use log_shipper::app::server::serve_on;
use log_shipper::app::state::AppState;
use log_shipper::config::Settings;
use log_shipper::domain::LogRecord;
use std::net::SocketAddr;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path},
};

/// Serve the real router on an ephemeral port with the given sink URLs.
async fn spawn_app(elasticsearch_url: String, logstash_url: String) -> SocketAddr {
    let settings = Settings::from_lookup(|name| match name {
        "ELASTICSEARCH_URL" => Some(elasticsearch_url.clone()),
        "LOGSTASH_URL" => Some(logstash_url.clone()),
        _ => None,
    })
    .unwrap();

    let app = main_router(AppState::from_settings(&settings).unwrap());
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        serve_on(listener, app, std::future::pending()).await.unwrap();
    });

    addr
}

fn closed_port_url(route: &str) -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{port}{route}")
}

#[tokio::test]
async fn test_elasticsearch_round_trip_through_mock_sink() {
    let elasticsearch = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/app-logs/_doc"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&elasticsearch)
        .await;

    let addr = spawn_app(
        format!("{}/app-logs/_doc", elasticsearch.uri()),
        closed_port_url("/"),
    )
    .await;

    let response = reqwest::get(format!("http://{addr}/test-elasticsearch"))
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 200);
    let body: serde_json::Value = serde_json::from_str(&response.text().await.unwrap()).unwrap();
    assert_eq!(body, serde_json::json!({ "status": "success" }));

    let requests = elasticsearch.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    let record: LogRecord = requests[0].body_json().unwrap();
    assert_eq!(record.level(), "INFO");
    assert_eq!(record.service(), "go-development");
    assert_eq!(record.message(), "Test message from Go to Elasticsearch");

    let data = record.data().unwrap();
    assert_eq!(data["action"], "test_log");
    let ip_address = data["ip_address"].as_str().unwrap();
    assert!(
        ip_address.starts_with("127.0.0.1:"),
        "unexpected remote address {ip_address}"
    );
}

#[tokio::test]
async fn test_logstash_round_trip_through_mock_sink() {
    let logstash = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&logstash)
        .await;

    let addr = spawn_app(closed_port_url("/app-logs/_doc"), logstash.uri()).await;

    let client = reqwest::Client::new();
    let response = client
        .post(format!("http://{addr}/test-logstash"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 200);

    let requests = logstash.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    let record: LogRecord = requests[0].body_json().unwrap();
    assert_eq!(record.message(), "Test message from Go to Logstash");
    assert_eq!(record.data().unwrap()["user_id"], 789);
}

#[tokio::test]
async fn test_unreachable_sinks_return_500_plain_text() {
    let addr = spawn_app(closed_port_url("/app-logs/_doc"), closed_port_url("/")).await;

    for route in ["test-elasticsearch", "test-logstash"] {
        let response = reqwest::get(format!("http://{addr}/{route}")).await.unwrap();
        assert_eq!(response.status().as_u16(), 500, "route {route}");

        let content_type = response
            .headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();
        assert!(content_type.starts_with("text/plain"), "route {route}");
        assert!(!response.text().await.unwrap().is_empty(), "route {route}");
    }

    // Listener keeps serving after sink failures.
    let health = reqwest::get(format!("http://{addr}/health")).await.unwrap();
    assert_eq!(health.status().as_u16(), 200);
}
