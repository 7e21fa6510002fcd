pub mod router;
pub mod server;
pub mod startup;
pub mod state;
pub mod tracing;

use crate::config;
use crate::error::ShipperError;

/// Application entry point. Initializes tracing, configuration, and starts the server.
pub async fn run() -> Result<(), ShipperError> {
    // Handle healthcheck subcommand (for Docker healthcheck in distroless image)
    if std::env::args().nth(1).as_deref() == Some("healthcheck") {
        let port = config::get_configuration()
            .map(|settings| settings.http_port)
            .unwrap_or(config::DEFAULT_HTTP_PORT);
        match crate::healthcheck_with_port(port).await {
            Ok(()) => std::process::exit(0),
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(1)
            }
        }
    }

    tracing::init_tracing();

    let settings = config::get_configuration()?;
    ::tracing::info!(
        "Loaded settings: elasticsearch={} logstash={}",
        settings.elasticsearch_url,
        settings.logstash_url
    );

    let app_state = state::AppState::from_settings(&settings)?;

    startup::spawn_startup_log(app_state.search_sink.clone(), settings.startup_delay);

    let app = router::main_router(app_state);

    server::serve(app, settings.http_port).await
}
