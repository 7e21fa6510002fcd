use crate::error::ShipperError;
use axum::Router;
use std::future::Future;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tokio::signal;
use tracing::info;

/// Bind `0.0.0.0:<http_port>` and serve until SIGINT/SIGTERM.
pub async fn serve(app: Router, http_port: u16) -> Result<(), ShipperError> {
    let bind_addr = format!("0.0.0.0:{http_port}");
    let listener = TcpListener::bind(&bind_addr)
        .await
        .map_err(|e| ShipperError::Bind {
            address: bind_addr.clone(),
            source: e,
        })?;
    info!("Server listening on {}", listener.local_addr()?);
    info!("  - GET       /health              (health check)");
    info!("  - GET|POST  /test-elasticsearch  (send test log to Elasticsearch)");
    info!("  - GET|POST  /test-logstash       (send test log to Logstash)");

    serve_on(listener, app, shutdown_signal()).await?;

    info!("Server shutdown complete");
    Ok(())
}

/// Serve `app` on an already bound listener until `shutdown` resolves.
///
/// Connection info is attached so handlers can read the peer address.
pub async fn serve_on<F>(listener: TcpListener, app: Router, shutdown: F) -> Result<(), ShipperError>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown)
    .await?;
    Ok(())
}

/// Wait for SIGTERM or SIGINT (Ctrl+C) for graceful shutdown.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::warn!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::warn!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("Received SIGINT, initiating graceful shutdown"),
        () = terminate => info!("Received SIGTERM, initiating graceful shutdown"),
    }
}
