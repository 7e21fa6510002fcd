use tracing_subscriber::{EnvFilter, fmt, prelude::*};

const DEFAULT_DIRECTIVES: &str = "info";

/// Initialize the tracing subscriber.
/// Uses JSON format unless `RUST_LOG_FORMAT` is set to something other than `json`.
pub fn init_tracing() {
    let use_json = std::env::var("RUST_LOG_FORMAT")
        .map(|v| v == "json")
        .unwrap_or(true);

    let filter = env_filter(std::env::var("RUST_LOG").ok().as_deref());

    if use_json {
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .json()
                    .flatten_event(true)
                    .with_current_span(true),
            )
            .with(filter)
            .init();
    } else {
        tracing_subscriber::registry()
            .with(fmt::layer())
            .with(filter)
            .init();
    }
}

/// `RUST_LOG` directives replace the `info` default entirely; unset, empty or
/// unparsable values fall back to it.
fn env_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .filter(|d| !d.trim().is_empty())
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_DIRECTIVES))
}
