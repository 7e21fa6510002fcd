use crate::domain::LogRecord;
use crate::port::LogSink;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Spawn the one-shot startup record.
///
/// The record is stamped when this is called and sent through `sink` once
/// `delay` has elapsed. The task is detached and has no result channel: its
/// outcome is never observed, retried or reported, and it is not cancelled on
/// shutdown.
pub fn spawn_startup_log(sink: Arc<dyn LogSink>, delay: Duration) {
    debug!(
        "Startup log to {} scheduled in {}s",
        sink.name(),
        delay.as_secs()
    );

    let record = LogRecord::startup();

    tokio::spawn(async move {
        // Give the ingestion endpoints time to come up.
        tokio::time::sleep(delay).await;
        let _ = sink.send(record).await;
    });
}
