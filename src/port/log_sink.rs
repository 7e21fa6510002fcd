//! LogSink trait for delivering single log records to an ingestion endpoint.
//!
//! Handlers and the startup task depend on this trait rather than on a
//! concrete HTTP client, so tests can substitute recording doubles.

use crate::domain::LogRecord;
use crate::error::SendError;
use std::future::Future;
use std::pin::Pin;

/// Destination for log records.
///
/// This trait is dyn-compatible by using boxed futures.
/// Implementations include `HttpSink` for production and
/// `RecordingSink` for testing.
pub trait LogSink: Send + Sync {
    /// Human-readable destination name, used in log lines and error text.
    fn name(&self) -> &'static str;

    /// Deliver one record. Resolves once the attempt has completed.
    fn send(
        &self,
        record: LogRecord,
    ) -> Pin<Box<dyn Future<Output = Result<(), SendError>> + Send + '_>>;
}
