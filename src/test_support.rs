//! Shared test support utilities
//!
//! Provides `RecordingSink`, a `LogSink` double that captures delivered records
//! for use in unit and integration tests.

use crate::domain::LogRecord;
use crate::error::SendError;
use crate::port::LogSink;
use std::future::Future;
use std::pin::Pin;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

/// Mock sink that captures sent records for testing.
///
/// Every call is counted, including failed ones.
pub struct RecordingSink {
    name: &'static str,
    records: Mutex<Vec<LogRecord>>,
    attempts: AtomicUsize,
    should_fail: AtomicBool,
}

impl RecordingSink {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            records: Mutex::new(Vec::new()),
            attempts: AtomicUsize::new(0),
            should_fail: AtomicBool::new(false),
        }
    }

    /// A sink whose every send fails with a transport error.
    pub fn failing(name: &'static str) -> Self {
        let sink = Self::new(name);
        sink.set_should_fail(true);
        sink
    }

    pub fn set_should_fail(&self, fail: bool) {
        self.should_fail.store(fail, Ordering::SeqCst);
    }

    pub fn records(&self) -> Vec<LogRecord> {
        self.records
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }

    pub fn attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }
}

impl LogSink for RecordingSink {
    fn name(&self) -> &'static str {
        self.name
    }

    fn send(
        &self,
        record: LogRecord,
    ) -> Pin<Box<dyn Future<Output = Result<(), SendError>> + Send + '_>> {
        Box::pin(async move {
            self.attempts.fetch_add(1, Ordering::SeqCst);
            if self.should_fail.load(Ordering::SeqCst) {
                return Err(SendError::Transport {
                    sink: self.name,
                    source: "connection refused".into(),
                });
            }
            if let Ok(mut guard) = self.records.lock() {
                guard.push(record);
            }
            Ok(())
        })
    }
}
