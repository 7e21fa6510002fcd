pub mod log_record;

pub use log_record::{ENVIRONMENT, LogRecord, Payload, SERVICE_NAME};
