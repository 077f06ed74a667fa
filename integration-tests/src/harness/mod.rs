pub mod access_log;
pub mod tracing;

pub use access_log::{AccessLog, T0};
pub use tracing::{CapturedEvent, capture_events};
