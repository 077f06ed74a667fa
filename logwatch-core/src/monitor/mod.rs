//! High traffic alerting.
//!
//! The monitor keeps the hit count of each of the last `N` closed seconds in a ring, together
//! with their running sum. Closing a second is O(1): the oldest count falls out of the ring
//! and the newest is appended. An alert fires when the sum reaches `rate × N` and clears when
//! it drops back below; only the transitions are reported.

mod alert;
mod traffic;

#[cfg(test)]
mod tests;

pub use alert::{AlertEvent, AlertSink, AlertState};
pub use traffic::{DEFAULT_ALERT_RATE, DEFAULT_ALERT_WINDOW, TrafficMonitor};
