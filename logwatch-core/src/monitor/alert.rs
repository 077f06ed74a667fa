use serde::Serialize;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertState {
    Normal,
    Alerting,
}

/// An alert state transition.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize)]
pub struct AlertEvent {
    /// The state just entered.
    pub state: AlertState,
    /// Hits summed over the window when the transition happened.
    pub hits: u64,
    /// The second at which the transition happened.
    pub tick: i64,
}

/// Receives alert transitions from a [`TrafficMonitor`](super::TrafficMonitor).
pub trait AlertSink {
    fn on_alert(&mut self, event: AlertEvent);
}

impl AlertSink for Vec<AlertEvent> {
    fn on_alert(&mut self, event: AlertEvent) {
        self.push(event);
    }
}
