use crate::monitor::{AlertEvent, AlertSink, AlertState};
use std::collections::VecDeque;

pub const DEFAULT_ALERT_WINDOW: usize = 120;
pub const DEFAULT_ALERT_RATE: u64 = 10;

#[derive(Debug)]
pub struct TrafficMonitor<A> {
    // closed seconds, oldest first
    window: VecDeque<u64>,
    capacity: usize,
    window_hits: u64,

    // the open second
    open_hits: u64,
    tick: i64,

    threshold: u64,
    state: AlertState,
    sink: A,
}

impl<A: AlertSink> TrafficMonitor<A> {
    /// `rate` is the average hits per second that raises an alert when sustained over
    /// `window` seconds. A zero window is treated as one second.
    pub fn new(rate: u64, window: usize, sink: A) -> Self {
        let window = window.max(1);

        Self {
            window: VecDeque::with_capacity(window),
            capacity: window,
            window_hits: 0,
            open_hits: 0,
            tick: 0,
            threshold: rate.saturating_mul(window as u64),
            state: AlertState::Normal,
            sink,
        }
    }

    /// Aligns the monitor clock with the first record, leaving the window untouched.
    pub fn sync(&mut self, t: i64) {
        self.tick = t;
    }

    /// Counts one hit in the open second.
    pub fn hit(&mut self) {
        self.open_hits += 1;
    }

    /// Closes the open second and opens second `t`.
    pub fn tick(&mut self, t: i64) {
        if self.window.len() >= self.capacity {
            if let Some(oldest) = self.window.pop_front() {
                self.window_hits -= oldest;
            }
        }

        self.tick = t;
        self.window.push_back(self.open_hits);
        self.window_hits += self.open_hits;
        self.open_hits = 0;

        self.evaluate();
    }

    fn evaluate(&mut self) {
        let next = match self.state {
            AlertState::Normal if self.window_hits >= self.threshold => AlertState::Alerting,
            AlertState::Alerting if self.window_hits < self.threshold => AlertState::Normal,
            _ => return,
        };

        self.state = next;
        tracing::debug!(
            state = ?next,
            hits = self.window_hits,
            tick = self.tick,
            "alert state changed"
        );

        self.sink.on_alert(AlertEvent {
            state: next,
            hits: self.window_hits,
            tick: self.tick,
        });
    }

    pub fn state(&self) -> AlertState {
        self.state
    }

    /// Sum of the closed seconds currently in the window.
    pub fn window_hits(&self) -> u64 {
        self.window_hits
    }

    pub fn open_hits(&self) -> u64 {
        self.open_hits
    }

    pub fn threshold(&self) -> u64 {
        self.threshold
    }

    pub fn tick_value(&self) -> i64 {
        self.tick
    }

    /// Number of closed seconds held, never more than the window length.
    pub fn seconds_held(&self) -> usize {
        self.window.len()
    }

    pub fn sink(&self) -> &A {
        &self.sink
    }
}
