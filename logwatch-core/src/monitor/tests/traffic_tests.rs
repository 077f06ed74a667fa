use crate::monitor::{AlertEvent, AlertState, TrafficMonitor};
use pretty_assertions::assert_eq;

const START: i64 = 1_549_573_860;

/// Feeds `hits[i]` into second `START + i`, closing each second in turn.
fn replay(rate: u64, window: usize, hits: &[u64]) -> TrafficMonitor<Vec<AlertEvent>> {
    let mut monitor = TrafficMonitor::new(rate, window, Vec::new());
    monitor.sync(START);

    for (i, count) in hits.iter().enumerate() {
        for _ in 0..*count {
            monitor.hit();
        }
        monitor.tick(START + i as i64 + 1);
    }
    monitor
}

#[test]
fn threshold_is_rate_times_window() {
    let monitor = TrafficMonitor::new(10, 120, Vec::new());
    assert_eq!(monitor.threshold(), 1200);
    assert_eq!(monitor.state(), AlertState::Normal);
}

#[test]
fn burst_alerts_then_recovers() {
    let monitor = replay(1, 3, &[3, 1, 0, 0]);

    assert_eq!(
        monitor.sink(),
        &vec![
            AlertEvent {
                state: AlertState::Alerting,
                hits: 3,
                tick: START + 1,
            },
            AlertEvent {
                state: AlertState::Normal,
                hits: 1,
                tick: START + 4,
            },
        ]
    );
    assert_eq!(monitor.state(), AlertState::Normal);
}

#[test]
fn steady_state_does_not_report() {
    // Sum stays at or above the threshold for many ticks: a single transition.
    let monitor = replay(2, 2, &[4, 4, 4, 4, 4, 4]);

    assert_eq!(monitor.sink().len(), 1);
    assert_eq!(monitor.sink()[0].state, AlertState::Alerting);
    assert_eq!(monitor.state(), AlertState::Alerting);
}

#[test]
fn window_never_exceeds_capacity_and_sum_tracks_entries() {
    let hits = [5, 0, 2, 7, 1, 1, 9, 0];
    let monitor = replay(100, 3, &hits);

    assert_eq!(monitor.seconds_held(), 3);
    assert_eq!(monitor.window_hits(), 9 + 0 + 1);
    assert!(monitor.sink().is_empty());
}

#[test]
fn alerts_exactly_when_window_sum_reaches_threshold() {
    // rate 2 over 3 seconds: threshold 6.
    let monitor = replay(2, 3, &[1, 2, 2, 1, 3, 0, 0, 5]);
    // window sums after each tick: 1, 3, 5, 5, 6, 4, 3, 5

    assert_eq!(
        monitor.sink(),
        &vec![
            AlertEvent {
                state: AlertState::Alerting,
                hits: 6,
                tick: START + 5,
            },
            AlertEvent {
                state: AlertState::Normal,
                hits: 4,
                tick: START + 6,
            },
        ]
    );
}

#[test]
fn hits_in_open_second_are_not_counted_until_tick() {
    let mut monitor = TrafficMonitor::new(1, 1, Vec::new());
    monitor.sync(START);
    monitor.hit();
    monitor.hit();

    assert_eq!(monitor.open_hits(), 2);
    assert_eq!(monitor.window_hits(), 0);
    assert!(monitor.sink().is_empty());

    monitor.tick(START + 1);
    assert_eq!(monitor.open_hits(), 0);
    assert_eq!(monitor.window_hits(), 2);
    assert_eq!(monitor.tick_value(), START + 1);
    assert_eq!(monitor.state(), AlertState::Alerting);
}

#[test]
fn zero_window_holds_one_second() {
    let monitor = replay(2, 0, &[0, 0, 1, 3, 0]);

    assert_eq!(monitor.threshold(), 2);
    assert_eq!(monitor.seconds_held(), 1);
    assert_eq!(monitor.window_hits(), 0);
    assert_eq!(
        monitor.sink(),
        &vec![
            AlertEvent {
                state: AlertState::Alerting,
                hits: 3,
                tick: START + 4,
            },
            AlertEvent {
                state: AlertState::Normal,
                hits: 0,
                tick: START + 5,
            },
        ]
    );
}
