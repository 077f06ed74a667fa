use crate::conf::WatchConfig;
use crate::monitor::{AlertSink, TrafficMonitor};
use crate::playback::{PlaybackSummary, Player};
use crate::reorder::Reordered;
use crate::source::{AccessRecord, RecordStream, SourceError};
use crate::stats::{StatsSink, StatsTracker};
use std::path::Path;

impl<A: AlertSink, S: StatsSink> Player<A, S> {
    pub fn from_config(cfg: &WatchConfig, alerts: A, stats: S) -> Self {
        Self::new(
            TrafficMonitor::new(cfg.alert.rate, cfg.alert.window_secs, alerts),
            StatsTracker::new(cfg.stats.interval_secs, cfg.stats.top_k, stats),
        )
    }
}

/// Starts decoding `input` and returns its records in timestamp order.
pub fn open_ordered(
    input: &Path,
    cfg: &WatchConfig,
) -> Result<Reordered<RecordStream, AccessRecord>, SourceError> {
    let stream = RecordStream::spawn(input, cfg.reader.queue_capacity)?;
    Ok(Reordered::new(stream, cfg.reader.reorder_depth))
}

/// Replays `input` end to end, delivering events to the given sinks.
pub fn replay<A, S>(
    input: &Path,
    cfg: &WatchConfig,
    alerts: A,
    stats: S,
) -> Result<PlaybackSummary, SourceError>
where
    A: AlertSink,
    S: StatsSink,
{
    let records = open_ordered(input, cfg)?;
    Player::from_config(cfg, alerts, stats).play(records)
}
