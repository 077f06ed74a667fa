use crate::monitor::{AlertSink, TrafficMonitor};
use crate::source::{AccessRecord, SourceError};
use crate::stats::{StatsSink, StatsTracker};
use serde::Serialize;

/// Totals for one replay.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PlaybackSummary {
    /// Records counted into the aggregators.
    pub records: u64,
    /// Records dropped for arriving after their second was closed.
    pub late: u64,
    /// The second opened by the first record.
    pub first_second: Option<i64>,
    /// The last second closed out on the aggregators.
    pub last_closed: Option<i64>,
}

pub struct Player<A, S> {
    monitor: TrafficMonitor<A>,
    stats: StatsTracker<S>,
    // next second to be closed out; None until the first record
    next_tick: Option<i64>,
    summary: PlaybackSummary,
}

impl<A: AlertSink, S: StatsSink> Player<A, S> {
    pub fn new(monitor: TrafficMonitor<A>, stats: StatsTracker<S>) -> Self {
        Self {
            monitor,
            stats,
            next_tick: None,
            summary: PlaybackSummary::default(),
        }
    }

    /// Replays a time-ordered record stream until it ends or yields an error.
    ///
    /// The second still open when the stream ends is never closed out, so its hits reach the
    /// aggregators' running state without triggering a boundary evaluation of their own.
    pub fn play<I>(&mut self, records: I) -> Result<PlaybackSummary, SourceError>
    where
        I: IntoIterator<Item = Result<AccessRecord, SourceError>>,
    {
        for record in records {
            self.push(&record?);
        }

        tracing::info!(
            records = self.summary.records,
            late = self.summary.late,
            first_second = self.summary.first_second,
            last_closed = self.summary.last_closed,
            "playback finished"
        );

        Ok(self.summary)
    }

    /// Advances the clock to `record` and counts it. Returns `false` when the record is late
    /// and was dropped.
    pub fn push(&mut self, record: &AccessRecord) -> bool {
        let ts = record.timestamp;

        let next_tick = match self.next_tick {
            Some(t) => t,
            None => {
                self.monitor.sync(ts);
                self.stats.sync(ts);
                self.summary.first_second = Some(ts);
                ts.saturating_add(1)
            }
        };
        self.next_tick = Some(next_tick);

        let open_second = next_tick - 1;
        if ts < open_second {
            self.summary.late += 1;
            tracing::warn!(
                timestamp = ts,
                open_second,
                section = record.section(),
                remote_host = %record.remote_host,
                "late access record dropped"
            );
            return false;
        }

        for second in next_tick..=ts {
            self.monitor.tick(second);
            self.stats.tick(second);
            self.summary.last_closed = Some(second);
        }
        self.next_tick = Some(next_tick.max(ts.saturating_add(1)));

        self.monitor.hit();
        self.stats.hit(record.section());
        self.summary.records += 1;

        true
    }

    /// The second currently accumulating hits, once the first record has been seen.
    pub fn open_second(&self) -> Option<i64> {
        self.next_tick.map(|t| t - 1)
    }

    pub fn summary(&self) -> PlaybackSummary {
        self.summary
    }

    pub fn monitor(&self) -> &TrafficMonitor<A> {
        &self.monitor
    }

    pub fn stats(&self) -> &StatsTracker<S> {
        &self.stats
    }
}
