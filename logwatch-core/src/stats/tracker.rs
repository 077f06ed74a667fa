use crate::stats::{SectionHits, SectionRanking, StatsReport, StatsSink};

pub const DEFAULT_STATS_INTERVAL: u64 = 10;
pub const DEFAULT_TOP_K: usize = 10;

/// Reports the top sections every `interval` simulated seconds.
///
/// Counts cover one interval only: they are cleared after each report.
#[derive(Debug)]
pub struct StatsTracker<S> {
    ranking: SectionRanking,
    tick: i64,
    next_report: i64,
    interval: i64,
    top_k: usize,
    sink: S,
}

impl<S: StatsSink> StatsTracker<S> {
    pub fn new(interval: u64, top_k: usize, sink: S) -> Self {
        let interval = i64::try_from(interval).unwrap_or(i64::MAX);

        Self {
            ranking: SectionRanking::new(),
            tick: 0,
            next_report: interval,
            interval,
            top_k,
            sink,
        }
    }

    /// Aligns the tracker clock with the first record and schedules the first report one
    /// interval later.
    pub fn sync(&mut self, t: i64) {
        self.tick = t;
        self.next_report = t.saturating_add(self.interval);
    }

    pub fn hit(&mut self, section: &str) {
        self.ranking.hit(section);
    }

    /// Advances to second `t`, reporting if a boundary has been reached or passed.
    ///
    /// Boundaries follow realized ticks: when `t` skips past a boundary, the report fires
    /// once, at `t`, and the next boundary is one interval after the skipped one.
    pub fn tick(&mut self, t: i64) {
        self.tick = t;
        if t < self.next_report {
            return;
        }

        let report = StatsReport {
            tick: t,
            top: self.ranking.top_k(self.top_k),
        };
        tracing::debug!(
            tick = t,
            sections = self.ranking.len(),
            "stats interval closed"
        );
        self.sink.on_stats(report);

        self.clear();
        self.next_report = self.next_report.saturating_add(self.interval);
    }

    pub fn hits(&self, section: &str) -> u64 {
        self.ranking.hits(section)
    }

    pub fn top_k(&self, k: usize) -> Vec<SectionHits> {
        self.ranking.top_k(k)
    }

    pub fn clear(&mut self) {
        self.ranking.clear();
    }

    pub fn next_report(&self) -> i64 {
        self.next_report
    }

    pub fn tick_value(&self) -> i64 {
        self.tick
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }
}
