use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionHits {
    pub section: String,
    pub hits: u64,
}

impl SectionHits {
    pub fn new(section: impl Into<String>, hits: u64) -> Self {
        Self {
            section: section.into(),
            hits,
        }
    }
}

/// The ranking at a reporting boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatsReport {
    pub tick: i64,
    pub top: Vec<SectionHits>,
}

/// Receives periodic reports from a [`StatsTracker`](super::StatsTracker).
pub trait StatsSink {
    fn on_stats(&mut self, report: StatsReport);
}

impl StatsSink for Vec<StatsReport> {
    fn on_stats(&mut self, report: StatsReport) {
        self.push(report);
    }
}
