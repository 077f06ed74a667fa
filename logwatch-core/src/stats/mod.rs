//! Top sections per reporting interval.
//!
//! Two structures are kept in step: a hash map from section to hit count, and an ordered
//! index from hit count to the sections holding that count. A hit is an O(1) map update
//! plus an O(log n) move between two adjacent index buckets, and the top K is a short
//! descent from the highest bucket.

mod ranking;
mod report;
mod tracker;

#[cfg(test)]
mod tests;

pub use ranking::SectionRanking;
pub use report::{SectionHits, StatsReport, StatsSink};
pub use tracker::{DEFAULT_STATS_INTERVAL, DEFAULT_TOP_K, StatsTracker};
