//! Simulated real-time replay.
//!
//! The [`Player`] owns the only clock. Each time a record arrives with a timestamp past the
//! open second, every second in between is closed out on both aggregators in lockstep, so
//! alerts and reports land on the exact second they would have in a live stream.
//!
//! The overall data processing architecture is:
//!
//! access log file
//! RecordStream (reader thread)
//! Reordered (ReorderBuffer)
//! Player
//! TrafficMonitor + StatsTracker
//! AlertSink + StatsSink
//!

mod pipeline;
mod player;


pub use pipeline::{open_ordered, replay};
pub use player::{PlaybackSummary, Player};
