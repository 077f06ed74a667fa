//! Bounded out-of-order correction.
//!
//! Access logs are *almost* sorted: entries are written when a request completes, so a slow
//! request can land a few lines after faster ones that started later. [`ReorderBuffer`] is a
//! fixed-depth delay line that holds the most recent records and always releases the oldest,
//! which turns an almost-sorted stream into a non-decreasing one as long as no record is
//! displaced by more than the buffer depth.

mod buffer;
mod ordered;


pub use buffer::{DEFAULT_REORDER_DEPTH, ReorderBuffer, Timestamped};
pub use ordered::Reordered;
