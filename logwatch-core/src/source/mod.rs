//! Access log ingestion.
//!
//! Rows come from a CSV file with a header naming the columns. Each row is decoded into an
//! [`AccessRecord`] on a dedicated reader thread and handed to the consumer through a bounded
//! queue, so decoding runs ahead of playback without ever holding the whole file in memory.
//!
//! The records are emitted in *arrival* order. Timestamp ordering is restored downstream by
//! the reorder buffer.

mod decode;
mod error;
mod reader;
mod record;
mod request;

#[cfg(test)]
mod tests;

pub use decode::{ColumnMap, RecordDecoder};
pub use error::SourceError;
pub use reader::{DEFAULT_QUEUE_CAPACITY, RecordStream};
pub use record::AccessRecord;
pub use request::{RequestLine, section_of};
