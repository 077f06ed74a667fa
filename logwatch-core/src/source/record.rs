use crate::reorder::Timestamped;
use crate::source::RequestLine;
use serde::Serialize;

/// One decoded access log row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccessRecord {
    pub remote_host: String,
    /// RFC 931 identity of the client, usually `-`.
    pub auth_server: String,
    pub auth_user: String,
    /// Unix timestamp, second resolution.
    pub timestamp: i64,
    pub status: u16,
    pub bytes: u64,
    /// The raw request line as it appeared in the log.
    pub request: String,
    pub request_line: RequestLine,
}

impl AccessRecord {
    pub fn section(&self) -> &str {
        &self.request_line.section
    }
}

impl Timestamped for AccessRecord {
    fn timestamp(&self) -> i64 {
        self.timestamp
    }
}
