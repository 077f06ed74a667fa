use std::io::Write;
use tempfile::NamedTempFile;

/// 2019-02-07 21:11:00 UTC, the first second of every generated log.
pub const T0: i64 = 1_549_573_860;

const HEADER: &str = "\"remotehost\",\"rfc931\",\"authuser\",\"date\",\"request\",\"status\",\"bytes\"";

/// Builds a CSV access log on disk, row by row, in the order rows are added.
#[derive(Debug, Default)]
pub struct AccessLog {
    rows: Vec<String>,
}

impl AccessLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `count` successful GETs of `path` at `T0 + offset`.
    pub fn hits(mut self, offset: i64, path: &str, count: usize) -> Self {
        for i in 0..count {
            self.rows.push(format!(
                "\"10.0.0.{}\",\"-\",\"apache\",{},\"GET {path} HTTP/1.0\",200,1234",
                i % 250,
                T0 + offset
            ));
        }
        self
    }

    /// Adds a row verbatim.
    pub fn raw(mut self, row: &str) -> Self {
        self.rows.push(row.to_string());
        self
    }

    /// Writes the log to a temp file that lives as long as the returned handle.
    pub fn write(&self) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("failed to create temp access log");
        writeln!(file, "{HEADER}").expect("failed to write header");
        for row in &self.rows {
            writeln!(file, "{row}").expect("failed to write row");
        }
        file.flush().expect("failed to flush access log");
        file
    }
}
