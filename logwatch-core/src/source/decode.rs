use crate::source::{AccessRecord, RequestLine, SourceError};
use csv::StringRecord;
use std::io::Read;

const REMOTE_HOST: &str = "remotehost";
const AUTH_SERVER: &str = "rfc931";
const AUTH_USER: &str = "authuser";
const DATE: &str = "date";
const REQUEST: &str = "request";
const STATUS: &str = "status";
const BYTES: &str = "bytes";

/// Positions of the required columns, located by name in the header row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnMap {
    pub remote_host: usize,
    pub auth_server: usize,
    pub auth_user: usize,
    pub date: usize,
    pub request: usize,
    pub status: usize,
    pub bytes: usize,
}

impl ColumnMap {
    pub fn from_header(header: &StringRecord) -> Result<Self, SourceError> {
        let find = |column: &'static str| {
            header
                .iter()
                .position(|name| name.trim() == column)
                .ok_or(SourceError::MissingColumn { column })
        };

        Ok(Self {
            remote_host: find(REMOTE_HOST)?,
            auth_server: find(AUTH_SERVER)?,
            auth_user: find(AUTH_USER)?,
            date: find(DATE)?,
            request: find(REQUEST)?,
            status: find(STATUS)?,
            bytes: find(BYTES)?,
        })
    }

    /// Decodes one data row. `line` is only used for error reporting.
    pub fn decode(&self, row: &StringRecord, line: u64) -> Result<AccessRecord, SourceError> {
        let field = |index: usize, name: &'static str| {
            row.get(index)
                .ok_or_else(|| SourceError::invalid_field(line, name, ""))
        };

        let date = field(self.date, DATE)?;
        // Playback opens the second after each record, so `i64::MAX` cannot be replayed.
        let timestamp = date
            .trim()
            .parse::<i64>()
            .ok()
            .filter(|ts| ts.checked_add(1).is_some())
            .ok_or_else(|| SourceError::invalid_field(line, DATE, date))?;

        let status = field(self.status, STATUS)?;
        let status = status
            .trim()
            .parse::<u16>()
            .map_err(|_| SourceError::invalid_field(line, STATUS, status))?;

        // Common log format writes `-` when no body was sent.
        let bytes = match field(self.bytes, BYTES)?.trim() {
            "-" => 0,
            raw => raw
                .parse::<u64>()
                .map_err(|_| SourceError::invalid_field(line, BYTES, raw))?,
        };

        let request = field(self.request, REQUEST)?;

        Ok(AccessRecord {
            remote_host: field(self.remote_host, REMOTE_HOST)?.to_string(),
            auth_server: field(self.auth_server, AUTH_SERVER)?.to_string(),
            auth_user: field(self.auth_user, AUTH_USER)?.to_string(),
            timestamp,
            status,
            bytes,
            request: request.to_string(),
            request_line: RequestLine::parse(request),
        })
    }
}

/// Decodes a CSV access log into records, one per data row.
///
/// The first error ends the sequence: a corrupt log has no defined recovery, so callers
/// treat any `Err` as fatal for the whole run.
pub struct RecordDecoder<R> {
    reader: csv::Reader<R>,
    columns: Option<ColumnMap>,
    row: StringRecord,
    rows: u64,
    done: bool,
}

impl<R: Read> RecordDecoder<R> {
    pub fn new(input: R) -> Self {
        Self {
            reader: csv::ReaderBuilder::new()
                .has_headers(true)
                .from_reader(input),
            columns: None,
            row: StringRecord::new(),
            rows: 0,
            done: false,
        }
    }

    /// Number of data rows decoded so far.
    pub fn rows_decoded(&self) -> u64 {
        self.rows
    }

    fn columns(&mut self) -> Result<ColumnMap, SourceError> {
        if let Some(columns) = self.columns {
            return Ok(columns);
        }

        let columns = ColumnMap::from_header(self.reader.headers()?)?;
        self.columns = Some(columns);
        Ok(columns)
    }

    fn decode_next(&mut self) -> Result<Option<AccessRecord>, SourceError> {
        let columns = self.columns()?;

        if !self.reader.read_record(&mut self.row)? {
            return Ok(None);
        }

        let line = self.row.position().map_or(0, |p| p.line());
        let record = columns.decode(&self.row, line)?;
        self.rows += 1;

        Ok(Some(record))
    }
}

impl<R: Read> Iterator for RecordDecoder<R> {
    type Item = Result<AccessRecord, SourceError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        match self.decode_next() {
            Ok(Some(record)) => Some(Ok(record)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(err) => {
                self.done = true;
                Some(Err(err))
            }
        }
    }
}
