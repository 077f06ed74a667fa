use crate::source::{AccessRecord, ColumnMap, RecordDecoder, RequestLine, SourceError};
use csv::StringRecord;
use pretty_assertions::assert_eq;

fn header(columns: &[&str]) -> StringRecord {
    StringRecord::from(columns.to_vec())
}

fn decode_all(input: &str) -> Vec<Result<AccessRecord, SourceError>> {
    RecordDecoder::new(input.as_bytes()).collect()
}

#[test]
fn column_map_is_order_independent() {
    let canonical = ColumnMap::from_header(&header(&[
        "remotehost",
        "rfc931",
        "authuser",
        "date",
        "request",
        "status",
        "bytes",
    ]))
    .unwrap();

    assert_eq!(
        canonical,
        ColumnMap {
            remote_host: 0,
            auth_server: 1,
            auth_user: 2,
            date: 3,
            request: 4,
            status: 5,
            bytes: 6,
        }
    );

    let shuffled = ColumnMap::from_header(&header(&[
        "request",
        "authuser",
        "remotehost",
        "status",
        "bytes",
        "date",
        "rfc931",
    ]))
    .unwrap();

    assert_eq!(
        shuffled,
        ColumnMap {
            remote_host: 2,
            auth_server: 6,
            auth_user: 1,
            date: 5,
            request: 0,
            status: 3,
            bytes: 4,
        }
    );
}

#[test]
fn missing_column_is_reported_by_name() {
    let err = ColumnMap::from_header(&header(&["remotehost", "rfc931", "authuser", "date"]))
        .unwrap_err();

    assert!(matches!(err, SourceError::MissingColumn { column: "request" }));
}

#[test]
fn decodes_rows_in_arrival_order() {
    let input = "\
\"remotehost\",\"rfc931\",\"authuser\",\"date\",\"request\",\"status\",\"bytes\"
\"10.0.0.2\",\"-\",\"apache\",1549573860,\"GET /api/user HTTP/1.0\",200,1234
\"10.0.0.5\",\"-\",\"apache\",1549573859,\"POST /report HTTP/1.0\",500,1194
";

    let records: Vec<AccessRecord> = decode_all(input)
        .into_iter()
        .collect::<Result<_, _>>()
        .unwrap();

    assert_eq!(
        records,
        vec![
            AccessRecord {
                remote_host: "10.0.0.2".to_string(),
                auth_server: "-".to_string(),
                auth_user: "apache".to_string(),
                timestamp: 1549573860,
                status: 200,
                bytes: 1234,
                request: "GET /api/user HTTP/1.0".to_string(),
                request_line: RequestLine::parse("GET /api/user HTTP/1.0"),
            },
            AccessRecord {
                remote_host: "10.0.0.5".to_string(),
                auth_server: "-".to_string(),
                auth_user: "apache".to_string(),
                timestamp: 1549573859,
                status: 500,
                bytes: 1194,
                request: "POST /report HTTP/1.0".to_string(),
                request_line: RequestLine::parse("POST /report HTTP/1.0"),
            },
        ]
    );
    assert_eq!(records[1].section(), "/report");
}

#[test]
fn decodes_shuffled_columns() {
    let input = "\
bytes,remotehost,authuser,rfc931,status,request,date
1194,10.0.0.5,apache,-,500,POST /report HTTP/1.0,1549574134
";

    let record = decode_all(input).remove(0).unwrap();

    assert_eq!(record.remote_host, "10.0.0.5");
    assert_eq!(record.timestamp, 1549574134);
    assert_eq!(record.status, 500);
    assert_eq!(record.bytes, 1194);
    assert_eq!(record.request_line.method, "POST");
    assert_eq!(record.section(), "/report");
}

#[test]
fn dash_byte_count_reads_as_zero() {
    let input = "\
remotehost,rfc931,authuser,date,request,status,bytes
10.0.0.1,-,-,1549573860,GET / HTTP/1.0,304,-
";

    let record = decode_all(input).remove(0).unwrap();
    assert_eq!(record.bytes, 0);
    assert_eq!(record.section(), "/");
}

#[test]
fn bad_timestamp_is_fatal_and_ends_the_sequence() {
    let input = "\
remotehost,rfc931,authuser,date,request,status,bytes
10.0.0.1,-,-,1549573860,GET /api HTTP/1.0,200,10
10.0.0.1,-,-,yesterday,GET /api HTTP/1.0,200,10
10.0.0.1,-,-,1549573861,GET /api HTTP/1.0,200,10
";

    let results = decode_all(input);
    assert_eq!(results.len(), 2);
    assert!(results[0].is_ok());

    match &results[1] {
        Err(SourceError::InvalidField { line, field, value }) => {
            assert_eq!(*line, 3);
            assert_eq!(*field, "date");
            assert_eq!(value, "yesterday");
        }
        other => panic!("Expected InvalidField, got {:?}", other),
    }
}

#[test]
fn timestamp_without_a_following_second_is_fatal() {
    let input = "\
remotehost,rfc931,authuser,date,request,status,bytes
10.0.0.1,-,-,1549573860,GET /api HTTP/1.0,200,10
10.0.0.1,-,-,9223372036854775807,GET /api HTTP/1.0,200,10
";

    let results = decode_all(input);
    assert_eq!(results.len(), 2);
    assert!(results[0].is_ok());

    match &results[1] {
        Err(SourceError::InvalidField { line, field, value }) => {
            assert_eq!(*line, 3);
            assert_eq!(*field, "date");
            assert_eq!(value, "9223372036854775807");
        }
        other => panic!("Expected InvalidField, got {:?}", other),
    }
}

#[test]
fn short_row_is_fatal() {
    let input = "\
remotehost,rfc931,authuser,date,request,status,bytes
10.0.0.1,-,-,1549573860
";

    let results = decode_all(input);
    assert_eq!(results.len(), 1);
    assert!(matches!(results[0], Err(SourceError::Csv(_))));
}

#[test]
fn empty_input_fails_on_header() {
    let results = decode_all("");
    assert_eq!(results.len(), 1);
    assert!(matches!(
        results[0],
        Err(SourceError::MissingColumn {
            column: "remotehost"
        })
    ));
}

#[test]
fn header_only_input_is_empty() {
    let results = decode_all("remotehost,rfc931,authuser,date,request,status,bytes\n");
    assert!(results.is_empty());
}
