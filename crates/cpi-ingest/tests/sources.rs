//! Integration tests for opening file and HTTP sources.

use std::fs;
use std::io::{BufRead, BufReader, Write};
use std::net::TcpListener;
use std::thread;

use cpi_ingest::{CsvSource, FetchOptions, IngestError, Source, open_source};
use cpi_model::DataRow;
use tempfile::TempDir;

const WIDE_CSV: &str = "Country Name,Country Code,2000,2001\nIceland,ISL,,2.5\nNorway,NOR,1.1,2.2\n";

/// Serve exactly one HTTP response on a loopback port and return its URL.
fn serve_once(status: &'static str, content_type: &'static str, body: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let addr = listener.local_addr().expect("local addr");
    thread::spawn(move || {
        let (stream, _) = listener.accept().expect("accept");
        let mut reader = BufReader::new(stream.try_clone().expect("clone stream"));
        let mut line = String::new();
        while reader.read_line(&mut line).expect("read request") > 0 {
            if line == "\r\n" {
                break;
            }
            line.clear();
        }
        let mut stream = stream;
        let response = format!(
            "HTTP/1.1 {status}\r\nContent-Type: {content_type}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        stream.write_all(response.as_bytes()).expect("write response");
    });
    format!("http://{addr}/indicator/FP.CPI.TOTL?format=csv")
}

fn collect_rows(source: CsvSource) -> Vec<DataRow> {
    source
        .rows
        .collect::<Result<Vec<_>, _>>()
        .expect("rows parse")
}

#[test]
fn reads_local_file() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("cpi.csv");
    fs::write(&path, WIDE_CSV).expect("write source");

    let source = Source::parse(path.to_str().expect("utf-8 path")).expect("parse source");
    let csv = open_source(&source, &FetchOptions::default()).expect("open source");
    assert_eq!(csv.header.year_at(2), Some("2000"));

    let rows = collect_rows(csv);
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].country_code(), "ISL");
}

#[cfg(unix)]
#[test]
fn reads_file_url() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("cpi.csv");
    fs::write(&path, WIDE_CSV).expect("write source");

    let url = format!("file://{}", path.display());
    let source = Source::parse(&url).expect("parse source");
    assert!(!source.is_remote());

    let rows = collect_rows(open_source(&source, &FetchOptions::default()).expect("open"));
    assert_eq!(rows.len(), 2);
}

#[test]
fn missing_file_is_reported() {
    let dir = TempDir::new().expect("temp dir");
    let source = Source::Path(dir.path().join("absent.csv"));
    let err = open_source(&source, &FetchOptions::default()).err().expect("error");
    assert!(matches!(err, IngestError::FileNotFound { .. }));
}

#[test]
fn reads_http_source() {
    let url = serve_once("200 OK", "text/csv; charset=utf-8", WIDE_CSV);
    let source = Source::parse(&url).expect("parse source");
    assert!(source.is_remote());

    let csv = open_source(&source, &FetchOptions::default()).expect("open source");
    assert_eq!(csv.header.len(), 4);
    let rows = collect_rows(csv);
    assert_eq!(rows[1].values(), ["1.1", "2.2"]);
}

#[test]
fn http_error_status_is_a_fetch_error() {
    let url = serve_once("404 Not Found", "text/plain", "not found");
    let err = open_source(&Source::Url(url), &FetchOptions::default())
        .err()
        .expect("error");
    assert!(matches!(err, IngestError::HttpStatus { status: 404, .. }));
    assert!(err.is_fetch());
}

#[test]
fn html_response_is_rejected() {
    let url = serve_once("200 OK", "text/html", "<html><body>moved</body></html>");
    let err = open_source(&Source::Url(url), &FetchOptions::default())
        .err()
        .expect("error");
    assert!(matches!(err, IngestError::NonCsvContent { .. }));
}

#[test]
fn archive_response_is_rejected() {
    let url = serve_once("200 OK", "application/x-zip-compressed", "PK\u{3}\u{4}");
    let err = open_source(&Source::Url(url), &FetchOptions::default())
        .err()
        .expect("error");
    assert!(matches!(err, IngestError::NonCsvContent { .. }));
    assert!(err.is_fetch());
}

#[test]
fn unreachable_host_is_a_fetch_error() {
    // Bind then drop to get a port with nothing listening.
    let port = TcpListener::bind("127.0.0.1:0")
        .and_then(|listener| listener.local_addr())
        .expect("local addr")
        .port();
    let err = open_source(
        &Source::Url(format!("http://127.0.0.1:{port}/cpi.csv")),
        &FetchOptions::default(),
    )
    .err()
    .expect("error");
    assert!(matches!(err, IngestError::Request { .. }));
}
