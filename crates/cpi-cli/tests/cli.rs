//! Runs the `cpi-reshape` binary end to end.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

const SOURCE: &str = "\
Country Name,Country Code,2000,2001
Iceland,ISL,,2.5
\"Korea, Rep.\",KOR,\"1
2\",3
Kosovo,XKX,1.1,
";

fn write_source(dir: &Path) -> String {
    let path = dir.join("cpi.csv");
    fs::write(&path, SOURCE).expect("write source");
    path.to_str().expect("utf-8 path").to_string()
}

fn cpi_reshape(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_cpi-reshape"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("run cpi-reshape")
}

#[test]
fn writes_csv_to_stdout_without_output_option() {
    let dir = TempDir::new().expect("temp dir");
    let source = write_source(dir.path());

    let output = cpi_reshape(&[&source]);
    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8(output.stdout).expect("utf-8 stdout");
    assert_eq!(
        stdout,
        "iso2c,year,cpi\r\nIS,2001,2.5\r\nKR,2000,\"1\n2\"\r\nKR,2001,3\r\nXK,2000,1.1\r\n"
    );
    assert!(!stdout.contains("Observations written"));
    assert_eq!(fs::read_dir(dir.path()).expect("list dir").count(), 1);
}

#[test]
fn wide_layout_with_lf_on_stdout() {
    let dir = TempDir::new().expect("temp dir");
    let source = write_source(dir.path());

    let output = cpi_reshape(&[&source, "--layout", "wide", "--line-ending", "lf"]);
    assert_eq!(output.status.code(), Some(0));
    insta::assert_snapshot!(String::from_utf8(output.stdout).expect("utf-8 stdout"), @r#"
    Country Name,Country Code,Year,CPI
    Iceland,ISL,2001,2.5
    "Korea, Rep.",KOR,2000,"1
    2"
    "Korea, Rep.",KOR,2001,3
    Kosovo,XKX,2000,1.1
    "#);
}

#[test]
fn output_directory_gets_file_and_summary() {
    let dir = TempDir::new().expect("temp dir");
    let source = write_source(dir.path());
    let out = dir.path().to_str().expect("utf-8 path");

    let output = cpi_reshape(&[&source, "-o", out]);
    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8(output.stdout).expect("utf-8 stdout");
    assert!(stdout.contains("Observations written"), "{stdout}");
    assert!(!stdout.contains("iso2c,year,cpi"));

    let written = fs::read_to_string(dir.path().join("cpi-long.csv")).expect("read output");
    assert!(written.starts_with("iso2c,year,cpi\r\nIS,2001,2.5\r\n"));
}

#[test]
fn missing_source_exits_with_error() {
    let dir = TempDir::new().expect("temp dir");
    let missing = dir.path().join("nope.csv");

    let output = cpi_reshape(&[missing.to_str().expect("utf-8 path")]);
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr).expect("utf-8 stderr");
    let line = stderr
        .lines()
        .find(|line| line.starts_with("error: "))
        .expect("error line");
    assert!(line.contains("nope.csv"), "{line}");
}

#[test]
fn missing_output_directory_exits_with_error() {
    let dir = TempDir::new().expect("temp dir");
    let source = write_source(dir.path());
    let out = dir.path().join("absent");

    let output = cpi_reshape(&[&source, "-o", out.to_str().expect("utf-8 path")]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).expect("utf-8 stderr");
    assert!(stderr.contains("error: write output"), "{stderr}");
    assert!(!out.exists());
}
