//! Tests for the sink module

use super::*;
use crate::types::JobRecord;
use pretty_assertions::assert_eq;
use tempfile::tempdir;

fn record(n: u32) -> JobRecord {
    JobRecord {
        title: format!("Job {n}"),
        company: "Acme".to_string(),
        location: "Remote".to_string(),
        salary: String::new(),
        posted_date: "Today".to_string(),
        summary: format!("Summary {n}"),
        url: format!("https://example.com/job/{n}"),
    }
}

#[test]
fn test_create_writes_header_once() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("jobs.csv");

    let sink = CsvSink::create(&path).unwrap();
    assert_eq!(sink.records_written(), 0);
    drop(sink);

    let contents = std::fs::read_to_string(&path).unwrap();
    assert_eq!(
        contents,
        "JobTitle,Company,Location,Salary,PostDate,Summary,JobUrl\n"
    );
}

#[test]
fn test_append_flushes_each_record() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("jobs.csv");

    let mut sink = CsvSink::create(&path).unwrap();
    sink.append(&record(1)).unwrap();

    // Flushed per append: visible on disk while the sink is still open.
    let contents = std::fs::read_to_string(&path).unwrap();
    assert_eq!(contents.lines().count(), 2);

    sink.append(&record(2)).unwrap();
    assert_eq!(sink.records_written(), 2);

    let contents = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[1].starts_with("Job 1,Acme,Remote,,Today,Summary 1,"));
    assert!(lines[2].starts_with("Job 2,Acme,Remote,,Today,Summary 2,"));
}

#[test]
fn test_create_truncates_existing_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("jobs.csv");

    let mut sink = CsvSink::create(&path).unwrap();
    sink.append(&record(1)).unwrap();
    drop(sink);

    let sink = CsvSink::create(&path).unwrap();
    drop(sink);

    let contents = std::fs::read_to_string(&path).unwrap();
    assert_eq!(contents.lines().count(), 1);
}

#[test]
fn test_zero_records_is_valid() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("empty.csv");

    let sink = CsvSink::create(&path).unwrap();
    assert_eq!(sink.records_written(), 0);
    drop(sink);

    let contents = std::fs::read_to_string(&path).unwrap();
    assert_eq!(contents.lines().count(), 1);
}

#[test]
fn test_fields_with_commas_are_quoted() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("jobs.csv");

    let mut sink = CsvSink::create(&path).unwrap();
    let mut rec = record(1);
    rec.location = "Vancouver, BC".to_string();
    sink.append(&rec).unwrap();
    drop(sink);

    let mut reader = csv::Reader::from_path(&path).unwrap();
    let row: JobRecord = reader.deserialize().next().unwrap().unwrap();
    assert_eq!(row.location, "Vancouver, BC");
}
