use std::path::PathBuf;

use pretty_assertions::assert_eq;
use showdiag_core::{parse, parse_file};

fn fixture(path: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join(path)
}

#[test]
fn parses_the_sample_dump_end_to_end() {
    let outcome = parse_file(&fixture("fixtures/show-diag-sample.txt")).expect("parse fixture");

    let ports: Vec<&str> = outcome.records.iter().map(|r| r.port.as_str()).collect();
    assert_eq!(ports, vec!["1/1/x1", "1/1/x2", "1/1/x10"]);

    let x1 = &outcome.records[0];
    assert_eq!(x1.port_type, "network");
    assert_eq!(x1.alias, "Uplink_To_Core_Switch");
    assert_eq!(x1.status, "Enabled");
    assert_eq!(x1.speed, "10Gb");
    assert_eq!(x1.media, "Fiber");

    let x2 = &outcome.records[1];
    assert_eq!(x2.port_type, "tool");
    assert_eq!(x2.alias, "Tool_Tap_A");
    assert_eq!(x2.media, "Copper");
    assert_eq!(x2.speed, "1Gb");

    let x10 = &outcome.records[2];
    assert_eq!(x10.status, "Disabled");
    assert_eq!(x10.media, "No Module");
    assert_eq!(x10.alias, "");

    assert_eq!(outcome.summary.total, 3);
    assert_eq!(outcome.summary.enabled, 2);
    assert_eq!(outcome.summary.disabled, 1);
    assert_eq!(outcome.summary.other, 0);
    assert_eq!(outcome.skipped_blocks, 1);
}

#[test]
fn parses_a_columnar_dump_end_to_end() {
    let outcome =
        parse_file(&fixture("fixtures/show-diag-columnar.txt")).expect("parse columnar fixture");

    let ports: Vec<&str> = outcome.records.iter().map(|r| r.port.as_str()).collect();
    assert_eq!(ports, vec!["1/1/x1", "1/1/x2", "1/1/x3"]);

    let x1 = &outcome.records[0];
    assert_eq!(x1.port_type, "network");
    assert_eq!(x1.alias, "Uplink_A");
    assert_eq!(x1.status, "Enabled");
    assert_eq!(x1.speed, "10Gb");
    assert_eq!(x1.media, "Fiber");

    let x2 = &outcome.records[1];
    assert_eq!(x2.alias, "Uplink_B_Full_Name");
    assert_eq!(x2.status, "Disabled");
    assert_eq!(x2.media, "No Module");

    let x3 = &outcome.records[2];
    assert_eq!(x3.port_type, "tool");
    assert_eq!(x3.alias, "");
    assert_eq!(x3.speed, "1Gb");
    assert_eq!(x3.media, "Copper");

    assert_eq!(outcome.summary.total, 3);
    assert_eq!(outcome.summary.enabled, 2);
    assert_eq!(outcome.summary.disabled, 1);
    assert_eq!(outcome.skipped_blocks, 0);
}

#[test]
fn columnar_header_fans_fields_without_losing_ports() {
    let text = "Parameter 1/1/x1     1/1/x2\n\
                Type:     network    tool\n\
                Admin:    enabled    disabled\n";
    let outcome = parse(text).expect("parse");

    let ports: Vec<&str> = outcome.records.iter().map(|r| r.port.as_str()).collect();
    assert_eq!(ports, vec!["1/1/x1", "1/1/x2"]);
    assert_eq!(outcome.skipped_blocks, 0);
    assert_eq!(outcome.records[0].status, "Enabled");
    assert_eq!(outcome.records[1].status, "Disabled");
}

#[test]
fn every_port_is_unique_and_well_formed() {
    let outcome = parse_file(&fixture("fixtures/show-diag-sample.txt")).expect("parse fixture");

    let mut seen = std::collections::HashSet::new();
    for record in &outcome.records {
        assert!(showdiag_core::is_port_id(&record.port), "bad id {}", record.port);
        assert!(seen.insert(record.port.clone()), "duplicate {}", record.port);
    }
}

#[test]
fn parsing_twice_is_byte_identical() {
    let text = std::fs::read_to_string(fixture("fixtures/show-diag-sample.txt")).expect("read");
    let first = parse(&text).expect("first parse");
    let second = parse(&text).expect("second parse");

    assert_eq!(first.records, second.records);
    assert_eq!(first.summary, second.summary);
    assert_eq!(
        showdiag_core::format_json(&first.records),
        showdiag_core::format_json(&second.records)
    );
}

#[test]
fn single_block_example_produces_the_expected_json() {
    let text = "Port 1/1/x1\n\
                Type:   network\n\
                Status: Enabled\n\
                Speed:  10Gb\n\
                Media:  Fiber\n\
                \n\
                Running Configuration\n\
                port 1/1/x1 alias Uplink_To_Core_Switch\n";
    let outcome = parse(text).expect("parse");

    let value: serde_json::Value =
        serde_json::from_str(&showdiag_core::format_json(&outcome.records)).expect("json");
    let expected: serde_json::Value = serde_json::from_str(
        r#"[{"port":"1/1/x1","type":"network","alias":"Uplink_To_Core_Switch","status":"Enabled","speed":"10Gb","media":"Fiber"}]"#,
    )
    .expect("expected json");

    assert_eq!(value, expected);
}

#[test]
fn parse_file_reports_empty_and_unreadable_inputs() {
    let dir = tempfile::tempdir().expect("tempdir");
    let empty = dir.path().join("empty.txt");
    std::fs::write(&empty, "").expect("write");

    assert!(matches!(
        parse_file(&empty),
        Err(showdiag_core::ParseError::EmptyInput)
    ));
    assert!(matches!(
        parse_file(&dir.path().join("missing.txt")),
        Err(showdiag_core::ParseError::Io(_))
    ));
}

#[test]
fn a_malformed_block_does_not_lose_its_neighbors() {
    let text = "Parameter 1/1/x1\n\
                Admin: enabled\n\
                Parameter not-a-port\n\
                Admin: enabled\n\
                Parameter 1/1/x2\n\
                Admin: disabled\n";
    let outcome = parse(text).expect("parse");

    let ports: Vec<&str> = outcome.records.iter().map(|r| r.port.as_str()).collect();
    assert_eq!(ports, vec!["1/1/x1", "1/1/x2"]);
    assert_eq!(outcome.skipped_blocks, 1);
}
