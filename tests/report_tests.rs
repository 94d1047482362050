// Copyright (c) 2025 Cashview Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use cashview::report::{with_snapshot, write_snapshot, SnapshotTarget};
use serde::Serialize;
use tempfile::tempdir;

#[derive(Debug, Clone, Serialize)]
struct Row {
    name: String,
    value: i64,
}

fn rows() -> Vec<Row> {
    vec![
        Row {
            name: "Кофейня".to_string(),
            value: 1,
        },
        Row {
            name: "Аптека".to_string(),
            value: 2,
        },
    ]
}

#[test]
fn auto_target_names_file_by_timestamp() {
    let dir = tempdir().unwrap();
    let target = SnapshotTarget::auto(dir.path());

    let path = write_snapshot(&rows(), &target, 1_700_000_000).unwrap();
    assert_eq!(
        path.file_name().unwrap().to_string_lossy(),
        "report_1700000000.json"
    );

    let contents = std::fs::read_to_string(&path).unwrap();
    assert!(contents.contains("Кофейня"));
    assert!(!contents.contains("\\u"));
    let parsed: serde_json::Value = serde_json::from_str(&contents).unwrap();
    assert_eq!(parsed.as_array().unwrap().len(), 2);
    assert_eq!(parsed[1]["value"], 2);
}

#[test]
fn auto_target_creates_missing_reports_dir() {
    let dir = tempdir().unwrap();
    let nested = dir.path().join("reports");
    let target = SnapshotTarget::auto(&nested);

    let path = write_snapshot(&rows(), &target, 42).unwrap();
    assert!(nested.is_dir());
    assert!(path.exists());
}

#[test]
fn named_target_writes_exactly_there() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("my_custom_report.json");
    let target = SnapshotTarget::named(&out);

    // the stamp plays no part in an explicitly named snapshot
    let path = write_snapshot(&rows(), &target, 99).unwrap();
    assert_eq!(path, out);
    assert!(out.exists());
}

#[test]
fn with_snapshot_hands_rows_back_unchanged() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("passthrough.json");
    let target = SnapshotTarget::named(&out);

    let produced = with_snapshot(&target, 7, || Ok(rows())).unwrap();
    assert_eq!(produced.len(), 2);
    assert_eq!(produced[0].name, "Кофейня");
    assert!(out.exists());
}

#[test]
fn failing_producer_writes_nothing() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("never.json");
    let target = SnapshotTarget::named(&out);

    let result: anyhow::Result<Vec<Row>> =
        with_snapshot(&target, 7, || anyhow::bail!("producer failed"));
    assert!(result.is_err());
    assert!(!out.exists());
}
