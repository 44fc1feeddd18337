use predicates::str::contains;
use std::fs;

mod common;
use common::{gat, init_store_with_members, setup_test_db, temp_out};

fn seed_checkins(db_path: &str) {
    for (day, person) in [
        ("2025-02-10", vec!["checkin", "m001"]),
        ("2025-02-11", vec!["checkin", "m001"]),
        ("2025-02-11", vec!["checkin", "m001", "--dependent", "d01"]),
    ] {
        let mut args = vec!["--db", db_path, "--test", "--today", day];
        args.extend(person);
        gat().args(&args).assert().success();
    }

    // Confirm one of them so both states appear in the export
    gat()
        .args([
            "--db",
            db_path,
            "--test",
            "--today",
            "2025-02-10",
            "confirm",
            "m001",
        ])
        .assert()
        .success();
}

#[test]
fn test_export_csv_contains_header_and_rows() {
    let db_path = setup_test_db("export_csv");
    let out = temp_out("export_csv", "csv");
    init_store_with_members(&db_path);
    seed_checkins(&db_path);

    gat()
        .args([
            "--db", &db_path, "--test", "export", "--format", "csv", "--file", &out,
        ])
        .assert()
        .success()
        .stdout(contains("CSV export completed"));

    let content = fs::read_to_string(&out).expect("read export");
    assert!(content.starts_with("member_id,person,name,date,state"));
    assert!(content.contains("m001,m001,Mario Rossi,2025-02-10,confirmed"));
    assert!(content.contains("m001,m001/d01,Luca Rossi,2025-02-11,checked-in"));
}

#[test]
fn test_export_json_contains_records() {
    let db_path = setup_test_db("export_json");
    let out = temp_out("export_json", "json");
    init_store_with_members(&db_path);
    seed_checkins(&db_path);

    gat()
        .args([
            "--db", &db_path, "--test", "export", "--format", "json", "--file", &out,
        ])
        .assert()
        .success()
        .stdout(contains("JSON export completed"));

    let content = fs::read_to_string(&out).expect("read export");
    let rows: serde_json::Value = serde_json::from_str(&content).expect("valid json");

    let arr = rows.as_array().expect("array");
    assert_eq!(arr.len(), 3);
    assert_eq!(arr[0]["date"], "2025-02-10");
    assert_eq!(arr[0]["state"], "confirmed");
}

#[test]
fn test_export_range_filters_records() {
    let db_path = setup_test_db("export_range");
    let out = temp_out("export_range", "csv");
    init_store_with_members(&db_path);
    seed_checkins(&db_path);

    gat()
        .args([
            "--db",
            &db_path,
            "--test",
            "export",
            "--format",
            "csv",
            "--file",
            &out,
            "--range",
            "2025-02-10",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read export");
    assert!(content.contains("2025-02-10"));
    assert!(!content.contains("2025-02-11"));
}

#[test]
fn test_export_relative_path_rejected() {
    let db_path = setup_test_db("export_relative");
    init_store_with_members(&db_path);

    gat()
        .args([
            "--db",
            &db_path,
            "--test",
            "export",
            "--format",
            "csv",
            "--file",
            "relative_out.csv",
        ])
        .assert()
        .failure()
        .stderr(contains("must be absolute"));
}

#[test]
fn test_export_refuses_overwrite_without_force() {
    let db_path = setup_test_db("export_overwrite");
    let out = temp_out("export_overwrite", "csv");
    init_store_with_members(&db_path);
    seed_checkins(&db_path);

    fs::write(&out, "existing content").expect("pre-create file");

    gat()
        .args([
            "--db", &db_path, "--test", "export", "--format", "csv", "--file", &out,
        ])
        .write_stdin("n\n")
        .assert()
        .failure()
        .stderr(contains("Export cancelled"));

    // --force overwrites without asking
    gat()
        .args([
            "--db", &db_path, "--test", "export", "--format", "csv", "--file", &out, "--force",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read export");
    assert!(content.contains("member_id"));
}

#[test]
fn test_export_empty_range_warns() {
    let db_path = setup_test_db("export_empty");
    let out = temp_out("export_empty", "csv");
    init_store_with_members(&db_path);

    gat()
        .args([
            "--db", &db_path, "--test", "export", "--format", "csv", "--file", &out,
        ])
        .assert()
        .success()
        .stdout(contains("No presence records"));

    assert!(fs::metadata(&out).is_err());
}

#[test]
fn test_export_single_member_filter() {
    let db_path = setup_test_db("export_member_filter");
    let out = temp_out("export_member_filter", "csv");
    init_store_with_members(&db_path);
    seed_checkins(&db_path);

    // Second member whose records must not appear
    gat()
        .args([
            "--db", &db_path, "--test", "member", "m002", "--name", "Anna Bianchi",
        ])
        .assert()
        .success();
    gat()
        .args([
            "--db",
            &db_path,
            "--test",
            "--today",
            "2025-02-12",
            "checkin",
            "m002",
        ])
        .assert()
        .success();

    gat()
        .args([
            "--db", &db_path, "--test", "export", "--format", "csv", "--file", &out, "--member",
            "m001",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read export");
    assert!(content.contains("Mario Rossi"));
    assert!(!content.contains("Anna Bianchi"));
}
