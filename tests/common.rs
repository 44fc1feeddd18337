#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::NaiveDate;
use gymattend::db::documents::DocStore;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn gat() -> Command {
    cargo_bin_cmd!("gymattend")
}

/// Create a unique test store path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_gymattend.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

pub fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("valid date")
}

/// Open an initialized store directly through the library API
pub fn open_store(db_path: &str) -> DocStore {
    let store = DocStore::open(db_path).expect("open store");
    gymattend::db::initialize::init_db(&store.pool.conn).expect("init db");
    store
}

/// Initialize the store via the CLI and add a member with one dependent
pub fn init_store_with_members(db_path: &str) {
    // init store (creates tables)
    gat()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    gat()
        .args([
            "--db",
            db_path,
            "--test",
            "member",
            "m001",
            "--name",
            "Mario Rossi",
        ])
        .assert()
        .success();

    gat()
        .args([
            "--db",
            db_path,
            "--test",
            "member",
            "d01",
            "--name",
            "Luca Rossi",
            "--dependent-of",
            "m001",
        ])
        .assert()
        .success();
}
