#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub const ADMIN_ID: &str = "99";

pub fn clb() -> Command {
    let mut cmd = cargo_bin_cmd!("clockledger");
    cmd.env("CLOCKLEDGER_ADMIN_IDS", ADMIN_ID);
    cmd
}

/// Create a unique test DB path inside the system temp dir and remove any
/// existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_clockledger.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();

    clb().args(["--db", &db_path, "init"]).assert().success();

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

/// Record one closed shift for a user at fixed timestamps.
pub fn seed_shift(db_path: &str, user: &str, name: &str, clock_in: &str, clock_out: &str) {
    clb()
        .args([
            "--db", db_path, "--user", user, "--name", name, "--at", clock_in, "in",
        ])
        .assert()
        .success();

    clb()
        .args(["--db", db_path, "--user", user, "--at", clock_out, "out"])
        .assert()
        .success();
}
