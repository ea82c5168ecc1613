#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

/// `clocker` with HOME pointed at an empty temp dir, so a real user config
/// never leaks into the tests.
pub fn clk() -> Command {
    let mut home: PathBuf = env::temp_dir();
    home.push("clocker_test_home");
    let mut cmd = cargo_bin_cmd!("clocker");
    cmd.env("HOME", home).env_remove("RUST_LOG");
    cmd
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_clocker.sqlite", name));
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

/// Fresh, initialized DB.
pub fn init_db(name: &str) -> String {
    let db_path = setup_test_db(name);
    clk()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();
    db_path
}

/// Run `clocker --db <db> <args>` and expect success.
pub fn ok(db_path: &str, args: &[&str]) {
    clk().arg("--db").arg(db_path).args(args).assert().success();
}

/// Lines printed by `--display` (they start with the record number).
pub fn record_lines(db_path: &str) -> Vec<String> {
    let out = clk()
        .args(["--db", db_path, "-d"])
        .output()
        .expect("failed to run --display");
    assert!(out.status.success());

    String::from_utf8_lossy(&out.stdout)
        .lines()
        .filter(|line| line.trim_start().starts_with(|c: char| c.is_ascii_digit()))
        .map(str::to_string)
        .collect()
}
