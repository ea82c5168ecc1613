use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{clk, init_db, ok, record_lines};

#[test]
fn test_init_creates_database() {
    let db_path = common::setup_test_db("init_creates");

    clk()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("initialization completed"));

    assert!(std::path::Path::new(&db_path).exists());
}

#[test]
fn test_clock_in_prints_the_record() {
    let db_path = init_db("clock_in_prints");

    clk()
        .args(["--db", &db_path, "--in", "--work"])
        .assert()
        .success()
        .stdout(contains("WORK").and(contains("IN")));

    assert_eq!(record_lines(&db_path).len(), 1);
}

#[test]
fn test_double_clock_in_is_rejected() {
    let db_path = init_db("double_in");

    ok(&db_path, &["-i", "-w"]);

    clk()
        .args(["--db", &db_path, "-i", "-w"])
        .assert()
        .failure()
        .stderr(contains(
            "already clocked IN for WORK; cannot clock IN again",
        ));

    assert_eq!(record_lines(&db_path).len(), 1);
}

#[test]
fn test_clock_out_without_in_is_rejected() {
    let db_path = init_db("out_without_in");

    clk()
        .args(["--db", &db_path, "-o", "-l"])
        .assert()
        .failure()
        .stderr(contains("cannot clock OUT for LUNCH when not clocked IN"));

    assert!(record_lines(&db_path).is_empty());
}

#[test]
fn test_break_requires_work() {
    let db_path = init_db("break_requires_work");

    clk()
        .args(["--db", &db_path, "-i", "-b"])
        .assert()
        .failure()
        .stderr(contains(
            "cannot clock IN for BREAK when not clocked IN for WORK",
        ));

    ok(&db_path, &["-i", "-w"]);
    ok(&db_path, &["-i", "-b"]);
    ok(&db_path, &["-o", "-b"]);
    ok(&db_path, &["-o", "-w"]);

    clk()
        .args(["--db", &db_path, "-i", "-b"])
        .assert()
        .failure()
        .stderr(contains("not clocked IN for WORK"));

    assert_eq!(record_lines(&db_path).len(), 4);
}

#[test]
fn test_direction_without_activity_records_nothing() {
    let db_path = init_db("direction_only");

    clk()
        .args(["--db", &db_path, "--in"])
        .assert()
        .success()
        .stdout(contains("Nothing recorded"));

    assert!(record_lines(&db_path).is_empty());
}

#[test]
fn test_conflicting_flags_fail() {
    let db_path = init_db("conflicting_flags");

    clk()
        .args(["--db", &db_path, "-i", "-o", "-w"])
        .assert()
        .failure();

    clk()
        .args(["--db", &db_path, "-i", "-w", "-l"])
        .assert()
        .failure();

    assert!(record_lines(&db_path).is_empty());
}

#[test]
fn test_rejection_stops_later_flags() {
    let db_path = init_db("rejection_stops");

    ok(&db_path, &["-i", "-w"]);

    clk()
        .args(["--db", &db_path, "-i", "-w", "-d"])
        .assert()
        .failure()
        .stdout(contains("01:").not());
}

#[test]
fn test_internal_log_records_clock_events() {
    let db_path = init_db("internal_log");

    ok(&db_path, &["-i", "-w"]);
    ok(&db_path, &["-o", "-w"]);

    clk()
        .args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("Clocked IN for WORK"))
        .stdout(contains("Clocked OUT for WORK"));
}
