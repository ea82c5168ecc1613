use predicates::str::contains;

mod common;
use common::{clk, init_db, ok};

#[test]
fn test_today_on_empty_db_is_zero() {
    let db_path = init_db("today_empty");

    clk()
        .args(["--db", &db_path, "--today"])
        .assert()
        .success()
        .stdout(contains("Total WORK"))
        .stdout(contains("Total LUNCH"))
        .stdout(contains("Total BREAK"))
        .stdout(contains("0 hrs, 0 mins, 0 seconds"));
}

#[test]
fn test_week_prints_seven_days() {
    let db_path = init_db("week_seven_days");

    ok(&db_path, &["-i", "-w"]);

    let out = clk()
        .args(["--db", &db_path, "--week"])
        .output()
        .expect("failed to run --week");
    assert!(out.status.success());

    let stdout = String::from_utf8_lossy(&out.stdout);
    assert_eq!(stdout.matches("Total WORK").count(), 7);
    assert_eq!(stdout.matches("Total BREAK").count(), 7);
}

#[test]
fn test_clock_then_display_and_summarize_in_one_run() {
    let db_path = init_db("record_then_today");

    clk()
        .args(["--db", &db_path, "-i", "-w", "-d", "-t"])
        .assert()
        .success()
        .stdout(contains("01:"))
        .stdout(contains("Total WORK"));
}
