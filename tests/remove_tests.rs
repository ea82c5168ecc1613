use predicates::str::contains;

mod common;
use common::{clk, init_db, ok, record_lines};

fn two_records(name: &str) -> String {
    let db_path = init_db(name);
    ok(&db_path, &["-i", "-w"]);
    ok(&db_path, &["-o", "-w"]);
    db_path
}

#[test]
fn test_remove_out_of_range_changes_nothing() {
    let db_path = two_records("remove_out_of_range");

    for bad in ["0", "3"] {
        clk()
            .args(["--db", &db_path, "-r", "1", bad])
            .assert()
            .failure()
            .stderr(contains("out of range"));
    }

    assert_eq!(record_lines(&db_path).len(), 2);
}

#[test]
fn test_remove_by_position() {
    let db_path = two_records("remove_by_position");

    clk()
        .args(["--db", &db_path, "--remove", "1"])
        .assert()
        .success()
        .stdout(contains("Removed 1 clock record(s)"));

    let lines = record_lines(&db_path);
    assert_eq!(lines.len(), 1);
    assert!(lines[0].starts_with("01:"));
    assert!(lines[0].contains("OUT"));
}

#[test]
fn test_clear_declined_keeps_records() {
    let db_path = two_records("clear_declined");

    clk()
        .args(["--db", &db_path, "--clear"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(contains("Delete all clock records? [Y/n]"))
        .stdout(contains("Operation cancelled"));

    assert_eq!(record_lines(&db_path).len(), 2);
}

#[test]
fn test_clear_blank_answer_deletes_everything() {
    let db_path = two_records("clear_blank");

    clk()
        .args(["--db", &db_path, "--clear"])
        .write_stdin("\n")
        .assert()
        .success()
        .stdout(contains("Deleted all 2 clock record(s)"));

    assert!(record_lines(&db_path).is_empty());
}

#[test]
fn test_clear_with_closed_stdin_keeps_records() {
    let db_path = two_records("clear_eof");

    clk()
        .args(["--db", &db_path, "--clear"])
        .write_stdin("")
        .assert()
        .success()
        .stdout(contains("Operation cancelled"));

    assert_eq!(record_lines(&db_path).len(), 2);
}

#[test]
fn test_clear_with_yes_skips_prompt() {
    let db_path = two_records("clear_yes");

    clk()
        .args(["--db", &db_path, "--clear", "--yes"])
        .assert()
        .success();

    assert!(record_lines(&db_path).is_empty());
}
