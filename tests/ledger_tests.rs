use predicates::str::contains;

mod common;
use common::{clb, seed_shift, setup_test_db};

#[test]
fn test_clock_in_then_out_reports_session_hours() {
    let db = setup_test_db("in_out");

    clb()
        .args([
            "--db",
            &db,
            "--user",
            "1",
            "--name",
            "alice",
            "--at",
            "2025-06-02T09:00:00-05:00",
            "in",
        ])
        .assert()
        .success()
        .stdout(contains("alice clocked in"));

    clb()
        .args([
            "--db",
            &db,
            "--user",
            "1",
            "--at",
            "2025-06-02T17:30:00-05:00",
            "out",
        ])
        .assert()
        .success()
        .stdout(contains("8.50 hours this session"));
}

#[test]
fn test_double_clock_in_is_rejected() {
    let db = setup_test_db("double_in");

    clb()
        .args([
            "--db",
            &db,
            "--user",
            "1",
            "--name",
            "alice",
            "--at",
            "2025-06-02T09:00:00-05:00",
            "in",
        ])
        .assert()
        .success();

    clb()
        .args([
            "--db",
            &db,
            "--user",
            "1",
            "--name",
            "alice",
            "--at",
            "2025-06-02T10:00:00-05:00",
            "in",
        ])
        .assert()
        .failure()
        .stderr(contains("already clocked in"));
}

#[test]
fn test_clock_out_without_open_shift_fails() {
    let db = setup_test_db("out_without_in");

    clb()
        .args([
            "--db",
            &db,
            "--user",
            "1",
            "--at",
            "2025-06-02T17:00:00-05:00",
            "out",
        ])
        .assert()
        .failure()
        .stderr(contains("not clocked in"));
}

#[test]
fn test_status_reflects_the_session_lifecycle() {
    let db = setup_test_db("status_lifecycle");

    // no history yet
    clb()
        .args(["--db", &db, "--user", "1", "--name", "alice", "status"])
        .assert()
        .success()
        .stdout(contains("no sessions on record"));

    clb()
        .args([
            "--db",
            &db,
            "--user",
            "1",
            "--name",
            "alice",
            "--at",
            "2025-06-02T09:00:00-05:00",
            "in",
        ])
        .assert()
        .success();

    clb()
        .args(["--db", &db, "--user", "1", "status"])
        .assert()
        .success()
        .stdout(contains("clocked in since 2025-06-02 09:00 AM"));

    clb()
        .args([
            "--db",
            &db,
            "--user",
            "1",
            "--at",
            "2025-06-02T17:00:00-05:00",
            "out",
        ])
        .assert()
        .success();

    clb()
        .args(["--db", &db, "--user", "1", "status"])
        .assert()
        .success()
        .stdout(contains("last clocked out at 2025-06-02 05:00 PM"));
}

#[test]
fn test_reclock_after_out_opens_a_fresh_session() {
    let db = setup_test_db("reclock");
    seed_shift(
        &db,
        "1",
        "alice",
        "2025-06-02T09:00:00-05:00",
        "2025-06-02T12:00:00-05:00",
    );

    clb()
        .args([
            "--db",
            &db,
            "--user",
            "1",
            "--at",
            "2025-06-02T13:00:00-05:00",
            "in",
        ])
        .assert()
        .success()
        .stdout(contains("alice clocked in"));

    clb()
        .args(["--db", &db, "--user", "1", "status"])
        .assert()
        .success()
        .stdout(contains("clocked in since 2025-06-02 01:00 PM"));
}

#[test]
fn test_audit_log_records_clock_events() {
    let db = setup_test_db("audit");
    seed_shift(
        &db,
        "1",
        "alice",
        "2025-06-02T09:00:00-05:00",
        "2025-06-02T12:00:00-05:00",
    );

    clb()
        .args(["--db", &db, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("clock_in"))
        .stdout(contains("clock_out"))
        .stdout(contains("alice clocked out (3.00 h)"));
}
