//! Ledger Store: every read and write against the `shifts` table.
//!
//! Timestamps are stored as RFC 3339 text in the ledger timezone. Rows whose
//! timestamps no longer parse are skipped by the read paths (with a console
//! warning) so aggregation never fails; only the mutating paths, which must
//! rewrite a specific row, surface `MalformedRecord`.

use crate::core::adjust::{AdjustOutcome, adjusted_clock_out, synthesized_span};
use crate::errors::{AppError, AppResult};
use crate::models::shift::{ClosedShift, ShiftRecord};
use crate::ui::messages::warning;
use crate::utils::time;
use chrono::DateTime;
use chrono_tz::Tz;
use rusqlite::{Connection, OptionalExtension, params};

/// Open a new shift for `user_id`. Fails with `AlreadyOpen` if one exists.
///
/// The check-before-insert gives the friendly error; the partial unique
/// index on open rows makes the pair atomic even against a second writer.
pub fn clock_in(
    conn: &Connection,
    user_id: &str,
    username: &str,
    now: &DateTime<Tz>,
) -> AppResult<()> {
    let exists: Option<i64> = conn
        .query_row(
            "SELECT 1 FROM shifts WHERE user_id = ?1 AND clock_out IS NULL",
            [user_id],
            |row| row.get(0),
        )
        .optional()?;
    if exists.is_some() {
        return Err(AppError::AlreadyOpen(username.to_string()));
    }

    let inserted = conn.execute(
        "INSERT INTO shifts (user_id, username, clock_in, clock_out)
         VALUES (?1, ?2, ?3, NULL)",
        params![user_id, username, time::to_store(now)],
    );

    match inserted {
        Ok(_) => Ok(()),
        // lost the race against another clock-in for the same user
        Err(rusqlite::Error::SqliteFailure(e, _))
            if e.code == rusqlite::ErrorCode::ConstraintViolation =>
        {
            Err(AppError::AlreadyOpen(username.to_string()))
        }
        Err(e) => Err(e.into()),
    }
}

/// Close the open shift for `user_id` and return the worked hours.
pub fn clock_out(conn: &Connection, user_id: &str, now: &DateTime<Tz>) -> AppResult<f64> {
    let rec = open_shift(conn, user_id)?.ok_or(AppError::NotOpen)?;

    conn.execute(
        "UPDATE shifts SET clock_out = ?1 WHERE id = ?2",
        params![time::to_store(now), rec.id],
    )?;

    Ok(time::hours_between(&rec.clock_in, now))
}

/// `clock_in` of the user's OPEN shift, if any. An open row with an
/// unreadable timestamp is reported as a warning and treated as absent;
/// only `clock_out`, which must rewrite the row, refuses to proceed.
pub fn current_open(conn: &Connection, user_id: &str) -> AppResult<Option<DateTime<Tz>>> {
    match open_shift(conn, user_id) {
        Ok(rec) => Ok(rec.map(|r| r.clock_in)),
        Err(AppError::MalformedRecord(raw)) => {
            warning(format!("Skipping record with unreadable timestamp: {}", raw));
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

/// Most recent `clock_out` across the user's CLOSED shifts ("last seen").
pub fn last_closed(conn: &Connection, user_id: &str) -> AppResult<Option<DateTime<Tz>>> {
    let raw: Option<String> = conn
        .query_row(
            "SELECT clock_out FROM shifts
             WHERE user_id = ?1 AND clock_out IS NOT NULL
             ORDER BY clock_out DESC LIMIT 1",
            [user_id],
            |row| row.get(0),
        )
        .optional()?;

    Ok(raw.and_then(|s| parse_or_warn(&s)))
}

/// Everyone currently clocked in: `(username, clock_in)`.
pub fn all_open(conn: &Connection) -> AppResult<Vec<(String, DateTime<Tz>)>> {
    let mut stmt = conn.prepare(
        "SELECT username, clock_in FROM shifts
         WHERE clock_out IS NULL
         ORDER BY clock_in ASC",
    )?;
    let rows = stmt.query_map([], |row| {
        Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?))
    })?;

    let mut out = Vec::new();
    for r in rows {
        let (username, raw) = r?;
        if let Some(ts) = parse_or_warn(&raw) {
            out.push((username, ts));
        }
    }
    Ok(out)
}

/// Every CLOSED shift, in insertion order (feeds the grouped reports and
/// the exporters).
pub fn all_closed(conn: &Connection) -> AppResult<Vec<ClosedShift>> {
    let mut stmt = conn.prepare(
        "SELECT username, clock_in, clock_out FROM shifts
         WHERE clock_out IS NOT NULL
         ORDER BY id ASC",
    )?;
    let rows = stmt.query_map([], |row| {
        Ok((
            row.get::<_, String>(0)?,
            row.get::<_, String>(1)?,
            row.get::<_, String>(2)?,
        ))
    })?;

    let mut out = Vec::new();
    for r in rows {
        let (username, raw_in, raw_out) = r?;
        match (parse_or_warn(&raw_in), parse_or_warn(&raw_out)) {
            (Some(clock_in), Some(clock_out)) => out.push(ClosedShift {
                username,
                clock_in,
                clock_out,
            }),
            _ => {} // skipped; parse_or_warn already reported it
        }
    }
    Ok(out)
}

/// CLOSED shifts for one user, in insertion order.
pub fn closed_for(conn: &Connection, user_id: &str) -> AppResult<Vec<ClosedShift>> {
    let mut stmt = conn.prepare(
        "SELECT username, clock_in, clock_out FROM shifts
         WHERE user_id = ?1 AND clock_out IS NOT NULL
         ORDER BY id ASC",
    )?;
    let rows = stmt.query_map([user_id], |row| {
        Ok((
            row.get::<_, String>(0)?,
            row.get::<_, String>(1)?,
            row.get::<_, String>(2)?,
        ))
    })?;

    let mut out = Vec::new();
    for r in rows {
        let (username, raw_in, raw_out) = r?;
        if let (Some(clock_in), Some(clock_out)) = (parse_or_warn(&raw_in), parse_or_warn(&raw_out))
        {
            out.push(ClosedShift {
                username,
                clock_in,
                clock_out,
            });
        }
    }
    Ok(out)
}

/// Apply an administrative hour adjustment (spec'd in `core::adjust`):
/// rewrite the most recently closed shift, or synthesize one if the user
/// has no closed history.
pub fn adjust(
    conn: &Connection,
    user_id: &str,
    username: &str,
    delta_hours: f64,
    now: &DateTime<Tz>,
) -> AppResult<AdjustOutcome> {
    let latest: Option<(i64, String, String)> = conn
        .query_row(
            "SELECT id, clock_in, clock_out FROM shifts
             WHERE user_id = ?1 AND clock_out IS NOT NULL
             ORDER BY clock_out DESC LIMIT 1",
            [user_id],
            |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)),
        )
        .optional()?;

    match latest {
        Some((rowid, raw_in, raw_out)) => {
            let clock_in =
                time::parse_ts(&raw_in).ok_or_else(|| AppError::MalformedRecord(raw_in))?;
            let clock_out =
                time::parse_ts(&raw_out).ok_or_else(|| AppError::MalformedRecord(raw_out))?;

            let new_out = adjusted_clock_out(&clock_in, &clock_out, delta_hours);
            conn.execute(
                "UPDATE shifts SET clock_out = ?1 WHERE id = ?2",
                params![time::to_store(&new_out), rowid],
            )?;
            Ok(AdjustOutcome::Updated)
        }
        None => {
            let (start, end) = synthesized_span(now, delta_hours);
            conn.execute(
                "INSERT INTO shifts (user_id, username, clock_in, clock_out)
                 VALUES (?1, ?2, ?3, ?4)",
                params![user_id, username, time::to_store(&start), time::to_store(&end)],
            )?;
            Ok(AdjustOutcome::Created)
        }
    }
}

/// Delete every shift. Irreversible; the audit log is kept.
pub fn purge_all(conn: &Connection) -> AppResult<usize> {
    let n = conn.execute("DELETE FROM shifts", [])?;
    Ok(n)
}

/// Resolve a display name against names already recorded in the ledger
/// (case-insensitive, most recent record wins). Used by `adjust` when the
/// target is given as a name instead of an ID.
pub fn find_user_by_name(conn: &Connection, name: &str) -> AppResult<Option<(String, String)>> {
    let found = conn
        .query_row(
            "SELECT user_id, username FROM shifts
             WHERE username = ?1 COLLATE NOCASE
             ORDER BY id DESC LIMIT 1",
            [name],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )
        .optional()?;
    Ok(found)
}

/// Latest recorded display name for a user, if any.
pub fn known_name(conn: &Connection, user_id: &str) -> AppResult<Option<String>> {
    let found = conn
        .query_row(
            "SELECT username FROM shifts
             WHERE user_id = ?1
             ORDER BY id DESC LIMIT 1",
            [user_id],
            |row| row.get(0),
        )
        .optional()?;
    Ok(found)
}

/// The user's OPEN shift as a full record. `MalformedRecord` if the
/// stored `clock_in` no longer parses.
fn open_shift(conn: &Connection, user_id: &str) -> AppResult<Option<ShiftRecord>> {
    let row: Option<(i64, String, String)> = conn
        .query_row(
            "SELECT id, username, clock_in FROM shifts
             WHERE user_id = ?1 AND clock_out IS NULL",
            [user_id],
            |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)),
        )
        .optional()?;

    match row {
        Some((id, username, raw_in)) => {
            let clock_in =
                time::parse_ts(&raw_in).ok_or_else(|| AppError::MalformedRecord(raw_in))?;
            Ok(Some(ShiftRecord {
                id,
                user_id: user_id.to_string(),
                username,
                clock_in,
                clock_out: None,
            }))
        }
        None => Ok(None),
    }
}

fn parse_or_warn(raw: &str) -> Option<DateTime<Tz>> {
    let parsed = time::parse_ts(raw);
    if parsed.is_none() {
        warning(format!("Skipping record with unreadable timestamp: {}", raw));
    }
    parsed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::initialize::init_db;
    use crate::utils::time::parse_ts;
    use rusqlite::Connection;

    fn setup() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        init_db(&conn).unwrap();
        conn
    }

    fn ts(s: &str) -> DateTime<Tz> {
        parse_ts(s).unwrap()
    }

    #[test]
    fn clock_in_then_out_leaves_one_closed_record() {
        let conn = setup();
        clock_in(&conn, "1", "alice", &ts("2025-06-01T09:00:00-05:00")).unwrap();
        let hours = clock_out(&conn, "1", &ts("2025-06-01T17:30:00-05:00")).unwrap();

        assert!((hours - 8.5).abs() < 1e-6);
        assert!(current_open(&conn, "1").unwrap().is_none());
        assert_eq!(closed_for(&conn, "1").unwrap().len(), 1);
    }

    #[test]
    fn second_clock_in_is_rejected_and_keeps_one_open_row() {
        let conn = setup();
        let now = ts("2025-06-01T09:00:00-05:00");
        clock_in(&conn, "1", "alice", &now).unwrap();

        let again = clock_in(&conn, "1", "alice", &ts("2025-06-01T10:00:00-05:00"));
        assert!(matches!(again, Err(AppError::AlreadyOpen(_))));

        let open: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM shifts WHERE user_id = '1' AND clock_out IS NULL",
                [],
                |r| r.get(0),
            )
            .unwrap();
        assert_eq!(open, 1);
        assert_eq!(current_open(&conn, "1").unwrap(), Some(now));
    }

    #[test]
    fn clock_out_without_open_shift_creates_nothing() {
        let conn = setup();
        let res = clock_out(&conn, "1", &ts("2025-06-01T17:00:00-05:00"));
        assert!(matches!(res, Err(AppError::NotOpen)));

        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM shifts", [], |r| r.get(0))
            .unwrap();
        assert_eq!(count, 0);
    }

    #[test]
    fn last_closed_picks_most_recent_clock_out() {
        let conn = setup();
        clock_in(&conn, "1", "alice", &ts("2025-06-01T09:00:00-05:00")).unwrap();
        clock_out(&conn, "1", &ts("2025-06-01T17:00:00-05:00")).unwrap();
        clock_in(&conn, "1", "alice", &ts("2025-06-02T09:00:00-05:00")).unwrap();
        clock_out(&conn, "1", &ts("2025-06-02T12:00:00-05:00")).unwrap();

        assert_eq!(
            last_closed(&conn, "1").unwrap(),
            Some(ts("2025-06-02T12:00:00-05:00"))
        );
    }

    #[test]
    fn malformed_rows_are_skipped_by_aggregation_reads() {
        let conn = setup();
        clock_in(&conn, "1", "alice", &ts("2025-06-01T09:00:00-05:00")).unwrap();
        clock_out(&conn, "1", &ts("2025-06-01T17:00:00-05:00")).unwrap();
        conn.execute(
            "INSERT INTO shifts (user_id, username, clock_in, clock_out)
             VALUES ('1', 'alice', 'garbage', 'more garbage')",
            [],
        )
        .unwrap();

        let closed = all_closed(&conn).unwrap();
        assert_eq!(closed.len(), 1);
    }

    #[test]
    fn malformed_open_row_is_invisible_to_status_but_blocks_clock_out() {
        let conn = setup();
        conn.execute(
            "INSERT INTO shifts (user_id, username, clock_in) VALUES ('1', 'alice', 'garbage')",
            [],
        )
        .unwrap();

        assert!(current_open(&conn, "1").unwrap().is_none());

        let res = clock_out(&conn, "1", &ts("2025-06-01T17:00:00-05:00"));
        assert!(matches!(res, Err(AppError::MalformedRecord(_))));
    }

    #[test]
    fn adjust_shrinks_but_never_past_clock_in() {
        let conn = setup();
        clock_in(&conn, "1", "alice", &ts("2025-06-01T09:00:00-05:00")).unwrap();
        clock_out(&conn, "1", &ts("2025-06-01T13:00:00-05:00")).unwrap();

        let out = adjust(&conn, "1", "alice", -10.0, &ts("2025-06-02T00:00:00-05:00")).unwrap();
        assert!(matches!(out, AdjustOutcome::Updated));

        let rec = &closed_for(&conn, "1").unwrap()[0];
        assert!((rec.duration_hours() - 0.0).abs() < 1e-6);
        assert_eq!(rec.clock_out, rec.clock_in);
    }

    #[test]
    fn adjust_with_no_history_synthesizes_span_ending_now() {
        let conn = setup();
        let now = ts("2025-06-02T12:00:00-05:00");
        let out = adjust(&conn, "2", "bob", 2.5, &now).unwrap();
        assert!(matches!(out, AdjustOutcome::Created));

        let rec = &closed_for(&conn, "2").unwrap()[0];
        assert!((rec.duration_hours() - 2.5).abs() < 1e-6);
        assert_eq!(rec.clock_out, now);
    }

    #[test]
    fn purge_all_empties_the_table() {
        let conn = setup();
        clock_in(&conn, "1", "alice", &ts("2025-06-01T09:00:00-05:00")).unwrap();
        clock_out(&conn, "1", &ts("2025-06-01T17:00:00-05:00")).unwrap();
        clock_in(&conn, "2", "bob", &ts("2025-06-01T09:00:00-05:00")).unwrap();

        assert_eq!(purge_all(&conn).unwrap(), 2);
        assert!(current_open(&conn, "2").unwrap().is_none());
        assert!(last_closed(&conn, "1").unwrap().is_none());
    }

    #[test]
    fn find_user_by_name_is_case_insensitive() {
        let conn = setup();
        clock_in(&conn, "7", "Alice", &ts("2025-06-01T09:00:00-05:00")).unwrap();

        let hit = find_user_by_name(&conn, "alice").unwrap();
        assert_eq!(hit, Some(("7".to_string(), "Alice".to_string())));
        assert!(find_user_by_name(&conn, "nobody").unwrap().is_none());
    }
}
