//! Time Aggregator: pure computations over ledger rows. No I/O here; the
//! store hands in already-parsed rows (malformed ones were dropped at read
//! time).

use crate::models::shift::ClosedShift;
use chrono::{DateTime, Duration};
use chrono_tz::Tz;
use std::collections::HashMap;

/// A single user's session state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    /// Clocked in since the given instant.
    ClockedIn(DateTime<Tz>),
    /// Not clocked in; last clock-out at the given instant.
    LastSeen(DateTime<Tz>),
    /// No sessions on record.
    NoSessions,
}

pub fn status(open_since: Option<DateTime<Tz>>, last_out: Option<DateTime<Tz>>) -> Status {
    match (open_since, last_out) {
        (Some(since), _) => Status::ClockedIn(since),
        (None, Some(out)) => Status::LastSeen(out),
        (None, None) => Status::NoSessions,
    }
}

/// Closed-session count and summed hours for one user.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UserTotals {
    pub sessions: usize,
    pub hours: f64,
}

pub fn user_totals(shifts: &[ClosedShift]) -> UserTotals {
    UserTotals {
        sessions: shifts.len(),
        hours: shifts.iter().map(|s| s.duration_hours()).sum(),
    }
}

/// Per-username totals over a set of closed shifts, sorted by hours
/// descending. Grouping is by the recorded `username` snapshot, so a user
/// renamed between shifts shows up as two buckets. The sort is stable:
/// ties keep first-appearance order.
pub fn totals_by_username(shifts: &[ClosedShift]) -> Vec<(String, UserTotals)> {
    let mut order: Vec<String> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut totals: Vec<UserTotals> = Vec::new();

    for shift in shifts {
        let i = *index.entry(shift.username.clone()).or_insert_with(|| {
            order.push(shift.username.clone());
            totals.push(UserTotals {
                sessions: 0,
                hours: 0.0,
            });
            totals.len() - 1
        });
        totals[i].sessions += 1;
        totals[i].hours += shift.duration_hours();
    }

    let mut out: Vec<(String, UserTotals)> = order.into_iter().zip(totals).collect();
    out.sort_by(|a, b| {
        b.1.hours
            .partial_cmp(&a.1.hours)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    out
}

/// Keep only shifts whose `clock_out` falls in `[now - window, now]`,
/// compared as full timestamps on both ends.
pub fn within_window(
    shifts: &[ClosedShift],
    now: &DateTime<Tz>,
    window: Duration,
) -> Vec<ClosedShift> {
    let cutoff = *now - window;
    shifts
        .iter()
        .filter(|s| s.clock_out >= cutoff && s.clock_out <= *now)
        .cloned()
        .collect()
}
