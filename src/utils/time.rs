//! Ledger time utilities: the fixed civil timezone, RFC 3339 parsing and
//! the formats used by the status and report views.

use chrono::{DateTime, TimeZone};
use chrono_tz::America::Chicago;
use chrono_tz::Tz;

/// Every timestamp in the ledger lives in this zone (DST-aware).
/// Stored values carry their UTC offset, so they reconstruct identically
/// no matter what the host machine's local zone is.
pub const LEDGER_TZ: Tz = Chicago;

pub fn now() -> DateTime<Tz> {
    chrono::Utc::now().with_timezone(&LEDGER_TZ)
}

/// Parse a stored RFC 3339 timestamp back into the ledger zone.
pub fn parse_ts(s: &str) -> Option<DateTime<Tz>> {
    DateTime::parse_from_rfc3339(s)
        .ok()
        .map(|dt| dt.with_timezone(&LEDGER_TZ))
}

pub fn to_store(ts: &DateTime<Tz>) -> String {
    ts.to_rfc3339()
}

/// "2025-03-09 09:00 AM CST" — used in status lines and reports.
pub fn format_ts(ts: &DateTime<Tz>) -> String {
    ts.format("%Y-%m-%d %I:%M %p %Z").to_string()
}

/// Elapsed hours between two timestamps as a fraction (can be negative).
pub fn hours_between<T: TimeZone>(start: &DateTime<T>, end: &DateTime<T>) -> f64 {
    (end.clone() - start.clone()).num_seconds() as f64 / 3600.0
}
