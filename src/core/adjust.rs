//! Administrative adjustment arithmetic. Pure: the store applies the
//! results.

use crate::utils::time::hours_between;
use chrono::{DateTime, Duration};
use chrono_tz::Tz;

/// Which branch the adjustment took, so the caller can report
/// "updated last session" vs "created new adjustment record".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdjustOutcome {
    Updated,
    Created,
}

impl AdjustOutcome {
    pub fn describe(&self) -> &'static str {
        match self {
            AdjustOutcome::Updated => "updated last session",
            AdjustOutcome::Created => "created new adjustment record",
        }
    }
}

/// New `clock_out` for an existing closed shift after applying `delta`
/// hours: the duration is clamped at zero, so the shift can shrink to
/// `clock_in` but never past it.
pub fn adjusted_clock_out(
    clock_in: &DateTime<Tz>,
    clock_out: &DateTime<Tz>,
    delta_hours: f64,
) -> DateTime<Tz> {
    let duration = hours_between(clock_in, clock_out);
    let adjusted = (duration + delta_hours).max(0.0);
    *clock_in + hours(adjusted)
}

/// Span for a synthesized adjustment record when the user has no closed
/// history: a positive delta yields a shift of `delta` hours ending now.
///
/// A negative delta yields `start = now, end = now - |delta|` — an
/// end-before-start row, exactly as the system has always recorded it.
/// Totals treat it as a deduction.
pub fn synthesized_span(now: &DateTime<Tz>, delta_hours: f64) -> (DateTime<Tz>, DateTime<Tz>) {
    let start = *now - hours(delta_hours.max(0.0));
    let end = if delta_hours >= 0.0 {
        *now
    } else {
        *now - hours(delta_hours.abs())
    };
    (start, end)
}

fn hours(h: f64) -> Duration {
    Duration::milliseconds((h * 3_600_000.0).round() as i64)
}
