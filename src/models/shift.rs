use crate::utils::time;
use chrono::DateTime;
use chrono_tz::Tz;
use serde::Serialize;

/// One work session. `clock_out = None` means the shift is still OPEN.
///
/// `username` is a snapshot taken at clock-in; later renames are not
/// propagated, so the grouped reports bucket by the name as recorded.
#[derive(Debug, Clone, Serialize)]
pub struct ShiftRecord {
    pub id: i64,
    pub user_id: String,
    pub username: String,
    pub clock_in: DateTime<Tz>,
    pub clock_out: Option<DateTime<Tz>>,
}

impl ShiftRecord {
    pub fn is_open(&self) -> bool {
        self.clock_out.is_none()
    }

    /// Worked hours for a CLOSED shift; `None` while the shift is open.
    pub fn duration_hours(&self) -> Option<f64> {
        self.clock_out
            .as_ref()
            .map(|out| time::hours_between(&self.clock_in, out))
    }
}

/// A closed shift as handed to the aggregator and exporters: the subset of
/// columns the reports need, with `clock_out` guaranteed present.
#[derive(Debug, Clone, Serialize)]
pub struct ClosedShift {
    pub username: String,
    pub clock_in: DateTime<Tz>,
    pub clock_out: DateTime<Tz>,
}

impl ClosedShift {
    pub fn duration_hours(&self) -> f64 {
        time::hours_between(&self.clock_in, &self.clock_out)
    }
}
