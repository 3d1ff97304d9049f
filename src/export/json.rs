use crate::errors::{AppError, AppResult};
use crate::models::shift::ClosedShift;
use serde::Serialize;
use std::fs::File;

#[derive(Serialize)]
struct JsonSession<'a> {
    username: &'a str,
    clock_in: String,
    clock_out: String,
    hours: f64,
}

/// Write all closed sessions to a pretty-printed JSON file.
pub fn write_json(path: &str, shifts: &[ClosedShift]) -> AppResult<()> {
    let rows: Vec<JsonSession<'_>> = shifts
        .iter()
        .map(|s| JsonSession {
            username: &s.username,
            clock_in: s.clock_in.to_rfc3339(),
            clock_out: s.clock_out.to_rfc3339(),
            hours: s.duration_hours(),
        })
        .collect();

    let file = File::create(path)?;
    serde_json::to_writer_pretty(file, &rows).map_err(|e| AppError::Export(e.to_string()))?;
    Ok(())
}
