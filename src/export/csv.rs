use crate::models::shift::ClosedShift;
use crate::utils::formatting::format_hours;
use csv::Writer;

/// Write all closed sessions to a CSV file: one row per session with the
/// username, both timestamps and the computed hours.
pub fn write_csv(path: &str, shifts: &[ClosedShift]) -> std::io::Result<()> {
    let mut wtr = Writer::from_path(path)?;

    wtr.write_record(["username", "clock_in", "clock_out", "hours"])?;

    for s in shifts {
        wtr.write_record(&[
            s.username.clone(),
            s.clock_in.to_rfc3339(),
            s.clock_out.to_rfc3339(),
            format_hours(s.duration_hours()),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
