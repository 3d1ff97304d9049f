use crate::cli::parser::Cli;
use crate::cli::open_ledger;
use crate::config::Config;
use crate::db::queries;
use crate::errors::AppResult;
use crate::export::{ExportFormat, csv, json};
use crate::ui::messages::success;

/// Export every closed session, with computed hours, to CSV or JSON.
pub fn handle(_cli: &Cli, cfg: &Config, format: ExportFormat, file: &str) -> AppResult<()> {
    let pool = open_ledger(cfg)?;
    let shifts = queries::all_closed(&pool.conn)?;

    match format {
        ExportFormat::Csv => csv::write_csv(file, &shifts)?,
        ExportFormat::Json => json::write_json(file, &shifts)?,
    }

    success(format!("Exported {} sessions to {}", shifts.len(), file));
    Ok(())
}
