use crate::cli::parser::Cli;
use crate::cli::{Invocation, open_ledger};
use crate::config::Config;
use crate::db::log::audit;
use crate::db::queries;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::formatting::format_hours;
use crate::utils::time::format_ts;

pub fn handle_in(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let pool = open_ledger(cfg)?;
    let inv = Invocation::from_cli(cli, &pool)?;

    queries::clock_in(&pool.conn, &inv.user_id, &inv.username, &inv.now)?;
    audit(
        &pool.conn,
        "clock_in",
        &inv.user_id,
        &format!("{} clocked in", inv.username),
    )?;

    success(format!(
        "🟢 {} clocked in at {}",
        inv.username,
        format_ts(&inv.now)
    ));
    Ok(())
}

pub fn handle_out(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let pool = open_ledger(cfg)?;
    let inv = Invocation::from_cli(cli, &pool)?;

    let hours = queries::clock_out(&pool.conn, &inv.user_id, &inv.now)?;
    audit(
        &pool.conn,
        "clock_out",
        &inv.user_id,
        &format!("{} clocked out ({} h)", inv.username, format_hours(hours)),
    )?;

    success(format!(
        "🔴 {} clocked out at {} — {} hours this session",
        inv.username,
        format_ts(&inv.now),
        format_hours(hours)
    ));
    Ok(())
}
