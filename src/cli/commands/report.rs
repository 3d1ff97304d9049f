use crate::cli::parser::Cli;
use crate::cli::{open_ledger, require_admin, resolve_now};
use crate::config::Config;
use crate::core::aggregate::{UserTotals, totals_by_username, within_window};
use crate::core::pay::pay;
use crate::db::queries;
use crate::errors::AppResult;
use crate::ui::messages::header;
use crate::utils::formatting::{format_currency, format_hours};
use crate::utils::time::format_ts;
use chrono::Duration;

/// Admin: everyone currently clocked in.
pub fn handle_who(cli: &Cli, cfg: &Config) -> AppResult<()> {
    require_admin(cfg, cli, "who")?;
    let pool = open_ledger(cfg)?;

    let open = queries::all_open(&pool.conn)?;

    header("Currently clocked in");
    if open.is_empty() {
        println!("Nobody is clocked in.");
        return Ok(());
    }
    for (username, since) in open {
        println!("{} — since {}", username, format_ts(&since));
    }
    Ok(())
}

/// Admin: per-user totals over the whole ledger, highest hours first.
pub fn handle_all_hours(cli: &Cli, cfg: &Config) -> AppResult<()> {
    require_admin(cfg, cli, "all-hours")?;
    let pool = open_ledger(cfg)?;

    let shifts = queries::all_closed(&pool.conn)?;
    header("All hours");
    print_totals(&totals_by_username(&shifts), cfg);
    Ok(())
}

/// Admin: per-user totals over a trailing window (default from config).
pub fn handle_report(cli: &Cli, cfg: &Config, days: Option<i64>) -> AppResult<()> {
    require_admin(cfg, cli, "report")?;
    let pool = open_ledger(cfg)?;
    let now = resolve_now(cli)?;

    let days = days.unwrap_or(cfg.report_window_days);
    let shifts = queries::all_closed(&pool.conn)?;
    let recent = within_window(&shifts, &now, Duration::days(days));

    header(format!("{}-day report", days));
    print_totals(&totals_by_username(&recent), cfg);
    Ok(())
}

fn print_totals(grouped: &[(String, UserTotals)], cfg: &Config) {
    if grouped.is_empty() {
        println!("No closed sessions.");
        return;
    }
    for (username, totals) in grouped {
        println!(
            "{} — {} sessions, {} h, pay {}",
            username,
            totals.sessions,
            format_hours(totals.hours),
            format_currency(pay(totals.hours, cfg.hourly_rate))
        );
    }
}
