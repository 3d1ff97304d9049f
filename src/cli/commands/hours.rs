use crate::cli::parser::Cli;
use crate::cli::{Invocation, open_ledger};
use crate::config::Config;
use crate::core::aggregate::user_totals;
use crate::core::pay::pay;
use crate::db::queries;
use crate::errors::AppResult;
use crate::ui::messages::header;
use crate::utils::formatting::{format_currency, format_hours};

/// Own totals: closed sessions, summed hours and pay at the configured
/// hourly rate.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let pool = open_ledger(cfg)?;
    let inv = Invocation::from_cli(cli, &pool)?;

    let shifts = queries::closed_for(&pool.conn, &inv.user_id)?;
    let totals = user_totals(&shifts);
    let earned = pay(totals.hours, cfg.hourly_rate);

    header(format!("Hours — {}", inv.username));
    println!("Sessions: {}", totals.sessions);
    println!("Hours:    {}", format_hours(totals.hours));
    println!("Pay:      {}", format_currency(earned));
    Ok(())
}
