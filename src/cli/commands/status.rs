use crate::cli::parser::Cli;
use crate::cli::{Invocation, open_ledger};
use crate::config::Config;
use crate::core::aggregate::{Status, status};
use crate::db::queries;
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::utils::time::format_ts;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let pool = open_ledger(cfg)?;
    let inv = Invocation::from_cli(cli, &pool)?;

    let open_since = queries::current_open(&pool.conn, &inv.user_id)?;
    let last_out = queries::last_closed(&pool.conn, &inv.user_id)?;

    match status(open_since, last_out) {
        Status::ClockedIn(since) => {
            info(format!("{} is clocked in since {}", inv.username, format_ts(&since)));
        }
        Status::LastSeen(out) => {
            info(format!("{} last clocked out at {}", inv.username, format_ts(&out)));
        }
        Status::NoSessions => {
            info(format!("{} has no sessions on record", inv.username));
        }
    }
    Ok(())
}
