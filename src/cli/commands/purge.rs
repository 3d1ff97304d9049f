use crate::cli::parser::Cli;
use crate::cli::{open_ledger, require_admin};
use crate::config::Config;
use crate::db::log::audit;
use crate::db::queries;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};

/// Admin: delete every shift record. The audit log survives the purge.
pub fn handle(cli: &Cli, cfg: &Config, yes: bool) -> AppResult<()> {
    require_admin(cfg, cli, "purge")?;

    if !yes {
        warning("Refusing to purge without --yes");
        return Ok(());
    }

    let pool = open_ledger(cfg)?;
    let n = queries::purge_all(&pool.conn)?;
    audit(&pool.conn, "purge", "", &format!("Purged {} records", n))?;

    success(format!("🧹 Purged {} records", n));
    Ok(())
}
