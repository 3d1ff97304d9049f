pub mod commands;
pub mod parser;

use crate::config::Config;
use crate::db::initialize::init_db;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::{AppError, AppResult};
use crate::utils::time;
use chrono::DateTime;
use chrono_tz::Tz;
use self::parser::Cli;

/// The per-invocation context the dispatcher hands to the core: who is
/// acting, under what display name, and what "now" is. The timestamp can
/// be pinned with the hidden `--at` flag.
pub struct Invocation {
    pub user_id: String,
    pub username: String,
    pub now: DateTime<Tz>,
}

impl Invocation {
    pub fn from_cli(cli: &Cli, pool: &DbPool) -> AppResult<Self> {
        let user_id = cli
            .user
            .clone()
            .ok_or_else(|| AppError::Config("missing --user <ID>".into()))?;

        // display name: explicit flag, else the last one the ledger saw,
        // else a placeholder (the original did the same for unresolvable
        // members)
        let username = match &cli.name {
            Some(n) => n.clone(),
            None => queries::known_name(&pool.conn, &user_id)?
                .unwrap_or_else(|| format!("User {}", user_id)),
        };

        Ok(Self {
            user_id,
            username,
            now: resolve_now(cli)?,
        })
    }
}

pub fn resolve_now(cli: &Cli) -> AppResult<DateTime<Tz>> {
    match &cli.at {
        Some(raw) => time::parse_ts(raw)
            .ok_or_else(|| AppError::Config(format!("invalid --at timestamp '{}'", raw))),
        None => Ok(time::now()),
    }
}

/// Open the configured database and make sure the schema exists.
pub fn open_ledger(cfg: &Config) -> AppResult<DbPool> {
    let pool = DbPool::new(&cfg.database)?;
    init_db(&pool.conn)?;
    Ok(pool)
}

/// Gate for the admin-only subcommands. The core trusts this flag; it is
/// resolved here, against the config's admin list, before any admin
/// operation runs.
pub fn require_admin(cfg: &Config, cli: &Cli, operation: &str) -> AppResult<()> {
    let user_id = cli
        .user
        .as_deref()
        .ok_or_else(|| AppError::Config("missing --user <ID>".into()))?;
    if cfg.is_admin(user_id) {
        Ok(())
    } else {
        Err(AppError::PermissionDenied(operation.to_string()))
    }
}
