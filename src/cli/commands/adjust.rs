use crate::cli::parser::Cli;
use crate::cli::{open_ledger, require_admin, resolve_now};
use crate::config::Config;
use crate::db::log::audit;
use crate::db::queries;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use rusqlite::Connection;

/// Admin: apply a signed hour delta to a user's most recent closed
/// session (or synthesize one). The reason is recorded in the audit log
/// and plays no part in the arithmetic.
pub fn handle(
    cli: &Cli,
    cfg: &Config,
    target: &str,
    delta: &str,
    reason: Option<&str>,
    display_name: Option<&str>,
) -> AppResult<()> {
    require_admin(cfg, cli, "adjust")?;
    let pool = open_ledger(cfg)?;
    let now = resolve_now(cli)?;

    let delta_hours: f64 = delta
        .trim()
        .parse()
        .ok()
        .filter(|v: &f64| v.is_finite())
        .ok_or_else(|| AppError::InvalidAdjustment(delta.to_string()))?;

    let (user_id, ledger_name) = resolve_target(&pool.conn, target)?;
    let username = display_name
        .map(str::to_string)
        .or(ledger_name)
        .unwrap_or_else(|| format!("User {}", user_id));

    let outcome = queries::adjust(&pool.conn, &user_id, &username, delta_hours, &now)?;

    let reason = reason.unwrap_or("No reason provided");
    audit(
        &pool.conn,
        "adjust",
        &user_id,
        &format!(
            "{:+.2} h for {} ({}): {}",
            delta_hours,
            username,
            outcome.describe(),
            reason
        ),
    )?;

    success(format!(
        "✏️ Adjusted {} by {:+.2} hours ({})",
        username,
        delta_hours,
        outcome.describe()
    ));
    Ok(())
}

/// A target that is all digits is taken as a stable ID (IDs are opaque
/// but numeric in practice); anything else is resolved as a display name
/// against the ledger.
fn resolve_target(conn: &Connection, target: &str) -> AppResult<(String, Option<String>)> {
    if !target.is_empty() && target.chars().all(|c| c.is_ascii_digit()) {
        let known = queries::known_name(conn, target)?;
        return Ok((target.to_string(), known));
    }

    match queries::find_user_by_name(conn, target)? {
        Some((user_id, username)) => Ok((user_id, Some(username))),
        None => Err(AppError::UserNotFound(target.to_string())),
    }
}
