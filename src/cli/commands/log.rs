use crate::cli::open_ledger;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::load_audit;
use crate::errors::AppResult;
use crate::ui::messages::header;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if matches!(cmd, Commands::Log { print: true }) {
        let pool = open_ledger(cfg)?;
        let rows = load_audit(&pool.conn)?;

        header("Audit log");
        for (date, operation, target, message) in rows {
            if target.is_empty() {
                println!("{}  [{}] {}", date, operation, message);
            } else {
                println!("{}  [{}] ({}) {}", date, operation, target, message);
            }
        }
    }
    Ok(())
}
