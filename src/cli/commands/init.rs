use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::initialize::init_db;
use crate::db::log::audit;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};
use rusqlite::Connection;

/// Handle the `init` command: config directory, config file and database
/// schema. With `--db` the user's config file is left untouched and only
/// the given database is initialized.
pub fn handle(cli: &Cli) -> AppResult<()> {
    let db_path = match &cli.db {
        Some(custom) => {
            // direct path, no config involvement (test runs, alternate DBs)
            std::path::PathBuf::from(custom)
        }
        None => {
            let path = Config::init_all(None, false)?;
            println!("📄 Config file : {}", Config::config_file().display());
            path
        }
    };

    let conn = Connection::open(&db_path)?;
    init_db(&conn)?;

    if let Err(e) = audit(&conn, "init", "", "Database initialized") {
        warning(format!("Failed to write audit log: {}", e));
    }

    success(format!("Database initialized at {}", db_path.display()));
    Ok(())
}
