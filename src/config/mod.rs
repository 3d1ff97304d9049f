use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    #[serde(default = "default_hourly_rate")]
    pub hourly_rate: f64,
    #[serde(default = "default_window_days")]
    pub report_window_days: i64,
    /// Stable IDs allowed to run the admin commands (who, all-hours,
    /// report, adjust, purge). Stands in for the chat platform's role
    /// check.
    #[serde(default)]
    pub admin_ids: Vec<String>,
}

fn default_hourly_rate() -> f64 {
    2500.0
}
fn default_window_days() -> i64 {
    7
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: Self::database_file().to_string_lossy().to_string(),
            hourly_rate: default_hourly_rate(),
            report_window_days: default_window_days(),
            admin_ids: Vec::new(),
        }
    }
}

impl Config {
    /// Standard configuration directory (`~/.clockledger`).
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".clockledger")
    }

    pub fn config_file() -> PathBuf {
        Self::config_dir().join("clockledger.conf")
    }

    pub fn database_file() -> PathBuf {
        Self::config_dir().join("clockledger.sqlite")
    }

    /// Load configuration from file, or return defaults if not found.
    /// `CLOCKLEDGER_ADMIN_IDS` (comma-separated) extends the admin list
    /// from the environment, the way the original deployment supplied its
    /// role IDs.
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();
        let mut cfg: Config = if path.exists() {
            let content = fs::read_to_string(&path)?;
            serde_yaml::from_str(&content)
                .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))?
        } else {
            Config::default()
        };

        if let Ok(raw) = std::env::var("CLOCKLEDGER_ADMIN_IDS") {
            cfg.admin_ids.extend(
                raw.split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(String::from),
            );
        }

        Ok(cfg)
    }

    /// Create the config directory, write the config file and touch the
    /// database file. `skip_config_file` leaves the user's config alone
    /// (test mode / `--db` override runs).
    pub fn init_all(custom_db: Option<String>, skip_config_file: bool) -> AppResult<PathBuf> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let db_path = match custom_db {
            Some(name) => {
                let p = PathBuf::from(&name);
                if p.is_absolute() { p } else { dir.join(p) }
            }
            None => Self::database_file(),
        };

        if !skip_config_file {
            let config = Config {
                database: db_path.to_string_lossy().to_string(),
                ..Config::default()
            };
            let yaml = serde_yaml::to_string(&config)
                .map_err(|e| AppError::Config(e.to_string()))?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
        }

        if !db_path.exists() {
            fs::File::create(&db_path)?;
        }

        Ok(db_path)
    }

    pub fn is_admin(&self, user_id: &str) -> bool {
        self.admin_ids.iter().any(|id| id == user_id)
    }
}
