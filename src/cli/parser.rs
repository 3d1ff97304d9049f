use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for clockledger
/// CLI shift ledger: clock in/out and review working hours over SQLite
#[derive(Parser)]
#[command(
    name = "clockledger",
    version = env!("CARGO_PKG_VERSION"),
    about = "A shift ledger CLI: clock in/out, aggregate hours and pay, apply admin adjustments",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Acting user's stable ID (as supplied by the identity system)
    #[arg(global = true, long = "user")]
    pub user: Option<String>,

    /// Acting user's display name (snapshotted at clock-in)
    #[arg(global = true, long = "name")]
    pub name: Option<String>,

    /// Override "now" with an RFC 3339 timestamp (for tests)
    #[arg(global = true, long = "at", hide = true)]
    pub at: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Clock in (open a new shift)
    In,

    /// Clock out (close your open shift)
    Out,

    /// Show your current status (clocked in / last seen)
    Status,

    /// Show your total sessions, hours and pay
    Hours,

    /// Admin: list everyone currently clocked in
    Who,

    /// Admin: per-user totals over the whole ledger
    AllHours,

    /// Admin: per-user totals over a trailing window
    Report {
        /// Look-back window in days (default from config, normally 7)
        #[arg(long = "days")]
        days: Option<i64>,
    },

    /// Admin: adjust a user's most recent closed session
    Adjust {
        /// Target user: a stable ID (all digits) or a display name known
        /// to the ledger
        target: String,

        /// Signed hour delta, e.g. +2.5 or -1.0
        #[arg(allow_hyphen_values = true)]
        delta: String,

        /// Free-text reason, recorded in the audit log only
        #[arg(long = "reason")]
        reason: Option<String>,

        /// Display name to record if the target has no ledger history
        #[arg(long = "display-name")]
        display_name: Option<String>,
    },

    /// Export all closed sessions
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,
    },

    /// Admin: delete every shift record (irreversible)
    Purge {
        #[arg(long = "yes", help = "Confirm the purge")]
        yes: bool,
    },

    /// Print the internal audit log
    Log {
        #[arg(long = "print", help = "Print rows from the audit log table")]
        print: bool,
    },
}
