pub mod adjust;
pub mod clock;
pub mod export;
pub mod hours;
pub mod init;
pub mod log;
pub mod purge;
pub mod report;
pub mod status;
