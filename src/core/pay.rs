//! Pay computation: hours times the configured hourly rate.

pub fn pay(hours: f64, hourly_rate: f64) -> f64 {
    hours * hourly_rate
}
