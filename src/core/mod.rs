pub mod adjust;
pub mod aggregate;
pub mod pay;
