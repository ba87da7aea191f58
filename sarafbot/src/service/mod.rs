pub mod calendar;
pub mod format;
pub mod monitor;
pub mod rate;
