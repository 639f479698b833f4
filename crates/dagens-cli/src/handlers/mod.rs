pub mod cache;
pub mod calc;
pub mod config;
pub mod today;
pub mod weather;
