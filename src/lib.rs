//! Garage Ledger service library
//!
//! Staff-facing backend for a garage: cars, the service catalogue, service
//! records, payments and the daily/weekly/monthly revenue reports.

pub mod config;
pub mod core;
pub mod middleware;
pub mod modules;

// Re-export commonly used types
pub use modules::{AppServices, Repositories};
pub use modules::reports;
pub use modules::service_records;
