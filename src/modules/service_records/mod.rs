//! Service records: one car visit and the set of services performed.

pub mod controllers;
pub mod models;
pub mod repositories;
pub mod services;

pub use models::{ServiceRecordDetails, ServiceRecordInput};
pub use repositories::{MySqlServiceRecordRepository, ServiceRecordRepository};
pub use services::ServiceRecordService;
