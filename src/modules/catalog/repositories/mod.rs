mod service_repository;

pub use service_repository::{MySqlServiceRepository, ServiceRepository};
