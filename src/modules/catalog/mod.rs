//! Service catalogue: the jobs the garage offers and their prices.

pub mod controllers;
pub mod models;
pub mod repositories;
pub mod services;

pub use models::Service;
pub use repositories::{MySqlServiceRepository, ServiceRepository};
pub use services::CatalogService;
