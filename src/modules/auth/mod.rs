pub mod controllers;
pub mod models;
pub mod repositories;
pub mod services;

pub use models::{User, UserResponse};
pub use repositories::{MySqlUserRepository, UserRepository};
pub use services::AuthService;
