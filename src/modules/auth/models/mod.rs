mod user;

pub use user::{Credentials, LoginCredentials, User, UserResponse};
