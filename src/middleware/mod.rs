pub mod auth;
pub mod error_handler;
pub mod session;

pub use auth::{hash_password, verify_password, AuthenticatedUser};
pub use error_handler::{json_error_handler, path_error_handler};
pub use session::{session_middleware, SESSION_COOKIE};
