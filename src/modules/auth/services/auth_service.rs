use std::sync::Arc;

use tracing::{info, warn};

use crate::core::{AppError, Result};
use crate::middleware::auth::{hash_password, verify_password};
use crate::modules::auth::models::{Credentials, User, UserResponse};
use crate::modules::auth::repositories::UserRepository;

const INVALID_CREDENTIALS: &str = "Invalid username or password";

/// Registration, credential checks and session-user lookup
pub struct AuthService {
    user_repo: Arc<dyn UserRepository>,
}

impl AuthService {
    pub fn new(user_repo: Arc<dyn UserRepository>) -> Self {
        Self { user_repo }
    }

    /// Create a staff account with an Argon2-hashed password
    pub async fn register(&self, credentials: Credentials) -> Result<UserResponse> {
        let credentials = credentials.validate()?;
        let password_hash = hash_password(&credentials.password)?;

        let user = self
            .user_repo
            .create(&credentials.username, &password_hash)
            .await?;

        info!(user_id = user.id, username = %user.username, "User registered");
        Ok(user.into())
    }

    /// Check credentials; unknown users and wrong passwords are indistinguishable
    pub async fn login(&self, credentials: Credentials) -> Result<User> {
        let credentials = credentials.validate()?;

        let Some(user) = self
            .user_repo
            .find_by_username(&credentials.username)
            .await?
        else {
            warn!(username = %credentials.username, "Login attempt for unknown user");
            return Err(AppError::unauthorized(INVALID_CREDENTIALS));
        };

        if !verify_password(&credentials.password, &user.password_hash)? {
            warn!(user_id = user.id, "Login attempt with wrong password");
            return Err(AppError::unauthorized(INVALID_CREDENTIALS));
        }

        info!(user_id = user.id, "User logged in");
        Ok(user)
    }

    /// Resolve the session's user id; a deleted account ends the session's validity
    pub async fn current_user(&self, user_id: u64) -> Result<UserResponse> {
        self.user_repo
            .find_by_id(user_id)
            .await?
            .map(UserResponse::from)
            .ok_or_else(|| AppError::unauthorized("Unauthorized"))
    }
}
