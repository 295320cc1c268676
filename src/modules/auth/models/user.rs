use serde::{Deserialize, Serialize};

use crate::core::{AppError, Result};

/// Staff account as stored in `users`
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct User {
    pub id: u64,
    pub username: String,
    pub password_hash: String,
}

/// Public view of a staff account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: u64,
    pub username: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
        }
    }
}

/// Body of `POST /login` and `POST /register`
#[derive(Debug, Default, Deserialize)]
pub struct Credentials {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

/// Credentials with both fields present and non-blank
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginCredentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub const REQUIRED_MESSAGE: &'static str = "Username and password required";

    pub fn validate(self) -> Result<LoginCredentials> {
        let username = self
            .username
            .map(|u| u.trim().to_string())
            .filter(|u| !u.is_empty());
        let password = self.password.filter(|p| !p.is_empty());

        match (username, password) {
            (Some(username), Some(password)) => Ok(LoginCredentials { username, password }),
            _ => Err(AppError::validation(Self::REQUIRED_MESSAGE)),
        }
    }
}
