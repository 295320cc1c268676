use crate::core::{AppError, Result};
use actix_identity::{Identity, IdentityExt};
use actix_web::{dev::Payload, FromRequest, HttpMessage, HttpRequest};
use argon2::{
    password_hash::{rand_core::OsRng, PasswordHasher, SaltString},
    Argon2, PasswordHash, PasswordVerifier,
};
use futures_util::future::{ready, Ready};

/// Message returned for every request that needs a session and has none
pub const UNAUTHORIZED_MESSAGE: &str = "Unauthorized";

/// Staff member bound to the current request's session.
///
/// Taking this extractor as a handler argument is what makes an endpoint
/// session-protected: requests without a valid identity are answered with
/// `401 {"message": "Unauthorized"}` before the handler runs.
pub struct AuthenticatedUser {
    pub user_id: u64,
    identity: Identity,
}

impl AuthenticatedUser {
    /// Attach `user_id` to the session of `req`
    pub fn login(req: &HttpRequest, user_id: u64) -> Result<()> {
        Identity::login(&req.extensions(), user_id.to_string())
            .map(|_| ())
            .map_err(|e| AppError::internal(format!("Failed to establish session: {}", e)))
    }

    /// Drop the identity and purge the session
    pub fn logout(self) {
        self.identity.logout();
    }

    fn extract(req: &HttpRequest) -> Result<Self> {
        let identity = req
            .get_identity()
            .map_err(|_| AppError::unauthorized(UNAUTHORIZED_MESSAGE))?;

        let raw_id = identity
            .id()
            .map_err(|_| AppError::unauthorized(UNAUTHORIZED_MESSAGE))?;

        let user_id = raw_id.parse::<u64>().map_err(|_| {
            tracing::warn!(identity = %raw_id, "Session carries a malformed user id");
            AppError::unauthorized(UNAUTHORIZED_MESSAGE)
        })?;

        Ok(Self { user_id, identity })
    }
}

impl FromRequest for AuthenticatedUser {
    type Error = AppError;
    type Future = Ready<std::result::Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(Self::extract(req))
    }
}

/// Hash a password into an Argon2 PHC string
pub fn hash_password(password: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AppError::internal(format!("Failed to hash password: {}", e)))
}

/// Verify a password against a stored Argon2 PHC string
pub fn verify_password(password: &str, hash: &str) -> Result<bool> {
    let parsed_hash = PasswordHash::new(hash)
        .map_err(|e| AppError::internal(format!("Invalid hash format: {}", e)))?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}
