use std::sync::Arc;

use actix_web::{web, HttpRequest, HttpResponse};

use crate::core::AppError;
use crate::middleware::AuthenticatedUser;
use crate::modules::auth::models::Credentials;
use crate::modules::auth::services::AuthService;
use crate::modules::MessageResponse;

/// POST /register
pub async fn register(
    service: web::Data<Arc<AuthService>>,
    body: web::Json<Credentials>,
) -> Result<HttpResponse, AppError> {
    let user = service.register(body.into_inner()).await?;
    Ok(HttpResponse::Created().json(user))
}

/// POST /login
///
/// Verifies credentials and binds the user id to the session.
pub async fn login(
    req: HttpRequest,
    service: web::Data<Arc<AuthService>>,
    body: web::Json<Credentials>,
) -> Result<HttpResponse, AppError> {
    let user = service.login(body.into_inner()).await?;
    AuthenticatedUser::login(&req, user.id)?;

    Ok(HttpResponse::Ok().json(MessageResponse::new("Login successful")))
}

/// POST /logout
pub async fn logout(user: AuthenticatedUser) -> HttpResponse {
    tracing::info!(user_id = user.user_id, "User logged out");
    user.logout();
    HttpResponse::Ok().json(MessageResponse::new("Logged out"))
}

/// GET /me
pub async fn me(
    user: AuthenticatedUser,
    service: web::Data<Arc<AuthService>>,
) -> Result<HttpResponse, AppError> {
    let current = service.current_user(user.user_id).await?;
    Ok(HttpResponse::Ok().json(current))
}

/// Configure authentication routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/register", web::post().to(register))
        .route("/login", web::post().to(login))
        .route("/logout", web::post().to(logout))
        .route("/me", web::get().to(me));
}
