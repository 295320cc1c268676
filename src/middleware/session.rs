use actix_session::{
    config::{CookieContentSecurity, PersistentSession},
    storage::SessionStore,
    SessionMiddleware,
};
use actix_web::cookie::{time::Duration, Key, SameSite};

use crate::config::SessionConfig;

/// Name of the cookie carrying the opaque session token
pub const SESSION_COOKIE: &str = "garage_session";

/// Build the session layer over any store.
///
/// Production passes a `RedisSessionStore`, so the cookie only holds the
/// session key and the identity lives server-side with a TTL. Tests pass a
/// `CookieSessionStore`.
pub fn session_middleware<S: SessionStore>(
    store: S,
    key: Key,
    config: &SessionConfig,
) -> SessionMiddleware<S> {
    SessionMiddleware::builder(store, key)
        .cookie_name(SESSION_COOKIE.to_string())
        .cookie_path("/".to_string())
        .cookie_secure(config.cookie_secure)
        .cookie_http_only(true)
        .cookie_content_security(CookieContentSecurity::Private)
        .cookie_same_site(SameSite::Lax)
        .session_lifecycle(PersistentSession::default().session_ttl(Duration::hours(config.ttl_hours)))
        .build()
}
