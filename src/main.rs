use actix_cors::Cors;
use actix_identity::IdentityMiddleware;
use actix_session::storage::RedisSessionStore;
use actix_web::{cookie::Key, App, HttpServer};
use anyhow::Context;
use tracing_actix_web::TracingLogger;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use garage_ledger::config::{AppConfig, Config, CorsConfig, LogFormat};
use garage_ledger::middleware::session_middleware;
use garage_ledger::AppServices;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    config
        .validate()
        .context("Configuration validation failed")?;

    init_tracing(&config.app);

    tracing::info!("Starting Garage Ledger");
    tracing::info!("Environment: {}", config.app.env);
    tracing::info!("Server binding to: {}", config.server.bind_address());

    // Create database connection pool
    let db_pool = config
        .database
        .create_pool()
        .await
        .context("Failed to create database pool")?;

    tracing::info!(
        "Database pool initialized ({}..{} connections)",
        config.database.pool_size,
        config.database.max_connections
    );

    sqlx::migrate!("./migrations")
        .run(&db_pool)
        .await
        .context("Failed to run database migrations")?;

    let session_store = RedisSessionStore::new(config.session.redis_url.as_str())
        .await
        .context("Failed to connect to the session store")?;
    let session_key = Key::from(config.session.secret.as_bytes());

    let services = AppServices::mysql(db_pool);
    let session_config = config.session.clone();
    let cors_config = config.cors.clone();

    // Start HTTP server
    let bind_address = config.server.bind_address();
    let server = HttpServer::new(move || {
        let services = services.clone();

        App::new()
            .wrap(IdentityMiddleware::default())
            .wrap(session_middleware(
                session_store.clone(),
                session_key.clone(),
                &session_config,
            ))
            .wrap(cors(&cors_config))
            .wrap(TracingLogger::default())
            .configure(move |cfg| services.configure(cfg))
    })
    .workers(config.server.workers)
    .bind(&bind_address)?
    .run();

    tracing::info!("Server started at http://{}", bind_address);

    server.await?;
    Ok(())
}

fn init_tracing(app: &AppConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("garage_ledger={},actix_web=info", app.log_level).into()
    });

    let registry = tracing_subscriber::registry().with(filter);
    match app.log_format {
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json())
            .init(),
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer()).init(),
    }
}

/// Credentialed CORS for the configured front-end origins
fn cors(config: &CorsConfig) -> Cors {
    config
        .allowed_origins
        .iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
        .allow_any_method()
        .allow_any_header()
        .supports_credentials()
        .max_age(3600)
}
