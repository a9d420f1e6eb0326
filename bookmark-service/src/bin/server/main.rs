use std::sync::Arc;

use auth_core::TokenIssuer;
use bookmark_service::config::Config;
use bookmark_service::domain::auth::service::AuthService;
use bookmark_service::domain::bookmark::service::BookmarkService;
use bookmark_service::inbound::http::router::create_router;
use bookmark_service::outbound::repositories::PostgresBookmarkRepository;
use bookmark_service::outbound::repositories::PostgresUserRepository;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bookmark_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "bookmark-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        http_port = config.server.http_port,
        "Configuration loaded"
    );

    let pg_pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&config.database.url)
        .await?;
    tracing::info!(
        max_connections = 5,
        database = "postgresql",
        "Database connection pool created"
    );

    sqlx::migrate!("./migrations").run(&pg_pool).await?;
    tracing::info!(database = "postgresql", "Database migrations completed");

    // An unusable signing secret aborts startup here, before the listener
    // is bound.
    let token_issuer = Arc::new(TokenIssuer::new(config.jwt.secret.as_bytes())?);

    let user_repository = Arc::new(PostgresUserRepository::new(pg_pool.clone()));
    let bookmark_repository = Arc::new(PostgresBookmarkRepository::new(pg_pool));

    let auth_service = Arc::new(AuthService::new(
        user_repository,
        Arc::clone(&token_issuer),
    ));
    let bookmark_service = Arc::new(BookmarkService::new(bookmark_repository));

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    let http_application = create_router(auth_service, bookmark_service, token_issuer);
    axum::serve(http_listener, http_application).await?;

    Ok(())
}
