//! HTTP server initialization and runtime setup.
//!
//! Handles the database connection, migrations, service wiring, and the
//! Axum server lifecycle.

use crate::application::services::{AuthService, PostService, SubscriptionService, UserService};
use crate::config::Config;
use crate::domain::repositories::{
    PostRepository, SubscriptionRepository, TokenRepository, UserRepository,
};
use crate::infrastructure::persistence::{
    PgPostRepository, PgSubscriptionRepository, PgTokenRepository, PgUserRepository,
};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - PostgreSQL connection pool
/// - Apply migrations
/// - Repositories and services
/// - Axum HTTP server with graceful shutdown
///
/// # Errors
///
/// Returns an error if:
/// - Database connection or migration fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .idle_timeout(Duration::from_secs(config.db_idle_timeout))
        .max_lifetime(Duration::from_secs(config.db_max_lifetime))
        .connect(&config.database_url)
        .await
        .context("Failed to connect to database")?;
    tracing::info!("Connected to database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to apply migrations")?;
    tracing::info!("Migrations applied");

    let pool = Arc::new(pool);
    let users: Arc<dyn UserRepository> = Arc::new(PgUserRepository::new(pool.clone()));
    let posts: Arc<dyn PostRepository> = Arc::new(PgPostRepository::new(pool.clone()));
    let subscriptions: Arc<dyn SubscriptionRepository> =
        Arc::new(PgSubscriptionRepository::new(pool.clone()));
    let tokens: Arc<dyn TokenRepository> = Arc::new(PgTokenRepository::new(pool.clone()));

    let auth_service = Arc::new(AuthService::new(
        users.clone(),
        tokens,
        config.token_signing_secret.clone(),
        config.token_ttl_seconds,
    ));
    let user_service = Arc::new(UserService::new(users.clone()));
    let post_service = Arc::new(PostService::new(posts, users.clone()));
    let subscription_service = Arc::new(SubscriptionService::new(subscriptions, users));

    let state = AppState {
        db: pool,
        auth_service,
        user_service,
        post_service,
        subscription_service,
    };

    let app = app_router(state, config.behind_proxy);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = tokio::signal::ctrl_c();
    #[cfg(unix)]
    {
        let mut sigterm =
            tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
                .expect("failed to install SIGTERM handler");
        tokio::select! {
            _ = ctrl_c => tracing::info!("Received Ctrl+C, shutting down"),
            _ = sigterm.recv() => tracing::info!("Received SIGTERM, shutting down"),
        }
    }
    #[cfg(not(unix))]
    {
        ctrl_c.await.ok();
        tracing::info!("Received Ctrl+C, shutting down");
    }
}
