//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use std::sync::Arc;

use axum::{extract::DefaultBodyLimit, Router};
use stand_common::{AppConfig, AppError, JwtService};
use stand_db::{
    create_pool, run_migrations, PgFavoriteRepository, PgReviewRepository, PgStandRepository,
    PgUserRepository,
};
use stand_service::ServiceContextBuilder;
use tokio::net::TcpListener;
use tower_http::compression::CompressionLayer;
use tracing::info;

use crate::handlers::fallback;
use crate::middleware::apply_middleware;
use crate::routes::{create_router, health_routes};
use crate::state::AppState;

/// Largest accepted request body
pub const BODY_LIMIT: usize = 10 * 1024;

/// Build the complete Axum application with all routes and middleware
///
/// Health probes sit outside the rate limiter; unknown routes fall through
/// to the API stack so they are traced and limited like any other request.
pub fn create_app(state: AppState) -> Result<Router, AppError> {
    let api = apply_middleware(create_router().fallback(fallback::not_found), state.config())?;

    Ok(Router::new()
        .merge(health_routes())
        .merge(api)
        .layer(DefaultBodyLimit::max(BODY_LIMIT))
        .layer(CompressionLayer::new())
        .with_state(state))
}

/// Initialize all dependencies and create AppState
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    info!("Connecting to PostgreSQL...");
    let db_config = stand_db::DatabaseConfig::from(&config.database);
    let pool = create_pool(&db_config)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("PostgreSQL connection established");

    if config.database.run_migrations {
        run_migrations(&pool, &config.database.migrations_dir)
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;
    }

    let jwt_service = Arc::new(JwtService::new(&config.jwt.secret, config.jwt.expires_in));

    let service_context = ServiceContextBuilder::new()
        .pool(pool.clone())
        .user_repo(Arc::new(PgUserRepository::new(pool.clone())))
        .stand_repo(Arc::new(PgStandRepository::new(pool.clone())))
        .review_repo(Arc::new(PgReviewRepository::new(pool.clone())))
        .favorite_repo(Arc::new(PgFavoriteRepository::new(pool)))
        .jwt_service(jwt_service)
        .build()
        .map_err(|e| AppError::Config(e.to_string()))?;

    Ok(AppState::new(service_context, config))
}

/// Serve the application on an already bound listener
pub async fn serve(listener: TcpListener, app: Router) -> Result<(), AppError> {
    let addr = listener
        .local_addr()
        .map_err(|e| AppError::Config(format!("Failed to read bound address: {e}")))?;
    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::Config(format!("Server error: {e}")))
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr = config.api.address();

    let state = create_app_state(config).await?;
    let app = create_app(state)?;

    info!("Starting HTTP server on {}", addr);
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {addr}: {e}")))?;

    serve(listener, app).await
}
