//! Route definitions
//!
//! All API routes organized by resource and mounted under /api/v1.

use axum::{
    routing::{delete, get, patch, post},
    Router,
};

use crate::handlers::{auth, favorites, health, reviews, stands, users};
use crate::state::AppState;

/// Create the main API router (health routes are mounted separately)
pub fn create_router() -> Router<AppState> {
    Router::new().nest("/api/v1", api_v1_routes())
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

fn api_v1_routes() -> Router<AppState> {
    Router::new().merge(user_routes()).merge(stand_routes())
}

/// Accounts, profiles, and the reviews and favorites nested under a user
fn user_routes() -> Router<AppState> {
    Router::new()
        // Authentication
        .route("/user/signup", post(auth::signup))
        .route("/user/login", post(auth::login))
        .route("/user/update-password", patch(auth::update_password))
        // Profiles
        .route("/user", get(users::list_users))
        .route("/user/", get(users::list_users))
        .route(
            "/user/me",
            get(users::get_me)
                .patch(users::update_me)
                .delete(users::delete_me),
        )
        .route("/user/:id", get(users::get_user))
        // Reviews
        .route(
            "/user/:id/review",
            get(reviews::list_reviews).post(reviews::create_review),
        )
        .route(
            "/user/:id/review/:review_id",
            patch(reviews::update_review).delete(reviews::delete_review),
        )
        // Favorites
        .route(
            "/user/:id/favorite",
            get(favorites::list_favorites).post(favorites::create_favorite),
        )
        .route(
            "/user/:id/favorite/:stand_id",
            delete(favorites::delete_favorite),
        )
}

fn stand_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/stand",
            get(stands::list_stands).post(stands::create_stand),
        )
        .route(
            "/stand/",
            get(stands::list_stands).post(stands::create_stand),
        )
        .route(
            "/stand/:id",
            get(stands::get_stand).delete(stands::delete_stand),
        )
}
