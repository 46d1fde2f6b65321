//! User handlers
//!
//! Profile endpoints for the caller and admin listing.

use axum::extract::State;
use stand_service::{
    dto::{UpdateMeRequest, UserProfileResponse, UserResponse},
    UserService,
};

use crate::extractors::{AuthUser, IdParam, IdPath, ValidatedJson};
use crate::response::{ApiResult, Envelope, NoContent};
use crate::state::AppState;

/// List every active user
///
/// GET /api/v1/user/
pub async fn list_users(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Envelope<Vec<UserResponse>>> {
    let users = UserService::new(state.service_context())
        .list(&auth.identity())
        .await?;
    Ok(Envelope::list("users", users))
}

/// Get the caller with their reviews and favorites
///
/// GET /api/v1/user/me
pub async fn get_me(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
) -> ApiResult<Envelope<UserProfileResponse>> {
    let profile = UserService::new(state.service_context()).me(&user).await?;
    Ok(Envelope::new("user", profile))
}

/// Update the caller's profile
///
/// PATCH /api/v1/user/me
pub async fn update_me(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    ValidatedJson(request): ValidatedJson<UpdateMeRequest>,
) -> ApiResult<Envelope<UserResponse>> {
    let updated = UserService::new(state.service_context())
        .update_me(&user, request)
        .await?;
    Ok(Envelope::new("user", updated))
}

/// Deactivate the caller's account
///
/// DELETE /api/v1/user/me
pub async fn delete_me(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
) -> ApiResult<NoContent> {
    UserService::new(state.service_context())
        .delete_me(&user)
        .await?;
    Ok(NoContent)
}

/// Get a user by ID
///
/// GET /api/v1/user/:id
pub async fn get_user(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(path): IdPath<IdParam>,
) -> ApiResult<Envelope<UserProfileResponse>> {
    let profile = UserService::new(state.service_context())
        .get(&auth.identity(), path.id)
        .await?;
    Ok(Envelope::new("user", profile))
}
