//! Favorite handlers nested under `/user/:id/favorite`

use axum::extract::State;
use stand_service::{
    dto::{CreateFavoriteRequest, FavoriteResponse, PopulatedFavoriteResponse},
    FavoriteService,
};

use crate::extractors::{AuthUser, IdParam, IdPath, UserFavoritePath, ValidatedJson};
use crate::response::{ApiResult, Created, Envelope, NoContent};
use crate::state::AppState;

/// GET /api/v1/user/:id/favorite
pub async fn list_favorites(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(path): IdPath<IdParam>,
) -> ApiResult<Envelope<Vec<PopulatedFavoriteResponse>>> {
    let favorites = FavoriteService::new(state.service_context())
        .list_for_user(&auth.identity(), path.id)
        .await?;
    Ok(Envelope::list("favorites", favorites))
}

/// POST /api/v1/user/:id/favorite
pub async fn create_favorite(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(path): IdPath<IdParam>,
    ValidatedJson(request): ValidatedJson<CreateFavoriteRequest>,
) -> ApiResult<Created<Envelope<FavoriteResponse>>> {
    let favorite = FavoriteService::new(state.service_context())
        .create(&auth.identity(), path.id, request)
        .await?;
    Ok(Created(Envelope::new("favorite", favorite)))
}

/// DELETE /api/v1/user/:id/favorite/:stand_id
pub async fn delete_favorite(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(path): IdPath<UserFavoritePath>,
) -> ApiResult<NoContent> {
    FavoriteService::new(state.service_context())
        .delete(&auth.identity(), path.id, path.stand_id)
        .await?;
    Ok(NoContent)
}
