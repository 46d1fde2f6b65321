//! Review handlers nested under `/user/:id/review`

use axum::extract::State;
use stand_service::{
    dto::{CreateReviewRequest, PopulatedReviewResponse, ReviewResponse, UpdateReviewRequest},
    ReviewService,
};

use crate::extractors::{AuthUser, IdParam, IdPath, UserReviewPath, ValidatedJson};
use crate::response::{ApiResult, Created, Envelope, NoContent};
use crate::state::AppState;

/// GET /api/v1/user/:id/review
pub async fn list_reviews(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(path): IdPath<IdParam>,
) -> ApiResult<Envelope<Vec<PopulatedReviewResponse>>> {
    let reviews = ReviewService::new(state.service_context())
        .list_for_user(&auth.identity(), path.id)
        .await?;
    Ok(Envelope::list("reviews", reviews))
}

/// POST /api/v1/user/:id/review
pub async fn create_review(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(path): IdPath<IdParam>,
    ValidatedJson(request): ValidatedJson<CreateReviewRequest>,
) -> ApiResult<Created<Envelope<ReviewResponse>>> {
    let review = ReviewService::new(state.service_context())
        .create(&auth.identity(), path.id, request)
        .await?;
    Ok(Created(Envelope::new("review", review)))
}

/// PATCH /api/v1/user/:id/review/:review_id
pub async fn update_review(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(path): IdPath<UserReviewPath>,
    ValidatedJson(request): ValidatedJson<UpdateReviewRequest>,
) -> ApiResult<Envelope<ReviewResponse>> {
    let review = ReviewService::new(state.service_context())
        .update(&auth.identity(), path.id, path.review_id, request)
        .await?;
    Ok(Envelope::new("review", review))
}

/// DELETE /api/v1/user/:id/review/:review_id
pub async fn delete_review(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(path): IdPath<UserReviewPath>,
) -> ApiResult<NoContent> {
    ReviewService::new(state.service_context())
        .delete(&auth.identity(), path.id, path.review_id)
        .await?;
    Ok(NoContent)
}
