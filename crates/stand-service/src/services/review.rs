//! Review service
//!
//! Reviews live under `/user/:id/review`. The path user must be the caller
//! (or the caller an admin), and edits additionally require the caller to be
//! the review's author or an admin. Every write ends with a rating refresh
//! for the stand the review points at.

use stand_core::{authorize_all, DomainError, Identity, Policy, Review};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::dto::{CreateReviewRequest, PopulatedReviewResponse, ReviewResponse, UpdateReviewRequest};

use super::context::ServiceContext;
use super::error::ServiceResult;
use super::rating::RatingAggregator;

/// Review service
pub struct ReviewService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ReviewService<'a> {
    /// Create a new ReviewService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Reviews written by a user
    #[instrument(skip(self, caller), fields(caller_id = %caller.user_id))]
    pub async fn list_for_user(
        &self,
        caller: &Identity,
        user_id: Uuid,
    ) -> ServiceResult<Vec<PopulatedReviewResponse>> {
        authorize_all(caller, &[Policy::MEMBERS, Policy::Owner(user_id)])?;

        let reviews = self.ctx.review_repo().find_by_author(user_id).await?;
        Ok(reviews.into_iter().map(Into::into).collect())
    }

    /// Post a review of an active stand
    #[instrument(skip(self, caller, request), fields(caller_id = %caller.user_id, stand_id = %request.stand))]
    pub async fn create(
        &self,
        caller: &Identity,
        user_id: Uuid,
        request: CreateReviewRequest,
    ) -> ServiceResult<ReviewResponse> {
        authorize_all(caller, &[Policy::MEMBERS, Policy::Owner(user_id)])?;

        // An admin may write on any path, so the author has to be resolved
        self.ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or(DomainError::UserNotFound(user_id))?;
        self.ctx
            .stand_repo()
            .find_by_id(request.stand)
            .await?
            .ok_or(DomainError::StandNotFound(request.stand))?;

        let review = Review::new(user_id, request.stand, request.rating, request.text)?;
        self.ctx.review_repo().create(&review).await?;

        info!(review_id = %review.id, "Review created");

        RatingAggregator::new(self.ctx).refresh(review.stand_id).await;

        Ok(review.into())
    }

    /// Edit the rating and/or text of a review
    #[instrument(skip(self, caller, request), fields(caller_id = %caller.user_id))]
    pub async fn update(
        &self,
        caller: &Identity,
        user_id: Uuid,
        review_id: Uuid,
        request: UpdateReviewRequest,
    ) -> ServiceResult<ReviewResponse> {
        let mut review = self.authorized_review(caller, user_id, review_id).await?;

        review.edit(request.rating, request.text)?;
        self.ctx.review_repo().update(&review).await?;

        info!(review_id = %review_id, "Review updated");

        RatingAggregator::new(self.ctx).refresh(review.stand_id).await;

        Ok(review.into())
    }

    /// Remove a review
    #[instrument(skip(self, caller), fields(caller_id = %caller.user_id))]
    pub async fn delete(&self, caller: &Identity, user_id: Uuid, review_id: Uuid) -> ServiceResult<()> {
        let review = self.authorized_review(caller, user_id, review_id).await?;

        self.ctx.review_repo().delete(review_id).await?;

        info!(review_id = %review_id, "Review deleted");

        RatingAggregator::new(self.ctx).refresh(review.stand_id).await;

        Ok(())
    }

    async fn authorized_review(
        &self,
        caller: &Identity,
        user_id: Uuid,
        review_id: Uuid,
    ) -> ServiceResult<Review> {
        authorize_all(caller, &[Policy::MEMBERS, Policy::Owner(user_id)])?;

        let review = self
            .ctx
            .review_repo()
            .find_by_id(review_id)
            .await?
            .ok_or(DomainError::ReviewNotFound(review_id))?;

        Policy::Owner(review.author_id).authorize(caller)?;
        Ok(review)
    }
}
