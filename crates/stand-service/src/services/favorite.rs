//! Favorite service

use stand_core::{authorize_all, DomainError, Favorite, Identity, Policy};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::dto::{CreateFavoriteRequest, FavoriteResponse, PopulatedFavoriteResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Favorite service
pub struct FavoriteService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> FavoriteService<'a> {
    /// Create a new FavoriteService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    #[instrument(skip(self, caller), fields(caller_id = %caller.user_id))]
    pub async fn list_for_user(
        &self,
        caller: &Identity,
        user_id: Uuid,
    ) -> ServiceResult<Vec<PopulatedFavoriteResponse>> {
        authorize_all(caller, &[Policy::MEMBERS, Policy::Owner(user_id)])?;

        let favorites = self.ctx.favorite_repo().find_by_user(user_id).await?;
        Ok(favorites.into_iter().map(Into::into).collect())
    }

    /// Mark an active stand as a favorite
    #[instrument(skip(self, caller, request), fields(caller_id = %caller.user_id, stand_id = %request.stand))]
    pub async fn create(
        &self,
        caller: &Identity,
        user_id: Uuid,
        request: CreateFavoriteRequest,
    ) -> ServiceResult<FavoriteResponse> {
        authorize_all(caller, &[Policy::MEMBERS, Policy::Owner(user_id)])?;

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

        let favorite = Favorite::new(user_id, request.stand);
        self.ctx.favorite_repo().create(&favorite).await?;

        info!(favorite_id = %favorite.id, "Favorite added");
        Ok(favorite.into())
    }

    /// Remove the favorite a user holds on a stand
    #[instrument(skip(self, caller), fields(caller_id = %caller.user_id))]
    pub async fn delete(&self, caller: &Identity, user_id: Uuid, stand_id: Uuid) -> ServiceResult<()> {
        authorize_all(caller, &[Policy::MEMBERS, Policy::Owner(user_id)])?;

        self.ctx.favorite_repo().delete(user_id, stand_id).await?;

        info!(stand_id = %stand_id, "Favorite removed");
        Ok(())
    }
}
