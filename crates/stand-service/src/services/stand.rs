//! Stand service

use stand_core::{DomainError, Identity, MenuItem, Policy, Stand};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::dto::{
    CreateStandRequest, MenuItemRequest, StandDetailsResponse, StandResponse,
    StandSummaryResponse,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Stand service
pub struct StandService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> StandService<'a> {
    /// Create a new StandService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List active stands
    #[instrument(skip(self))]
    pub async fn list(&self) -> ServiceResult<Vec<StandResponse>> {
        let stands = self.ctx.stand_repo().find_all().await?;
        Ok(stands.into_iter().map(Into::into).collect())
    }

    /// List active stands as summaries
    #[instrument(skip(self))]
    pub async fn list_short(&self) -> ServiceResult<Vec<StandSummaryResponse>> {
        let stands = self.ctx.stand_repo().find_all().await?;
        Ok(stands.into_iter().map(Into::into).collect())
    }

    /// Get a stand with its reviews
    #[instrument(skip(self))]
    pub async fn get(&self, stand_id: Uuid) -> ServiceResult<StandDetailsResponse> {
        let stand = self
            .ctx
            .stand_repo()
            .find_by_id(stand_id)
            .await?
            .ok_or(DomainError::StandNotFound(stand_id))?;

        let reviews = self.ctx.review_repo().find_by_stand(stand_id).await?;

        Ok(StandDetailsResponse {
            stand: stand.into(),
            reviews: reviews.into_iter().map(Into::into).collect(),
        })
    }

    /// Create a stand owned by the caller, or by a named user when the caller is an admin
    #[instrument(skip(self, caller, request), fields(caller_id = %caller.user_id, name = %request.name))]
    pub async fn create(
        &self,
        caller: &Identity,
        request: CreateStandRequest,
    ) -> ServiceResult<StandResponse> {
        Policy::STAND_MANAGERS.authorize(caller)?;

        let owner_id = match request.owner {
            Some(owner_id) if owner_id != caller.user_id => {
                Policy::Owner(owner_id).authorize(caller)?;
                self.ctx
                    .user_repo()
                    .find_by_id(owner_id)
                    .await?
                    .ok_or(DomainError::UserNotFound(owner_id))?;
                owner_id
            }
            _ => caller.user_id,
        };

        let mut stand = Stand::new(&request.name, owner_id).with_hours(request.hours_of_op)?;
        if stand.name.is_empty() {
            return Err(ServiceError::validation("A stand must have a name"));
        }
        if let Some(location) = request.location {
            stand = stand.with_location(location)?;
        }
        if let Some(avatar) = request.avatar {
            stand.avatar = avatar;
        }
        stand.description = request.description;
        stand.menu = request
            .menu
            .into_iter()
            .map(menu_item)
            .collect::<Result<Vec<_>, DomainError>>()?;

        self.ctx.stand_repo().create(&stand).await?;

        info!(stand_id = %stand.id, owner_id = %owner_id, "Stand created");

        Ok(stand.into())
    }

    /// Deactivate a stand
    ///
    /// The row stays in storage with `active = false`; reviews are kept.
    #[instrument(skip(self, caller), fields(caller_id = %caller.user_id))]
    pub async fn delete(&self, caller: &Identity, stand_id: Uuid) -> ServiceResult<()> {
        Policy::STAND_MANAGERS.authorize(caller)?;

        let stand = self
            .ctx
            .stand_repo()
            .find_by_id(stand_id)
            .await?
            .ok_or(DomainError::StandNotFound(stand_id))?;

        Policy::Owner(stand.owner_id).authorize(caller)?;

        self.ctx.stand_repo().deactivate(stand_id).await?;

        info!(stand_id = %stand_id, "Stand deactivated");
        Ok(())
    }
}

fn menu_item(request: MenuItemRequest) -> Result<MenuItem, DomainError> {
    let mut item = MenuItem::new(&request.name, request.price, request.image)?;
    if let Some(rating) = request.ratings_average {
        item.set_ratings_average(rating)?;
    }
    Ok(item)
}
