//! User service
//!
//! Profile reads and self-service profile changes.

use stand_core::{DomainError, Identity, Policy, User};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::dto::{UpdateMeRequest, UserProfileResponse, UserResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// User service
pub struct UserService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> UserService<'a> {
    /// Create a new UserService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List every active user (admins only)
    #[instrument(skip(self, caller), fields(caller_id = %caller.user_id))]
    pub async fn list(&self, caller: &Identity) -> ServiceResult<Vec<UserResponse>> {
        Policy::ADMIN_ONLY.authorize(caller)?;

        let users = self.ctx.user_repo().find_all().await?;
        Ok(users.iter().map(UserResponse::from).collect())
    }

    /// Get another user's profile
    #[instrument(skip(self, caller), fields(caller_id = %caller.user_id))]
    pub async fn get(&self, caller: &Identity, user_id: Uuid) -> ServiceResult<UserProfileResponse> {
        Policy::MEMBERS.authorize(caller)?;

        let user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", user_id.to_string()))?;

        self.profile(&user).await
    }

    /// Get the caller's own profile
    #[instrument(skip(self, user), fields(user_id = %user.id))]
    pub async fn me(&self, user: &User) -> ServiceResult<UserProfileResponse> {
        self.profile(user).await
    }

    /// Update the caller's profile fields
    ///
    /// Password keys are refused; `update-password` is the only way to change it.
    #[instrument(skip(self, user, request), fields(user_id = %user.id))]
    pub async fn update_me(
        &self,
        user: &User,
        request: UpdateMeRequest,
    ) -> ServiceResult<UserResponse> {
        if request.touches_credentials() {
            return Err(DomainError::ForbiddenField.into());
        }

        let mut updated = user.clone();
        if let Some(first_name) = request.first_name {
            updated.first_name = first_name.trim().to_string();
        }
        if let Some(last_name) = request.last_name {
            updated.last_name = last_name.trim().to_string();
        }
        if let Some(handle) = request.handle {
            updated.handle = handle.trim().to_string();
        }
        if let Some(email) = request.email {
            updated.email = email.trim().to_lowercase();
        }
        if let Some(avatar) = request.avatar {
            updated.avatar = avatar;
        }

        if updated.first_name.is_empty() || updated.last_name.is_empty() || updated.handle.is_empty()
        {
            return Err(ServiceError::validation(
                "A user must have a first name, last name and username",
            ));
        }

        self.ctx.user_repo().update_profile(&updated).await?;

        info!("Profile updated");

        Ok(UserResponse::from(&updated))
    }

    /// Deactivate the caller's account
    ///
    /// Reviews and favorites stay in place; their author references populate as null.
    #[instrument(skip(self, user), fields(user_id = %user.id))]
    pub async fn delete_me(&self, user: &User) -> ServiceResult<()> {
        self.ctx.user_repo().deactivate(user.id).await?;

        info!("Account deactivated");
        Ok(())
    }

    async fn profile(&self, user: &User) -> ServiceResult<UserProfileResponse> {
        let reviews = self.ctx.review_repo().find_by_author(user.id).await?;
        let favorites = self.ctx.favorite_repo().find_by_user(user.id).await?;

        Ok(UserProfileResponse {
            user: user.into(),
            reviews: reviews.into_iter().map(Into::into).collect(),
            favorites: favorites.into_iter().map(Into::into).collect(),
        })
    }
}
