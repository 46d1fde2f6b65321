//! Authentication service
//!
//! Handles signup, login, password changes, and turning a bearer token back
//! into an active user.

use chrono::{Duration, Utc};
use stand_common::AppError;
use stand_core::entities::User;
use tracing::{info, instrument, warn};

use crate::dto::{AuthResponse, LoginRequest, SignupRequest, UpdatePasswordRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Authentication service
pub struct AuthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuthService<'a> {
    /// Create a new AuthService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Register a new user
    #[instrument(skip(self, request), fields(handle = %request.handle, email = %request.email))]
    pub async fn signup(&self, request: SignupRequest) -> ServiceResult<AuthResponse> {
        let password_hash = self
            .ctx
            .password_service()
            .hash_new(&request.password, &request.password_confirm)?;

        let user = User::new(
            &request.first_name,
            &request.last_name,
            &request.handle,
            &request.email,
        );
        if user.first_name.is_empty() || user.last_name.is_empty() || user.handle.is_empty() {
            return Err(ServiceError::validation(
                "A user must have a first name, last name and username",
            ));
        }

        self.ctx.user_repo().create(&user, &password_hash).await?;

        info!(user_id = %user.id, "User signed up");

        self.issue(&user)
    }

    /// Login with email and password
    ///
    /// Unknown email and wrong password produce the same error.
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn login(&self, request: LoginRequest) -> ServiceResult<AuthResponse> {
        let user = self
            .ctx
            .user_repo()
            .find_by_email(&request.email)
            .await?
            .ok_or_else(|| {
                warn!(email = %request.email, "Login failed: user not found");
                ServiceError::App(AppError::InvalidCredentials)
            })?;

        let password_hash = self
            .ctx
            .user_repo()
            .get_password_hash(user.id)
            .await?
            .ok_or_else(|| {
                warn!(user_id = %user.id, "Login failed: no password hash");
                ServiceError::App(AppError::InvalidCredentials)
            })?;

        self.ctx
            .password_service()
            .verify_or_error(&request.password, &password_hash)
            .inspect_err(|_| warn!(user_id = %user.id, "Login failed: invalid password"))?;

        info!(user_id = %user.id, "User logged in");

        self.issue(&user)
    }

    /// Change the caller's password and issue a fresh token
    ///
    /// The change time is backdated one second so the new token's `iat`
    /// is not earlier than it, while older tokens stop validating.
    #[instrument(skip(self, user, request), fields(user_id = %user.id))]
    pub async fn update_password(
        &self,
        user: &User,
        request: UpdatePasswordRequest,
    ) -> ServiceResult<AuthResponse> {
        let current_hash = self
            .ctx
            .user_repo()
            .get_password_hash(user.id)
            .await?
            .ok_or_else(|| ServiceError::App(AppError::UserGone))?;

        self.ctx
            .password_service()
            .verify_or_error(&request.password_current, &current_hash)
            .inspect_err(|_| warn!("Password change rejected: current password is wrong"))?;

        let new_hash = self
            .ctx
            .password_service()
            .hash_new(&request.password, &request.password_confirm)?;

        let changed_at = Utc::now() - Duration::seconds(1);
        self.ctx
            .user_repo()
            .update_password(user.id, &new_hash, changed_at)
            .await?;

        info!("Password changed");

        self.issue(user)
    }

    /// Resolve a bearer token to the active user it was issued for
    ///
    /// # Errors
    /// Every failure is a 401: bad signature, expiry, a deactivated or missing
    /// user, or a password change after the token was issued.
    #[instrument(skip_all)]
    pub async fn authenticate(&self, token: &str) -> ServiceResult<User> {
        let claims = self.ctx.jwt_service().decode_token(token)?;
        let user_id = claims.user_id()?;

        let user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| {
                warn!(user_id = %user_id, "Token rejected: user no longer exists");
                ServiceError::App(AppError::UserGone)
            })?;

        if user.changed_password_after(claims.iat) {
            warn!(user_id = %user_id, "Token rejected: password changed after issue");
            return Err(ServiceError::App(AppError::PasswordChanged));
        }

        Ok(user)
    }

    fn issue(&self, user: &User) -> ServiceResult<AuthResponse> {
        let token = self.ctx.jwt_service().issue_token(user.id)?;
        Ok(AuthResponse {
            token,
            user: user.into(),
        })
    }
}
