//! Authentication extractor
//!
//! Resolves the bearer token (or the `jwt` cookie) to an active user.

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use axum_extra::{
    headers::{authorization::Bearer, Authorization, Cookie},
    TypedHeader,
};
use stand_common::AppError;
use stand_core::{Identity, User};
use stand_service::AuthService;

use crate::response::ApiError;
use crate::state::AppState;

/// Name of the session cookie
pub const AUTH_COOKIE: &str = "jwt";

/// Authenticated user extracted from the request credential
#[derive(Debug, Clone)]
pub struct AuthUser(pub User);

impl AuthUser {
    /// Identity used by access policies
    pub fn identity(&self) -> Identity {
        self.0.identity()
    }
}

/// The header wins over the cookie
async fn credential<S: Send + Sync>(parts: &mut Parts, state: &S) -> Option<String> {
    if let Ok(TypedHeader(Authorization(bearer))) =
        TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state).await
    {
        return Some(bearer.token().to_string());
    }

    let TypedHeader(cookies) = TypedHeader::<Cookie>::from_request_parts(parts, state)
        .await
        .ok()?;

    cookies
        .get(AUTH_COOKIE)
        .filter(|token| !token.is_empty())
        .map(ToString::to_string)
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let token = credential(parts, state)
            .await
            .ok_or(ApiError::App(AppError::MissingAuth))?;

        let app_state = AppState::from_ref(state);

        let user = AuthService::new(app_state.service_context())
            .authenticate(&token)
            .await
            .inspect_err(|e| tracing::warn!(error = %e, "Rejected credential"))?;

        Ok(AuthUser(user))
    }
}
