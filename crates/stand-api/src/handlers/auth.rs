//! Authentication handlers
//!
//! Signup, login and password change. Each issues a token in the body and
//! in the `jwt` cookie.

use axum::{extract::State, http::HeaderMap, response::IntoResponse};
use axum_extra::extract::cookie::{Cookie, CookieJar};
use stand_service::{
    dto::{AuthResponse, LoginRequest, SignupRequest, UpdatePasswordRequest},
    AuthService,
};

use crate::extractors::{AuthUser, ValidatedJson, AUTH_COOKIE};
use crate::response::{ApiResult, Created, Envelope};
use crate::state::AppState;

/// Register a new user
///
/// POST /api/v1/user/signup
pub async fn signup(
    State(state): State<AppState>,
    headers: HeaderMap,
    ValidatedJson(request): ValidatedJson<SignupRequest>,
) -> ApiResult<impl IntoResponse> {
    let response = AuthService::new(state.service_context())
        .signup(request)
        .await?;
    Ok(Created(session(&state, &headers, response)))
}

/// Login with email and password
///
/// POST /api/v1/user/login
pub async fn login(
    State(state): State<AppState>,
    headers: HeaderMap,
    ValidatedJson(request): ValidatedJson<LoginRequest>,
) -> ApiResult<impl IntoResponse> {
    let response = AuthService::new(state.service_context())
        .login(request)
        .await?;
    Ok(session(&state, &headers, response))
}

/// Change the caller's password
///
/// PATCH /api/v1/user/update-password
pub async fn update_password(
    State(state): State<AppState>,
    headers: HeaderMap,
    AuthUser(user): AuthUser,
    ValidatedJson(request): ValidatedJson<UpdatePasswordRequest>,
) -> ApiResult<impl IntoResponse> {
    let response = AuthService::new(state.service_context())
        .update_password(&user, request)
        .await?;
    Ok(session(&state, &headers, response))
}

fn session(state: &AppState, headers: &HeaderMap, response: AuthResponse) -> impl IntoResponse {
    let cookie = session_cookie(
        response.token.clone(),
        state.config().jwt.cookie_expires_in_days,
        is_secure(state, headers),
    );
    let body = Envelope::new("user", response.user).with_token(response.token);

    (CookieJar::new().add(cookie), body)
}

/// HTTPS behind a proxy, or any production deployment
fn is_secure(state: &AppState, headers: &HeaderMap) -> bool {
    state.config().app.env.is_production()
        || headers
            .get("x-forwarded-proto")
            .and_then(|v| v.to_str().ok())
            .is_some_and(|proto| proto.eq_ignore_ascii_case("https"))
}

/// `days` is bounded when the config is loaded
fn session_cookie(token: String, days: i64, secure: bool) -> Cookie<'static> {
    let lifetime = time::Duration::days(days);

    Cookie::build((AUTH_COOKIE, token))
        .http_only(true)
        .path("/")
        .max_age(lifetime)
        .expires(time::OffsetDateTime::now_utc() + lifetime)
        .secure(secure)
        .build()
}
