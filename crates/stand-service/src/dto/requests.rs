//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.
//! Field names are camelCase on the wire.

use serde::Deserialize;
use serde_json::{Map, Value};
use stand_core::{GeoPoint, HoursOfOperation};
use uuid::Uuid;
use validator::Validate;

// ============================================================================
// Auth Requests
// ============================================================================

/// Account signup request
///
/// There is no role field: new accounts always get the default role.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    #[validate(length(min = 1, message = "A user must have a first name"))]
    pub first_name: String,

    #[validate(length(min = 1, message = "A user must have a last name"))]
    pub last_name: String,

    #[validate(length(
        min = 1,
        max = 15,
        message = "A username must be between 1 and 15 characters"
    ))]
    pub handle: String,

    #[validate(email(message = "Please enter a valid email address"))]
    pub email: String,

    #[validate(length(min = 8, message = "Password must contain at least 8 characters"))]
    pub password: String,

    pub password_confirm: String,
}

/// Login request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "Please provide email and password"))]
    pub email: String,

    #[validate(length(min = 1, message = "Please provide email and password"))]
    pub password: String,
}

/// Password change for the logged-in user
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePasswordRequest {
    #[validate(length(min = 1, message = "Please provide your current password"))]
    pub password_current: String,

    #[validate(length(min = 8, message = "Password must contain at least 8 characters"))]
    pub password: String,

    pub password_confirm: String,
}

// ============================================================================
// User Requests
// ============================================================================

/// Profile update for the logged-in user
///
/// Keys outside the profile fields are collected in `other` so credential
/// keys can be rejected even when their value is `null`.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMeRequest {
    #[validate(length(min = 1, message = "A user must have a first name"))]
    pub first_name: Option<String>,

    #[validate(length(min = 1, message = "A user must have a last name"))]
    pub last_name: Option<String>,

    #[validate(length(
        min = 1,
        max = 15,
        message = "A username must be between 1 and 15 characters"
    ))]
    pub handle: Option<String>,

    #[validate(email(message = "Please enter a valid email address"))]
    pub email: Option<String>,

    pub avatar: Option<String>,

    #[serde(flatten)]
    pub other: Map<String, Value>,
}

impl UpdateMeRequest {
    /// Whether the body tries to set a password through the profile route
    pub fn touches_credentials(&self) -> bool {
        ["password", "passwordConfirm"]
            .iter()
            .any(|key| self.other.contains_key(*key))
    }
}

// ============================================================================
// Stand Requests
// ============================================================================

/// Menu item as submitted by a stand owner
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct MenuItemRequest {
    #[validate(length(min = 1, message = "A menu item must have a name"))]
    pub name: String,

    #[validate(range(
        min = 0.0,
        message = "A menu item must have a price greater than or equal to $0.00"
    ))]
    pub price: f64,

    pub ratings_average: Option<f64>,

    pub image: Option<String>,
}

/// Create stand request
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateStandRequest {
    #[validate(length(min = 1, max = 100, message = "A stand must have a name"))]
    pub name: String,

    pub avatar: Option<String>,

    pub location: Option<GeoPoint>,

    #[serde(default)]
    pub hours_of_op: HoursOfOperation,

    #[serde(default)]
    #[validate(nested)]
    pub menu: Vec<MenuItemRequest>,

    #[validate(length(max = 2000, message = "Description must be at most 2000 characters"))]
    pub description: Option<String>,

    /// Owning user; only admins may name someone other than themselves
    pub owner: Option<Uuid>,
}

/// Query string for the stand listing
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StandListQuery {
    pub info: Option<String>,
}

impl StandListQuery {
    /// `?info=short` selects the summary projection
    pub fn is_short(&self) -> bool {
        self.info.as_deref() == Some("short")
    }
}

// ============================================================================
// Review Requests
// ============================================================================

/// Create review request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateReviewRequest {
    pub stand: Uuid,

    #[validate(length(max = 2000, message = "Review text must be at most 2000 characters"))]
    pub text: Option<String>,

    #[validate(range(min = 0.0, max = 5.0, message = "Rating must be between 0 and 5"))]
    pub rating: f64,
}

/// Update review request
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateReviewRequest {
    #[validate(length(max = 2000, message = "Review text must be at most 2000 characters"))]
    pub text: Option<String>,

    #[validate(range(min = 0.0, max = 5.0, message = "Rating must be between 0 and 5"))]
    pub rating: Option<f64>,
}

// ============================================================================
// Favorite Requests
// ============================================================================

/// Mark a stand as a favorite
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateFavoriteRequest {
    pub stand: Uuid,
}
