//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output with camelCase keys.
//! Populated references are `null` when the referenced row is inactive.

use chrono::{DateTime, Utc};
use serde::Serialize;
use stand_core::{GeoPoint, HoursOfOperation, MenuItem, Role};
use uuid::Uuid;

// ============================================================================
// User Responses
// ============================================================================

/// Full user profile (never includes credentials)
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: Uuid,
    pub role: Role,
    pub first_name: String,
    pub last_name: String,
    pub handle: String,
    pub email: String,
    pub avatar: String,
    pub created_at: DateTime<Utc>,
}

/// User profile with populated reviews and favorites
#[derive(Debug, Clone, Serialize)]
pub struct UserProfileResponse {
    #[serde(flatten)]
    pub user: UserResponse,
    pub reviews: Vec<PopulatedReviewResponse>,
    pub favorites: Vec<PopulatedFavoriteResponse>,
}

/// Minimal user block returned alongside a token
#[derive(Debug, Clone, Serialize)]
pub struct SessionUserResponse {
    pub id: Uuid,
    pub handle: String,
    pub email: String,
}

/// Reference to a user inside another document
#[derive(Debug, Clone, Serialize)]
pub struct UserRefResponse {
    pub id: Uuid,
    pub handle: String,
    pub avatar: String,
}

// ============================================================================
// Auth Responses
// ============================================================================

/// Issued token plus the session user
#[derive(Debug, Clone, Serialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: SessionUserResponse,
}

// ============================================================================
// Stand Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StandResponse {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub avatar: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<GeoPoint>,
    pub hours_of_op: HoursOfOperation,
    pub ratings_average: f64,
    pub ratings_quantity: i64,
    pub owner: Uuid,
    pub menu: Vec<MenuItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// `?info=short` projection
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StandSummaryResponse {
    pub id: Uuid,
    pub name: String,
    pub ratings_average: f64,
    pub ratings_quantity: i64,
    pub avatar: String,
}

/// Stand with its populated reviews
#[derive(Debug, Clone, Serialize)]
pub struct StandDetailsResponse {
    #[serde(flatten)]
    pub stand: StandResponse,
    pub reviews: Vec<PopulatedReviewResponse>,
}

#[derive(Debug, Clone, Serialize)]
pub struct StandRefResponse {
    pub id: Uuid,
    pub name: String,
    pub avatar: String,
}

// ============================================================================
// Review Responses
// ============================================================================

/// Review as written, with raw references
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewResponse {
    pub id: Uuid,
    pub author: Uuid,
    pub stand: Uuid,
    pub text: Option<String>,
    pub rating: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PopulatedReviewResponse {
    pub id: Uuid,
    pub author: Option<UserRefResponse>,
    pub stand: Option<StandRefResponse>,
    pub text: Option<String>,
    pub rating: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// ============================================================================
// Favorite Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteResponse {
    pub id: Uuid,
    pub user: Uuid,
    pub stand: Uuid,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PopulatedFavoriteResponse {
    pub id: Uuid,
    pub user: Option<UserRefResponse>,
    pub stand: Option<StandRefResponse>,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Liveness probe body
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self {
            status: "ok",
            version: env!("CARGO_PKG_VERSION"),
        }
    }
}

/// Readiness probe body
#[derive(Debug, Serialize)]
pub struct ReadinessResponse {
    pub status: &'static str,
    pub database: &'static str,
}

impl ReadinessResponse {
    pub fn new(database_up: bool) -> Self {
        if database_up {
            Self {
                status: "ready",
                database: "up",
            }
        } else {
            Self {
                status: "not_ready",
                database: "down",
            }
        }
    }

    pub fn is_ready(&self) -> bool {
        self.database == "up"
    }
}
