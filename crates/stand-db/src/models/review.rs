//! Review database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for reviews table
#[derive(Debug, Clone, FromRow)]
pub struct ReviewModel {
    pub id: Uuid,
    pub author_id: Uuid,
    pub stand_id: Uuid,
    pub text: Option<String>,
    pub rating: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Review row joined with its author and stand
///
/// Reference columns are NULL when the joined row is inactive.
#[derive(Debug, Clone, FromRow)]
pub struct ReviewDetailsModel {
    #[sqlx(flatten)]
    pub review: ReviewModel,
    pub author_ref_id: Option<Uuid>,
    pub author_handle: Option<String>,
    pub author_avatar: Option<String>,
    pub stand_ref_id: Option<Uuid>,
    pub stand_name: Option<String>,
    pub stand_avatar: Option<String>,
}

/// `COUNT(*)` / `AVG(rating)` row
#[derive(Debug, Clone, FromRow)]
pub struct RatingAggregateModel {
    pub quantity: i64,
    pub average: Option<f64>,
}
