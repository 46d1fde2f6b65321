//! Favorite database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for favorites table
#[derive(Debug, Clone, FromRow)]
pub struct FavoriteModel {
    pub id: Uuid,
    pub user_id: Uuid,
    pub stand_id: Uuid,
    pub created_at: DateTime<Utc>,
}

/// Favorite row joined with its user and stand
#[derive(Debug, Clone, FromRow)]
pub struct FavoriteDetailsModel {
    #[sqlx(flatten)]
    pub favorite: FavoriteModel,
    pub user_ref_id: Option<Uuid>,
    pub user_handle: Option<String>,
    pub user_avatar: Option<String>,
    pub stand_ref_id: Option<Uuid>,
    pub stand_name: Option<String>,
    pub stand_avatar: Option<String>,
}
