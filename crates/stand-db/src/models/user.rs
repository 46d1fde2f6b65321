//! User database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for users table (without the password hash)
#[derive(Debug, Clone, FromRow)]
pub struct UserModel {
    pub id: Uuid,
    pub role: String,
    pub first_name: String,
    pub last_name: String,
    pub handle: String,
    pub email: String,
    pub avatar: String,
    pub password_changed_at: Option<DateTime<Utc>>,
    pub active: bool,
    pub created_at: DateTime<Utc>,
}
