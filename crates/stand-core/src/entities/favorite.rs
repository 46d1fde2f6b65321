//! Favorite entity - a user bookmarking a stand

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::entities::{StandRef, UserRef};

/// Favorite entity
///
/// At most one favorite exists per (user, stand) pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Favorite {
    pub id: Uuid,
    pub user_id: Uuid,
    pub stand_id: Uuid,
    pub created_at: DateTime<Utc>,
}

impl Favorite {
    pub fn new(user_id: Uuid, stand_id: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            stand_id,
            created_at: Utc::now(),
        }
    }
}

/// Favorite with its user and stand populated
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FavoriteDetails {
    pub favorite: Favorite,
    pub user: Option<UserRef>,
    pub stand: Option<StandRef>,
}
