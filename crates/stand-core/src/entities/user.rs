//! User entity - an account that reviews, favorites, or owns stands

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::access::Identity;
use crate::value_objects::Role;

/// Avatar assigned at signup
pub const DEFAULT_USER_AVATAR: &str = "user-avatar-default.jpeg";

/// User entity
///
/// The password hash is never part of the entity; repositories expose it separately.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: Uuid,
    pub role: Role,
    pub first_name: String,
    pub last_name: String,
    pub handle: String,
    pub email: String,
    pub avatar: String,
    pub password_changed_at: Option<DateTime<Utc>>,
    pub active: bool,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a new active user with the default role and avatar
    pub fn new(first_name: &str, last_name: &str, handle: &str, email: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            role: Role::default(),
            first_name: first_name.trim().to_string(),
            last_name: last_name.trim().to_string(),
            handle: handle.trim().to_string(),
            email: email.trim().to_lowercase(),
            avatar: DEFAULT_USER_AVATAR.to_string(),
            password_changed_at: None,
            active: true,
            created_at: Utc::now(),
        }
    }

    /// Whether the password changed after a token issued at `issued_at` (unix seconds)
    ///
    /// Tokens issued in the same second as the change are still accepted.
    pub fn changed_password_after(&self, issued_at: i64) -> bool {
        self.password_changed_at
            .is_some_and(|changed| changed.timestamp() > issued_at)
    }

    /// Identity used by access policies
    #[inline]
    pub fn identity(&self) -> Identity {
        Identity::new(self.id, self.role)
    }

    /// Reference view used when populating reviews and favorites
    pub fn as_ref_view(&self) -> UserRef {
        UserRef {
            id: self.id,
            handle: self.handle.clone(),
            avatar: self.avatar.clone(),
        }
    }
}

/// Populated user reference
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRef {
    pub id: Uuid,
    pub handle: String,
    pub avatar: String,
}
