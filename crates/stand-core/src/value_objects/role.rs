//! User role

use serde::{Deserialize, Serialize};
use std::fmt;

/// Account role
///
/// Stored as lowercase text and serialized the same way on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Admin,
    #[default]
    User,
    StandOwner,
}

impl Role {
    /// All roles, in declaration order
    pub const ALL: [Role; 3] = [Role::Admin, Role::User, Role::StandOwner];

    /// Database / wire representation
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::User => "user",
            Self::StandOwner => "stand_owner",
        }
    }

    #[inline]
    pub const fn is_admin(&self) -> bool {
        matches!(self, Self::Admin)
    }

    /// Parse from the stored representation
    pub fn parse(s: &str) -> Result<Self, RoleParseError> {
        Self::ALL
            .into_iter()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| RoleParseError(s.to_string()))
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Role {
    type Err = RoleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::parse(s)
    }
}

/// Error returned when a stored role string is unknown
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown role: {0}")]
pub struct RoleParseError(pub String);
