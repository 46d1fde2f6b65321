//! Access predicates
//!
//! Policies are plain values checked against an [`Identity`]. Checking has no
//! side effects, so a request can evaluate several policies in sequence.

use uuid::Uuid;

use crate::error::DomainError;
use crate::value_objects::Role;

/// Authenticated caller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Identity {
    pub user_id: Uuid,
    pub role: Role,
}

impl Identity {
    pub const fn new(user_id: Uuid, role: Role) -> Self {
        Self { user_id, role }
    }

    #[inline]
    pub const fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}

/// Authorization predicate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Policy {
    /// Caller's role must be in the list
    Roles(&'static [Role]),
    /// Caller must be the owner, unless they are an admin
    Owner(Uuid),
}

impl Policy {
    /// Regular users and admins
    pub const MEMBERS: Self = Self::Roles(&[Role::User, Role::Admin]);
    /// Stand owners and admins
    pub const STAND_MANAGERS: Self = Self::Roles(&[Role::StandOwner, Role::Admin]);
    pub const ADMIN_ONLY: Self = Self::Roles(&[Role::Admin]);

    /// Check the policy against the caller
    pub fn authorize(&self, identity: &Identity) -> Result<(), DomainError> {
        match self {
            Self::Roles(roles) if roles.contains(&identity.role) => Ok(()),
            Self::Roles(_) => Err(DomainError::RoleNotPermitted),
            Self::Owner(owner_id) if identity.is_admin() || *owner_id == identity.user_id => {
                Ok(())
            }
            Self::Owner(_) => Err(DomainError::NotOwner),
        }
    }

    pub fn permits(&self, identity: &Identity) -> bool {
        self.authorize(identity).is_ok()
    }
}

/// Check every policy in order, stopping at the first failure
pub fn authorize_all(identity: &Identity, policies: &[Policy]) -> Result<(), DomainError> {
    policies
        .iter()
        .try_for_each(|policy| policy.authorize(identity))
}
