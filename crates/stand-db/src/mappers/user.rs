//! User entity <-> model mapper

use stand_core::entities::User;
use stand_core::error::DomainError;
use stand_core::value_objects::Role;

use crate::models::UserModel;

/// Convert UserModel to User entity
///
/// Fails only if the stored role is outside the known set.
impl TryFrom<UserModel> for User {
    type Error = DomainError;

    fn try_from(model: UserModel) -> Result<Self, Self::Error> {
        let role = Role::parse(&model.role)
            .map_err(|e| DomainError::DatabaseError(format!("user {}: {e}", model.id)))?;

        Ok(User {
            id: model.id,
            role,
            first_name: model.first_name,
            last_name: model.last_name,
            handle: model.handle,
            email: model.email,
            avatar: model.avatar,
            password_changed_at: model.password_changed_at,
            active: model.active,
            created_at: model.created_at,
        })
    }
}
