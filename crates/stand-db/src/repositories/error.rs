//! Error handling utilities for repositories

use sqlx::Error as SqlxError;
use stand_core::error::DomainError;
use uuid::Uuid;

/// Convert SQLx error to DomainError
pub fn map_db_error(e: SqlxError) -> DomainError {
    DomainError::DatabaseError(e.to_string())
}

/// Check for unique violation and return appropriate error or fallback
pub fn map_unique_violation<F>(e: SqlxError, on_unique: F) -> DomainError
where
    F: FnOnce() -> DomainError,
{
    map_unique_constraint(e, |_| on_unique())
}

/// Like [`map_unique_violation`], passing the violated constraint name
pub fn map_unique_constraint<F>(e: SqlxError, on_unique: F) -> DomainError
where
    F: FnOnce(&str) -> DomainError,
{
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            return on_unique(db_err.constraint().unwrap_or_default());
        }
    }
    DomainError::DatabaseError(e.to_string())
}

/// Unique constraints on users
pub fn user_conflict(constraint: &str) -> DomainError {
    match constraint {
        "users_handle_key" => DomainError::HandleTaken,
        _ => DomainError::EmailTaken,
    }
}

/// Name of the violated constraint when the error is a foreign key violation
pub fn foreign_key_constraint(e: &SqlxError) -> Option<String> {
    e.as_database_error()
        .filter(|db_err| db_err.is_foreign_key_violation())
        .map(|db_err| db_err.constraint().unwrap_or_default().to_string())
}

/// Create a "user not found" error
pub fn user_not_found(id: Uuid) -> DomainError {
    DomainError::UserNotFound(id)
}

/// Create a "stand not found" error
pub fn stand_not_found(id: Uuid) -> DomainError {
    DomainError::StandNotFound(id)
}

/// Create a "review not found" error
pub fn review_not_found(id: Uuid) -> DomainError {
    DomainError::ReviewNotFound(id)
}
