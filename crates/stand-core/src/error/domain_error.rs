//! Domain errors - error types for the domain layer

use thiserror::Error;
use uuid::Uuid;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("User not found: {0}")]
    UserNotFound(Uuid),

    #[error("Stand not found: {0}")]
    StandNotFound(Uuid),

    #[error("Review not found: {0}")]
    ReviewNotFound(Uuid),

    #[error("Favorite not found for stand: {0}")]
    FavoriteNotFound(Uuid),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Invalid time for {day}: '{value}' (expected h:mm am|pm)")]
    InvalidTime { day: &'static str, value: String },

    #[error("Invalid location: {0}")]
    InvalidLocation(String),

    #[error("Passwords do not match")]
    PasswordMismatch,

    #[error("Password should not be modified using this route")]
    ForbiddenField,

    #[error("You have already reviewed this stand")]
    DuplicateReview,

    #[error("You have already favorited this stand")]
    DuplicateFavorite,

    #[error("Handle already in use")]
    HandleTaken,

    #[error("Email already in use")]
    EmailTaken,

    #[error("A stand with this name already exists")]
    StandNameTaken,

    // =========================================================================
    // Authorization Errors
    // =========================================================================
    #[error("Your role is not permitted to perform this action")]
    RoleNotPermitted,

    #[error("You do not own this resource")]
    NotOwner,

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::UserNotFound(_) => "UNKNOWN_USER",
            Self::StandNotFound(_) => "UNKNOWN_STAND",
            Self::ReviewNotFound(_) => "UNKNOWN_REVIEW",
            Self::FavoriteNotFound(_) => "UNKNOWN_FAVORITE",

            // Validation
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::InvalidTime { .. } => "INVALID_TIME",
            Self::InvalidLocation(_) => "INVALID_LOCATION",
            Self::PasswordMismatch => "PASSWORD_MISMATCH",
            Self::ForbiddenField => "FORBIDDEN_FIELD",
            Self::DuplicateReview => "DUPLICATE_REVIEW",
            Self::DuplicateFavorite => "DUPLICATE_FAVORITE",
            Self::HandleTaken => "HANDLE_TAKEN",
            Self::EmailTaken => "EMAIL_TAKEN",
            Self::StandNameTaken => "STAND_NAME_TAKEN",

            // Authorization
            Self::RoleNotPermitted => "ROLE_NOT_PERMITTED",
            Self::NotOwner => "NOT_OWNER",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::UserNotFound(_)
                | Self::StandNotFound(_)
                | Self::ReviewNotFound(_)
                | Self::FavoriteNotFound(_)
        )
    }

    /// Check if this is a validation error
    ///
    /// Uniqueness violations are reported as validation failures.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_)
                | Self::InvalidTime { .. }
                | Self::InvalidLocation(_)
                | Self::PasswordMismatch
                | Self::ForbiddenField
                | Self::DuplicateReview
                | Self::DuplicateFavorite
                | Self::HandleTaken
                | Self::EmailTaken
                | Self::StandNameTaken
        )
    }

    /// Check if this is an authorization error
    pub fn is_authorization(&self) -> bool {
        matches!(self, Self::RoleNotPermitted | Self::NotOwner)
    }

    /// Check if the storage layer failed
    pub fn is_upstream(&self) -> bool {
        matches!(self, Self::DatabaseError(_))
    }
}
