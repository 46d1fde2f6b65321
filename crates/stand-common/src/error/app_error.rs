//! Application error types
//!
//! Unified error handling for the entire application.

use serde::Serialize;
use stand_core::DomainError;

/// Application-wide error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // Authentication errors
    #[error("Incorrect email or password")]
    InvalidCredentials,

    #[error("Invalid token, please log in again")]
    InvalidToken,

    #[error("Your token has expired, please log in again")]
    TokenExpired,

    #[error("You are not logged in, please log in to get access")]
    MissingAuth,

    #[error("The user belonging to this token no longer exists")]
    UserGone,

    #[error("User recently changed password, please log in again")]
    PasswordChanged,

    // Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    // Resource errors
    #[error("{0}")]
    NotFound(String),

    // Database errors
    #[error("Database error: {0}")]
    Database(String),

    // Internal errors
    #[error("Internal server error")]
    Internal(#[source] anyhow::Error),

    // Domain errors
    #[error(transparent)]
    Domain(#[from] DomainError),

    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    /// Get HTTP status code for this error
    #[must_use]
    pub fn status_code(&self) -> u16 {
        match self {
            // 400 Bad Request
            Self::Validation(_) => 400,

            // 401 Unauthorized
            Self::InvalidCredentials
            | Self::InvalidToken
            | Self::TokenExpired
            | Self::MissingAuth
            | Self::UserGone
            | Self::PasswordChanged => 401,

            // 404 Not Found
            Self::NotFound(_) => 404,

            // 500 Internal Server Error
            Self::Database(_) | Self::Internal(_) | Self::Config(_) => 500,

            // Map domain errors to appropriate status codes
            Self::Domain(e) => {
                if e.is_not_found() {
                    404
                } else if e.is_authorization() {
                    403
                } else if e.is_validation() {
                    400
                } else {
                    500
                }
            }
        }
    }

    /// Get error code for API responses
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidCredentials => "INVALID_CREDENTIALS",
            Self::InvalidToken => "INVALID_TOKEN",
            Self::TokenExpired => "TOKEN_EXPIRED",
            Self::MissingAuth => "MISSING_AUTH",
            Self::UserGone => "USER_GONE",
            Self::PasswordChanged => "PASSWORD_CHANGED",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::NotFound(_) => "NOT_FOUND",
            Self::Database(_) => "DATABASE_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
            Self::Config(_) => "CONFIG_ERROR",
            Self::Domain(e) => e.code(),
        }
    }

    /// Whether the storage layer is the cause
    #[must_use]
    pub fn is_upstream(&self) -> bool {
        match self {
            Self::Database(_) => true,
            Self::Domain(e) => e.is_upstream(),
            _ => false,
        }
    }

    /// Whether the error is an expected outcome whose message is safe to show
    ///
    /// Everything else is a programming error and gets a generic message.
    #[must_use]
    pub fn is_operational(&self) -> bool {
        match self {
            Self::Internal(_) | Self::Config(_) => false,
            Self::Domain(e) => !matches!(e, DomainError::InternalError(_)),
            _ => true,
        }
    }

    /// Message safe to put in a response body
    #[must_use]
    pub fn public_message(&self) -> String {
        if self.is_upstream() {
            "Database unavailable".to_string()
        } else if self.is_operational() {
            self.to_string()
        } else {
            "Something went wrong".to_string()
        }
    }
}

/// Envelope status tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseStatus {
    Success,
    /// Client error (4xx)
    Fail,
    /// Server error (5xx)
    Error,
}

impl ResponseStatus {
    #[must_use]
    pub fn for_status_code(code: u16) -> Self {
        match code {
            400..=499 => Self::Fail,
            500..=599 => Self::Error,
            _ => Self::Success,
        }
    }
}

/// Error response structure for API responses
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub status: ResponseStatus,
    pub code: String,
    pub message: String,
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
