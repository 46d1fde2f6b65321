//! Response types and error handling for API endpoints
//!
//! Successful bodies use the envelope
//! `{ "status": "success", "results"?: N, "token"?: "...", "data": { <name>: ... } }`.
//! Errors use `{ "status": "fail" | "error", "code": ..., "message": ... }`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{ser::SerializeMap, Serialize, Serializer};
use stand_common::{AppError, ErrorResponse, ResponseStatus};
use stand_core::DomainError;
use stand_service::ServiceError;
use thiserror::Error;
use tracing::error;
use validator::ValidationErrors;

/// API error type for consistent error responses
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    App(#[from] AppError),

    #[error("{}", validation_message(.0))]
    Validation(#[from] ValidationErrors),

    #[error("Invalid path parameter: {0}")]
    InvalidPath(String),

    #[error("Invalid query parameter: {0}")]
    InvalidQuery(String),

    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    #[error("Request body is too large")]
    PayloadTooLarge,

    #[error("{0} is not a valid endpoint")]
    UnknownRoute(String),
}

impl ApiError {
    /// Get HTTP status code for this error
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::App(e) => {
                StatusCode::from_u16(e.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
            }
            Self::Validation(_)
            | Self::InvalidPath(_)
            | Self::InvalidQuery(_)
            | Self::InvalidBody(_) => StatusCode::BAD_REQUEST,
            Self::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            Self::UnknownRoute(_) => StatusCode::NOT_FOUND,
        }
    }

    /// Get error code for API responses
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::App(e) => e.error_code(),
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::InvalidPath(_) => "INVALID_PATH_PARAMETER",
            Self::InvalidQuery(_) => "INVALID_QUERY",
            Self::InvalidBody(_) => "INVALID_BODY",
            Self::PayloadTooLarge => "PAYLOAD_TOO_LARGE",
            Self::UnknownRoute(_) => "UNKNOWN_ROUTE",
        }
    }

    /// Message safe to return to the client
    #[must_use]
    pub fn public_message(&self) -> String {
        match self {
            Self::App(e) => e.public_message(),
            _ => self.to_string(),
        }
    }

    pub fn invalid_path(msg: impl Into<String>) -> Self {
        Self::InvalidPath(msg.into())
    }

    pub fn invalid_query(msg: impl Into<String>) -> Self {
        Self::InvalidQuery(msg.into())
    }

    pub fn invalid_body(msg: impl Into<String>) -> Self {
        Self::InvalidBody(msg.into())
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        Self::App(err.into())
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self::App(AppError::Domain(err))
    }
}

/// Join every field message into one sentence list, in field order
fn validation_message(errors: &ValidationErrors) -> String {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));

    let messages: Vec<String> = fields
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| {
                e.message
                    .as_ref()
                    .map_or_else(|| format!("Invalid {field}"), ToString::to_string)
            })
        })
        .collect();

    if messages.is_empty() {
        "Invalid input data".to_string()
    } else {
        messages.join(". ")
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // Programming and storage errors are logged in full; the body stays generic
        if status.is_server_error() {
            error!(error = ?self, "Server error occurred");
        }

        let body = ErrorResponse {
            status: ResponseStatus::for_status_code(status.as_u16()),
            code: self.error_code().to_string(),
            message: self.public_message(),
        };

        (status, Json(body)).into_response()
    }
}

/// Type alias for API results
pub type ApiResult<T> = Result<T, ApiError>;

/// Payload stored under a single named key of `data`
#[derive(Debug)]
pub struct Named<T> {
    name: &'static str,
    value: T,
}

impl<T: Serialize> Serialize for Named<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(self.name, &self.value)?;
        map.end()
    }
}

/// Success envelope
#[derive(Debug, Serialize)]
pub struct Envelope<T> {
    status: ResponseStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    results: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    token: Option<String>,
    data: Named<T>,
}

impl<T> Envelope<T> {
    /// `{ "status": "success", "data": { name: value } }`
    pub fn new(name: &'static str, value: T) -> Self {
        Self {
            status: ResponseStatus::Success,
            results: None,
            token: None,
            data: Named { name, value },
        }
    }

    pub fn with_token(mut self, token: String) -> Self {
        self.token = Some(token);
        self
    }
}

impl<T> Envelope<Vec<T>> {
    /// Collection envelope carrying `results`
    pub fn list(name: &'static str, values: Vec<T>) -> Self {
        let results = values.len();
        let mut envelope = Self::new(name, values);
        envelope.results = Some(results);
        envelope
    }
}

impl<T: Serialize> IntoResponse for Envelope<T> {
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}

/// Created response (201) with JSON body
pub struct Created<T>(pub T);

impl<T: IntoResponse> IntoResponse for Created<T> {
    fn into_response(self) -> Response {
        let mut response = self.0.into_response();
        *response.status_mut() = StatusCode::CREATED;
        response
    }
}

/// No content response (204)
pub struct NoContent;

impl IntoResponse for NoContent {
    fn into_response(self) -> Response {
        StatusCode::NO_CONTENT.into_response()
    }
}
