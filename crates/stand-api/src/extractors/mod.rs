//! Axum extractors for request handling
//!
//! Custom extractors for authentication, validation, and path identifiers.

mod auth;
mod path;
mod validated;

pub use auth::{AuthUser, AUTH_COOKIE};
pub use path::{IdParam, IdPath, UserFavoritePath, UserReviewPath};
pub use validated::ValidatedJson;
