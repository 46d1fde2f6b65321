//! Business logic services
//!
//! Each service borrows the shared [`ServiceContext`] for the duration of a
//! request. Access checks happen here, before any store write.

pub mod auth;
pub mod context;
pub mod error;
pub mod favorite;
pub mod rating;
pub mod review;
pub mod stand;
pub mod user;

// Re-export all services for convenience
pub use auth::AuthService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use favorite::FavoriteService;
pub use rating::{RatingAggregator, RATING_RETRY_DELAY};
pub use review::ReviewService;
pub use stand::StandService;
pub use user::UserService;
