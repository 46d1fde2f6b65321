//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in stand-core.
//! Each repository handles database operations for a specific domain entity.

mod error;
mod favorite;
mod review;
mod stand;
mod user;

pub use favorite::PgFavoriteRepository;
pub use review::PgReviewRepository;
pub use stand::PgStandRepository;
pub use user::PgUserRepository;
