//! # stand-core
//!
//! Domain layer containing entities, value objects, access predicates, and repository traits.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod access;
pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use access::{authorize_all, Identity, Policy};
pub use entities::{
    Favorite, FavoriteDetails, RatingSummary, Review, ReviewDetails, Stand, StandRef, User,
    UserRef, DEFAULT_STAND_AVATAR, DEFAULT_USER_AVATAR,
};
pub use error::DomainError;
pub use traits::{
    FavoriteRepository, RepoResult, ReviewRepository, StandRepository, UserRepository,
};
pub use value_objects::{
    is_valid_clock_time, slugify, DaySchedule, GeoPoint, HoursOfOperation, MenuItem, Role,
    RoleParseError,
};
