//! Domain entities - core business objects

mod favorite;
mod rating;
mod review;
mod stand;
mod user;

pub use favorite::{Favorite, FavoriteDetails};
pub use rating::RatingSummary;
pub use review::{Review, ReviewDetails};
pub use stand::{Stand, StandRef, DEFAULT_STAND_AVATAR};
pub use user::{User, UserRef, DEFAULT_USER_AVATAR};
