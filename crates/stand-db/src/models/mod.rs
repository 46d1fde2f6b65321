//! Database models - SQLx-compatible structs for PostgreSQL tables

mod favorite;
mod review;
mod stand;
mod user;

pub use favorite::{FavoriteDetailsModel, FavoriteModel};
pub use review::{RatingAggregateModel, ReviewDetailsModel, ReviewModel};
pub use stand::StandModel;
pub use user::UserModel;
