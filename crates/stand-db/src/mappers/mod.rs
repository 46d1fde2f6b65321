//! Entity to model mappers
//!
//! Conversions between domain entities (stand-core) and database models.
//! - `From<Model> for Entity`: Convert database rows to domain objects
//! - `TryFrom` where a stored column must be parsed (user roles)

mod favorite;
mod review;
mod stand;
mod user;

pub use review::rating_summary;
