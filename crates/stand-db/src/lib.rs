//! # stand-db
//!
//! Database layer implementing repository traits with PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! This crate provides PostgreSQL implementations for all repository traits
//! defined in `stand-core`. It handles:
//!
//! - Connection pool management and migrations
//! - Database models with SQLx `FromRow` derives
//! - Entity ↔ Model mappers
//! - Repository implementations
//!
//! Users and stands are soft-deleted. Every read query filters on `active`
//! explicitly, including the joins that populate review and favorite references.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use stand_db::pool::{create_pool, DatabaseConfig};
//! use stand_db::repositories::PgStandRepository;
//! use stand_core::traits::StandRepository;
//!
//! async fn example(config: &stand_common::DatabaseConfig) -> Result<(), Box<dyn std::error::Error>> {
//!     let pool = create_pool(&DatabaseConfig::from(config)).await?;
//!     let stands = PgStandRepository::new(pool).find_all().await?;
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{create_pool, ping, run_migrations, DatabaseConfig, PgPool};
pub use repositories::{
    PgFavoriteRepository, PgReviewRepository, PgStandRepository, PgUserRepository,
};
