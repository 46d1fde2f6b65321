//! # stand-service
//!
//! Application layer containing business logic, services, and DTOs.

pub mod dto;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

pub use services::{
    AuthService, FavoriteService, RatingAggregator, ReviewService, ServiceContext,
    ServiceContextBuilder, ServiceError, ServiceResult, StandService, UserService,
    RATING_RETRY_DELAY,
};
