//! Data transfer objects for API requests and responses
//!
//! This module provides:
//! - Request DTOs with validation for API inputs
//! - Response DTOs for serializing API outputs
//! - Mappers for converting domain entities to DTOs

pub mod mappers;
pub mod requests;
pub mod responses;

pub use requests::{
    CreateFavoriteRequest, CreateReviewRequest, CreateStandRequest, LoginRequest,
    MenuItemRequest, SignupRequest, StandListQuery, UpdateMeRequest, UpdatePasswordRequest,
    UpdateReviewRequest,
};

pub use responses::{
    AuthResponse, FavoriteResponse, HealthResponse, PopulatedFavoriteResponse,
    PopulatedReviewResponse, ReadinessResponse, ReviewResponse, SessionUserResponse,
    StandDetailsResponse, StandRefResponse, StandResponse, StandSummaryResponse,
    UserProfileResponse, UserRefResponse, UserResponse,
};
