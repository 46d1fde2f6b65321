//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use stand_core::entities::{
    Favorite, FavoriteDetails, Review, ReviewDetails, Stand, StandRef, User, UserRef,
};

use super::responses::{
    FavoriteResponse, PopulatedFavoriteResponse, PopulatedReviewResponse, ReviewResponse,
    SessionUserResponse, StandRefResponse, StandResponse, StandSummaryResponse, UserRefResponse,
    UserResponse,
};

// ============================================================================
// User Mappers
// ============================================================================

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            role: user.role,
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            handle: user.handle.clone(),
            email: user.email.clone(),
            avatar: user.avatar.clone(),
            created_at: user.created_at,
        }
    }
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self::from(&user)
    }
}

impl From<&User> for SessionUserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            handle: user.handle.clone(),
            email: user.email.clone(),
        }
    }
}

impl From<UserRef> for UserRefResponse {
    fn from(user: UserRef) -> Self {
        Self {
            id: user.id,
            handle: user.handle,
            avatar: user.avatar,
        }
    }
}

// ============================================================================
// Stand Mappers
// ============================================================================

impl From<Stand> for StandResponse {
    fn from(stand: Stand) -> Self {
        Self {
            id: stand.id,
            name: stand.name,
            slug: stand.slug,
            avatar: stand.avatar,
            location: stand.location,
            hours_of_op: stand.hours_of_op,
            ratings_average: stand.ratings_average,
            ratings_quantity: stand.ratings_quantity,
            owner: stand.owner_id,
            menu: stand.menu,
            description: stand.description,
            created_at: stand.created_at,
        }
    }
}

impl From<Stand> for StandSummaryResponse {
    fn from(stand: Stand) -> Self {
        Self {
            id: stand.id,
            name: stand.name,
            ratings_average: stand.ratings_average,
            ratings_quantity: stand.ratings_quantity,
            avatar: stand.avatar,
        }
    }
}

impl From<StandRef> for StandRefResponse {
    fn from(stand: StandRef) -> Self {
        Self {
            id: stand.id,
            name: stand.name,
            avatar: stand.avatar,
        }
    }
}

// ============================================================================
// Review Mappers
// ============================================================================

impl From<Review> for ReviewResponse {
    fn from(review: Review) -> Self {
        Self {
            id: review.id,
            author: review.author_id,
            stand: review.stand_id,
            text: review.text,
            rating: review.rating,
            created_at: review.created_at,
            updated_at: review.updated_at,
        }
    }
}

impl From<ReviewDetails> for PopulatedReviewResponse {
    fn from(details: ReviewDetails) -> Self {
        let ReviewDetails {
            review,
            author,
            stand,
        } = details;

        Self {
            id: review.id,
            author: author.map(Into::into),
            stand: stand.map(Into::into),
            text: review.text,
            rating: review.rating,
            created_at: review.created_at,
            updated_at: review.updated_at,
        }
    }
}

// ============================================================================
// Favorite Mappers
// ============================================================================

impl From<Favorite> for FavoriteResponse {
    fn from(favorite: Favorite) -> Self {
        Self {
            id: favorite.id,
            user: favorite.user_id,
            stand: favorite.stand_id,
            created_at: favorite.created_at,
        }
    }
}

impl From<FavoriteDetails> for PopulatedFavoriteResponse {
    fn from(details: FavoriteDetails) -> Self {
        Self {
            id: details.favorite.id,
            user: details.user.map(Into::into),
            stand: details.stand.map(Into::into),
            created_at: details.favorite.created_at,
        }
    }
}
