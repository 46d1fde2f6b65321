//! Repository traits (ports) - define the interface for data access
//!
//! Users and stands are soft-deleted: unless a method says otherwise, every
//! read only sees rows with `active = true`, and "delete" means deactivate.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::entities::{
    Favorite, FavoriteDetails, RatingSummary, Review, ReviewDetails, Stand, User,
};
use crate::error::DomainError;
use crate::value_objects::Role;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find an active user by ID
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<User>>;

    /// Find an active user by (lowercased) email
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>>;

    /// List all active users
    async fn find_all(&self) -> RepoResult<Vec<User>>;

    /// Create a new user
    ///
    /// Fails with `HandleTaken` or `EmailTaken` on a uniqueness conflict.
    async fn create(&self, user: &User, password_hash: &str) -> RepoResult<()>;

    /// Update profile fields (names, handle, email, avatar)
    async fn update_profile(&self, user: &User) -> RepoResult<()>;

    /// Get password hash for authentication
    async fn get_password_hash(&self, id: Uuid) -> RepoResult<Option<String>>;

    /// Replace the password hash and record when it changed
    async fn update_password(
        &self,
        id: Uuid,
        password_hash: &str,
        changed_at: DateTime<Utc>,
    ) -> RepoResult<()>;

    /// Change a user's role
    async fn update_role(&self, id: Uuid, role: Role) -> RepoResult<()>;

    /// Soft delete a user
    async fn deactivate(&self, id: Uuid) -> RepoResult<()>;
}

// ============================================================================
// Stand Repository
// ============================================================================

#[async_trait]
pub trait StandRepository: Send + Sync {
    /// Find an active stand by ID
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Stand>>;

    /// Find a stand by ID whatever its active flag
    async fn find_by_id_including_inactive(&self, id: Uuid) -> RepoResult<Option<Stand>>;

    /// List all active stands
    async fn find_all(&self) -> RepoResult<Vec<Stand>>;

    /// Create a new stand
    ///
    /// Fails with `StandNameTaken` on a uniqueness conflict.
    async fn create(&self, stand: &Stand) -> RepoResult<()>;

    /// Soft delete a stand
    async fn deactivate(&self, id: Uuid) -> RepoResult<()>;

    /// Persist recomputed rating figures
    ///
    /// Applies to inactive stands too, so the figures stay consistent if reactivated.
    async fn update_ratings(&self, id: Uuid, summary: &RatingSummary) -> RepoResult<()>;
}

// ============================================================================
// Review Repository
// ============================================================================

#[async_trait]
pub trait ReviewRepository: Send + Sync {
    /// Find review by ID
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Review>>;

    /// List a user's reviews with populated references
    async fn find_by_author(&self, author_id: Uuid) -> RepoResult<Vec<ReviewDetails>>;

    /// List a stand's reviews with populated references
    async fn find_by_stand(&self, stand_id: Uuid) -> RepoResult<Vec<ReviewDetails>>;

    /// Create a new review
    ///
    /// Fails with `DuplicateReview` if the author already reviewed the stand.
    async fn create(&self, review: &Review) -> RepoResult<()>;

    /// Update rating and text
    async fn update(&self, review: &Review) -> RepoResult<()>;

    /// Hard delete a review
    async fn delete(&self, id: Uuid) -> RepoResult<()>;

    /// `COUNT(*)` and `AVG(rating)` over a stand's reviews
    async fn aggregate_ratings(&self, stand_id: Uuid) -> RepoResult<(i64, Option<f64>)>;
}

// ============================================================================
// Favorite Repository
// ============================================================================

#[async_trait]
pub trait FavoriteRepository: Send + Sync {
    /// List a user's favorites with populated references
    async fn find_by_user(&self, user_id: Uuid) -> RepoResult<Vec<FavoriteDetails>>;

    /// Create a new favorite
    ///
    /// Fails with `DuplicateFavorite` if the pair already exists.
    async fn create(&self, favorite: &Favorite) -> RepoResult<()>;

    /// Remove the favorite for a (user, stand) pair
    async fn delete(&self, user_id: Uuid, stand_id: Uuid) -> RepoResult<()>;
}
