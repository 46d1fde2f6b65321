//! Service context - dependency container for services
//!
//! Holds the repositories and auth helpers every service needs.

use std::sync::Arc;

use stand_common::auth::{JwtService, PasswordService};
use stand_core::traits::{
    FavoriteRepository, ReviewRepository, StandRepository, UserRepository,
};
use stand_db::{
    PgFavoriteRepository, PgPool, PgReviewRepository, PgStandRepository, PgUserRepository,
};

use super::error::{ServiceError, ServiceResult};

/// Service context containing all dependencies
///
/// Cloning is cheap: every field is a pool handle or an `Arc`. The rating
/// aggregator relies on this to move a context into its retry task.
#[derive(Clone)]
pub struct ServiceContext {
    // Database pool
    pool: PgPool,

    // Repositories
    user_repo: Arc<dyn UserRepository>,
    stand_repo: Arc<dyn StandRepository>,
    review_repo: Arc<dyn ReviewRepository>,
    favorite_repo: Arc<dyn FavoriteRepository>,

    // Auth
    jwt_service: Arc<JwtService>,
    password_service: PasswordService,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        pool: PgPool,
        user_repo: Arc<dyn UserRepository>,
        stand_repo: Arc<dyn StandRepository>,
        review_repo: Arc<dyn ReviewRepository>,
        favorite_repo: Arc<dyn FavoriteRepository>,
        jwt_service: Arc<JwtService>,
    ) -> Self {
        Self {
            pool,
            user_repo,
            stand_repo,
            review_repo,
            favorite_repo,
            jwt_service,
            password_service: PasswordService::new(),
        }
    }

    /// Wire the PostgreSQL repositories over a single pool
    pub fn postgres(pool: PgPool, jwt_service: Arc<JwtService>) -> Self {
        Self::new(
            pool.clone(),
            Arc::new(PgUserRepository::new(pool.clone())),
            Arc::new(PgStandRepository::new(pool.clone())),
            Arc::new(PgReviewRepository::new(pool.clone())),
            Arc::new(PgFavoriteRepository::new(pool)),
            jwt_service,
        )
    }

    // === Database Pool ===

    /// Get the PostgreSQL connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    // === Repositories ===

    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    pub fn stand_repo(&self) -> &dyn StandRepository {
        self.stand_repo.as_ref()
    }

    pub fn review_repo(&self) -> &dyn ReviewRepository {
        self.review_repo.as_ref()
    }

    pub fn favorite_repo(&self) -> &dyn FavoriteRepository {
        self.favorite_repo.as_ref()
    }

    // === Auth ===

    /// Get the JWT service
    pub fn jwt_service(&self) -> &JwtService {
        self.jwt_service.as_ref()
    }

    pub fn password_service(&self) -> &PasswordService {
        &self.password_service
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("pool", &"PgPool")
            .field("repositories", &"...")
            .field("jwt_service", &self.jwt_service)
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
#[derive(Default)]
pub struct ServiceContextBuilder {
    pool: Option<PgPool>,
    user_repo: Option<Arc<dyn UserRepository>>,
    stand_repo: Option<Arc<dyn StandRepository>>,
    review_repo: Option<Arc<dyn ReviewRepository>>,
    favorite_repo: Option<Arc<dyn FavoriteRepository>>,
    jwt_service: Option<Arc<JwtService>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pool(mut self, pool: PgPool) -> Self {
        self.pool = Some(pool);
        self
    }

    pub fn user_repo(mut self, repo: Arc<dyn UserRepository>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    pub fn stand_repo(mut self, repo: Arc<dyn StandRepository>) -> Self {
        self.stand_repo = Some(repo);
        self
    }

    pub fn review_repo(mut self, repo: Arc<dyn ReviewRepository>) -> Self {
        self.review_repo = Some(repo);
        self
    }

    pub fn favorite_repo(mut self, repo: Arc<dyn FavoriteRepository>) -> Self {
        self.favorite_repo = Some(repo);
        self
    }

    pub fn jwt_service(mut self, service: Arc<JwtService>) -> Self {
        self.jwt_service = Some(service);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        Ok(ServiceContext::new(
            self.pool
                .ok_or_else(|| ServiceError::validation("pool is required"))?,
            self.user_repo
                .ok_or_else(|| ServiceError::validation("user_repo is required"))?,
            self.stand_repo
                .ok_or_else(|| ServiceError::validation("stand_repo is required"))?,
            self.review_repo
                .ok_or_else(|| ServiceError::validation("review_repo is required"))?,
            self.favorite_repo
                .ok_or_else(|| ServiceError::validation("favorite_repo is required"))?,
            self.jwt_service
                .ok_or_else(|| ServiceError::validation("jwt_service is required"))?,
        ))
    }
}
