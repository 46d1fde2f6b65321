//! In-memory repositories and fixtures for service tests
//!
//! `MemoryStore` implements every repository trait over one shared state so
//! population joins and soft-delete filtering behave like the SQL adapters.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::postgres::PgPoolOptions;
use stand_common::JwtService;
use stand_core::traits::{
    FavoriteRepository, RepoResult, ReviewRepository, StandRepository, UserRepository,
};
use stand_core::{
    DomainError, Favorite, FavoriteDetails, RatingSummary, Review, ReviewDetails, Role, Stand,
    User,
};
use uuid::Uuid;

use crate::dto::SignupRequest;
use crate::services::{ReviewService, ServiceContext, ServiceContextBuilder};

pub const PASSWORD: &str = "pass1234";

#[derive(Default)]
struct State {
    users: Vec<(User, String)>,
    stands: Vec<Stand>,
    reviews: Vec<Review>,
    favorites: Vec<Favorite>,
}

impl State {
    fn active_user(&self, id: Uuid) -> Option<&User> {
        self.users
            .iter()
            .map(|(user, _)| user)
            .find(|user| user.id == id && user.active)
    }

    fn has_user(&self, id: Uuid) -> bool {
        self.users.iter().any(|(user, _)| user.id == id)
    }

    fn active_stand(&self, id: Uuid) -> Option<&Stand> {
        self.stands.iter().find(|stand| stand.id == id && stand.active)
    }

    fn review_details(&self, review: &Review) -> ReviewDetails {
        ReviewDetails {
            review: review.clone(),
            author: self.active_user(review.author_id).map(User::as_ref_view),
            stand: self.active_stand(review.stand_id).map(Stand::as_ref_view),
        }
    }

    fn user_conflict(&self, user: &User) -> Option<DomainError> {
        let others = self.users.iter().map(|(u, _)| u).filter(|u| u.id != user.id);
        for other in others {
            if other.handle == user.handle {
                return Some(DomainError::HandleTaken);
            }
            if other.email == user.email {
                return Some(DomainError::EmailTaken);
            }
        }
        None
    }
}

#[derive(Default)]
pub struct MemoryStore {
    state: Mutex<State>,
    fail_rating_updates: AtomicBool,
}

impl MemoryStore {
    /// Make `update_ratings` fail until switched back
    pub fn fail_rating_updates(&self, fail: bool) {
        self.fail_rating_updates.store(fail, Ordering::SeqCst);
    }
}

#[async_trait]
impl UserRepository for MemoryStore {
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<User>> {
        Ok(self.state.lock().unwrap().active_user(id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>> {
        let email = email.trim().to_lowercase();
        let state = self.state.lock().unwrap();
        Ok(state
            .users
            .iter()
            .map(|(user, _)| user)
            .find(|user| user.email == email && user.active)
            .cloned())
    }

    async fn find_all(&self) -> RepoResult<Vec<User>> {
        let state = self.state.lock().unwrap();
        Ok(state
            .users
            .iter()
            .map(|(user, _)| user)
            .filter(|user| user.active)
            .cloned()
            .collect())
    }

    async fn create(&self, user: &User, password_hash: &str) -> RepoResult<()> {
        let mut state = self.state.lock().unwrap();
        if let Some(conflict) = state.user_conflict(user) {
            return Err(conflict);
        }
        state.users.push((user.clone(), password_hash.to_string()));
        Ok(())
    }

    async fn update_profile(&self, user: &User) -> RepoResult<()> {
        let mut state = self.state.lock().unwrap();
        if let Some(conflict) = state.user_conflict(user) {
            return Err(conflict);
        }
        let (stored, _) = state
            .users
            .iter_mut()
            .find(|(u, _)| u.id == user.id && u.active)
            .ok_or(DomainError::UserNotFound(user.id))?;
        stored.first_name.clone_from(&user.first_name);
        stored.last_name.clone_from(&user.last_name);
        stored.handle.clone_from(&user.handle);
        stored.email.clone_from(&user.email);
        stored.avatar.clone_from(&user.avatar);
        Ok(())
    }

    async fn get_password_hash(&self, id: Uuid) -> RepoResult<Option<String>> {
        let state = self.state.lock().unwrap();
        Ok(state
            .users
            .iter()
            .find(|(user, _)| user.id == id && user.active)
            .map(|(_, hash)| hash.clone()))
    }

    async fn update_password(
        &self,
        id: Uuid,
        password_hash: &str,
        changed_at: DateTime<Utc>,
    ) -> RepoResult<()> {
        let mut state = self.state.lock().unwrap();
        let (user, hash) = state
            .users
            .iter_mut()
            .find(|(user, _)| user.id == id && user.active)
            .ok_or(DomainError::UserNotFound(id))?;
        *hash = password_hash.to_string();
        user.password_changed_at = Some(changed_at);
        Ok(())
    }

    async fn update_role(&self, id: Uuid, role: Role) -> RepoResult<()> {
        let mut state = self.state.lock().unwrap();
        let (user, _) = state
            .users
            .iter_mut()
            .find(|(user, _)| user.id == id && user.active)
            .ok_or(DomainError::UserNotFound(id))?;
        user.role = role;
        Ok(())
    }

    async fn deactivate(&self, id: Uuid) -> RepoResult<()> {
        let mut state = self.state.lock().unwrap();
        let (user, _) = state
            .users
            .iter_mut()
            .find(|(user, _)| user.id == id && user.active)
            .ok_or(DomainError::UserNotFound(id))?;
        user.active = false;
        Ok(())
    }
}

#[async_trait]
impl StandRepository for MemoryStore {
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Stand>> {
        Ok(self.state.lock().unwrap().active_stand(id).cloned())
    }

    async fn find_by_id_including_inactive(&self, id: Uuid) -> RepoResult<Option<Stand>> {
        let state = self.state.lock().unwrap();
        Ok(state.stands.iter().find(|stand| stand.id == id).cloned())
    }

    async fn find_all(&self) -> RepoResult<Vec<Stand>> {
        let state = self.state.lock().unwrap();
        Ok(state.stands.iter().filter(|s| s.active).cloned().collect())
    }

    async fn create(&self, stand: &Stand) -> RepoResult<()> {
        let mut state = self.state.lock().unwrap();
        if state.stands.iter().any(|s| s.name == stand.name) {
            return Err(DomainError::StandNameTaken);
        }
        state.stands.push(stand.clone());
        Ok(())
    }

    async fn deactivate(&self, id: Uuid) -> RepoResult<()> {
        let mut state = self.state.lock().unwrap();
        let stand = state
            .stands
            .iter_mut()
            .find(|s| s.id == id && s.active)
            .ok_or(DomainError::StandNotFound(id))?;
        stand.active = false;
        Ok(())
    }

    async fn update_ratings(&self, id: Uuid, summary: &RatingSummary) -> RepoResult<()> {
        if self.fail_rating_updates.load(Ordering::SeqCst) {
            return Err(DomainError::DatabaseError("connection refused".to_string()));
        }
        let mut state = self.state.lock().unwrap();
        let stand = state
            .stands
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or(DomainError::StandNotFound(id))?;
        stand.apply_ratings(summary);
        Ok(())
    }
}

#[async_trait]
impl ReviewRepository for MemoryStore {
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Review>> {
        let state = self.state.lock().unwrap();
        Ok(state.reviews.iter().find(|r| r.id == id).cloned())
    }

    async fn find_by_author(&self, author_id: Uuid) -> RepoResult<Vec<ReviewDetails>> {
        let state = self.state.lock().unwrap();
        Ok(state
            .reviews
            .iter()
            .filter(|r| r.author_id == author_id)
            .map(|r| state.review_details(r))
            .collect())
    }

    async fn find_by_stand(&self, stand_id: Uuid) -> RepoResult<Vec<ReviewDetails>> {
        let state = self.state.lock().unwrap();
        Ok(state
            .reviews
            .iter()
            .filter(|r| r.stand_id == stand_id)
            .map(|r| state.review_details(r))
            .collect())
    }

    async fn create(&self, review: &Review) -> RepoResult<()> {
        let mut state = self.state.lock().unwrap();
        if !state.has_user(review.author_id) {
            return Err(DomainError::UserNotFound(review.author_id));
        }
        if !state.stands.iter().any(|s| s.id == review.stand_id) {
            return Err(DomainError::StandNotFound(review.stand_id));
        }
        if state
            .reviews
            .iter()
            .any(|r| r.author_id == review.author_id && r.stand_id == review.stand_id)
        {
            return Err(DomainError::DuplicateReview);
        }
        state.reviews.push(review.clone());
        Ok(())
    }

    async fn update(&self, review: &Review) -> RepoResult<()> {
        let mut state = self.state.lock().unwrap();
        let stored = state
            .reviews
            .iter_mut()
            .find(|r| r.id == review.id)
            .ok_or(DomainError::ReviewNotFound(review.id))?;
        stored.rating = review.rating;
        stored.text.clone_from(&review.text);
        stored.updated_at = review.updated_at;
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> RepoResult<()> {
        let mut state = self.state.lock().unwrap();
        let before = state.reviews.len();
        state.reviews.retain(|r| r.id != id);
        if state.reviews.len() == before {
            return Err(DomainError::ReviewNotFound(id));
        }
        Ok(())
    }

    async fn aggregate_ratings(&self, stand_id: Uuid) -> RepoResult<(i64, Option<f64>)> {
        let state = self.state.lock().unwrap();
        let ratings: Vec<f64> = state
            .reviews
            .iter()
            .filter(|r| r.stand_id == stand_id)
            .map(|r| r.rating)
            .collect();
        let count = i64::try_from(ratings.len()).unwrap();
        let average = (count > 0).then(|| ratings.iter().sum::<f64>() / ratings.len() as f64);
        Ok((count, average))
    }
}

#[async_trait]
impl FavoriteRepository for MemoryStore {
    async fn find_by_user(&self, user_id: Uuid) -> RepoResult<Vec<FavoriteDetails>> {
        let state = self.state.lock().unwrap();
        Ok(state
            .favorites
            .iter()
            .filter(|f| f.user_id == user_id)
            .map(|f| FavoriteDetails {
                favorite: f.clone(),
                user: state.active_user(f.user_id).map(User::as_ref_view),
                stand: state.active_stand(f.stand_id).map(Stand::as_ref_view),
            })
            .collect())
    }

    async fn create(&self, favorite: &Favorite) -> RepoResult<()> {
        let mut state = self.state.lock().unwrap();
        if !state.has_user(favorite.user_id) {
            return Err(DomainError::UserNotFound(favorite.user_id));
        }
        if !state.stands.iter().any(|s| s.id == favorite.stand_id) {
            return Err(DomainError::StandNotFound(favorite.stand_id));
        }
        if state
            .favorites
            .iter()
            .any(|f| f.user_id == favorite.user_id && f.stand_id == favorite.stand_id)
        {
            return Err(DomainError::DuplicateFavorite);
        }
        state.favorites.push(favorite.clone());
        Ok(())
    }

    async fn delete(&self, user_id: Uuid, stand_id: Uuid) -> RepoResult<()> {
        let mut state = self.state.lock().unwrap();
        let before = state.favorites.len();
        state
            .favorites
            .retain(|f| !(f.user_id == user_id && f.stand_id == stand_id));
        if state.favorites.len() == before {
            return Err(DomainError::FavoriteNotFound(stand_id));
        }
        Ok(())
    }
}

/// Pool that never connects; the memory store does all the work
pub fn lazy_pool() -> sqlx::PgPool {
    PgPoolOptions::new()
        .connect_lazy("postgres://localhost/stand_unused")
        .unwrap()
}

pub fn context_with_store() -> (ServiceContext, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::default());
    let ctx = ServiceContextBuilder::new()
        .pool(lazy_pool())
        .user_repo(store.clone())
        .stand_repo(store.clone())
        .review_repo(store.clone())
        .favorite_repo(store.clone())
        .jwt_service(Arc::new(JwtService::new("service-test-secret", 3600)))
        .build()
        .unwrap();
    (ctx, store)
}

pub fn context() -> ServiceContext {
    context_with_store().0
}

pub fn signup_request(handle: &str) -> SignupRequest {
    SignupRequest {
        first_name: "Test".to_string(),
        last_name: "User".to_string(),
        handle: handle.to_string(),
        email: format!("{handle}@example.com"),
        password: PASSWORD.to_string(),
        password_confirm: PASSWORD.to_string(),
    }
}

/// Insert a user directly; the stored hash is not a real one
pub async fn create_user(ctx: &ServiceContext, handle: &str, role: Role) -> User {
    let mut user = User::new("Test", handle, handle, &format!("{handle}@example.com"));
    user.role = role;
    ctx.user_repo().create(&user, "unused-hash").await.unwrap();
    user
}

/// A stand owner with "Taco Town" and two regular users
pub struct Seeded {
    pub owner: User,
    pub u1: User,
    pub u2: User,
    pub stand: Stand,
}

impl Seeded {
    pub async fn new(ctx: &ServiceContext) -> Self {
        let owner = create_user(ctx, "owner", Role::StandOwner).await;
        let u1 = create_user(ctx, "u1", Role::User).await;
        let u2 = create_user(ctx, "u2", Role::User).await;

        let stand = Stand::new("Taco Town", owner.id);
        ctx.stand_repo().create(&stand).await.unwrap();

        Self {
            owner,
            u1,
            u2,
            stand,
        }
    }

    /// Review the seeded stand through the service, so ratings are refreshed
    pub async fn review(&self, ctx: &ServiceContext, author: &User, rating: f64) {
        ReviewService::new(ctx)
            .create(
                &author.identity(),
                author.id,
                crate::dto::CreateReviewRequest {
                    stand: self.stand.id,
                    text: None,
                    rating,
                },
            )
            .await
            .unwrap();
    }

    pub async fn favorite(&self, ctx: &ServiceContext, user: &User) {
        ctx.favorite_repo()
            .create(&Favorite::new(user.id, self.stand.id))
            .await
            .unwrap();
    }
}
