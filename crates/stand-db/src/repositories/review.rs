//! PostgreSQL implementation of ReviewRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use stand_core::entities::{Review, ReviewDetails};
use stand_core::error::DomainError;
use stand_core::traits::{RepoResult, ReviewRepository};

use crate::models::{RatingAggregateModel, ReviewDetailsModel, ReviewModel};

use super::error::{
    foreign_key_constraint, map_db_error, map_unique_violation, review_not_found,
    stand_not_found, user_not_found,
};

/// Review columns plus author and stand populated through inactive-aware joins
const DETAILS_SELECT: &str = r"
    SELECT r.id, r.author_id, r.stand_id, r.text, r.rating, r.created_at, r.updated_at,
           u.id AS author_ref_id, u.handle AS author_handle, u.avatar AS author_avatar,
           s.id AS stand_ref_id, s.name AS stand_name, s.avatar AS stand_avatar
    FROM reviews r
    LEFT JOIN users u ON u.id = r.author_id AND u.active
    LEFT JOIN stands s ON s.id = r.stand_id AND s.active
";

/// PostgreSQL implementation of ReviewRepository
#[derive(Clone)]
pub struct PgReviewRepository {
    pool: PgPool,
}

impl PgReviewRepository {
    /// Create a new PgReviewRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn find_details(&self, filter: &str, id: Uuid) -> RepoResult<Vec<ReviewDetails>> {
        let rows = sqlx::query_as::<_, ReviewDetailsModel>(&format!(
            "{DETAILS_SELECT} WHERE {filter} = $1 ORDER BY r.created_at"
        ))
        .bind(id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(ReviewDetails::from).collect())
    }
}

#[async_trait]
impl ReviewRepository for PgReviewRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Review>> {
        let result = sqlx::query_as::<_, ReviewModel>(
            r"
            SELECT id, author_id, stand_id, text, rating, created_at, updated_at
            FROM reviews
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Review::from))
    }

    #[instrument(skip(self))]
    async fn find_by_author(&self, author_id: Uuid) -> RepoResult<Vec<ReviewDetails>> {
        self.find_details("r.author_id", author_id).await
    }

    #[instrument(skip(self))]
    async fn find_by_stand(&self, stand_id: Uuid) -> RepoResult<Vec<ReviewDetails>> {
        self.find_details("r.stand_id", stand_id).await
    }

    #[instrument(skip(self, review), fields(review_id = %review.id, stand_id = %review.stand_id))]
    async fn create(&self, review: &Review) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO reviews (id, author_id, stand_id, text, rating, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ",
        )
        .bind(review.id)
        .bind(review.author_id)
        .bind(review.stand_id)
        .bind(&review.text)
        .bind(review.rating)
        .bind(review.created_at)
        .bind(review.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| match foreign_key_constraint(&e).as_deref() {
            Some("reviews_author_id_fkey") => user_not_found(review.author_id),
            Some(_) => stand_not_found(review.stand_id),
            None => map_unique_violation(e, || DomainError::DuplicateReview),
        })?;

        Ok(())
    }

    #[instrument(skip(self, review), fields(review_id = %review.id))]
    async fn update(&self, review: &Review) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE reviews
            SET text = $2, rating = $3, updated_at = $4
            WHERE id = $1
            ",
        )
        .bind(review.id)
        .bind(&review.text)
        .bind(review.rating)
        .bind(review.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(review_not_found(review.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Uuid) -> RepoResult<()> {
        let result = sqlx::query("DELETE FROM reviews WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(review_not_found(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn aggregate_ratings(&self, stand_id: Uuid) -> RepoResult<(i64, Option<f64>)> {
        let row = sqlx::query_as::<_, RatingAggregateModel>(
            r"
            SELECT COUNT(*) AS quantity, AVG(rating) AS average
            FROM reviews
            WHERE stand_id = $1
            ",
        )
        .bind(stand_id)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok((row.quantity, row.average))
    }
}
