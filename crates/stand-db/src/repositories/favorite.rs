//! PostgreSQL implementation of FavoriteRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use stand_core::entities::{Favorite, FavoriteDetails};
use stand_core::error::DomainError;
use stand_core::traits::{FavoriteRepository, RepoResult};

use crate::models::FavoriteDetailsModel;

use super::error::{
    foreign_key_constraint, map_db_error, map_unique_violation, stand_not_found, user_not_found,
};

/// PostgreSQL implementation of FavoriteRepository
#[derive(Clone)]
pub struct PgFavoriteRepository {
    pool: PgPool,
}

impl PgFavoriteRepository {
    /// Create a new PgFavoriteRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FavoriteRepository for PgFavoriteRepository {
    #[instrument(skip(self))]
    async fn find_by_user(&self, user_id: Uuid) -> RepoResult<Vec<FavoriteDetails>> {
        let rows = sqlx::query_as::<_, FavoriteDetailsModel>(
            r"
            SELECT f.id, f.user_id, f.stand_id, f.created_at,
                   u.id AS user_ref_id, u.handle AS user_handle, u.avatar AS user_avatar,
                   s.id AS stand_ref_id, s.name AS stand_name, s.avatar AS stand_avatar
            FROM favorites f
            LEFT JOIN users u ON u.id = f.user_id AND u.active
            LEFT JOIN stands s ON s.id = f.stand_id AND s.active
            WHERE f.user_id = $1
            ORDER BY f.created_at
            ",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(FavoriteDetails::from).collect())
    }

    #[instrument(skip(self, favorite), fields(user_id = %favorite.user_id, stand_id = %favorite.stand_id))]
    async fn create(&self, favorite: &Favorite) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO favorites (id, user_id, stand_id, created_at)
            VALUES ($1, $2, $3, $4)
            ",
        )
        .bind(favorite.id)
        .bind(favorite.user_id)
        .bind(favorite.stand_id)
        .bind(favorite.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| match foreign_key_constraint(&e).as_deref() {
            Some("favorites_user_id_fkey") => user_not_found(favorite.user_id),
            Some(_) => stand_not_found(favorite.stand_id),
            None => map_unique_violation(e, || DomainError::DuplicateFavorite),
        })?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, user_id: Uuid, stand_id: Uuid) -> RepoResult<()> {
        let result = sqlx::query("DELETE FROM favorites WHERE user_id = $1 AND stand_id = $2")
            .bind(user_id)
            .bind(stand_id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::FavoriteNotFound(stand_id));
        }

        Ok(())
    }
}
