//! PostgreSQL implementation of StandRepository

use async_trait::async_trait;
use sqlx::types::Json;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use stand_core::entities::{RatingSummary, Stand};
use stand_core::error::DomainError;
use stand_core::traits::{RepoResult, StandRepository};

use crate::models::StandModel;

use super::error::{map_db_error, map_unique_violation, stand_not_found};

const STAND_COLUMNS: &str = "id, name, slug, avatar, location, hours_of_op, ratings_average, \
                             ratings_quantity, owner_id, menu, description, active, created_at";

/// PostgreSQL implementation of StandRepository
#[derive(Clone)]
pub struct PgStandRepository {
    pool: PgPool,
}

impl PgStandRepository {
    /// Create a new PgStandRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StandRepository for PgStandRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Stand>> {
        let result = sqlx::query_as::<_, StandModel>(&format!(
            "SELECT {STAND_COLUMNS} FROM stands WHERE id = $1 AND active"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Stand::from))
    }

    #[instrument(skip(self))]
    async fn find_by_id_including_inactive(&self, id: Uuid) -> RepoResult<Option<Stand>> {
        let result = sqlx::query_as::<_, StandModel>(&format!(
            "SELECT {STAND_COLUMNS} FROM stands WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Stand::from))
    }

    #[instrument(skip(self))]
    async fn find_all(&self) -> RepoResult<Vec<Stand>> {
        let rows = sqlx::query_as::<_, StandModel>(&format!(
            "SELECT {STAND_COLUMNS} FROM stands WHERE active ORDER BY created_at"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Stand::from).collect())
    }

    #[instrument(skip(self, stand), fields(stand_id = %stand.id))]
    async fn create(&self, stand: &Stand) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO stands (id, name, slug, avatar, location, hours_of_op, ratings_average,
                                ratings_quantity, owner_id, menu, description, active, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
            ",
        )
        .bind(stand.id)
        .bind(&stand.name)
        .bind(&stand.slug)
        .bind(&stand.avatar)
        .bind(stand.location.as_ref().map(Json))
        .bind(Json(&stand.hours_of_op))
        .bind(stand.ratings_average)
        .bind(stand.ratings_quantity)
        .bind(stand.owner_id)
        .bind(Json(&stand.menu))
        .bind(&stand.description)
        .bind(stand.active)
        .bind(stand.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::StandNameTaken))?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn deactivate(&self, id: Uuid) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE stands
            SET active = FALSE
            WHERE id = $1 AND active
            ",
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(stand_not_found(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn update_ratings(&self, id: Uuid, summary: &RatingSummary) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE stands
            SET ratings_average = $2, ratings_quantity = $3
            WHERE id = $1
            ",
        )
        .bind(id)
        .bind(summary.average)
        .bind(summary.quantity)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(stand_not_found(id));
        }

        Ok(())
    }
}
