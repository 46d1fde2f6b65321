//! Derived rating aggregator
//!
//! A stand's `ratings_average` and `ratings_quantity` are never written by
//! clients. They are recomputed from the full review set after every review
//! write, so a missed update corrects itself on the next one.

use std::time::Duration;

use stand_core::RatingSummary;
use tracing::{debug, error, info, instrument};
use uuid::Uuid;

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Delay before the single background retry of a failed recompute
pub const RATING_RETRY_DELAY: Duration = Duration::from_secs(2);

/// Recomputes and stores a stand's rating figures
pub struct RatingAggregator<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> RatingAggregator<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Count and average the stand's reviews and persist the result
    ///
    /// With no reviews the stand gets `(0, 4.5)`.
    #[instrument(skip(self))]
    pub async fn recompute(&self, stand_id: Uuid) -> ServiceResult<RatingSummary> {
        let (quantity, average) = self.ctx.review_repo().aggregate_ratings(stand_id).await?;
        let summary = RatingSummary::from_aggregate(quantity, average);

        self.ctx
            .stand_repo()
            .update_ratings(stand_id, &summary)
            .await?;

        debug!(
            average = summary.average,
            quantity = summary.quantity,
            "Stand ratings recomputed"
        );
        Ok(summary)
    }

    /// Recompute after a review write without failing the write
    ///
    /// On failure one retry is scheduled on the runtime after
    /// [`RATING_RETRY_DELAY`]. A failed retry is logged and dropped.
    pub async fn refresh(&self, stand_id: Uuid) {
        let Err(e) = self.recompute(stand_id).await else {
            return;
        };

        error!(stand_id = %stand_id, error = %e, "Rating recompute failed, retrying later");

        let ctx = self.ctx.clone();
        tokio::spawn(async move {
            tokio::time::sleep(RATING_RETRY_DELAY).await;
            match RatingAggregator::new(&ctx).recompute(stand_id).await {
                Ok(_) => info!(stand_id = %stand_id, "Rating recompute succeeded on retry"),
                Err(e) => error!(stand_id = %stand_id, error = %e, "Rating recompute retry failed"),
            }
        });
    }
}
