//! Review entity <-> model mapper

use stand_core::entities::{RatingSummary, Review, ReviewDetails, StandRef, UserRef};

use crate::models::{RatingAggregateModel, ReviewDetailsModel, ReviewModel};

impl From<ReviewModel> for Review {
    fn from(model: ReviewModel) -> Self {
        Review {
            id: model.id,
            author_id: model.author_id,
            stand_id: model.stand_id,
            text: model.text,
            rating: model.rating,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

/// A populated reference exists only when every joined column is present
impl From<ReviewDetailsModel> for ReviewDetails {
    fn from(model: ReviewDetailsModel) -> Self {
        let author = match (model.author_ref_id, model.author_handle, model.author_avatar) {
            (Some(id), Some(handle), Some(avatar)) => Some(UserRef { id, handle, avatar }),
            _ => None,
        };
        let stand = match (model.stand_ref_id, model.stand_name, model.stand_avatar) {
            (Some(id), Some(name), Some(avatar)) => Some(StandRef { id, name, avatar }),
            _ => None,
        };

        ReviewDetails {
            review: model.review.into(),
            author,
            stand,
        }
    }
}

/// Convert an aggregate row into the persisted summary
pub fn rating_summary(model: RatingAggregateModel) -> RatingSummary {
    RatingSummary::from_aggregate(model.quantity, model.average)
}
