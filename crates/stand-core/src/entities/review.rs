//! Review entity - one rating of a stand by one user

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::entities::{StandRef, UserRef};
use crate::error::DomainError;

/// Lowest accepted rating
pub const MIN_RATING: f64 = 0.0;
/// Highest accepted rating
pub const MAX_RATING: f64 = 5.0;

/// Review entity
///
/// At most one review exists per (author, stand) pair.
#[derive(Debug, Clone, PartialEq)]
pub struct Review {
    pub id: Uuid,
    pub author_id: Uuid,
    pub stand_id: Uuid,
    pub text: Option<String>,
    pub rating: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Review {
    pub fn new(
        author_id: Uuid,
        stand_id: Uuid,
        rating: f64,
        text: Option<String>,
    ) -> Result<Self, DomainError> {
        Self::check_rating(rating)?;
        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4(),
            author_id,
            stand_id,
            text,
            rating,
            created_at: now,
            updated_at: now,
        })
    }

    /// Apply a partial edit
    pub fn edit(&mut self, rating: Option<f64>, text: Option<String>) -> Result<(), DomainError> {
        if let Some(rating) = rating {
            Self::check_rating(rating)?;
            self.rating = rating;
        }
        if text.is_some() {
            self.text = text;
        }
        self.updated_at = Utc::now();
        Ok(())
    }

    fn check_rating(rating: f64) -> Result<(), DomainError> {
        if (MIN_RATING..=MAX_RATING).contains(&rating) {
            Ok(())
        } else {
            Err(DomainError::ValidationError(format!(
                "Rating must be between {MIN_RATING} and {MAX_RATING}"
            )))
        }
    }
}

/// Review with its author and stand populated
///
/// A reference is `None` when the referenced row has been deactivated.
#[derive(Debug, Clone, PartialEq)]
pub struct ReviewDetails {
    pub review: Review,
    pub author: Option<UserRef>,
    pub stand: Option<StandRef>,
}
