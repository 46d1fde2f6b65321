//! Stand entity - a food stand owned by a user

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::entities::RatingSummary;
use crate::error::DomainError;
use crate::value_objects::{slugify, GeoPoint, HoursOfOperation, MenuItem};

/// Avatar assigned when a stand is created without one
pub const DEFAULT_STAND_AVATAR: &str = "stand-avatar-default.png";

/// Stand entity
///
/// `ratings_average` and `ratings_quantity` are derived from reviews and are
/// only written by the rating aggregator.
#[derive(Debug, Clone, PartialEq)]
pub struct Stand {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub avatar: String,
    pub location: Option<GeoPoint>,
    pub hours_of_op: HoursOfOperation,
    pub ratings_average: f64,
    pub ratings_quantity: i64,
    pub owner_id: Uuid,
    pub menu: Vec<MenuItem>,
    pub description: Option<String>,
    pub active: bool,
    pub created_at: DateTime<Utc>,
}

impl Stand {
    /// Create a new active stand carrying the no-reviews rating summary
    pub fn new(name: &str, owner_id: Uuid) -> Self {
        let name = name.trim().to_string();
        let ratings = RatingSummary::EMPTY;
        Self {
            id: Uuid::new_v4(),
            slug: slugify(&name),
            name,
            avatar: DEFAULT_STAND_AVATAR.to_string(),
            location: None,
            hours_of_op: HoursOfOperation::default(),
            ratings_average: ratings.average,
            ratings_quantity: ratings.quantity,
            owner_id,
            menu: Vec::new(),
            description: None,
            active: true,
            created_at: Utc::now(),
        }
    }

    /// Validate and normalize hours, then attach them
    pub fn with_hours(mut self, hours: HoursOfOperation) -> Result<Self, DomainError> {
        self.hours_of_op = hours.normalized()?;
        Ok(self)
    }

    /// Validate and attach a location
    pub fn with_location(mut self, location: GeoPoint) -> Result<Self, DomainError> {
        location.validate()?;
        self.location = Some(location);
        Ok(self)
    }

    #[inline]
    pub fn is_owned_by(&self, user_id: Uuid) -> bool {
        self.owner_id == user_id
    }

    /// Overwrite the derived rating fields
    pub fn apply_ratings(&mut self, summary: &RatingSummary) {
        self.ratings_average = summary.average;
        self.ratings_quantity = summary.quantity;
    }

    pub fn as_ref_view(&self) -> StandRef {
        StandRef {
            id: self.id,
            name: self.name.clone(),
            avatar: self.avatar.clone(),
        }
    }
}

/// Populated stand reference
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StandRef {
    pub id: Uuid,
    pub name: String,
    pub avatar: String,
}
