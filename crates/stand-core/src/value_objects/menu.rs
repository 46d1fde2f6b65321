//! Stand menu item

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Image used when a menu item has none
pub const DEFAULT_MENU_IMAGE: &str = "taco-placeholder.png";

/// A single item on a stand's menu
///
/// Item ratings are independent of the stand's review aggregate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub name: String,
    pub price: f64,
    pub ratings_average: f64,
    pub ratings_quantity: i32,
    pub image: String,
}

impl MenuItem {
    /// Create a menu item with default ratings
    pub fn new(name: &str, price: f64, image: Option<String>) -> Result<Self, DomainError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(DomainError::ValidationError(
                "A menu item must have a name".to_string(),
            ));
        }
        if !price.is_finite() || price < 0.0 {
            return Err(DomainError::ValidationError(
                "A menu item must have a price greater than or equal to $0.00".to_string(),
            ));
        }

        Ok(Self {
            name: name.to_string(),
            price,
            ratings_average: 5.0,
            ratings_quantity: 0,
            image: image.unwrap_or_else(|| DEFAULT_MENU_IMAGE.to_string()),
        })
    }

    /// Set the item rating, rounded to one decimal place
    pub fn set_ratings_average(&mut self, value: f64) -> Result<(), DomainError> {
        let rounded = (value * 10.0).round() / 10.0;
        if !(1.0..=5.0).contains(&rounded) {
            return Err(DomainError::ValidationError(
                "A menu item must have a rating between 1.0 and 5.0".to_string(),
            ));
        }
        self.ratings_average = rounded;
        Ok(())
    }
}
