//! GeoJSON point location

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// GeoJSON `Point` with an optional street address
///
/// Coordinates follow GeoJSON order: `[longitude, latitude]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    #[serde(rename = "type", default = "point_type")]
    pub kind: String,
    pub coordinates: Vec<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

fn point_type() -> String {
    "Point".to_string()
}

impl GeoPoint {
    pub fn new(longitude: f64, latitude: f64, address: Option<String>) -> Self {
        Self {
            kind: point_type(),
            coordinates: vec![longitude, latitude],
            address,
        }
    }

    /// Check the type tag and coordinate ranges
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.kind != "Point" {
            return Err(DomainError::InvalidLocation(format!(
                "unsupported location type '{}'",
                self.kind
            )));
        }

        match self.coordinates.as_slice() {
            [lng, lat] if (-180.0..=180.0).contains(lng) && (-90.0..=90.0).contains(lat) => Ok(()),
            [_, _] => Err(DomainError::InvalidLocation(
                "coordinates out of range".to_string(),
            )),
            _ => Err(DomainError::InvalidLocation(
                "coordinates must be [longitude, latitude]".to_string(),
            )),
        }
    }
}
