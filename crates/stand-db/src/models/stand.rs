//! Stand database model

use chrono::{DateTime, Utc};
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

use stand_core::value_objects::{GeoPoint, HoursOfOperation, MenuItem};

/// Database model for stands table
///
/// Location, hours and menu are JSONB documents.
#[derive(Debug, Clone, FromRow)]
pub struct StandModel {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub avatar: String,
    pub location: Option<Json<GeoPoint>>,
    pub hours_of_op: Json<HoursOfOperation>,
    pub ratings_average: f64,
    pub ratings_quantity: i64,
    pub owner_id: Uuid,
    pub menu: Json<Vec<MenuItem>>,
    pub description: Option<String>,
    pub active: bool,
    pub created_at: DateTime<Utc>,
}
