//! DTOs for the availability search endpoint.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::{StringWithSeparator, formats::CommaSeparator, serde_as};

use crate::application::services::RestaurantAvailability;
use crate::domain::entities::Table;

/// Query parameters for `GET /reservation/search`.
///
/// Uses `serde_with` to parse the party from a comma-separated query value,
/// e.g. `?user_ids=1,2,3&time=2026-08-14T18:30:00Z`. An absent `user_ids`
/// means an unconstrained party of zero.
#[serde_as]
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde_as(as = "StringWithSeparator::<CommaSeparator, i64>")]
    #[serde(default)]
    pub user_ids: Vec<i64>,

    pub time: DateTime<Utc>,
}

/// A table that could seat the party.
#[derive(Debug, Serialize)]
pub struct AvailableTable {
    pub id: i64,
    pub capacity: i32,
}

impl From<Table> for AvailableTable {
    fn from(table: Table) -> Self {
        Self {
            id: table.id,
            capacity: table.capacity,
        }
    }
}

/// A qualifying restaurant with its free, sufficiently large tables.
#[derive(Debug, Serialize)]
pub struct AvailableRestaurant {
    pub id: i64,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub tables: Vec<AvailableTable>,
}

impl From<RestaurantAvailability> for AvailableRestaurant {
    fn from(availability: RestaurantAvailability) -> Self {
        Self {
            id: availability.restaurant.id,
            name: availability.restaurant.name,
            latitude: availability.restaurant.latitude,
            longitude: availability.restaurant.longitude,
            tables: availability.tables.into_iter().map(AvailableTable::from).collect(),
        }
    }
}

/// Response for the search endpoint.
#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub restaurants: Vec<AvailableRestaurant>,
}
