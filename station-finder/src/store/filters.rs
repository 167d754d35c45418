//! Browse filters for the station list.

use serde::{Deserialize, Serialize};

use crate::domain::{Amenity, ConnectorType, Station, StationStatus};

/// Filters applied when browsing stations.
///
/// The default filter lets everything through.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StationFilters {
    /// Station must offer at least one of these connectors.
    pub connector_types: Vec<ConnectorType>,
    /// Minimum average rating; zero or less disables the filter.
    pub min_rating: f64,
    /// Station status must be one of these.
    #[serde(rename = "status")]
    pub statuses: Vec<StationStatus>,
    /// Maximum price per kWh; `None` or a non-positive value disables it.
    pub max_price: Option<f64>,
    /// Station must offer all of these amenities.
    pub amenities: Vec<Amenity>,
}

/// A partial change to [`StationFilters`]. `Some` fields overwrite.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FiltersUpdate {
    pub connector_types: Option<Vec<ConnectorType>>,
    pub min_rating: Option<f64>,
    pub statuses: Option<Vec<StationStatus>>,
    pub max_price: Option<Option<f64>>,
    pub amenities: Option<Vec<Amenity>>,
}

impl StationFilters {
    /// Returns true if the station passes every active filter.
    pub fn matches(&self, station: &Station) -> bool {
        if !self.connector_types.is_empty()
            && !station
                .connector_types
                .iter()
                .any(|c| self.connector_types.contains(c))
        {
            return false;
        }

        if self.min_rating > 0.0 && station.average_rating < self.min_rating {
            return false;
        }

        if !self.statuses.is_empty() && !self.statuses.contains(&station.status) {
            return false;
        }

        if let Some(max_price) = self.max_price
            && max_price > 0.0
            && station.price_per_kwh > max_price
        {
            return false;
        }

        self.amenities.iter().all(|a| station.has_amenity(a))
    }

    /// Merge a partial update into these filters.
    pub fn apply(&mut self, update: FiltersUpdate) {
        if let Some(connector_types) = update.connector_types {
            self.connector_types = connector_types;
        }
        if let Some(min_rating) = update.min_rating {
            self.min_rating = min_rating;
        }
        if let Some(statuses) = update.statuses {
            self.statuses = statuses;
        }
        if let Some(max_price) = update.max_price {
            self.max_price = max_price;
        }
        if let Some(amenities) = update.amenities {
            self.amenities = amenities;
        }
    }

    /// Returns true if no filter is active.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
