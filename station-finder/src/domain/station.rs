//! Charging station types.

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use super::vocabulary::{Amenity, ConnectorType};

/// Error returned when a station record fails validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid station: {reason}")]
pub struct InvalidStation {
    reason: &'static str,
}

/// Unique identifier of a charging station.
///
/// # Examples
///
/// ```
/// use station_finder::domain::StationId;
///
/// let id = StationId::new("station-7");
/// assert_eq!(id.as_str(), "station-7");
/// assert_eq!(id.to_string(), "station-7");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StationId(String);

impl StationId {
    /// Create an id from any string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for StationId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Operational status of a station.
///
/// The set is closed, but records coming from outside may carry anything.
/// Such values are kept verbatim in [`StationStatus::Unknown`], which scores
/// no availability and is otherwise treated like an open station. Statuses
/// are identified by their wire string, so `Unknown("Busy")` is `Busy`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum StationStatus {
    Available,
    Busy,
    Inactive,
    Unknown(String),
}

impl StationStatus {
    /// The three statuses a station can legitimately report.
    pub const KNOWN: [StationStatus; 3] = [
        StationStatus::Available,
        StationStatus::Busy,
        StationStatus::Inactive,
    ];

    pub fn parse(s: &str) -> Self {
        match s {
            "Available" => StationStatus::Available,
            "Busy" => StationStatus::Busy,
            "Inactive" => StationStatus::Inactive,
            other => StationStatus::Unknown(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            StationStatus::Available => "Available",
            StationStatus::Busy => "Busy",
            StationStatus::Inactive => "Inactive",
            StationStatus::Unknown(s) => s,
        }
    }

    /// True for any status outside the known three.
    pub fn is_unknown(&self) -> bool {
        !Self::KNOWN.contains(self)
    }
}

impl From<String> for StationStatus {
    fn from(value: String) -> Self {
        match StationStatus::parse(&value) {
            StationStatus::Unknown(_) => StationStatus::Unknown(value),
            known => known,
        }
    }
}

impl From<StationStatus> for String {
    fn from(value: StationStatus) -> Self {
        match value {
            StationStatus::Unknown(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

impl PartialEq for StationStatus {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for StationStatus {}

impl Hash for StationStatus {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_str().hash(state);
    }
}

impl fmt::Display for StationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A charging station record.
///
/// Stations are plain data: the engine reads them, and only the store
/// mutates them. Occupancy is not validated here, so `current_users` may
/// exceed `max_capacity` and `max_capacity` may be zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Station {
    pub id: StationId,
    pub name: String,
    pub address: String,
    pub lat: f64,
    pub lng: f64,
    pub connector_types: Vec<ConnectorType>,
    pub price_per_kwh: f64,
    pub status: StationStatus,
    pub current_users: u32,
    pub max_capacity: u32,
    pub amenities: Vec<Amenity>,
    pub opening_hours: String,
    #[serde(default)]
    pub photos: Vec<String>,
    pub average_rating: f64,
    #[serde(default)]
    pub total_reviews: u32,
}

impl Station {
    /// True unless the station is `Inactive`.
    pub fn is_eligible(&self) -> bool {
        self.status != StationStatus::Inactive
    }

    /// Fraction of capacity in use, or `None` when the station has no capacity.
    pub fn occupancy_ratio(&self) -> Option<f64> {
        if self.max_capacity == 0 {
            return None;
        }
        Some(f64::from(self.current_users) / f64::from(self.max_capacity))
    }

    /// True when no charging slot is free.
    pub fn is_full(&self) -> bool {
        self.current_users >= self.max_capacity
    }

    /// Exact, case-sensitive connector membership.
    pub fn has_connector(&self, connector: &ConnectorType) -> bool {
        self.connector_types.contains(connector)
    }

    /// Exact, case-sensitive amenity membership.
    pub fn has_amenity(&self, amenity: &Amenity) -> bool {
        self.amenities.contains(amenity)
    }

    /// Check the fields an administrator is allowed to edit.
    pub fn validate(&self) -> Result<(), InvalidStation> {
        check_fields(
            &self.name,
            self.lat,
            self.lng,
            self.price_per_kwh,
            self.current_users,
            self.max_capacity,
        )?;
        if !self.average_rating.is_finite() || !(0.0..=5.0).contains(&self.average_rating) {
            return Err(InvalidStation {
                reason: "average rating must be within 0..=5",
            });
        }
        Ok(())
    }
}

/// A station that has not yet been assigned an id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewStation {
    pub name: String,
    pub address: String,
    pub lat: f64,
    pub lng: f64,
    pub connector_types: Vec<ConnectorType>,
    pub price_per_kwh: f64,
    pub status: StationStatus,
    pub current_users: u32,
    pub max_capacity: u32,
    pub amenities: Vec<Amenity>,
    pub opening_hours: String,
    #[serde(default)]
    pub photos: Vec<String>,
}

impl NewStation {
    pub fn validate(&self) -> Result<(), InvalidStation> {
        check_fields(
            &self.name,
            self.lat,
            self.lng,
            self.price_per_kwh,
            self.current_users,
            self.max_capacity,
        )
    }

    /// Attach an id. New stations start without reviews.
    pub fn into_station(self, id: StationId) -> Station {
        Station {
            id,
            name: self.name,
            address: self.address,
            lat: self.lat,
            lng: self.lng,
            connector_types: self.connector_types,
            price_per_kwh: self.price_per_kwh,
            status: self.status,
            current_users: self.current_users,
            max_capacity: self.max_capacity,
            amenities: self.amenities,
            opening_hours: self.opening_hours,
            photos: self.photos,
            average_rating: 0.0,
            total_reviews: 0,
        }
    }
}

fn check_fields(
    name: &str,
    lat: f64,
    lng: f64,
    price_per_kwh: f64,
    current_users: u32,
    max_capacity: u32,
) -> Result<(), InvalidStation> {
    if name.trim().is_empty() {
        return Err(InvalidStation {
            reason: "name must not be empty",
        });
    }
    if !lat.is_finite() || !(-90.0..=90.0).contains(&lat) {
        return Err(InvalidStation {
            reason: "latitude must be within -90..=90",
        });
    }
    if !lng.is_finite() || !(-180.0..=180.0).contains(&lng) {
        return Err(InvalidStation {
            reason: "longitude must be within -180..=180",
        });
    }
    if !price_per_kwh.is_finite() || price_per_kwh < 0.0 {
        return Err(InvalidStation {
            reason: "price per kWh must be non-negative",
        });
    }
    if max_capacity == 0 {
        return Err(InvalidStation {
            reason: "capacity must be at least 1",
        });
    }
    if current_users > max_capacity {
        return Err(InvalidStation {
            reason: "current users must not exceed capacity",
        });
    }
    Ok(())
}


#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use super::*;

    #[test]
    fn eligibility_follows_status() {
        let mut s = station("1", 0.0, 0.0);
        assert!(s.is_eligible());
        s.status = StationStatus::Busy;
        assert!(s.is_eligible());
        s.status = StationStatus::parse("Maintenance");
        assert!(s.is_eligible());
        s.status = StationStatus::Inactive;
        assert!(!s.is_eligible());
    }

    #[test]
    fn occupancy_ratio_handles_zero_capacity() {
        let mut s = station("1", 0.0, 0.0);
        s.current_users = 2;
        s.max_capacity = 8;
        assert_eq!(s.occupancy_ratio(), Some(0.25));

        s.max_capacity = 0;
        assert_eq!(s.occupancy_ratio(), None);
        assert!(s.is_full());
    }

    #[test]
    fn connector_match_is_case_sensitive() {
        let mut s = station("1", 0.0, 0.0);
        s.connector_types = vec![ConnectorType::Tesla];
        assert!(s.has_connector(&ConnectorType::parse("Tesla")));
        assert!(!s.has_connector(&ConnectorType::parse("tesla")));
    }

    #[test]
    fn unknown_status_deserializes() {
        let status: StationStatus = serde_json::from_str(r#""Maintenance""#).unwrap();
        assert_eq!(status, StationStatus::Unknown("Maintenance".to_string()));
        assert!(status.is_unknown());
        assert_eq!(serde_json::to_string(&status).unwrap(), r#""Maintenance""#);

        let status: StationStatus = serde_json::from_str(r#""Busy""#).unwrap();
        assert_eq!(status, StationStatus::Busy);
        assert!(!status.is_unknown());
    }

    #[test]
    fn unknown_with_a_known_name_is_that_status() {
        let status = StationStatus::Unknown("Inactive".to_string());
        assert_eq!(status, StationStatus::Inactive);
        assert!(!status.is_unknown());

        let mut s = station("1", 0.0, 0.0);
        s.status = status;
        assert!(!s.is_eligible());
    }

    #[test]
    fn station_json_uses_camel_case() {
        let json = r#"{
            "id": "1",
            "name": "Central EV Hub",
            "address": "123 Main St",
            "lat": 34.0522,
            "lng": -118.2437,
            "connectorTypes": ["CCS", "CHAdeMO", "Type 2"],
            "pricePerKwh": 0.35,
            "status": "Available",
            "currentUsers": 2,
            "maxCapacity": 8,
            "amenities": ["Restroom", "WiFi"],
            "openingHours": "24/7",
            "averageRating": 4.5,
            "totalReviews": 28
        }"#;
        let s: Station = serde_json::from_str(json).unwrap();
        assert_eq!(s.id, StationId::new("1"));
        assert_eq!(s.connector_types.len(), 3);
        assert!(s.has_connector(&ConnectorType::Chademo));
        assert!(s.has_amenity(&Amenity::Wifi));
        assert!(s.photos.is_empty());
        assert_eq!(s.max_capacity, 8);
    }

    #[test]
    fn validate_accepts_reasonable_station() {
        assert!(new_station("Hub").validate().is_ok());
        assert!(station("1", 34.0, -118.0).validate().is_ok());
    }

    #[test]
    fn validate_rejects_bad_fields() {
        let mut s = new_station("  ");
        assert_eq!(
            s.validate().unwrap_err().to_string(),
            "invalid station: name must not be empty"
        );

        s = new_station("Hub");
        s.lat = 91.0;
        assert!(s.validate().is_err());

        s = new_station("Hub");
        s.lng = f64::NAN;
        assert!(s.validate().is_err());

        s = new_station("Hub");
        s.price_per_kwh = -0.1;
        assert!(s.validate().is_err());

        s = new_station("Hub");
        s.max_capacity = 0;
        s.current_users = 0;
        assert!(s.validate().is_err());

        s = new_station("Hub");
        s.current_users = 5;
        assert_eq!(
            s.validate().unwrap_err().to_string(),
            "invalid station: current users must not exceed capacity"
        );
    }

    #[test]
    fn validate_rejects_unusable_rating() {
        let mut s = station("1", 34.0, -118.0);
        s.average_rating = f64::NAN;
        assert_eq!(
            s.validate().unwrap_err().to_string(),
            "invalid station: average rating must be within 0..=5"
        );

        s.average_rating = 5.5;
        assert!(s.validate().is_err());

        s.average_rating = 0.0;
        assert!(s.validate().is_ok());
    }

    #[test]
    fn into_station_starts_unrated() {
        let s = new_station("Hub").into_station(StationId::new("station-1"));
        assert_eq!(s.id.as_str(), "station-1");
        assert_eq!(s.average_rating, 0.0);
        assert_eq!(s.total_reviews, 0);
    }
}
