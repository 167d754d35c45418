//! Seed data for the station store.
//!
//! A seed is a JSON document with `stations` and `reviews` arrays, in the
//! same camelCase shape as the domain types. A small Los Angeles data set
//! is compiled into the binary for development and tests.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::{Review, Station};

/// The bundled data set: six stations and ten reviews.
const BUILTIN_SEED: &str = include_str!("mock_data.json");

/// Errors that can occur when loading seed data.
#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    /// Seed file could not be read
    #[error("failed to read seed file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Seed JSON did not match the expected shape
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Stations and reviews to start the store with.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Seed {
    pub stations: Vec<Station>,
    #[serde(default)]
    pub reviews: Vec<Review>,
}

impl Seed {
    /// The bundled data set.
    pub fn builtin() -> Result<Self, SeedError> {
        Self::parse(BUILTIN_SEED)
    }

    pub fn parse(json: &str) -> Result<Self, SeedError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a seed from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SeedError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| SeedError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::parse(&contents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Amenity, ConnectorType, StationStatus};
    use tempfile::tempdir;

    #[test]
    fn builtin_parses() {
        let seed = Seed::builtin().unwrap();
        assert_eq!(seed.stations.len(), 6);
        assert_eq!(seed.reviews.len(), 10);

        let hub = &seed.stations[0];
        assert_eq!(hub.name, "Central EV Hub");
        assert_eq!(hub.status, StationStatus::Available);
        assert_eq!((hub.current_users, hub.max_capacity), (2, 8));
        assert!(hub.has_connector(&ConnectorType::Chademo));
        assert!(hub.has_amenity(&Amenity::Wifi));

        let highway = &seed.stations[5];
        assert_eq!(highway.status, StationStatus::Busy);
        assert!(highway.is_full());
    }

    #[test]
    fn builtin_reviews_reference_builtin_stations() {
        let seed = Seed::builtin().unwrap();
        for review in &seed.reviews {
            assert!(
                seed.stations.iter().any(|s| s.id == review.station_id),
                "review {} points at missing station {}",
                review.id,
                review.station_id
            );
        }
    }

    #[test]
    fn load_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("seed.json");
        std::fs::write(
            &path,
            r#"{"stations": [{
                "id": "x",
                "name": "Depot",
                "address": "1 Yard Rd",
                "lat": 51.5,
                "lng": -0.12,
                "connectorTypes": ["Type 2", "NACS"],
                "pricePerKwh": 0.5,
                "status": "Closed for works",
                "currentUsers": 0,
                "maxCapacity": 0,
                "amenities": [],
                "openingHours": "24/7",
                "averageRating": 0
            }]}"#,
        )
        .unwrap();

        let seed = Seed::load(&path).unwrap();
        assert_eq!(seed.stations.len(), 1);
        assert!(seed.reviews.is_empty());

        let depot = &seed.stations[0];
        assert_eq!(depot.status, StationStatus::Unknown("Closed for works".to_string()));
        assert_eq!(
            depot.connector_types,
            vec![ConnectorType::Type2, ConnectorType::Other("NACS".to_string())]
        );
    }

    #[test]
    fn missing_file() {
        let err = Seed::load("/nonexistent/seed.json").unwrap_err();
        assert!(matches!(err, SeedError::Io { .. }));
        assert!(err.to_string().starts_with("failed to read seed file /nonexistent/seed.json"));
    }

    #[test]
    fn malformed_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("seed.json");
        std::fs::write(&path, r#"{"stations": [{"id": 1}]}"#).unwrap();
        assert!(matches!(Seed::load(&path), Err(SeedError::Json(_))));
    }
}
