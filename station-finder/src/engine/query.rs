//! A single recommendation request.

use super::distance::GeoPoint;
use super::needs::{UserNeeds, filter_by_needs};
use super::recommend::{DEFAULT_LIMIT, recommend};
use crate::domain::Station;

/// Where the user is and what they asked for.
#[derive(Debug, Clone, PartialEq)]
pub struct UserQuery {
    pub location: GeoPoint,
    /// Number of stations wanted; [`DEFAULT_LIMIT`] if unset. Ignored for
    /// needs queries, which always return up to five.
    pub limit: Option<usize>,
    pub needs: Option<UserNeeds>,
}

impl UserQuery {
    pub fn at(lat: f64, lng: f64) -> Self {
        Self {
            location: GeoPoint::new(lat, lng),
            limit: None,
            needs: None,
        }
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn with_needs(mut self, needs: UserNeeds) -> Self {
        self.needs = Some(needs);
        self
    }

    /// Run the query against a snapshot of stations.
    pub fn run<'a>(&self, stations: &'a [Station]) -> Vec<&'a Station> {
        let GeoPoint { lat, lng } = self.location;
        match &self.needs {
            Some(needs) => filter_by_needs(stations, lat, lng, needs),
            None => recommend(stations, lat, lng, self.limit.unwrap_or(DEFAULT_LIMIT)),
        }
    }
}
