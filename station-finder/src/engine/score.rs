//! Station scoring.
//!
//! A station's score is a weighted sum of three components:
//!
//! - proximity: `max(0, 10 - distance_km)`, zero from 10 km out
//! - availability: free capacity, scaled by 5 when `Available` and by 2
//!   when `Busy`; nothing for any other status
//! - rating: the station's average rating as-is
//!
//! The weights are fixed. Changing them changes every ranking the engine
//! produces.

use tracing::trace;

use super::distance::distance_km;
use crate::domain::{Station, StationStatus};

pub const DISTANCE_WEIGHT: f64 = 0.5;
pub const AVAILABILITY_WEIGHT: f64 = 0.3;
pub const RATING_WEIGHT: f64 = 0.2;

/// Distance at which the proximity component reaches zero.
pub const DISTANCE_HORIZON_KM: f64 = 10.0;

const AVAILABLE_SCALE: f64 = 5.0;
const BUSY_SCALE: f64 = 2.0;

/// The components of a station's score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreBreakdown {
    pub distance_km: f64,
    pub distance_score: f64,
    pub availability_score: f64,
    pub rating_score: f64,
    pub total: f64,
}

/// Proximity component for a given distance. Never negative.
pub fn distance_score(distance_km: f64) -> f64 {
    (DISTANCE_HORIZON_KM - distance_km).max(0.0)
}

/// Availability component.
///
/// A station with no capacity counts as fully occupied. Overfull stations
/// (more users than capacity) produce a negative component; that is left
/// alone rather than clamped.
pub fn availability_score(station: &Station) -> f64 {
    let scale = if station.status == StationStatus::Available {
        AVAILABLE_SCALE
    } else if station.status == StationStatus::Busy {
        BUSY_SCALE
    } else {
        return 0.0;
    };

    match station.occupancy_ratio() {
        Some(ratio) => scale * (1.0 - ratio),
        None => 0.0,
    }
}

/// Score a station for a user at `(user_lat, user_lng)`, with every component.
pub fn score_breakdown(station: &Station, user_lat: f64, user_lng: f64) -> ScoreBreakdown {
    let distance = distance_km(user_lat, user_lng, station.lat, station.lng);
    let distance_score = distance_score(distance);
    let availability_score = availability_score(station);
    let rating_score = station.average_rating;

    let total = DISTANCE_WEIGHT * distance_score
        + AVAILABILITY_WEIGHT * availability_score
        + RATING_WEIGHT * rating_score;

    trace!(
        station = %station.id,
        distance_km = distance,
        distance_score,
        availability_score,
        rating_score,
        total,
        "scored station"
    );

    ScoreBreakdown {
        distance_km: distance,
        distance_score,
        availability_score,
        rating_score,
        total,
    }
}

/// Score a station for a user at `(user_lat, user_lng)`. Higher is better.
pub fn score(station: &Station, user_lat: f64, user_lng: f64) -> f64 {
    score_breakdown(station, user_lat, user_lng).total
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::domain::fixtures::station;
    use proptest::prelude::*;

    fn status() -> impl Strategy<Value = StationStatus> {
        prop_oneof![
            Just(StationStatus::Available),
            Just(StationStatus::Busy),
            Just(StationStatus::Inactive),
            Just(StationStatus::parse("Maintenance")),
        ]
    }

    proptest! {
        /// Moving the user further away never raises the score.
        #[test]
        fn non_increasing_in_distance(
            lat in -60.0f64..60.0,
            lng in -170.0f64..170.0,
            near in 0.0f64..0.2,
            extra in 0.0f64..0.2,
            status in status(),
            users in 0u32..10,
            capacity in 0u32..10,
            rating in 0.0f64..5.0,
        ) {
            let mut s = station("p", lat, lng);
            s.status = status;
            s.current_users = users;
            s.max_capacity = capacity;
            s.average_rating = rating;

            let d_near = distance_km(lat + near, lng, lat, lng);
            let d_far = distance_km(lat + near + extra, lng, lat, lng);
            prop_assume!(d_near <= d_far);

            let s_near = score(&s, lat + near, lng);
            let s_far = score(&s, lat + near + extra, lng);
            prop_assert!(s_near >= s_far - 1e-12, "{} < {}", s_near, s_far);
        }

        /// Scores are finite for any occupancy, including zero capacity.
        #[test]
        fn always_finite(
            status in status(),
            users in 0u32..1000,
            capacity in 0u32..1000,
            user_lat in -90.0f64..90.0,
            user_lng in -180.0f64..180.0,
        ) {
            let mut s = station("p", 34.0, -118.0);
            s.status = status;
            s.current_users = users;
            s.max_capacity = capacity;
            prop_assert!(score(&s, user_lat, user_lng).is_finite());
        }
    }
}
