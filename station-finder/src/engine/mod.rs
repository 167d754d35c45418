//! Station recommendation engine.
//!
//! Ranks charging stations for a user at a given location:
//!
//! - [`distance_km`] measures great-circle distance
//! - [`score`] combines proximity, free capacity and rating
//! - [`recommend`] drops inactive stations and keeps the best N
//! - [`filter_by_needs`] narrows by connector, amenities and expected wait
//!   before ranking
//!
//! Everything here is a pure function of its arguments. Results borrow from
//! the input slice, so callers hold whatever lock protects the stations for
//! as long as they use the result.

mod distance;
mod needs;
mod query;
mod recommend;
mod score;

pub use distance::{EARTH_RADIUS_KM, GeoPoint, distance_km};
pub use needs::{FULL_STATION_WAIT_MINS, NEEDS_LIMIT, UserNeeds, estimated_wait_mins, filter_by_needs};
pub use query::UserQuery;
pub use recommend::{DEFAULT_LIMIT, recommend};
pub use score::{
    AVAILABILITY_WEIGHT, DISTANCE_HORIZON_KM, DISTANCE_WEIGHT, RATING_WEIGHT, ScoreBreakdown,
    availability_score, distance_score, score, score_breakdown,
};
