//! Domain types for the station finder.
//!
//! Stations and reviews as the rest of the crate sees them. Records are
//! plain data; validation happens when the store accepts an edit, not when
//! a record is read, so the engine must cope with anything well-typed.

mod review;
mod station;
mod vocabulary;

pub use review::{MAX_RATING, MIN_RATING, NewReview, Review, ReviewId};
pub use station::{InvalidStation, NewStation, Station, StationId, StationStatus};
pub use vocabulary::{Amenity, ConnectorType};

#[cfg(test)]
pub(crate) use station::fixtures;
