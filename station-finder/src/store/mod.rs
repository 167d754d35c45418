//! Application state: stations, reviews, filters and selection.
//!
//! The store is a plain value. Callers that share it between tasks wrap it
//! themselves (see [`crate::live::LiveStations`]).

mod error;
mod filters;
mod station_store;

pub use error::StoreError;
pub use filters::{FiltersUpdate, StationFilters};
pub use station_store::StationStore;
