//! Station store error types.

use crate::domain::{InvalidStation, ReviewId, StationId};

/// Errors returned when an edit to the store is rejected.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StoreError {
    /// No station with this id
    #[error("station not found: {0}")]
    StationNotFound(StationId),

    /// No review with this id
    #[error("review not found: {0}")]
    ReviewNotFound(ReviewId),

    /// Station fields failed validation
    #[error(transparent)]
    InvalidStation(#[from] InvalidStation),

    /// Review rating outside the star range
    #[error("rating must be between 1 and 5, got {0}")]
    InvalidRating(u8),
}
