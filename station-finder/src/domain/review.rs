//! Station reviews.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::station::StationId;

/// Lowest star rating a review may carry.
pub const MIN_RATING: u8 = 1;

/// Highest star rating a review may carry.
pub const MAX_RATING: u8 = 5;

/// Unique identifier of a review.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReviewId(String);

impl ReviewId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ReviewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A user's review of a station.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: ReviewId,
    pub station_id: StationId,
    pub user_id: String,
    pub user_name: String,
    /// Star rating, `MIN_RATING..=MAX_RATING`.
    pub rating: u8,
    pub comment: String,
    pub date_posted: DateTime<Utc>,
    #[serde(default)]
    pub helpful: u32,
}

/// A review as submitted, before the store assigns id and timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewReview {
    pub station_id: StationId,
    pub user_id: String,
    pub user_name: String,
    pub rating: u8,
    pub comment: String,
}

impl NewReview {
    /// Returns true if the rating is a whole number of stars in range.
    pub fn has_valid_rating(&self) -> bool {
        (MIN_RATING..=MAX_RATING).contains(&self.rating)
    }

    pub fn into_review(self, id: ReviewId, date_posted: DateTime<Utc>) -> Review {
        Review {
            id,
            station_id: self.station_id,
            user_id: self.user_id,
            user_name: self.user_name,
            rating: self.rating,
            comment: self.comment,
            date_posted,
            helpful: 0,
        }
    }
}
