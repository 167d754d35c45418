//! In-memory station and review store.

use std::collections::HashSet;

use chrono::Utc;
use tracing::{debug, info};

use super::error::StoreError;
use super::filters::{FiltersUpdate, StationFilters};
use crate::domain::{NewReview, NewStation, Review, ReviewId, Station, StationId};
use crate::engine::{DEFAULT_LIMIT, UserQuery, recommend};
use crate::seed::Seed;

/// The application's station state.
///
/// Owns every station and review along with the current browse filters and
/// selection. Reads hand out borrows; the recommendation engine runs
/// directly against [`StationStore::stations`].
#[derive(Debug, Clone, Default)]
pub struct StationStore {
    stations: Vec<Station>,
    reviews: Vec<Review>,
    filters: StationFilters,
    selected: Option<StationId>,
    next_station: u64,
    next_review: u64,
}

impl StationStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding the seed's stations and reviews.
    pub fn from_seed(seed: Seed) -> Self {
        info!(
            stations = seed.stations.len(),
            reviews = seed.reviews.len(),
            "loaded seed data"
        );
        Self {
            stations: seed.stations,
            reviews: seed.reviews,
            ..Self::default()
        }
    }

    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    pub(crate) fn stations_mut(&mut self) -> &mut [Station] {
        &mut self.stations
    }

    pub fn reviews(&self) -> &[Review] {
        &self.reviews
    }

    pub fn get(&self, id: &StationId) -> Option<&Station> {
        self.stations.iter().find(|s| &s.id == id)
    }

    /// Add a station, returning its newly assigned id.
    pub fn add_station(&mut self, station: NewStation) -> Result<StationId, StoreError> {
        station.validate()?;

        let id = self.fresh_station_id();
        debug!(%id, name = %station.name, "adding station");
        self.stations.push(station.into_station(id.clone()));
        Ok(id)
    }

    /// Replace the station with the same id.
    pub fn update_station(&mut self, station: Station) -> Result<(), StoreError> {
        station.validate()?;

        let slot = self
            .stations
            .iter_mut()
            .find(|s| s.id == station.id)
            .ok_or_else(|| StoreError::StationNotFound(station.id.clone()))?;

        debug!(id = %station.id, "updating station");
        *slot = station;
        Ok(())
    }

    /// Remove a station and its reviews.
    ///
    /// Clears the selection if it pointed at the removed station.
    pub fn delete_station(&mut self, id: &StationId) -> Result<Station, StoreError> {
        let idx = self
            .stations
            .iter()
            .position(|s| &s.id == id)
            .ok_or_else(|| StoreError::StationNotFound(id.clone()))?;

        let removed = self.stations.remove(idx);
        self.reviews.retain(|r| &r.station_id != id);
        if self.selected.as_ref() == Some(id) {
            self.selected = None;
        }

        debug!(%id, "deleted station");
        Ok(removed)
    }

    /// Select a station, or clear the selection with `None`.
    pub fn select_station(&mut self, id: Option<StationId>) -> Result<(), StoreError> {
        if let Some(id) = &id
            && self.get(id).is_none()
        {
            return Err(StoreError::StationNotFound(id.clone()));
        }
        self.selected = id;
        Ok(())
    }

    /// The selected station, if any.
    pub fn selected(&self) -> Option<&Station> {
        self.selected.as_ref().and_then(|id| self.get(id))
    }

    /// Record a review and refresh the station's rating summary.
    ///
    /// The station's average becomes the mean of all of its reviews.
    pub fn add_review(&mut self, review: NewReview) -> Result<ReviewId, StoreError> {
        if !review.has_valid_rating() {
            return Err(StoreError::InvalidRating(review.rating));
        }
        if self.get(&review.station_id).is_none() {
            return Err(StoreError::StationNotFound(review.station_id.clone()));
        }

        let id = self.fresh_review_id();
        let station_id = review.station_id.clone();
        self.reviews.push(review.into_review(id.clone(), Utc::now()));
        self.refresh_rating(&station_id);

        debug!(%id, station = %station_id, "added review");
        Ok(id)
    }

    /// Reviews of one station, oldest first as stored.
    pub fn reviews_for(&self, station_id: &StationId) -> Vec<&Review> {
        self.reviews
            .iter()
            .filter(|r| &r.station_id == station_id)
            .collect()
    }

    /// Reviews written by one user.
    pub fn reviews_by_user(&self, user_id: &str) -> Vec<&Review> {
        self.reviews.iter().filter(|r| r.user_id == user_id).collect()
    }

    /// Count one more "helpful" vote on a review, returning the new total.
    pub fn mark_helpful(&mut self, id: &ReviewId) -> Result<u32, StoreError> {
        let review = self
            .reviews
            .iter_mut()
            .find(|r| &r.id == id)
            .ok_or_else(|| StoreError::ReviewNotFound(id.clone()))?;
        review.helpful = review.helpful.saturating_add(1);
        Ok(review.helpful)
    }

    pub fn filters(&self) -> &StationFilters {
        &self.filters
    }

    pub fn update_filters(&mut self, update: FiltersUpdate) {
        self.filters.apply(update);
        debug!(filters = ?self.filters, "updated filters");
    }

    /// Stations passing the current filters, in store order.
    pub fn filtered_stations(&self) -> Vec<&Station> {
        self.stations
            .iter()
            .filter(|s| self.filters.matches(s))
            .collect()
    }

    /// Filtered stations whose name or address contains `term`, ignoring case.
    ///
    /// A blank term returns every filtered station.
    pub fn search(&self, term: &str) -> Vec<&Station> {
        let term = term.trim().to_lowercase();
        if term.is_empty() {
            return self.filtered_stations();
        }

        self.filtered_stations()
            .into_iter()
            .filter(|s| {
                s.name.to_lowercase().contains(&term) || s.address.to_lowercase().contains(&term)
            })
            .collect()
    }

    /// Default recommendations for a user at `(lat, lng)`, ignoring filters.
    pub fn recommend_for(&self, lat: f64, lng: f64) -> Vec<&Station> {
        recommend(&self.stations, lat, lng, DEFAULT_LIMIT)
    }

    /// Run an arbitrary query against every station.
    pub fn query(&self, query: &UserQuery) -> Vec<&Station> {
        query.run(&self.stations)
    }

    fn refresh_rating(&mut self, station_id: &StationId) {
        let (sum, count) = self
            .reviews
            .iter()
            .filter(|r| &r.station_id == station_id)
            .fold((0u32, 0u32), |(sum, count), r| {
                (sum + u32::from(r.rating), count + 1)
            });

        if let Some(station) = self.stations.iter_mut().find(|s| &s.id == station_id)
            && count > 0
        {
            station.average_rating = f64::from(sum) / f64::from(count);
            station.total_reviews = count;
        }
    }

    fn fresh_station_id(&mut self) -> StationId {
        let taken: HashSet<&str> = self.stations.iter().map(|s| s.id.as_str()).collect();
        loop {
            self.next_station += 1;
            let candidate = format!("station-{}", self.next_station);
            if !taken.contains(candidate.as_str()) {
                return StationId::new(candidate);
            }
        }
    }

    fn fresh_review_id(&mut self) -> ReviewId {
        let taken: HashSet<&str> = self.reviews.iter().map(|r| r.id.as_str()).collect();
        loop {
            self.next_review += 1;
            let candidate = format!("review-{}", self.next_review);
            if !taken.contains(candidate.as_str()) {
                return ReviewId::new(candidate);
            }
        }
    }
}
