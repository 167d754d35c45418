//! Live station status.
//!
//! Real chargers report occupancy continuously. Without a feed, the store
//! is kept moving by a simulator that occasionally flips a station's status
//! and redraws its occupancy to match.

use std::sync::Arc;
use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::domain::{Station, StationStatus};
use crate::engine::recommend;
use crate::store::StationStore;

/// Chance that a station picks a new status on a tick.
const STATUS_CHANGE_PROBABILITY: f64 = 0.2;

/// Advance every station by one simulated tick.
///
/// Each station keeps its status with probability 0.8; otherwise it draws
/// one of the three known statuses uniformly (possibly the same one).
/// Occupancy is then redrawn for the resulting status: under half capacity
/// when `Available`, at least half when `Busy`, empty when `Inactive`.
/// Stations with an unrecognised status are left untouched.
pub fn simulate_tick<R: Rng>(stations: &mut [Station], rng: &mut R) {
    for station in stations.iter_mut() {
        if station.status.is_unknown() {
            continue;
        }

        if rng.random_bool(STATUS_CHANGE_PROBABILITY) {
            let idx = rng.random_range(0..StationStatus::KNOWN.len());
            station.status = StationStatus::KNOWN[idx].clone();
        }

        let capacity = f64::from(station.max_capacity);
        station.current_users = if station.status == StationStatus::Available {
            (rng.random::<f64>() * (capacity / 2.0)).floor() as u32
        } else if station.status == StationStatus::Busy {
            (capacity * 0.5 + rng.random::<f64>() * (capacity * 0.5)).floor() as u32
        } else {
            0
        };
    }
}

/// A station store shared between tasks.
///
/// Cloning is cheap and every clone sees the same stations.
#[derive(Clone, Debug)]
pub struct LiveStations {
    inner: Arc<RwLock<StationStore>>,
}

impl LiveStations {
    pub fn new(store: StationStore) -> Self {
        Self {
            inner: Arc::new(RwLock::new(store)),
        }
    }

    /// Read access to the store. Hold the guard while using borrowed results.
    pub async fn read(&self) -> RwLockReadGuard<'_, StationStore> {
        self.inner.read().await
    }

    /// Write access to the store, for administrative edits.
    pub async fn write(&self) -> RwLockWriteGuard<'_, StationStore> {
        self.inner.write().await
    }

    /// Apply one simulated tick.
    pub async fn tick<R: Rng>(&self, rng: &mut R) {
        let mut guard = self.inner.write().await;
        simulate_tick(guard.stations_mut(), rng);
        debug!(stations = guard.stations().len(), "applied simulated tick");
    }

    /// Recommend stations from the current snapshot.
    ///
    /// Returns clones because the snapshot's lock is released on return.
    pub async fn recommend(&self, lat: f64, lng: f64, limit: usize) -> Vec<Station> {
        let guard = self.inner.read().await;
        recommend(guard.stations(), lat, lng, limit)
            .into_iter()
            .cloned()
            .collect()
    }

    /// Spawn a task that ticks the simulation every `period`.
    ///
    /// The first tick happens one full period after spawning. The task runs
    /// until aborted.
    pub fn spawn_simulation(&self, period: Duration) -> JoinHandle<()> {
        let live = self.clone();
        tokio::spawn(async move {
            let mut rng = StdRng::from_os_rng();
            let mut interval = tokio::time::interval(period);
            interval.tick().await; // First tick is immediate, skip it
            loop {
                interval.tick().await;
                live.tick(&mut rng).await;
                info!("refreshed simulated station status");
            }
        })
    }
}
