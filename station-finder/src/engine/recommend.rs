//! Top-N station recommendation.

use tracing::debug;

use super::score::score;
use crate::domain::Station;

/// Number of stations recommended when the caller does not ask for a count.
pub const DEFAULT_LIMIT: usize = 3;

/// A station paired with its score for the duration of one selection.
struct ScoredCandidate<'a> {
    station: &'a Station,
    score: f64,
}

/// Recommend up to `limit` stations for a user at `(user_lat, user_lng)`.
///
/// Inactive stations are never returned. The rest are ranked best-first by
/// [`score`]; stations with equal scores keep their input order, so the
/// result is deterministic for a given input. A station whose score is not
/// a number ranks below every other. Returns references into the
/// input, never more than `limit` and never padded.
///
/// # Examples
///
/// ```
/// use station_finder::domain::Station;
/// use station_finder::engine::{DEFAULT_LIMIT, recommend};
///
/// let stations: Vec<Station> = Vec::new();
/// assert!(recommend(&stations, 34.0, -118.0, DEFAULT_LIMIT).is_empty());
/// ```
pub fn recommend<'a, I>(stations: I, user_lat: f64, user_lng: f64, limit: usize) -> Vec<&'a Station>
where
    I: IntoIterator<Item = &'a Station>,
{
    if limit == 0 {
        return Vec::new();
    }

    let mut candidates: Vec<ScoredCandidate<'a>> = stations
        .into_iter()
        .filter(|station| station.is_eligible())
        .map(|station| ScoredCandidate {
            station,
            score: score(station, user_lat, user_lng),
        })
        .collect();

    let eligible = candidates.len();

    // Stable: equal scores stay in input order.
    candidates.sort_by(|a, b| rank_key(b.score).total_cmp(&rank_key(a.score)));
    candidates.truncate(limit);

    debug!(
        eligible,
        returned = candidates.len(),
        limit,
        "ranked stations"
    );

    candidates.into_iter().map(|c| c.station).collect()
}

/// NaN would otherwise sort above every number.
fn rank_key(score: f64) -> f64 {
    if score.is_nan() {
        f64::NEG_INFINITY
    } else {
        score
    }
}
