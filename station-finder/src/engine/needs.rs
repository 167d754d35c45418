//! Recommendation narrowed to what a driver needs.

use tracing::debug;

use super::recommend::recommend;
use crate::domain::{Amenity, ConnectorType, Station, StationStatus};

/// Number of stations returned for a needs query.
pub const NEEDS_LIMIT: usize = 5;

/// Wait assumed at a station with no free slot, in minutes.
///
/// The estimate is deliberately binary: a station either has a free slot
/// (no wait) or it doesn't (this long). Rankings depend on it.
pub const FULL_STATION_WAIT_MINS: u32 = 15;

/// Optional requirements a station must meet before it is ranked.
///
/// Every field left as `None` imposes no restriction.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserNeeds {
    /// Station must offer this connector. An empty connector name imposes
    /// no restriction.
    pub connector_type: Option<ConnectorType>,
    /// Station must offer every one of these amenities.
    pub amenities: Option<Vec<Amenity>>,
    /// Longest acceptable estimated wait, in minutes.
    pub max_wait_mins: Option<u32>,
}

impl UserNeeds {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_connector(mut self, connector: ConnectorType) -> Self {
        self.connector_type = Some(connector);
        self
    }

    pub fn with_amenities(mut self, amenities: Vec<Amenity>) -> Self {
        self.amenities = Some(amenities);
        self
    }

    pub fn with_max_wait(mut self, minutes: u32) -> Self {
        self.max_wait_mins = Some(minutes);
        self
    }
}

/// Estimated wait at a station: nothing if a slot is free, otherwise
/// [`FULL_STATION_WAIT_MINS`].
pub fn estimated_wait_mins(station: &Station) -> u32 {
    if station.current_users < station.max_capacity {
        0
    } else {
        FULL_STATION_WAIT_MINS
    }
}

fn meets_needs(station: &Station, needs: &UserNeeds) -> bool {
    if let Some(connector) = &needs.connector_type
        && !connector.as_str().is_empty()
        && !station.has_connector(connector)
    {
        return false;
    }

    if let Some(amenities) = &needs.amenities
        && !amenities.iter().all(|a| station.has_amenity(a))
    {
        return false;
    }

    if let Some(max_wait) = needs.max_wait_mins {
        if station.status == StationStatus::Inactive {
            return false;
        }
        if estimated_wait_mins(station) > max_wait {
            return false;
        }
    }

    true
}

/// Rank the stations that meet `needs` for a user at `(user_lat, user_lng)`.
///
/// Filters by connector, then amenities, then estimated wait, and hands the
/// survivors to [`recommend`] with a limit of [`NEEDS_LIMIT`].
pub fn filter_by_needs<'a>(
    stations: &'a [Station],
    user_lat: f64,
    user_lng: f64,
    needs: &UserNeeds,
) -> Vec<&'a Station> {
    let matching: Vec<&'a Station> = stations
        .iter()
        .filter(|station| meets_needs(station, needs))
        .collect();

    debug!(
        total = stations.len(),
        matching = matching.len(),
        ?needs,
        "filtered stations by needs"
    );

    recommend(matching, user_lat, user_lng, NEEDS_LIMIT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::fixtures::station;

    fn ids(stations: &[&Station]) -> Vec<String> {
        stations.iter().map(|s| s.id.to_string()).collect()
    }

    fn mixed() -> Vec<Station> {
        let mut tesla = station("tesla", 34.06, -118.25);
        tesla.connector_types = vec![ConnectorType::Tesla];
        tesla.amenities = vec![Amenity::Restroom];

        let mut full = station("full", 34.08, -118.3);
        full.status = StationStatus::Busy;
        full.connector_types = vec![ConnectorType::Ccs, ConnectorType::Chademo];
        full.current_users = 8;
        full.max_capacity = 8;
        full.amenities = vec![Amenity::Restroom, Amenity::Wifi];

        let mut closed = station("closed", 34.045, -118.255);
        closed.status = StationStatus::Inactive;
        closed.connector_types = vec![ConnectorType::Ccs, ConnectorType::Tesla];
        closed.amenities = vec![Amenity::Restroom, Amenity::Cafe, Amenity::Wifi];

        let mut hub = station("hub", 34.0522, -118.2437);
        hub.connector_types = vec![ConnectorType::Ccs, ConnectorType::Type2];
        hub.current_users = 2;
        hub.max_capacity = 8;
        hub.amenities = vec![Amenity::Restroom, Amenity::Cafe, Amenity::Wifi];

        vec![tesla, full, closed, hub]
    }

    #[test]
    fn no_needs_ranks_everything_eligible() {
        let stations = mixed();
        let result = filter_by_needs(&stations, 34.0522, -118.2437, &UserNeeds::new());
        assert_eq!(result.len(), 3);
        assert!(!ids(&result).contains(&"closed".to_string()));
    }

    #[test]
    fn connector_filter() {
        let stations = mixed();
        let needs = UserNeeds::new().with_connector(ConnectorType::Tesla);
        let result = filter_by_needs(&stations, 34.0522, -118.2437, &needs);
        assert_eq!(ids(&result), vec!["tesla"]);
        assert!(result.iter().all(|s| s.has_connector(&ConnectorType::Tesla)));
    }

    #[test]
    fn connector_filter_is_case_sensitive() {
        let stations = mixed();
        let needs = UserNeeds::new().with_connector(ConnectorType::parse("tesla"));
        assert!(filter_by_needs(&stations, 34.0522, -118.2437, &needs).is_empty());
    }

    #[test]
    fn connector_matched_by_name() {
        let stations = mixed();
        let needs = UserNeeds::new().with_connector(ConnectorType::Other("Tesla".to_string()));
        let result = filter_by_needs(&stations, 34.0522, -118.2437, &needs);
        assert_eq!(ids(&result), vec!["tesla"]);

        let needs = UserNeeds::new()
            .with_amenities(vec![Amenity::Other("WiFi".to_string())])
            .with_max_wait(0);
        let result = filter_by_needs(&stations, 34.0522, -118.2437, &needs);
        assert_eq!(ids(&result), vec!["hub"]);
    }

    #[test]
    fn empty_connector_is_no_restriction() {
        let stations = mixed();
        let needs = UserNeeds::new().with_connector(ConnectorType::parse(""));
        let result = filter_by_needs(&stations, 34.0522, -118.2437, &needs);
        assert_eq!(result.len(), 3);
    }

    #[test]
    fn amenities_require_all() {
        let stations = mixed();
        let needs = UserNeeds::new().with_amenities(vec![Amenity::Restroom, Amenity::Wifi]);
        let result = filter_by_needs(&stations, 34.0522, -118.2437, &needs);
        assert_eq!(ids(&result), vec!["hub", "full"]);
    }

    #[test]
    fn empty_amenity_list_is_no_restriction() {
        let stations = mixed();
        let needs = UserNeeds::new().with_amenities(Vec::new());
        let result = filter_by_needs(&stations, 34.0522, -118.2437, &needs);
        assert_eq!(result.len(), 3);
    }

    #[test]
    fn wait_filter_drops_full_stations() {
        let stations = mixed();
        let needs = UserNeeds::new().with_max_wait(10);
        let result = filter_by_needs(&stations, 34.0522, -118.2437, &needs);
        assert!(!ids(&result).contains(&"full".to_string()));
        assert_eq!(result.len(), 2);
    }

    #[test]
    fn wait_filter_at_threshold_keeps_full_stations() {
        let stations = mixed();
        let needs = UserNeeds::new().with_max_wait(FULL_STATION_WAIT_MINS);
        let result = filter_by_needs(&stations, 34.0522, -118.2437, &needs);
        assert!(ids(&result).contains(&"full".to_string()));
    }

    #[test]
    fn estimated_wait_is_binary() {
        let mut s = station("s", 0.0, 0.0);
        s.current_users = 3;
        s.max_capacity = 4;
        assert_eq!(estimated_wait_mins(&s), 0);
        s.current_users = 4;
        assert_eq!(estimated_wait_mins(&s), 15);
        s.current_users = 9;
        assert_eq!(estimated_wait_mins(&s), 15);
        s.current_users = 0;
        s.max_capacity = 0;
        assert_eq!(estimated_wait_mins(&s), 15);
    }

    #[test]
    fn limited_to_five() {
        let stations: Vec<Station> = (0..8)
            .map(|i| station(&format!("s{i}"), 34.0 + f64::from(i) * 0.001, -118.0))
            .collect();
        let result = filter_by_needs(&stations, 34.0, -118.0, &UserNeeds::new());
        assert_eq!(ids(&result), vec!["s0", "s1", "s2", "s3", "s4"]);
    }

    #[test]
    fn combined_needs() {
        let stations = mixed();
        let needs = UserNeeds::new()
            .with_connector(ConnectorType::Ccs)
            .with_amenities(vec![Amenity::Cafe])
            .with_max_wait(0);
        let result = filter_by_needs(&stations, 34.0522, -118.2437, &needs);
        assert_eq!(ids(&result), vec!["hub"]);
    }
}
