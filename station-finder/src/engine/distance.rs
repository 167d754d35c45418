//! Great-circle distance.

/// Mean Earth radius in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// A latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Distance to another point in kilometres.
    pub fn distance_km(&self, other: &GeoPoint) -> f64 {
        distance_km(self.lat, self.lng, other.lat, other.lng)
    }
}

/// Haversine distance between two points, in kilometres.
///
/// Any real input is accepted, including out-of-range coordinates. The
/// haversine term is clamped to `[0, 1]` so rounding can never push the
/// square roots out of their domain: identical points give exactly 0 and
/// antipodal points give half the circumference.
///
/// # Examples
///
/// ```
/// use station_finder::engine::distance_km;
///
/// assert_eq!(distance_km(34.0522, -118.2437, 34.0522, -118.2437), 0.0);
///
/// // Los Angeles to San Francisco is roughly 559 km.
/// let d = distance_km(34.0522, -118.2437, 37.7749, -122.4194);
/// assert!((d - 559.0).abs() < 2.0);
/// ```
pub fn distance_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lon = (lon2 - lon1).to_radians();

    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lon / 2.0).sin().powi(2);
    let a = a.clamp(0.0, 1.0);

    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    EARTH_RADIUS_KM * c
}
