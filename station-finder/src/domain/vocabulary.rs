//! Connector and amenity vocabularies.
//!
//! Both vocabularies are open: records may name values we have never seen.
//! Known values get their own variant; anything else is kept verbatim in
//! `Other` so it round-trips and still matches exactly.
//!
//! Values are identified by their wire string, so `Other("Tesla")` and
//! `Tesla` are the same connector.

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// A charging connector standard.
///
/// # Examples
///
/// ```
/// use station_finder::domain::ConnectorType;
///
/// assert_eq!(ConnectorType::parse("Type 2"), ConnectorType::Type2);
/// assert_eq!(ConnectorType::Type2.as_str(), "Type 2");
///
/// // Matching is case-sensitive, so this is not the Tesla variant.
/// assert_eq!(
///     ConnectorType::parse("tesla"),
///     ConnectorType::Other("tesla".to_string())
/// );
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ConnectorType {
    Ccs,
    Chademo,
    Type2,
    Tesla,
    Other(String),
}

impl ConnectorType {
    pub fn parse(s: &str) -> Self {
        match s {
            "CCS" => ConnectorType::Ccs,
            "CHAdeMO" => ConnectorType::Chademo,
            "Type 2" => ConnectorType::Type2,
            "Tesla" => ConnectorType::Tesla,
            other => ConnectorType::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            ConnectorType::Ccs => "CCS",
            ConnectorType::Chademo => "CHAdeMO",
            ConnectorType::Type2 => "Type 2",
            ConnectorType::Tesla => "Tesla",
            ConnectorType::Other(s) => s,
        }
    }
}

impl From<String> for ConnectorType {
    fn from(value: String) -> Self {
        match ConnectorType::parse(&value) {
            ConnectorType::Other(_) => ConnectorType::Other(value),
            known => known,
        }
    }
}

impl From<ConnectorType> for String {
    fn from(value: ConnectorType) -> Self {
        match value {
            ConnectorType::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

impl PartialEq for ConnectorType {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for ConnectorType {}

impl Hash for ConnectorType {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_str().hash(state);
    }
}

impl fmt::Display for ConnectorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A facility available at or near a station.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Amenity {
    Restroom,
    Cafe,
    Wifi,
    Shopping,
    Parking,
    Restaurant,
    Shop,
    Other(String),
}

impl Amenity {
    pub fn parse(s: &str) -> Self {
        match s {
            "Restroom" => Amenity::Restroom,
            "Cafe" => Amenity::Cafe,
            "WiFi" => Amenity::Wifi,
            "Shopping" => Amenity::Shopping,
            "Parking" => Amenity::Parking,
            "Restaurant" => Amenity::Restaurant,
            "Shop" => Amenity::Shop,
            other => Amenity::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Amenity::Restroom => "Restroom",
            Amenity::Cafe => "Cafe",
            Amenity::Wifi => "WiFi",
            Amenity::Shopping => "Shopping",
            Amenity::Parking => "Parking",
            Amenity::Restaurant => "Restaurant",
            Amenity::Shop => "Shop",
            Amenity::Other(s) => s,
        }
    }
}

impl From<String> for Amenity {
    fn from(value: String) -> Self {
        match Amenity::parse(&value) {
            Amenity::Other(_) => Amenity::Other(value),
            known => known,
        }
    }
}

impl From<Amenity> for String {
    fn from(value: Amenity) -> Self {
        match value {
            Amenity::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

impl PartialEq for Amenity {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for Amenity {}

impl Hash for Amenity {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_str().hash(state);
    }
}

impl fmt::Display for Amenity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
