//! Location model for geographic coordinates and metadata

use serde::{Deserialize, Serialize};

/// Location coordinates
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Location {
    /// Latitude in decimal degrees
    pub latitude: f64,
    /// Longitude in decimal degrees
    pub longitude: f64,
    /// Location name (city, region, etc.)
    pub name: String,
}

impl Location {
    /// Create a new location
    #[must_use]
    pub fn new(latitude: f64, longitude: f64, name: String) -> Self {
        Self {
            latitude,
            longitude,
            name,
        }
    }

    /// The fixed deployment location the dashboard reports for.
    #[must_use]
    pub fn hvidovre() -> Self {
        Self::new(55.65, 12.47, "Hvidovre".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hvidovre_coordinates() {
        let location = Location::hvidovre();
        assert_eq!(location.latitude, 55.65);
        assert_eq!(location.longitude, 12.47);
        assert_eq!(location.name, "Hvidovre");
    }
}
