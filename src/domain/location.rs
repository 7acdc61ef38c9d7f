//! Geographic location types for accident reporting.

use chrono::{DateTime, Utc};

use crate::{AlertError, Result};

/// A geographic position in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GeoLocation {
    /// Latitude in [-90, 90]
    pub latitude: f64,
    /// Longitude in [-180, 180]
    pub longitude: f64,
}

impl GeoLocation {
    /// Create a location, validating coordinate ranges
    pub fn new(latitude: f64, longitude: f64) -> Result<Self> {
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(AlertError::Domain(format!(
                "latitude {} out of range [-90, 90]",
                latitude
            )));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(AlertError::Domain(format!(
                "longitude {} out of range [-180, 180]",
                longitude
            )));
        }
        Ok(Self { latitude, longitude })
    }

    /// Google Maps link for this position
    pub fn map_link(&self) -> String {
        format!(
            "https://www.google.com/maps?q={},{}",
            self.latitude, self.longitude
        )
    }

    /// Round both coordinates to six decimal places (~0.1 m resolution)
    pub fn rounded(&self) -> Self {
        Self {
            latitude: round6(self.latitude),
            longitude: round6(self.longitude),
        }
    }
}

impl std::fmt::Display for GeoLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}, {}", self.latitude, self.longitude)
    }
}

fn round6(value: f64) -> f64 {
    (value * 1_000_000.0).round() / 1_000_000.0
}

/// A timestamped GPS fix held as session state
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LocationFix {
    /// The position
    pub location: GeoLocation,
    /// When the fix was acquired
    pub acquired_at: DateTime<Utc>,
}

impl LocationFix {
    /// Create a fix timestamped now
    pub fn new(location: GeoLocation) -> Self {
        Self {
            location,
            acquired_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_coordinates() {
        let loc = GeoLocation::new(12.9716, 77.5946).unwrap();
        assert!((loc.latitude - 12.9716).abs() < f64::EPSILON);
    }

    #[test]
    fn test_latitude_out_of_range() {
        assert!(GeoLocation::new(90.1, 0.0).is_err());
        assert!(GeoLocation::new(-91.0, 0.0).is_err());
    }

    #[test]
    fn test_longitude_out_of_range() {
        assert!(GeoLocation::new(0.0, 180.5).is_err());
        assert!(GeoLocation::new(0.0, -181.0).is_err());
    }

    #[test]
    fn test_map_link() {
        let loc = GeoLocation::new(12.9716, 77.5946).unwrap();
        assert_eq!(
            loc.map_link(),
            "https://www.google.com/maps?q=12.9716,77.5946"
        );
    }

    #[test]
    fn test_rounding_to_six_decimals() {
        let loc = GeoLocation::new(12.971_600_49, 77.594_600_51).unwrap().rounded();
        assert!((loc.latitude - 12.9716).abs() < 1e-9);
        assert!((loc.longitude - 77.594_601).abs() < 1e-9);
    }
}
