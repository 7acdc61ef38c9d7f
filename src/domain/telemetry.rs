//! Telemetry value objects for accident evaluation.

use chrono::{DateTime, Utc};

/// Default vehicle identifier used when none is configured.
pub const DEFAULT_VEHICLE_ID: &str = "VH-2024-001";

/// Identifier of the vehicle a telemetry sample belongs to
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct VehicleId(String);

impl VehicleId {
    /// Create a new vehicle identifier
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the identifier as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for VehicleId {
    fn default() -> Self {
        Self(DEFAULT_VEHICLE_ID.to_string())
    }
}

impl std::fmt::Display for VehicleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for VehicleId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// A single telemetry reading at a point in time.
///
/// The declared domain is non-negative acceleration and speed (the inputs
/// are UI-bounded to [0, 10] g and [0, 150] km/h upstream), but the sample
/// itself imposes no hard bound and the classifier is total over any
/// numeric values.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TelemetrySample {
    /// Peak impact acceleration in g
    pub acceleration_g: f64,
    /// Vehicle speed in km/h
    pub speed_kph: f64,
    /// When the sample was taken
    pub recorded_at: DateTime<Utc>,
}

impl TelemetrySample {
    /// Create a sample timestamped now
    pub fn new(acceleration_g: f64, speed_kph: f64) -> Self {
        Self {
            acceleration_g,
            speed_kph,
            recorded_at: Utc::now(),
        }
    }
}
