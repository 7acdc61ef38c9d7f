//! Alert types for emergency notifications.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::{GeoLocation, Severity, VehicleId};

/// Unique identifier for an alert
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct AlertId(Uuid);

impl AlertId {
    /// Create a new random alert ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Get the inner UUID
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for AlertId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for AlertId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Alert priority levels
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub enum Priority {
    /// Critical - immediate action required
    Critical = 1,
    /// High - urgent attention needed
    High = 2,
    /// Medium - important but not urgent
    Medium = 3,
    /// Low - informational
    Low = 4,
}

impl Priority {
    /// Map a severity score onto a priority level
    pub fn from_severity(severity: Severity) -> Self {
        match severity.value() {
            8..=10 => Priority::Critical,
            5..=7 => Priority::High,
            2..=4 => Priority::Medium,
            _ => Priority::Low,
        }
    }

    /// Get numeric value (lower = higher priority)
    pub fn value(&self) -> u8 {
        *self as u8
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Priority::Critical => write!(f, "CRITICAL"),
            Priority::High => write!(f, "HIGH"),
            Priority::Medium => write!(f, "MEDIUM"),
            Priority::Low => write!(f, "LOW"),
        }
    }
}

/// What triggered an alert
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum AlertKind {
    /// Threshold-crossing impact detected from telemetry
    Impact,
    /// Manual SOS activated by the driver
    Sos,
    /// Transport wiring check
    Test,
}

impl std::fmt::Display for AlertKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AlertKind::Impact => write!(f, "IMPACT"),
            AlertKind::Sos => write!(f, "SOS"),
            AlertKind::Test => write!(f, "TEST"),
        }
    }
}

/// Payload containing alert details
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct AlertPayload {
    /// Human-readable title
    pub title: String,
    /// Detailed message
    pub message: String,
    /// Severity score the alert carries
    pub severity: Severity,
    /// Accident location
    pub location: GeoLocation,
    /// Google Maps link for the location
    pub map_link: String,
    /// Recommended response steps
    pub recommended_actions: Vec<String>,
    /// Informational advisory lines for the session display
    pub advisories: Vec<String>,
}

impl AlertPayload {
    /// Create a new alert payload
    pub fn new(
        title: impl Into<String>,
        message: impl Into<String>,
        severity: Severity,
        location: GeoLocation,
    ) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            severity,
            map_link: location.map_link(),
            location,
            recommended_actions: Vec::new(),
            advisories: Vec::new(),
        }
    }

    /// Set recommended response steps
    pub fn with_actions(mut self, actions: Vec<String>) -> Self {
        self.recommended_actions = actions;
        self
    }

    /// Set advisory lines
    pub fn with_advisories(mut self, advisories: Vec<String>) -> Self {
        self.advisories = advisories;
        self
    }
}

/// An emergency alert ready for dispatch
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Alert {
    id: AlertId,
    vehicle_id: VehicleId,
    kind: AlertKind,
    priority: Priority,
    payload: AlertPayload,
    created_at: DateTime<Utc>,
}

impl Alert {
    /// Create a new alert
    pub fn new(vehicle_id: VehicleId, kind: AlertKind, payload: AlertPayload) -> Self {
        Self {
            id: AlertId::new(),
            vehicle_id,
            kind,
            priority: Priority::from_severity(payload.severity),
            payload,
            created_at: Utc::now(),
        }
    }

    /// Get the alert ID
    pub fn id(&self) -> &AlertId {
        &self.id
    }

    /// Get the vehicle ID
    pub fn vehicle_id(&self) -> &VehicleId {
        &self.vehicle_id
    }

    /// Get what triggered the alert
    pub fn kind(&self) -> AlertKind {
        self.kind
    }

    /// Get the priority
    pub fn priority(&self) -> Priority {
        self.priority
    }

    /// Get the payload
    pub fn payload(&self) -> &AlertPayload {
        &self.payload
    }

    /// Get creation time
    pub fn created_at(&self) -> &DateTime<Utc> {
        &self.created_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_location() -> GeoLocation {
        GeoLocation::new(12.9716, 77.5946).unwrap()
    }

    fn test_payload(severity: u8) -> AlertPayload {
        AlertPayload::new(
            "Accident Alert",
            "Vehicle accident detected",
            Severity::new(severity),
            test_location(),
        )
    }

    #[test]
    fn test_alert_creation() {
        let alert = Alert::new(VehicleId::default(), AlertKind::Impact, test_payload(9));

        assert_eq!(alert.vehicle_id().as_str(), "VH-2024-001");
        assert_eq!(alert.kind(), AlertKind::Impact);
        assert_eq!(alert.priority(), Priority::Critical);
    }

    #[test]
    fn test_priority_from_severity() {
        assert_eq!(Priority::from_severity(Severity::new(10)), Priority::Critical);
        assert_eq!(Priority::from_severity(Severity::new(8)), Priority::Critical);
        assert_eq!(Priority::from_severity(Severity::new(7)), Priority::High);
        assert_eq!(Priority::from_severity(Severity::new(5)), Priority::High);
        assert_eq!(Priority::from_severity(Severity::new(4)), Priority::Medium);
        assert_eq!(Priority::from_severity(Severity::new(2)), Priority::Medium);
        assert_eq!(Priority::from_severity(Severity::new(1)), Priority::Low);
        assert_eq!(Priority::from_severity(Severity::new(0)), Priority::Low);
    }

    #[test]
    fn test_payload_map_link_matches_location() {
        let payload = test_payload(5);
        assert_eq!(payload.map_link, payload.location.map_link());
    }
}
