//! Alert generation from accident assessments.

use crate::detection::thresholds::SOS_SEVERITY;
use crate::domain::{
    AccidentAssessment, Alert, AlertKind, AlertPayload, LocationFix, Severity, VehicleId,
};

/// Generator for alert payloads.
///
/// Composes the human-readable alert content: title with vehicle id,
/// body with severity, coordinates, timestamp and map link, plus the
/// recommended response steps and the advisory lines the session
/// display shows after dispatch.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlertGenerator;

impl AlertGenerator {
    /// Create a new alert generator
    pub fn new() -> Self {
        Self
    }

    /// Generate an alert for a declared accident
    pub fn generate_impact(
        &self,
        vehicle_id: &VehicleId,
        assessment: &AccidentAssessment,
        fix: &LocationFix,
    ) -> Alert {
        let title = format!("ACCIDENT ALERT - Vehicle {}", vehicle_id);
        let message = self.compose_message(vehicle_id, assessment.severity, fix);

        let payload = AlertPayload::new(title, message, assessment.severity, fix.location)
            .with_actions(recommended_actions())
            .with_advisories(dispatch_advisories());

        Alert::new(vehicle_id.clone(), AlertKind::Impact, payload)
    }

    /// Generate a manual SOS alert at the fixed SOS severity
    pub fn generate_sos(&self, vehicle_id: &VehicleId, fix: &LocationFix) -> Alert {
        let severity = Severity::new(SOS_SEVERITY);
        let title = format!("MANUAL SOS - Vehicle {}", vehicle_id);
        let message = format!(
            "User activated emergency SOS.\n\n{}",
            self.compose_message(vehicle_id, severity, fix)
        );

        let payload = AlertPayload::new(title, message, severity, fix.location)
            .with_actions(recommended_actions())
            .with_advisories(dispatch_advisories());

        Alert::new(vehicle_id.clone(), AlertKind::Sos, payload)
    }

    /// Generate a low-priority alert that exercises the transport wiring
    pub fn generate_test(&self, vehicle_id: &VehicleId, fix: &LocationFix) -> Alert {
        let title = format!("TEST NOTIFICATION - Vehicle {}", vehicle_id);
        let message = format!(
            "Notification system check. No action required.\n\nLocation: {}",
            fix.location
        );

        let payload = AlertPayload::new(title, message, Severity::default(), fix.location);

        Alert::new(vehicle_id.clone(), AlertKind::Test, payload)
    }

    fn compose_message(
        &self,
        vehicle_id: &VehicleId,
        severity: Severity,
        fix: &LocationFix,
    ) -> String {
        format!(
            "Vehicle Accident Detected!\n\n\
             Details:\n\
             - Severity Level: {}\n\
             - Location: {}\n\
             - Time: {}\n\
             - Vehicle ID: {}\n\n\
             Map Link: {}\n\n\
             This is an automated alert from the AcciAlert system.",
            severity,
            fix.location,
            fix.acquired_at.format("%Y-%m-%d %H:%M:%S"),
            vehicle_id,
            fix.location.map_link(),
        )
    }
}

fn recommended_actions() -> Vec<String> {
    vec![
        "Immediate medical assistance".to_string(),
        "Police dispatch".to_string(),
        "Contact emergency contacts".to_string(),
    ]
}

fn dispatch_advisories() -> Vec<String> {
    vec![
        "Emergency contact notified".to_string(),
        "Ambulance alerted".to_string(),
        "Police informed".to_string(),
    ]
}
