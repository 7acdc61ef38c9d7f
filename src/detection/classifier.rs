//! Severity classification from telemetry samples.

use crate::domain::{AccidentAssessment, ImpactBand, Severity, TelemetrySample};

use super::thresholds::{ACCIDENT_THRESHOLD_G, IMPACT_ELEVATED_G, SEVERITY_DIVISOR};

/// Classifier mapping a telemetry sample to an accident assessment.
///
/// Pure and total: identical inputs always produce identical output, and no
/// numeric input (including negatives or NaN, which the UI-bounded domain
/// never produces) can make it fail. An accident is declared when
/// acceleration reaches [`ACCIDENT_THRESHOLD_G`]; severity is the saturating
/// linear scale `min(10, floor(acceleration_g * speed_kph / 20))`.
///
/// The degenerate edge at exactly 4.0 g with zero speed yields severity 0
/// for a declared accident; that is the contract, not a bug to fix.
#[derive(Debug, Clone, Copy, Default)]
pub struct SeverityClassifier;

impl SeverityClassifier {
    /// Create a new classifier
    pub fn new() -> Self {
        Self
    }

    /// Classify a telemetry sample
    pub fn classify(&self, sample: &TelemetrySample) -> AccidentAssessment {
        if sample.acceleration_g >= ACCIDENT_THRESHOLD_G {
            let raw = sample.acceleration_g * sample.speed_kph / SEVERITY_DIVISOR;
            AccidentAssessment::accident(Severity::from_scale(raw))
        } else {
            AccidentAssessment::normal(self.band(sample.acceleration_g))
        }
    }

    /// Advisory impact band for an acceleration value
    pub fn band(&self, acceleration_g: f64) -> ImpactBand {
        if acceleration_g >= ACCIDENT_THRESHOLD_G {
            ImpactBand::Critical
        } else if acceleration_g >= IMPACT_ELEVATED_G {
            ImpactBand::Elevated
        } else {
            ImpactBand::Normal
        }
    }
}
