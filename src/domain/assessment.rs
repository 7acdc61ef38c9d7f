//! Accident assessment value objects.

/// Severity score in [0, 10] summarizing impact magnitude.
///
/// The constructor saturates into the valid range, so a raw value below 0
/// becomes 0 and a raw value above 10 becomes 10.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct Severity(u8);

impl Severity {
    /// Maximum severity value
    pub const MAX: u8 = 10;

    /// Create a severity score, saturated to [0, 10]
    pub fn new(value: u8) -> Self {
        Self(value.min(Self::MAX))
    }

    /// Create a severity score from a raw scale value, saturated to [0, 10].
    ///
    /// Non-finite input maps to 0.
    pub fn from_scale(raw: f64) -> Self {
        if raw.is_nan() {
            return Self(0);
        }
        Self(raw.floor().clamp(0.0, Self::MAX as f64) as u8)
    }

    /// Get the numeric value
    pub fn value(&self) -> u8 {
        self.0
    }

    /// Check if this is the maximum severity
    pub fn is_maximal(&self) -> bool {
        self.0 == Self::MAX
    }
}

impl Default for Severity {
    fn default() -> Self {
        Self(0)
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/10", self.0)
    }
}

/// Advisory impact band shown to the driver before detection runs.
///
/// Purely informational: the band never changes what `classify` returns,
/// it mirrors the warning copy the dashboard displays as acceleration
/// approaches the accident threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum ImpactBand {
    /// Below the elevated threshold, no advisory
    Normal,
    /// High g-force, approaching the danger threshold
    Elevated,
    /// At or above the accident threshold
    Critical,
}

impl ImpactBand {
    /// Advisory text for this band, if any
    pub fn advisory(&self) -> Option<&'static str> {
        match self {
            ImpactBand::Normal => None,
            ImpactBand::Elevated => {
                Some("High G-force detected. Approaching danger threshold.")
            }
            ImpactBand::Critical => {
                Some("Acceleration exceeds 4.0G! Accident likely on detection.")
            }
        }
    }
}

impl std::fmt::Display for ImpactBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ImpactBand::Normal => write!(f, "NORMAL"),
            ImpactBand::Elevated => write!(f, "ELEVATED"),
            ImpactBand::Critical => write!(f, "CRITICAL"),
        }
    }
}

/// Result of classifying a telemetry sample.
///
/// Derived deterministically from a [`TelemetrySample`](super::TelemetrySample)
/// and immutable once produced.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AccidentAssessment {
    /// Whether an accident was declared
    pub is_accident: bool,
    /// Severity score (always 0 when no accident was declared)
    pub severity: Severity,
    /// Advisory impact band for the sample
    pub band: ImpactBand,
}

impl AccidentAssessment {
    /// Assessment for a sample below the accident threshold
    pub fn normal(band: ImpactBand) -> Self {
        Self {
            is_accident: false,
            severity: Severity::default(),
            band,
        }
    }

    /// Assessment for a declared accident
    pub fn accident(severity: Severity) -> Self {
        Self {
            is_accident: true,
            severity,
            band: ImpactBand::Critical,
        }
    }
}
