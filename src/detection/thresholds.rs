//! Centralized accident detection thresholds.
//!
//! All thresholds are compile-time constants with validation assertions,
//! so an inconsistent configuration (e.g. advisory band above the accident
//! threshold) fails to compile.

/// Acceleration where the advisory band turns elevated (3.5-4.0 g = warning).
/// Below this value, no advisory is shown.
pub const IMPACT_ELEVATED_G: f64 = 3.5;

/// Acceleration at or above which an accident is declared (>= 4.0 g).
/// This single threshold is the entire state machine: two states,
/// ACCIDENT and NORMAL, with one transition at the crossing.
pub const ACCIDENT_THRESHOLD_G: f64 = 4.0;

// Compile-time validation: advisory band sits below the accident threshold
const _: () = assert!(IMPACT_ELEVATED_G < ACCIDENT_THRESHOLD_G);

/// Divisor in the severity scale: `severity = min(10, floor(g * kph / 20))`.
pub const SEVERITY_DIVISOR: f64 = 20.0;

/// Fixed severity dispatched for a manual SOS.
pub const SOS_SEVERITY: u8 = 8;

/// Upper bound of the slider feeding acceleration (g). Informational only;
/// the classifier imposes no hard bound.
pub const UI_MAX_ACCELERATION_G: f64 = 10.0;

/// Upper bound of the slider feeding speed (km/h). Informational only.
pub const UI_MAX_SPEED_KPH: f64 = 150.0;

const _: () = assert!(ACCIDENT_THRESHOLD_G < UI_MAX_ACCELERATION_G);
