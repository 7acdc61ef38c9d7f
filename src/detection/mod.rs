//! Accident detection: threshold constants and the severity classifier.

mod classifier;
pub mod thresholds;

pub use classifier::SeverityClassifier;
