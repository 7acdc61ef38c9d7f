//! Domain module containing core entities and value objects.
//!
//! - **Entities**: Objects with identity (Alert)
//! - **Value Objects**: Immutable objects without identity
//!   (TelemetrySample, AccidentAssessment, GeoLocation, NotificationResult)
//!
//! Everything here is created, read, and discarded within a single
//! evaluation; nothing has a multi-step lifecycle.

pub mod alert;
pub mod assessment;
pub mod location;
pub mod telemetry;

// Re-export all domain types
pub use alert::*;
pub use assessment::*;
pub use location::*;
pub use telemetry::*;
