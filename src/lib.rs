//! # AcciAlert
//!
//! Vehicle accident severity classification and emergency alert dispatch.
//!
//! The crate evaluates telemetry samples (peak acceleration, speed) against
//! a fixed accident threshold and, when an accident is declared, generates a
//! prioritized alert and fans it out to pluggable notification transports.
//! Location is simulated as a random perturbation of a fixed origin; there
//! is no real sensor stream, persistence, or retry.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │                      accialert                      │
//! ├─────────────────────────────────────────────────────┤
//! │  ┌───────────┐   ┌───────────┐   ┌──────────────┐   │
//! │  │ Detection │   │  Session  │   │   Alerting   │   │
//! │  │(classify) │   │ (GPS sim) │   │(gen/dispatch)│   │
//! │  └─────┬─────┘   └─────┬─────┘   └──────┬───────┘   │
//! │        └───────────────┼────────────────┘           │
//! │                ┌───────▼─────────┐                  │
//! │                │ AccidentMonitor │                  │
//! │                └─────────────────┘                  │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust,no_run
//! use accialert::{AccidentMonitor, MonitorConfig, TelemetrySample};
//! use accialert::alerting::ConsoleNotifier;
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = MonitorConfig::builder()
//!         .vehicle_id("VH-2024-001")
//!         .build();
//!
//!     let mut monitor = AccidentMonitor::new(config);
//!     monitor.add_notifier(Box::new(ConsoleNotifier));
//!
//!     let evaluation = monitor.evaluate(TelemetrySample::new(4.2, 80.0)).await;
//!     if evaluation.assessment.is_accident {
//!         for result in evaluation.notifications() {
//!             println!("{}: delivered={}", result.channel, result.delivered);
//!         }
//!     }
//! }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod alerting;
pub mod detection;
pub mod domain;
pub mod session;

use std::time::Duration;

// Re-export main types
pub use alerting::{
    AlertDispatcher, AlertGenerator, ConsoleNotifier, DispatchConfig, DispatchRecord,
    NotificationResult, Notifier, NotifyError, WebhookConfig, WebhookNotifier,
};
pub use detection::SeverityClassifier;
pub use domain::{
    AccidentAssessment, Alert, AlertId, AlertKind, AlertPayload, GeoLocation, ImpactBand,
    LocationFix, Priority, Severity, TelemetrySample, VehicleId,
};
pub use session::{GpsSimulator, SessionState};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common result type for accialert operations
pub type Result<T> = std::result::Result<T, AlertError>;

/// Unified error type for accialert operations
#[derive(Debug, thiserror::Error)]
pub enum AlertError {
    /// Domain invariant violation
    #[error("Domain error: {0}")]
    Domain(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Configuration for the accident monitor
#[derive(Debug, Clone)]
pub struct MonitorConfig {
    /// Identifier reported on every alert
    pub vehicle_id: VehicleId,
    /// Upper bound for one transport attempt
    pub notify_timeout: Duration,
    /// Maximum dispatch records kept for session inspection
    pub history_cap: usize,
    /// Origin the simulated GPS perturbs around
    pub sim_origin: GeoLocation,
    /// Uniform jitter per coordinate on each refresh (degrees)
    pub sim_jitter_deg: f64,
    /// Seed for deterministic location simulation (None = entropy)
    pub rng_seed: Option<u64>,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            vehicle_id: VehicleId::default(),
            notify_timeout: Duration::from_secs(10),
            history_cap: 32,
            sim_origin: GeoLocation {
                latitude: session::SIM_ORIGIN_LAT,
                longitude: session::SIM_ORIGIN_LON,
            },
            sim_jitter_deg: session::SIM_JITTER_DEG,
            rng_seed: None,
        }
    }
}

impl MonitorConfig {
    /// Create a new configuration builder
    pub fn builder() -> MonitorConfigBuilder {
        MonitorConfigBuilder::default()
    }
}

/// Builder for MonitorConfig
#[derive(Debug, Default)]
pub struct MonitorConfigBuilder {
    config: MonitorConfig,
}

impl MonitorConfigBuilder {
    /// Set the vehicle identifier
    pub fn vehicle_id(mut self, id: impl Into<String>) -> Self {
        self.config.vehicle_id = VehicleId::new(id);
        self
    }

    /// Set the per-transport delivery timeout (floored at 100ms)
    pub fn notify_timeout(mut self, timeout: Duration) -> Self {
        self.config.notify_timeout = timeout.max(Duration::from_millis(100));
        self
    }

    /// Set the dispatch history cap (floored at 1)
    pub fn history_cap(mut self, cap: usize) -> Self {
        self.config.history_cap = cap.max(1);
        self
    }

    /// Set the simulation origin
    pub fn sim_origin(mut self, origin: GeoLocation) -> Self {
        self.config.sim_origin = origin;
        self
    }

    /// Set the simulation jitter in degrees (negative clamps to 0)
    pub fn sim_jitter_deg(mut self, jitter: f64) -> Self {
        self.config.sim_jitter_deg = jitter.max(0.0);
        self
    }

    /// Seed the location simulation for deterministic runs
    pub fn rng_seed(mut self, seed: u64) -> Self {
        self.config.rng_seed = Some(seed);
        self
    }

    /// Build the configuration
    pub fn build(self) -> MonitorConfig {
        self.config
    }
}

/// An alert together with the per-transport delivery outcomes
#[derive(Debug, Clone)]
pub struct DispatchOutcome {
    /// The alert that was dispatched
    pub alert: Alert,
    /// Outcome per registered transport, in registration order
    pub notifications: Vec<NotificationResult>,
}

/// Result of evaluating one telemetry sample
#[derive(Debug, Clone)]
pub struct Evaluation {
    /// The deterministic classification of the sample
    pub assessment: AccidentAssessment,
    /// Set iff an accident was declared and an alert was dispatched
    pub dispatch: Option<DispatchOutcome>,
}

impl Evaluation {
    /// Delivery outcomes, empty when no alert was dispatched
    pub fn notifications(&self) -> &[NotificationResult] {
        self.dispatch
            .as_ref()
            .map(|d| d.notifications.as_slice())
            .unwrap_or(&[])
    }
}

/// Main coordinator: classification, session location, alert dispatch.
///
/// Single-threaded, request/response: each evaluation classifies one sample
/// and, conditionally, dispatches one alert, then returns. The session
/// location is overwritten in place on refresh; there are no concurrent
/// writers.
pub struct AccidentMonitor {
    classifier: SeverityClassifier,
    generator: AlertGenerator,
    dispatcher: AlertDispatcher,
    session: SessionState,
}

impl AccidentMonitor {
    /// Create a monitor with no transports registered
    pub fn new(config: MonitorConfig) -> Self {
        let simulator = match config.rng_seed {
            Some(seed) => GpsSimulator::seeded(config.sim_origin, config.sim_jitter_deg, seed),
            None => GpsSimulator::new(config.sim_origin, config.sim_jitter_deg),
        };
        let session = SessionState::new(config.vehicle_id.clone(), simulator);

        let dispatcher = AlertDispatcher::new(DispatchConfig {
            notify_timeout: config.notify_timeout,
            history_cap: config.history_cap,
        });

        Self {
            classifier: SeverityClassifier::new(),
            generator: AlertGenerator::new(),
            dispatcher,
            session,
        }
    }

    /// Register a notification transport
    pub fn add_notifier(&mut self, notifier: Box<dyn Notifier>) {
        self.dispatcher.add_notifier(notifier);
    }

    /// Evaluate a telemetry sample.
    ///
    /// Classifies the sample; when an accident is declared, generates an
    /// alert at the current session location and dispatches it through all
    /// registered transports. Transport failures surface in the returned
    /// notification results, never as an error.
    pub async fn evaluate(&mut self, sample: TelemetrySample) -> Evaluation {
        let assessment = self.classifier.classify(&sample);

        tracing::info!(
            acceleration_g = sample.acceleration_g,
            speed_kph = sample.speed_kph,
            is_accident = assessment.is_accident,
            severity = assessment.severity.value(),
            "Telemetry evaluated"
        );

        if !assessment.is_accident {
            return Evaluation {
                assessment,
                dispatch: None,
            };
        }

        let alert = self.generator.generate_impact(
            self.session.vehicle_id(),
            &assessment,
            self.session.current_fix(),
        );
        let notifications = self.dispatcher.dispatch(alert.clone()).await;

        Evaluation {
            assessment,
            dispatch: Some(DispatchOutcome {
                alert,
                notifications,
            }),
        }
    }

    /// Activate a manual SOS: dispatch an alert at the fixed SOS severity
    /// regardless of telemetry.
    pub async fn sos(&mut self) -> DispatchOutcome {
        let alert = self
            .generator
            .generate_sos(self.session.vehicle_id(), self.session.current_fix());
        let notifications = self.dispatcher.dispatch(alert.clone()).await;

        DispatchOutcome {
            alert,
            notifications,
        }
    }

    /// Send a low-priority test alert through every registered transport
    pub async fn test_notifications(&mut self) -> DispatchOutcome {
        let alert = self
            .generator
            .generate_test(self.session.vehicle_id(), self.session.current_fix());
        let notifications = self.dispatcher.dispatch(alert.clone()).await;

        DispatchOutcome {
            alert,
            notifications,
        }
    }

    /// Acquire a new simulated GPS fix, overwriting the current one
    pub fn refresh_location(&mut self) -> LocationFix {
        self.session.refresh_location()
    }

    /// The current session fix
    pub fn current_location(&self) -> &LocationFix {
        self.session.current_fix()
    }

    /// Dispatch records for this session, oldest first
    pub fn history(&self) -> Vec<DispatchRecord> {
        self.dispatcher.history()
    }
}

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        AccidentMonitor, AlertError, DispatchOutcome, Evaluation, MonitorConfig,
        MonitorConfigBuilder, Result,
        // Domain types
        AccidentAssessment, Alert, AlertKind, GeoLocation, ImpactBand, LocationFix, Priority,
        Severity, TelemetrySample, VehicleId,
        // Detection
        SeverityClassifier,
        // Alerting
        AlertDispatcher, AlertGenerator, ConsoleNotifier, NotificationResult, Notifier,
        WebhookNotifier,
    };
}
