//! Session-scoped state: the simulated GPS fix and the vehicle it belongs to.
//!
//! There is no real telemetry stream; the "live" location is a random
//! perturbation of a fixed origin, overwritten in place on each refresh.
//! The state is owned and passed explicitly so the classifier and notifier
//! stay testable in isolation.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::domain::{GeoLocation, LocationFix, VehicleId};

/// Simulation origin latitude (Bengaluru)
pub const SIM_ORIGIN_LAT: f64 = 12.9716;

/// Simulation origin longitude
pub const SIM_ORIGIN_LON: f64 = 77.5946;

/// Uniform jitter applied to each coordinate on refresh (degrees)
pub const SIM_JITTER_DEG: f64 = 0.01;

/// Simulated GPS source: uniform jitter around a fixed origin.
pub struct GpsSimulator {
    origin: GeoLocation,
    jitter_deg: f64,
    rng: StdRng,
}

impl GpsSimulator {
    /// Create a simulator with entropy-seeded randomness
    pub fn new(origin: GeoLocation, jitter_deg: f64) -> Self {
        Self {
            origin,
            jitter_deg: jitter_deg.max(0.0),
            rng: StdRng::from_entropy(),
        }
    }

    /// Create a deterministic simulator for tests
    pub fn seeded(origin: GeoLocation, jitter_deg: f64, seed: u64) -> Self {
        Self {
            origin,
            jitter_deg: jitter_deg.max(0.0),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// The origin the simulator perturbs around
    pub fn origin(&self) -> GeoLocation {
        self.origin
    }

    /// Produce a new fix: origin plus uniform jitter on each coordinate,
    /// rounded to six decimal places.
    pub fn next_fix(&mut self) -> LocationFix {
        let jitter = self.jitter_deg;
        let location = GeoLocation {
            latitude: self.origin.latitude + self.rng.gen_range(-jitter..=jitter),
            longitude: self.origin.longitude + self.rng.gen_range(-jitter..=jitter),
        }
        .rounded();

        tracing::debug!(
            latitude = location.latitude,
            longitude = location.longitude,
            "Simulated GPS fix acquired"
        );

        LocationFix::new(location)
    }
}

/// Per-session state passed into evaluation and dispatch.
pub struct SessionState {
    vehicle_id: VehicleId,
    simulator: GpsSimulator,
    fix: LocationFix,
}

impl SessionState {
    /// Create a session starting at the simulator's origin
    pub fn new(vehicle_id: VehicleId, simulator: GpsSimulator) -> Self {
        let fix = LocationFix::new(simulator.origin());
        Self {
            vehicle_id,
            simulator,
            fix,
        }
    }

    /// The vehicle this session tracks
    pub fn vehicle_id(&self) -> &VehicleId {
        &self.vehicle_id
    }

    /// The current fix
    pub fn current_fix(&self) -> &LocationFix {
        &self.fix
    }

    /// Acquire a new simulated fix, overwriting the current one
    pub fn refresh_location(&mut self) -> LocationFix {
        self.fix = self.simulator.next_fix();
        self.fix
    }
}
