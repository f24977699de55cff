//! ECS components for hecs aircraft entities.
//!
//! Components are plain data structs with no methods. Simulation
//! logic lives in systems, not components.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_SPEED_KTS, MAX_RADIUS, MIN_RADIUS, SPAWN_RADIUS};

/// Aircraft identifier, drawn from the candidate pool at spawn.
/// Unique for the aircraft's lifetime within the registry, but the
/// pool may repeat across concurrent spawns.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Callsign(pub String);

impl std::fmt::Display for Callsign {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Current kinematic state, advanced once per tick by the motion system.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Kinematics {
    /// Direction of travel in compass degrees. Not normalized to
    /// [0, 360); targets across the 0/360 seam turn the long way.
    pub heading_deg: f64,
    /// Normalized radial distance from scope center, always within
    /// [MIN_RADIUS, MAX_RADIUS].
    pub radius: f64,
    /// Altitude in feet.
    pub altitude_ft: f64,
    /// Ground speed in knots. No target/current split; speed commands
    /// take effect immediately.
    pub speed_kts: f64,
}

impl Kinematics {
    /// Kinematics for a freshly spawned aircraft at the given heading.
    pub fn at_spawn(heading_deg: f64) -> Self {
        Self {
            heading_deg,
            radius: SPAWN_RADIUS,
            altitude_ft: 0.0,
            speed_kts: DEFAULT_SPEED_KTS,
        }
    }

    /// Write the radius, clamping into the legal band.
    pub fn set_radius(&mut self, radius: f64) {
        self.radius = radius.clamp(MIN_RADIUS, MAX_RADIUS);
    }
}

/// Operator setpoints the motion system converges toward.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FlightTargets {
    /// Commanded heading in degrees. May be any finite value; the
    /// integrator steps toward it without wraparound.
    pub heading_deg: f64,
    /// Commanded altitude in feet, floored at 0 when set.
    pub altitude_ft: f64,
}

impl FlightTargets {
    /// Targets for a freshly spawned aircraft: hold current heading,
    /// remain on the deck.
    pub fn at_spawn(heading_deg: f64) -> Self {
        Self {
            heading_deg,
            altitude_ft: 0.0,
        }
    }
}
