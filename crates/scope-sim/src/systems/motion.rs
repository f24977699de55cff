//! Motion integration system.
//!
//! Advances each aircraft's heading, radius, and altitude one step
//! toward its targets. Fixed per-tick step sizes keep convergence
//! deterministic: a target is reached in exactly
//! `ceil(|delta| / step)` ticks with no overshoot.

use hecs::World;

use scope_core::components::{FlightTargets, Kinematics};
use scope_core::constants::{
    CLIMB_RATE_FT, KTS_TO_RADIUS_DIVISOR, TICK_PERIOD_MS, TURN_RATE_DEG,
};

/// Run motion integration for all aircraft.
pub fn run(world: &mut World) {
    for (_entity, (kin, targets)) in world.query_mut::<(&mut Kinematics, &FlightTargets)>() {
        converge_heading(kin, targets);
        advance_radius(kin);
        converge_altitude(kin, targets);
    }
}

/// Step heading toward the target by at most TURN_RATE_DEG per tick.
/// No modulo wraparound: a target across the 0/360 seam takes the
/// long way around unless the operator picks the shorter-path value.
fn converge_heading(kin: &mut Kinematics, targets: &FlightTargets) {
    let delta = targets.heading_deg - kin.heading_deg;
    if delta != 0.0 {
        kin.heading_deg += delta.signum() * delta.abs().min(TURN_RATE_DEG);
    }
}

/// Advance the radius outward by this tick's distance travelled.
/// Radius only grows on this path; it shrinks only via an explicit
/// direct-routing command. A non-positive commanded speed holds the
/// radius rather than pulling the aircraft back inward.
fn advance_radius(kin: &mut Kinematics) {
    let distance = kin.speed_kts * TICK_PERIOD_MS as f64 / KTS_TO_RADIUS_DIVISOR;
    if distance > 0.0 {
        kin.set_radius(kin.radius + distance);
    }
}

/// Step altitude toward the target by at most CLIMB_RATE_FT per tick,
/// landing exactly on the target.
fn converge_altitude(kin: &mut Kinematics, targets: &FlightTargets) {
    let delta = targets.altitude_ft - kin.altitude_ft;
    if delta != 0.0 {
        kin.altitude_ft += delta.signum() * delta.abs().min(CLIMB_RATE_FT);
    }
}
