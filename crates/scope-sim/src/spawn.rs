//! Aircraft spawn factory and registry lookups.
//!
//! Admission is checked here: a spawn attempt against a full registry
//! is rejected without touching the world.

use hecs::{Entity, World};
use rand::seq::SliceRandom;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use scope_core::components::{Callsign, FlightTargets, Kinematics};
use scope_core::constants::CALLSIGN_POOL;
use scope_core::errors::AdmissionRejected;

/// Number of active aircraft in the registry.
pub fn active_count(world: &World) -> usize {
    world.query::<&Callsign>().iter().count()
}

/// Spawn a new aircraft if the registry has a free slot.
///
/// On admission the aircraft gets a uniform random integer heading in
/// [0, 360), the default spawn radius and speed, and a random callsign
/// from the candidate pool. Targets start equal to the current state,
/// so the aircraft holds heading on the deck until commanded.
pub fn spawn_aircraft(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    capacity: usize,
) -> Result<(Entity, Callsign), AdmissionRejected> {
    let active = active_count(world);
    if active >= capacity {
        return Err(AdmissionRejected { active, capacity });
    }

    let heading_deg = rng.gen_range(0..360) as f64;
    let callsign = Callsign(
        CALLSIGN_POOL
            .choose(rng)
            .copied()
            .unwrap_or("UNKNOWN")
            .to_string(),
    );

    let entity = world.spawn((
        callsign.clone(),
        Kinematics::at_spawn(heading_deg),
        FlightTargets::at_spawn(heading_deg),
    ));
    Ok((entity, callsign))
}

/// Resolve a callsign to its entity. Linear scan; the registry is
/// small by construction.
pub fn find_by_callsign(world: &World, callsign: &str) -> Option<Entity> {
    world
        .query::<&Callsign>()
        .iter()
        .find(|(_, cs)| cs.0 == callsign)
        .map(|(entity, _)| entity)
}
