//! Snapshot system: queries the world and builds a complete
//! ScopeSnapshot. Read-only — it never modifies the world.

use hecs::{Entity, World};

use scope_core::components::{Callsign, Kinematics};
use scope_core::constants::STATION_FIXES;
use scope_core::events::{Alert, ScopeEvent};
use scope_core::state::{BlipView, FixView, ScopeSnapshot};
use scope_core::types::{screen_position, SimTime, ViewportExtents};

/// Build a complete ScopeSnapshot from the current world state.
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    viewport: &ViewportExtents,
    selected: Option<Entity>,
    alerts: Vec<Alert>,
    events: Vec<ScopeEvent>,
) -> ScopeSnapshot {
    ScopeSnapshot {
        time: *time,
        blips: build_blips(world, viewport, selected),
        fixes: build_fixes(viewport),
        selected: selected_callsign(world, selected),
        alerts,
        events,
    }
}

/// Build the blip list, projecting each aircraft into screen space.
fn build_blips(world: &World, viewport: &ViewportExtents, selected: Option<Entity>) -> Vec<BlipView> {
    let mut blips: Vec<BlipView> = world
        .query::<(&Callsign, &Kinematics)>()
        .iter()
        .map(|(entity, (callsign, kin))| {
            let pos = screen_position(kin.heading_deg, kin.radius, viewport);
            BlipView {
                callsign: callsign.0.clone(),
                x: pos.x,
                y: pos.y,
                heading_deg: kin.heading_deg,
                radius: kin.radius,
                altitude_ft: kin.altitude_ft,
                speed_kts: kin.speed_kts,
                selected: Some(entity) == selected,
            }
        })
        .collect();

    blips.sort_by(|a, b| a.callsign.cmp(&b.callsign));
    blips
}

/// Project the static fix table into screen space.
fn build_fixes(viewport: &ViewportExtents) -> Vec<FixView> {
    STATION_FIXES
        .iter()
        .map(|&(bearing_deg, radius, label)| {
            let pos = screen_position(bearing_deg, radius, viewport);
            FixView {
                label: label.to_string(),
                x: pos.x,
                y: pos.y,
            }
        })
        .collect()
}

/// Resolve the selected entity back to its callsign, if it still exists.
fn selected_callsign(world: &World, selected: Option<Entity>) -> Option<String> {
    let entity = selected?;
    world.get::<&Callsign>(entity).ok().map(|cs| cs.0.clone())
}
