//! Scope snapshot — the complete visible state sent to the rendering
//! collaborator each tick.

use serde::{Deserialize, Serialize};

use crate::events::{Alert, ScopeEvent};
use crate::types::SimTime;

/// Complete scope state broadcast to the frontend after each tick.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScopeSnapshot {
    pub time: SimTime,
    /// Active aircraft, sorted by callsign for deterministic output.
    pub blips: Vec<BlipView>,
    /// Static navigation fixes, pre-projected into screen space.
    pub fixes: Vec<FixView>,
    /// Callsign of the selected aircraft, if any.
    pub selected: Option<String>,
    pub alerts: Vec<Alert>,
    pub events: Vec<ScopeEvent>,
}

/// A visible aircraft on the scope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlipView {
    pub callsign: String,
    /// Screen position (pixels).
    pub x: f64,
    pub y: f64,
    /// Current heading (compass degrees).
    pub heading_deg: f64,
    /// Normalized radial distance from scope center.
    pub radius: f64,
    /// Altitude (feet).
    pub altitude_ft: f64,
    /// Ground speed (knots).
    pub speed_kts: f64,
    pub selected: bool,
}

/// A static navigation fix marker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixView {
    pub label: String,
    pub x: f64,
    pub y: f64,
}
