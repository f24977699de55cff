//! Events emitted by the simulation for frontend feedback.

use serde::{Deserialize, Serialize};

/// Notifications for the rendering and status-readout collaborators,
/// drained into each snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ScopeEvent {
    /// A new aircraft entered the scope.
    AircraftSpawned { callsign: String },
    /// An aircraft was removed from the scope.
    AircraftDespawned { callsign: String },
    /// The selection changed; `None` means nothing is selected.
    SelectionChanged { callsign: Option<String> },
    /// A spawn attempt was rejected at the capacity check.
    SpawnRejected { active: usize, capacity: usize },
}

/// Operator-visible alert (rejected command, admission refusal).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    pub message: String,
    pub tick: u64,
}
