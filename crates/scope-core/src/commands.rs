//! Operator commands sent from the frontend to the simulation.
//!
//! Commands are queued and processed at the next tick boundary. The
//! four setters carry the raw input text exactly as typed; numeric
//! validation happens in the engine so a garbage payload can be
//! rejected without mutating any target.

use serde::{Deserialize, Serialize};

use crate::errors::CommandError;

/// All possible operator actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum OperatorCommand {
    /// Select an aircraft for subsequent commands.
    Select { callsign: String },
    /// Clear the current selection. The aircraft itself is untouched.
    Deselect,
    /// Set the target heading of the selected aircraft (degrees).
    SetHeading { input: String },
    /// Set the target altitude of the selected aircraft (feet).
    SetAltitude { input: String },
    /// Set the ground speed of the selected aircraft (knots).
    /// Takes effect immediately, not rate-limited.
    SetSpeed { input: String },
    /// Direct routing: snap the selected aircraft's radius to the
    /// given value (clamped), bypassing gradual radial advance.
    SetDirect { input: String },
    /// Remove an aircraft from the registry, freeing its slot.
    Despawn { callsign: String },
}

/// Parse an operator payload as a finite number.
pub fn parse_numeric(input: &str) -> Result<f64, CommandError> {
    match input.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(CommandError::InvalidInput(input.to_string())),
    }
}
