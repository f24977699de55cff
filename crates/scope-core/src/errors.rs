//! Error taxonomy. Nothing here is fatal: every error is recovered at
//! the point of origin and surfaced to the operator or logged.

use thiserror::Error;

/// Failures of operator commands. Reported back to the operator; the
/// simulation state is left unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    /// A setter was issued with no aircraft selected.
    #[error("no aircraft selected")]
    NoSelection,
    /// A callsign did not resolve to an active aircraft.
    #[error("no aircraft with callsign {0}")]
    NotFound(String),
    /// The command payload did not parse as a finite number.
    #[error("not a number: {0:?}")]
    InvalidInput(String),
}

/// Spawn admission failure: the registry is at capacity. The spawn
/// attempt is dropped; the periodic trigger will retry on its own
/// schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("registry at capacity ({active}/{capacity} active)")]
pub struct AdmissionRejected {
    pub active: usize,
    pub capacity: usize,
}
