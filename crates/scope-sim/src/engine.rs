//! Simulation engine — the core of the scope.
//!
//! `ScopeEngine` owns the hecs ECS world, processes operator commands,
//! runs the motion integrator, and produces `ScopeSnapshot`s.
//! Completely headless, enabling deterministic testing.

use std::collections::VecDeque;

use hecs::{Entity, World};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use scope_core::commands::{parse_numeric, OperatorCommand};
use scope_core::components::{Callsign, FlightTargets, Kinematics};
use scope_core::constants::DEFAULT_CAPACITY;
use scope_core::errors::{AdmissionRejected, CommandError};
use scope_core::events::{Alert, ScopeEvent};
use scope_core::state::ScopeSnapshot;
use scope_core::types::{SimTime, ViewportExtents};

use crate::spawn;
use crate::systems;

/// Configuration for starting a new simulation.
pub struct ScopeConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    /// Registry capacity: spawn attempts beyond this are rejected.
    pub capacity: usize,
    /// Initial display dimensions; updated on resize.
    pub viewport: ViewportExtents,
}

impl Default for ScopeConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            capacity: DEFAULT_CAPACITY,
            viewport: ViewportExtents::default(),
        }
    }
}

/// The simulation engine. Owns the ECS world and all sim state.
pub struct ScopeEngine {
    world: World,
    time: SimTime,
    capacity: usize,
    viewport: ViewportExtents,
    rng: ChaCha8Rng,
    selected: Option<Entity>,
    command_queue: VecDeque<OperatorCommand>,
    alerts: Vec<Alert>,
    events: Vec<ScopeEvent>,
}

impl ScopeEngine {
    /// Create a new engine with the given config.
    pub fn new(config: ScopeConfig) -> Self {
        Self {
            world: World::new(),
            time: SimTime::default(),
            capacity: config.capacity,
            viewport: config.viewport,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            selected: None,
            command_queue: VecDeque::new(),
            alerts: Vec::new(),
            events: Vec::new(),
        }
    }

    /// Queue an operator command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: OperatorCommand) {
        self.command_queue.push_back(command);
    }

    /// Update the display dimensions (resize).
    pub fn set_viewport(&mut self, viewport: ViewportExtents) {
        self.viewport = viewport;
    }

    /// Attempt to admit a new aircraft. Called by the external spawn
    /// trigger; a rejection is surfaced as an event and an alert.
    pub fn spawn_aircraft(&mut self) -> Result<Callsign, AdmissionRejected> {
        match spawn::spawn_aircraft(&mut self.world, &mut self.rng, self.capacity) {
            Ok((_, callsign)) => {
                self.events.push(ScopeEvent::AircraftSpawned {
                    callsign: callsign.0.clone(),
                });
                Ok(callsign)
            }
            Err(rejected) => {
                log::warn!("{rejected}");
                self.events.push(ScopeEvent::SpawnRejected {
                    active: rejected.active,
                    capacity: rejected.capacity,
                });
                self.push_alert(rejected.to_string());
                Err(rejected)
            }
        }
    }

    /// Advance the simulation by one tick and return the resulting snapshot.
    pub fn tick(&mut self) -> ScopeSnapshot {
        self.process_commands();
        systems::motion::run(&mut self.world);
        self.time.advance();

        let alerts = std::mem::take(&mut self.alerts);
        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(
            &self.world,
            &self.time,
            &self.viewport,
            self.selected,
            alerts,
            events,
        )
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Callsign of the currently selected aircraft, if any.
    pub fn selected_callsign(&self) -> Option<String> {
        self.selected
            .and_then(|e| self.world.get::<&Callsign>(e).ok().map(|cs| cs.0.clone()))
    }

    /// Process all queued commands. Failures become operator alerts.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            if let Err(err) = self.apply_command(command) {
                log::warn!("command rejected: {err}");
                self.push_alert(err.to_string());
            }
        }
    }

    /// Apply a single operator command immediately.
    ///
    /// Setters mutate only the selected aircraft's targets (or, for
    /// speed and direct routing, its current state); on any error the
    /// simulation is left unchanged.
    pub fn apply_command(&mut self, command: OperatorCommand) -> Result<(), CommandError> {
        match command {
            OperatorCommand::Select { callsign } => {
                let entity = spawn::find_by_callsign(&self.world, &callsign)
                    .ok_or(CommandError::NotFound(callsign.clone()))?;
                self.selected = Some(entity);
                self.events.push(ScopeEvent::SelectionChanged {
                    callsign: Some(callsign),
                });
            }
            OperatorCommand::Deselect => {
                if self.selected.take().is_some() {
                    self.events
                        .push(ScopeEvent::SelectionChanged { callsign: None });
                }
            }
            OperatorCommand::SetHeading { input } => {
                let entity = self.require_selection()?;
                let value = parse_numeric(&input)?;
                if let Ok(mut targets) = self.world.get::<&mut FlightTargets>(entity) {
                    targets.heading_deg = value;
                }
            }
            OperatorCommand::SetAltitude { input } => {
                let entity = self.require_selection()?;
                let value = parse_numeric(&input)?;
                if let Ok(mut targets) = self.world.get::<&mut FlightTargets>(entity) {
                    // Negative targets are floored: aircraft never go underground.
                    targets.altitude_ft = value.max(0.0);
                }
            }
            OperatorCommand::SetSpeed { input } => {
                let entity = self.require_selection()?;
                let value = parse_numeric(&input)?;
                if let Ok(mut kin) = self.world.get::<&mut Kinematics>(entity) {
                    kin.speed_kts = value;
                }
            }
            OperatorCommand::SetDirect { input } => {
                let entity = self.require_selection()?;
                let value = parse_numeric(&input)?;
                if let Ok(mut kin) = self.world.get::<&mut Kinematics>(entity) {
                    kin.set_radius(value);
                }
            }
            OperatorCommand::Despawn { callsign } => {
                let entity = spawn::find_by_callsign(&self.world, &callsign)
                    .ok_or(CommandError::NotFound(callsign.clone()))?;
                if self.selected == Some(entity) {
                    self.selected = None;
                    self.events
                        .push(ScopeEvent::SelectionChanged { callsign: None });
                }
                let _ = self.world.despawn(entity);
                self.events
                    .push(ScopeEvent::AircraftDespawned { callsign });
            }
        }
        Ok(())
    }

    /// Resolve the current selection, dropping it if the aircraft has
    /// been despawned since it was selected.
    fn require_selection(&mut self) -> Result<Entity, CommandError> {
        match self.selected {
            Some(entity) if self.world.contains(entity) => Ok(entity),
            Some(_) => {
                self.selected = None;
                Err(CommandError::NoSelection)
            }
            None => Err(CommandError::NoSelection),
        }
    }

    fn push_alert(&mut self, message: String) {
        self.alerts.push(Alert {
            message,
            tick: self.time.tick,
        });
    }
}
