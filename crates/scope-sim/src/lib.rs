//! Simulation engine for RADARSCOPE.
//!
//! Owns the hecs ECS world of aircraft, processes operator commands,
//! runs the motion integrator at a fixed tick rate, and produces
//! ScopeSnapshots for the rendering collaborator.

pub mod engine;
pub mod spawn;
pub mod systems;

pub use engine::ScopeEngine;
pub use scope_core as core;
