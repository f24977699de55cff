//! RADARSCOPE headless runtime.
//!
//! Wires the simulation engine to a scope-loop thread, an operator
//! command channel, and a pluggable render sink standing in for the
//! browser presentation layer.

pub mod render;
pub mod scope_loop;
pub mod state;

pub use scope_core as core;
