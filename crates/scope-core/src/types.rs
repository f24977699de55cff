//! Fundamental time and screen-geometry types.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::constants::{DISPLAY_SCALE_DIVISOR, TICK_PERIOD_MS};

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Elapsed simulation time in milliseconds.
    pub elapsed_ms: u64,
}

impl SimTime {
    /// Advance by one tick.
    pub fn advance(&mut self) {
        self.tick += 1;
        self.elapsed_ms += TICK_PERIOD_MS;
    }
}

/// Dimensions of the display the rendering collaborator draws into.
/// The simulation only needs them to project blips into screen space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewportExtents {
    pub width: f64,
    pub height: f64,
}

impl Default for ViewportExtents {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 800.0,
        }
    }
}

impl ViewportExtents {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Center of the scope in screen coordinates.
    pub fn center(&self) -> DVec2 {
        DVec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Pixels per unit of normalized radius.
    pub fn display_scale(&self) -> f64 {
        self.width.min(self.height) / DISPLAY_SCALE_DIVISOR
    }
}

/// Project a compass bearing and normalized radius into screen space.
///
/// The -90 degree offset maps compass convention (0 = up, clockwise)
/// onto the screen/math angle convention.
pub fn screen_position(heading_deg: f64, radius: f64, viewport: &ViewportExtents) -> DVec2 {
    let radian = (heading_deg - 90.0).to_radians();
    let center = viewport.center();
    let scale = viewport.display_scale();
    DVec2::new(
        center.x + radius * scale * radian.cos(),
        center.y + radius * scale * radian.sin(),
    )
}
