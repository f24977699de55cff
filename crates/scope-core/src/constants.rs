//! Simulation constants and tuning parameters.

/// Motion integrator tick period in milliseconds.
pub const TICK_PERIOD_MS: u64 = 100;

/// Spawn trigger period in milliseconds.
pub const SPAWN_PERIOD_MS: u64 = 3000;

/// Maximum heading change per tick (degrees).
pub const TURN_RATE_DEG: f64 = 1.0;

/// Maximum altitude change per tick (feet).
pub const CLIMB_RATE_FT: f64 = 100.0;

// --- Radial bounds ---

/// Inner radius bound (normalized display units).
pub const MIN_RADIUS: f64 = 0.1;

/// Outer radius bound (normalized display units).
pub const MAX_RADIUS: f64 = 1.0;

/// Radius at which new aircraft appear.
pub const SPAWN_RADIUS: f64 = 0.5;

/// Ground speed assigned at spawn (knots).
pub const DEFAULT_SPEED_KTS: f64 = 100.0;

/// Default registry capacity (single-aircraft scope).
pub const DEFAULT_CAPACITY: usize = 1;

/// Knots to normalized-radius-per-millisecond divisor.
/// `radius_per_tick = speed_kts * TICK_PERIOD_MS / KTS_TO_RADIUS_DIVISOR`,
/// calibrated to the display scale below.
pub const KTS_TO_RADIUS_DIVISOR: f64 = 3_600_000.0;

/// Display scale divisor: `scale = min(width, height) / 2.5`.
pub const DISPLAY_SCALE_DIVISOR: f64 = 2.5;

/// Candidate callsign pool for spawned aircraft. Picks are uniform
/// random and may repeat across concurrent spawns.
pub const CALLSIGN_POOL: &[&str] = &["SKW3459", "AAL695"];

/// Station fix on the scope: bearing (degrees), normalized radius, label.
/// Fixed navigation markers projected into every snapshot for the
/// rendering collaborator.
pub const STATION_FIXES: &[(f64, f64, &str)] = &[
    (178.0, 0.9, "KLBB"),
    (263.0, 0.9, "KABQ"),
    (80.0, 0.9, "KOKC"),
    (329.0, 0.9, "KDEN"),
    (145.0, 0.9, "DUMPS"),
    (38.0, 0.7, "Runway 4/22 End"),
    (218.0, 0.7, "Runway 4/22 Opposite End"),
    (129.0, 0.5, "Runway 13/31 End"),
    (309.0, 0.5, "Runway 13/31 Opposite End"),
    (27.0, 1.0, "KPYX"),
    (228.0, 1.0, "RAVEE"),
    (111.0, 1.0, "MDANO"),
    (50.0, 1.0, "KPPA"),
    (283.0, 1.0, "MIRME"),
];
