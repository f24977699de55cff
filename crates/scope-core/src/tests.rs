#[cfg(test)]
mod tests {
    use crate::commands::{parse_numeric, OperatorCommand};
    use crate::components::{Callsign, FlightTargets, Kinematics};
    use crate::constants::*;
    use crate::errors::CommandError;
    use crate::events::ScopeEvent;
    use crate::state::ScopeSnapshot;
    use crate::types::{screen_position, SimTime, ViewportExtents};

    /// Verify OperatorCommand round-trips through serde (tagged union).
    #[test]
    fn test_operator_command_serde() {
        let commands = vec![
            OperatorCommand::Select {
                callsign: "AAL695".into(),
            },
            OperatorCommand::Deselect,
            OperatorCommand::SetHeading { input: "270".into() },
            OperatorCommand::SetAltitude { input: "5000".into() },
            OperatorCommand::SetSpeed { input: "250".into() },
            OperatorCommand::SetDirect { input: "0.4".into() },
            OperatorCommand::Despawn {
                callsign: "SKW3459".into(),
            },
        ];
        for cmd in &commands {
            let json = serde_json::to_string(cmd).unwrap();
            let back: OperatorCommand = serde_json::from_str(&json).unwrap();
            // Compare JSON since OperatorCommand doesn't derive PartialEq
            assert_eq!(json, serde_json::to_string(&back).unwrap());
        }
    }

    #[test]
    fn test_scope_event_serde() {
        let events = vec![
            ScopeEvent::AircraftSpawned {
                callsign: "AAL695".into(),
            },
            ScopeEvent::AircraftDespawned {
                callsign: "AAL695".into(),
            },
            ScopeEvent::SelectionChanged { callsign: None },
            ScopeEvent::SpawnRejected {
                active: 1,
                capacity: 1,
            },
        ];
        for event in &events {
            let json = serde_json::to_string(event).unwrap();
            let back: ScopeEvent = serde_json::from_str(&json).unwrap();
            assert_eq!(*event, back);
        }
    }

    /// Verify ScopeSnapshot can be serialized to JSON.
    #[test]
    fn test_snapshot_serde() {
        let snapshot = ScopeSnapshot::default();
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: ScopeSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snapshot, back);
        assert!(
            json.len() < 1024,
            "Empty snapshot should be <1KB, was {} bytes",
            json.len()
        );
    }

    #[test]
    fn test_parse_numeric_accepts_finite() {
        assert_eq!(parse_numeric("90").unwrap(), 90.0);
        assert_eq!(parse_numeric(" -3.5 ").unwrap(), -3.5);
    }

    #[test]
    fn test_parse_numeric_rejects_garbage() {
        for input in ["abc", "", "NaN", "inf", "12abc"] {
            assert_eq!(
                parse_numeric(input),
                Err(CommandError::InvalidInput(input.to_string())),
                "{input:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_kinematics_at_spawn() {
        let kin = Kinematics::at_spawn(42.0);
        assert_eq!(kin.heading_deg, 42.0);
        assert_eq!(kin.radius, SPAWN_RADIUS);
        assert_eq!(kin.altitude_ft, 0.0);
        assert_eq!(kin.speed_kts, DEFAULT_SPEED_KTS);

        let targets = FlightTargets::at_spawn(42.0);
        assert_eq!(targets.heading_deg, 42.0);
        assert_eq!(targets.altitude_ft, 0.0);
    }

    #[test]
    fn test_set_radius_clamps() {
        let mut kin = Kinematics::at_spawn(0.0);
        kin.set_radius(1.5);
        assert_eq!(kin.radius, MAX_RADIUS);
        kin.set_radius(-2.0);
        assert_eq!(kin.radius, MIN_RADIUS);
        kin.set_radius(0.37);
        assert_eq!(kin.radius, 0.37);
    }

    #[test]
    fn test_sim_time_advance() {
        let mut time = SimTime::default();
        for _ in 0..30 {
            time.advance();
        }
        assert_eq!(time.tick, 30);
        assert_eq!(time.elapsed_ms, 30 * TICK_PERIOD_MS);
    }

    #[test]
    fn test_display_scale() {
        let viewport = ViewportExtents::new(1000.0, 500.0);
        assert_eq!(viewport.display_scale(), 500.0 / DISPLAY_SCALE_DIVISOR);
        assert_eq!(viewport.center().x, 500.0);
        assert_eq!(viewport.center().y, 250.0);
    }

    /// Compass-to-screen projection: heading 0 is straight up from
    /// center, heading 90 is due right.
    #[test]
    fn test_screen_position_compass_convention() {
        let viewport = ViewportExtents::new(1000.0, 1000.0);
        let center = viewport.center();
        let scale = viewport.display_scale();

        let up = screen_position(0.0, 0.5, &viewport);
        assert!((up.x - center.x).abs() < 1e-9);
        assert!((up.y - (center.y - 0.5 * scale)).abs() < 1e-9);

        let right = screen_position(90.0, 0.5, &viewport);
        assert!((right.x - (center.x + 0.5 * scale)).abs() < 1e-9);
        assert!((right.y - center.y).abs() < 1e-9);
    }

    #[test]
    fn test_callsign_display() {
        let cs = Callsign("SKW3459".into());
        assert_eq!(cs.to_string(), "SKW3459");
    }

    #[test]
    fn test_station_fix_table() {
        assert_eq!(STATION_FIXES.len(), 14);
        assert!(STATION_FIXES.iter().any(|(_, _, label)| *label == "MIRME"));
        for (_, radius, label) in STATION_FIXES {
            assert!(*radius >= MIN_RADIUS && *radius <= MAX_RADIUS);
            assert!(!label.is_empty());
        }
    }
}
