//! Render sink — the seam between the simulation and whatever draws it.
//!
//! The browser frontend is out of scope here; the loop thread feeds
//! whichever sink it is given once per tick. Sinks must not fail.

use scope_core::events::ScopeEvent;
use scope_core::state::ScopeSnapshot;

/// Consumer of per-tick simulation output.
pub trait RenderSink: Send {
    /// An aircraft's screen position was recomputed this tick.
    fn aircraft_updated(&mut self, callsign: &str, x: f64, y: f64);

    /// An aircraft's altitude readout changed this tick.
    fn altitude_changed(&mut self, callsign: &str, altitude_ft: f64);

    /// The selection changed; `None` means nothing is selected.
    fn selection_changed(&mut self, callsign: Option<&str>);

    /// Full snapshot hook, called once per tick after the per-blip
    /// notifications. Default implementation ignores it.
    fn snapshot(&mut self, _snapshot: &ScopeSnapshot) {}
}

/// Feed one snapshot through a sink's notification methods.
pub fn dispatch(sink: &mut dyn RenderSink, snapshot: &ScopeSnapshot) {
    for blip in &snapshot.blips {
        sink.aircraft_updated(&blip.callsign, blip.x, blip.y);
        sink.altitude_changed(&blip.callsign, blip.altitude_ft);
    }
    for event in &snapshot.events {
        if let ScopeEvent::SelectionChanged { callsign } = event {
            sink.selection_changed(callsign.as_deref());
        }
    }
    sink.snapshot(snapshot);
}

/// Sink that writes each snapshot as one JSON line to stdout, for a
/// frontend (or a human) reading the process's output stream.
#[derive(Debug, Default)]
pub struct JsonLineSink;

impl RenderSink for JsonLineSink {
    fn aircraft_updated(&mut self, _callsign: &str, _x: f64, _y: f64) {}

    fn altitude_changed(&mut self, _callsign: &str, _altitude_ft: f64) {}

    fn selection_changed(&mut self, callsign: Option<&str>) {
        log::info!("selection: {}", callsign.unwrap_or("none"));
    }

    fn snapshot(&mut self, snapshot: &ScopeSnapshot) {
        match serde_json::to_string(snapshot) {
            Ok(json) => println!("{json}"),
            Err(err) => log::error!("snapshot serialization failed: {err}"),
        }
    }
}
