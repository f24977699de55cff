use std::io::BufRead;

use scope_app::render::JsonLineSink;
use scope_app::scope_loop;
use scope_app::state::{AppState, LoopCommand};
use scope_core::commands::OperatorCommand;
use scope_sim::engine::ScopeConfig;

/// Headless scope runner: snapshots stream to stdout as JSON lines,
/// operator commands are read from stdin as JSON lines, e.g.
/// `{"type":"Select","callsign":"AAL695"}`.
fn main() {
    env_logger::init();

    let state = AppState::new();
    let cmd_tx = scope_loop::spawn_scope_loop(
        ScopeConfig::default(),
        Box::new(JsonLineSink),
        state.latest_snapshot.clone(),
    );
    if let Err(err) = state.attach_loop(cmd_tx) {
        log::error!("failed to start scope loop: {err}");
        return;
    }

    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        let Ok(line) = line else { break };
        if line.trim().is_empty() {
            continue;
        }
        match serde_json::from_str::<OperatorCommand>(&line) {
            Ok(command) => {
                if state.send(LoopCommand::Operator(command)).is_err() {
                    break;
                }
            }
            Err(err) => log::warn!("unparseable command {line:?}: {err}"),
        }
    }

    let _ = state.send(LoopCommand::Shutdown);
}
