//! Scope-loop thread — runs the engine at the 100 ms tick period and
//! fires the spawn trigger every 3000 ms.
//!
//! The engine is created inside the thread because it's cleaner for
//! ownership. Commands arrive via `mpsc` channel; each tick's snapshot
//! goes to the render sink and into shared state for polling.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use scope_core::constants::{SPAWN_PERIOD_MS, TICK_PERIOD_MS};
use scope_core::state::ScopeSnapshot;
use scope_sim::engine::{ScopeConfig, ScopeEngine};

use crate::render::{self, RenderSink};
use crate::state::LoopCommand;

/// Nominal duration of one tick.
const TICK_DURATION: Duration = Duration::from_millis(TICK_PERIOD_MS);

/// Ticks between spawn attempts.
const TICKS_PER_SPAWN: u64 = SPAWN_PERIOD_MS / TICK_PERIOD_MS;

/// Spawns the scope loop in a new thread.
///
/// Returns the command sender for the operator side to use.
pub fn spawn_scope_loop(
    config: ScopeConfig,
    sink: Box<dyn RenderSink>,
    latest_snapshot: Arc<Mutex<Option<ScopeSnapshot>>>,
) -> mpsc::Sender<LoopCommand> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<LoopCommand>();

    std::thread::Builder::new()
        .name("scope-loop".into())
        .spawn(move || {
            run_scope_loop(config, sink, cmd_rx, &latest_snapshot);
        })
        .expect("failed to spawn scope loop thread");

    cmd_tx
}

/// The scope loop. Runs until Shutdown command or channel disconnect.
fn run_scope_loop(
    config: ScopeConfig,
    mut sink: Box<dyn RenderSink>,
    cmd_rx: mpsc::Receiver<LoopCommand>,
    latest_snapshot: &Mutex<Option<ScopeSnapshot>>,
) {
    let mut engine = ScopeEngine::new(config);
    let mut next_tick_time = Instant::now();

    loop {
        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(LoopCommand::Operator(cmd)) => engine.queue_command(cmd),
                Ok(LoopCommand::SetViewport(viewport)) => engine.set_viewport(viewport),
                Ok(LoopCommand::Shutdown) => return,
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => return,
            }
        }

        // 2. Fire the periodic spawn trigger (engine logs rejections).
        // Also fires at tick 0, so the scope is populated immediately
        // instead of one full spawn period in.
        if engine.time().tick.is_multiple_of(TICKS_PER_SPAWN) {
            let _ = engine.spawn_aircraft();
        }

        // 3. Advance one tick
        let snapshot = engine.tick();

        // 4. Feed the render sink
        render::dispatch(sink.as_mut(), &snapshot);

        // 5. Store latest snapshot for synchronous polling
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        // 6. Sleep until the next tick boundary
        next_tick_time += TICK_DURATION;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > TICK_DURATION * 2 {
            // Too far behind — reset to avoid catch-up spiral
            next_tick_time = now;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scope_core::commands::OperatorCommand;
    use scope_core::types::ViewportExtents;

    #[test]
    fn test_command_channel_round_trip() {
        let (tx, rx) = mpsc::channel::<LoopCommand>();

        tx.send(LoopCommand::Operator(OperatorCommand::Deselect))
            .unwrap();
        tx.send(LoopCommand::SetViewport(ViewportExtents::new(640.0, 480.0)))
            .unwrap();
        tx.send(LoopCommand::Shutdown).unwrap();

        let mut commands = Vec::new();
        while let Ok(cmd) = rx.try_recv() {
            commands.push(cmd);
        }

        assert_eq!(commands.len(), 3);
        assert!(matches!(
            commands[0],
            LoopCommand::Operator(OperatorCommand::Deselect)
        ));
        assert!(matches!(commands[1], LoopCommand::SetViewport(_)));
        assert!(matches!(commands[2], LoopCommand::Shutdown));
    }

    #[test]
    fn test_spawn_cadence() {
        // 3000 ms trigger over a 100 ms tick = every 30th tick.
        assert_eq!(TICKS_PER_SPAWN, 30);
        assert_eq!(TICK_DURATION, Duration::from_millis(100));
    }

    #[test]
    fn test_loop_shutdown_and_snapshot_publication() {
        let latest = Arc::new(Mutex::new(None));
        let sink = Box::new(crate::render::JsonLineSink);
        let tx = spawn_scope_loop(ScopeConfig::default(), sink, latest.clone());

        // Give the loop a few ticks to publish a snapshot.
        let deadline = Instant::now() + Duration::from_secs(2);
        loop {
            if latest.lock().unwrap().is_some() {
                break;
            }
            assert!(Instant::now() < deadline, "no snapshot published");
            std::thread::sleep(Duration::from_millis(10));
        }

        let snapshot = latest.lock().unwrap().clone().unwrap();
        // The tick-0 spawn trigger admits the first aircraft.
        assert_eq!(snapshot.blips.len(), 1);

        tx.send(LoopCommand::Shutdown).unwrap();
    }
}
