//! Application state shared between the operator-facing side and the
//! scope-loop thread.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};

use scope_core::commands::OperatorCommand;
use scope_core::state::ScopeSnapshot;
use scope_core::types::ViewportExtents;

/// Commands sent from the operator side to the scope-loop thread.
#[derive(Debug)]
pub enum LoopCommand {
    /// An operator command to forward to the simulation engine.
    Operator(OperatorCommand),
    /// The display was resized.
    SetViewport(ViewportExtents),
    /// Shut down the scope-loop thread gracefully.
    Shutdown,
}

/// Shared application state.
///
/// The engine lives on the loop thread; everything crossing the
/// thread boundary goes through the command channel or the snapshot
/// mutex. `mpsc::Sender` is Send but not Sync, hence the Mutex.
pub struct AppState {
    /// Channel sender to forward commands to the scope-loop thread.
    /// `None` until the loop is started.
    pub command_tx: Mutex<Option<mpsc::Sender<LoopCommand>>>,
    /// Latest snapshot for synchronous polling, updated after each tick.
    pub latest_snapshot: Arc<Mutex<Option<ScopeSnapshot>>>,
    /// Whether the scope loop is currently running.
    pub running: Mutex<bool>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            command_tx: Mutex::new(None),
            latest_snapshot: Arc::new(Mutex::new(None)),
            running: Mutex::new(false),
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a started scope loop's command channel. Fails if a loop
    /// is already attached.
    pub fn attach_loop(&self, tx: mpsc::Sender<LoopCommand>) -> Result<(), String> {
        let mut running = self.running.lock().map_err(|e| e.to_string())?;
        if *running {
            return Err("scope loop already running".into());
        }

        let mut tx_lock = self.command_tx.lock().map_err(|e| e.to_string())?;
        *tx_lock = Some(tx);
        *running = true;
        Ok(())
    }

    /// Forward a command to the scope-loop thread.
    pub fn send(&self, command: LoopCommand) -> Result<(), String> {
        let tx_lock = self.command_tx.lock().map_err(|e| e.to_string())?;

        match tx_lock.as_ref() {
            Some(tx) => tx
                .send(command)
                .map_err(|e| format!("failed to send command: {e}")),
            None => Err("scope loop not started".into()),
        }
    }

    /// Get the latest snapshot synchronously (for polling).
    pub fn snapshot(&self) -> Result<Option<ScopeSnapshot>, String> {
        let lock = self.latest_snapshot.lock().map_err(|e| e.to_string())?;
        Ok(lock.clone())
    }
}
