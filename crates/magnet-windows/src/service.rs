//! The engine wired to the live desktop.

use std::sync::Arc;

use magnet_core::config::BondConfig;
use magnet_core::{Bond, SyncEngine, WindowResult, log_info};

use crate::desktop::Desktop;
use crate::event_loop::{self, EventLoopHandle};

/// A running bonding service: one engine plus the hook thread feeding it.
///
/// Dropping the service clears every bond and removes the hook, so no
/// window is touched after the owner goes away.
pub struct MagnetService {
    engine: Arc<SyncEngine<Desktop>>,
    event_loop: Option<EventLoopHandle>,
}

impl MagnetService {
    /// Creates the engine and installs the location hook.
    pub fn start(config: BondConfig) -> WindowResult<Self> {
        let engine = Arc::new(SyncEngine::new(Arc::new(Desktop), config));
        let hook_engine = Arc::clone(&engine);
        let event_loop = event_loop::start(move |hwnd| hook_engine.on_location_change(hwnd))?;
        Ok(Self {
            engine,
            event_loop: Some(event_loop),
        })
    }

    pub fn add_bond(&self, parent: usize, child: usize) -> bool {
        self.engine.add_bond(parent, child)
    }

    pub fn remove_bond(&self, parent: usize, child: usize) {
        self.engine.remove_bond(parent, child);
    }

    pub fn clear_all(&self) {
        self.engine.clear_all();
    }

    pub fn bonds(&self) -> Vec<(usize, Vec<Bond>)> {
        self.engine.bonds()
    }

    pub fn bond_count(&self) -> usize {
        self.engine.bond_count()
    }
}

impl Drop for MagnetService {
    fn drop(&mut self) {
        self.engine.clear_all();
        if let Some(event_loop) = self.event_loop.take() {
            event_loop.stop();
        }
        log_info!("magnet service stopped");
    }
}
