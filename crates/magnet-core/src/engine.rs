//! The bonding and synchronization engine.
//!
//! [`SyncEngine`] owns the bond registry and the ignore set. The platform
//! layer feeds it location-change notifications through
//! [`SyncEngine::on_location_change`], and the presentation layer drives it
//! through [`SyncEngine::add_bond`], [`SyncEngine::remove_bond`] and
//! [`SyncEngine::clear_all`]. All methods take `&self`, so one engine behind
//! an `Arc` serves the hook thread and the interactive thread at once.

use std::sync::Arc;

use crate::config::BondConfig;
use crate::placement::{self, ParentState};
use crate::{Bond, BondRegistry, Geometry, IgnoreSet, Offset, Rect, WindowResult, shake};

pub struct SyncEngine<G: Geometry + 'static> {
    geometry: Arc<G>,
    registry: BondRegistry,
    ignore: Arc<IgnoreSet>,
    config: BondConfig,
}

impl<G: Geometry + 'static> SyncEngine<G> {
    pub fn new(geometry: Arc<G>, config: BondConfig) -> Self {
        Self {
            geometry,
            registry: BondRegistry::new(),
            ignore: Arc::new(IgnoreSet::new()),
            config,
        }
    }

    /// Bonds `child` to `parent` and snaps it to the parent's right side.
    ///
    /// The caller guarantees `parent != child`. Returns `false`, leaving
    /// the child untouched, when the parent's rectangle cannot be read.
    pub fn add_bond(&self, parent: usize, child: usize) -> bool {
        let g = &*self.geometry;

        // A maximized or minimized window ignores SetWindowPos sizing.
        let maximized = g.is_maximized(child).unwrap_or(false);
        let minimized = g.is_minimized(child).unwrap_or(false);
        let parent_rect = match g.rect(parent) {
            Ok(rect) => rect,
            Err(e) => {
                crate::log_warn!("bond 0x{parent:X} -> 0x{child:X} skipped: {e}");
                return false;
            }
        };

        let target = placement::beside(&parent_rect, self.config.gap);
        {
            let _guard = self.ignore.mark(child);
            if (maximized || minimized)
                && let Err(e) = g.restore(child)
            {
                crate::log_debug!("restore 0x{child:X} before bonding failed: {e}");
            }
            if let Err(e) = g.set_rect(child, &target) {
                crate::log_debug!("initial placement of 0x{child:X} failed: {e}");
            }
        }

        let offset = match (g.rect(parent), g.rect(child)) {
            (Ok(p), Ok(c)) => Offset::between(&p, &c),
            _ => Offset::between(&parent_rect, &target),
        };
        self.registry.insert(parent, Bond { child, offset });
        crate::log_info!(
            "bond 0x{parent:X} -> 0x{child:X} offset({},{}) ({} children)",
            offset.x,
            offset.y,
            self.registry.children_of(parent).map_or(0, |b| b.len())
        );

        if self.config.shake.enabled {
            shake::spawn(
                Arc::clone(&self.geometry),
                Arc::clone(&self.ignore),
                child,
                self.config.shake.clone(),
            );
        }
        true
    }

    /// Removes the bond between `parent` and `child`. No-op when absent.
    pub fn remove_bond(&self, parent: usize, child: usize) {
        if self.registry.remove(parent, child) > 0 {
            crate::log_info!("unbond 0x{parent:X} -> 0x{child:X}");
        }
    }

    /// Drops every bond. Windows stay where they are.
    pub fn clear_all(&self) {
        let count = self.registry.bond_count();
        self.registry.clear();
        crate::log_info!("cleared {count} bonds");
    }

    /// Every parent with its bonds, sorted by parent handle.
    pub fn bonds(&self) -> Vec<(usize, Vec<Bond>)> {
        self.registry.snapshot()
    }

    pub fn bond_count(&self) -> usize {
        self.registry.bond_count()
    }

    #[cfg(test)]
    pub(crate) fn is_parent(&self, hwnd: usize) -> bool {
        self.registry.is_parent(hwnd)
    }

    /// Handles a location-change notification for `hwnd`.
    ///
    /// Does nothing unless `hwnd` is a bonded parent that the engine is not
    /// itself driving at the moment.
    pub fn on_location_change(&self, hwnd: usize) {
        if self.ignore.contains(hwnd) {
            crate::log_debug!("ignoring self-induced event for 0x{hwnd:X}");
            return;
        }
        let Some(bonds) = self.registry.children_of(hwnd) else {
            return;
        };

        let (state, parent_rect) = match self.parent_state(hwnd) {
            Ok(read) => read,
            Err(e) => {
                crate::log_debug!("parent 0x{hwnd:X} unreadable, skipping: {e}");
                return;
            }
        };

        for bond in &bonds {
            let _guard = self.ignore.mark(bond.child);
            match self.sync_child(state, &parent_rect, bond.child) {
                Ok(()) => {}
                Err(e) if e.is_stale() => {
                    crate::log_debug!("child 0x{:X} of 0x{hwnd:X} is gone", bond.child);
                }
                Err(e) => crate::log_warn!("sync 0x{hwnd:X} -> 0x{:X} failed: {e}", bond.child),
            }
        }
    }

    fn parent_state(&self, parent: usize) -> WindowResult<(ParentState, Rect)> {
        let g = &*self.geometry;
        let rect = g.rect(parent)?;
        let minimized = g.is_minimized(parent)?;
        let maximized = !minimized && g.is_maximized(parent)?;
        Ok((ParentState::classify(minimized, maximized, &rect), rect))
    }

    fn sync_child(&self, state: ParentState, parent: &Rect, child: usize) -> WindowResult<()> {
        let g = &*self.geometry;
        match state {
            ParentState::Minimized => {
                if !g.is_minimized(child)? {
                    g.minimize(child)?;
                }
            }
            ParentState::Maximized => {
                if g.is_minimized(child)? {
                    g.restore(child)?;
                }
                // Stacked behind the parent rather than pushed off-screen.
                g.set_rect(child, parent)?;
            }
            ParentState::Normal => {
                if g.is_minimized(child)? {
                    g.restore(child)?;
                }
                if g.is_visible(child)? {
                    g.set_rect(child, &placement::beside(parent, self.config.gap))?;
                }
            }
        }
        Ok(())
    }

    #[cfg(test)]
    pub(crate) fn ignore_set(&self) -> &IgnoreSet {
        &self.ignore
    }
}
