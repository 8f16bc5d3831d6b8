use std::collections::HashMap;
use std::sync::RwLock;

use crate::Rect;

/// Child position relative to its parent's top-left corner.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Offset {
    pub x: i32,
    pub y: i32,
}

impl Offset {
    /// Returns the corner delta `child - parent`.
    pub fn between(parent: &Rect, child: &Rect) -> Self {
        Self {
            x: child.x - parent.x,
            y: child.y - parent.y,
        }
    }
}

/// A child window bonded to a parent.
///
/// The offset is measured once, right after the initial placement, and is
/// never updated afterwards. Synchronization always snaps the child to the
/// parent's right side, so the offset is a record of how the bond started.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bond {
    pub child: usize,
    pub offset: Offset,
}

/// Parent handle to bonded children, safe to share between the hook thread
/// and the thread issuing lifecycle calls.
///
/// A parent key is present only while it has at least one bond. Readers get
/// snapshots, so a concurrent insert or remove never makes an in-progress
/// sync pass skip or repeat a child.
#[derive(Debug, Default)]
pub struct BondRegistry {
    bonds: RwLock<HashMap<usize, Vec<Bond>>>,
}

impl BondRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a bond under `parent`, creating the parent entry if needed.
    pub fn insert(&self, parent: usize, bond: Bond) {
        let Ok(mut bonds) = self.bonds.write() else {
            return;
        };
        bonds.entry(parent).or_default().push(bond);
    }

    /// Removes every bond to `child` under `parent`.
    ///
    /// Drops the parent entry once its last bond is gone. Returns how many
    /// bonds were removed (zero when there was nothing to remove).
    pub fn remove(&self, parent: usize, child: usize) -> usize {
        let Ok(mut bonds) = self.bonds.write() else {
            return 0;
        };
        let Some(list) = bonds.get_mut(&parent) else {
            return 0;
        };

        let before = list.len();
        list.retain(|b| b.child != child);
        let removed = before - list.len();

        if list.is_empty() {
            bonds.remove(&parent);
        }
        removed
    }

    /// Removes every bond.
    pub fn clear(&self) {
        if let Ok(mut bonds) = self.bonds.write() {
            bonds.clear();
        }
    }

    /// Returns a snapshot of the bonds under `parent`, in insertion order.
    pub fn children_of(&self, parent: usize) -> Option<Vec<Bond>> {
        let bonds = self.bonds.read().ok()?;
        bonds.get(&parent).cloned()
    }

    #[cfg(test)]
    pub(crate) fn is_parent(&self, hwnd: usize) -> bool {
        self.bonds
            .read()
            .map(|b| b.contains_key(&hwnd))
            .unwrap_or(false)
    }

    /// Number of parents that currently have bonds.
    #[cfg(test)]
    pub(crate) fn parent_count(&self) -> usize {
        self.bonds.read().map(|b| b.len()).unwrap_or(0)
    }

    /// Total number of bonds across all parents.
    pub fn bond_count(&self) -> usize {
        self.bonds
            .read()
            .map(|b| b.values().map(Vec::len).sum())
            .unwrap_or(0)
    }

    #[cfg(test)]
    pub(crate) fn is_empty(&self) -> bool {
        self.parent_count() == 0
    }

    /// Returns every parent with its bonds, sorted by parent handle.
    pub fn snapshot(&self) -> Vec<(usize, Vec<Bond>)> {
        let Ok(bonds) = self.bonds.read() else {
            return Vec::new();
        };
        let mut all: Vec<_> = bonds.iter().map(|(p, list)| (*p, list.clone())).collect();
        all.sort_by_key(|(parent, _)| *parent);
        all
    }
}
