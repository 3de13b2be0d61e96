//! Immutable level definitions.
//!
//! A [`Level`] never changes once built. Which triggers the player has already
//! consumed is session state and lives in the engine.

use std::collections::{HashMap, HashSet, VecDeque};

use crate::error::LevelError;
use crate::grid::{Cell, CellKind, Dimension, Grid, is_blocked};

/// One-shot narrative event bound to a cell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Trigger {
    pub text: String,
    pub image: Option<String>,
}

impl Trigger {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            image: None,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Level {
    pub id: usize,
    pub name: String,
    pub start: Cell,
    pub end: Cell,
    /// Indexed by [`Dimension::index`]; `true` forbids switching into it.
    pub locked: [bool; 3],
    pub maps: [Grid; 3],
    pub triggers: HashMap<Cell, Trigger>,
    /// Line shown when the level starts, before play begins.
    pub intro: Option<String>,
}

impl Level {
    pub fn map(&self, dimension: Dimension) -> &Grid {
        &self.maps[dimension.index()]
    }

    pub fn is_locked(&self, dimension: Dimension) -> bool {
        self.locked[dimension.index()]
    }

    pub fn trigger(&self, cell: Cell) -> Option<&Trigger> {
        self.triggers.get(&cell)
    }

    /// Rejects data that would make the level unplayable or inconsistent.
    pub fn validate(&self) -> Result<(), LevelError> {
        for (what, cell) in [("start", self.start), ("end", self.end)] {
            if !cell.in_bounds() {
                return Err(LevelError::OutOfBounds { what, cell });
            }
            if let Some(dimension) = Dimension::ALL
                .into_iter()
                .find(|&d| self.map(d).kind(cell) == Some(CellKind::Wall))
            {
                return Err(LevelError::WallAt {
                    what,
                    cell,
                    dimension,
                });
            }
        }
        if self.start == self.end {
            return Err(LevelError::StartIsEnd(self.start));
        }
        if let Some(&cell) = self.triggers.keys().find(|c| !c.in_bounds()) {
            return Err(LevelError::OutOfBounds {
                what: "trigger",
                cell,
            });
        }
        for dimension in Dimension::ALL {
            for (cell, kind) in self.map(dimension).cells() {
                if kind == CellKind::ItemMarker && !self.triggers.contains_key(&cell) {
                    return Err(LevelError::OrphanItemMarker { cell, dimension });
                }
            }
        }
        if !self.solvable() {
            return Err(LevelError::Unreachable(self.end));
        }
        Ok(())
    }

    /// Whether the end cell can be reached without dying.
    ///
    /// Breadth-first search over `(cell, dimension)` starting at the start cell
    /// in the human dimension. A switch is an edge only when it is survivable.
    pub fn solvable(&self) -> bool {
        let origin = (self.start, Dimension::Human);
        let mut seen: HashSet<(Cell, Dimension)> = HashSet::from([origin]);
        let mut queue = VecDeque::from([origin]);

        while let Some((cell, dim)) = queue.pop_front() {
            if cell == self.end {
                return true;
            }
            let steps = cell
                .neighbors()
                .filter(|&n| !is_blocked(self, dim, n))
                .map(|n| (n, dim));
            let switches = Dimension::ALL
                .into_iter()
                .filter(|&d| d != dim && !self.is_locked(d))
                .filter(|&d| cell == self.start || !is_blocked(self, d, cell))
                .map(|d| (cell, d));
            for next in steps.chain(switches).collect::<Vec<_>>() {
                if seen.insert(next) {
                    queue.push_back(next);
                }
            }
        }
        false
    }
}
