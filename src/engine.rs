//! The transition engine: the single owner of player and session state.
//!
//! Adapters issue commands (`step`, `switch_dimension`, ...) and poll the
//! resulting [`Event`]s with [`Engine::drain_events`]. Commands that arrive in
//! the wrong mode are ignored. Every command runs to completion before
//! returning, so no partially updated state is ever observable.

use std::collections::HashSet;
use std::fmt;

use tracing::{debug, info};

use crate::catalog::Catalog;
use crate::grid::{Cell, Dimension, Direction, is_blocked};
use crate::level::Level;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GameMode {
    #[default]
    Start,
    Playing,
    Dialog,
    GameOver,
    Victory,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeathReason {
    /// Switched into a dimension that has a wall where the player stands.
    SpatialOverlap,
}

impl DeathReason {
    pub fn as_str(self) -> &'static str {
        match self {
            DeathReason::SpatialOverlap => "spatial overlap",
        }
    }
}

impl fmt::Display for DeathReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcomes reported to adapters, in the order they happened.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    Moved(Cell),
    /// A step into a wall or a switch into a locked dimension.
    Blocked,
    DimensionSwitched(Dimension),
    ItemCollected { text: String, image: Option<String> },
    Died(DeathReason),
    LevelStarted(usize),
    LevelAdvanced(usize),
    Victory,
    DialogAdvanced,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlayerState {
    pub cell: Cell,
    pub dimension: Dimension,
    pub facing: Direction,
}

impl PlayerState {
    fn spawn(level: &Level) -> Self {
        Self {
            cell: level.start,
            dimension: Dimension::Human,
            facing: Direction::Down,
        }
    }
}

/// Text currently shown in the dialog box.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Dialog {
    pub text: String,
    pub image: Option<String>,
}

pub struct Engine {
    catalog: Catalog,
    level_index: usize,
    player: PlayerState,
    mode: GameMode,
    collected: HashSet<Cell>,
    dialog: Option<Dialog>,
    death: Option<DeathReason>,
    events: Vec<Event>,
}

impl Engine {
    /// Level 0 is loaded but not started; call [`Engine::begin`].
    pub fn new(catalog: Catalog) -> Self {
        let player = PlayerState::spawn(&catalog.levels[0]);
        Self {
            catalog,
            level_index: 0,
            player,
            mode: GameMode::Start,
            collected: HashSet::new(),
            dialog: None,
            death: None,
            events: Vec::new(),
        }
    }

    // --- Read surface ---------------------------------------------------------

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn player(&self) -> &PlayerState {
        &self.player
    }

    pub fn level(&self) -> &Level {
        &self.catalog.levels[self.level_index]
    }

    pub fn level_index(&self) -> usize {
        self.level_index
    }

    pub fn level_count(&self) -> usize {
        self.catalog.len()
    }

    pub fn dialog(&self) -> Option<&Dialog> {
        self.dialog.as_ref()
    }

    pub fn death(&self) -> Option<DeathReason> {
        self.death
    }

    /// Whether the trigger at `cell` was consumed since the level (re)started.
    pub fn is_collected(&self, cell: Cell) -> bool {
        self.collected.contains(&cell)
    }

    pub fn drain_events(&mut self) -> Vec<Event> {
        std::mem::take(&mut self.events)
    }

    // --- Commands -------------------------------------------------------------

    /// Leaves the title screen. Ignored in any other mode.
    pub fn begin(&mut self) {
        if self.mode == GameMode::Start {
            self.start_level(0);
        }
    }

    /// Loads level `idx` from scratch. Panics if `idx` is out of range.
    pub fn start_level(&mut self, idx: usize) {
        self.load_level(idx);
        self.events.push(Event::LevelStarted(idx));
    }

    pub fn restart_level(&mut self) {
        self.start_level(self.level_index);
    }

    /// Moves by a unit delta. Panics on anything but the four unit steps.
    pub fn step_by(&mut self, dx: i32, dy: i32) {
        let Some(dir) = Direction::from_delta(dx, dy) else {
            panic!("step ({dx},{dy}) is not a unit move");
        };
        self.step(dir);
    }

    pub fn step(&mut self, dir: Direction) {
        if self.mode != GameMode::Playing {
            return;
        }
        self.player.facing = dir;
        let target = self.player.cell.offset(dir);
        if is_blocked(self.level(), self.player.dimension, target) {
            debug!(cell = %target, dimension = %self.player.dimension, "step blocked");
            self.events.push(Event::Blocked);
            return;
        }
        self.player.cell = target;
        self.events.push(Event::Moved(target));
        self.on_arrival();
    }

    pub fn switch_dimension(&mut self, to: Dimension) {
        if self.mode != GameMode::Playing || to == self.player.dimension {
            return;
        }
        let level = self.level();
        if level.is_locked(to) {
            debug!(dimension = %to, "dimension locked");
            self.events.push(Event::Blocked);
            return;
        }
        // The start cell is a sanctuary in every dimension, even if a level
        // were to put a wall there.
        let at_start = self.player.cell == level.start;
        let lethal = !at_start && is_blocked(level, to, self.player.cell);

        self.player.dimension = to;
        if lethal {
            self.die(DeathReason::SpatialOverlap);
            return;
        }
        debug!(dimension = %to, cell = %self.player.cell, "dimension switched");
        self.events.push(Event::DimensionSwitched(to));
    }

    pub fn advance_dialog(&mut self) {
        if self.mode != GameMode::Dialog {
            return;
        }
        self.dialog = None;
        self.mode = GameMode::Playing;
        self.events.push(Event::DialogAdvanced);
    }

    // --- Internals ------------------------------------------------------------

    fn load_level(&mut self, idx: usize) {
        assert!(
            idx < self.catalog.len(),
            "level index {idx} out of range (catalog has {})",
            self.catalog.len()
        );
        self.level_index = idx;
        self.player = PlayerState::spawn(&self.catalog.levels[idx]);
        self.collected.clear();
        self.death = None;
        self.dialog = None;
        self.mode = GameMode::Playing;

        let level = &self.catalog.levels[idx];
        info!(index = idx, name = %level.name, "level started");
        if let Some(intro) = &level.intro {
            self.dialog = Some(Dialog {
                text: intro.clone(),
                image: None,
            });
            self.mode = GameMode::Dialog;
        }
    }

    /// Exit first, then triggers; at most one of them fires per step.
    fn on_arrival(&mut self) {
        let cell = self.player.cell;
        let level = self.level();

        if cell == level.end {
            let next = self.level_index + 1;
            if next < self.catalog.len() {
                self.load_level(next);
                self.events.push(Event::LevelAdvanced(next));
            } else {
                info!(level = self.level_index, "victory");
                self.mode = GameMode::Victory;
                self.events.push(Event::Victory);
            }
            return;
        }

        debug_assert!(
            !is_blocked(level, self.player.dimension, cell),
            "player standing inside a wall at {cell}"
        );
        let Some(trigger) = level.trigger(cell) else {
            return;
        };
        if self.collected.contains(&cell) {
            return;
        }
        let (text, image) = (trigger.text.clone(), trigger.image.clone());
        debug!(%cell, "trigger collected");
        self.collected.insert(cell);
        self.dialog = Some(Dialog {
            text: text.clone(),
            image: image.clone(),
        });
        self.mode = GameMode::Dialog;
        self.events.push(Event::ItemCollected { text, image });
    }

    fn die(&mut self, reason: DeathReason) {
        info!(
            %reason,
            cell = %self.player.cell,
            dimension = %self.player.dimension,
            "player died"
        );
        self.death = Some(reason);
        self.mode = GameMode::GameOver;
        self.events.push(Event::Died(reason));
    }
}
