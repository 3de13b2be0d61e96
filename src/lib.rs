//! A Romantic Pursuit core crate.
//!
//! A maze puzzle played on one 10×10 board seen through three dimensions
//! (Human, Heaven, Hell). The player walks in one dimension at a time and may
//! switch; switching onto a cell that is a wall in the target dimension is
//! fatal, except on the level's start cell.
//!
//! The [`Engine`] owns all mutable game state and is driven by commands;
//! adapters (the browser front end in `web`, the `pursuit` terminal binary)
//! only read it and poll its [`Event`]s.

use wasm_bindgen::prelude::*;

pub mod catalog;
pub mod engine;
pub mod error;
pub mod grid;
pub mod level;
mod levels;
pub mod story;
mod web;

pub use catalog::Catalog;
pub use engine::{DeathReason, Dialog, Engine, Event, GameMode, PlayerState};
pub use error::{CatalogError, LevelError};
pub use grid::{Cell, CellKind, Dimension, Direction, GRID_SIZE, Grid, is_blocked};
pub use level::{Level, Trigger};
pub use story::Lang;
pub use web::Effects;

// Optional small allocator for size (feature gated)
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

// -----------------------------------------------------------------------------
// Unified entrypoint
// -----------------------------------------------------------------------------

#[wasm_bindgen]
pub fn start_game() -> Result<(), JsValue> {
    web::start_web_mode()
}
