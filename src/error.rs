//! Configuration errors. These are raised while a catalog is being built and
//! never during play; out-of-phase commands are ignored, not reported.

use crate::grid::{Cell, Dimension};

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum LevelError {
    #[error("unknown cell code {code} at {cell}")]
    UnknownCellCode { code: u8, cell: Cell },

    #[error("malformed coordinate key '{0}' (expected \"x,y\")")]
    BadCoordinate(String),

    #[error("{what} cell {cell} is outside the grid")]
    OutOfBounds { what: &'static str, cell: Cell },

    #[error("{what} cell {cell} is a wall in the {dimension} dimension")]
    WallAt {
        what: &'static str,
        cell: Cell,
        dimension: Dimension,
    },

    #[error("start and end share cell {0}")]
    StartIsEnd(Cell),

    #[error("item marker at {cell} in the {dimension} dimension has no trigger")]
    OrphanItemMarker { cell: Cell, dimension: Dimension },

    #[error("end cell {0} cannot be reached from the start")]
    Unreachable(Cell),
}

#[derive(thiserror::Error, Debug)]
pub enum CatalogError {
    #[error("a catalog needs at least one level")]
    Empty,

    #[error("level {index} ('{name}') is malformed: {source}")]
    Level {
        index: usize,
        name: String,
        #[source]
        source: LevelError,
    },

    #[cfg(feature = "serde_json")]
    #[error("level file is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub type CatalogResult<T> = Result<T, CatalogError>;
