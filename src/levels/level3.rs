// Level 3 definition
// Route: start -> Hell (left) -> item -> Human (middle) -> item -> exit.
use std::collections::HashMap;

use super::level_text;
use crate::error::LevelError;
use crate::grid::{Cell, Grid, GridCodes};
use crate::level::{Level, Trigger};
use crate::story::Lang;

pub const LEVEL3_HUMAN: GridCodes = [
    [0, 1, 1, 1, 1, 1, 1, 1, 1, 1], // start (0,0)
    [0, 1, 1, 1, 1, 1, 1, 1, 1, 1],
    [0, 1, 1, 1, 1, 1, 1, 1, 1, 1],
    [1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
    [1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
    [1, 1, 1, 1, 0, 0, 0, 0, 0, 1], // (4,5) entrance from Hell
    [1, 1, 1, 1, 0, 2, 0, 0, 0, 1], // item (5,6)
    [1, 1, 1, 1, 1, 1, 1, 0, 0, 1],
    [1, 1, 1, 1, 1, 1, 1, 0, 0, 1],
    [1, 1, 1, 1, 1, 1, 1, 0, 0, 0], // end (9,9)
];

pub const LEVEL3_HEAVEN: GridCodes = [
    [0, 0, 0, 0, 0, 1, 1, 1, 1, 1],
    [1, 1, 1, 1, 0, 1, 1, 1, 1, 1],
    [1, 1, 1, 1, 0, 1, 1, 1, 1, 1],
    [1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
    [1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
    [1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
    [1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
    [1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
    [1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
    [1, 1, 1, 1, 1, 1, 1, 1, 1, 0], // exit kept open
];

pub const LEVEL3_HELL: GridCodes = [
    [0, 1, 1, 1, 1, 1, 1, 1, 1, 1],
    [0, 1, 1, 1, 1, 1, 1, 1, 1, 1],
    [0, 0, 0, 0, 0, 1, 1, 1, 1, 1],
    [1, 1, 1, 1, 0, 1, 1, 1, 1, 1],
    [1, 1, 2, 1, 0, 1, 1, 1, 1, 1], // item (2,4)
    [1, 1, 0, 0, 0, 1, 1, 1, 1, 1],
    [1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
    [1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
    [1, 1, 1, 1, 1, 1, 1, 1, 1, 0],
    [1, 1, 1, 1, 1, 1, 1, 1, 1, 0],
];

pub fn level3(lang: Lang) -> Result<Level, LevelError> {
    let text = level_text(lang, 2);
    let triggers = [(2, 4), (5, 6)]
        .into_iter()
        .map(|(x, y)| (Cell::new(x, y), Trigger::new(text.item(x, y).unwrap_or_default())))
        .collect::<HashMap<_, _>>();
    Ok(Level {
        id: 2,
        name: text.name.to_string(),
        start: Cell::new(0, 0),
        end: Cell::new(9, 9),
        locked: [false, false, false],
        maps: [
            Grid::from_codes(&LEVEL3_HUMAN)?,
            Grid::from_codes(&LEVEL3_HEAVEN)?,
            Grid::from_codes(&LEVEL3_HELL)?,
        ],
        triggers,
        intro: None,
    })
}
