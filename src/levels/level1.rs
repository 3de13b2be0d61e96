// Level 1 definition
// Human only: a serpentine corridor. Heaven and Hell are locked and sealed.
use std::collections::HashMap;

use super::level_text;
use crate::error::LevelError;
use crate::grid::{Cell, Grid, GridCodes};
use crate::level::{Level, Trigger};
use crate::story::Lang;

pub const LEVEL1_HUMAN: GridCodes = [
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0], // start (0,0)
    [1, 1, 1, 1, 1, 1, 1, 1, 1, 0],
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    [0, 1, 1, 1, 1, 1, 1, 1, 1, 1],
    [0, 0, 0, 0, 2, 0, 0, 0, 0, 0], // item (4,4)
    [1, 1, 1, 1, 1, 1, 1, 1, 1, 0],
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    [0, 1, 1, 1, 1, 1, 1, 1, 1, 1],
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    [1, 1, 1, 1, 1, 1, 1, 1, 0, 0], // end (9,9)
];

pub fn level1(lang: Lang) -> Result<Level, LevelError> {
    let text = level_text(lang, 0);
    let start = Cell::new(0, 0);
    let end = Cell::new(9, 9);
    let triggers = HashMap::from([(Cell::new(4, 4), Trigger::new(text.item(4, 4).unwrap_or_default()))]);
    Ok(Level {
        id: 0,
        name: text.name.to_string(),
        start,
        end,
        locked: [false, true, true],
        maps: [
            Grid::from_codes(&LEVEL1_HUMAN)?,
            Grid::sealed(&[start, end]),
            Grid::sealed(&[start, end]),
        ],
        triggers,
        intro: Some(lang.story().intro.to_string()),
    })
}
