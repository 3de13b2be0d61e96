// Level 2 definition
// Human and Heaven interleave; the route forces two switches. Hell is locked.
use std::collections::HashMap;

use super::level_text;
use crate::error::LevelError;
use crate::grid::{Cell, Grid, GridCodes};
use crate::level::{Level, Trigger};
use crate::story::Lang;

pub const LEVEL2_HUMAN: GridCodes = [
    [0, 0, 0, 1, 1, 1, 1, 1, 1, 1], // start (0,0)
    [1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
    [1, 1, 1, 1, 0, 0, 0, 1, 1, 1], // landing (4,2)
    [1, 1, 1, 1, 0, 2, 0, 1, 1, 1], // item (5,3)
    [1, 1, 1, 1, 0, 0, 0, 1, 1, 1], // (6,4) safe switch back
    [1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
    [1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
    [1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
    [1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
    [1, 1, 1, 1, 1, 1, 1, 1, 1, 0], // end (9,9)
];

pub const LEVEL2_HEAVEN: GridCodes = [
    [0, 0, 0, 0, 0, 1, 1, 1, 1, 1],
    [1, 1, 1, 1, 0, 1, 1, 1, 1, 1],
    [1, 1, 1, 1, 0, 1, 1, 1, 1, 1],
    [1, 1, 1, 1, 1, 1, 1, 1, 1, 1], // blocked below (4,2)
    [1, 1, 1, 1, 1, 1, 0, 1, 1, 1],
    [1, 1, 1, 1, 1, 1, 0, 0, 0, 1],
    [1, 1, 1, 1, 1, 1, 1, 1, 0, 1],
    [1, 1, 1, 1, 1, 1, 1, 1, 0, 1],
    [1, 1, 1, 1, 1, 1, 1, 1, 0, 1],
    [1, 1, 1, 1, 1, 1, 1, 1, 0, 0],
];

pub fn level2(lang: Lang) -> Result<Level, LevelError> {
    let text = level_text(lang, 1);
    let start = Cell::new(0, 0);
    let end = Cell::new(9, 9);
    let triggers = HashMap::from([(Cell::new(5, 3), Trigger::new(text.item(5, 3).unwrap_or_default()))]);
    Ok(Level {
        id: 1,
        name: text.name.to_string(),
        start,
        end,
        locked: [false, false, true],
        maps: [
            Grid::from_codes(&LEVEL2_HUMAN)?,
            Grid::from_codes(&LEVEL2_HEAVEN)?,
            Grid::sealed(&[start, end]),
        ],
        triggers,
        intro: None,
    })
}
