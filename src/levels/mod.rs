//! Shipped levels, one file per level.
//!
//! Grids are written as rows of cell codes (`0` path, `1` wall, `2` item) so
//! they read the same way as level files on disk.

mod level1;
mod level2;
mod level3;

use crate::error::CatalogError;
use crate::level::Level;
use crate::story::{Lang, LevelText};

type LevelFn = fn(Lang) -> Result<Level, crate::error::LevelError>;

const BUILDERS: [LevelFn; 3] = [level1::level1, level2::level2, level3::level3];

pub(crate) fn builtin_levels(lang: Lang) -> Result<Vec<Level>, CatalogError> {
    BUILDERS
        .iter()
        .enumerate()
        .map(|(index, build)| {
            build(lang).map_err(|source| CatalogError::Level {
                index,
                name: lang
                    .story()
                    .level(index)
                    .map_or_else(|| format!("level {}", index + 1), |t| t.name.to_string()),
                source,
            })
        })
        .collect()
}

fn level_text(lang: Lang, idx: usize) -> &'static LevelText {
    &lang.story().levels[idx]
}
