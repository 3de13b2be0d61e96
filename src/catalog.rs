//! The level catalog: an ordered, validated list of levels.
//!
//! A catalog can only be obtained through a constructor that validates every
//! level, so the engine never sees malformed data from the outside.

use crate::error::{CatalogError, CatalogResult};
use crate::level::Level;
use crate::levels;
use crate::story::Lang;

#[derive(Clone, Debug)]
pub struct Catalog {
    pub(crate) levels: Vec<Level>,
}

impl Catalog {
    pub fn new(levels: Vec<Level>) -> CatalogResult<Catalog> {
        if levels.is_empty() {
            return Err(CatalogError::Empty);
        }
        for (index, level) in levels.iter().enumerate() {
            level.validate().map_err(|source| CatalogError::Level {
                index,
                name: level.name.clone(),
                source,
            })?;
        }
        tracing::debug!(count = levels.len(), "level catalog validated");
        Ok(Catalog { levels })
    }

    /// The shipped levels with text in `lang`.
    pub fn builtin(lang: Lang) -> CatalogResult<Catalog> {
        Catalog::new(levels::builtin_levels(lang)?)
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    pub fn get(&self, idx: usize) -> Option<&Level> {
        self.levels.get(idx)
    }

    pub fn levels(&self) -> &[Level] {
        &self.levels
    }
}

// --- JSON level files ---------------------------------------------------------

#[cfg(feature = "serde_json")]
mod json {
    use std::collections::HashMap;

    use serde::Deserialize;

    use super::Catalog;
    use crate::error::{CatalogError, CatalogResult, LevelError};
    use crate::grid::{Cell, Grid, GridCodes};
    use crate::level::{Level, Trigger};

    #[derive(Deserialize)]
    struct CatalogFile {
        levels: Vec<LevelFile>,
    }

    #[derive(Deserialize)]
    struct CellFile {
        x: i32,
        y: i32,
    }

    #[derive(Deserialize)]
    struct TriggerFile {
        text: String,
        #[serde(default)]
        image: Option<String>,
    }

    #[derive(Deserialize)]
    #[serde(rename_all = "camelCase")]
    struct LevelFile {
        #[serde(default)]
        id: Option<usize>,
        name: String,
        start: CellFile,
        end: CellFile,
        #[serde(default)]
        locked_dimensions: [bool; 3],
        maps: [GridCodes; 3],
        #[serde(default, alias = "items")]
        triggers: HashMap<String, TriggerFile>,
        #[serde(default)]
        intro: Option<String>,
    }

    impl LevelFile {
        fn into_level(self, position: usize) -> Result<Level, LevelError> {
            let [human, heaven, hell] = &self.maps;
            let maps = [
                Grid::from_codes(human)?,
                Grid::from_codes(heaven)?,
                Grid::from_codes(hell)?,
            ];
            let triggers = self
                .triggers
                .into_iter()
                .map(|(key, t)| {
                    let cell = key.parse::<Cell>()?;
                    Ok((
                        cell,
                        Trigger {
                            text: t.text,
                            image: t.image,
                        },
                    ))
                })
                .collect::<Result<HashMap<_, _>, LevelError>>()?;
            Ok(Level {
                id: self.id.unwrap_or(position),
                name: self.name,
                start: Cell::new(self.start.x, self.start.y),
                end: Cell::new(self.end.x, self.end.y),
                locked: self.locked_dimensions,
                maps,
                triggers,
                intro: self.intro,
            })
        }
    }

    impl Catalog {
        /// Parses and validates a JSON level file.
        pub fn from_json(src: &str) -> CatalogResult<Catalog> {
            let file: CatalogFile = serde_json::from_str(src)?;
            let levels = file
                .levels
                .into_iter()
                .enumerate()
                .map(|(index, lf)| {
                    let name = lf.name.clone();
                    lf.into_level(index)
                        .map_err(|source| CatalogError::Level { index, name, source })
                })
                .collect::<CatalogResult<Vec<_>>>()?;
            Catalog::new(levels)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LevelError;
    use crate::grid::Cell;
    use crate::level::tests::open_level;

    #[test]
    fn test_empty_catalog_rejected() {
        assert!(matches!(Catalog::new(Vec::new()), Err(CatalogError::Empty)));
    }

    #[test]
    fn test_malformed_level_reports_index_and_name() {
        let good = open_level();
        let mut bad = open_level();
        bad.name = "broken".to_string();
        bad.start = Cell::new(-3, 0);
        match Catalog::new(vec![good, bad]) {
            Err(CatalogError::Level { index, name, source }) => {
                assert_eq!(index, 1);
                assert_eq!(name, "broken");
                assert!(matches!(source, LevelError::OutOfBounds { what: "start", .. }));
            }
            other => panic!("expected level error, got {:?}", other),
        }
    }

    #[test]
    fn test_builtin_catalog_has_three_levels() {
        let cat = Catalog::builtin(Lang::En).unwrap();
        assert_eq!(cat.len(), 3);
        assert!(!cat.is_empty());
        assert_eq!(cat.get(0).unwrap().id, 0);
        assert!(cat.get(3).is_none());
    }

    #[cfg(feature = "serde_json")]
    fn open_rows() -> String {
        let row = "[0,0,0,0,0,0,0,0,0,0]";
        format!("[{}]", vec![row; 10].join(","))
    }

    #[cfg(feature = "serde_json")]
    #[test]
    fn test_from_json_minimal_level() {
        let rows = open_rows();
        let src = format!(
            r#"{{"levels":[{{"name":"Json Level","start":{{"x":0,"y":0}},"end":{{"x":9,"y":9}},
            "lockedDimensions":[false,true,false],"maps":[{rows},{rows},{rows}],
            "items":{{"3,2":{{"text":"hello","image":"moth.png"}}}}}}]}}"#
        );
        let cat = Catalog::from_json(&src).unwrap();
        let lvl = cat.get(0).unwrap();
        assert_eq!(lvl.name, "Json Level");
        assert_eq!(lvl.id, 0);
        assert_eq!(lvl.locked, [false, true, false]);
        let t = lvl.trigger(Cell::new(3, 2)).unwrap();
        assert_eq!(t.text, "hello");
        assert_eq!(t.image.as_deref(), Some("moth.png"));
        assert!(lvl.intro.is_none());
    }

    #[cfg(feature = "serde_json")]
    #[test]
    fn test_from_json_bad_key_is_level_error() {
        let rows = open_rows();
        let src = format!(
            r#"{{"levels":[{{"name":"L","start":{{"x":0,"y":0}},"end":{{"x":9,"y":9}},
            "maps":[{rows},{rows},{rows}],"triggers":{{"three,two":{{"text":"x"}}}}}}]}}"#
        );
        match Catalog::from_json(&src) {
            Err(CatalogError::Level { source: LevelError::BadCoordinate(key), .. }) => {
                assert_eq!(key, "three,two");
            }
            other => panic!("expected bad coordinate, got {:?}", other),
        }
    }

    #[cfg(feature = "serde_json")]
    #[test]
    fn test_from_json_syntax_error() {
        assert!(matches!(
            Catalog::from_json("{\"levels\": ["),
            Err(CatalogError::Json(_))
        ));
    }
}
