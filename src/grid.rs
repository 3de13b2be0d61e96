//! Grid coordinates, the three dimensions and the collision model.
//!
//! Every level is a 10×10 board seen through three overlays. A cell may be a
//! path in one dimension and solid rock in another; [`is_blocked`] is the only
//! question the rest of the crate ever asks about passability.

use std::fmt;
use std::str::FromStr;

use crate::error::LevelError;
use crate::level::Level;

/// Side length of every level grid.
pub const GRID_SIZE: i32 = 10;

// --- Coordinates ------------------------------------------------------------

/// A grid coordinate. Values outside `0..GRID_SIZE` are representable so that
/// movement can compute a target first and ask about it afterwards.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn in_bounds(self) -> bool {
        (0..GRID_SIZE).contains(&self.x) && (0..GRID_SIZE).contains(&self.y)
    }

    pub fn offset(self, dir: Direction) -> Cell {
        let (dx, dy) = dir.delta();
        Cell::new(self.x + dx, self.y + dy)
    }

    /// Orthogonal neighbours, in-bounds only.
    pub fn neighbors(self) -> impl Iterator<Item = Cell> {
        Direction::ALL
            .into_iter()
            .map(move |d| self.offset(d))
            .filter(|c| c.in_bounds())
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

impl FromStr for Cell {
    type Err = LevelError;

    /// Parses the `"x,y"` keys used by level files.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bad = || LevelError::BadCoordinate(s.to_string());
        let (x, y) = s.split_once(',').ok_or_else(bad)?;
        let x = x.trim().parse::<i32>().map_err(|_| bad())?;
        let y = y.trim().parse::<i32>().map_err(|_| bad())?;
        Ok(Cell::new(x, y))
    }
}

/// Facing / step direction. Screen coordinates: `Up` decreases `y`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// Only the four unit steps map to a direction.
    pub fn from_delta(dx: i32, dy: i32) -> Option<Direction> {
        match (dx, dy) {
            (0, -1) => Some(Direction::Up),
            (0, 1) => Some(Direction::Down),
            (-1, 0) => Some(Direction::Left),
            (1, 0) => Some(Direction::Right),
            _ => None,
        }
    }
}

// --- Dimensions -------------------------------------------------------------

/// One of the three overlays. The discriminant doubles as the index into a
/// level's maps and lock mask.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Dimension {
    #[default]
    Human = 0,
    Heaven = 1,
    Hell = 2,
}

impl Dimension {
    pub const ALL: [Dimension; 3] = [Dimension::Human, Dimension::Heaven, Dimension::Hell];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(idx: usize) -> Option<Dimension> {
        Self::ALL.get(idx).copied()
    }

    pub fn name(self) -> &'static str {
        match self {
            Dimension::Human => "human",
            Dimension::Heaven => "heaven",
            Dimension::Hell => "hell",
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// --- Cells & grids ----------------------------------------------------------

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CellKind {
    #[default]
    Path,
    Wall,
    /// Passable; marks where a trigger sits in this dimension.
    ItemMarker,
}

impl CellKind {
    pub fn from_code(code: u8) -> Option<CellKind> {
        match code {
            0 => Some(CellKind::Path),
            1 => Some(CellKind::Wall),
            2 => Some(CellKind::ItemMarker),
            _ => None,
        }
    }
}

/// Raw level-file representation of one dimension: rows of cell codes.
pub type GridCodes = [[u8; GRID_SIZE as usize]; GRID_SIZE as usize];

/// Fixed 10×10 matrix of cell kinds, indexed `[y][x]`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    rows: [[CellKind; GRID_SIZE as usize]; GRID_SIZE as usize],
}

impl Grid {
    pub fn from_codes(codes: &GridCodes) -> Result<Grid, LevelError> {
        let mut rows = [[CellKind::Path; GRID_SIZE as usize]; GRID_SIZE as usize];
        for (y, row) in codes.iter().enumerate() {
            for (x, &code) in row.iter().enumerate() {
                rows[y][x] = CellKind::from_code(code).ok_or(LevelError::UnknownCellCode {
                    code,
                    cell: Cell::new(x as i32, y as i32),
                })?;
            }
        }
        Ok(Grid { rows })
    }

    /// Solid rock everywhere except the listed cells.
    pub fn sealed(open: &[Cell]) -> Grid {
        let mut rows = [[CellKind::Wall; GRID_SIZE as usize]; GRID_SIZE as usize];
        for c in open.iter().filter(|c| c.in_bounds()) {
            rows[c.y as usize][c.x as usize] = CellKind::Path;
        }
        Grid { rows }
    }

    /// `None` outside the board.
    pub fn kind(&self, cell: Cell) -> Option<CellKind> {
        if !cell.in_bounds() {
            return None;
        }
        Some(self.rows[cell.y as usize][cell.x as usize])
    }

    /// All in-bounds cells with their kind, row-major.
    pub fn cells(&self) -> impl Iterator<Item = (Cell, CellKind)> + '_ {
        self.rows.iter().enumerate().flat_map(|(y, row)| {
            row.iter()
                .enumerate()
                .map(move |(x, &kind)| (Cell::new(x as i32, y as i32), kind))
        })
    }
}

/// True iff `cell` is off the board or a wall in `dimension`'s map.
pub fn is_blocked(level: &Level, dimension: Dimension, cell: Cell) -> bool {
    !matches!(
        level.map(dimension).kind(cell),
        Some(CellKind::Path | CellKind::ItemMarker)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_parse_and_display() {
        let c: Cell = " 5, 3".parse().unwrap();
        assert_eq!(c, Cell::new(5, 3));
        assert_eq!(c.to_string(), "5,3");
        assert!("5;3".parse::<Cell>().is_err());
        assert!("a,3".parse::<Cell>().is_err());
    }

    #[test]
    fn test_bounds() {
        assert!(Cell::new(0, 0).in_bounds());
        assert!(Cell::new(9, 9).in_bounds());
        assert!(!Cell::new(-1, 0).in_bounds());
        assert!(!Cell::new(0, 10).in_bounds());
    }

    #[test]
    fn test_direction_deltas_round_trip() {
        for d in Direction::ALL {
            let (dx, dy) = d.delta();
            assert_eq!(Direction::from_delta(dx, dy), Some(d));
        }
        assert_eq!(Direction::from_delta(1, 1), None);
        assert_eq!(Direction::from_delta(0, 0), None);
    }

    #[test]
    fn test_corner_neighbors_stay_on_board() {
        let n: Vec<Cell> = Cell::new(0, 0).neighbors().collect();
        assert_eq!(n.len(), 2);
        assert!(n.contains(&Cell::new(1, 0)));
        assert!(n.contains(&Cell::new(0, 1)));
    }

    #[test]
    fn test_dimension_index() {
        assert_eq!(Dimension::from_index(2), Some(Dimension::Hell));
        assert_eq!(Dimension::from_index(3), None);
        assert_eq!(Dimension::Heaven.index(), 1);
        assert_eq!(Dimension::default(), Dimension::Human);
    }

    #[test]
    fn test_grid_rejects_unknown_code() {
        let mut codes = [[0u8; 10]; 10];
        codes[4][7] = 9;
        match Grid::from_codes(&codes) {
            Err(LevelError::UnknownCellCode { code, cell }) => {
                assert_eq!(code, 9);
                assert_eq!(cell, Cell::new(7, 4));
            }
            other => panic!("expected UnknownCellCode, got {:?}", other),
        }
    }

    #[test]
    fn test_sealed_grid_opens_only_listed_cells() {
        let g = Grid::sealed(&[Cell::new(0, 0), Cell::new(9, 9), Cell::new(12, 0)]);
        assert_eq!(g.kind(Cell::new(0, 0)), Some(CellKind::Path));
        assert_eq!(g.kind(Cell::new(9, 9)), Some(CellKind::Path));
        assert_eq!(g.kind(Cell::new(4, 4)), Some(CellKind::Wall));
        assert_eq!(g.kind(Cell::new(12, 0)), None);
        let open = g.cells().filter(|(_, k)| *k != CellKind::Wall).count();
        assert_eq!(open, 2);
    }
}
