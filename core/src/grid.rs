//! Grid coordinates of board cells and the grid distance between them.
pub mod cube;
pub mod offset;

pub use self::cube::*;
pub use self::offset::*;

use crate::geo::Tiling;

/// Displacements to the four orthogonal neighbours on a square grid.
const SQUARE_DIRS: [(i32, i32); 4] = [(1, 0), (0, 1), (-1, 0), (0, -1)];

/// The arrangement of cells on a board, which determines the meaning of
/// their [`Offset`] coordinates.
///
/// [`Offset`]: offset/struct.Offset.html
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub enum Layout {
    /// Squares with four orthogonal neighbours.
    Square,
    /// Hexagons in rows, odd rows indented by half a cell.
    OddRow,
    /// Hexagons in rows, even rows indented by half a cell.
    EvenRow,
    /// Hexagons in columns, odd columns indented by half a cell.
    OddCol,
    /// Hexagons in columns, even columns indented by half a cell.
    EvenCol,
}

/// All layouts made of hexagons.
pub const HEXAGONAL: [Layout; 4] =
    [Layout::OddRow, Layout::EvenRow, Layout::OddCol, Layout::EvenCol];

impl Layout {
    /// The shape of the cells in this layout.
    pub fn tiling(self) -> Tiling {
        match self {
            Layout::Square => Tiling::Square,
            _              => Tiling::Hexagon,
        }
    }

    /// The grid distance between two cells, i.e. the least number of steps
    /// between adjacent cells needed to get from one to the other. Never
    /// exceeds the number of hops of any path on a board wired according to
    /// this layout, which makes it usable as a search heuristic.
    pub fn distance(self, a: Offset, b: Offset) -> u32 {
        match (a.to_cube(self), b.to_cube(self)) {
            (Some(ca), Some(cb)) => ca.distance(cb),
            _ => (a.col - b.col).unsigned_abs() + (a.row - b.row).unsigned_abs(),
        }
    }

    /// The coordinates of the cells adjacent to the given one.
    pub fn neighbours(self, o: Offset) -> Vec<Offset> {
        match o.to_cube(self) {
            Some(c) => c.neighbours().filter_map(|n| Offset::from_cube(n, self)).collect(),
            None => SQUARE_DIRS.iter().map(|(dc, dr)| Offset::new(o.col + dc, o.row + dr)).collect(),
        }
    }
}
