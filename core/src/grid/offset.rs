//! Offset coordinates.

use std::fmt;

use super::*;

/// Offset coordinates, i.e. the column and row of a cell in a rectangular
/// arrangement. For hexagonal layouts, every other row (or column) is
/// indented by half a cell, as determined by the [`Layout`].
///
/// Guide: [Offset Coordinates]
///
/// [Offset Coordinates]: https://www.redblobgames.com/grids/hexagons/#coordinates-offset
/// [`Layout`]: ../enum.Layout.html
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub struct Offset {
    pub col: i32,
    pub row: i32,
}

impl Offset {
    pub fn new(col: i32, row: i32) -> Offset {
        Offset { col, row }
    }

    /// Convert to cube coordinates in the given hexagonal layout.
    /// Returns `None` for the square layout.
    pub fn to_cube(self, layout: Layout) -> Option<Cube> {
        let (col, row) = (self.col, self.row);
        match layout {
            Layout::Square => None,
            Layout::OddRow => Some(Cube::new_xz(col - (row - (row & 1)) / 2, row)),
            Layout::EvenRow => Some(Cube::new_xz(col - (row + (row & 1)) / 2, row)),
            Layout::OddCol => Some(Cube::new_xz(col, row - (col - (col & 1)) / 2)),
            Layout::EvenCol => Some(Cube::new_xz(col, row - (col + (col & 1)) / 2)),
        }
    }

    /// Convert from cube coordinates in the given hexagonal layout.
    /// Returns `None` for the square layout.
    pub fn from_cube(c: Cube, layout: Layout) -> Option<Offset> {
        let (x, z) = (c.x(), c.z());
        match layout {
            Layout::Square => None,
            Layout::OddRow => Some(Offset::new(x + (z - (z & 1)) / 2, z)),
            Layout::EvenRow => Some(Offset::new(x + (z + (z & 1)) / 2, z)),
            Layout::OddCol => Some(Offset::new(x, z + (x - (x & 1)) / 2)),
            Layout::EvenCol => Some(Offset::new(x, z + (x + (x & 1)) / 2)),
        }
    }
}

impl fmt::Display for Offset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.col, self.row)
    }
}
