//! Boards laid out on regular grids.
#![allow(dead_code)]

use boardkit::board::{ Board, NodeId };
use boardkit::geo::{ Point, Polygon };
use boardkit::grid::{ Layout, Offset };

/// A rectangular board of `cols` × `rows` cells of uniform cost 1, with
/// edges of cost 0 between adjacent cells.
pub struct Grid {
    pub board: Board,
    pub cols: i32,
    pub rows: i32,
    cells: Vec<NodeId>,
}

impl Grid {
    pub fn at(&self, col: i32, row: i32) -> NodeId {
        self.cells[(row * self.cols + col) as usize]
    }

    pub fn contains(&self, o: Offset) -> bool {
        o.col >= 0 && o.col < self.cols && o.row >= 0 && o.row < self.rows
    }

    pub fn cells(&self) -> impl Iterator<Item=(Offset, NodeId)> + '_ {
        let cols = self.cols;
        self.cells.iter().enumerate().map(move |(i, n)| {
            (Offset::new(i as i32 % cols, i as i32 / cols), *n)
        })
    }

    pub fn center(&self, col: i32, row: i32) -> Point {
        self.board.node(self.at(col, row)).unwrap().shape().unwrap().center()
    }
}

/// Pointy-top hexagons of circumradius 1, odd rows indented to the right.
/// Rows go downwards.
pub fn hexes(cols: i32, rows: i32) -> Grid {
    let w = 3f64.sqrt();
    build(Layout::OddRow, cols, rows, |o| {
        let x = o.col as f64 * w + (o.row & 1) as f64 * w / 2.;
        let y = -o.row as f64 * 1.5;
        Polygon::hexagon(Point::new(x, y), 1.)
    })
}

/// Unit squares, the cell at column `c` and row `r` centered at
/// `(c + 0.5, r + 0.5)`.
pub fn squares(cols: i32, rows: i32) -> Grid {
    build(Layout::Square, cols, rows, |o| {
        let center = Point::new(o.col as f64 + 0.5, o.row as f64 + 0.5);
        Polygon::square(center, 0.5f64.sqrt())
    })
}

fn build(layout: Layout, cols: i32, rows: i32, shape: impl Fn(Offset) -> Polygon) -> Grid {
    let mut board = Board::with_layout(layout);
    let mut cells = Vec::new();
    for row in 0 .. rows {
        for col in 0 .. cols {
            let o = Offset::new(col, row);
            cells.push(board.add_cell(1, shape(o), o));
        }
    }
    let mut grid = Grid { board, cols, rows, cells };
    let pairs: Vec<(NodeId, NodeId)> = grid.cells()
        .flat_map(|(o, n)| layout.neighbours(o).into_iter()
            .filter(|m| grid.contains(*m))
            .map(|m| (n, grid.at(m.col, m.row)))
            .filter(|(n, m)| n < m)
            .collect::<Vec<_>>())
        .collect();
    for (n, m) in pairs {
        grid.board.connect(n, m, 0, 0).unwrap();
    }
    let linked = grid.board.link_boundaries();
    assert_eq!(linked, grid.board.edge_count());
    grid
}
