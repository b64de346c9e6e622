//! A cube coordinate system for hexagonal grids.

use nalgebra::geometry::Point3;
use nalgebra::Vector3;

use std::ops::Add;

/// Vectors for the displacement to a neighbouring (adjacent) cube coordinate
/// along one of the sides of a hexagon.
const CUBE_DIR_VECTORS: [ [i32; 3]; 6] =
    [ [0,  1, -1], [ 1, 0, -1], [ 1, -1, 0]
    , [0, -1,  1], [-1, 0,  1], [-1,  1, 0]
    ];

/// Cube coordinates, i.e. points in 3d space, satisfying `x + y + z = 0`.
///
/// Every hexagonal offset layout embeds into cube coordinates, in which
/// distances are simple to compute.
///
/// Guide: [Cube coordinates]
///
/// [Cube coordinates]: https://www.redblobgames.com/grids/hexagons/#coordinates-cube
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
pub struct Cube {
    p: Point3<i32>,
}

impl Cube {
    pub fn origin() -> Cube {
        Self::mk(0, 0, 0)
    }

    pub fn new_xz(x: i32, z: i32) -> Cube {
        Self::mk(x, -x - z, z)
    }

    pub fn x(&self) -> i32 { self.p.coords.x }
    pub fn y(&self) -> i32 { self.p.coords.y }
    pub fn z(&self) -> i32 { self.p.coords.z }

    /// Iterate over the neighbouring (adjacent) cube coordinates.
    pub fn neighbours(self) -> impl Iterator<Item=Cube> {
        CUBE_DIR_VECTORS.iter().map(move |v| self + Vector3::from(*v))
    }

    /// The distance to another cube coordinate, i.e. the number of
    /// steps between adjacent hexagons needed to get there.
    pub fn distance(&self, other: Cube) -> u32 {
        let d = self.p - other.p;
        d.x.unsigned_abs().max(d.y.unsigned_abs()).max(d.z.unsigned_abs())
    }

    fn mk(x: i32, y: i32, z: i32) -> Cube {
        let c = Cube { p: Point3::new(x, y, z) };
        debug_assert!(c.is_valid());
        c
    }

    /// Validity check for the cube coordinates, i.e. that they
    /// represent a point in the plane defined by `x + y + z = 0`.
    fn is_valid(&self) -> bool {
        self.x() + self.y() + self.z() == 0
    }
}

impl Add<Vector3<i32>> for Cube {
    type Output = Cube;

    fn add(self, v: Vector3<i32>) -> Cube {
        Cube { p: self.p + v }
    }
}
