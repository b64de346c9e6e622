//! Geometry of points, line segments and regular polygons in a 2d
//! cartesian coordinate system.
//!
//! All comparisons between floating-point quantities are approximate and
//! relative to the magnitude of what is being compared, so that the same
//! code behaves identically for boards drawn at any scale.

pub mod line;
pub mod polygon;

pub use self::line::Line;
pub use self::polygon::Polygon;

use nalgebra::{ Point2, Vector2 };
use num_traits::Float;

pub type Point = Point2<f64>;
pub type Vector = Vector2<f64>;

/// The relative tolerance of approximate comparisons.
pub const EPSILON: f64 = 1e-9;

/// The kinds of regular polygons that tile the plane on their own,
/// identified by their number of sides.
#[derive(PartialEq, Eq, Clone, Copy, Debug, Hash)]
#[derive(FromPrimitive)]
pub enum Tiling {
    Square  = 4,
    Hexagon = 6,
}

impl Tiling {
    pub fn sides(self) -> usize {
        self as usize
    }
}

/// Whether `a` and `b` are equal up to a tolerance relative to
/// the larger of their magnitudes.
pub fn approx_eq<F: Float>(a: F, b: F) -> bool {
    approx_eq_scaled(a, b, a.abs().max(b.abs()))
}

/// Whether `a` and `b` are equal up to a tolerance relative to
/// the given scale, e.g. the length of the segments or the radius
/// of the polygons the quantities were derived from.
pub fn approx_eq_scaled<F: Float>(a: F, b: F, scale: F) -> bool {
    let eps = F::from(EPSILON).unwrap_or_else(F::epsilon);
    a == b || (a - b).abs() <= eps * scale.abs()
}

/// Whether two points coincide up to a tolerance relative to the given scale.
pub fn approx_eq_points(p: &Point, q: &Point, scale: f64) -> bool {
    approx_eq_scaled(nalgebra::distance(p, q), 0., scale)
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_traits::FromPrimitive;
    use quickcheck::*;

    #[test]
    fn prop_approx_eq_scale_invariant() {
        fn prop(a: i32, e: i8) -> bool {
            let scale = 10f64.powi(e as i32 % 12);
            let x = a as f64 * scale;
            approx_eq(x, x * (1. + 1e-12)) &&
            approx_eq(x as f32, x as f32) &&
            (a == 0 || !approx_eq(x, x * 1.001))
        }
        quickcheck(prop as fn(i32, i8) -> bool);
    }

    #[test]
    fn tiny_magnitudes_are_not_equal() {
        assert!(!approx_eq(1e-20, 2e-20));
        assert!(approx_eq_scaled(1e-20, 2e-20, 1.));
    }

    #[test]
    fn tiling_from_sides() {
        assert_eq!(Tiling::from_usize(4), Some(Tiling::Square));
        assert_eq!(Tiling::from_usize(6), Some(Tiling::Hexagon));
        assert_eq!(Tiling::from_usize(5), None);
        assert_eq!(Tiling::Hexagon.sides(), 6);
    }
}
