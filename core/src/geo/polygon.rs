//! Regular polygons, i.e. the outlines of board cells.

use num_traits::FromPrimitive;
use std::f64::consts::PI;

use super::*;

/// A regular polygon, given by its center and the closed, counter-clockwise
/// sequence of equally long line segments forming its boundary.
#[derive(Clone, Debug, PartialEq)]
pub struct Polygon {
    center: Point,
    segments: Vec<Line>,
}

impl Polygon {
    /// Construct a regular polygon with the given number of sides whose
    /// vertices are at distance `radius` from the `center`. The polygon is
    /// rotated by `angle` radians from its default orientation, in which a
    /// flat side faces up for squares and a corner for hexagons.
    pub fn regular(sides: usize, center: Point, radius: f64, angle: f64) -> Polygon {
        debug_assert!(sides >= 3);
        let step = 2. * PI / sides as f64;
        let corner = |a: f64| center + Vector::new(a.cos(), a.sin()) * radius;
        let mut a = angle + step / 2.;
        let mut prev = corner(a);
        let mut segments = Vec::with_capacity(sides);
        for _ in 0 .. sides {
            a += step;
            let next = corner(a);
            segments.push(Line::new(prev, next));
            prev = next;
        }
        Polygon { center, segments }
    }

    /// A regular polygon of the given tiling kind.
    pub fn tile(tiling: Tiling, center: Point, radius: f64) -> Polygon {
        Self::regular(tiling.sides(), center, radius, 0.)
    }

    pub fn hexagon(center: Point, radius: f64) -> Polygon {
        Self::tile(Tiling::Hexagon, center, radius)
    }

    pub fn square(center: Point, radius: f64) -> Polygon {
        Self::tile(Tiling::Square, center, radius)
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn segments(&self) -> &[Line] {
        &self.segments
    }

    pub fn sides(&self) -> usize {
        self.segments.len()
    }

    /// The corners of the polygon, in boundary order.
    pub fn vertices(&self) -> impl Iterator<Item=Point> + '_ {
        self.segments.iter().map(|s| s.start())
    }

    /// The tiling kind of the polygon, if it is one of the kinds that tile
    /// the plane.
    pub fn tiling(&self) -> Option<Tiling> {
        Tiling::from_usize(self.sides())
    }

    pub fn edge_length(&self) -> f64 {
        self.segments.first().map_or(0., |s| s.length())
    }

    /// The distance from the center to any vertex.
    ///
    /// Guide: [Circumradius](https://en.wikipedia.org/wiki/Regular_polygon#Circumradius)
    pub fn circumradius(&self) -> f64 {
        self.edge_length() / (2. * (PI / self.sides() as f64).sin())
    }

    /// The distance from the center to the midpoint of any side.
    ///
    /// Guide: [Apothem](https://en.wikipedia.org/wiki/Apothem)
    pub fn apothem(&self) -> f64 {
        self.edge_length() / (2. * (PI / self.sides() as f64).tan())
    }

    pub fn area(&self) -> f64 {
        0.5 * self.sides() as f64 * self.edge_length() * self.apothem()
    }

    /// Whether the point lies inside the polygon or on its boundary.
    pub fn contains(&self, p: Point) -> bool {
        let s = self.edge_length();
        self.segments.iter().all(|l| {
            let side = l.vector().perp(&(p - l.start()));
            side >= 0. || approx_eq_scaled(side, 0., s * s)
        })
    }

    /// The points at which the line intersects the boundary, at most one
    /// per boundary segment, in boundary order.
    pub fn intersections(&self, line: &Line) -> Vec<Point> {
        self.segments.iter().filter_map(|l| l.intersection(line)).collect()
    }

    /// The boundary segments that contain the given point. A vertex
    /// belongs to the two segments meeting in it.
    pub fn boundary_at(&self, p: Point) -> impl Iterator<Item=&Line> + '_ {
        self.segments.iter().filter(move |l| l.contains(p))
    }

    /// Whether the point is (approximately) a vertex of the polygon.
    pub fn is_vertex(&self, p: Point) -> bool {
        let s = self.edge_length();
        self.vertices().any(|v| approx_eq_points(&v, &p, s))
    }

    /// The boundary segment that approximately equals the given line.
    pub fn side(&self, line: &Line) -> Option<&Line> {
        self.segments.iter().find(|l| l.approx_eq(line))
    }

    /// The boundary segment shared with another polygon, if they are
    /// adjacent.
    pub fn shared_side(&self, other: &Polygon) -> Option<Line> {
        self.segments.iter().find(|l| other.side(l).is_some()).copied()
    }

    /// Rotate the polygon by `angle` radians around its center.
    pub fn rotate(&self, angle: f64) -> Polygon {
        Polygon {
            center: self.center,
            segments: self.segments.iter().map(|l| l.rotate(angle, self.center)).collect()
        }
    }

    /// Whether both polygons have the same boundary, regardless of
    /// where their boundary sequences begin.
    pub fn approx_eq(&self, other: &Polygon) -> bool {
        self.sides() == other.sides() &&
        self.segments.iter().all(|l| other.side(l).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck::*;
    use rand::Rng;

    impl Arbitrary for Polygon {
        fn arbitrary<G: Gen>(g: &mut G) -> Polygon {
            let sides  = g.gen_range(3, 13);
            let center = Point::new(g.gen_range(-100., 100.), g.gen_range(-100., 100.));
            let radius = g.gen_range(0.01, 50.);
            let angle  = g.gen_range(0., 2. * PI);
            Polygon::regular(sides, center, radius, angle)
        }
    }

    #[test]
    fn prop_regular() {
        fn prop(p: Polygon) -> bool {
            let s = p.edge_length();
            let n = p.sides();
            p.segments().iter().all(|l| approx_eq(l.length(), s)) &&
            (0 .. n).all(|i| approx_eq_points(
                &p.segments()[i].end(), &p.segments()[(i + 1) % n].start(), s)) &&
            p.vertices().all(|v| approx_eq(nalgebra::distance(&v, &p.center()), p.circumradius()))
        }
        quickcheck(prop as fn(Polygon) -> bool);
    }

    #[test]
    fn prop_contains_center_not_outside() {
        fn prop(p: Polygon) -> bool {
            let far = p.center() + Vector::new(p.circumradius() * 1.01, 0.);
            p.contains(p.center()) && !p.contains(far) && p.vertices().all(|v| p.contains(v))
        }
        quickcheck(prop as fn(Polygon) -> bool);
    }

    #[test]
    fn prop_rotate_full_turn() {
        fn prop(p: Polygon) -> bool {
            p.rotate(2. * PI).approx_eq(&p) &&
            p.rotate(2. * PI / p.sides() as f64).approx_eq(&p)
        }
        quickcheck(prop as fn(Polygon) -> bool);
    }

    #[test]
    fn unit_square() {
        let sq = Polygon::square(Point::new(0.5, 0.5), 0.5f64.sqrt());
        assert_eq!(sq.tiling(), Some(Tiling::Square));
        assert!(approx_eq(sq.edge_length(), 1.));
        assert!(approx_eq(sq.area(), 1.));
        assert!(approx_eq(sq.apothem(), 0.5));
        for v in &[(1., 1.), (0., 1.), (0., 0.), (1., 0.)] {
            assert!(sq.is_vertex(Point::new(v.0, v.1)), "{:?}", v);
        }
        assert!(!sq.contains(Point::new(1.5, 0.5)));
    }

    #[test]
    fn hexagon_has_corner_on_top() {
        let h = Polygon::hexagon(Point::origin(), 1.);
        assert_eq!(h.tiling(), Some(Tiling::Hexagon));
        assert!(h.is_vertex(Point::new(0., 1.)));
        assert!(h.is_vertex(Point::new(0., -1.)));
        assert!(approx_eq(h.circumradius(), 1.));
    }

    #[test]
    fn line_through_center_hits_two_sides() {
        let h = Polygon::hexagon(Point::new(3., 4.), 2.);
        let l = Line::new(Point::new(0., 4.), Point::new(6., 4.));
        let hits = h.intersections(&l);
        assert_eq!(hits.len(), 2);
        assert!(hits.iter().all(|p| h.boundary_at(*p).count() == 1));
    }

    #[test]
    fn adjacent_squares_share_a_side() {
        let r = 0.5f64.sqrt();
        let a = Polygon::square(Point::new(0.5, 0.5), r);
        let b = Polygon::square(Point::new(1.5, 0.5), r);
        let c = Polygon::square(Point::new(2.5, 0.5), r);
        let s = a.shared_side(&b).unwrap();
        assert!(s.approx_eq(&Line::new(Point::new(1., 0.), Point::new(1., 1.))));
        assert!(a.shared_side(&c).is_none());
    }
}
