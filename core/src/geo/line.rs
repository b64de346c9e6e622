//! Line segments.

use nalgebra::Rotation2;

use super::*;

/// A line segment between two points. The direction of a segment
/// matters for operations that refer to its start or end, but not
/// for (approximate) equality.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Line {
    start: Point,
    end: Point,
}

impl Line {
    pub fn new(start: Point, end: Point) -> Line {
        Line { start, end }
    }

    pub fn start(&self) -> Point {
        self.start
    }

    pub fn end(&self) -> Point {
        self.end
    }

    /// The displacement from the start to the end of the segment.
    pub fn vector(&self) -> Vector {
        self.end - self.start
    }

    pub fn length(&self) -> f64 {
        self.vector().norm()
    }

    pub fn center(&self) -> Point {
        nalgebra::center(&self.start, &self.end)
    }

    /// The angle (in radians) of the segment relative to the positive x-axis.
    pub fn angle(&self) -> f64 {
        let v = self.vector();
        v.y.atan2(v.x)
    }

    pub fn reversed(&self) -> Line {
        Line::new(self.end, self.start)
    }

    pub fn translate(&self, v: Vector) -> Line {
        Line::new(self.start + v, self.end + v)
    }

    /// Shift the segment sideways by the given distance. Positive distances
    /// move it to the left of its direction, negative ones to the right.
    pub fn offset(&self, distance: f64) -> Line {
        let len = self.length();
        if len == 0. {
            return *self
        }
        let v = self.vector() / len;
        self.translate(Vector::new(-v.y, v.x) * distance)
    }

    /// Rotate the segment by `angle` radians around `center`.
    pub fn rotate(&self, angle: f64, center: Point) -> Line {
        let rot = Rotation2::new(angle);
        Line::new(center + rot * (self.start - center),
                  center + rot * (self.end - center))
    }

    /// The segment of the given length that starts at `start` and is
    /// perpendicular (counter-clockwise) to this segment.
    pub fn perpendicular(&self, start: Point, length: f64) -> Line {
        let a = self.angle() + std::f64::consts::FRAC_PI_2;
        Line::new(start, start + Vector::new(a.cos(), a.sin()) * length)
    }

    /// The shortest distance between the segment and a point.
    pub fn distance_to(&self, p: Point) -> f64 {
        let r = self.vector();
        let rr = r.dot(&r);
        if rr == 0. {
            return nalgebra::distance(&self.start, &p)
        }
        let t = ((p - self.start).dot(&r) / rr).max(0.).min(1.);
        nalgebra::distance(&(self.start + r * t), &p)
    }

    /// Whether the point lies on the segment.
    pub fn contains(&self, p: Point) -> bool {
        approx_eq_scaled(self.distance_to(p), 0., self.length())
    }

    /// Whether the point is one of the endpoints of the segment.
    pub fn has_endpoint(&self, p: Point) -> bool {
        let s = self.length();
        approx_eq_points(&self.start, &p, s) || approx_eq_points(&self.end, &p, s)
    }

    /// Whether the segments have (approximately) the same direction or
    /// the opposite one.
    pub fn is_parallel(&self, other: &Line) -> bool {
        let (r, s) = (self.vector(), other.vector());
        approx_eq_scaled(r.perp(&s), 0., r.norm() * s.norm())
    }

    /// Whether both segments connect the same two points, in either direction.
    pub fn approx_eq(&self, other: &Line) -> bool {
        let s = self.length().max(other.length());
        (approx_eq_points(&self.start, &other.start, s) &&
         approx_eq_points(&self.end, &other.end, s)) ||
        (approx_eq_points(&self.start, &other.end, s) &&
         approx_eq_points(&self.end, &other.start, s))
    }

    /// The point at which two segments intersect, if any. If the segments
    /// are collinear and overlap, the overlapping point that comes first
    /// along the direction of `self` is returned.
    pub fn intersection(&self, other: &Line) -> Option<Point> {
        let p  = self.start;
        let r  = self.vector();
        let q  = other.start;
        let s  = other.vector();
        let qp = q - p;
        let rs = r.perp(&s);
        if approx_eq_scaled(rs, 0., r.norm() * s.norm()) {
            if !approx_eq_scaled(qp.perp(&r), 0., qp.norm() * r.norm()) {
                // Parallel, but not on the same line.
                return None
            }
            let rr = r.dot(&r);
            if rr == 0. {
                return if other.contains(p) { Some(p) } else { None }
            }
            let t0 = qp.dot(&r) / rr;
            let t1 = t0 + s.dot(&r) / rr;
            let (lo, hi) = (t0.min(t1), t0.max(t1));
            if hi < -EPSILON || lo > 1. + EPSILON {
                return None
            }
            return Some(p + r * lo.max(0.))
        }
        let t = qp.perp(&s) / rs;
        let u = qp.perp(&r) / rs;
        if unit(t) && unit(u) {
            Some(p + r * t)
        } else {
            None
        }
    }
}

/// Whether a segment parameter lies in `[0,1]`, up to tolerance.
fn unit(t: f64) -> bool {
    t >= -EPSILON && t <= 1. + EPSILON
}
