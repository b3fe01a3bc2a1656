//! 2D line segment type.

use super::{Point2, Vec2};
use num_traits::Float;

/// A 2D line segment, one edge of a ring.
///
/// Generic over floating-point types (`f32` or `f64`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment2<F> {
    pub start: Point2<F>,
    pub end: Point2<F>,
}

impl<F: Float> Segment2<F> {
    /// Creates a new segment from two points.
    #[inline]
    pub fn new(start: Point2<F>, end: Point2<F>) -> Self {
        Self { start, end }
    }

    /// Creates a segment from coordinate pairs.
    #[inline]
    pub fn from_coords(x1: F, y1: F, x2: F, y2: F) -> Self {
        Self::new(Point2::new(x1, y1), Point2::new(x2, y2))
    }

    /// Returns the direction vector from start to end.
    #[inline]
    pub fn direction(self) -> Vec2<F> {
        self.end - self.start
    }

    /// Returns the point at parameter `t` along the segment.
    ///
    /// `t = 0` is `start`, `t = 1` is `end`.
    #[inline]
    pub fn point_at(self, t: F) -> Point2<F> {
        self.start.lerp(self.end, t)
    }

    /// Computes the closest point on the segment to `p`.
    ///
    /// Returns `(closest_point, t)` with `t` clamped to [0, 1].
    pub fn closest_point(self, p: Point2<F>) -> (Point2<F>, F) {
        let v = self.direction();
        let len_sq = v.magnitude_squared();

        if len_sq <= F::epsilon() {
            return (self.start, F::zero());
        }

        let t = (p - self.start).dot(v) / len_sq;
        let t = t.max(F::zero()).min(F::one());

        (self.point_at(t), t)
    }

    /// Computes the squared distance from a point to this segment.
    #[inline]
    pub fn distance_squared_to_point(self, p: Point2<F>) -> F {
        let (closest, _) = self.closest_point(p);
        p.distance_squared(closest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_point_at() {
        let s: Segment2<f64> = Segment2::from_coords(2.0, 0.0, 0.0, 2.0);
        assert_eq!(s.point_at(0.0), Point2::new(2.0, 0.0));
        assert_eq!(s.point_at(0.5), Point2::new(1.0, 1.0));
        assert_eq!(s.point_at(1.0), Point2::new(0.0, 2.0));
    }

    #[test]
    fn test_closest_point_clamps() {
        let s: Segment2<f64> = Segment2::from_coords(0.0, 0.0, 10.0, 0.0);

        let (above, t) = s.closest_point(Point2::new(4.0, 3.0));
        assert_relative_eq!(above.x, 4.0, epsilon = 1e-12);
        assert_relative_eq!(t, 0.4, epsilon = 1e-12);

        let (_, t_before) = s.closest_point(Point2::new(-5.0, 1.0));
        assert_eq!(t_before, 0.0);

        let (_, t_after) = s.closest_point(Point2::new(50.0, 1.0));
        assert_eq!(t_after, 1.0);
    }

    #[test]
    fn test_distance_to_degenerate_segment() {
        let s: Segment2<f64> = Segment2::from_coords(1.0, 1.0, 1.0, 1.0);
        assert_relative_eq!(
            s.distance_squared_to_point(Point2::new(4.0, 5.0)),
            25.0,
            epsilon = 1e-12
        );
    }
}
