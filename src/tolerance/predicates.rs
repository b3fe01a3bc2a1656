//! Geometric predicates with explicit tolerance.

use crate::primitives::{Point2, Segment2};
use num_traits::Float;

/// Result of an orientation test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Points are counter-clockwise (positive area).
    CounterClockwise,
    /// Points are clockwise (negative area).
    Clockwise,
    /// Points are collinear (within tolerance).
    Collinear,
}

/// Computes the orientation of three points with tolerance.
///
/// `eps` is compared against the absolute value of the cross product of
/// `b - a` and `c - a` (twice the signed area of the triangle).
#[inline]
pub fn orient2d<F: Float>(a: Point2<F>, b: Point2<F>, c: Point2<F>, eps: F) -> Orientation {
    let cross = (b - a).cross(c - a);

    if cross > eps {
        Orientation::CounterClockwise
    } else if cross < -eps {
        Orientation::Clockwise
    } else {
        Orientation::Collinear
    }
}

/// Tests whether the turn `a -> b -> c` is convex for a ring of the given
/// orientation.
///
/// With `positive = true` the ring is assumed to run counter-clockwise, so a
/// left turn (or a straight continuation) is convex. With `positive = false`
/// the test is mirrored.
#[inline]
pub fn is_convex_turn<F: Float>(a: Point2<F>, b: Point2<F>, c: Point2<F>, positive: bool) -> bool {
    let cross = (b - a).cross(c - a);
    (cross >= F::zero()) == positive
}

/// Checks if a point lies on a line segment within distance `eps`.
#[inline]
pub fn point_on_segment<F: Float>(p: Point2<F>, segment: Segment2<F>, eps: F) -> bool {
    segment.distance_squared_to_point(p) <= eps * eps
}

/// A proper crossing between two segments.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentCrossing<F> {
    /// The crossing point, evaluated on the first segment.
    pub point: Point2<F>,
    /// Parameter along the first segment (0 = start, 1 = end).
    pub t1: F,
    /// Parameter along the second segment (0 = start, 1 = end).
    pub t2: F,
}

/// Finds the crossing of two segments that lies strictly inside both.
///
/// Returns `None` for parallel or collinear segments and for contacts whose
/// parameter lies within `eps` of either segment's endpoints. `eps` is a
/// parameter-space tolerance; parallelism is judged on the sine of the angle
/// between the segments.
pub fn segment_crossing<F: Float>(
    s1: Segment2<F>,
    s2: Segment2<F>,
    eps: F,
) -> Option<SegmentCrossing<F>> {
    let d1 = s1.direction();
    let d2 = s2.direction();
    let cross = d1.cross(d2);

    let scale = (d1.magnitude_squared() * d2.magnitude_squared()).sqrt();
    if scale <= F::zero() || cross.abs() <= eps * scale {
        return None;
    }

    // s1.start + t1 * d1 = s2.start + t2 * d2
    let d = s2.start - s1.start;
    let t1 = d.cross(d2) / cross;
    let t2 = d.cross(d1) / cross;

    let upper = F::one() - eps;
    if t1 > eps && t1 < upper && t2 > eps && t2 < upper {
        Some(SegmentCrossing {
            point: s1.point_at(t1),
            t1,
            t2,
        })
    } else {
        None
    }
}
