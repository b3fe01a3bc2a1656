//! Core ring type and the containment, area and winding predicates.

use crate::primitives::{Point2, Segment2};
use crate::tolerance::{is_convex_turn, point_on_segment};
use num_traits::Float;

/// A single ring represented as a sequence of vertices.
///
/// The ring is implicitly closed (the last vertex connects to the first);
/// the closing repeat of the first vertex is not stored.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon<F> {
    /// The vertices of the ring in walking order.
    pub vertices: Vec<Point2<F>>,
}

impl<F: Float> Polygon<F> {
    /// Creates a new ring from vertices.
    ///
    /// A trailing copy of the first vertex is dropped, so both open and
    /// closed vertex sequences are accepted.
    pub fn new(mut vertices: Vec<Point2<F>>) -> Self {
        if vertices.len() > 1 && vertices.first() == vertices.last() {
            vertices.pop();
        }
        Self { vertices }
    }

    /// Returns true if the ring has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns the number of distinct vertices.
    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the signed area using the shoelace formula.
    ///
    /// Positive for CCW winding, negative for CW winding.
    pub fn signed_area(&self) -> F {
        polygon_signed_area(&self.vertices)
    }

    /// Returns the absolute area.
    pub fn area(&self) -> F {
        polygon_area(&self.vertices)
    }

    /// Tests if a point is inside the ring (ray casting).
    pub fn contains(&self, point: Point2<F>) -> bool {
        polygon_contains(&self.vertices, point)
    }

    /// Returns the winding number (+1 or -1) of a simple ring.
    ///
    /// See [`ring_winding`].
    pub fn winding(&self) -> i32 {
        ring_winding(&self.vertices)
    }

    /// Returns the vertices with the first vertex repeated at the end.
    pub fn closed_vertices(&self) -> Vec<Point2<F>> {
        let mut closed = self.vertices.clone();
        if let Some(&first) = self.vertices.first() {
            closed.push(first);
        }
        closed
    }
}

/// Computes the signed area of a ring using the shoelace formula.
///
/// Positive for CCW winding, negative for CW winding. A trailing closing
/// vertex contributes nothing, so open and closed sequences give the same
/// result.
pub fn polygon_signed_area<F: Float>(vertices: &[Point2<F>]) -> F {
    if vertices.len() < 3 {
        return F::zero();
    }

    let mut area = F::zero();
    let n = vertices.len();

    for i in 0..n {
        let j = (i + 1) % n;
        area = area + vertices[i].x * vertices[j].y;
        area = area - vertices[j].x * vertices[i].y;
    }

    area / (F::one() + F::one())
}

/// Computes the absolute area of a ring.
pub fn polygon_area<F: Float>(vertices: &[Point2<F>]) -> F {
    polygon_signed_area(vertices).abs()
}

/// Tests if a point is inside a ring using the ray casting algorithm.
///
/// Points on the boundary may return either true or false; use
/// [`point_on_ring`] first when the distinction matters.
pub fn polygon_contains<F: Float>(vertices: &[Point2<F>], point: Point2<F>) -> bool {
    if vertices.len() < 3 {
        return false;
    }

    let mut inside = false;
    let n = vertices.len();

    let mut j = n - 1;
    for i in 0..n {
        let vi = vertices[i];
        let vj = vertices[j];

        if ((vi.y > point.y) != (vj.y > point.y))
            && (point.x < (vj.x - vi.x) * (point.y - vi.y) / (vj.y - vi.y) + vi.x)
        {
            inside = !inside;
        }
        j = i;
    }

    inside
}

/// Tests if a point lies on any edge of a ring, within distance `eps`.
pub fn point_on_ring<F: Float>(vertices: &[Point2<F>], point: Point2<F>, eps: F) -> bool {
    let n = vertices.len();
    (0..n).any(|i| {
        let edge = Segment2::new(vertices[i], vertices[(i + 1) % n]);
        point_on_segment(point, edge, eps)
    })
}

/// Returns the index of the lowest of the leftmost vertices.
///
/// Vertices are ordered by x, then by y. On a vertical left edge this picks
/// the bottom vertex, whose neighbours cannot both be collinear with it.
/// Returns `None` for an empty slice.
pub fn leftmost_vertex<F: Float>(vertices: &[Point2<F>]) -> Option<usize> {
    let mut best: Option<usize> = None;
    for (i, v) in vertices.iter().enumerate() {
        match best {
            Some(b) if !is_left_of(*v, vertices[b]) => {}
            _ => best = Some(i),
        }
    }
    best
}

/// Orders points by x, then by y.
#[inline]
pub(crate) fn is_left_of<F: Float>(a: Point2<F>, b: Point2<F>) -> bool {
    a.x < b.x || (a.x == b.x && a.y < b.y)
}

/// Computes the winding number (+1 or -1) of a simple ring.
///
/// The leftmost vertex of a simple ring is always convex, so the ring runs
/// in the positive direction exactly when that vertex is convex under a
/// positive-winding assumption. Rings with fewer than three vertices report
/// +1.
pub fn ring_winding<F: Float>(vertices: &[Point2<F>]) -> i32 {
    let n = vertices.len();
    if n < 3 {
        return 1;
    }
    let Some(left) = leftmost_vertex(vertices) else {
        return 1;
    };

    let prev = vertices[(left + n - 1) % n];
    let next = vertices[(left + 1) % n];
    if is_convex_turn(prev, vertices[left], next, true) {
        1
    } else {
        -1
    }
}
