//! Self-intersection detection across the rings of a polygon.
//!
//! The decomposition consumes self-intersections through the
//! [`IntersectionDetector`] trait. [`SegmentCrossings`] is the default
//! brute-force detector; callers with their own intersection data (or a
//! faster detector) can supply another implementation.
//!
//! # Example
//!
//! ```
//! use ringwalk::Point2;
//! use ringwalk::polygon::{ComplexPolygon, IntersectionDetector, SegmentCrossings};
//!
//! let bowtie = ComplexPolygon::from_rings(vec![vec![
//!     Point2::new(0.0, 0.0),
//!     Point2::new(2.0, 0.0),
//!     Point2::new(0.0, 2.0),
//!     Point2::new(2.0, 2.0),
//! ]])
//! .unwrap();
//!
//! let records = SegmentCrossings::default().detect(&bowtie);
//! // One crossing, reported once from each edge.
//! assert_eq!(records.len(), 2);
//! assert_eq!(records.iter().filter(|r| r.canonical).count(), 1);
//! ```

use super::core::Polygon;
use super::rings::ComplexPolygon;
use crate::primitives::{Point2, Segment2};
use crate::tolerance::{point_on_segment, segment_crossing};
use num_traits::Float;

/// A position on one ring edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeSite<F> {
    /// Ring index (0 is the outer ring).
    pub ring: usize,
    /// Edge index: the edge from vertex `edge` to vertex `edge + 1`.
    pub edge: usize,
    /// Fractional position along the edge, in (0, 1).
    pub fraction: F,
}

/// One self-intersection as seen from one of its two edges.
///
/// Every crossing is reported twice, once from each edge, with the two sites
/// swapped. Both records carry the bit-identical `point`; exactly one of
/// them is `canonical`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawIntersection<F> {
    /// The crossing point.
    pub point: Point2<F>,
    /// The edge this record is reported from.
    pub first: EdgeSite<F>,
    /// The other edge through the crossing.
    pub second: EdgeSite<F>,
    /// Marks one of the two mirrored records.
    pub canonical: bool,
}

impl<F: Float> RawIntersection<F> {
    /// Returns the record seen from the other edge.
    pub fn mirrored(&self) -> Self {
        Self {
            point: self.point,
            first: self.second,
            second: self.first,
            canonical: !self.canonical,
        }
    }
}

/// Source of self-intersection records for a polygon.
pub trait IntersectionDetector<F> {
    /// Returns every crossing of two edges of `polygon`, each reported as a
    /// pair of mirrored records.
    fn detect(&self, polygon: &ComplexPolygon<F>) -> Vec<RawIntersection<F>>;
}

/// Brute-force detector testing every pair of edges.
///
/// Only proper crossings interior to both edges are reported. Touching at a
/// vertex and collinear overlap are not crossings.
#[derive(Debug, Clone, Copy)]
pub struct SegmentCrossings<F> {
    /// Parameter-space distance from an edge endpoint below which a contact
    /// is not reported.
    pub tolerance: F,
}

impl<F: Float> Default for SegmentCrossings<F> {
    fn default() -> Self {
        Self {
            tolerance: F::from(1e-10).unwrap_or_else(F::epsilon),
        }
    }
}

impl<F: Float> SegmentCrossings<F> {
    /// Creates a detector with the given tolerance.
    pub fn with_tolerance(tolerance: F) -> Self {
        Self { tolerance }
    }
}

impl<F: Float> IntersectionDetector<F> for SegmentCrossings<F> {
    fn detect(&self, polygon: &ComplexPolygon<F>) -> Vec<RawIntersection<F>> {
        find_crossings(polygon.rings(), self.tolerance)
    }
}

/// Finds all edge crossings between and within `rings`.
///
/// Returns mirrored record pairs; the canonical record of each pair is the
/// one reported from the edge that comes first in ring/edge order.
pub fn find_crossings<F: Float>(rings: &[Polygon<F>], tolerance: F) -> Vec<RawIntersection<F>> {
    let edges: Vec<(usize, usize, Segment2<F>)> = rings
        .iter()
        .enumerate()
        .flat_map(|(r, ring)| {
            let n = ring.len();
            (0..n).map(move |e| {
                (
                    r,
                    e,
                    Segment2::new(ring.vertices[e], ring.vertices[(e + 1) % n]),
                )
            })
        })
        .collect();

    let mut records = Vec::new();

    for (a, &(ring_a, edge_a, seg_a)) in edges.iter().enumerate() {
        for &(ring_b, edge_b, seg_b) in &edges[a + 1..] {
            if ring_a == ring_b && edges_adjacent(edge_a, edge_b, rings[ring_a].len()) {
                continue;
            }

            if let Some(crossing) = segment_crossing(seg_a, seg_b, tolerance) {
                let record = RawIntersection {
                    point: crossing.point,
                    first: EdgeSite {
                        ring: ring_a,
                        edge: edge_a,
                        fraction: crossing.t1,
                    },
                    second: EdgeSite {
                        ring: ring_b,
                        edge: edge_b,
                        fraction: crossing.t2,
                    },
                    canonical: true,
                };
                records.push(record);
                records.push(record.mirrored());
            }
        }
    }

    records
}

/// A vertex lying on an edge it does not bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VertexContact {
    /// Ring holding the vertex.
    pub ring: usize,
    /// Index of the vertex within its ring.
    pub vertex: usize,
    /// Ring holding the touched edge.
    pub edge_ring: usize,
    /// Index of the touched edge within its ring.
    pub edge: usize,
}

/// Finds every vertex lying within `tolerance` of an edge it does not bound.
///
/// Edge endpoints count, so a vertex repeated elsewhere in the rings is a
/// contact as well. Contacts are ordered by vertex, then by edge.
pub fn find_vertex_contacts<F: Float>(rings: &[Polygon<F>], tolerance: F) -> Vec<VertexContact> {
    let mut contacts = Vec::new();

    for (r, ring) in rings.iter().enumerate() {
        for (v, &p) in ring.vertices.iter().enumerate() {
            for (er, edge_ring) in rings.iter().enumerate() {
                let m = edge_ring.len();
                for e in 0..m {
                    if er == r && (e == v || (e + 1) % m == v) {
                        continue;
                    }
                    let edge = Segment2::new(edge_ring.vertices[e], edge_ring.vertices[(e + 1) % m]);
                    if point_on_segment(p, edge, tolerance) {
                        contacts.push(VertexContact {
                            ring: r,
                            vertex: v,
                            edge_ring: er,
                            edge: e,
                        });
                    }
                }
            }
        }
    }

    contacts
}

/// Checks if a single ring is simple: no two edges cross, and no vertex
/// touches or repeats on an edge it does not bound.
pub fn is_simple<F: Float>(ring: &Polygon<F>, tolerance: F) -> bool {
    let rings = std::slice::from_ref(ring);
    find_crossings(rings, tolerance).is_empty() && find_vertex_contacts(rings, tolerance).is_empty()
}

/// Edges `a < b` of an `n`-gon share a vertex.
fn edges_adjacent(a: usize, b: usize, n: usize) -> bool {
    b == a + 1 || (a == 0 && b + 1 == n)
}
