//! Intersection graph construction.
//!
//! Every ring edge is broken at its pseudo-vertices: the ring vertex ending
//! the edge plus every self-intersection lying on it. Every point where two
//! edges meet (a ring vertex joining consecutive edges, or a crossing of two
//! edges) becomes an [`Intersection`] that knows, for each of its two edges,
//! the next intersection reached by walking forward along that edge.

use crate::error::DecomposeError;
use crate::polygon::rings::CoordKey;
use crate::polygon::{Polygon, RawIntersection};
use crate::primitives::Point2;
use num_traits::Float;
use std::cmp::Ordering;
use std::collections::HashMap;

const UNLINKED: usize = usize::MAX;

/// A directed ring edge: from vertex `edge` to vertex `edge + 1` of `ring`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EdgeRef {
    pub ring: usize,
    pub edge: usize,
}

impl EdgeRef {
    #[inline]
    pub fn new(ring: usize, edge: usize) -> Self {
        Self { ring, edge }
    }
}

/// A point where an edge breaks.
#[derive(Debug, Clone, Copy)]
pub(crate) struct PseudoVertex<F> {
    pub point: Point2<F>,
    /// Position along `incoming`; 1 for the ring vertex ending the edge.
    pub fraction: F,
    pub incoming: EdgeRef,
    pub outgoing: EdgeRef,
    /// Next intersection when continuing along `incoming`.
    pub next: usize,
}

/// A point shared by exactly two edges.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Intersection<F> {
    pub point: Point2<F>,
    pub edges: [EdgeRef; 2],
    pub next: [usize; 2],
    /// `walkable[k]`: leaving this intersection along `edges[k]` has not
    /// happened yet.
    pub walkable: [bool; 2],
}

/// Pseudo-vertex lists and the intersection arena of one polygon.
///
/// The first [`IntersectionGraph::num_ring_vertices`] intersections are the
/// ring vertices in input order; self-intersections follow.
#[derive(Debug, Clone)]
pub(crate) struct IntersectionGraph<F> {
    /// `pseudo[ring][edge]`, sorted by ascending fraction.
    pseudo: Vec<Vec<Vec<PseudoVertex<F>>>>,
    pub intersections: Vec<Intersection<F>>,
    /// Index of each ring's first ring-vertex intersection.
    ring_offsets: Vec<usize>,
    num_ring_vertices: usize,
}

impl<F: Float> IntersectionGraph<F> {
    /// Builds the graph from rings and mirrored self-intersection records.
    pub fn build(
        rings: &[Polygon<F>],
        records: &[RawIntersection<F>],
    ) -> Result<Self, DecomposeError> {
        let mut pseudo = Vec::with_capacity(rings.len());
        let mut intersections = Vec::new();
        let mut ring_offsets = Vec::with_capacity(rings.len());

        for (r, ring) in rings.iter().enumerate() {
            let n = ring.len();
            ring_offsets.push(intersections.len());
            let mut edges = Vec::with_capacity(n);
            for j in 0..n {
                edges.push(vec![PseudoVertex {
                    point: ring.vertices[(j + 1) % n],
                    fraction: F::one(),
                    incoming: EdgeRef::new(r, j),
                    outgoing: EdgeRef::new(r, (j + 1) % n),
                    next: UNLINKED,
                }]);
                // Only the ring continuation leaves a ring vertex, so the
                // incoming side starts out consumed.
                intersections.push(Intersection {
                    point: ring.vertices[j],
                    edges: [EdgeRef::new(r, (j + n - 1) % n), EdgeRef::new(r, j)],
                    next: [UNLINKED; 2],
                    walkable: [false, true],
                });
            }
            pseudo.push(edges);
        }
        let num_ring_vertices = intersections.len();

        for record in records {
            let first = edge_of(rings, record.first.ring, record.first.edge)?;
            let second = edge_of(rings, record.second.ring, record.second.edge)?;
            pseudo[first.ring][first.edge].push(PseudoVertex {
                point: record.point,
                fraction: record.first.fraction,
                incoming: first,
                outgoing: second,
                next: UNLINKED,
            });
            if record.canonical {
                intersections.push(Intersection {
                    point: record.point,
                    edges: [first, second],
                    next: [UNLINKED; 2],
                    walkable: [true, true],
                });
            }
        }

        for list in pseudo.iter_mut().flatten() {
            list.sort_by(|a, b| a.fraction.partial_cmp(&b.fraction).unwrap_or(Ordering::Equal));
        }

        let mut graph = Self {
            pseudo,
            intersections,
            ring_offsets,
            num_ring_vertices,
        };
        let index = graph.coordinate_index()?;
        graph.link_pseudo_vertices(&index)?;
        graph.link_intersections(&index)?;

        log::debug!(
            "intersection graph: {} ring vertices, {} self-intersections",
            graph.num_ring_vertices,
            graph.intersections.len() - graph.num_ring_vertices
        );
        Ok(graph)
    }

    /// Number of ring-vertex intersections at the front of the arena.
    #[cfg(test)]
    pub fn num_ring_vertices(&self) -> usize {
        self.num_ring_vertices
    }

    /// Number of input rings.
    pub fn num_rings(&self) -> usize {
        self.ring_offsets.len()
    }

    /// Indices of the ring-vertex intersections of `ring`.
    pub fn ring_vertices(&self, ring: usize) -> std::ops::Range<usize> {
        let start = self.ring_offsets[ring];
        let end = self
            .ring_offsets
            .get(ring + 1)
            .copied()
            .unwrap_or(self.num_ring_vertices);
        start..end
    }

    #[inline]
    pub fn point(&self, isect: usize) -> Point2<F> {
        self.intersections[isect].point
    }

    /// Returns the first intersection whose successor along either edge is
    /// `isect`.
    pub fn predecessor(&self, isect: usize) -> Option<usize> {
        self.intersections
            .iter()
            .position(|i| i.next[0] == isect || i.next[1] == isect)
    }

    fn coordinate_index(&self) -> Result<HashMap<CoordKey, usize>, DecomposeError> {
        let mut index = HashMap::with_capacity(self.intersections.len());
        for (i, isect) in self.intersections.iter().enumerate() {
            if index.insert(CoordKey::new(isect.point), i).is_some() {
                let (x, y) = coords_f64(isect.point);
                return Err(DecomposeError::DuplicateIntersection { x, y });
            }
        }
        Ok(index)
    }

    /// Pass 1: each pseudo-vertex learns the intersection at the next
    /// pseudo-vertex along its edge, wrapping onto the ring's next edge.
    fn link_pseudo_vertices(
        &mut self,
        index: &HashMap<CoordKey, usize>,
    ) -> Result<(), DecomposeError> {
        for r in 0..self.pseudo.len() {
            let n = self.pseudo[r].len();
            for j in 0..n {
                for k in 0..self.pseudo[r][j].len() {
                    let target = match self.pseudo[r][j].get(k + 1) {
                        Some(pv) => pv.point,
                        None => self.pseudo[r][(j + 1) % n][0].point,
                    };
                    self.pseudo[r][j][k].next = lookup(index, target)?;
                }
            }
        }
        Ok(())
    }

    /// Pass 2: intersections take their successors from the pseudo-vertices
    /// at their coordinate. A pseudo-vertex must join the same two edges as
    /// the intersection it lands on.
    fn link_intersections(&mut self, index: &HashMap<CoordKey, usize>) -> Result<(), DecomposeError> {
        for pv in self.pseudo.iter().flatten().flatten() {
            let l = lookup(index, pv.point)?;
            let isect = &mut self.intersections[l];
            if isect.edges == [pv.incoming, pv.outgoing] {
                if l < self.num_ring_vertices {
                    // The ring vertex's pseudo-vertex ends the incoming edge,
                    // but its successor lies along the outgoing edge.
                    isect.next = [pv.next, pv.next];
                } else {
                    isect.next[0] = pv.next;
                }
            } else if l >= self.num_ring_vertices && isect.edges == [pv.outgoing, pv.incoming] {
                isect.next[1] = pv.next;
            } else {
                let (x, y) = coords_f64(pv.point);
                return Err(DecomposeError::MismatchedRecord { x, y });
            }
        }

        match self
            .intersections
            .iter()
            .find(|i| i.next.contains(&UNLINKED))
        {
            Some(isect) => {
                let (x, y) = coords_f64(isect.point);
                Err(DecomposeError::UnlinkedIntersection { x, y })
            }
            None => Ok(()),
        }
    }

    #[cfg(test)]
    pub(crate) fn pseudo_vertices(&self, ring: usize, edge: usize) -> &[PseudoVertex<F>] {
        &self.pseudo[ring][edge]
    }
}

fn edge_of<F: Float>(rings: &[Polygon<F>], ring: usize, edge: usize) -> Result<EdgeRef, DecomposeError> {
    match rings.get(ring) {
        Some(r) if edge < r.len() => Ok(EdgeRef::new(ring, edge)),
        _ => Err(DecomposeError::InvalidRecord { ring, edge }),
    }
}

fn lookup<F: Float>(index: &HashMap<CoordKey, usize>, p: Point2<F>) -> Result<usize, DecomposeError> {
    index.get(&CoordKey::new(p)).copied().ok_or_else(|| {
        let (x, y) = coords_f64(p);
        DecomposeError::MissingIntersection { x, y }
    })
}

pub(crate) fn coords_f64<F: Float>(p: Point2<F>) -> (f64, f64) {
    (
        p.x.to_f64().unwrap_or(f64::NAN),
        p.y.to_f64().unwrap_or(f64::NAN),
    )
}
