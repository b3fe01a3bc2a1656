//! Walking the intersection graph into simple rings.
//!
//! A walk starts at a queued intersection, leaves it along an unwalked edge
//! and, at every intersection it reaches, switches onto the other edge. The
//! walk ends when it returns to its start; the visited points form one
//! simple ring. Whenever the walk passes an intersection whose other edge
//! has not been walked yet, that intersection is queued as the start of a
//! further ring, together with a predicted winding number and parent.

use super::graph::{coords_f64, IntersectionGraph};
use crate::error::DecomposeError;
use crate::primitives::Point2;
use crate::tolerance::is_convex_turn;
use num_traits::Float;
use std::cmp::Ordering;

/// A ring produced by one walk, before nesting is resolved.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct WalkedRing<F> {
    /// Closed coordinate sequence (first = last).
    pub coords: Vec<Point2<F>>,
    pub winding: i32,
    pub parent: Option<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct QueueEntry {
    intersection: usize,
    parent: Option<usize>,
    winding: i32,
}

/// Walks every edge of `graph` exactly once, consuming its walkable flags.
pub(crate) fn walk_rings<F: Float>(
    graph: &mut IntersectionGraph<F>,
) -> Result<Vec<WalkedRing<F>>, DecomposeError> {
    let mut queue = seed_queue(graph)?;
    let mut rings: Vec<WalkedRing<F>> = Vec::new();

    while let Some(entry) = queue.pop() {
        let start = entry.intersection;
        let index = rings.len();
        let winding = entry.winding;

        let walkable = graph.intersections[start].walkable;
        let side = if walkable[0] {
            0
        } else if walkable[1] {
            1
        } else {
            log::trace!("intersection {} already walked, skipping", start);
            continue;
        };
        graph.intersections[start].walkable[side] = false;

        let mut coords = vec![graph.point(start)];
        let mut walking = graph.intersections[start].edges[side];
        let mut current = start;
        let mut next = graph.intersections[start].next[side];

        while next != start {
            coords.push(graph.point(next));

            if let Some(pos) = queue.iter().position(|e| e.intersection == next) {
                queue.remove(pos);
            }

            let isect = graph.intersections[next];
            let arrived = if isect.edges[0] == walking { 0 } else { 1 };
            let leave = 1 - arrived;
            if !isect.walkable[leave] {
                let (x, y) = coords_f64(isect.point);
                return Err(DecomposeError::EdgeWalkedTwice { x, y });
            }
            graph.intersections[next].walkable[leave] = false;

            if isect.walkable[arrived] {
                let beyond = graph.point(isect.next[leave]);
                let branch = if is_convex_turn(graph.point(current), isect.point, beyond, winding == 1)
                {
                    // The other ring lies outside this one.
                    QueueEntry {
                        intersection: next,
                        parent: entry.parent,
                        winding: -winding,
                    }
                } else {
                    QueueEntry {
                        intersection: next,
                        parent: Some(index),
                        winding,
                    }
                };
                log::trace!(
                    "ring {}: branch at intersection {} (winding {}, parent {:?})",
                    index,
                    next,
                    branch.winding,
                    branch.parent
                );
                queue.push(branch);
            }

            walking = isect.edges[leave];
            current = next;
            next = isect.next[leave];
        }

        coords.push(graph.point(next));
        log::debug!(
            "ring {}: {} vertices, winding {}, parent {:?}",
            index,
            coords.len() - 1,
            winding,
            entry.parent
        );
        rings.push(WalkedRing {
            coords,
            winding,
            parent: entry.parent,
        });
    }

    Ok(rings)
}

/// Queues the lowest leftmost vertex of every input ring, leftmost ring last
/// so it is popped first.
fn seed_queue<F: Float>(graph: &IntersectionGraph<F>) -> Result<Vec<QueueEntry>, DecomposeError> {
    let mut queue = Vec::with_capacity(graph.num_rings());

    for ring in 0..graph.num_rings() {
        let mut vertices = graph.ring_vertices(ring);
        let Some(first) = vertices.next() else {
            continue;
        };
        let left = vertices.fold(first, |best, i| {
            if compare_points(graph.point(i), graph.point(best)) == Ordering::Less {
                i
            } else {
                best
            }
        });

        // The lowest leftmost vertex is strictly convex on whichever ring
        // walks through it.
        let after = graph.intersections[left].next[1];
        let before = graph.predecessor(left).ok_or_else(|| {
            let (x, y) = coords_f64(graph.point(left));
            DecomposeError::UnlinkedIntersection { x, y }
        })?;
        let winding = if is_convex_turn(
            graph.point(before),
            graph.point(left),
            graph.point(after),
            true,
        ) {
            1
        } else {
            -1
        };

        queue.push(QueueEntry {
            intersection: left,
            parent: None,
            winding,
        });
    }

    queue.sort_by(|a, b| compare_points(graph.point(b.intersection), graph.point(a.intersection)));
    Ok(queue)
}

fn compare_points<F: Float>(a: Point2<F>, b: Point2<F>) -> Ordering {
    a.x.partial_cmp(&b.x)
        .unwrap_or(Ordering::Equal)
        .then_with(|| a.y.partial_cmp(&b.y).unwrap_or(Ordering::Equal))
}
