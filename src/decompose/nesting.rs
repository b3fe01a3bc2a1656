//! Containment-based parent resolution and net winding numbers.

use super::walk::WalkedRing;
use super::ParentCheck;
use crate::polygon::{point_on_ring, polygon_area, polygon_contains};
use crate::primitives::Point2;
use num_traits::Float;

/// Resolves the parent of each ring by containment.
///
/// With [`ParentCheck::Roots`] only parentless rings are resolved, and only
/// when more than one ring is parentless. With [`ParentCheck::All`] every
/// walk-predicted parent is re-derived. The parent of a ring is the ring of
/// smallest area among the strictly larger rings that contain it.
pub(crate) fn resolve_parents<F: Float>(
    rings: &mut [WalkedRing<F>],
    check: ParentCheck,
    tolerance: F,
) {
    let candidates: Vec<usize> = match check {
        ParentCheck::All => (0..rings.len()).collect(),
        ParentCheck::Roots => {
            let roots: Vec<usize> = (0..rings.len())
                .filter(|&i| rings[i].parent.is_none())
                .collect();
            if roots.len() < 2 {
                return;
            }
            roots
        }
    };

    let areas: Vec<F> = rings.iter().map(|r| polygon_area(open(&r.coords))).collect();

    let parents: Vec<Option<usize>> = candidates
        .iter()
        .map(|&child| {
            let mut parent: Option<usize> = None;
            for other in 0..rings.len() {
                if other == child || areas[other] <= areas[child] {
                    continue;
                }
                if parent.is_some_and(|p| areas[p] <= areas[other]) {
                    continue;
                }
                if encloses(&rings[other].coords, &rings[child].coords, tolerance) {
                    parent = Some(other);
                }
            }
            parent
        })
        .collect();

    for (&child, parent) in candidates.iter().zip(parents) {
        if rings[child].parent != parent {
            log::trace!(
                "ring {}: parent {:?} resolved to {:?}",
                child,
                rings[child].parent,
                parent
            );
        }
        rings[child].parent = parent;
    }

    log::debug!(
        "nesting resolved: {} root rings",
        rings.iter().filter(|r| r.parent.is_none()).count()
    );
}

/// Computes net winding numbers top-down over the parent forest.
///
/// A root's net winding is its own winding; every other ring adds its own
/// winding to its parent's net winding.
pub(crate) fn net_windings<F>(rings: &[WalkedRing<F>]) -> Vec<i32> {
    let mut children = vec![Vec::new(); rings.len()];
    let mut stack = Vec::new();
    for (i, ring) in rings.iter().enumerate() {
        match ring.parent {
            Some(p) => children[p].push(i),
            None => stack.push(i),
        }
    }

    let mut net = vec![0; rings.len()];
    while let Some(i) = stack.pop() {
        let base = rings[i].parent.map_or(0, |p| net[p]);
        net[i] = base + rings[i].winding;
        stack.extend_from_slice(&children[i]);
    }
    net
}

/// Tests whether `outer` encloses `inner`, probing `inner` at a point off
/// the boundary of `outer`.
fn encloses<F: Float>(outer: &[Point2<F>], inner: &[Point2<F>], tolerance: F) -> bool {
    let outer = open(outer);
    let inner = open(inner);
    match probe_point(outer, inner, tolerance) {
        Some(p) => polygon_contains(outer, p),
        None => false,
    }
}

/// Picks a point of `inner` not lying on the boundary of `outer`: the first
/// such vertex, else the first such edge midpoint.
fn probe_point<F: Float>(
    outer: &[Point2<F>],
    inner: &[Point2<F>],
    tolerance: F,
) -> Option<Point2<F>> {
    let off_boundary = |p: &Point2<F>| !point_on_ring(outer, *p, tolerance);
    let n = inner.len();
    inner.iter().copied().find(off_boundary).or_else(|| {
        (0..n)
            .map(|i| inner[i].midpoint(inner[(i + 1) % n]))
            .find(off_boundary)
    })
}

/// Drops the closing repeat of a closed coordinate sequence.
fn open<F: Float>(coords: &[Point2<F>]) -> &[Point2<F>] {
    match coords {
        [first, rest @ .., last] if first == last && !rest.is_empty() => &coords[..coords.len() - 1],
        _ => coords,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn walked(coords: &[(f64, f64)], winding: i32, parent: Option<usize>) -> WalkedRing<f64> {
        let mut coords: Vec<Point2<f64>> = coords.iter().map(|&(x, y)| Point2::new(x, y)).collect();
        coords.push(coords[0]);
        WalkedRing {
            coords,
            winding,
            parent,
        }
    }

    fn square(x: f64, y: f64, size: f64, winding: i32) -> WalkedRing<f64> {
        walked(
            &[(x, y), (x + size, y), (x + size, y + size), (x, y + size)],
            winding,
            None,
        )
    }

    #[test]
    fn test_nested_squares() {
        let mut rings = vec![square(0.0, 0.0, 10.0, 1), square(2.0, 2.0, 4.0, -1)];
        resolve_parents(&mut rings, ParentCheck::Roots, 1e-10);
        assert_eq!(rings[0].parent, None);
        assert_eq!(rings[1].parent, Some(0));
        assert_eq!(net_windings(&rings), vec![1, 0]);
    }

    #[test]
    fn test_smallest_container_wins() {
        // Listed inner-to-outer so the smallest enclosing ring is not the
        // first candidate found.
        let mut rings = vec![
            square(4.0, 4.0, 1.0, 1),
            square(0.0, 0.0, 20.0, 1),
            square(2.0, 2.0, 6.0, 1),
        ];
        resolve_parents(&mut rings, ParentCheck::Roots, 1e-10);
        assert_eq!(rings[0].parent, Some(2));
        assert_eq!(rings[1].parent, None);
        assert_eq!(rings[2].parent, Some(1));
        assert_eq!(net_windings(&rings), vec![3, 1, 2]);
    }

    #[test]
    fn test_disjoint_rings_stay_roots() {
        let mut rings = vec![square(0.0, 0.0, 1.0, 1), square(5.0, 0.0, 1.0, -1)];
        resolve_parents(&mut rings, ParentCheck::All, 1e-10);
        assert_eq!(rings[0].parent, None);
        assert_eq!(rings[1].parent, None);
        assert_eq!(net_windings(&rings), vec![1, -1]);
    }

    #[test]
    fn test_touching_triangles_are_not_nested() {
        // The two halves of a bowtie share the crossing point.
        let mut rings = vec![
            walked(&[(0.0, 0.0), (2.0, 0.0), (1.0, 1.0)], 1, None),
            walked(&[(1.0, 1.0), (0.0, 2.0), (2.0, 2.0)], -1, None),
        ];
        resolve_parents(&mut rings, ParentCheck::All, 1e-10);
        assert_eq!(rings[0].parent, None);
        assert_eq!(rings[1].parent, None);
    }

    #[test]
    fn test_child_touching_parent_boundary() {
        // The inner ring shares two vertices with its container.
        let mut rings = vec![
            walked(
                &[(0.0, 0.0), (4.0, 0.0), (4.0, 2.0), (6.0, 2.0), (6.0, 6.0), (2.0, 6.0), (2.0, 4.0), (0.0, 4.0)],
                1,
                None,
            ),
            walked(&[(2.0, 4.0), (2.0, 2.0), (4.0, 2.0), (4.0, 4.0)], 1, None),
        ];
        resolve_parents(&mut rings, ParentCheck::All, 1e-10);
        assert_eq!(rings[1].parent, Some(0));
        assert_eq!(net_windings(&rings), vec![1, 2]);
    }

    #[test]
    fn test_roots_mode_keeps_predicted_parents() {
        // A single root leaves every prediction untouched, even a wrong one.
        let mut rings = vec![square(0.0, 0.0, 10.0, 1), square(20.0, 0.0, 1.0, 1)];
        rings[1].parent = Some(0);
        resolve_parents(&mut rings, ParentCheck::Roots, 1e-10);
        assert_eq!(rings[1].parent, Some(0));

        resolve_parents(&mut rings, ParentCheck::All, 1e-10);
        assert_eq!(rings[1].parent, None);
    }

    #[test]
    fn test_deep_nesting_net_winding() {
        let depth = 2000;
        let rings: Vec<WalkedRing<f64>> = (0..depth)
            .map(|i| WalkedRing {
                coords: Vec::new(),
                winding: 1,
                parent: if i == 0 { None } else { Some(i - 1) },
            })
            .collect();
        let net = net_windings(&rings);
        assert_eq!(net[0], 1);
        assert_eq!(net[depth - 1], depth as i32);
    }

    #[test]
    fn test_open_drops_closing_vertex() {
        let closed = [
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(0.0, 1.0),
            Point2::new(0.0, 0.0),
        ];
        assert_eq!(open(&closed).len(), 3);
        assert_eq!(open(&closed[..3]).len(), 3);
    }
}
