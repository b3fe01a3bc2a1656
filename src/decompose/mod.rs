//! Decomposition of self-intersecting polygons into simple rings.
//!
//! The polygon's self-intersections split its edges into pieces. Those
//! pieces are linked into an intersection graph, which is then walked into
//! simple rings that together cover every input edge exactly once. Each ring
//! gets a winding number, the smallest ring enclosing it as parent, and a
//! net winding number accumulated down the parent chain.
//!
//! # Example
//!
//! ```
//! use ringwalk::{decompose_rings, FillRule, Point2};
//!
//! // A bowtie crossing itself at (1, 1).
//! let bowtie = vec![vec![
//!     Point2::new(0.0, 0.0),
//!     Point2::new(2.0, 0.0),
//!     Point2::new(0.0, 2.0),
//!     Point2::new(2.0, 2.0),
//!     Point2::new(0.0, 0.0),
//! ]];
//!
//! let decomposition = decompose_rings(bowtie).unwrap();
//! assert_eq!(decomposition.len(), 2);
//!
//! let windings: Vec<i32> = decomposition.iter().map(|r| r.winding).collect();
//! assert_eq!(windings, vec![1, -1]);
//! assert_eq!(decomposition.roots().count(), 2);
//! assert_eq!(decomposition.filled(FillRule::Positive).count(), 1);
//! ```

mod graph;
mod nesting;
mod output;
mod walk;

pub use graph::EdgeRef;
pub use output::{Decomposition, FillRule, OutputRing};

use crate::error::DecomposeError;
use crate::polygon::{find_vertex_contacts, ComplexPolygon, IntersectionDetector, SegmentCrossings};
use crate::primitives::Point2;
use graph::IntersectionGraph;
use num_traits::Float;
use walk::WalkedRing;

/// Which parents are re-derived by containment after the walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParentCheck {
    /// Resolve only rings the walk left without a parent, and only when
    /// there is more than one of them.
    Roots,
    /// Resolve every ring, replacing walk-predicted parents.
    #[default]
    All,
}

/// Options for polygon decomposition.
#[derive(Debug, Clone, Copy)]
pub struct DecomposeOptions<F> {
    /// Tolerance for crossing detection near edge endpoints and for
    /// boundary tests during nesting.
    pub tolerance: F,
    /// Which ring parents are verified by containment.
    pub parent_check: ParentCheck,
}

impl<F: Float> Default for DecomposeOptions<F> {
    fn default() -> Self {
        Self {
            tolerance: F::from(1e-10).unwrap_or_else(F::epsilon),
            parent_check: ParentCheck::default(),
        }
    }
}

impl<F: Float> DecomposeOptions<F> {
    /// Creates options with the given tolerance.
    pub fn with_tolerance(tolerance: F) -> Self {
        Self {
            tolerance,
            ..Default::default()
        }
    }

    /// Sets the tolerance.
    pub fn tolerance(mut self, tolerance: F) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Sets which parents are verified by containment.
    pub fn parent_check(mut self, check: ParentCheck) -> Self {
        self.parent_check = check;
        self
    }
}

/// Decomposes a polygon with default options and the brute-force crossing
/// detector.
pub fn decompose<F: Float>(polygon: &ComplexPolygon<F>) -> Result<Decomposition<F>, DecomposeError> {
    let options = DecomposeOptions::default();
    let detector = SegmentCrossings::with_tolerance(options.tolerance);
    decompose_with(polygon, &options, &detector)
}

/// Validates raw vertex rings and decomposes them.
///
/// The first ring is the outer ring; rings may be given closed or open.
pub fn decompose_rings<F: Float>(
    rings: Vec<Vec<Point2<F>>>,
) -> Result<Decomposition<F>, DecomposeError> {
    let polygon = ComplexPolygon::from_rings(rings)?;
    decompose(&polygon)
}

/// Decomposes a polygon using the given options and crossing detector.
///
/// A polygon without self-intersections is returned ring for ring, each
/// ring's winding taken from its own geometry. A vertex touching an edge it
/// does not bound is rejected with [`DecomposeError::VertexOnEdge`].
pub fn decompose_with<F, D>(
    polygon: &ComplexPolygon<F>,
    options: &DecomposeOptions<F>,
    detector: &D,
) -> Result<Decomposition<F>, DecomposeError>
where
    F: Float,
    D: IntersectionDetector<F> + ?Sized,
{
    if let Some(contact) = find_vertex_contacts(polygon.rings(), options.tolerance).first() {
        return Err(DecomposeError::VertexOnEdge {
            ring: contact.ring,
            vertex: contact.vertex,
            edge_ring: contact.edge_ring,
            edge: contact.edge,
        });
    }

    let records = detector.detect(polygon);
    log::debug!(
        "decomposing {} rings ({} vertices), {} crossings",
        polygon.num_rings(),
        polygon.num_vertices(),
        records.iter().filter(|r| r.canonical).count()
    );

    let mut rings = if records.is_empty() {
        log::debug!("no crossings, emitting input rings");
        polygon
            .rings()
            .iter()
            .map(|ring| WalkedRing {
                coords: ring.closed_vertices(),
                winding: ring.winding(),
                parent: None,
            })
            .collect()
    } else {
        let mut graph = IntersectionGraph::build(polygon.rings(), &records)?;
        walk::walk_rings(&mut graph)?
    };

    nesting::resolve_parents(&mut rings, options.parent_check, options.tolerance);
    let net = nesting::net_windings(&rings);

    let output = rings
        .into_iter()
        .zip(net)
        .enumerate()
        .map(|(index, (ring, net_winding))| OutputRing {
            index,
            coords: ring.coords,
            winding: ring.winding,
            parent: ring.parent,
            net_winding,
        })
        .collect();

    Ok(Decomposition::new(output))
}
