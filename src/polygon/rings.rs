//! Polygons with an outer ring and inner rings, and their validation.
//!
//! # Example
//!
//! ```
//! use ringwalk::Point2;
//! use ringwalk::polygon::ComplexPolygon;
//!
//! let square = vec![
//!     Point2::new(0.0, 0.0),
//!     Point2::new(4.0, 0.0),
//!     Point2::new(4.0, 4.0),
//!     Point2::new(0.0, 4.0),
//!     Point2::new(0.0, 0.0),
//! ];
//!
//! let polygon = ComplexPolygon::from_rings(vec![square]).unwrap();
//! assert_eq!(polygon.num_rings(), 1);
//! assert_eq!(polygon.num_vertices(), 4);
//! ```

use super::core::Polygon;
use crate::error::DecomposeError;
use crate::primitives::Point2;
use num_traits::Float;
use std::collections::HashMap;

/// A polygon made of one outer ring and zero or more inner rings.
///
/// Rings are stored open (without the closing repeat). Construction through
/// [`ComplexPolygon::from_rings`] or [`ComplexPolygon::new`] guarantees that
/// every ring has at least three vertices, every coordinate is finite and no
/// vertex occurs twice anywhere in the polygon.
#[derive(Debug, Clone, PartialEq)]
pub struct ComplexPolygon<F> {
    rings: Vec<Polygon<F>>,
}

impl<F: Float> ComplexPolygon<F> {
    /// Creates a polygon from an outer ring and inner rings.
    pub fn new(outer: Polygon<F>, inners: Vec<Polygon<F>>) -> Result<Self, DecomposeError> {
        let mut rings = Vec::with_capacity(inners.len() + 1);
        rings.push(outer);
        rings.extend(inners);
        Self::validated(rings)
    }

    /// Creates a polygon from raw vertex rings; the first ring is the outer.
    ///
    /// Each ring may be given closed (first vertex repeated last) or open.
    pub fn from_rings(rings: Vec<Vec<Point2<F>>>) -> Result<Self, DecomposeError> {
        Self::validated(rings.into_iter().map(Polygon::new).collect())
    }

    fn validated(rings: Vec<Polygon<F>>) -> Result<Self, DecomposeError> {
        if rings.is_empty() {
            return Err(DecomposeError::EmptyPolygon);
        }

        for (r, ring) in rings.iter().enumerate() {
            if let Some(v) = ring.vertices.iter().position(|p| !p.is_finite()) {
                return Err(DecomposeError::NonFiniteCoordinate { ring: r, vertex: v });
            }
        }

        check_unique_vertices(&rings)?;

        for (r, ring) in rings.iter().enumerate() {
            if ring.len() < 3 {
                return Err(DecomposeError::DegenerateRing {
                    ring: r,
                    vertices: ring.len(),
                });
            }
        }

        Ok(Self { rings })
    }

    /// Returns the outer ring.
    pub fn outer(&self) -> &Polygon<F> {
        &self.rings[0]
    }

    /// Returns the inner rings.
    pub fn inners(&self) -> &[Polygon<F>] {
        &self.rings[1..]
    }

    /// Returns all rings, outer first.
    pub fn rings(&self) -> &[Polygon<F>] {
        &self.rings
    }

    /// Returns the number of rings.
    pub fn num_rings(&self) -> usize {
        self.rings.len()
    }

    /// Returns the total number of distinct vertices over all rings.
    pub fn num_vertices(&self) -> usize {
        self.rings.iter().map(Polygon::len).sum()
    }
}

/// Hash key that matches coordinates bit for bit.
///
/// Positive and negative zero map to the same key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct CoordKey {
    x: (u64, i16, i8),
    y: (u64, i16, i8),
}

impl CoordKey {
    pub(crate) fn new<F: Float>(p: Point2<F>) -> Self {
        let canon = |v: F| if v == F::zero() { F::zero() } else { v };
        Self {
            x: canon(p.x).integer_decode(),
            y: canon(p.y).integer_decode(),
        }
    }
}

/// Rejects any vertex that repeats another vertex of the polygon.
fn check_unique_vertices<F: Float>(rings: &[Polygon<F>]) -> Result<(), DecomposeError> {
    let mut seen = HashMap::new();
    for (r, ring) in rings.iter().enumerate() {
        for (v, &p) in ring.vertices.iter().enumerate() {
            if seen.insert(CoordKey::new(p), (r, v)).is_some() {
                return Err(DecomposeError::DuplicateVertex { ring: r, vertex: v });
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ring(coords: &[(f64, f64)]) -> Vec<Point2<f64>> {
        coords.iter().map(|&(x, y)| Point2::new(x, y)).collect()
    }

    #[test]
    fn test_from_closed_and_open_rings() {
        let closed = ComplexPolygon::from_rings(vec![ring(&[
            (0.0, 0.0),
            (4.0, 0.0),
            (4.0, 4.0),
            (0.0, 0.0),
        ])])
        .unwrap();
        let open =
            ComplexPolygon::from_rings(vec![ring(&[(0.0, 0.0), (4.0, 0.0), (4.0, 4.0)])]).unwrap();
        assert_eq!(closed, open);
        assert_eq!(closed.num_vertices(), 3);
    }

    #[test]
    fn test_outer_and_inners() {
        let outer = Polygon::new(ring(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)]));
        let hole = Polygon::new(ring(&[(2.0, 2.0), (2.0, 4.0), (4.0, 4.0), (4.0, 2.0)]));
        let poly = ComplexPolygon::new(outer.clone(), vec![hole.clone()]).unwrap();
        assert_eq!(poly.outer(), &outer);
        assert_eq!(poly.inners(), &[hole]);
        assert_eq!(poly.num_rings(), 2);
        assert_eq!(poly.num_vertices(), 8);
    }

    #[test]
    fn test_rejects_duplicate_in_same_ring() {
        let result = ComplexPolygon::from_rings(vec![ring(&[
            (0.0, 0.0),
            (2.0, 0.0),
            (1.0, 1.0),
            (2.0, 2.0),
            (0.0, 2.0),
            (1.0, 1.0),
            (0.0, 0.0),
        ])]);
        assert_eq!(
            result,
            Err(DecomposeError::DuplicateVertex { ring: 0, vertex: 5 })
        );
    }

    #[test]
    fn test_rejects_duplicate_across_rings() {
        let result = ComplexPolygon::from_rings(vec![
            ring(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)]),
            ring(&[(2.0, 2.0), (10.0, 10.0), (4.0, 2.0)]),
        ]);
        assert_eq!(
            result,
            Err(DecomposeError::DuplicateVertex { ring: 1, vertex: 1 })
        );
    }

    #[test]
    fn test_negative_zero_counts_as_duplicate() {
        let result = ComplexPolygon::from_rings(vec![ring(&[
            (0.0, 0.0),
            (2.0, 0.0),
            (2.0, 2.0),
            (-0.0, 0.0),
            (0.0, 2.0),
        ])]);
        assert!(matches!(
            result,
            Err(DecomposeError::DuplicateVertex { ring: 0, vertex: 3 })
        ));
    }

    #[test]
    fn test_rejects_degenerate_and_empty() {
        assert_eq!(
            ComplexPolygon::<f64>::from_rings(vec![]),
            Err(DecomposeError::EmptyPolygon)
        );
        assert_eq!(
            ComplexPolygon::from_rings(vec![ring(&[(0.0, 0.0), (1.0, 0.0), (0.0, 0.0)])]),
            Err(DecomposeError::DegenerateRing { ring: 0, vertices: 2 })
        );
    }

    #[test]
    fn test_rejects_non_finite() {
        let result = ComplexPolygon::from_rings(vec![ring(&[
            (0.0, 0.0),
            (1.0, f64::NAN),
            (1.0, 1.0),
        ])]);
        assert_eq!(
            result,
            Err(DecomposeError::NonFiniteCoordinate { ring: 0, vertex: 1 })
        );
    }

    #[test]
    fn test_coord_key_matches_exactly() {
        let a = CoordKey::new(Point2::new(0.1_f64 + 0.2, 1.0));
        let b = CoordKey::new(Point2::new(0.3_f64, 1.0));
        let c = CoordKey::new(Point2::new(0.1_f64 + 0.2, 1.0));
        assert_ne!(a, b);
        assert_eq!(a, c);
        assert_eq!(
            CoordKey::new(Point2::new(0.0_f64, -0.0)),
            CoordKey::new(Point2::new(-0.0_f64, 0.0))
        );
    }
}
