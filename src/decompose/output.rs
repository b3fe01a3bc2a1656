//! Decomposition results.

use crate::polygon::{polygon_area, polygon_contains, Polygon};
use crate::primitives::Point2;
use num_traits::Float;

#[cfg(feature = "serialization")]
use serde::{Deserialize, Serialize};

/// Rule deciding which net winding numbers count as filled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub enum FillRule {
    /// Odd net winding is filled.
    EvenOdd,
    /// Any non-zero net winding is filled.
    #[default]
    NonZero,
    /// Positive net winding is filled.
    Positive,
    /// Negative net winding is filled.
    Negative,
    /// Net winding of magnitude two or more is filled.
    AbsGeqTwo,
}

impl FillRule {
    /// Tests whether a region with net winding `net` is filled.
    #[inline]
    pub fn is_inside(self, net: i32) -> bool {
        match self {
            FillRule::EvenOdd => net & 1 != 0,
            FillRule::NonZero => net != 0,
            FillRule::Positive => net > 0,
            FillRule::Negative => net < 0,
            FillRule::AbsGeqTwo => net >= 2 || net <= -2,
        }
    }
}

/// One simple ring of a decomposition.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct OutputRing<F> {
    /// Position of this ring in its [`Decomposition`].
    pub index: usize,
    /// Closed coordinate sequence (first = last).
    pub coords: Vec<Point2<F>>,
    /// +1 for a counter-clockwise ring, -1 for a clockwise ring.
    pub winding: i32,
    /// Smallest enclosing ring, if any.
    pub parent: Option<usize>,
    /// Sum of windings from the outermost ancestor down to this ring.
    pub net_winding: i32,
}

impl<F: Float> OutputRing<F> {
    /// Returns the vertices without the closing repeat.
    pub fn vertices(&self) -> &[Point2<F>] {
        match self.coords.len() {
            0 => &self.coords,
            n => &self.coords[..n - 1],
        }
    }

    /// Converts the ring into a [`Polygon`].
    pub fn to_polygon(&self) -> Polygon<F> {
        Polygon::new(self.vertices().to_vec())
    }

    /// Returns the enclosed area.
    pub fn area(&self) -> F {
        polygon_area(self.vertices())
    }

    /// Tests if a point is inside the ring.
    pub fn contains(&self, point: Point2<F>) -> bool {
        polygon_contains(self.vertices(), point)
    }

    /// Returns true if this ring has no parent.
    #[inline]
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}

/// The simple rings a polygon decomposes into, in walk order.
///
/// Parents always refer to rings of the same decomposition and form a
/// forest.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct Decomposition<F> {
    rings: Vec<OutputRing<F>>,
}

impl<F: Float> Decomposition<F> {
    pub(crate) fn new(rings: Vec<OutputRing<F>>) -> Self {
        Self { rings }
    }

    /// Returns all rings.
    pub fn rings(&self) -> &[OutputRing<F>] {
        &self.rings
    }

    /// Returns the number of rings.
    #[inline]
    pub fn len(&self) -> usize {
        self.rings.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rings.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&OutputRing<F>> {
        self.rings.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, OutputRing<F>> {
        self.rings.iter()
    }

    /// Iterates over the rings without a parent.
    pub fn roots(&self) -> impl Iterator<Item = &OutputRing<F>> + '_ {
        self.rings.iter().filter(|r| r.is_root())
    }

    /// Iterates over the rings whose parent is `index`.
    pub fn children(&self, index: usize) -> impl Iterator<Item = &OutputRing<F>> + '_ {
        self.rings.iter().filter(move |r| r.parent == Some(index))
    }

    /// Iterates over the rings bounding a filled region under `rule`.
    ///
    /// A ring's net winding is the winding of the region just inside it, so
    /// the selected rings are exactly those whose interior is filled.
    pub fn filled(&self, rule: FillRule) -> impl Iterator<Item = &OutputRing<F>> + '_ {
        self.rings
            .iter()
            .filter(move |r| rule.is_inside(r.net_winding))
    }

    /// Consumes the decomposition, returning its rings.
    pub fn into_rings(self) -> Vec<OutputRing<F>> {
        self.rings
    }
}

impl<F> IntoIterator for Decomposition<F> {
    type Item = OutputRing<F>;
    type IntoIter = std::vec::IntoIter<OutputRing<F>>;

    fn into_iter(self) -> Self::IntoIter {
        self.rings.into_iter()
    }
}

impl<'a, F> IntoIterator for &'a Decomposition<F> {
    type Item = &'a OutputRing<F>;
    type IntoIter = std::slice::Iter<'a, OutputRing<F>>;

    fn into_iter(self) -> Self::IntoIter {
        self.rings.iter()
    }
}
