//! ringwalk - Decomposing self-intersecting polygons into simple rings
//!
//! A polygon whose rings cross themselves or each other is split at every
//! crossing into simple rings that cover the original edges exactly once.
//! Each ring carries a winding number, the smallest ring enclosing it and a
//! net winding number, which together describe how often every region of
//! the plane is covered.

pub mod decompose;
pub mod error;
pub mod polygon;
pub mod primitives;
pub mod tolerance;

pub use decompose::{
    decompose, decompose_rings, decompose_with, DecomposeOptions, Decomposition, FillRule,
    OutputRing, ParentCheck,
};
pub use error::DecomposeError;
pub use polygon::{ComplexPolygon, Polygon};
pub use primitives::{Point2, Segment2, Vec2};
pub use tolerance::{orient2d, point_on_segment, Orientation};
