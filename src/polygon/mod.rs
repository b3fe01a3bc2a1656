//! Polygon rings, input validation and self-intersection detection.
//!
//! This module provides:
//! - The [`Polygon`] ring type with area, containment and winding predicates
//! - [`ComplexPolygon`], a validated outer ring plus inner rings
//! - Crossing detection through the [`IntersectionDetector`] trait
//!
//! # Example
//!
//! ```
//! use ringwalk::polygon::{Polygon, polygon_area};
//! use ringwalk::Point2;
//!
//! let square = Polygon::new(vec![
//!     Point2::new(0.0, 0.0),
//!     Point2::new(2.0, 0.0),
//!     Point2::new(2.0, 2.0),
//!     Point2::new(0.0, 2.0),
//! ]);
//!
//! assert_eq!(polygon_area(&square.vertices), 4.0);
//! assert_eq!(square.winding(), 1);
//! assert!(square.contains(Point2::new(1.0, 1.0)));
//! ```

mod core;
mod crossings;
pub(crate) mod rings;

pub use self::core::{
    leftmost_vertex, point_on_ring, polygon_area, polygon_contains, polygon_signed_area,
    ring_winding, Polygon,
};
pub use crossings::{
    find_crossings, find_vertex_contacts, is_simple, EdgeSite, IntersectionDetector,
    RawIntersection, SegmentCrossings, VertexContact,
};
pub use rings::ComplexPolygon;
