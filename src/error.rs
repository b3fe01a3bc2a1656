//! Error types for polygon decomposition.

use thiserror::Error;

/// Errors that can occur while decomposing a polygon.
///
/// Every variant is fatal: decomposition is a deterministic function of its
/// input, so an error always points at malformed input or an inconsistent
/// set of self-intersection records.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DecomposeError {
    /// The polygon has no rings.
    #[error("polygon has no rings")]
    EmptyPolygon,

    /// A ring has fewer than three distinct vertices.
    #[error("ring {ring} has {vertices} distinct vertices, at least 3 are required")]
    DegenerateRing {
        /// Index of the offending ring.
        ring: usize,
        /// Number of distinct vertices found.
        vertices: usize,
    },

    /// A vertex coordinate is NaN or infinite.
    #[error("ring {ring} vertex {vertex} has a non-finite coordinate")]
    NonFiniteCoordinate {
        /// Index of the ring.
        ring: usize,
        /// Index of the vertex within the ring.
        vertex: usize,
    },

    /// A vertex repeats another vertex of the polygon.
    ///
    /// Only the closing repeat of a ring's first vertex is allowed.
    #[error("ring {ring} vertex {vertex} duplicates an earlier vertex")]
    DuplicateVertex {
        /// Index of the ring holding the repeated vertex.
        ring: usize,
        /// Index of the repeated vertex within its ring.
        vertex: usize,
    },

    /// A vertex touches an edge it does not bound.
    ///
    /// The contact point would join more than two edges, which the
    /// intersection graph cannot represent.
    #[error("ring {ring} vertex {vertex} touches edge {edge} of ring {edge_ring}")]
    VertexOnEdge {
        /// Ring holding the touching vertex.
        ring: usize,
        /// Index of the vertex within its ring.
        vertex: usize,
        /// Ring holding the touched edge.
        edge_ring: usize,
        /// Index of the touched edge within its ring.
        edge: usize,
    },

    /// A self-intersection record refers to an edge outside the polygon.
    #[error("intersection record refers to missing edge {edge} of ring {ring}")]
    InvalidRecord {
        /// Ring index carried by the record.
        ring: usize,
        /// Edge index carried by the record.
        edge: usize,
    },

    /// No intersection exists at a coordinate the graph links to.
    #[error("no intersection at ({x}, {y})")]
    MissingIntersection {
        /// X-coordinate of the failed lookup.
        x: f64,
        /// Y-coordinate of the failed lookup.
        y: f64,
    },

    /// Two intersections share one coordinate.
    #[error("more than one intersection at ({x}, {y})")]
    DuplicateIntersection {
        /// X-coordinate of the shared point.
        x: f64,
        /// Y-coordinate of the shared point.
        y: f64,
    },

    /// Two records of one crossing disagree on the edges through it.
    #[error("intersection records at ({x}, {y}) disagree on their edges")]
    MismatchedRecord {
        /// X-coordinate of the crossing.
        x: f64,
        /// Y-coordinate of the crossing.
        y: f64,
    },

    /// An intersection was left without a successor along one of its edges.
    #[error("intersection at ({x}, {y}) has no successor along one of its edges")]
    UnlinkedIntersection {
        /// X-coordinate of the intersection.
        x: f64,
        /// Y-coordinate of the intersection.
        y: f64,
    },

    /// A walk tried to leave an intersection along an already walked edge.
    #[error("edge leaving ({x}, {y}) was walked twice")]
    EdgeWalkedTwice {
        /// X-coordinate of the intersection.
        x: f64,
        /// Y-coordinate of the intersection.
        y: f64,
    },
}

impl DecomposeError {
    /// Returns true for errors caused by the input rings themselves.
    pub fn is_malformed_input(&self) -> bool {
        matches!(
            self,
            DecomposeError::EmptyPolygon
                | DecomposeError::DegenerateRing { .. }
                | DecomposeError::NonFiniteCoordinate { .. }
                | DecomposeError::DuplicateVertex { .. }
                | DecomposeError::VertexOnEdge { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = DecomposeError::DuplicateVertex { ring: 1, vertex: 3 };
        assert_eq!(err.to_string(), "ring 1 vertex 3 duplicates an earlier vertex");

        let err = DecomposeError::MissingIntersection { x: 1.5, y: -2.0 };
        assert_eq!(err.to_string(), "no intersection at (1.5, -2)");
    }

    #[test]
    fn test_classification() {
        assert!(DecomposeError::EmptyPolygon.is_malformed_input());
        assert!(DecomposeError::DegenerateRing { ring: 0, vertices: 2 }.is_malformed_input());
        assert!(!DecomposeError::InvalidRecord { ring: 0, edge: 9 }.is_malformed_input());
        assert!(!DecomposeError::DuplicateIntersection { x: 0.0, y: 0.0 }.is_malformed_input());
        assert!(!DecomposeError::MismatchedRecord { x: 0.0, y: 0.0 }.is_malformed_input());
        let touch = DecomposeError::VertexOnEdge {
            ring: 1,
            vertex: 1,
            edge_ring: 0,
            edge: 1,
        };
        assert!(touch.is_malformed_input());
        assert_eq!(touch.to_string(), "ring 1 vertex 1 touches edge 1 of ring 0");
    }
}
