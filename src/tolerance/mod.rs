//! Epsilon-aware geometric predicates.
//!
//! All functions in this module take explicit tolerance parameters.
//! No hidden epsilons are used.

mod predicates;

pub use predicates::{
    is_convex_turn, orient2d, point_on_segment, segment_crossing, Orientation, SegmentCrossing,
};
