//! Math type aliases
//!
//! The collision core computes in `f64` to keep projection intervals and
//! move round-trips exact for the coordinate ranges a simulation uses.

/// 2D vector type
pub type Vec2 = nalgebra::Vector2<f64>;

/// 2D coordinate type
pub type Point2 = nalgebra::Point2<f64>;
