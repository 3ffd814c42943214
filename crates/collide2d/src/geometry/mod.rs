//! Vector/point primitives underlying the collision engine

pub mod point;
pub mod vector;

pub use point::Point;
pub use vector::Vector2D;
