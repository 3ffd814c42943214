//! Convex shape lifecycle and the SAT collision engine

mod sat;
pub mod shape;

pub use shape::{Shape, ShapeKind};
