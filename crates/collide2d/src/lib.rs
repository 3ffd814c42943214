//! # Collide2D
//!
//! A 2D convex collision-detection core for fixed-tick simulations.
//!
//! ## Features
//!
//! - **Vector/point primitive**: a directed-segment [`Vector2D`] (base point +
//!   head point) that doubles as a free vector and a located polygon edge
//! - **Shape lifecycle**: circles and axis-aligned rectangles born finalized,
//!   polygons built edge by edge and then locked irreversibly
//! - **SAT overlap tests**: Separating Axis Theorem dispatch over every pair of
//!   shape variants, including the circle-polygon hybrid test
//!
//! The library is pure, synchronous, and CPU-bound: the intended caller is a
//! single simulation thread that translates every shape once per tick and then
//! runs pairwise overlap tests among the now-stationary shapes.
//!
//! ## Quick Start
//!
//! ```rust
//! use collide2d::{Shape, ShapeError};
//!
//! fn main() -> Result<(), ShapeError> {
//!     let floor = Shape::rect(0.0, 0.0, 100.0, 10.0)?;
//!     let mut ball = Shape::circle(50.0, 30.0, 8.0)?;
//!
//!     // The physics layer moves the shape each tick, then tests overlap.
//!     ball.move_by(0.0, -18.0)?;
//!     assert!(ball.collides_with(&floor)?);
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod collision;
pub mod error;
pub mod foundation;
pub mod geometry;

pub use collision::{Shape, ShapeKind};
pub use error::{ErrorKind, ShapeError};
pub use geometry::{Point, Vector2D};

/// Common imports for library users
pub mod prelude {
    pub use crate::{
        collision::{Shape, ShapeKind},
        error::{ErrorKind, ShapeError},
        geometry::{Point, Vector2D},
    };
}
