//! NaN-free 2D points

use std::fmt;

use crate::error::ShapeError;
use crate::foundation::math::Point2;

/// A 2D point with NaN-free coordinates.
///
/// Construction and coordinate assignment validate against NaN so that every
/// value reaching the projection math is a real number.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    coords: Point2,
}

impl Point {
    /// Creates a point at the given coordinates.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError::NanCoordinate`] if either coordinate is NaN.
    pub fn new(x: f64, y: f64) -> Result<Self, ShapeError> {
        if x.is_nan() {
            return Err(ShapeError::NanCoordinate { name: "x" });
        }
        if y.is_nan() {
            return Err(ShapeError::NanCoordinate { name: "y" });
        }
        Ok(Self::unchecked(x, y))
    }

    /// The point at (0, 0).
    pub fn origin() -> Self {
        Self::unchecked(0.0, 0.0)
    }

    /// Internal constructor for coordinates already known to be NaN-free.
    pub(crate) fn unchecked(x: f64, y: f64) -> Self {
        debug_assert!(!x.is_nan() && !y.is_nan());
        Self {
            coords: Point2::new(x, y),
        }
    }

    /// The x-coordinate.
    pub fn x(&self) -> f64 {
        self.coords.x
    }

    /// The y-coordinate.
    pub fn y(&self) -> f64 {
        self.coords.y
    }

    /// Sets the x-coordinate.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError::NanCoordinate`] if the value is NaN.
    pub fn set_x(&mut self, x: f64) -> Result<(), ShapeError> {
        if x.is_nan() {
            return Err(ShapeError::NanCoordinate { name: "x" });
        }
        self.coords.x = x;
        Ok(())
    }

    /// Sets the y-coordinate.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError::NanCoordinate`] if the value is NaN.
    pub fn set_y(&mut self, y: f64) -> Result<(), ShapeError> {
        if y.is_nan() {
            return Err(ShapeError::NanCoordinate { name: "y" });
        }
        self.coords.y = y;
        Ok(())
    }

    /// Euclidean distance to another point.
    pub fn distance_to(&self, other: &Self) -> f64 {
        nalgebra::distance(&self.coords, &other.coords)
    }

    /// nalgebra view of the coordinates, for projection math.
    pub(crate) fn coords(&self) -> Point2 {
        self.coords
    }

    /// Shifts both coordinates by a delta already validated at the API edge.
    pub(crate) fn shift(&mut self, dx: f64, dy: f64) {
        self.coords.x += dx;
        self.coords.y += dy;
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.coords.x, self.coords.y)
    }
}
