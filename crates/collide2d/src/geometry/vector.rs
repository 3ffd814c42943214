//! Directed 2D segments used as free vectors and polygon edges

use std::fmt;

use crate::error::ShapeError;
use crate::foundation::math::Vec2;

use super::point::Point;

/// A directed segment from a base [`Point`] to a head [`Point`].
///
/// The vector's value (direction and magnitude) is `head - base`, so a
/// `Vector2D` need not originate at the origin. The same type therefore
/// represents both free vectors and located edges of a polygon.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vector2D {
    base: Point,
    head: Point,
}

impl Vector2D {
    /// Creates a free vector with its head at (x, y) and its base at origin.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError::NanCoordinate`] if either coordinate is NaN.
    pub fn new(x: f64, y: f64) -> Result<Self, ShapeError> {
        Self::from_points(0.0, 0.0, x, y)
    }

    /// Creates a located vector from a base point to a head point.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError::NanCoordinate`] if any coordinate is NaN.
    pub fn from_points(x0: f64, y0: f64, x1: f64, y1: f64) -> Result<Self, ShapeError> {
        Ok(Self {
            base: Point::new(x0, y0)?,
            head: Point::new(x1, y1)?,
        })
    }

    /// Unit vector pointing right.
    pub fn unit_east() -> Self {
        Self::axis(1.0, 0.0)
    }

    /// Unit vector pointing up.
    pub fn unit_north() -> Self {
        Self::axis(0.0, 1.0)
    }

    /// Unit vector pointing left.
    pub fn unit_west() -> Self {
        Self::axis(-1.0, 0.0)
    }

    /// Unit vector pointing down.
    pub fn unit_south() -> Self {
        Self::axis(0.0, -1.0)
    }

    fn axis(x: f64, y: f64) -> Self {
        Self {
            base: Point::origin(),
            head: Point::unchecked(x, y),
        }
    }

    /// The base point.
    pub fn base(&self) -> Point {
        self.base
    }

    /// The head point.
    pub fn head(&self) -> Point {
        self.head
    }

    /// The head's x-coordinate.
    pub fn x(&self) -> f64 {
        self.head.x()
    }

    /// The head's y-coordinate.
    pub fn y(&self) -> f64 {
        self.head.y()
    }

    /// The vector's value as head minus base.
    pub fn offset(&self) -> Vec2 {
        self.head.coords() - self.base.coords()
    }

    /// Euclidean length of head minus base.
    pub fn magnitude(&self) -> f64 {
        self.offset().norm()
    }

    /// Dot product of the two vectors' values.
    pub fn dot(&self, other: &Self) -> f64 {
        self.offset().dot(&other.offset())
    }

    /// Shifts both base and head by the given delta.
    ///
    /// This is a whole-segment translation, not an addition into the head
    /// alone, so direction and magnitude are unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError::NanCoordinate`] if either delta is NaN.
    pub fn translate(&mut self, dx: f64, dy: f64) -> Result<(), ShapeError> {
        if dx.is_nan() {
            return Err(ShapeError::NanCoordinate { name: "dx" });
        }
        if dy.is_nan() {
            return Err(ShapeError::NanCoordinate { name: "dy" });
        }
        self.shift(dx, dy);
        Ok(())
    }

    /// Translates this vector by another vector's value.
    pub fn add(&mut self, other: &Self) {
        let d = other.offset();
        self.shift(d.x, d.y);
    }

    /// Translation with deltas already validated at the API edge.
    pub(crate) fn shift(&mut self, dx: f64, dy: f64) {
        self.base.shift(dx, dy);
        self.head.shift(dx, dy);
    }

    /// Scales the head's offset from the base by a scalar. The base point is
    /// unaffected.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError::NanCoordinate`] if the scalar is NaN.
    pub fn scale(&mut self, scalar: f64) -> Result<(), ShapeError> {
        if scalar.is_nan() {
            return Err(ShapeError::NanCoordinate { name: "scalar" });
        }
        let d = self.offset() * scalar;
        self.head = Point::unchecked(self.base.x() + d.x, self.base.y() + d.y);
        Ok(())
    }

    /// Rescales the head so magnitude becomes 1, preserving direction and the
    /// base point. A zero-magnitude vector is left untouched.
    pub fn normalize(&mut self) {
        let mag = self.magnitude();
        if mag == 0.0 {
            return;
        }
        let d = self.offset() / mag;
        self.head = Point::unchecked(self.base.x() + d.x, self.base.y() + d.y);
    }

    /// Changes the magnitude without moving the vector's anchor point:
    /// rebases to origin, normalizes, scales, then restores the base.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError::NanCoordinate`] if the magnitude is NaN.
    pub fn set_magnitude(&mut self, magnitude: f64) -> Result<(), ShapeError> {
        if magnitude.is_nan() {
            return Err(ShapeError::NanCoordinate { name: "magnitude" });
        }
        let original_x = self.base.x();
        let original_y = self.base.y();

        self.rebase(0.0, 0.0, true)?;
        self.normalize();
        self.scale(magnitude)?;
        self.rebase(original_x, original_y, true)?;
        Ok(())
    }

    /// Returns a normalized copy. The receiver is not mutated.
    pub fn unit(&self) -> Self {
        let mut v = *self;
        v.normalize();
        v
    }

    /// Returns a perpendicular vector of the same magnitude anchored at the
    /// same base. The left normal's offset is (dy, -dx), the right normal's
    /// is (-dy, dx), where (dx, dy) is head minus base.
    pub fn normal(&self, left: bool) -> Self {
        let d = self.offset();
        let (nx, ny) = if left { (d.y, -d.x) } else { (-d.y, d.x) };
        Self {
            base: self.base,
            head: Point::unchecked(self.base.x() + nx, self.base.y() + ny),
        }
    }

    /// Mirrors the head to the opposite side of the base. The base point is
    /// unchanged.
    pub fn reverse(&mut self) {
        let d = self.offset();
        self.head = Point::unchecked(self.base.x() - d.x, self.base.y() - d.y);
    }

    /// Moves the base to (x, y). When `relative` is true the head follows so
    /// direction and magnitude are preserved; otherwise only the base moves
    /// and the head keeps its absolute coordinates.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError::NanCoordinate`] if either coordinate is NaN.
    pub fn rebase(&mut self, x: f64, y: f64, relative: bool) -> Result<(), ShapeError> {
        if x.is_nan() {
            return Err(ShapeError::NanCoordinate { name: "x" });
        }
        if y.is_nan() {
            return Err(ShapeError::NanCoordinate { name: "y" });
        }
        if relative {
            let d = self.offset();
            self.head = Point::unchecked(x + d.x, y + d.y);
        }
        self.base = Point::unchecked(x, y);
        Ok(())
    }

    /// Copies another vector's base and head points into this one.
    pub fn update_from(&mut self, other: &Self) {
        *self = *other;
    }
}

impl fmt::Display for Vector2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{ ({},{}) , ({},{}) , [{}] }}",
            self.base.x(),
            self.base.y(),
            self.head.x(),
            self.head.y(),
            self.magnitude()
        )
    }
}
