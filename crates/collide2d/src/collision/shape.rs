//! Convex hitbox shapes with a build/finalize lifecycle
//!
//! A [`Shape`] is owned by exactly one simulated entity. Circles and
//! axis-aligned rectangles are born finalized; polygons are built edge by
//! edge and transition once, irreversibly, to locked. After locking, vertex
//! topology is frozen and only whole-shape translation is allowed.

use log::{debug, trace};

use crate::error::ShapeError;
use crate::foundation::math::Vec2;
use crate::geometry::{Point, Vector2D};

use super::sat;

/// The geometric variant behind a [`Shape`].
///
/// The collision engine dispatches by exhaustive pattern matching over the
/// pair of variants, so adding a variant is a compile-time-checked exercise.
#[derive(Debug, Clone)]
pub enum ShapeKind {
    /// A circle described by its center and diameter
    Circle {
        /// Center point
        center: Point,
        /// Diameter, always positive
        diameter: f64,
    },
    /// An axis-aligned rectangle with four implicit edges in consistent
    /// counter-clockwise orientation
    Rect {
        /// The four edges, base-to-head chained
        edges: [Vector2D; 4],
    },
    /// An arbitrary convex polygon built incrementally
    Polygon {
        /// The edge list; at least 3 once locked
        edges: Vec<Vector2D>,
    },
}

/// A convex collision volume attached to a simulated entity.
///
/// The shape's location is its bounding origin: the minimum-x/minimum-y
/// corner of its extent, kept in sync with the underlying geometry. Cached
/// `width`/`height` are valid once the shape is locked and 0 before.
#[derive(Debug, Clone)]
pub struct Shape {
    kind: ShapeKind,
    locked: bool,
    width: f64,
    height: f64,
    origin: Point,
}

impl Shape {
    /// Creates a locked axis-aligned rectangle with its bounding origin at
    /// (x, y), spanning `[x, x + width]` by `[y, y + height]`.
    ///
    /// # Errors
    ///
    /// Returns a construction error for non-positive `width`/`height` and an
    /// argument error for NaN input.
    pub fn rect(x: f64, y: f64, width: f64, height: f64) -> Result<Self, ShapeError> {
        if width.is_nan() {
            return Err(ShapeError::NanCoordinate { name: "width" });
        }
        if height.is_nan() {
            return Err(ShapeError::NanCoordinate { name: "height" });
        }
        if width <= 0.0 {
            return Err(ShapeError::NonPositiveDimension {
                name: "width",
                value: width,
            });
        }
        if height <= 0.0 {
            return Err(ShapeError::NonPositiveDimension {
                name: "height",
                value: height,
            });
        }
        let origin = Point::new(x, y)?;

        let (x1, y1) = (x + width, y + height);
        let edges = [
            Vector2D::from_points(x, y, x1, y)?,
            Vector2D::from_points(x1, y, x1, y1)?,
            Vector2D::from_points(x1, y1, x, y1)?,
            Vector2D::from_points(x, y1, x, y)?,
        ];

        Ok(Self {
            kind: ShapeKind::Rect { edges },
            locked: true,
            width,
            height,
            origin,
        })
    }

    /// Creates a locked circle from its center and diameter.
    ///
    /// # Errors
    ///
    /// Returns a construction error for a non-positive diameter and an
    /// argument error for NaN input.
    pub fn circle(center_x: f64, center_y: f64, diameter: f64) -> Result<Self, ShapeError> {
        if diameter.is_nan() {
            return Err(ShapeError::NanCoordinate { name: "diameter" });
        }
        if diameter <= 0.0 {
            return Err(ShapeError::NonPositiveDimension {
                name: "diameter",
                value: diameter,
            });
        }
        let center = Point::new(center_x, center_y)?;
        let radius = diameter / 2.0;

        Ok(Self {
            kind: ShapeKind::Circle { center, diameter },
            locked: true,
            width: diameter,
            height: diameter,
            origin: Point::unchecked(center.x() - radius, center.y() - radius),
        })
    }

    /// Creates an empty, unlocked polygon. Edges are appended with
    /// [`add_edge`](Self::add_edge) and the shape finalized with
    /// [`lock`](Self::lock).
    pub fn polygon() -> Self {
        Self {
            kind: ShapeKind::Polygon { edges: Vec::new() },
            locked: false,
            width: 0.0,
            height: 0.0,
            origin: Point::origin(),
        }
    }

    /// Appends an edge from (x0, y0) to (x1, y1) to an unlocked polygon.
    ///
    /// # Errors
    ///
    /// Returns a state error once the shape is locked, a construction error
    /// for a zero-length edge, and an argument error for NaN input.
    pub fn add_edge(&mut self, x0: f64, y0: f64, x1: f64, y1: f64) -> Result<(), ShapeError> {
        if self.locked {
            return Err(ShapeError::AlreadyLocked);
        }
        // Circles and rectangles are born locked, so an unlocked shape is
        // always a polygon
        let ShapeKind::Polygon { edges } = &mut self.kind else {
            return Err(ShapeError::AlreadyLocked);
        };
        if x0 == x1 && y0 == y1 {
            return Err(ShapeError::DegenerateEdge { x: x0, y: y0 });
        }
        edges.push(Vector2D::from_points(x0, y0, x1, y1)?);
        Ok(())
    }

    /// Finalizes a polygon: enforces the minimum of 3 edges, computes the
    /// cached width/height by projecting every vertex onto the horizontal
    /// and vertical unit axes, and freezes the vertex topology. Idempotent
    /// once it has succeeded.
    ///
    /// # Errors
    ///
    /// Returns a state error when the polygon has fewer than 3 edges; the
    /// shape stays unlocked in that case.
    pub fn lock(&mut self) -> Result<(), ShapeError> {
        if self.locked {
            return Ok(());
        }
        let ShapeKind::Polygon { edges } = &self.kind else {
            self.locked = true;
            return Ok(());
        };
        if edges.len() < 3 {
            return Err(ShapeError::TooFewEdges { found: edges.len() });
        }

        let verts = sat::vertices_of(edges);
        let (min_x, max_x) = sat::project(&verts, &Vec2::new(1.0, 0.0));
        let (min_y, max_y) = sat::project(&verts, &Vec2::new(0.0, 1.0));

        self.width = max_x - min_x;
        self.height = max_y - min_y;
        self.origin = Point::unchecked(min_x, min_y);
        self.locked = true;
        debug!(
            "locked polygon: {} edges, {}x{} at {}",
            self.edge_count(),
            self.width,
            self.height,
            self.origin
        );
        Ok(())
    }

    /// Whether the shape has been finalized.
    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// The geometric variant, for exhaustive matching by callers.
    pub fn kind(&self) -> &ShapeKind {
        &self.kind
    }

    /// The bounding origin: the minimum-x/minimum-y corner of the shape's
    /// extent. Valid once locked.
    pub fn origin(&self) -> Point {
        self.origin
    }

    /// Cached width. 0 on an unlocked polygon.
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Cached height. 0 on an unlocked polygon.
    pub fn height(&self) -> f64 {
        self.height
    }

    fn edge_count(&self) -> usize {
        match &self.kind {
            ShapeKind::Circle { .. } => 0,
            ShapeKind::Rect { edges } => edges.len(),
            ShapeKind::Polygon { edges } => edges.len(),
        }
    }

    /// Moves the shape so its bounding origin lands at (x, y).
    ///
    /// # Errors
    ///
    /// Returns a state error on an unlocked shape and an argument error for
    /// NaN input.
    pub fn move_to(&mut self, x: f64, y: f64) -> Result<(), ShapeError> {
        if !self.locked {
            return Err(ShapeError::NotLocked {
                operation: "move_to",
            });
        }
        if x.is_nan() {
            return Err(ShapeError::NanCoordinate { name: "x" });
        }
        if y.is_nan() {
            return Err(ShapeError::NanCoordinate { name: "y" });
        }
        self.shift(x - self.origin.x(), y - self.origin.y());
        Ok(())
    }

    /// Translates the shape by (dx, dy).
    ///
    /// # Errors
    ///
    /// Returns a state error on an unlocked shape and an argument error for
    /// NaN input.
    pub fn move_by(&mut self, dx: f64, dy: f64) -> Result<(), ShapeError> {
        if !self.locked {
            return Err(ShapeError::NotLocked {
                operation: "move_by",
            });
        }
        if dx.is_nan() {
            return Err(ShapeError::NanCoordinate { name: "dx" });
        }
        if dy.is_nan() {
            return Err(ShapeError::NanCoordinate { name: "dy" });
        }
        self.shift(dx, dy);
        Ok(())
    }

    /// Whole-shape translation with deltas already validated. Non-circular
    /// shapes shift every edge's base and head; circles shift only the
    /// center.
    fn shift(&mut self, dx: f64, dy: f64) {
        match &mut self.kind {
            ShapeKind::Circle { center, .. } => center.shift(dx, dy),
            ShapeKind::Rect { edges } => {
                for edge in edges.iter_mut() {
                    edge.shift(dx, dy);
                }
            }
            ShapeKind::Polygon { edges } => {
                for edge in edges.iter_mut() {
                    edge.shift(dx, dy);
                }
            }
        }
        self.origin.shift(dx, dy);
    }

    /// Tests whether this shape currently overlaps another.
    ///
    /// Dispatch is exhaustive over the pair of variants. Candidate axes come
    /// from the edges of both shapes, so the result is symmetric in argument
    /// order. Touching shapes count as colliding.
    ///
    /// # Errors
    ///
    /// Returns a state error when the receiver is unlocked and an argument
    /// error when `other` is unlocked.
    pub fn collides_with(&self, other: &Self) -> Result<bool, ShapeError> {
        if !self.locked {
            return Err(ShapeError::NotLocked {
                operation: "collides_with",
            });
        }
        if !other.locked {
            return Err(ShapeError::UnlockedArgument {
                operation: "collides_with",
            });
        }

        use ShapeKind::{Circle, Polygon, Rect};
        let hit = match (&self.kind, &other.kind) {
            (
                Circle {
                    center: c0,
                    diameter: d0,
                },
                Circle {
                    center: c1,
                    diameter: d1,
                },
            ) => sat::circles_overlap(c0, *d0, c1, *d1),
            (Circle { center, diameter }, Rect { edges }) => {
                sat::circle_polygon_overlap(center, *diameter, edges)
            }
            (Circle { center, diameter }, Polygon { edges }) => {
                sat::circle_polygon_overlap(center, *diameter, edges)
            }
            (Rect { edges }, Circle { center, diameter }) => {
                sat::circle_polygon_overlap(center, *diameter, edges)
            }
            (Polygon { edges }, Circle { center, diameter }) => {
                sat::circle_polygon_overlap(center, *diameter, edges)
            }
            (Rect { edges: a }, Rect { edges: b }) => sat::polygons_overlap(a, b),
            (Rect { edges: a }, Polygon { edges: b }) => sat::polygons_overlap(a, b),
            (Polygon { edges: a }, Rect { edges: b }) => sat::polygons_overlap(a, b),
            (Polygon { edges: a }, Polygon { edges: b }) => sat::polygons_overlap(a, b),
        };
        trace!("collision test at {} vs {}: {}", self.origin, other.origin, hit);
        Ok(hit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn square_polygon(x: f64, y: f64, side: f64) -> Shape {
        let mut p = Shape::polygon();
        p.add_edge(x, y, x + side, y).unwrap();
        p.add_edge(x + side, y, x + side, y + side).unwrap();
        p.add_edge(x + side, y + side, x, y + side).unwrap();
        p.add_edge(x, y + side, x, y).unwrap();
        p.lock().unwrap();
        p
    }

    #[test]
    fn test_rect_dimensions_match_constructor() {
        let r = Shape::rect(2.0, 3.0, 12.5, 7.25).unwrap();
        assert!(r.is_locked());
        assert_eq!(r.width(), 12.5);
        assert_eq!(r.height(), 7.25);
        assert_eq!(r.origin().x(), 2.0);
        assert_eq!(r.origin().y(), 3.0);
    }

    #[test]
    fn test_rect_rejects_non_positive_dimensions() {
        let err = Shape::rect(0.0, 0.0, 0.0, 5.0).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Construction);

        let err = Shape::rect(0.0, 0.0, 5.0, -1.0).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Construction);
    }

    #[test]
    fn test_circle_rejects_non_positive_diameter() {
        let err = Shape::circle(0.0, 0.0, 0.0).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Construction);
    }

    #[test]
    fn test_circle_origin_is_bounding_corner() {
        let c = Shape::circle(10.0, 10.0, 8.0).unwrap();
        assert_eq!(c.origin().x(), 6.0);
        assert_eq!(c.origin().y(), 6.0);
        assert_eq!(c.width(), 8.0);
        assert_eq!(c.height(), 8.0);
    }

    #[test]
    fn test_polygon_square_dimensions_after_lock() {
        let p = square_polygon(0.0, 0.0, 10.0);
        assert_eq!(p.width(), 10.0);
        assert_eq!(p.height(), 10.0);
        assert_eq!(p.origin().x(), 0.0);
        assert_eq!(p.origin().y(), 0.0);
    }

    #[test]
    fn test_unlocked_polygon_reports_zero_dimensions() {
        let mut p = Shape::polygon();
        p.add_edge(0.0, 0.0, 5.0, 0.0).unwrap();
        assert!(!p.is_locked());
        assert_eq!(p.width(), 0.0);
        assert_eq!(p.height(), 0.0);
    }

    #[test]
    fn test_lock_with_two_edges_is_a_state_error() {
        let mut p = Shape::polygon();
        p.add_edge(0.0, 0.0, 5.0, 0.0).unwrap();
        p.add_edge(5.0, 0.0, 0.0, 5.0).unwrap();

        let err = p.lock().unwrap_err();
        assert_eq!(err, ShapeError::TooFewEdges { found: 2 });
        assert_eq!(err.kind(), ErrorKind::State);
        assert!(!p.is_locked());
    }

    #[test]
    fn test_lock_is_idempotent_after_success() {
        let mut p = square_polygon(0.0, 0.0, 4.0);
        assert!(p.lock().is_ok());
        assert!(p.lock().is_ok());
        assert_eq!(p.width(), 4.0);
    }

    #[test]
    fn test_add_edge_after_lock_fails() {
        let mut p = square_polygon(0.0, 0.0, 4.0);
        let err = p.add_edge(0.0, 0.0, 1.0, 1.0).unwrap_err();
        assert_eq!(err, ShapeError::AlreadyLocked);
        assert_eq!(err.kind(), ErrorKind::State);

        let mut r = Shape::rect(0.0, 0.0, 1.0, 1.0).unwrap();
        assert!(r.add_edge(0.0, 0.0, 1.0, 1.0).is_err());
    }

    #[test]
    fn test_degenerate_edge_rejected() {
        let mut p = Shape::polygon();
        let err = p.add_edge(3.0, 3.0, 3.0, 3.0).unwrap_err();
        assert_eq!(err, ShapeError::DegenerateEdge { x: 3.0, y: 3.0 });
        assert_eq!(err.kind(), ErrorKind::Construction);
    }

    #[test]
    fn test_moves_require_lock() {
        let mut p = Shape::polygon();
        p.add_edge(0.0, 0.0, 5.0, 0.0).unwrap();

        assert_eq!(
            p.move_to(1.0, 1.0).unwrap_err().kind(),
            ErrorKind::State
        );
        assert_eq!(
            p.move_by(1.0, 1.0).unwrap_err().kind(),
            ErrorKind::State
        );
    }

    #[test]
    fn test_move_to_sets_bounding_origin() {
        let mut r = Shape::rect(0.0, 0.0, 10.0, 10.0).unwrap();
        r.move_to(5.0, 6.0).unwrap();
        assert_eq!(r.origin().x(), 5.0);
        assert_eq!(r.origin().y(), 6.0);

        // Every edge moved with it
        let ShapeKind::Rect { edges } = r.kind() else {
            panic!("rect kind expected");
        };
        assert_eq!(edges[0].base().x(), 5.0);
        assert_eq!(edges[0].base().y(), 6.0);
    }

    #[test]
    fn test_move_to_shifts_circle_center() {
        let mut c = Shape::circle(5.0, 5.0, 10.0).unwrap();
        c.move_to(10.0, 10.0).unwrap();

        let ShapeKind::Circle { center, .. } = c.kind() else {
            panic!("circle kind expected");
        };
        assert_eq!(center.x(), 15.0);
        assert_eq!(center.y(), 15.0);
        assert_eq!(c.origin().x(), 10.0);
        assert_eq!(c.origin().y(), 10.0);
    }

    #[test]
    fn test_move_by_round_trip_is_exact() {
        let mut p = square_polygon(3.0, 4.0, 10.0);
        let before = p.clone();

        p.move_by(7.5, -2.25).unwrap();
        p.move_by(-7.5, 2.25).unwrap();

        assert_eq!(p.origin().x(), before.origin().x());
        assert_eq!(p.origin().y(), before.origin().y());
        let (ShapeKind::Polygon { edges: a }, ShapeKind::Polygon { edges: b }) =
            (p.kind(), before.kind())
        else {
            panic!("polygon kinds expected");
        };
        assert_eq!(a, b);
    }

    #[test]
    fn test_dimensions_survive_moves() {
        let mut r = Shape::rect(0.0, 0.0, 10.0, 20.0).unwrap();
        r.move_by(100.0, -50.0).unwrap();
        assert_eq!(r.width(), 10.0);
        assert_eq!(r.height(), 20.0);
    }

    #[test]
    fn test_collision_requires_both_locked() {
        let locked = Shape::rect(0.0, 0.0, 10.0, 10.0).unwrap();
        let mut unlocked = Shape::polygon();
        unlocked.add_edge(0.0, 0.0, 5.0, 0.0).unwrap();

        let err = unlocked.collides_with(&locked).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::State);

        let err = locked.collides_with(&unlocked).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Argument);
    }

    #[test]
    fn test_separated_rects_never_collide() {
        let a = Shape::rect(0.0, 0.0, 10.0, 10.0).unwrap();
        let b = Shape::rect(20.0, 0.0, 10.0, 10.0).unwrap();
        assert!(!a.collides_with(&b).unwrap());
        assert!(!b.collides_with(&a).unwrap());
    }

    #[test]
    fn test_identical_rects_collide() {
        let a = Shape::rect(0.0, 0.0, 10.0, 10.0).unwrap();
        let b = Shape::rect(0.0, 0.0, 10.0, 10.0).unwrap();
        assert!(a.collides_with(&b).unwrap());
    }

    #[test]
    fn test_touching_rects_collide() {
        let a = Shape::rect(0.0, 0.0, 10.0, 10.0).unwrap();
        let b = Shape::rect(10.0, 0.0, 10.0, 10.0).unwrap();
        assert!(a.collides_with(&b).unwrap());
        assert!(b.collides_with(&a).unwrap());
    }

    #[test]
    fn test_circle_fixtures() {
        let a = Shape::circle(0.0, 0.0, 10.0).unwrap();
        let far = Shape::circle(8.0, 0.0, 4.0).unwrap();
        let near = Shape::circle(6.0, 0.0, 4.0).unwrap();

        assert!(!a.collides_with(&far).unwrap());
        assert!(a.collides_with(&near).unwrap());
    }

    #[test]
    fn test_pinned_rect_circle_fixture() {
        // Regression anchor: the closest rect corner (10, 10) lies
        // 5 * sqrt(2) ~= 7.07 from the circle's center, inside its 7.5
        // radius, and every candidate axis shows overlap
        let rect = Shape::rect(0.0, 10.0, 10.0, 10.0).unwrap();
        let circle = Shape::circle(15.0, 5.0, 15.0).unwrap();

        assert!(rect.collides_with(&circle).unwrap());
        assert!(circle.collides_with(&rect).unwrap());
    }

    #[test]
    fn test_collision_is_symmetric_across_variants() {
        let rect = Shape::rect(0.0, 0.0, 10.0, 10.0).unwrap();
        let circle = Shape::circle(12.0, 5.0, 6.0).unwrap();
        let poly = square_polygon(8.0, 8.0, 6.0);
        let far_circle = Shape::circle(30.0, 30.0, 4.0).unwrap();

        let shapes = [&rect, &circle, &poly, &far_circle];
        for a in shapes {
            for b in shapes {
                assert_eq!(
                    a.collides_with(b).unwrap(),
                    b.collides_with(a).unwrap(),
                );
            }
        }
    }

    #[test]
    fn test_polygon_vs_rect_after_moves() {
        let mut poly = square_polygon(0.0, 0.0, 10.0);
        let rect = Shape::rect(20.0, 0.0, 10.0, 10.0).unwrap();

        assert!(!poly.collides_with(&rect).unwrap());
        poly.move_by(15.0, 0.0).unwrap();
        assert!(poly.collides_with(&rect).unwrap());
    }
}
