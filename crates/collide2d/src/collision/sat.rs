//! Separating Axis Theorem overlap tests
//!
//! Candidate axes are drawn from the edge normals of BOTH shapes so every
//! test is symmetric in argument order by construction. Interval overlap is
//! inclusive everywhere: two shapes that exactly touch count as colliding.

use crate::foundation::math::{Point2, Vec2};
use crate::geometry::{Point, Vector2D};

/// Collects the vertex set of an edge list: the base and head of every edge.
///
/// Shared corners appear twice; duplicates cannot change a projection's
/// extremes.
pub(crate) fn vertices_of(edges: &[Vector2D]) -> Vec<Point2> {
    let mut verts = Vec::with_capacity(edges.len() * 2);
    for edge in edges {
        verts.push(edge.base().coords());
        verts.push(edge.head().coords());
    }
    verts
}

/// Ordering used to break ties between equal projections: the min prefers
/// the lower y-coordinate, then the lower x-coordinate. The max uses the
/// inverted ordering.
fn orders_before(a: &Point2, b: &Point2) -> bool {
    a.y < b.y || (a.y == b.y && a.x < b.x)
}

/// Picks the extreme vertices of a projection onto `axis`, applying the
/// deterministic tie-break ordering. Returns (min vertex, max vertex).
pub(crate) fn extremes(verts: &[Point2], axis: &Vec2) -> (Point2, Point2) {
    debug_assert!(!verts.is_empty());
    let mut min_pt = verts[0];
    let mut min_val = min_pt.coords.dot(axis);
    let mut max_pt = min_pt;
    let mut max_val = min_val;

    for v in &verts[1..] {
        let val = v.coords.dot(axis);
        if val < min_val || (val == min_val && orders_before(v, &min_pt)) {
            min_val = val;
            min_pt = *v;
        }
        if val > max_val || (val == max_val && orders_before(&max_pt, v)) {
            max_val = val;
            max_pt = *v;
        }
    }
    (min_pt, max_pt)
}

/// Reduces a vertex set to its [min, max] interval along `axis`.
pub(crate) fn project(verts: &[Point2], axis: &Vec2) -> (f64, f64) {
    let (lo, hi) = extremes(verts, axis);
    (lo.coords.dot(axis), hi.coords.dot(axis))
}

/// Inclusive interval overlap: touching intervals count.
fn intervals_overlap(min_a: f64, max_a: f64, min_b: f64, max_b: f64) -> bool {
    max_a >= min_b && max_b >= min_a
}

/// Unit-length left normals of every edge, the SAT candidate axes of a
/// polygon. Edges are non-degenerate by construction, so normalization
/// never divides by zero.
fn axes_of(edges: &[Vector2D]) -> impl Iterator<Item = Vec2> + '_ {
    edges.iter().map(|edge| edge.normal(true).unit().offset())
}

/// Polygon/rectangle versus polygon/rectangle.
///
/// Tests the edge normals of both shapes; the first axis on which the
/// projection intervals fail to overlap proves separation.
pub(crate) fn polygons_overlap(a: &[Vector2D], b: &[Vector2D]) -> bool {
    let verts_a = vertices_of(a);
    let verts_b = vertices_of(b);

    for axis in axes_of(a).chain(axes_of(b)) {
        let (min_a, max_a) = project(&verts_a, &axis);
        let (min_b, max_b) = project(&verts_b, &axis);
        if !intervals_overlap(min_a, max_a, min_b, max_b) {
            return false; // separating axis found
        }
    }
    true
}

/// Circle versus circle: centers closer than or exactly at the sum of the
/// radii.
pub(crate) fn circles_overlap(c0: &Point, d0: f64, c1: &Point, d1: f64) -> bool {
    c0.distance_to(c1) <= (d0 + d1) / 2.0
}

/// Circle versus polygon/rectangle, the two-part hybrid test.
///
/// Part one builds an axis from the circle's center to the Euclidean-closest
/// polygon vertex; part two tests every polygon edge normal. On each axis the
/// circle projects to a radius-wide interval centered on its projected
/// center. Only if every candidate axis shows overlap do the shapes collide.
pub(crate) fn circle_polygon_overlap(center: &Point, diameter: f64, edges: &[Vector2D]) -> bool {
    let verts = vertices_of(edges);
    let Some((first, rest)) = verts.split_first() else {
        return false;
    };

    let radius = diameter / 2.0;
    let c = center.coords();

    // Closest vertex to the circle's center, with the same deterministic
    // tie-break as projection extremes
    let mut closest = *first;
    let mut best = (closest - c).norm_squared();
    for v in rest {
        let dist = (*v - c).norm_squared();
        if dist < best || (dist == best && orders_before(v, &closest)) {
            best = dist;
            closest = *v;
        }
    }

    // Center-to-nearest-vertex axis; skipped when the center sits exactly on
    // that vertex (the shapes overlap there regardless)
    let dir = closest - c;
    let len = dir.norm();
    if len > 0.0 {
        let axis = dir / len;
        let center_proj = c.coords.dot(&axis);
        let (min_p, max_p) = project(&verts, &axis);
        if !intervals_overlap(center_proj - radius, center_proj + radius, min_p, max_p) {
            return false;
        }
    }

    for axis in axes_of(edges) {
        let center_proj = c.coords.dot(&axis);
        let (min_p, max_p) = project(&verts, &axis);
        if !intervals_overlap(center_proj - radius, center_proj + radius, min_p, max_p) {
            return false;
        }
    }
    true
}
