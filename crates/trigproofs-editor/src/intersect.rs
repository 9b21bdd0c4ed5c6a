//! Exact-geometry intersections between lines, segments, and circles.
//!
//! Pure and stateless: given two scene objects and a resolver (to obtain
//! effective circle geometry), returns 0, 1, or 2 points. Degenerate
//! configurations are decided with [`EPSILON`]:
//!
//! - parallel/coincident lines report no points (collinear-overlapping
//!   segments are intentionally unreported — documented source behavior)
//! - a vanishing discriminant yields exactly one tangent point
//! - coincident circles report no points (the infinite case is ambiguous)
//!
//! Objects that are not lines, segments, or circles never intersect here;
//! hyperbolas and vectors are decorative at this boundary.

use smallvec::{smallvec, SmallVec};

use trigproofs_core::math::{Point, EPSILON};

use crate::model::{SceneObject, Shape};
use crate::resolver::Resolver;

/// Intersection result: never more than two points for these primitives.
pub type IntersectionPoints = SmallVec<[Point; 2]>;

/// Computes the intersection points between two scene objects.
pub fn intersection_points(
    a: &SceneObject,
    b: &SceneObject,
    resolver: &Resolver<'_>,
) -> IntersectionPoints {
    match (&a.shape, &b.shape) {
        (Shape::Line(l1), Shape::Line(l2)) => line_line(l1.p1, l1.p2, false, l2.p1, l2.p2, false),
        (Shape::Line(l), Shape::LineSegment(s)) => line_line(l.p1, l.p2, false, s.p1, s.p2, true),
        (Shape::LineSegment(s), Shape::Line(l)) => line_line(s.p1, s.p2, true, l.p1, l.p2, false),
        (Shape::LineSegment(s1), Shape::LineSegment(s2)) => {
            line_line(s1.p1, s1.p2, true, s2.p1, s2.p2, true)
        }
        (Shape::Line(l), Shape::Circle(_)) => circle_with_line(b, l.p1, l.p2, false, resolver),
        (Shape::LineSegment(s), Shape::Circle(_)) => circle_with_line(b, s.p1, s.p2, true, resolver),
        (Shape::Circle(_), Shape::Line(l)) => circle_with_line(a, l.p1, l.p2, false, resolver),
        (Shape::Circle(_), Shape::LineSegment(s)) => circle_with_line(a, s.p1, s.p2, true, resolver),
        (Shape::Circle(_), Shape::Circle(_)) => circle_circle(a, b, resolver),
        _ => SmallVec::new(),
    }
}

/// Solves the 2×2 system for two lines given by point pairs. Each operand
/// marked `bounded` keeps its solved parameter within [0, 1] (±ε).
fn line_line(
    p1: Point,
    p2: Point,
    bounded1: bool,
    p3: Point,
    p4: Point,
    bounded2: bool,
) -> IntersectionPoints {
    let den = (p1.x - p2.x) * (p3.y - p4.y) - (p1.y - p2.y) * (p3.x - p4.x);
    if den.abs() < EPSILON {
        // Parallel or coincident.
        return SmallVec::new();
    }

    let t_num = (p1.x - p3.x) * (p3.y - p4.y) - (p1.y - p3.y) * (p3.x - p4.x);
    let u_num = -((p1.x - p2.x) * (p1.y - p3.y) - (p1.y - p2.y) * (p1.x - p3.x));
    let t = t_num / den;
    let u = u_num / den;

    if bounded1 && !(-EPSILON..=1.0 + EPSILON).contains(&t) {
        return SmallVec::new();
    }
    if bounded2 && !(-EPSILON..=1.0 + EPSILON).contains(&u) {
        return SmallVec::new();
    }

    smallvec![Point::new(
        p1.x + t * (p2.x - p1.x),
        p1.y + t * (p2.y - p1.y),
    )]
}

fn circle_with_line(
    circle_obj: &SceneObject,
    p1: Point,
    p2: Point,
    bounded: bool,
    resolver: &Resolver<'_>,
) -> IntersectionPoints {
    let Some((center, radius)) = resolver.effective_circle(circle_obj.id) else {
        return SmallVec::new();
    };
    line_circle(p1, p2, bounded, center, radius)
}

/// Substitutes the line's parametric form into the circle equation and
/// solves the resulting quadratic in t.
fn line_circle(p1: Point, p2: Point, bounded: bool, center: Point, radius: f64) -> IntersectionPoints {
    if radius < EPSILON {
        return SmallVec::new();
    }

    let dx = p2.x - p1.x;
    let dy = p2.y - p1.y;
    let a = dx * dx + dy * dy;
    if a.abs() < EPSILON {
        // The two defining points coincide; no direction to follow.
        return SmallVec::new();
    }
    let b = 2.0 * (dx * (p1.x - center.x) + dy * (p1.y - center.y));
    let c = (p1.x - center.x).powi(2) + (p1.y - center.y).powi(2) - radius * radius;

    let discriminant = b * b - 4.0 * a * c;
    let mut points = SmallVec::new();

    let in_bounds = |t: f64| !bounded || (-EPSILON..=1.0 + EPSILON).contains(&t);
    let point_at = |t: f64| Point::new(p1.x + t * dx, p1.y + t * dy);

    if discriminant < -EPSILON {
        // No real roots.
    } else if discriminant.abs() < EPSILON {
        let t = -b / (2.0 * a);
        if in_bounds(t) {
            points.push(point_at(t));
        }
    } else {
        let sqrt_d = discriminant.sqrt();
        let t1 = (-b + sqrt_d) / (2.0 * a);
        let t2 = (-b - sqrt_d) / (2.0 * a);
        if in_bounds(t1) {
            points.push(point_at(t1));
        }
        if in_bounds(t2) && (t1 - t2).abs() > EPSILON {
            points.push(point_at(t2));
        }
    }
    points
}

/// Classic radical-axis construction from the center distance and radii.
fn circle_circle(a: &SceneObject, b: &SceneObject, resolver: &Resolver<'_>) -> IntersectionPoints {
    let (Some((c1, r1)), Some((c2, r2))) =
        (resolver.effective_circle(a.id), resolver.effective_circle(b.id))
    else {
        return SmallVec::new();
    };

    if r1 < EPSILON || r2 < EPSILON {
        return SmallVec::new();
    }

    let d_sq = (c1.x - c2.x).powi(2) + (c1.y - c2.y).powi(2);
    let d = d_sq.sqrt();

    // Separate, or nested without touching.
    if d > r1 + r2 + EPSILON || d < (r1 - r2).abs() - EPSILON {
        return SmallVec::new();
    }
    // Coincident circles intersect everywhere; report nothing.
    if d < EPSILON && (r1 - r2).abs() < EPSILON {
        return SmallVec::new();
    }

    // Foot of the radical axis on the center line, distance a from c1.
    let along = (r1 * r1 - r2 * r2 + d_sq) / (2.0 * d);
    let foot = Point::new(
        c1.x + (along / d) * (c2.x - c1.x),
        c1.y + (along / d) * (c2.y - c1.y),
    );

    // Half-chord length; tiny negatives from rounding count as tangency.
    let h_sq = r1 * r1 - along * along;
    if h_sq < -EPSILON {
        return SmallVec::new();
    }
    let h = h_sq.max(0.0).sqrt();

    let perp_x = -(c2.y - c1.y) / d;
    let perp_y = (c2.x - c1.x) / d;

    let mut points: IntersectionPoints =
        smallvec![Point::new(foot.x + h * perp_x, foot.y + h * perp_y)];
    if h.abs() > EPSILON {
        points.push(Point::new(foot.x - h * perp_x, foot.y - h * perp_y));
    }
    points
}
