use serde::{Deserialize, Serialize};

mod circle;
mod hyperbola;
mod line;
mod vector;

pub use circle::{CenterOnCurve, Circle, RadialFunction};
pub use hyperbola::{Hyperbola, HyperbolaForm};
pub use line::{Line, LineSegment};
pub use vector::Vector;

/// Identifier of a scene object. Allocated by the object store, never
/// reused within a session.
pub type ObjectId = u64;

/// Identifier of a parameter. Allocated by the parameter store.
pub type ParamId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObjectType {
    Circle,
    Hyperbola,
    Line,
    LineSegment,
    Vector,
}

impl ObjectType {
    /// Human-readable name used when auto-generating labels.
    pub fn display_name(&self) -> &'static str {
        match self {
            ObjectType::Circle => "Circle",
            ObjectType::Hyperbola => "Hyperbola",
            ObjectType::Line => "Line",
            ObjectType::LineSegment => "Segment",
            ObjectType::Vector => "Vector",
        }
    }
}

/// Geometry payload of a scene object, discriminated by variant.
///
/// The resolver and the intersection engine match on this exhaustively so
/// a new variant cannot be silently half-supported.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    Circle(Circle),
    Hyperbola(Hyperbola),
    Line(Line),
    LineSegment(LineSegment),
    Vector(Vector),
}

impl Shape {
    pub fn object_type(&self) -> ObjectType {
        match self {
            Shape::Circle(_) => ObjectType::Circle,
            Shape::Hyperbola(_) => ObjectType::Hyperbola,
            Shape::Line(_) => ObjectType::Line,
            Shape::LineSegment(_) => ObjectType::LineSegment,
            Shape::Vector(_) => ObjectType::Vector,
        }
    }

    /// The object's intersection partner list, for the variants that have one.
    pub fn show_intersections_with(&self) -> Option<&[ObjectId]> {
        match self {
            Shape::Circle(c) => Some(&c.show_intersections_with),
            Shape::Line(l) => Some(&l.show_intersections_with),
            Shape::LineSegment(s) => Some(&s.show_intersections_with),
            Shape::Hyperbola(_) | Shape::Vector(_) => None,
        }
    }

    pub(crate) fn show_intersections_with_mut(&mut self) -> Option<&mut Vec<ObjectId>> {
        match self {
            Shape::Circle(c) => Some(&mut c.show_intersections_with),
            Shape::Line(l) => Some(&mut l.show_intersections_with),
            Shape::LineSegment(s) => Some(&mut s.show_intersections_with),
            Shape::Hyperbola(_) | Shape::Vector(_) => None,
        }
    }

    pub fn as_circle(&self) -> Option<&Circle> {
        match self {
            Shape::Circle(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_vector(&self) -> Option<&Vector> {
        match self {
            Shape::Vector(v) => Some(v),
            _ => None,
        }
    }
}

/// A geometric object in the scene: identity, display attributes, and the
/// variant-specific geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneObject {
    pub id: ObjectId,
    pub label: String,
    pub color: String,
    pub shape: Shape,
}

impl SceneObject {
    pub fn new(id: ObjectId, label: impl Into<String>, color: impl Into<String>, shape: Shape) -> Self {
        Self {
            id,
            label: label.into(),
            color: color.into(),
            shape,
        }
    }

    pub fn object_type(&self) -> ObjectType {
        self.shape.object_type()
    }
}
