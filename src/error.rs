//! Error types for physics operations.

use core::fmt;

/// Errors raised when building bodies or configuring the world.
///
/// Stepping never fails; these only surface at construction or add time.
#[derive(Debug, Clone, PartialEq)]
pub enum PhysicsError {
    /// Pole rest length must be positive and finite.
    InvalidRestLength,
    /// Point index is out of bounds for the owning body.
    PointOutOfBounds { index: usize, count: usize },
    /// Pole connects a point to itself.
    DegeneratePole { index: usize },
    /// Bounding box has `min` greater than `max` on some axis, or a non-finite corner.
    MalformedBounds,
    /// Dynamic body must own at least one point.
    EmptyBody,
    /// Polygon bodies need at least 3 vertices.
    InsufficientVertices,
    /// Body index is out of bounds for the world.
    BodyOutOfBounds { index: usize, count: usize },
    /// Scene text could not be parsed.
    Scene { line: usize, kind: SceneErrorKind },
}

/// What went wrong on a scene line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneErrorKind {
    /// First word is neither `static` nor `dynamic`.
    UnknownRecord,
    /// Wrong number of fields for the record.
    FieldCount,
    /// A field is not a number (or not `pinned`).
    BadNumber,
    /// File ended before all points of a `dynamic` record were read.
    UnexpectedEof,
    /// The record parsed but describes an invalid body.
    InvalidBody,
}

impl fmt::Display for PhysicsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PhysicsError::InvalidRestLength => write!(f, "rest length must be positive and finite"),
            PhysicsError::PointOutOfBounds { index, count } => {
                write!(f, "point index {} out of bounds (count: {})", index, count)
            }
            PhysicsError::DegeneratePole { index } => {
                write!(f, "pole connects point {} to itself", index)
            }
            PhysicsError::MalformedBounds => write!(f, "bounding box min must not exceed max"),
            PhysicsError::EmptyBody => write!(f, "dynamic body needs at least one point"),
            PhysicsError::InsufficientVertices => write!(f, "polygon needs at least 3 vertices"),
            PhysicsError::BodyOutOfBounds { index, count } => {
                write!(f, "body index {} out of bounds (count: {})", index, count)
            }
            PhysicsError::Scene { line, kind } => write!(f, "scene line {}: {}", line, kind),
        }
    }
}

impl fmt::Display for SceneErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SceneErrorKind::UnknownRecord => write!(f, "expected `static` or `dynamic`"),
            SceneErrorKind::FieldCount => write!(f, "wrong number of fields"),
            SceneErrorKind::BadNumber => write!(f, "malformed number"),
            SceneErrorKind::UnexpectedEof => write!(f, "unexpected end of scene"),
            SceneErrorKind::InvalidBody => write!(f, "invalid body"),
        }
    }
}
