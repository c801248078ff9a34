//! Plain-text scene descriptions.
//!
//! A scene is a sequence of records, one field group per line. Blank lines
//! and lines whose first non-blank character is `%` are ignored.
//!
//! ```text
//! % floor
//! static -10 -1 10 0
//! % a falling triangle, top vertex pinned
//! dynamic 3
//! -0.4 1.8
//! 0.4 1.8
//! 0 2.4 pinned
//! ```
//!
//! `static x0 y0 x1 y1` takes any two opposite corners. `dynamic N` is
//! followed by `N` vertex lines and becomes a braced polygon (or a lone
//! particle when `N` is 1).

use crate::float::Float;
use crate::vec::Vec2;
use crate::body::{DynamicBody, StaticBody};
use crate::physics::Physics;
use crate::error::{PhysicsError, SceneErrorKind};
use alloc::vec::Vec as AllocVec;

/// Bodies read from a scene description, in file order.
#[derive(Clone, Debug)]
pub struct Scene<F: Float> {
    pub static_bodies: AllocVec<StaticBody<F>>,
    pub dynamic_bodies: AllocVec<DynamicBody<F>>,
}

impl<F: Float> Scene<F> {
    /// Parse a scene. Errors carry the 1-based line number.
    pub fn parse(text: &str) -> Result<Self, PhysicsError> {
        let mut scene = Scene {
            static_bodies: AllocVec::new(),
            dynamic_bodies: AllocVec::new(),
        };
        let mut lines = text
            .lines()
            .enumerate()
            .map(|(i, line)| (i + 1, line.trim()))
            .filter(|(_, line)| !line.is_empty() && !line.starts_with('%'));

        while let Some((line_no, line)) = lines.next() {
            let mut fields = line.split_whitespace();
            match fields.next() {
                Some("static") => {
                    let values: AllocVec<F> = numbers(fields, line_no)?;
                    if values.len() != 4 {
                        return Err(scene_error(line_no, SceneErrorKind::FieldCount));
                    }
                    let body = StaticBody::from_corners(
                        Vec2::new(values[0], values[1]),
                        Vec2::new(values[2], values[3]),
                    )
                    .map_err(|_| scene_error(line_no, SceneErrorKind::InvalidBody))?;
                    scene.static_bodies.push(body);
                }
                Some("dynamic") => {
                    let count = match (fields.next(), fields.next()) {
                        (Some(n), None) => n
                            .parse::<usize>()
                            .map_err(|_| scene_error(line_no, SceneErrorKind::BadNumber))?,
                        _ => return Err(scene_error(line_no, SceneErrorKind::FieldCount)),
                    };
                    let mut vertices = AllocVec::new();
                    let mut pinned = AllocVec::new();
                    for index in 0..count {
                        let (vertex_line, vertex_text) = lines
                            .next()
                            .ok_or_else(|| scene_error(line_no, SceneErrorKind::UnexpectedEof))?;
                        let (vertex, pin) = vertex::<F>(vertex_text, vertex_line)?;
                        vertices.push(vertex);
                        if pin {
                            pinned.push(index);
                        }
                    }
                    let mut body = match count {
                        0 => return Err(scene_error(line_no, SceneErrorKind::InvalidBody)),
                        1 => DynamicBody::particle(vertices[0]),
                        _ => DynamicBody::polygon(&vertices)
                            .map_err(|_| scene_error(line_no, SceneErrorKind::InvalidBody))?,
                    };
                    for index in pinned {
                        body.pin(index);
                    }
                    scene.dynamic_bodies.push(body);
                }
                _ => return Err(scene_error(line_no, SceneErrorKind::UnknownRecord)),
            }
        }
        Ok(scene)
    }

    /// Add every body to `physics`, static bodies first, each group in file order.
    pub fn apply(self, physics: &mut Physics<F>) {
        for body in self.static_bodies {
            physics.add_static_body(body);
        }
        for body in self.dynamic_bodies {
            physics.add_dynamic_body(body);
        }
    }
}

fn scene_error(line: usize, kind: SceneErrorKind) -> PhysicsError {
    log::warn!("scene line {}: {}", line, kind);
    PhysicsError::Scene { line, kind }
}

fn numbers<'a, F, I>(fields: I, line: usize) -> Result<AllocVec<F>, PhysicsError>
where
    F: Float,
    I: Iterator<Item = &'a str>,
{
    fields
        .map(|field| {
            field
                .parse::<F>()
                .ok()
                .filter(|v| v.is_finite())
                .ok_or_else(|| scene_error(line, SceneErrorKind::BadNumber))
        })
        .collect()
}

fn vertex<F: Float>(text: &str, line: usize) -> Result<(Vec2<F>, bool), PhysicsError> {
    let mut fields: AllocVec<&str> = text.split_whitespace().collect();
    let pinned = match fields.last() {
        Some(&"pinned") => {
            fields.pop();
            true
        }
        _ => false,
    };
    let values: AllocVec<F> = numbers(fields.into_iter(), line)?;
    if values.len() != 2 {
        return Err(scene_error(line, SceneErrorKind::FieldCount));
    }
    Ok((Vec2::new(values[0], values[1]), pinned))
}
