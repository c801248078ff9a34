//! Point-versus-box collision detection and positional resolution.

use crate::float::Float;
use crate::vec::Vec2;
use crate::point::Point;
use crate::bounds::BoundingBox;
use crate::body::DynamicBody;
use alloc::vec::Vec as AllocVec;

/// What a point collided with.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Collider {
    Static(usize),
    Dynamic(usize),
}

/// A single contact found during a step.
///
/// `normal * depth` is the minimum translation that moves the point out of
/// the box. Transient: produced and consumed within one step.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CollisionInfo<F: Float> {
    pub normal: Vec2<F>,
    pub depth: F,
    /// Position of the point when the contact was detected.
    pub contact_point: Vec2<F>,
    /// Index of the dynamic body owning the point.
    pub body: usize,
    /// Index of the point within that body.
    pub point: usize,
    pub collider: Collider,
}

/// Minimum translation out of `bounds` for a point inside it.
///
/// Candidate edges are tried in the order left, right, bottom, top and a
/// later one only wins when strictly shallower, so ties prefer the x axis
/// and then the negative direction. Returns `None` when the point is outside
/// or sits exactly on the boundary.
pub fn penetration<F: Float>(bounds: &BoundingBox<F>, pos: Vec2<F>) -> Option<(Vec2<F>, F)> {
    if !bounds.contains(pos) {
        return None;
    }
    let min = bounds.min();
    let max = bounds.max();
    let candidates = [
        (Vec2::new(-F::one(), F::zero()), pos.x - min.x),
        (Vec2::new(F::one(), F::zero()), max.x - pos.x),
        (Vec2::new(F::zero(), -F::one()), pos.y - min.y),
        (Vec2::new(F::zero(), F::one()), max.y - pos.y),
    ];

    let mut best = candidates[0];
    for &candidate in &candidates[1..] {
        if candidate.1 < best.1 {
            best = candidate;
        }
    }

    if best.1 > F::zero() {
        Some(best)
    } else {
        None
    }
}

/// Collect contacts between the points of `body` and the box `target`.
///
/// Broad phase rejects on bounds overlap; pinned points never produce contacts.
/// Returns the number of contacts appended to `out`.
pub fn detect<F: Float>(
    body_index: usize,
    body: &DynamicBody<F>,
    target: &BoundingBox<F>,
    collider: Collider,
    out: &mut AllocVec<CollisionInfo<F>>,
) -> usize {
    if !body.bounds().overlaps(target) {
        return 0;
    }
    let before = out.len();
    for (index, p) in body.points().iter().enumerate() {
        if p.pinned {
            continue;
        }
        if let Some((normal, depth)) = penetration(target, p.pos) {
            out.push(CollisionInfo {
                normal,
                depth,
                contact_point: p.pos,
                body: body_index,
                point: index,
                collider,
            });
        }
    }
    out.len() - before
}

/// Push the contact's point out along the normal.
///
/// Previous position is left alone so the next integration derives a
/// velocity consistent with the correction.
pub fn resolve<F: Float>(points: &mut [Point<F>], info: &CollisionInfo<F>) {
    points[info.point].translate(info.normal.scale(info.depth));
}
