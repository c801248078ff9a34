//! Verlet point masses with implicit velocity.

use crate::float::Float;
use crate::vec::Vec2;

/// A simulated particle. Velocity is implied by `pos - prev_pos`.
#[derive(Clone, Debug, PartialEq)]
pub struct Point<F: Float> {
    pub pos: Vec2<F>,
    pub prev_pos: Vec2<F>,
    pub acceleration: Vec2<F>,
    pub pinned: bool,
}

impl<F: Float> Point<F> {
    /// A free point at rest.
    pub fn new(pos: Vec2<F>) -> Self {
        Point {
            pos,
            prev_pos: pos,
            acceleration: Vec2::zero(),
            pinned: false,
        }
    }

    /// A point whose position is externally fixed.
    pub fn pinned(pos: Vec2<F>) -> Self {
        Point { pinned: true, ..Point::new(pos) }
    }

    /// A free point moving by `velocity` per step.
    pub fn with_velocity(pos: Vec2<F>, velocity: Vec2<F>) -> Self {
        Point { prev_pos: pos - velocity, ..Point::new(pos) }
    }

    /// Accumulate acceleration for the next integration. Ignored while pinned.
    pub fn apply_acceleration(&mut self, accel: Vec2<F>) {
        if !self.pinned {
            self.acceleration = self.acceleration + accel;
        }
    }

    /// Verlet step: `pos + (pos - prev_pos) * damping + acceleration * dt^2`.
    ///
    /// Consumes the accumulated acceleration. Pinned points are left untouched.
    pub fn integrate(&mut self, dt: F, damping: F) {
        if self.pinned {
            return;
        }
        let velocity = (self.pos - self.prev_pos).scale(damping);
        let new_pos = self.pos + velocity + self.acceleration.scale(dt * dt);
        self.prev_pos = self.pos;
        self.pos = new_pos;
        self.acceleration = Vec2::zero();
    }

    /// Displacement over the last step.
    pub fn velocity_raw(&self) -> Vec2<F> {
        self.pos - self.prev_pos
    }

    /// Velocity in units per second, zero for a degenerate `dt`.
    pub fn velocity(&self, dt: F) -> Vec2<F> {
        if dt.is_near_zero(F::from_f32(1e-30)) {
            return Vec2::zero();
        }
        self.velocity_raw().scale(F::one() / dt)
    }

    /// Move the point by `offset` unless pinned. History is kept, so the
    /// next integration sees the offset as velocity.
    pub fn translate(&mut self, offset: Vec2<F>) {
        if !self.pinned {
            self.pos = self.pos + offset;
        }
    }

    /// Teleport to `pos`, discarding velocity. Works on pinned points too.
    pub fn place(&mut self, pos: Vec2<F>) {
        self.pos = pos;
        self.prev_pos = pos;
    }

    pub fn pin(&mut self) {
        self.pinned = true;
        self.acceleration = Vec2::zero();
    }

    pub fn unpin(&mut self) {
        self.pinned = false;
    }
}
