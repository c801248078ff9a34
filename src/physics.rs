//! The world: owns every body and runs the per-frame step.

use crate::float::Float;
use crate::vec::Vec2;
use crate::bounds::BoundingBox;
use crate::body::{DynamicBody, StaticBody};
use crate::collision::{self, Collider, CollisionInfo};
use crate::config::PhysicsConfig;
use crate::observer::{NoOpStepObserver, StepObserver};
use crate::error::PhysicsError;
use alloc::vec::Vec as AllocVec;

/// Address of a single point inside the world.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PointHandle {
    pub body: usize,
    pub point: usize,
}

/// Simulation state: static geometry, dynamic bodies and the step configuration.
///
/// Bodies are kept in insertion order, which is also the iteration order of
/// every phase of [`Physics::step`]. Indices returned by the `add_*` methods
/// shift down when an earlier body is removed.
pub struct Physics<F: Float> {
    config: PhysicsConfig<F>,
    static_bodies: AllocVec<StaticBody<F>>,
    dynamic_bodies: AllocVec<DynamicBody<F>>,
    contacts: AllocVec<CollisionInfo<F>>,
}

impl<F: Float> Physics<F> {
    pub fn new(config: PhysicsConfig<F>) -> Self {
        Physics {
            config,
            static_bodies: AllocVec::new(),
            dynamic_bodies: AllocVec::new(),
            contacts: AllocVec::new(),
        }
    }

    pub fn config(&self) -> &PhysicsConfig<F> {
        &self.config
    }

    pub fn set_gravity(&mut self, gravity: Vec2<F>) {
        self.config.gravity = gravity;
    }

    pub fn add_static_body(&mut self, body: StaticBody<F>) -> usize {
        log::info!("adding static body {:?}..{:?}", body.bounds().min(), body.bounds().max());
        self.static_bodies.push(body);
        self.static_bodies.len() - 1
    }

    /// Add a static box from ordered corners, rejecting `min > max`.
    pub fn add_static_box(&mut self, min: Vec2<F>, max: Vec2<F>) -> Result<usize, PhysicsError> {
        let bounds = BoundingBox::new(min, max)?;
        Ok(self.add_static_body(StaticBody::new(bounds)))
    }

    pub fn add_dynamic_body(&mut self, body: DynamicBody<F>) -> usize {
        log::info!(
            "adding dynamic body with {} points and {} poles",
            body.len(),
            body.pole_count()
        );
        self.dynamic_bodies.push(body);
        self.dynamic_bodies.len() - 1
    }

    pub fn remove_static_body(&mut self, index: usize) -> Result<StaticBody<F>, PhysicsError> {
        let count = self.static_bodies.len();
        if index >= count {
            log::warn!("cannot remove static body {}: world has {}", index, count);
            return Err(PhysicsError::BodyOutOfBounds { index, count });
        }
        Ok(self.static_bodies.remove(index))
    }

    pub fn remove_dynamic_body(&mut self, index: usize) -> Result<DynamicBody<F>, PhysicsError> {
        let count = self.dynamic_bodies.len();
        if index >= count {
            log::warn!("cannot remove dynamic body {}: world has {}", index, count);
            return Err(PhysicsError::BodyOutOfBounds { index, count });
        }
        log::info!("removing dynamic body {}", index);
        Ok(self.dynamic_bodies.remove(index))
    }

    /// Advance the world by `dt` seconds.
    pub fn step(&mut self, dt: F) {
        self.step_observed(dt, &mut NoOpStepObserver);
    }

    /// Advance the world by `dt` seconds, reporting progress to `observer`.
    ///
    /// Order: integrate and relax every dynamic body, cull bodies outside the
    /// world bounds, resolve dynamic-vs-static contacts, then (when enabled)
    /// dynamic-vs-dynamic contacts. Constraints are not re-relaxed after
    /// collision resolution.
    pub fn step_observed<O: StepObserver<F>>(&mut self, dt: F, observer: &mut O) {
        self.contacts.clear();

        let gravity = self.config.gravity;
        let damping = self.config.damping;
        let iterations = self.config.iterations;
        for (index, body) in self.dynamic_bodies.iter_mut().enumerate() {
            body.step_observed(dt, gravity, damping, iterations, index, observer);
        }

        self.cull_outside_world(observer);
        self.collide_static(observer);
        if self.config.dynamic_collisions {
            self.collide_dynamic(observer);
        }

        log::trace!(
            "step: {} dynamic bodies, {} contacts",
            self.dynamic_bodies.len(),
            self.contacts.len()
        );
        observer.on_step_complete();
    }

    fn cull_outside_world<O: StepObserver<F>>(&mut self, observer: &mut O) {
        let world = match self.config.world_bounds {
            Some(world) => world,
            None => return,
        };
        let mut index = 0;
        while index < self.dynamic_bodies.len() {
            if self.dynamic_bodies[index].bounds().overlaps(&world) {
                index += 1;
            } else {
                log::info!("dynamic body {} left the world and was removed", index);
                self.dynamic_bodies.remove(index);
                observer.on_body_removed(index);
            }
        }
    }

    fn collide_static<O: StepObserver<F>>(&mut self, observer: &mut O) {
        for (i, body) in self.dynamic_bodies.iter_mut().enumerate() {
            for (j, stat) in self.static_bodies.iter().enumerate() {
                let start = self.contacts.len();
                let found = collision::detect(i, body, stat.bounds(), Collider::Static(j), &mut self.contacts);
                if found == 0 {
                    continue;
                }
                for info in &self.contacts[start..] {
                    observer.on_collision(info);
                    collision::resolve(body.points_mut(), info);
                }
                body.recompute_bounds();
            }
        }
    }

    fn collide_dynamic<O: StepObserver<F>>(&mut self, observer: &mut O) {
        let count = self.dynamic_bodies.len();
        for i in 0..count {
            for j in (i + 1)..count {
                let bounds_i = *self.dynamic_bodies[i].bounds();
                let bounds_j = *self.dynamic_bodies[j].bounds();
                if !bounds_i.overlaps(&bounds_j) {
                    continue;
                }
                self.push_out(i, &bounds_j, Collider::Dynamic(j), observer);
                self.push_out(j, &bounds_i, Collider::Dynamic(i), observer);
            }
        }
    }

    fn push_out<O: StepObserver<F>>(
        &mut self,
        index: usize,
        target: &BoundingBox<F>,
        collider: Collider,
        observer: &mut O,
    ) {
        let body = &mut self.dynamic_bodies[index];
        let start = self.contacts.len();
        if collision::detect(index, body, target, collider, &mut self.contacts) == 0 {
            return;
        }
        for info in &self.contacts[start..] {
            observer.on_collision(info);
            collision::resolve(body.points_mut(), info);
        }
        body.recompute_bounds();
    }

    /// First point, in declaration order, within `radius` of `pos`.
    pub fn pick_point(&self, pos: Vec2<F>, radius: F) -> Option<PointHandle> {
        let radius_sq = radius * radius;
        for (body, dynamic) in self.dynamic_bodies.iter().enumerate() {
            for (point, p) in dynamic.points().iter().enumerate() {
                if p.pos.distance_sq(pos) <= radius_sq {
                    return Some(PointHandle { body, point });
                }
            }
        }
        None
    }

    /// Teleport a point to `pos`, discarding its velocity.
    pub fn drag_point(&mut self, handle: PointHandle, pos: Vec2<F>) -> Result<(), PhysicsError> {
        let count = self.dynamic_bodies.len();
        let body = self
            .dynamic_bodies
            .get_mut(handle.body)
            .ok_or(PhysicsError::BodyOutOfBounds { index: handle.body, count })?;
        let points = body.len();
        if handle.point >= points {
            return Err(PhysicsError::PointOutOfBounds { index: handle.point, count: points });
        }
        body.point_mut(handle.point).place(pos);
        body.recompute_bounds();
        Ok(())
    }

    /// Contacts resolved during the most recent step.
    pub fn contacts(&self) -> &[CollisionInfo<F>] {
        &self.contacts
    }

    pub fn static_bodies(&self) -> &[StaticBody<F>] {
        &self.static_bodies
    }

    pub fn dynamic_bodies(&self) -> &[DynamicBody<F>] {
        &self.dynamic_bodies
    }

    pub fn dynamic_body(&self, index: usize) -> Option<&DynamicBody<F>> {
        self.dynamic_bodies.get(index)
    }

    pub fn dynamic_body_mut(&mut self, index: usize) -> Option<&mut DynamicBody<F>> {
        self.dynamic_bodies.get_mut(index)
    }

    /// Every point position, body by body, in declaration order.
    pub fn positions(&self) -> impl Iterator<Item = Vec2<F>> + '_ {
        self.dynamic_bodies
            .iter()
            .flat_map(|body| body.points().iter().map(|p| p.pos))
    }

    pub fn static_count(&self) -> usize { self.static_bodies.len() }
    pub fn dynamic_count(&self) -> usize { self.dynamic_bodies.len() }
}

impl<F: Float> Default for Physics<F> {
    fn default() -> Self {
        Self::new(PhysicsConfig::default())
    }
}
