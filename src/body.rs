//! Static collision geometry and dynamic point/pole aggregates.

use crate::float::Float;
use crate::vec::Vec2;
use crate::point::Point;
use crate::pole::Pole;
use crate::bounds::BoundingBox;
use crate::error::PhysicsError;
use crate::observer::{NoOpStepObserver, StepObserver};
use alloc::vec::Vec as AllocVec;

/// Immovable box-shaped geometry.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct StaticBody<F: Float> {
    bounds: BoundingBox<F>,
}

impl<F: Float> StaticBody<F> {
    pub fn new(bounds: BoundingBox<F>) -> Self {
        StaticBody { bounds }
    }

    /// Build from any two opposite corners. Rejects non-finite corners.
    pub fn from_corners(a: Vec2<F>, b: Vec2<F>) -> Result<Self, PhysicsError> {
        Ok(StaticBody { bounds: BoundingBox::from_corners(a, b)? })
    }

    pub fn bounds(&self) -> &BoundingBox<F> {
        &self.bounds
    }
}

/// A movable aggregate of points held together by poles.
///
/// Poles refer to points by index into this body's own point list, and are
/// relaxed in declaration order.
#[derive(Clone, Debug)]
pub struct DynamicBody<F: Float> {
    points: AllocVec<Point<F>>,
    poles: AllocVec<Pole<F>>,
    bounds: BoundingBox<F>,
}

impl<F: Float> DynamicBody<F> {
    /// Assemble a body, checking that every pole stays inside `points`.
    pub fn new(points: AllocVec<Point<F>>, poles: AllocVec<Pole<F>>) -> Result<Self, PhysicsError> {
        let bounds = match BoundingBox::from_points(points.iter().map(|p| p.pos)) {
            Some(bounds) => bounds,
            None => {
                log::warn!("rejecting dynamic body without points");
                return Err(PhysicsError::EmptyBody);
            }
        };
        for pole in &poles {
            pole.check_range(points.len())?;
        }
        Ok(DynamicBody { points, poles, bounds })
    }

    /// A lone free particle.
    pub fn particle(pos: Vec2<F>) -> Self {
        DynamicBody {
            points: alloc::vec![Point::new(pos)],
            poles: AllocVec::new(),
            bounds: BoundingBox::around(pos),
        }
    }

    /// A closed polygon braced by every internal diagonal.
    ///
    /// Rest lengths are taken from the initial vertex layout. Diagonals are
    /// declared before the outline edges.
    pub fn polygon(vertices: &[Vec2<F>]) -> Result<Self, PhysicsError> {
        let n = vertices.len();
        if n < 3 {
            log::warn!("rejecting polygon body with {} vertices", n);
            return Err(PhysicsError::InsufficientVertices);
        }
        let points: AllocVec<Point<F>> = vertices.iter().map(|&v| Point::new(v)).collect();

        let mut poles = AllocVec::with_capacity(n * (n - 1) / 2);
        for span in 2..n - 1 {
            for start in 0..n - span {
                poles.push(Pole::from_points(start, start + span, &points)?);
            }
        }
        for i in 0..n {
            poles.push(Pole::from_points(i, (i + 1) % n, &points)?);
        }

        Self::new(points, poles)
    }

    /// Regular polygon with `sides` vertices on a circle, first vertex on +x.
    pub fn regular_polygon(center: Vec2<F>, radius: F, sides: usize) -> Result<Self, PhysicsError> {
        let two_pi = F::two() * F::pi();
        let vertices: AllocVec<Vec2<F>> = (0..sides)
            .map(|i| {
                let angle = two_pi * F::from_f32(i as f32) / F::from_f32(sides as f32);
                center + Vec2::new(radius * angle.cos(), radius * angle.sin())
            })
            .collect();
        Self::polygon(&vertices)
    }

    pub fn triangle(a: Vec2<F>, b: Vec2<F>, c: Vec2<F>) -> Result<Self, PhysicsError> {
        Self::polygon(&[a, b, c])
    }

    /// Axis-aligned rectangle, counter-clockwise from the bottom-left corner.
    pub fn rectangle(center: Vec2<F>, width: F, height: F) -> Result<Self, PhysicsError> {
        let hw = width * F::half();
        let hh = height * F::half();
        Self::polygon(&[
            center + Vec2::new(-hw, -hh),
            center + Vec2::new(hw, -hh),
            center + Vec2::new(hw, hh),
            center + Vec2::new(-hw, hh),
        ])
    }

    /// Append a point and return its index.
    pub fn add_point(&mut self, point: Point<F>) -> usize {
        self.bounds.expand_to_include(point.pos);
        self.points.push(point);
        self.points.len() - 1
    }

    /// Append a pole after checking its endpoints belong to this body.
    pub fn add_pole(&mut self, pole: Pole<F>) -> Result<usize, PhysicsError> {
        pole.check_range(self.points.len())?;
        self.poles.push(pole);
        Ok(self.poles.len() - 1)
    }

    /// Join two points with a pole at their current distance.
    pub fn connect(&mut self, a: usize, b: usize) -> Result<usize, PhysicsError> {
        let pole = Pole::from_points(a, b, &self.points)?;
        self.add_pole(pole)
    }

    pub fn pin(&mut self, index: usize) {
        self.points[index].pin();
    }

    pub fn unpin(&mut self, index: usize) {
        self.points[index].unpin();
    }

    /// Accumulate an acceleration on every point for the next step.
    pub fn apply_acceleration(&mut self, accel: Vec2<F>) {
        for p in self.points.iter_mut() {
            p.apply_acceleration(accel);
        }
    }

    /// Add gravity to every point and integrate it.
    pub fn integrate(&mut self, dt: F, gravity: Vec2<F>, damping: F) {
        for p in self.points.iter_mut() {
            p.apply_acceleration(gravity);
            p.integrate(dt, damping);
        }
    }

    /// One pass over every pole in declaration order.
    pub fn relax(&mut self) {
        for pole in self.poles.iter() {
            pole.satisfy(&mut self.points);
        }
    }

    /// Recompute the tight bounds over all point positions.
    pub fn recompute_bounds(&mut self) {
        if let Some(bounds) = BoundingBox::from_points(self.points.iter().map(|p| p.pos)) {
            self.bounds = bounds;
        }
    }

    /// Integrate, relax `iterations` times, then refresh bounds.
    pub fn step(&mut self, dt: F, gravity: Vec2<F>, damping: F, iterations: usize) {
        self.step_observed(dt, gravity, damping, iterations, 0, &mut NoOpStepObserver);
    }

    /// [`DynamicBody::step`], reporting each phase to `observer` as body `index`.
    pub fn step_observed<O: StepObserver<F>>(
        &mut self,
        dt: F,
        gravity: Vec2<F>,
        damping: F,
        iterations: usize,
        index: usize,
        observer: &mut O,
    ) {
        self.integrate(dt, gravity, damping);
        observer.on_integrate(index);
        for i in 0..iterations {
            self.relax();
            observer.on_constraint_iteration(index, i);
        }
        self.recompute_bounds();
    }

    pub fn positions(&self) -> AllocVec<Vec2<F>> {
        self.points.iter().map(|p| p.pos).collect()
    }

    /// Endpoint positions of every pole, for drawing.
    pub fn pole_segments(&self) -> impl Iterator<Item = (Vec2<F>, Vec2<F>)> + '_ {
        self.poles
            .iter()
            .map(move |pole| (self.points[pole.a()].pos, self.points[pole.b()].pos))
    }

    pub fn bounds(&self) -> &BoundingBox<F> { &self.bounds }
    pub fn points(&self) -> &[Point<F>] { &self.points }
    pub fn poles(&self) -> &[Pole<F>] { &self.poles }
    pub fn point(&self, index: usize) -> &Point<F> { &self.points[index] }
    pub fn point_mut(&mut self, index: usize) -> &mut Point<F> { &mut self.points[index] }
    pub(crate) fn points_mut(&mut self) -> &mut [Point<F>] { &mut self.points }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn pole_count(&self) -> usize {
        self.poles.len()
    }
}
