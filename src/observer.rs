//! Step observer trait for monitoring physics simulation progress.

use crate::float::Float;
use crate::collision::CollisionInfo;

/// Trait for observing physics simulation steps.
///
/// Implement this trait to monitor solver progress (e.g., for debugging,
/// visualization, or performance profiling). All methods have default
/// no-op implementations. Body indices refer to declaration order at the
/// time of the call.
pub trait StepObserver<F: Float> {
    /// Called after all points of a dynamic body have been integrated.
    fn on_integrate(&mut self, _body: usize) {}

    /// Called after each constraint iteration of a dynamic body.
    fn on_constraint_iteration(&mut self, _body: usize, _iteration: usize) {}

    /// Called for every contact, just before it is resolved.
    fn on_collision(&mut self, _info: &CollisionInfo<F>) {}

    /// Called when a dynamic body leaves the world bounds and is removed.
    fn on_body_removed(&mut self, _body: usize) {}

    /// Called when a simulation step is fully complete.
    fn on_step_complete(&mut self) {}
}

/// A no-op observer that does nothing. Use as default when no observation needed.
pub struct NoOpStepObserver;

impl<F: Float> StepObserver<F> for NoOpStepObserver {}
