//! Configuration types for the physics world.

use crate::float::Float;
use crate::vec::Vec2;
use crate::bounds::BoundingBox;

/// Configuration for the world step, supplied once at construction.
///
/// # Builder Pattern
/// ```
/// use poleworld::config::PhysicsConfig;
/// use poleworld::vec::Vec2;
///
/// let config: PhysicsConfig<f32> = PhysicsConfig::new()
///     .with_iterations(8)
///     .with_gravity(Vec2::new(0.0, -9.81))
///     .with_damping(0.99);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct PhysicsConfig<F: Float> {
    /// Gravity acceleration applied to every free point. Default: zero.
    pub gravity: Vec2<F>,
    /// Constraint relaxation passes per step. Default: 4.
    pub iterations: usize,
    /// Velocity damping factor [0, 1]. 1.0 = no damping. Default: 1.0.
    pub damping: F,
    /// Also collide dynamic bodies against each other. Default: false.
    pub dynamic_collisions: bool,
    /// Bodies whose bounds leave this box are removed. Default: none.
    pub world_bounds: Option<BoundingBox<F>>,
}

impl<F: Float> PhysicsConfig<F> {
    /// Create a new config with default values.
    pub fn new() -> Self {
        PhysicsConfig {
            gravity: Vec2::zero(),
            iterations: 4,
            damping: F::one(),
            dynamic_collisions: false,
            world_bounds: None,
        }
    }

    /// Set the number of constraint iterations (at least one).
    pub fn with_iterations(mut self, iterations: usize) -> Self {
        if iterations == 0 {
            log::warn!("constraint iterations must be at least 1, using 1");
        }
        self.iterations = iterations.max(1);
        self
    }

    /// Set the gravity vector.
    pub fn with_gravity(mut self, gravity: Vec2<F>) -> Self {
        self.gravity = gravity;
        self
    }

    /// Set the damping factor.
    pub fn with_damping(mut self, damping: F) -> Self {
        self.damping = damping;
        self
    }

    /// Enable or disable dynamic-vs-dynamic collisions.
    pub fn with_dynamic_collisions(mut self, enabled: bool) -> Self {
        self.dynamic_collisions = enabled;
        self
    }

    /// Cull bodies that leave `bounds`.
    pub fn with_world_bounds(mut self, bounds: BoundingBox<F>) -> Self {
        self.world_bounds = Some(bounds);
        self
    }
}

impl<F: Float> Default for PhysicsConfig<F> {
    fn default() -> Self {
        Self::new()
    }
}
