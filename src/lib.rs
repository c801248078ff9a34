//! Minimal real-time 2D physics with Verlet points and rigid poles.
//!
//! `poleworld` simulates point masses joined by rigid distance constraints
//! ("poles"), integrated under gravity and pushed out of immovable boxes.
//! Aimed at small demos and games that want soft/rigid body behaviour
//! without a full physics engine.
//!
//! # Features
//!
//! - **Verlet integration**: Position-based dynamics with implicit velocity
//! - **Pole relaxation**: Jakobsen-style projection, fixed declaration order
//! - **Box collisions**: AABB broad phase, point-in-box narrow phase, positional correction
//! - **Scenes**: Plain-text loader for static boxes and dynamic polygons
//! - **Observable**: Monitor physics steps via the `StepObserver` trait
//! - **`no_std` compatible**: Works in embedded and WASM environments
//!
//! # Example
//! ```
//! use poleworld::{DynamicBody, Physics, PhysicsConfig, Vec2};
//!
//! let config = PhysicsConfig::new().with_gravity(Vec2::new(0.0f64, -10.0));
//! let mut world = Physics::new(config);
//! world.add_static_box(Vec2::new(-5.0, -1.0), Vec2::new(5.0, 0.0)).unwrap();
//! world.add_dynamic_body(DynamicBody::rectangle(Vec2::new(0.0, 2.0), 0.5, 0.5).unwrap());
//!
//! for _ in 0..240 {
//!     world.step(1.0 / 60.0);
//! }
//! assert!(world.positions().all(|p| p.y >= -1e-9));
//! ```

#![no_std]

extern crate alloc;

pub mod float;
pub mod vec;
pub mod bounds;
pub mod point;
pub mod pole;
pub mod body;
pub mod collision;
pub mod physics;
pub mod scene;
pub mod observer;
pub mod config;
pub mod error;

// Re-export primary API
pub use float::Float;
pub use vec::Vec2;
pub use bounds::BoundingBox;
pub use point::Point;
pub use pole::Pole;
pub use body::{StaticBody, DynamicBody};
pub use collision::{CollisionInfo, Collider};
pub use physics::{Physics, PointHandle};
pub use scene::Scene;
pub use config::PhysicsConfig;
pub use observer::{StepObserver, NoOpStepObserver};
pub use error::{PhysicsError, SceneErrorKind};
