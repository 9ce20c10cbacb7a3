//! Camera model for inspecting point clouds.
//!
//! Provides an orbit camera (eye/reference/up) with rotate, orbit, dolly,
//! zoom and pan operations, and the viewport projection built on top of it.

/// Camera state and GPU uniform types.
pub mod core;
/// Orbit navigation operations.
pub mod orbit;
/// Viewport-aware perspective projection.
pub mod projector;

pub use self::core::{CameraState, ViewUniform};
pub use orbit::{OrbitCamera, PanDirection};
pub use projector::{perspective, ViewportProjector};
