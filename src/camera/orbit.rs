//! Orbit camera navigation.
//!
//! All angles at this boundary are degrees. Each call is an independent
//! mutation of the [`CameraState`]; a drag is just a sequence of delta
//! calls. Calls must be serialized by the caller.

use glam::{DMat4, DQuat, DVec3};

use super::core::CameraState;
use super::projector;
use crate::error::LidarError;

/// Base of the dolly zoom curve.
const DOLLY_BASE: f64 = 1.2;
/// Pointer travel (pixels) that scales the distance by [`DOLLY_BASE`].
const DOLLY_PIXELS: f64 = 80.0;

/// Discrete keyboard nudge directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PanDirection {
    /// Along `+up`.
    Up,
    /// Along `-up`.
    Down,
    /// Along `-(view × up)`.
    Left,
    /// Along `+(view × up)`.
    Right,
}

/// Eye/reference/up camera driven by pointer and keyboard deltas.
#[derive(Debug, Clone, PartialEq)]
pub struct OrbitCamera {
    state: CameraState,
    translate_step: f64,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::new()
    }
}

impl OrbitCamera {
    /// Camera at the home view with a one-unit pan step.
    #[must_use]
    pub fn new() -> Self {
        Self::with_state(CameraState::HOME)
    }

    /// Camera starting from an arbitrary state. A state with
    /// `eye == reference` is accepted here; view-dependent operations on it
    /// fail with [`LidarError::DegenerateView`].
    #[must_use]
    pub fn with_state(state: CameraState) -> Self {
        Self {
            state,
            translate_step: 1.0,
        }
    }

    /// Set the distance moved by [`pan_step`](Self::pan_step).
    #[must_use]
    pub fn with_translate_step(mut self, step: f64) -> Self {
        self.translate_step = step;
        self
    }

    /// Change the pan step in place.
    pub fn set_translate_step(&mut self, step: f64) {
        self.translate_step = step;
    }

    /// Copy of the current state, for the renderer.
    #[must_use]
    pub fn state(&self) -> CameraState {
        self.state
    }

    /// Eye position.
    #[must_use]
    pub fn eye(&self) -> DVec3 {
        self.state.eye
    }

    /// Look-at reference point.
    #[must_use]
    pub fn reference(&self) -> DVec3 {
        self.state.reference
    }

    /// Up vector.
    #[must_use]
    pub fn up(&self) -> DVec3 {
        self.state.up
    }

    /// Return to the home view.
    pub fn reset(&mut self) {
        log::info!("reset camera to home view");
        self.state = CameraState::HOME;
    }

    /// Swing the reference around the eye (left drag).
    ///
    /// `delta_x` turns about `up`, `delta_y` about `view × up`; both axes
    /// come from the state before the call and are composed into a single
    /// rotation that is also applied to `up`.
    ///
    /// # Errors
    ///
    /// [`LidarError::DegenerateView`] when the view vector is zero or
    /// parallel to `up`.
    pub fn rotate(&mut self, delta_x: f64, delta_y: f64) -> Result<(), LidarError> {
        let CameraState { eye, reference, up } = self.state;
        let view = eye - reference;
        let rot = orbit_rotation(view, up, -delta_x, delta_y)?;

        self.state.reference = eye - rot * view;
        self.state.up = rot * up;
        log::debug!("rotate reference by ({delta_x}, {delta_y})");
        Ok(())
    }

    /// Swing the eye around the reference (right drag).
    ///
    /// # Errors
    ///
    /// [`LidarError::DegenerateView`] when the view vector is zero or
    /// parallel to `up`.
    pub fn orbit_eye(
        &mut self,
        delta_x: f64,
        delta_y: f64,
    ) -> Result<(), LidarError> {
        let CameraState { eye, reference, up } = self.state;
        let view = reference - eye;
        let rot = orbit_rotation(view, up, -delta_x, -delta_y)?;

        self.state.eye = reference - rot * view;
        self.state.up = rot * up;
        log::debug!("orbit eye by ({delta_x}, {delta_y})");
        Ok(())
    }

    /// Dolly along the view axis (middle drag).
    ///
    /// The distance scales by `1.2^(delta_y / 80)`; `up` is then rolled
    /// about the view axis by `-delta_x` degrees.
    ///
    /// # Errors
    ///
    /// [`LidarError::DegenerateView`] when eye and reference coincide.
    pub fn dolly(&mut self, delta_x: f64, delta_y: f64) -> Result<(), LidarError> {
        self.zoom(DOLLY_BASE.powf(delta_y / DOLLY_PIXELS))?;

        let axis = (self.state.reference - self.state.eye)
            .try_normalize()
            .ok_or(LidarError::DegenerateView)?;
        let roll = DQuat::from_axis_angle(axis, (-delta_x).to_radians());
        self.state.up = roll * self.state.up;
        Ok(())
    }

    /// Scale the eye-to-reference distance by `ratio`, keeping the view
    /// direction. `ratio < 1` moves closer.
    ///
    /// # Errors
    ///
    /// [`LidarError::InvalidParameter`] for a non-positive or non-finite
    /// ratio, [`LidarError::DegenerateView`] when eye and reference
    /// coincide.
    pub fn zoom(&mut self, ratio: f64) -> Result<(), LidarError> {
        if !(ratio.is_finite() && ratio > 0.0) {
            return Err(LidarError::InvalidParameter(format!(
                "zoom ratio must be > 0, got {ratio}"
            )));
        }
        let view = self.state.reference - self.state.eye;
        if view == DVec3::ZERO {
            return Err(LidarError::DegenerateView);
        }

        self.state.eye = self.state.reference - view * ratio;
        log::debug!("zoom camera by ratio {ratio}");
        Ok(())
    }

    /// Translate eye and reference together by one pan step.
    ///
    /// # Errors
    ///
    /// [`LidarError::DegenerateView`] for a sideways step when `view × up`
    /// is zero.
    pub fn pan_step(&mut self, direction: PanDirection) -> Result<(), LidarError> {
        let offset = match direction {
            PanDirection::Up => self.state.up * self.translate_step,
            PanDirection::Down => self.state.up * -self.translate_step,
            PanDirection::Left | PanDirection::Right => {
                let view = self.state.reference - self.state.eye;
                let side = view
                    .cross(self.state.up)
                    .try_normalize()
                    .ok_or(LidarError::DegenerateView)?;
                if direction == PanDirection::Left {
                    side * -self.translate_step
                } else {
                    side * self.translate_step
                }
            }
        };

        self.state.eye += offset;
        self.state.reference += offset;
        log::debug!("pan camera {direction:?}");
        Ok(())
    }

    /// Project `up` onto the plane orthogonal to the view direction and
    /// renormalize it. Navigation never calls this on its own; callers that
    /// want to remove accumulated drift invoke it explicitly.
    ///
    /// # Errors
    ///
    /// [`LidarError::DegenerateView`] when the view vector is zero or
    /// parallel to `up`.
    pub fn orthonormalize_up(&mut self) -> Result<(), LidarError> {
        let forward = self.state.forward().ok_or(LidarError::DegenerateView)?;
        let up = self.state.up;
        self.state.up = (up - forward * up.dot(forward))
            .try_normalize()
            .ok_or(LidarError::DegenerateView)?;
        Ok(())
    }

    /// Right-handed look-at transform for the current state.
    ///
    /// # Errors
    ///
    /// [`LidarError::DegenerateView`] when the view vector is zero or
    /// parallel to `up`.
    pub fn view_matrix(&self) -> Result<DMat4, LidarError> {
        let CameraState { eye, reference, up } = self.state;
        if (reference - eye).cross(up).try_normalize().is_none() {
            return Err(LidarError::DegenerateView);
        }
        Ok(DMat4::look_at_rh(eye, reference, up))
    }

    /// Perspective projection with a horizontal field of view.
    ///
    /// # Errors
    ///
    /// [`LidarError::InvalidParameter`] for a non-positive aspect ratio or
    /// out-of-range field of view or clip planes.
    pub fn projection_matrix(
        &self,
        fovx_degrees: f64,
        aspect_ratio: f64,
        znear: f64,
        zfar: f64,
    ) -> Result<DMat4, LidarError> {
        projector::perspective(fovx_degrees, aspect_ratio, znear, zfar)
    }
}

/// Single rotation: `angle_up` degrees about `up` composed with
/// `angle_side` degrees about `view × up`, both axes taken before rotating.
fn orbit_rotation(
    view: DVec3,
    up: DVec3,
    angle_up: f64,
    angle_side: f64,
) -> Result<DQuat, LidarError> {
    let up_axis = up.try_normalize().ok_or(LidarError::DegenerateView)?;
    let side_axis = view
        .cross(up)
        .try_normalize()
        .ok_or(LidarError::DegenerateView)?;
    Ok(DQuat::from_axis_angle(up_axis, angle_up.to_radians())
        * DQuat::from_axis_angle(side_axis, angle_side.to_radians()))
}
