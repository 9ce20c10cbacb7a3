use glam::{DMat4, DVec3, Mat4};

/// Eye, look-at reference and up vector of the viewer.
///
/// `up` is not kept orthogonal to the view direction; navigation rotates
/// the previous `up` and small drift accumulates over a session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraState {
    /// Eye (camera) position in world space.
    pub eye: DVec3,
    /// Look-at reference point.
    pub reference: DVec3,
    /// Up direction vector.
    pub up: DVec3,
}

impl CameraState {
    /// Home view: eye 50 m above the origin looking straight down, with
    /// +X as up.
    pub const HOME: Self = Self {
        eye: DVec3::new(0.0, 0.0, 50.0),
        reference: DVec3::ZERO,
        up: DVec3::X,
    };

    /// Distance from the eye to the reference point.
    #[must_use]
    pub fn distance(&self) -> f64 {
        self.eye.distance(self.reference)
    }

    /// Unit vector from the eye toward the reference, if defined.
    #[must_use]
    pub fn forward(&self) -> Option<DVec3> {
        (self.reference - self.eye).try_normalize()
    }
}

impl Default for CameraState {
    fn default() -> Self {
        Self::HOME
    }
}

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
/// GPU-ready snapshot of the view for one rendered frame.
pub struct ViewUniform {
    /// Combined view-projection matrix, column-major.
    pub view_proj: [[f32; 4]; 4],
    /// Eye position in world space.
    pub eye: [f32; 3],
    /// Rendered point size in pixels.
    pub point_size: f32,
    /// Unit view direction (eye toward reference).
    pub forward: [f32; 3],
    /// Viewport aspect ratio.
    pub aspect: f32,
}

impl Default for ViewUniform {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewUniform {
    /// Uniform with identity view-projection looking down -Z.
    #[must_use]
    pub fn new() -> Self {
        Self {
            view_proj: Mat4::IDENTITY.to_cols_array_2d(),
            eye: [0.0; 3],
            point_size: 1.0,
            forward: [0.0, 0.0, -1.0],
            aspect: 1.0,
        }
    }

    /// Refresh every field from a camera state and its matrices.
    pub fn update(
        &mut self,
        state: &CameraState,
        view_proj: DMat4,
        aspect: f64,
        point_size: f32,
    ) {
        self.view_proj = view_proj.as_mat4().to_cols_array_2d();
        self.eye = state.eye.as_vec3().to_array();
        if let Some(forward) = state.forward() {
            self.forward = forward.as_vec3().to_array();
        }
        self.aspect = aspect as f32;
        self.point_size = point_size;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn home_looks_down_from_fifty_meters() {
        let home = CameraState::default();
        assert_eq!(home.distance(), 50.0);
        assert_eq!(home.forward(), Some(DVec3::NEG_Z));
    }

    #[test]
    fn degenerate_state_has_no_forward() {
        let state = CameraState {
            eye: DVec3::ONE,
            reference: DVec3::ONE,
            up: DVec3::Z,
        };
        assert!(state.forward().is_none());
    }

    #[test]
    fn uniform_is_plain_bytes() {
        let mut uniform = ViewUniform::new();
        uniform.update(&CameraState::HOME, DMat4::IDENTITY, 2.0, 3.0);
        assert_eq!(uniform.eye, [0.0, 0.0, 50.0]);
        assert_eq!(uniform.aspect, 2.0);
        let bytes: &[u8] = bytemuck::bytes_of(&uniform);
        assert_eq!(bytes.len(), 96);
    }
}
