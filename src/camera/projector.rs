//! Viewport-aware perspective projection.

use glam::DMat4;

use super::core::ViewUniform;
use super::orbit::OrbitCamera;
use crate::error::LidarError;
use crate::options::CameraOptions;

/// OpenGL-style perspective from a horizontal field of view.
///
/// The horizontal angle is converted to the vertical one for the given
/// aspect ratio: `fovy = 2·atan(tan(fovx/2) / aspect)`.
///
/// # Errors
///
/// [`LidarError::InvalidParameter`] when the aspect ratio is not a positive
/// finite number, the field of view is outside `(0, 180)` degrees, or the
/// clip planes do not satisfy `0 < znear < zfar`.
pub fn perspective(
    fovx_degrees: f64,
    aspect_ratio: f64,
    znear: f64,
    zfar: f64,
) -> Result<DMat4, LidarError> {
    if !(aspect_ratio.is_finite() && aspect_ratio > 0.0) {
        return Err(LidarError::InvalidParameter(format!(
            "aspect ratio must be > 0, got {aspect_ratio}"
        )));
    }
    if !(fovx_degrees > 0.0 && fovx_degrees < 180.0) {
        return Err(LidarError::InvalidParameter(format!(
            "field of view must be in (0, 180) degrees, got {fovx_degrees}"
        )));
    }
    if !(znear > 0.0 && zfar > znear && zfar.is_finite()) {
        return Err(LidarError::InvalidParameter(format!(
            "clip planes must satisfy 0 < znear < zfar, got {znear}..{zfar}"
        )));
    }

    let half_x = (fovx_degrees / 2.0).to_radians();
    let fovy = 2.0 * (half_x.tan() / aspect_ratio).atan();
    Ok(DMat4::perspective_rh_gl(fovy, aspect_ratio, znear, zfar))
}

/// Combines the camera with the viewport size and lens settings.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewportProjector {
    width: u32,
    height: u32,
    /// Horizontal field of view in degrees.
    pub fovx_degrees: f64,
    /// Near clipping plane distance.
    pub znear: f64,
    /// Far clipping plane distance.
    pub zfar: f64,
}

impl ViewportProjector {
    /// Projector for a `width × height` viewport.
    #[must_use]
    pub fn new(width: u32, height: u32, options: &CameraOptions) -> Self {
        Self {
            width,
            height,
            fovx_degrees: options.fovx,
            znear: options.znear,
            zfar: options.zfar,
        }
    }

    /// Track a viewport resize.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
    }

    /// Viewport size in pixels.
    #[must_use]
    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// `width / height`; zero for a collapsed viewport.
    #[must_use]
    pub fn aspect_ratio(&self) -> f64 {
        if self.height == 0 {
            0.0
        } else {
            f64::from(self.width) / f64::from(self.height)
        }
    }

    /// Projection matrix for the current viewport.
    ///
    /// # Errors
    ///
    /// [`LidarError::InvalidParameter`] for a collapsed viewport or invalid
    /// lens settings.
    pub fn projection_matrix(&self) -> Result<DMat4, LidarError> {
        perspective(self.fovx_degrees, self.aspect_ratio(), self.znear, self.zfar)
    }

    /// `projection * view` for the camera.
    ///
    /// # Errors
    ///
    /// Propagates [`LidarError::DegenerateView`] from the camera and
    /// [`LidarError::InvalidParameter`] from the projection.
    pub fn view_projection(&self, camera: &OrbitCamera) -> Result<DMat4, LidarError> {
        Ok(self.projection_matrix()? * camera.view_matrix()?)
    }

    /// GPU uniform snapshot for one frame.
    ///
    /// # Errors
    ///
    /// Same as [`view_projection`](Self::view_projection).
    pub fn uniform(
        &self,
        camera: &OrbitCamera,
        point_size: f32,
    ) -> Result<ViewUniform, LidarError> {
        let mut uniform = ViewUniform::new();
        uniform.update(
            &camera.state(),
            self.view_projection(camera)?,
            self.aspect_ratio(),
            point_size,
        );
        Ok(uniform)
    }
}

#[cfg(test)]
mod tests {
    use glam::{DVec2, DVec4};

    use super::*;

    #[test]
    fn horizontal_fov_edge_maps_to_ndc_one() {
        let fovx: f64 = 70.0;
        let proj = perspective(fovx, 2.0, 0.01, 1000.0).unwrap();
        let depth = 10.0;
        let x = (fovx / 2.0).to_radians().tan() * depth;
        let clip = proj * DVec4::new(x, 0.0, -depth, 1.0);
        assert!((clip.x / clip.w - 1.0).abs() < 1e-9);
    }

    #[test]
    fn rejects_bad_lens_and_viewport() {
        assert!(perspective(70.0, f64::NAN, 0.01, 1000.0).is_err());
        assert!(perspective(0.0, 1.0, 0.01, 1000.0).is_err());
        assert!(perspective(180.0, 1.0, 0.01, 1000.0).is_err());
        assert!(perspective(70.0, 1.0, 0.0, 1000.0).is_err());
        assert!(perspective(70.0, 1.0, 10.0, 1.0).is_err());
    }

    #[test]
    fn collapsed_viewport_cannot_project() {
        let mut projector = ViewportProjector::new(640, 0, &CameraOptions::default());
        assert_eq!(projector.aspect_ratio(), 0.0);
        assert!(matches!(
            projector.projection_matrix(),
            Err(LidarError::InvalidParameter(_))
        ));
        projector.resize(640, 480);
        assert!(projector.projection_matrix().is_ok());
    }

    #[test]
    fn reference_projects_to_screen_center() {
        let projector = ViewportProjector::new(800, 600, &CameraOptions::default());
        let camera = OrbitCamera::new();
        let vp = projector.view_projection(&camera).unwrap();
        let ndc = vp.project_point3(camera.reference());
        assert!(ndc.truncate().abs_diff_eq(DVec2::ZERO, 1e-9));
        assert!(ndc.z > -1.0 && ndc.z < 1.0);
    }

    #[test]
    fn uniform_carries_point_size_and_aspect() {
        let projector = ViewportProjector::new(1000, 500, &CameraOptions::default());
        let uniform = projector.uniform(&OrbitCamera::new(), 2.0).unwrap();
        assert_eq!(uniform.point_size, 2.0);
        assert_eq!(uniform.aspect, 2.0);
        assert_eq!(uniform.forward, [0.0, 0.0, -1.0]);
    }
}
