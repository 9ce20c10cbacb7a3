use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Camera projection and navigation parameters.
pub struct CameraOptions {
    /// Horizontal field of view in degrees.
    #[schemars(title = "Field of View", range(min = 20.0, max = 120.0), extend("step" = 1.0))]
    pub fovx: f64,
    /// Near clipping plane distance.
    #[schemars(skip)]
    pub znear: f64,
    /// Far clipping plane distance.
    #[schemars(skip)]
    pub zfar: f64,
    /// Distance moved by one keyboard pan step.
    #[schemars(title = "Pan Step (m)", range(min = 0.1, max = 10.0), extend("step" = 0.1))]
    pub translate_step: f64,
    /// Degrees of rotation per pixel of drag.
    #[schemars(title = "Rotate Speed", range(min = 0.1, max = 2.0), extend("step" = 0.05))]
    pub rotate_sensitivity: f64,
    /// Wheel delta that counts as one zoom notch.
    #[schemars(skip)]
    pub wheel_step: f64,
    /// Zoom ratio applied by the zoom-in key.
    #[schemars(skip)]
    pub zoom_in_ratio: f64,
    /// Zoom ratio applied by the zoom-out key.
    #[schemars(skip)]
    pub zoom_out_ratio: f64,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            fovx: 70.0,
            znear: 0.01,
            zfar: 1000.0,
            translate_step: 1.0,
            rotate_sensitivity: 1.0,
            wheel_step: 120.0,
            zoom_in_ratio: 0.9,
            zoom_out_ratio: 1.1,
        }
    }
}
