//! The viewer's complete interactive vocabulary.
//!
//! Every user-facing operation (key press, pointer drag, GUI toggle, or
//! programmatic call) is represented as a `ViewCommand`. Consumers build
//! commands and pass them to [`Viewer::execute`](super::Viewer::execute).

use crate::camera::PanDirection;

/// A single navigation or display request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewCommand {
    /// Swing the reference around the eye, in degrees.
    Rotate {
        /// Degrees about `up` (negated).
        delta_x: f64,
        /// Degrees about `view × up`.
        delta_y: f64,
    },
    /// Orbit the eye around the reference, in degrees.
    OrbitEye {
        /// Degrees about `up` (negated).
        delta_x: f64,
        /// Degrees about `view × up` (negated).
        delta_y: f64,
    },
    /// Dolly by pointer travel.
    Dolly {
        /// Roll of `up` about the view axis, in degrees (negated).
        delta_x: f64,
        /// Pixels of travel; 80 scales the distance by 1.2.
        delta_y: f64,
    },
    /// Scale the eye-to-reference distance.
    Zoom {
        /// Distance ratio; below 1 moves closer.
        ratio: f64,
    },
    /// One discrete pan step.
    Pan(PanDirection),
    /// Return to the home view.
    ResetView,
    /// Show or hide the marker at the camera reference.
    ShowCameraTarget(bool),
    /// Toggle the ground grid.
    ToggleGrid,
    /// Toggle the lidar points.
    ToggleLidar,
    /// Toggle the line overlay.
    ToggleLines,
}

impl ViewCommand {
    /// Whether the command moves the camera.
    #[must_use]
    pub fn is_navigation(&self) -> bool {
        matches!(
            self,
            Self::Rotate { .. }
                | Self::OrbitEye { .. }
                | Self::Dolly { .. }
                | Self::Zoom { .. }
                | Self::Pan(_)
                | Self::ResetView
        )
    }
}
