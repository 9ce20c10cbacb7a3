use serde::{Deserialize, Serialize};

use crate::camera::PanDirection;
use crate::options::CameraOptions;
use crate::viewer::ViewCommand;

/// Viewer actions that can be bound to keys.
///
/// Serde serializes as `snake_case` strings so TOML presets stay readable:
/// ```toml
/// [keybindings.bindings]
/// Home = "reset_view"
/// KeyI = "zoom_in"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyAction {
    /// Nudge the view along `up`.
    PanUp,
    /// Nudge the view against `up`.
    PanDown,
    /// Nudge the view to the left.
    PanLeft,
    /// Nudge the view to the right.
    PanRight,
    /// Move the eye closer to the reference.
    ZoomIn,
    /// Move the eye away from the reference.
    ZoomOut,
    /// Return to the home view.
    ResetView,
    /// Toggle the ground grid.
    ToggleGrid,
    /// Toggle the lidar points.
    ToggleLidar,
    /// Toggle the line overlay.
    ToggleLines,
}

impl KeyAction {
    /// Command for this action; zoom ratios come from the camera options.
    #[must_use]
    pub fn to_command(self, camera: &CameraOptions) -> ViewCommand {
        match self {
            Self::PanUp => ViewCommand::Pan(PanDirection::Up),
            Self::PanDown => ViewCommand::Pan(PanDirection::Down),
            Self::PanLeft => ViewCommand::Pan(PanDirection::Left),
            Self::PanRight => ViewCommand::Pan(PanDirection::Right),
            Self::ZoomIn => ViewCommand::Zoom {
                ratio: camera.zoom_in_ratio,
            },
            Self::ZoomOut => ViewCommand::Zoom {
                ratio: camera.zoom_out_ratio,
            },
            Self::ResetView => ViewCommand::ResetView,
            Self::ToggleGrid => ViewCommand::ToggleGrid,
            Self::ToggleLidar => ViewCommand::ToggleLidar,
            Self::ToggleLines => ViewCommand::ToggleLines,
        }
    }
}
