use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Display", inline)]
#[serde(default)]
#[allow(clippy::struct_excessive_bools)]
/// What the renderer draws and how large.
pub struct DisplayOptions {
    /// Draw the decoded lidar points.
    #[schemars(title = "Show Lidar")]
    pub show_lidar: bool,
    /// Draw the polar ground grid.
    #[schemars(title = "Show Grid")]
    pub show_grid: bool,
    /// Draw the auxiliary line overlay.
    #[schemars(title = "Show Lines")]
    pub show_lines: bool,
    /// Draw the XYZ axis frame at the origin.
    #[schemars(title = "Show Axes")]
    pub show_frame: bool,
    /// Lidar point size in pixels.
    #[schemars(title = "Point Size", range(min = 1.0, max = 10.0), extend("step" = 0.5))]
    pub point_size: f32,
    /// Size of the marker drawn at the camera reference while dragging.
    #[schemars(skip)]
    pub camera_target_point_size: f32,
    /// Clear color (RGB, 0..1).
    #[schemars(skip)]
    pub background_color: [f32; 3],
    /// Grid radius in meters.
    #[schemars(skip)]
    pub grid_length: f64,
    /// Spacing between grid circles in meters.
    #[schemars(title = "Grid Step (m)", range(min = 1.0, max = 50.0), extend("step" = 1.0))]
    pub grid_step: f64,
    /// Length of each axis of the frame in meters.
    #[schemars(skip)]
    pub frame_length: f64,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            show_lidar: true,
            show_grid: true,
            show_lines: false,
            show_frame: true,
            point_size: 2.0,
            camera_target_point_size: 5.0,
            background_color: [0.0, 0.0, 0.0],
            grid_length: 101.0,
            grid_step: 10.0,
            frame_length: 5.0,
        }
    }
}
