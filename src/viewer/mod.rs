//! Viewer state consumed by an external renderer.
//!
//! The [`Viewer`] holds the latest scan and line overlay, the orbit camera
//! and the display toggles. Input arrives as [`ViewCommand`]s; the renderer
//! pulls a [`RenderSnapshot`] once per frame so navigation on another
//! thread never tears a frame.

/// Command vocabulary executed by the viewer.
pub mod command;
/// Grid and axis-frame reference geometry.
pub mod overlay;

pub use command::ViewCommand;
use glam::DMat4;

use crate::camera::{CameraState, OrbitCamera, ViewUniform, ViewportProjector};
use crate::decoder::{RawFrame, VelodyneDecoder};
use crate::error::LidarError;
use crate::options::{DisplayOptions, Options};
use crate::points::{Line3D, LineCloud, Scan};

/// Read-only copy of everything the renderer needs for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
#[allow(clippy::struct_excessive_bools)]
pub struct RenderSnapshot {
    /// Camera state the matrices were built from.
    pub camera: CameraState,
    /// Look-at transform.
    pub view: DMat4,
    /// Perspective transform.
    pub projection: DMat4,
    /// GPU-ready uniform (f32, view-projection premultiplied).
    pub uniform: ViewUniform,
    /// Whether to draw the camera reference marker.
    pub show_camera_target: bool,
    /// Size of the camera reference marker in pixels.
    pub camera_target_point_size: f32,
    /// Camera reference marker color.
    pub camera_target_color: [f32; 3],
    /// Draw the scan points.
    pub show_lidar: bool,
    /// Draw [`Viewer::grid_lines`].
    pub show_grid: bool,
    /// Grid color.
    pub grid_color: [f32; 3],
    /// Draw [`Viewer::lines`].
    pub show_lines: bool,
    /// Line overlay color.
    pub lines_color: [f32; 3],
    /// Draw [`Viewer::axis_frame`].
    pub show_frame: bool,
    /// Clear color.
    pub background_color: [f32; 3],
}

/// Scene, camera and display state of one viewer window.
#[derive(Debug, Clone)]
pub struct Viewer {
    camera: OrbitCamera,
    projector: ViewportProjector,
    options: Options,
    scan: Scan,
    lines: LineCloud,
    grid: LineCloud,
    show_camera_target: bool,
}

impl Viewer {
    /// Viewer for a `width × height` viewport at the home view.
    #[must_use]
    pub fn new(width: u32, height: u32, options: Options) -> Self {
        let camera =
            OrbitCamera::new().with_translate_step(options.camera.translate_step);
        let projector = ViewportProjector::new(width, height, &options.camera);
        let grid =
            overlay::grid_lines(options.display.grid_length, options.display.grid_step);
        Self {
            camera,
            projector,
            options,
            scan: Scan::default(),
            lines: LineCloud::new(),
            grid,
            show_camera_target: false,
        }
    }

    /// The orbit camera.
    #[must_use]
    pub fn camera(&self) -> &OrbitCamera {
        &self.camera
    }

    /// The viewport projector.
    #[must_use]
    pub fn projector(&self) -> &ViewportProjector {
        &self.projector
    }

    /// Current options.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Current display toggles.
    #[must_use]
    pub fn display(&self) -> &DisplayOptions {
        &self.options.display
    }

    /// Replace all options, updating lens, pan step and grid geometry.
    pub fn set_options(&mut self, options: Options) {
        self.camera.set_translate_step(options.camera.translate_step);
        let (width, height) = self.projector.size();
        self.projector = ViewportProjector::new(width, height, &options.camera);
        self.grid =
            overlay::grid_lines(options.display.grid_length, options.display.grid_step);
        self.options = options;
    }

    /// Latest scan.
    #[must_use]
    pub fn scan(&self) -> &Scan {
        &self.scan
    }

    /// Replace the displayed scan (pre-decoded sensors, or output of
    /// [`FrameIngest`](crate::decoder::FrameIngest)).
    pub fn set_scan(&mut self, scan: Scan) {
        self.scan = scan;
    }

    /// Decode a raw frame and display it. On error the previous scan stays.
    ///
    /// # Errors
    ///
    /// [`LidarError::InvalidFrame`] from the decoder.
    pub fn decode_and_set(
        &mut self,
        decoder: &VelodyneDecoder,
        frame: &RawFrame,
    ) -> Result<(), LidarError> {
        self.scan = decoder.decode(frame)?;
        Ok(())
    }

    /// Latest auxiliary line overlay.
    #[must_use]
    pub fn lines(&self) -> &LineCloud {
        &self.lines
    }

    /// Replace the auxiliary line overlay.
    pub fn set_lines(&mut self, lines: LineCloud) {
        self.lines = lines;
    }

    /// Ground grid segments for the current display options.
    #[must_use]
    pub fn grid_lines(&self) -> &LineCloud {
        &self.grid
    }

    /// Axis frame segments and colors.
    #[must_use]
    pub fn axis_frame(&self) -> [(Line3D, [f32; 3]); 3] {
        overlay::axis_frame(self.options.display.frame_length)
    }

    /// Palette color for a layer.
    #[must_use]
    pub fn layer_color(&self, layer_id: i32) -> [f32; 3] {
        self.options.colors.layer_color(layer_id)
    }

    /// Whether the camera reference marker is visible.
    #[must_use]
    pub fn show_camera_target(&self) -> bool {
        self.show_camera_target
    }

    /// Set the clear color.
    pub fn set_background_color(&mut self, color: [f32; 3]) {
        log::info!(
            "background color set to [R:{} G:{} B:{}]",
            color[0],
            color[1],
            color[2]
        );
        self.options.display.background_color = color;
    }

    /// Track a viewport resize.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.projector.resize(width, height);
    }

    /// Execute one command.
    ///
    /// # Errors
    ///
    /// Camera errors ([`LidarError::DegenerateView`],
    /// [`LidarError::InvalidParameter`]) are returned unchanged and leave
    /// the camera as it was; the caller decides whether to log or
    /// propagate.
    pub fn execute(&mut self, command: ViewCommand) -> Result<(), LidarError> {
        if command.is_navigation() {
            log::debug!("navigate: {command:?}");
        }
        match command {
            ViewCommand::Rotate { delta_x, delta_y } => {
                self.camera.rotate(delta_x, delta_y)
            }
            ViewCommand::OrbitEye { delta_x, delta_y } => {
                self.camera.orbit_eye(delta_x, delta_y)
            }
            ViewCommand::Dolly { delta_x, delta_y } => {
                self.camera.dolly(delta_x, delta_y)
            }
            ViewCommand::Zoom { ratio } => self.camera.zoom(ratio),
            ViewCommand::Pan(direction) => self.camera.pan_step(direction),
            ViewCommand::ResetView => {
                self.camera.reset();
                Ok(())
            }
            ViewCommand::ShowCameraTarget(show) => {
                self.show_camera_target = show;
                Ok(())
            }
            ViewCommand::ToggleGrid => {
                toggle(&mut self.options.display.show_grid, "grid");
                Ok(())
            }
            ViewCommand::ToggleLidar => {
                toggle(&mut self.options.display.show_lidar, "lidar");
                Ok(())
            }
            ViewCommand::ToggleLines => {
                toggle(&mut self.options.display.show_lines, "lines");
                Ok(())
            }
        }
    }

    /// Copy of the camera and matrices for one rendered frame.
    ///
    /// # Errors
    ///
    /// [`LidarError::DegenerateView`] or [`LidarError::InvalidParameter`]
    /// (collapsed viewport) when no valid transform exists.
    pub fn snapshot(&self) -> Result<RenderSnapshot, LidarError> {
        let view = self.camera.view_matrix()?;
        let projection = self.projector.projection_matrix()?;
        let mut uniform = ViewUniform::new();
        uniform.update(
            &self.camera.state(),
            projection * view,
            self.projector.aspect_ratio(),
            self.options.display.point_size,
        );
        let display = &self.options.display;
        let colors = &self.options.colors;
        Ok(RenderSnapshot {
            camera: self.camera.state(),
            view,
            projection,
            uniform,
            show_camera_target: self.show_camera_target,
            camera_target_point_size: display.camera_target_point_size,
            camera_target_color: colors.camera_target,
            show_lidar: display.show_lidar,
            show_grid: display.show_grid,
            grid_color: colors.grid,
            show_lines: display.show_lines,
            lines_color: colors.lines,
            show_frame: display.show_frame,
            background_color: display.background_color,
        })
    }
}

fn toggle(flag: &mut bool, name: &str) {
    *flag = !*flag;
    log::debug!("{name} display {}", if *flag { "on" } else { "off" });
}
