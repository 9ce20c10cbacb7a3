//! Converts raw pointer and keyboard input into viewer commands.
//!
//! The `InputProcessor` owns all transient input state (cursor position,
//! held buttons) and the key-binding map. It is the only thing that sits
//! between raw window events and [`Viewer::execute`](crate::viewer::Viewer::execute).

use super::event::{InputEvent, MouseButton};
use crate::options::{CameraOptions, KeybindingOptions};
use crate::viewer::ViewCommand;

/// Wheel zoom curve base: one notch scales the distance by 1.2.
const WHEEL_ZOOM_BASE: f64 = 1.2;

/// Buttons currently held.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
struct HeldButtons {
    left: bool,
    right: bool,
    middle: bool,
}

impl HeldButtons {
    fn set(&mut self, button: MouseButton, pressed: bool) {
        match button {
            MouseButton::Left => self.left = pressed,
            MouseButton::Right => self.right = pressed,
            MouseButton::Middle => self.middle = pressed,
        }
    }

    fn any(self) -> bool {
        self.left || self.right || self.middle
    }
}

/// Converts raw input into [`ViewCommand`]s.
///
/// While dragging, each held button contributes one command per cursor
/// move, in the order left (rotate), right (orbit eye), middle (dolly).
///
/// # Usage
///
/// ```ignore
/// // In the event loop:
/// for cmd in input_processor.handle_event(event) {
///     viewer.execute(cmd)?;
/// }
///
/// if let Some(cmd) = input_processor.handle_key_press("Home") {
///     viewer.execute(cmd)?;
/// }
/// ```
#[derive(Debug, Clone)]
pub struct InputProcessor {
    /// Last cursor position in physical pixels.
    mouse_pos: Option<(f32, f32)>,
    held: HeldButtons,
    camera: CameraOptions,
    key_bindings: KeybindingOptions,
}

impl InputProcessor {
    /// Create a processor with default camera options and key bindings.
    #[must_use]
    pub fn new() -> Self {
        Self::with_options(CameraOptions::default(), KeybindingOptions::default())
    }

    /// Create a processor with custom sensitivities and key bindings.
    #[must_use]
    pub fn with_options(
        camera: CameraOptions,
        key_bindings: KeybindingOptions,
    ) -> Self {
        Self {
            mouse_pos: None,
            held: HeldButtons::default(),
            camera,
            key_bindings,
        }
    }

    /// Last known cursor position in physical pixels.
    #[must_use]
    pub fn mouse_pos(&self) -> Option<(f32, f32)> {
        self.mouse_pos
    }

    /// Whether any handled mouse button is held.
    #[must_use]
    pub fn dragging(&self) -> bool {
        self.held.any()
    }

    /// Read-only access to the key bindings.
    #[must_use]
    pub fn key_bindings(&self) -> &KeybindingOptions {
        &self.key_bindings
    }

    /// Mutable access to the key bindings for reconfiguration.
    pub fn key_bindings_mut(&mut self) -> &mut KeybindingOptions {
        &mut self.key_bindings
    }

    /// Replace the camera sensitivities and zoom ratios.
    pub fn set_camera_options(&mut self, camera: CameraOptions) {
        self.camera = camera;
    }

    /// Look up a key press and return the corresponding command, if bound.
    #[must_use]
    pub fn handle_key_press(&self, key: &str) -> Option<ViewCommand> {
        let action = self.key_bindings.lookup(key);
        if action.is_none() {
            log::debug!("unbound key pressed: {key}");
        }
        action.map(|a| a.to_command(&self.camera))
    }

    /// Process a raw pointer event and return the commands it produces.
    pub fn handle_event(&mut self, event: InputEvent) -> Vec<ViewCommand> {
        match event {
            InputEvent::CursorMoved { x, y } => self.handle_cursor_moved(x, y),
            InputEvent::MouseButton { button, pressed } => {
                self.handle_mouse_button(button, pressed).into_iter().collect()
            }
            InputEvent::Scroll { delta } => {
                if delta == 0.0 || self.camera.wheel_step <= 0.0 {
                    return Vec::new();
                }
                let notches = -f64::from(delta) / self.camera.wheel_step;
                vec![ViewCommand::Zoom {
                    ratio: WHEEL_ZOOM_BASE.powf(notches),
                }]
            }
        }
    }

    /// Cursor moved: compute the delta and, while dragging, emit one camera
    /// command per held button.
    fn handle_cursor_moved(&mut self, x: f32, y: f32) -> Vec<ViewCommand> {
        let previous = self.mouse_pos.replace((x, y));
        let Some((last_x, last_y)) = previous else {
            return Vec::new();
        };
        let dx = f64::from(x - last_x);
        let dy = f64::from(y - last_y);
        if !self.held.any() || (dx == 0.0 && dy == 0.0) {
            return Vec::new();
        }

        let k = self.camera.rotate_sensitivity;
        let mut commands = Vec::with_capacity(3);
        if self.held.left {
            commands.push(ViewCommand::Rotate {
                delta_x: dx * k,
                delta_y: dy * k,
            });
        }
        if self.held.right {
            commands.push(ViewCommand::OrbitEye {
                delta_x: dx * k,
                delta_y: dy * k,
            });
        }
        if self.held.middle {
            commands.push(ViewCommand::Dolly {
                delta_x: dx,
                delta_y: dy,
            });
        }
        commands
    }

    /// Button press/release: the camera target marker is shown while any
    /// button is held.
    fn handle_mouse_button(
        &mut self,
        button: MouseButton,
        pressed: bool,
    ) -> Option<ViewCommand> {
        let was_dragging = self.held.any();
        self.held.set(button, pressed);
        match (was_dragging, self.held.any()) {
            (false, true) => Some(ViewCommand::ShowCameraTarget(true)),
            (true, false) => Some(ViewCommand::ShowCameraTarget(false)),
            _ => None,
        }
    }
}

impl Default for InputProcessor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::PanDirection;

    fn press(button: MouseButton) -> InputEvent {
        InputEvent::MouseButton {
            button,
            pressed: true,
        }
    }

    fn release(button: MouseButton) -> InputEvent {
        InputEvent::MouseButton {
            button,
            pressed: false,
        }
    }

    fn moved(x: f32, y: f32) -> InputEvent {
        InputEvent::CursorMoved { x, y }
    }

    #[test]
    fn hover_without_buttons_emits_nothing() {
        let mut input = InputProcessor::new();
        assert!(input.handle_event(moved(10.0, 10.0)).is_empty());
        assert!(input.handle_event(moved(20.0, 15.0)).is_empty());
        assert_eq!(input.mouse_pos(), Some((20.0, 15.0)));
    }

    #[test]
    fn left_drag_rotates_by_pixel_delta() {
        let mut input = InputProcessor::new();
        let _ = input.handle_event(moved(100.0, 100.0));
        assert_eq!(
            input.handle_event(press(MouseButton::Left)),
            vec![ViewCommand::ShowCameraTarget(true)]
        );
        assert_eq!(
            input.handle_event(moved(105.0, 97.0)),
            vec![ViewCommand::Rotate {
                delta_x: 5.0,
                delta_y: -3.0
            }]
        );
        assert_eq!(
            input.handle_event(release(MouseButton::Left)),
            vec![ViewCommand::ShowCameraTarget(false)]
        );
        assert!(!input.dragging());
    }

    #[test]
    fn each_button_maps_to_its_operation() {
        let mut input = InputProcessor::new();
        let _ = input.handle_event(moved(0.0, 0.0));
        let _ = input.handle_event(press(MouseButton::Left));
        let _ = input.handle_event(press(MouseButton::Right));
        assert!(input.handle_event(press(MouseButton::Middle)).is_empty());

        let cmds = input.handle_event(moved(2.0, 4.0));
        assert_eq!(
            cmds,
            vec![
                ViewCommand::Rotate {
                    delta_x: 2.0,
                    delta_y: 4.0
                },
                ViewCommand::OrbitEye {
                    delta_x: 2.0,
                    delta_y: 4.0
                },
                ViewCommand::Dolly {
                    delta_x: 2.0,
                    delta_y: 4.0
                },
            ]
        );

        // target stays visible until the last button is released
        assert!(input.handle_event(release(MouseButton::Left)).is_empty());
        assert!(input.handle_event(release(MouseButton::Right)).is_empty());
        assert_eq!(
            input.handle_event(release(MouseButton::Middle)),
            vec![ViewCommand::ShowCameraTarget(false)]
        );
    }

    #[test]
    fn sensitivity_scales_rotation_only() {
        let camera = CameraOptions {
            rotate_sensitivity: 0.5,
            ..CameraOptions::default()
        };
        let mut input =
            InputProcessor::with_options(camera, KeybindingOptions::default());
        let _ = input.handle_event(moved(0.0, 0.0));
        let _ = input.handle_event(press(MouseButton::Right));
        let _ = input.handle_event(press(MouseButton::Middle));
        assert_eq!(
            input.handle_event(moved(10.0, 0.0)),
            vec![
                ViewCommand::OrbitEye {
                    delta_x: 5.0,
                    delta_y: 0.0
                },
                ViewCommand::Dolly {
                    delta_x: 10.0,
                    delta_y: 0.0
                },
            ]
        );
    }

    #[test]
    fn wheel_notch_zooms_by_one_point_two() {
        let mut input = InputProcessor::new();
        let cmds = input.handle_event(InputEvent::Scroll { delta: 120.0 });
        let [ViewCommand::Zoom { ratio }] = cmds.as_slice() else {
            panic!("expected a single zoom, got {cmds:?}");
        };
        assert!((ratio - 1.0 / 1.2).abs() < 1e-12);

        let cmds = input.handle_event(InputEvent::Scroll { delta: -240.0 });
        let [ViewCommand::Zoom { ratio }] = cmds.as_slice() else {
            panic!("expected a single zoom, got {cmds:?}");
        };
        assert!((ratio - 1.44).abs() < 1e-12);

        assert!(input.handle_event(InputEvent::Scroll { delta: 0.0 }).is_empty());
    }

    #[test]
    fn keys_map_through_bindings() {
        let input = InputProcessor::new();
        assert_eq!(
            input.handle_key_press("ArrowLeft"),
            Some(ViewCommand::Pan(PanDirection::Left))
        );
        assert_eq!(
            input.handle_key_press("KeyI"),
            Some(ViewCommand::Zoom { ratio: 0.9 })
        );
        assert_eq!(
            input.handle_key_press("Minus"),
            Some(ViewCommand::Zoom { ratio: 1.1 })
        );
        assert_eq!(input.handle_key_press("Home"), Some(ViewCommand::ResetView));
        assert_eq!(input.handle_key_press("F13"), None);
    }
}
