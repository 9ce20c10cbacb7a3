/// Platform-agnostic pointer events.
///
/// These are fed into an [`InputProcessor`](super::InputProcessor) which
/// converts them into [`ViewCommand`](crate::viewer::ViewCommand) values.
/// Key presses go through
/// [`InputProcessor::handle_key_press`](super::InputProcessor::handle_key_press).
///
/// # Example
///
/// ```ignore
/// for cmd in input_processor.handle_event(InputEvent::CursorMoved { x: 100.0, y: 200.0 }) {
///     viewer.execute(cmd)?;
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Cursor moved to absolute screen position.
    CursorMoved {
        /// Horizontal position in physical pixels.
        x: f32,
        /// Vertical position in physical pixels.
        y: f32,
    },
    /// Mouse button pressed or released.
    MouseButton {
        /// Which button changed.
        button: MouseButton,
        /// `true` for press, `false` for release.
        pressed: bool,
    },
    /// Scroll wheel, in wheel units (120 per notch on most mice).
    Scroll {
        /// Scroll amount (positive = zoom in, negative = zoom out).
        delta: f32,
    },
}

/// Platform-agnostic mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Primary (left) mouse button: swing the reference around the eye.
    Left,
    /// Secondary (right) mouse button: orbit the eye around the reference.
    Right,
    /// Middle mouse button (wheel click): dolly.
    Middle,
}
