use crate::vertex::Vector3;
use tracing::trace;

/// Radians added to both rotation angles on every tick
pub const ROTATION_STEP: f32 = 0.1;
/// Camera units moved per key press
pub const MOVE_STEP: i32 = 10;
/// Camera offset at startup
pub const INITIAL_CAMERA_OFFSET: Vector3 = Vector3::new(0, 0, 500);

/// Keys the scene understands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Other,
}

/// Inputs to the scene state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// One period of the animation timer elapsed
    Tick,
    /// A key was pressed
    KeyPress(Key),
}

/// Scene state
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneState {
    /// Translation applied after rotation
    pub camera_offset: Vector3,
    /// Current rotation angle around the Z-axis
    pub rotation_z: f32,
    /// Current rotation angle around the X-axis
    pub rotation_x: f32,
}

impl SceneState {
    pub fn new() -> Self {
        SceneState {
            camera_offset: INITIAL_CAMERA_OFFSET,
            rotation_z: 0.0,
            rotation_x: 0.0,
        }
    }
}

impl Default for SceneState {
    fn default() -> Self {
        Self::new()
    }
}

/// Applies one message to the scene.
///
/// Returns the next state and whether the frame needs to be redrawn. Ticks
/// always advance both angles by exactly one step. Arrow keys move the camera
/// one step along a single axis with no bounds; any other key leaves the state
/// untouched and asks for no redraw.
pub fn update(state: SceneState, message: Message) -> (SceneState, bool) {
    let mut next = state;
    let delta = match message {
        Message::Tick => {
            next.rotation_z += ROTATION_STEP;
            next.rotation_x += ROTATION_STEP;
            trace!(rotation_z = next.rotation_z, rotation_x = next.rotation_x, "tick");
            return (next, true);
        }
        Message::KeyPress(Key::Up) => Vector3::new(0, -MOVE_STEP, 0),
        Message::KeyPress(Key::Down) => Vector3::new(0, MOVE_STEP, 0),
        Message::KeyPress(Key::Left) => Vector3::new(-MOVE_STEP, 0, 0),
        Message::KeyPress(Key::Right) => Vector3::new(MOVE_STEP, 0, 0),
        Message::KeyPress(Key::Other) => return (state, false),
    };
    next.camera_offset += delta;
    trace!(?message, camera = ?next.camera_offset, "camera moved");
    (next, true)
}
