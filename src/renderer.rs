//! Frame rendering for the wireframe cube.
//!
//! A frame is a pure function of the scene state and the buffer dimensions:
//! the buffer is handed in, fully overwritten and handed back, so rendering the
//! same state twice yields identical pixels.

use crate::geometry::{CUBE_EDGES, CUBE_VERTICES};
use crate::graphics::{Color, FrameBuffer};
use crate::math::rotate_vertex;
use crate::state::SceneState;
use crate::vertex::Vector3;
use tracing::trace;

/// Default surface width in pixels
pub const WIDTH: usize = 640;
/// Default surface height in pixels
pub const HEIGHT: usize = 480;

pub const BACKGROUND: Color = Color::BLACK;
pub const FOREGROUND: Color = Color::WHITE;

/// Static overlay drawn on every frame
pub const LABEL_TEXT: &str = "Hello, CSSR!";
pub const LABEL_POSITION: (i32, i32) = (10, 10);

/// Rotates every cube vertex and translates it by the camera offset
pub fn transform_vertices(scene: &SceneState) -> [Vector3; 8] {
    CUBE_VERTICES.map(|vertex| {
        rotate_vertex(vertex, scene.rotation_z, scene.rotation_x) + scene.camera_offset
    })
}

/// Screen-space endpoints of every edge, centered on the surface
pub fn project_edges(
    scene: &SceneState,
    width: usize,
    height: usize,
) -> [((i64, i64), (i64, i64)); 12] {
    let transformed = transform_vertices(scene);
    let center_x = (width / 2) as i64;
    let center_y = (height / 2) as i64;
    let to_screen = |v: Vector3| (i64::from(v.x) + center_x, i64::from(v.y) + center_y);

    CUBE_EDGES.map(|(start, end)| {
        debug_assert!(start < transformed.len() && end < transformed.len());
        (to_screen(transformed[start]), to_screen(transformed[end]))
    })
}

/// Renders the scene into an existing buffer and returns it
pub fn redraw(scene: &SceneState, mut frame: FrameBuffer) -> FrameBuffer {
    // Clear the screen
    frame.clear(BACKGROUND);

    let edges = project_edges(scene, frame.width(), frame.height());

    let (label_x, label_y) = LABEL_POSITION;
    frame.draw_text(LABEL_TEXT, label_x, label_y, FOREGROUND);

    for ((x0, y0), (x1, y1)) in edges {
        frame.draw_line(x0, y0, x1, y1, FOREGROUND);
    }

    trace!(
        width = frame.width(),
        height = frame.height(),
        rotation_z = scene.rotation_z,
        "frame rendered"
    );
    frame
}

/// Renders the scene into a freshly allocated buffer
pub fn render_frame(scene: &SceneState, width: usize, height: usize) -> FrameBuffer {
    redraw(scene, FrameBuffer::new(width, height))
}
