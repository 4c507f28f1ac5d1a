//! Wireframe cube renderer.
//!
//! The core is a small pipeline: a fixed cube ([`geometry`]) is rotated
//! ([`math`]), translated by the camera of the current [`state::SceneState`]
//! and drawn as lines into a [`graphics::FrameBuffer`] by [`renderer`].
//! Ticks and key presses reach the scene as [`state::Message`] values.
//! [`terminal`] hosts all of it in a full-screen terminal.

pub mod config;
pub mod error;
pub mod geometry;
pub mod graphics;
pub mod logging;
pub mod math;
pub mod present;
pub mod renderer;
pub mod state;
pub mod terminal;
pub mod vertex;

pub use graphics::{Color, FrameBuffer};
pub use renderer::{redraw, render_frame};
pub use state::{update, Key, Message, SceneState};
pub use vertex::Vector3;
