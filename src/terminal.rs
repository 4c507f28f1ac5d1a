//! Full-screen terminal host for the renderer.
//!
//! Owns the timer, reads key events and presents frames using half-block
//! characters, two sub-pixels per cell.

use crate::config::Config;
use crate::error::AppError;
use crate::graphics::{Color, FrameBuffer};
use crate::present::CellGrid;
use crate::renderer::{redraw, BACKGROUND};
use crate::state::{update, Key, Message, SceneState};
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute, queue,
    style::{self, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal::{self, Clear, ClearType},
};
use std::io::{self, stdout, Write};
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

const UPPER_HALF_BLOCK: char = '\u{2580}';

/// Maps a terminal key code to a scene key
pub fn map_key(code: KeyCode) -> Key {
    match code {
        KeyCode::Up => Key::Up,
        KeyCode::Down => Key::Down,
        KeyCode::Left => Key::Left,
        KeyCode::Right => Key::Right,
        _ => Key::Other,
    }
}

/// Keys that close the program
pub fn is_quit(key_event: &KeyEvent) -> bool {
    match key_event.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => true,
        KeyCode::Char('c') => key_event.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

fn to_terminal_color(color: Color) -> style::Color {
    let (r, g, b, _) = color.as_rgba8();
    style::Color::Rgb { r, g, b }
}

/// Terminal size in (columns, rows)
fn terminal_size() -> io::Result<(u16, u16)> {
    match termsize::get() {
        Some(size) => Ok((size.cols, size.rows)),
        None => terminal::size(),
    }
}

/// Raw mode and alternate screen, restored when dropped (also while unwinding)
struct ScreenGuard<W: Write> {
    out: W,
}

impl<W: Write> ScreenGuard<W> {
    fn enter(out: W) -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        // From here on, dropping the guard undoes raw mode
        let mut guard = ScreenGuard { out };
        execute!(guard.out, terminal::EnterAlternateScreen, cursor::Hide)?;
        Ok(guard)
    }
}

impl<W: Write> Drop for ScreenGuard<W> {
    fn drop(&mut self) {
        if let Err(e) = execute!(
            self.out,
            ResetColor,
            terminal::LeaveAlternateScreen,
            cursor::Show
        ) {
            warn!(error = %e, "failed to leave the alternate screen");
        }
        if let Err(e) = terminal::disable_raw_mode() {
            warn!(error = %e, "failed to disable raw mode");
        }
    }
}

/// Interactive terminal application
pub struct TerminalApp {
    scene: SceneState,
    frame: FrameBuffer,
    tick_period: Duration,
    /// Scene changed since the last render
    needs_redraw: bool,
    /// Rendered frame not yet shown
    needs_present: bool,
    /// Screen must be wiped before the next present
    needs_clear: bool,
    running: bool,
}

impl TerminalApp {
    pub fn new(config: &Config) -> Self {
        TerminalApp {
            scene: SceneState::new(),
            frame: FrameBuffer::new(config.width, config.height),
            tick_period: config.tick_period,
            needs_redraw: true,
            needs_present: false,
            needs_clear: true,
            running: true,
        }
    }

    pub fn scene(&self) -> &SceneState {
        &self.scene
    }

    pub fn frame(&self) -> &FrameBuffer {
        &self.frame
    }

    /// Feeds one message to the scene and records whether it needs a redraw
    pub fn dispatch(&mut self, message: Message) {
        let (scene, redraw) = update(self.scene, message);
        self.scene = scene;
        self.needs_redraw |= redraw;
    }

    /// Renders once if any redraw was requested since the last render.
    ///
    /// Several requests between two calls collapse into a single frame.
    pub fn render_pending(&mut self) -> bool {
        if !self.needs_redraw {
            return false;
        }
        let frame = std::mem::take(&mut self.frame);
        self.frame = redraw(&self.scene, frame);
        self.needs_redraw = false;
        self.needs_present = true;
        true
    }

    /// Handles a terminal event
    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                if is_quit(&key_event) {
                    info!("quit requested");
                    self.running = false;
                } else {
                    self.dispatch(Message::KeyPress(map_key(key_event.code)));
                }
            }
            Event::Resize(cols, rows) => {
                debug!(cols, rows, "terminal resized");
                self.needs_clear = true;
                self.needs_present = true;
            }
            _ => {}
        }
    }

    pub fn run(&mut self) -> Result<(), AppError> {
        let _screen = ScreenGuard::enter(stdout())?;
        self.main_loop()
    }

    fn main_loop(&mut self) -> Result<(), AppError> {
        let mut stdout = stdout();
        let mut next_tick = Instant::now() + self.tick_period;
        info!(tick_ms = self.tick_period.as_millis() as u64, "animation started");

        while self.running {
            let timeout = next_tick.saturating_duration_since(Instant::now());
            if event::poll(timeout)? {
                self.handle_event(event::read()?);
            }

            // Late ticks are not made up for
            let now = Instant::now();
            if now >= next_tick {
                self.dispatch(Message::Tick);
                next_tick = now + self.tick_period;
            }

            self.render_pending();
            if self.needs_present {
                self.present(&mut stdout)?;
                self.needs_present = false;
            }
        }

        info!(camera = ?self.scene.camera_offset, "animation stopped");
        Ok(())
    }

    /// Writes the current frame to the terminal
    fn present<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        let (cols, rows) = terminal_size()?;
        let grid = CellGrid::fit(&self.frame, usize::from(cols), usize::from(rows) * 2);

        if self.needs_clear {
            queue!(out, ResetColor, Clear(ClearType::All))?;
            self.needs_clear = false;
        }

        let mut current: Option<(Color, Color)> = None;
        for cell_row in 0..grid.height().div_ceil(2) {
            queue!(out, cursor::MoveTo(0, cell_row as u16))?;
            let top = grid.row(cell_row * 2);
            let bottom = (cell_row * 2 + 1 < grid.height()).then(|| grid.row(cell_row * 2 + 1));
            for (x, &upper) in top.iter().enumerate() {
                let lower = bottom.map_or(BACKGROUND, |row| row[x]);
                if current != Some((upper, lower)) {
                    queue!(
                        out,
                        SetForegroundColor(to_terminal_color(upper)),
                        SetBackgroundColor(to_terminal_color(lower))
                    )?;
                    current = Some((upper, lower));
                }
                queue!(out, Print(UPPER_HALF_BLOCK))?;
            }
        }
        queue!(out, ResetColor)?;
        out.flush()
    }
}
