//! Downsampling a frame onto a coarse grid of terminal cells.

use crate::graphics::{Color, FrameBuffer};
use crate::renderer::{render_frame, BACKGROUND};
use crate::state::SceneState;

/// A frame reduced to `width` x `height` sub-pixels
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellGrid {
    width: usize,
    height: usize,
    colors: Vec<Color>,
}

impl CellGrid {
    /// Downsamples `frame` to fit inside `max_width` x `max_height` sub-pixels,
    /// keeping the frame's aspect ratio.
    ///
    /// Each sub-pixel takes the brightest pixel of the block it covers, so thin
    /// lines survive the reduction instead of being averaged away.
    pub fn fit(frame: &FrameBuffer, max_width: usize, max_height: usize) -> Self {
        let (width, height) = fitted_size(frame.width(), frame.height(), max_width, max_height);
        Self::sample(frame, width, height)
    }

    /// Downsamples `frame` to exactly `width` x `height` sub-pixels
    pub fn sample(frame: &FrameBuffer, width: usize, height: usize) -> Self {
        if frame.width() == 0 || frame.height() == 0 {
            return CellGrid {
                width: 0,
                height: 0,
                colors: Vec::new(),
            };
        }
        let mut colors = Vec::with_capacity(width * height);
        for cy in 0..height {
            let (y_start, y_end) = block(cy, height, frame.height());
            for cx in 0..width {
                let (x_start, x_end) = block(cx, width, frame.width());
                let brightest = (y_start..y_end)
                    .flat_map(|y| (x_start..x_end).map(move |x| (x, y)))
                    .filter_map(|(x, y)| frame.pixel(x, y))
                    .max_by_key(|color| color.luma())
                    .unwrap_or(Color::BLACK);
                colors.push(brightest);
            }
        }
        CellGrid {
            width,
            height,
            colors,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn color(&self, x: usize, y: usize) -> Color {
        self.colors[y * self.width + x]
    }

    /// One row of sub-pixels
    pub fn row(&self, y: usize) -> &[Color] {
        &self.colors[y * self.width..(y + 1) * self.width]
    }

    /// Renders the grid as text, `#` for lit sub-pixels and a space otherwise
    pub fn to_ascii(&self, background: Color) -> String {
        let mut out = String::with_capacity((self.width + 1) * self.height);
        for y in 0..self.height {
            let line: String = self
                .row(y)
                .iter()
                .map(|&c| if c == background { ' ' } else { '#' })
                .collect();
            out.push_str(line.trim_end());
            out.push('\n');
        }
        out
    }
}

/// Widest ASCII dump
pub const MAX_DUMP_COLS: usize = 1000;

/// Renders `scene` as ASCII art `cols` characters wide, at most
/// [`MAX_DUMP_COLS`].
///
/// Terminal characters are about twice as tall as they are wide, so the rows
/// are halved to keep the cube square.
pub fn dump(scene: &SceneState, width: usize, height: usize, cols: usize) -> String {
    let frame = render_frame(scene, width, height);
    let cols = cols.clamp(1, MAX_DUMP_COLS);
    let rows = (cols * height / width.max(1) / 2).max(1);
    CellGrid::sample(&frame, cols, rows).to_ascii(BACKGROUND)
}

/// Largest size within the bounds that keeps the source aspect ratio
fn fitted_size(src_w: usize, src_h: usize, max_w: usize, max_h: usize) -> (usize, usize) {
    if src_w == 0 || src_h == 0 || max_w == 0 || max_h == 0 {
        return (0, 0);
    }
    let width = max_w.min(max_h * src_w / src_h).max(1);
    let height = (width * src_h / src_w).clamp(1, max_h);
    (width, height)
}

/// Source range covered by sub-pixel `index` out of `count`, never empty
fn block(index: usize, count: usize, source: usize) -> (usize, usize) {
    let start = index * source / count;
    let end = ((index + 1) * source / count).max(start + 1).min(source);
    (start, end)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::{HEIGHT, WIDTH};
    use crate::state::{update, Message};

    #[test]
    fn keeps_aspect_ratio_within_bounds() {
        assert_eq!(fitted_size(640, 480, 80, 1000), (80, 60));
        assert_eq!(fitted_size(640, 480, 1000, 48), (64, 48));
        assert_eq!(fitted_size(640, 480, 0, 48), (0, 0));
    }

    #[test]
    fn blocks_cover_the_source_without_gaps() {
        let count = 7;
        let mut next = 0;
        for i in 0..count {
            let (start, end) = block(i, count, 100);
            assert_eq!(start, next);
            assert!(end > start);
            next = end;
        }
        assert_eq!(next, 100);
    }

    #[test]
    fn thin_lines_survive_downsampling() {
        let mut frame = FrameBuffer::new(64, 64);
        frame.clear(Color::BLACK);
        frame.draw_line(0, 33, 63, 33, Color::WHITE);
        let grid = CellGrid::fit(&frame, 8, 8);
        assert_eq!((grid.width(), grid.height()), (8, 8));
        for x in 0..8 {
            assert_eq!(grid.color(x, 4), Color::WHITE);
            assert_eq!(grid.color(x, 3), Color::BLACK);
        }
    }

    #[test]
    fn ascii_dump_shows_the_cube_in_the_middle() {
        let frame = render_frame(&SceneState::new(), WIDTH, HEIGHT);
        let grid = CellGrid::fit(&frame, 64, 48);
        let text = grid.to_ascii(BACKGROUND);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 48);
        // The cube spans pixels 310..=330 and 230..=250, i.e. cells 31..=33 and 23..=25
        assert_eq!(lines[23].find('#'), Some(31));
        assert_eq!(lines[25].find('#'), Some(31));
        assert_eq!(lines[30], "");
    }

    #[test]
    fn dump_halves_rows_for_tall_characters() {
        let text = dump(&SceneState::new(), WIDTH, HEIGHT, 80);
        assert_eq!(text.lines().count(), 30);
        assert!(text.lines().all(|line| line.len() <= 80));
        assert!(text.contains('#'));
    }

    #[test]
    fn dump_follows_the_rotation() {
        let mut scene = SceneState::new();
        let still = dump(&scene, WIDTH, HEIGHT, 320);
        for _ in 0..5 {
            scene = update(scene, Message::Tick).0;
        }
        assert_ne!(dump(&scene, WIDTH, HEIGHT, 320), still);
    }

    #[test]
    fn dump_width_is_capped() {
        let text = dump(&SceneState::new(), WIDTH, HEIGHT, usize::MAX);
        assert_eq!(text.lines().count(), MAX_DUMP_COLS * HEIGHT / WIDTH / 2);
        assert!(text.lines().all(|line| line.len() <= MAX_DUMP_COLS));
    }
}
