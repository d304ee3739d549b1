//! Decorative snow overlay.
//!
//! A fixed population of flakes drifts down the terminal, redrawn over each
//! frame. The overlay only dusts cells left empty by the widgets underneath,
//! so content stays readable. Purely cosmetic: it holds no timers and never
//! touches application state.

use rand::Rng;
use rand::seq::IndexedRandom;
use ratatui::{Frame, style::Color};

/// Number of flakes on screen.
const FLAKE_COUNT: usize = 60;

/// Flake glyphs, heaviest to lightest.
const GLYPHS: [char; 3] = ['*', '·', '.'];

/// One drifting flake.
#[derive(Debug, Clone)]
struct Flake {
    col: u16,
    row: u16,
    /// Frames per row of fall. Slower flakes read as farther away.
    fall_every: u16,
    phase: u16,
    glyph: char,
}

impl Flake {
    fn spawn(rng: &mut impl Rng, width: u16, height: u16) -> Self {
        let fall_every = rng.random_range(1..=3);
        Self {
            col: rng.random_range(0..width),
            row: rng.random_range(0..height),
            fall_every,
            phase: rng.random_range(0..fall_every),
            glyph: GLYPHS.choose(rng).copied().unwrap_or('*'),
        }
    }
}

/// Snow overlay state, owned by the terminal driver.
///
/// Resizing reseeds the field via [`fit`](Self::fit). A zero-area terminal
/// simply empties the field; every method tolerates any terminal size.
#[derive(Debug, Clone)]
pub struct Snowfield {
    flakes: Vec<Flake>,
    width: u16,
    height: u16,
}

impl Snowfield {
    /// Create an empty field. Flakes appear on the first [`fit`](Self::fit).
    pub fn new() -> Self {
        Self { flakes: Vec::new(), width: 0, height: 0 }
    }

    /// Match the field to the terminal dimensions, reseeding on change.
    pub fn fit(&mut self, width: u16, height: u16) {
        if self.width == width && self.height == height {
            return;
        }
        self.width = width;
        self.height = height;
        if width == 0 || height == 0 {
            self.flakes.clear();
            return;
        }
        let mut rng = rand::rng();
        self.flakes = (0..FLAKE_COUNT).map(|_| Flake::spawn(&mut rng, width, height)).collect();
    }

    /// Advance every flake by one frame.
    pub fn advance(&mut self) {
        if self.flakes.is_empty() {
            return;
        }
        let mut rng = rand::rng();
        for flake in &mut self.flakes {
            flake.phase += 1;
            if flake.phase < flake.fall_every {
                continue;
            }
            flake.phase = 0;
            flake.row += 1;
            if flake.row >= self.height {
                flake.row = 0;
                flake.col = rng.random_range(0..self.width);
            } else if rng.random_range(0..6) == 0 {
                // Occasional sideways drift.
                flake.col = (flake.col + 1) % self.width;
            }
        }
    }

    /// Draw the field over the current frame, dusting only empty cells.
    pub fn render(&self, frame: &mut Frame) {
        let area = frame.area();
        let buf = frame.buffer_mut();
        for flake in &self.flakes {
            if flake.col >= area.width || flake.row >= area.height {
                continue;
            }
            if let Some(cell) = buf.cell_mut((area.x + flake.col, area.y + flake.row)) {
                if cell.symbol() == " " {
                    cell.set_char(flake.glyph);
                    cell.set_fg(Color::DarkGray);
                }
            }
        }
    }
}

impl Default for Snowfield {
    fn default() -> Self {
        Self::new()
    }
}
