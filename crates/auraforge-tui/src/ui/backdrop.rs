//! Backdrop
//!
//! Deterministic dot lattice with two orb accents behind the screen body.
//! Pure function of the area: no state, no randomness. Widgets draw over
//! it, so the pattern only shows through where they leave cells blank.

use ratatui::{Frame, buffer::Buffer, layout::Rect, style::Color};

/// Columns between lattice dots.
const GRID_COLS: u16 = 6;
/// Rows between lattice lines.
const GRID_ROWS: u16 = 3;

/// Render the backdrop into `area`.
pub fn render(frame: &mut Frame, area: Rect) {
    let buf = frame.buffer_mut();

    for (i, y) in (area.top()..area.bottom()).step_by(GRID_ROWS as usize).enumerate() {
        // Stagger alternate rows for a woven lattice.
        let offset = if i % 2 == 0 { 0 } else { GRID_COLS / 2 };
        let first_col = area.left().saturating_add(offset);
        for x in (first_col..area.right()).step_by(GRID_COLS as usize) {
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.set_char('·');
                cell.set_fg(Color::DarkGray);
            }
        }
    }

    orb(buf, area, area.width / 5, area.height / 4, Color::Cyan);
    orb(buf, area, area.width * 4 / 5, area.height * 3 / 4, Color::Magenta);
}

/// Paint one orb accent centered at `(cx, cy)` relative to `area`.
fn orb(buf: &mut Buffer, area: Rect, cx: u16, cy: u16, color: Color) {
    const RING: [(i16, i16); 5] = [(0, 0), (-2, 0), (2, 0), (0, -1), (0, 1)];

    for (dx, dy) in RING {
        let Some(x) = cx.checked_add_signed(dx) else {
            continue;
        };
        let Some(y) = cy.checked_add_signed(dy) else {
            continue;
        };
        if x >= area.width || y >= area.height {
            continue;
        }
        if let Some(cell) = buf.cell_mut((area.x + x, area.y + y)) {
            cell.set_char('◦');
            cell.set_fg(color);
        }
    }
}
