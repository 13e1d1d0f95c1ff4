//! BoardView: rasterises a frame's cell list into a terminal framebuffer.
//!
//! Pure, no I/O. Each cell is placed at its transformed center, snapped to
//! the character grid, so in-flight transitions show up as cells drawn away
//! from their board coordinates.

use crate::core::FrameCell;
use crate::fb::{FrameBuffer, Glyph, Style};
use crate::types::{Orientation, Rgb, BOARD_HEIGHT, BOARD_WIDTH};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Session counters shown next to the board. The core does not keep these;
/// the driver accumulates them from lock events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Hud {
    pub lines: u32,
    pub pieces: u32,
    pub orientation: Orientation,
    pub game_over: bool,
}

const WELL: Rgb = Rgb::new(24, 24, 32);
const GRID: Rgb = Rgb::new(70, 70, 84);
const BLACK: Rgb = Rgb::new(0, 0, 0);

pub struct BoardView {
    /// Terminal columns per board cell
    cell_w: u16,
}

impl Default for BoardView {
    fn default() -> Self {
        // Two columns per cell roughly squares up terminal glyphs
        Self { cell_w: 2 }
    }
}

impl BoardView {
    pub fn new(cell_w: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
        }
    }

    fn frame_size(&self) -> (u16, u16) {
        (
            BOARD_WIDTH as u16 * self.cell_w + 2,
            BOARD_HEIGHT as u16 + 2,
        )
    }

    /// Top-left corner of the board border inside `viewport`
    pub fn origin(&self, viewport: Viewport) -> (u16, u16) {
        let (w, h) = self.frame_size();
        (
            viewport.width.saturating_sub(w) / 2,
            viewport.height.saturating_sub(h) / 2,
        )
    }

    /// Render into a reusable framebuffer, resizing it to `viewport`.
    pub fn render_into(
        &self,
        cells: &[FrameCell],
        hud: &Hud,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.fill(Glyph::default());

        let (ox, oy) = self.origin(viewport);
        let (frame_w, frame_h) = self.frame_size();
        let (ox, oy) = (ox as i32, oy as i32);

        self.draw_well(fb, ox, oy);
        draw_border(fb, ox, oy, frame_w, frame_h);

        // Settled cells first so moving ones draw on top
        for cell in cells.iter().filter(|c| c.transform.is_identity()) {
            self.draw_cell(fb, ox, oy, cell, false);
        }
        for cell in cells.iter().filter(|c| !c.transform.is_identity()) {
            self.draw_cell(fb, ox, oy, cell, true);
        }

        self.draw_panel(fb, hud, viewport, ox + frame_w as i32 + 2, oy);

        if hud.game_over {
            let text = "GAME OVER";
            let x = ox + (frame_w as i32 - text.len() as i32) / 2;
            let y = oy + frame_h as i32 / 2;
            fb.put_str(x, y, text, Style::new(Rgb::new(255, 255, 255), BLACK).bold());
        }
    }

    pub fn render(&self, cells: &[FrameCell], hud: &Hud, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(cells, hud, viewport, &mut fb);
        fb
    }

    fn draw_well(&self, fb: &mut FrameBuffer, ox: i32, oy: i32) {
        let dot = Glyph::new('·', Style::new(GRID, WELL));
        let blank = Glyph::new(' ', Style::new(GRID, WELL));
        for y in 0..BOARD_HEIGHT as i32 {
            for x in 0..(BOARD_WIDTH as u16 * self.cell_w) as i32 {
                let g = if x % self.cell_w as i32 == 0 { dot } else { blank };
                fb.put(ox + 1 + x, oy + 1 + y, g);
            }
        }
    }

    fn draw_cell(&self, fb: &mut FrameBuffer, ox: i32, oy: i32, cell: &FrameCell, moving: bool) {
        let center = cell.drawn_center();
        let w = self.cell_w as f32;
        let col = (center.x * w - w / 2.0).round();
        let row = (center.y - 0.5).round();
        if !col.is_finite() || !row.is_finite() {
            return;
        }
        let (col, row) = (col as i32, row as i32);

        let style = Style::new(cell.fill, cell.outline);
        let body = if moving { '▓' } else { '█' };
        let right = self.cell_w as i32 * BOARD_WIDTH as i32;
        for dx in 0..self.cell_w as i32 {
            let x = col + dx;
            if x < 0 || x >= right || row < 0 || row >= BOARD_HEIGHT as i32 {
                continue;
            }
            // The last column keeps a sliver of outline color
            let ch = if dx + 1 == self.cell_w as i32 && !moving {
                '▊'
            } else {
                body
            };
            fb.put(ox + 1 + x, oy + 1 + row, Glyph::new(ch, style));
        }
    }

    fn draw_panel(&self, fb: &mut FrameBuffer, hud: &Hud, viewport: Viewport, x: i32, y: i32) {
        if x < 0 || viewport.width as i32 - x < 10 {
            return;
        }
        let label = Style::new(Rgb::new(220, 220, 220), BLACK).bold();
        let value = Style::new(Rgb::new(190, 190, 190), BLACK);

        let rows: [(&str, String); 3] = [
            ("LINES", hud.lines.to_string()),
            ("PIECES", hud.pieces.to_string()),
            ("UP", orientation_label(hud.orientation).to_string()),
        ];
        for (i, (name, v)) in rows.iter().enumerate() {
            let row = y + i as i32 * 3;
            fb.put_str(x, row, name, label);
            fb.put_str(x, row + 1, v, value);
        }
    }
}

fn draw_border(fb: &mut FrameBuffer, x: i32, y: i32, w: u16, h: u16) {
    if w < 2 || h < 2 {
        return;
    }
    let style = Style::new(Rgb::new(200, 200, 200), BLACK);
    let (r, b) = (x + w as i32 - 1, y + h as i32 - 1);
    for dx in x + 1..r {
        fb.put(dx, y, Glyph::new('─', style));
        fb.put(dx, b, Glyph::new('─', style));
    }
    for dy in y + 1..b {
        fb.put(x, dy, Glyph::new('│', style));
        fb.put(r, dy, Glyph::new('│', style));
    }
    fb.put(x, y, Glyph::new('┌', style));
    fb.put(r, y, Glyph::new('┐', style));
    fb.put(x, b, Glyph::new('└', style));
    fb.put(r, b, Glyph::new('┘', style));
}

fn orientation_label(o: Orientation) -> &'static str {
    match o {
        Orientation::Up => "up",
        Orientation::Left => "left",
        Orientation::Down => "down",
        Orientation::Right => "right",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Transform, Vec2};
    use crate::types::Color;

    // 40x26 puts the 22x24 frame at (9, 1); board cell (x, y) starts at
    // column 10 + 2x, row 2 + y.
    fn viewport() -> Viewport {
        Viewport::new(40, 26)
    }

    #[test]
    fn test_settled_cell_lands_on_its_square() {
        let cells = [FrameCell::new(0, 21, Color::Lime, Transform::IDENTITY)];
        let fb = BoardView::default().render(&cells, &Hud::default(), viewport());

        let left = fb.get(10, 23).unwrap();
        assert_eq!(left.ch, '█');
        assert_eq!(left.style.fg, Color::Lime.fill());
        assert_eq!(fb.get(11, 23).unwrap().ch, '▊');
        assert_eq!(fb.get(11, 23).unwrap().style.bg, Color::Lime.outline());
    }

    #[test]
    fn test_moving_cell_drawn_at_transformed_center() {
        let t = Transform {
            angle: 0.0,
            pivot: Vec2::ZERO,
            offset: Vec2::new(0.0, -1.0),
        };
        let cells = [FrameCell::new(4, 21, Color::Yellow, t)];
        let fb = BoardView::default().render(&cells, &Hud::default(), viewport());

        assert_eq!(fb.get(18, 22).unwrap().ch, '▓');
        assert_eq!(fb.get(18, 23).unwrap().ch, '·');
    }

    #[test]
    fn test_cells_outside_well_are_clipped() {
        let t = Transform {
            angle: 0.0,
            pivot: Vec2::ZERO,
            offset: Vec2::new(-3.0, 0.0),
        };
        let cells = [FrameCell::new(0, 5, Color::Red, t)];
        let fb = BoardView::default().render(&cells, &Hud::default(), viewport());
        // Border column untouched
        assert_eq!(fb.get(9, 7).unwrap().ch, '│');
    }

    #[test]
    fn test_border_and_game_over_overlay() {
        let hud = Hud {
            game_over: true,
            ..Hud::default()
        };
        let fb = BoardView::default().render(&[], &hud, viewport());
        assert_eq!(fb.get(9, 1).unwrap().ch, '┌');
        assert_eq!(fb.get(30, 24).unwrap().ch, '┘');
        assert!(fb.row_text(13).contains("GAME OVER"));
    }

    #[test]
    fn test_panel_shows_counters() {
        let hud = Hud {
            lines: 12,
            pieces: 40,
            orientation: Orientation::Left,
            game_over: false,
        };
        let fb = BoardView::default().render(&[], &hud, Viewport::new(60, 26));
        assert!(fb.row_text(1).contains("LINES"));
        assert!(fb.row_text(2).contains("12"));
        assert!(fb.row_text(5).contains("40"));
        assert!(fb.row_text(8).contains("left"));
    }

    #[test]
    fn test_tiny_viewport_does_not_panic() {
        let cells = [FrameCell::new(9, 21, Color::Blue, Transform::IDENTITY)];
        let fb = BoardView::default().render(&cells, &Hud::default(), Viewport::new(5, 3));
        assert_eq!((fb.width(), fb.height()), (5, 3));
    }
}
