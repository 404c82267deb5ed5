//! GameView: maps a game snapshot into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! The view owns the variant-to-color table; the engine only ever speaks in
//! variant tags.

use crate::core::GameSnapshot;
use crate::term::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::{PieceVariant, BOARD_HEIGHT, BOARD_WIDTH};

/// Terminal viewport dimensions
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

/// A lightweight terminal renderer for the playfield
pub struct GameView {
    /// Board cell width in terminal columns
    cell_w: u16,
    /// Board cell height in terminal rows
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self { cell_w, cell_h }
    }

    /// Render a snapshot into a framebuffer sized to the viewport
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        fb.fill(Cell::default());

        let board_px_w = (BOARD_WIDTH as u16) * self.cell_w;
        let board_px_h = (BOARD_HEIGHT as u16) * self.cell_h;
        let frame_w = board_px_w + 2;
        let frame_h = board_px_h + 2;

        let start_x = viewport.width.saturating_sub(frame_w + SIDE_PANEL_W) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        let bg = CellStyle {
            fg: Rgb::new(80, 80, 90),
            bg: Rgb::new(25, 25, 35),
            bold: false,
            dim: false,
        };

        // Play area and border.
        fb.fill_rect(start_x + 1, start_y + 1, board_px_w, board_px_h, ' ', bg);
        self.draw_border(&mut fb, start_x, start_y, frame_w, frame_h);

        // Settled cells.
        for (row, row_cells) in snap.board.iter().enumerate() {
            for (col, cell) in row_cells.iter().enumerate() {
                if let Some(variant) = cell {
                    self.draw_board_cell(&mut fb, start_x, start_y, col as i8, row as i8, *variant);
                }
            }
        }

        if !snap.game_over {
            // Ghost first so the active piece paints over it when they meet.
            let ghost_style = CellStyle {
                fg: Rgb::new(140, 140, 140),
                bg: Rgb::new(25, 25, 35),
                bold: false,
                dim: true,
            };
            for &(col, row) in &snap.ghost.cells {
                self.fill_board_cell(&mut fb, start_x, start_y, col, row, '░', ghost_style);
            }

            for &(col, row) in &snap.active.cells {
                self.draw_board_cell(&mut fb, start_x, start_y, col, row, snap.active.variant);
            }
        }

        self.draw_side_panel(&mut fb, snap, viewport, start_x, start_y, frame_w);

        if snap.game_over {
            self.draw_overlay_text(&mut fb, start_x, start_y, frame_w, frame_h, "GAME OVER");
        }

        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
        let style = CellStyle {
            fg: Rgb::new(200, 200, 200),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: false,
        };
        if w < 2 || h < 2 {
            return;
        }

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    fn draw_board_cell(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        col: i8,
        row: i8,
        variant: PieceVariant,
    ) {
        let style = CellStyle {
            fg: variant_color(variant),
            bg: Rgb::new(25, 25, 35),
            bold: true,
            dim: false,
        };
        self.fill_board_cell(fb, start_x, start_y, col, row, '█', style);
    }

    /// Paint one board cell; cells outside the visible field (e.g. the spawn
    /// buffer rows of an entering piece) are skipped
    fn fill_board_cell(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        col: i8,
        row: i8,
        ch: char,
        style: CellStyle,
    ) {
        if col < 0 || col >= BOARD_WIDTH as i8 || row < 0 || row >= BOARD_HEIGHT as i8 {
            return;
        }
        let px = start_x + 1 + (col as u16) * self.cell_w;
        let py = start_y + 1 + (row as u16) * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
    ) {
        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 10 {
            return;
        }

        let label = CellStyle {
            fg: Rgb::new(220, 220, 220),
            bg: Rgb::new(0, 0, 0),
            bold: true,
            dim: false,
        };
        let value = CellStyle {
            fg: Rgb::new(200, 200, 200),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: false,
        };

        let mut y = start_y;
        fb.put_str(panel_x, y, "SCORE", label);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, &format!("{}", snap.score), value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "SPEED", label);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, &format!("{} ms", snap.drop_interval_ms), value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "NEXT", label);
        y = y.saturating_add(1);
        self.draw_preview(fb, snap, panel_x, y);
    }

    /// Draw the lookahead piece in panel-local cells.
    ///
    /// Template cells span cols 3..=6 and rows -1..=0; shifting by (-2, +1)
    /// normalizes them into a small box under the NEXT label.
    fn draw_preview(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, panel_x: u16, panel_y: u16) {
        let style = CellStyle {
            fg: variant_color(snap.next.variant),
            bg: Rgb::new(0, 0, 0),
            bold: true,
            dim: false,
        };
        for &(col, row) in &snap.next.cells {
            let local_col = col - 2;
            let local_row = row + 1;
            if local_col < 0 || local_row < 0 {
                continue;
            }
            let px = panel_x + (local_col as u16) * self.cell_w;
            let py = panel_y + (local_row as u16) * self.cell_h;
            fb.fill_rect(px, py, self.cell_w, self.cell_h, '█', style);
        }
    }

    fn draw_overlay_text(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
        text: &str,
    ) {
        let mid_y = start_y.saturating_add(frame_h / 2);
        let text_w = text.chars().count() as u16;
        let x = start_x.saturating_add(frame_w.saturating_sub(text_w) / 2);
        let style = CellStyle {
            fg: Rgb::new(255, 255, 255),
            bg: Rgb::new(0, 0, 0),
            bold: true,
            dim: false,
        };
        fb.put_str(x, mid_y, text, style);
    }
}

/// Terminal columns reserved right of the board for score/speed/next
const SIDE_PANEL_W: u16 = 14;

/// Fixed display color per variant (the sprite palette of the game)
fn variant_color(variant: PieceVariant) -> Rgb {
    match variant {
        PieceVariant::LLeft => Rgb::new(255, 165, 0), // orange
        PieceVariant::LRight => Rgb::new(60, 80, 255), // blue
        PieceVariant::Long => Rgb::new(0, 255, 255),  // cyan
        PieceVariant::S1 => Rgb::new(0, 255, 0),      // green
        PieceVariant::S2 => Rgb::new(255, 0, 0),      // red
        PieceVariant::Square => Rgb::new(255, 255, 0), // yellow
        PieceVariant::T => Rgb::new(170, 0, 255),     // purple
    }
}
