//! GameView: maps a [`GameSnapshot`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{spawn_matrix, GameSnapshot};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{self, Phase, PieceKind, COLS, ROWS};

/// Terminal viewport dimensions.
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

/// A lightweight terminal view for the playfield and side panel.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
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

    /// Render a snapshot into an existing framebuffer.
    ///
    /// This is the allocation-free hot path. Callers can reuse a framebuffer
    /// across frames and only resize when the terminal size changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let board_px_w = (COLS as u16) * self.cell_w;
        let board_px_h = (ROWS as u16) * self.cell_h;
        let frame_w = board_px_w + 2;
        let frame_h = board_px_h + 2;

        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        let bg = CellStyle {
            fg: Rgb::new(80, 80, 90),
            bg: Rgb::new(30, 30, 40),
            bold: false,
            dim: false,
        };
        let border = CellStyle {
            fg: Rgb::new(200, 200, 200),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: false,
        };

        // Background for play area.
        fb.fill_rect(start_x + 1, start_y + 1, board_px_w, board_px_h, ' ', bg);

        // Border.
        self.draw_border(fb, start_x, start_y, frame_w, frame_h, border);

        // Locked board cells, including rows mid-burn.
        for row in 0..ROWS as usize {
            for col in 0..COLS as usize {
                match snap.cells[row][col] {
                    types::Cell::Filled(kind) => {
                        self.draw_board_cell(fb, start_x, start_y, col as u16, row as u16, kind);
                    }
                    types::Cell::Burning => {
                        self.draw_burning_cell(fb, start_x, start_y, col as u16, row as u16);
                    }
                    types::Cell::Empty => {
                        self.draw_empty_cell(fb, start_x, start_y, col as u16, row as u16);
                    }
                }
            }
        }

        // Active piece. Cells above the top edge are simply not drawn.
        if let Some(active) = snap.active {
            for (row, col) in active.cells() {
                if row >= 0 && row < ROWS as i8 && col >= 0 && col < COLS as i8 {
                    self.draw_board_cell(
                        fb,
                        start_x,
                        start_y,
                        col as u16,
                        row as u16,
                        active.kind,
                    );
                }
            }
        }

        // Side panel (score/speed/next).
        self.draw_side_panel(fb, snap, viewport, start_x, start_y, frame_w);

        // Overlays.
        match snap.phase {
            Phase::Paused => {
                self.draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, "PAUSED");
            }
            Phase::GameOver => {
                self.draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, "GAME OVER");
            }
            Phase::Init | Phase::Running => {}
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
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

    fn draw_empty_cell(&self, fb: &mut FrameBuffer, start_x: u16, start_y: u16, x: u16, y: u16) {
        let style = CellStyle {
            fg: Rgb::new(90, 90, 100),
            bg: Rgb::new(30, 30, 40),
            bold: false,
            dim: true,
        };
        self.fill_cell_rect(fb, start_x, start_y, x, y, '·', style);
    }

    fn draw_board_cell(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        x: u16,
        y: u16,
        kind: PieceKind,
    ) {
        let (fg, ch) = match kind {
            PieceKind::I => (Rgb::new(80, 220, 220), '█'),
            PieceKind::O => (Rgb::new(240, 220, 80), '█'),
            PieceKind::T => (Rgb::new(200, 120, 220), '█'),
            PieceKind::S => (Rgb::new(100, 220, 120), '█'),
            PieceKind::Z => (Rgb::new(220, 80, 80), '█'),
            PieceKind::J => (Rgb::new(80, 120, 220), '█'),
            PieceKind::L => (Rgb::new(255, 165, 0), '█'),
            PieceKind::Brick => (Rgb::new(140, 140, 140), '▓'),
        };
        let style = CellStyle {
            fg,
            bg: Rgb::new(30, 30, 40),
            bold: true,
            dim: false,
        };
        self.fill_cell_rect(fb, start_x, start_y, x, y, ch, style);
    }

    fn draw_burning_cell(&self, fb: &mut FrameBuffer, start_x: u16, start_y: u16, x: u16, y: u16) {
        let style = CellStyle {
            fg: Rgb::new(255, 140, 40),
            bg: Rgb::new(60, 20, 10),
            bold: true,
            dim: false,
        };
        self.fill_cell_rect(fb, start_x, start_y, x, y, '▒', style);
    }

    fn fill_cell_rect(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        cell_x: u16,
        cell_y: u16,
        ch: char,
        style: CellStyle,
    ) {
        let px = start_x + 1 + cell_x * self.cell_w;
        let py = start_y + 1 + cell_y * self.cell_h;
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
        if panel_x >= viewport.width {
            return;
        }
        let panel_w = viewport.width - panel_x;
        if panel_w < 12 {
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
        fb.put_str(panel_x, y, &snap.score.to_string(), value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "SPEED", label);
        y = y.saturating_add(1);
        let mut speed = snap.drop_interval_ms.to_string();
        speed.push_str(" ms");
        fb.put_str(panel_x, y, &speed, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "NEXT", label);
        y = y.saturating_add(1);
        self.draw_preview(fb, snap.next, panel_x, y);
    }

    /// Draw the next piece's spawn matrix as a small preview block.
    fn draw_preview(&self, fb: &mut FrameBuffer, kind: PieceKind, x: u16, y: u16) {
        let matrix = spawn_matrix(kind);
        let style = CellStyle {
            fg: preview_color(kind),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: false,
        };
        for (row, col) in matrix.occupied() {
            let px = x + (col as u16) * self.cell_w;
            let py = y + (row as u16) * self.cell_h;
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

fn preview_color(kind: PieceKind) -> Rgb {
    match kind {
        PieceKind::I => Rgb::new(80, 220, 220),
        PieceKind::O => Rgb::new(240, 220, 80),
        PieceKind::T => Rgb::new(200, 120, 220),
        PieceKind::S => Rgb::new(100, 220, 120),
        PieceKind::Z => Rgb::new(220, 80, 80),
        PieceKind::J => Rgb::new(80, 120, 220),
        PieceKind::L => Rgb::new(255, 165, 0),
        PieceKind::Brick => Rgb::new(140, 140, 140),
    }
}
