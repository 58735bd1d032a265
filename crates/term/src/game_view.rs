//! GameView: maps engine state into a terminal framebuffer.
//!
//! Pure (no I/O), so it can be unit-tested against the framebuffer.

use retris_core::GameEngine;
use retris_types::Rgb;

use crate::fb::{FrameBuffer, Glyph, GlyphStyle};

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

/// Renders the game into a framebuffer.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 compensates for the typical terminal glyph aspect ratio.
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

    /// Render the current engine state into a fresh framebuffer.
    pub fn render(&self, engine: &GameEngine, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        fb.fill(Glyph::default());

        let board = engine.board();
        let board_px_w = board.width() as u16 * self.cell_w;
        let board_px_h = board.height() as u16 * self.cell_h;
        let frame_w = board_px_w + 2;
        let frame_h = board_px_h + 2;

        let origin_x = viewport.width.saturating_sub(frame_w + SIDE_PANEL_W) / 2;
        let origin_y = viewport.height.saturating_sub(frame_h) / 2;

        self.draw_frame(&mut fb, origin_x, origin_y, frame_w, frame_h);

        // Locked cells, then the falling piece on top.
        for y in 0..board.height() {
            for x in 0..board.width() {
                match board.get(x as i16, y as i16).flatten() {
                    Some(color) => {
                        self.draw_block(&mut fb, origin_x, origin_y, x as u16, y as u16, color)
                    }
                    None => self.draw_empty(&mut fb, origin_x, origin_y, x as u16, y as u16),
                }
            }
        }

        let piece = engine.current();
        for (r, c) in piece.shape.cells() {
            let x = piece.x + c as i16;
            let y = piece.y + r as i16;
            if x >= 0 && x < board.width() as i16 && y >= 0 && y < board.height() as i16 {
                self.draw_block(&mut fb, origin_x, origin_y, x as u16, y as u16, piece.color);
            }
        }

        self.draw_side_panel(&mut fb, engine, viewport, origin_x + frame_w + 2, origin_y);

        if engine.game_over() {
            self.draw_game_over(&mut fb, origin_x, origin_y, frame_w, frame_h);
        }

        fb
    }

    fn draw_frame(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
        let border = GlyphStyle {
            fg: Rgb::new(200, 200, 200),
            ..GlyphStyle::default()
        };
        let well = GlyphStyle {
            fg: Rgb::new(80, 80, 90),
            bg: Rgb::new(20, 20, 28),
            bold: false,
            dim: false,
        };

        fb.fill_rect(x + 1, y + 1, w - 2, h - 2, ' ', well);

        fb.put_char(x, y, '┌', border);
        fb.put_char(x + w - 1, y, '┐', border);
        fb.put_char(x, y + h - 1, '└', border);
        fb.put_char(x + w - 1, y + h - 1, '┘', border);
        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', border);
            fb.put_char(x + dx, y + h - 1, '─', border);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', border);
            fb.put_char(x + w - 1, y + dy, '│', border);
        }
    }

    fn draw_block(
        &self,
        fb: &mut FrameBuffer,
        origin_x: u16,
        origin_y: u16,
        cell_x: u16,
        cell_y: u16,
        color: Rgb,
    ) {
        let style = GlyphStyle {
            fg: color,
            bg: Rgb::new(20, 20, 28),
            bold: true,
            dim: false,
        };
        self.fill_cell(fb, origin_x, origin_y, cell_x, cell_y, '█', style);
    }

    fn draw_empty(
        &self,
        fb: &mut FrameBuffer,
        origin_x: u16,
        origin_y: u16,
        cell_x: u16,
        cell_y: u16,
    ) {
        let style = GlyphStyle {
            fg: Rgb::new(90, 90, 100),
            bg: Rgb::new(20, 20, 28),
            bold: false,
            dim: true,
        };
        self.fill_cell(fb, origin_x, origin_y, cell_x, cell_y, '·', style);
    }

    fn fill_cell(
        &self,
        fb: &mut FrameBuffer,
        origin_x: u16,
        origin_y: u16,
        cell_x: u16,
        cell_y: u16,
        ch: char,
        style: GlyphStyle,
    ) {
        let px = origin_x + 1 + cell_x * self.cell_w;
        let py = origin_y + 1 + cell_y * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        engine: &GameEngine,
        viewport: Viewport,
        panel_x: u16,
        panel_y: u16,
    ) {
        if panel_x >= viewport.width {
            return;
        }

        let label = GlyphStyle {
            bold: true,
            ..GlyphStyle::default()
        };
        let value = GlyphStyle {
            fg: Rgb::new(200, 200, 200),
            ..GlyphStyle::default()
        };

        let mut y = panel_y;
        fb.put_str(panel_x, y, "SCORE", label);
        fb.put_str(panel_x, y + 1, &engine.score().to_string(), value);
        y += 3;

        fb.put_str(panel_x, y, "LEVEL", label);
        fb.put_str(panel_x, y + 1, &engine.level().to_string(), value);
        y += 3;

        fb.put_str(panel_x, y, "NEXT", label);
        y += 1;
        let next = engine.next();
        for (r, c) in next.shape.cells() {
            let style = GlyphStyle {
                fg: next.color,
                bold: true,
                ..GlyphStyle::default()
            };
            fb.fill_rect(
                panel_x + c as u16 * self.cell_w,
                y + r as u16 * self.cell_h,
                self.cell_w,
                self.cell_h,
                '█',
                style,
            );
        }
    }

    fn draw_game_over(&self, fb: &mut FrameBuffer, x: u16, y: u16, frame_w: u16, frame_h: u16) {
        let headline = GlyphStyle {
            fg: Rgb::new(255, 80, 80),
            bold: true,
            ..GlyphStyle::default()
        };
        let hint = GlyphStyle::default();

        let mid_y = y + frame_h / 2;
        self.draw_centered(fb, x, mid_y, frame_w, "GAME OVER", headline);
        self.draw_centered(fb, x, mid_y + 2, frame_w, "SPACE TO RESTART", hint);
    }

    fn draw_centered(
        &self,
        fb: &mut FrameBuffer,
        x: u16,
        y: u16,
        frame_w: u16,
        text: &str,
        style: GlyphStyle,
    ) {
        let text_w = text.chars().count() as u16;
        let tx = x + frame_w.saturating_sub(text_w) / 2;
        fb.put_str(tx, y, text, style);
    }
}

/// Columns reserved next to the board for score/level/next.
const SIDE_PANEL_W: u16 = 12;
