//! TerminalRenderer: flushes framebuffers to a raw-mode terminal.
//!
//! The first draw (and any draw after a resize or `invalidate`) repaints
//! the whole screen; subsequent draws diff against the previous frame and
//! only rewrite the runs of cells that changed.

use std::io::{self, Write};

use anyhow::Result;
use crossterm::{
    cursor,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use retris_types::Rgb;

use crate::fb::{FrameBuffer, GlyphStyle};

/// A horizontal span of changed cells within one row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Run {
    x: u16,
    y: u16,
    len: u16,
}

pub struct TerminalRenderer {
    stdout: io::Stdout,
    prev: Option<FrameBuffer>,
    runs: Vec<Run>,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            prev: None,
            runs: Vec::new(),
        }
    }

    /// Switch the terminal into raw-mode alternate-screen rendering.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.stdout.queue(terminal::EnterAlternateScreen)?;
        self.stdout.queue(cursor::Hide)?;
        self.stdout.queue(terminal::DisableLineWrap)?;
        self.stdout.flush()?;
        Ok(())
    }

    /// Restore the terminal. Safe to call even if `enter` failed midway.
    pub fn exit(&mut self) -> Result<()> {
        self.stdout.queue(ResetColor)?;
        self.stdout.queue(SetAttribute(Attribute::Reset))?;
        self.stdout.queue(terminal::EnableLineWrap)?;
        self.stdout.queue(cursor::Show)?;
        self.stdout.queue(terminal::LeaveAlternateScreen)?;
        self.stdout.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Force the next draw to repaint everything (e.g. after a resize).
    pub fn invalidate(&mut self) {
        self.prev = None;
    }

    /// Draw a frame, diffing against the previously drawn one.
    pub fn draw(&mut self, fb: &FrameBuffer) -> Result<()> {
        match self.prev.take() {
            Some(prev) if prev.width() == fb.width() && prev.height() == fb.height() => {
                self.runs.clear();
                collect_changed_runs(&prev, fb, &mut self.runs);
                self.prev = Some(prev);
                self.emit_runs(fb)?;
            }
            _ => self.full_redraw(fb)?,
        }

        // Keep the frame for the next diff, reusing the allocation.
        match &mut self.prev {
            Some(prev) => prev.clone_from(fb),
            None => self.prev = Some(fb.clone()),
        }
        Ok(())
    }

    fn full_redraw(&mut self, fb: &FrameBuffer) -> Result<()> {
        self.stdout
            .queue(terminal::Clear(terminal::ClearType::All))?;
        self.stdout.queue(cursor::MoveTo(0, 0))?;

        let mut active: Option<GlyphStyle> = None;
        for y in 0..fb.height() {
            self.stdout.queue(cursor::MoveTo(0, y))?;
            for x in 0..fb.width() {
                let glyph = fb.get(x, y).unwrap_or_default();
                if active != Some(glyph.style) {
                    self.queue_style(glyph.style)?;
                    active = Some(glyph.style);
                }
                self.stdout.queue(Print(glyph.ch))?;
            }
        }

        self.finish_frame()
    }

    fn emit_runs(&mut self, fb: &FrameBuffer) -> Result<()> {
        let mut active: Option<GlyphStyle> = None;
        for i in 0..self.runs.len() {
            let run = self.runs[i];
            self.stdout.queue(cursor::MoveTo(run.x, run.y))?;
            for dx in 0..run.len {
                let glyph = fb.get(run.x + dx, run.y).unwrap_or_default();
                if active != Some(glyph.style) {
                    self.queue_style(glyph.style)?;
                    active = Some(glyph.style);
                }
                self.stdout.queue(Print(glyph.ch))?;
            }
        }
        self.finish_frame()
    }

    fn finish_frame(&mut self) -> Result<()> {
        self.stdout.queue(ResetColor)?;
        self.stdout.queue(SetAttribute(Attribute::Reset))?;
        self.stdout.flush()?;
        Ok(())
    }

    fn queue_style(&mut self, style: GlyphStyle) -> Result<()> {
        self.stdout.queue(SetAttribute(Attribute::Reset))?;
        self.stdout
            .queue(SetForegroundColor(rgb_to_color(style.fg)))?;
        self.stdout
            .queue(SetBackgroundColor(rgb_to_color(style.bg)))?;
        if style.bold {
            self.stdout.queue(SetAttribute(Attribute::Bold))?;
        }
        if style.dim {
            self.stdout.queue(SetAttribute(Attribute::Dim))?;
        }
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

fn rgb_to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

/// Collect the horizontal runs of cells that differ between two frames of
/// equal dimensions. Adjacent changed cells coalesce into one run.
fn collect_changed_runs(prev: &FrameBuffer, next: &FrameBuffer, out: &mut Vec<Run>) {
    debug_assert_eq!((prev.width(), prev.height()), (next.width(), next.height()));

    for y in 0..next.height() {
        let mut x = 0;
        while x < next.width() {
            if prev.get(x, y) == next.get(x, y) {
                x += 1;
                continue;
            }
            let start = x;
            while x < next.width() && prev.get(x, y) != next.get(x, y) {
                x += 1;
            }
            out.push(Run {
                x: start,
                y,
                len: x - start,
            });
        }
    }
}
