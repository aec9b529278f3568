//! TermPresenter: flushes a pixel framebuffer to a real terminal.
//!
//! Each character cell shows two vertically stacked pixels ('▀' with
//! foreground/background colours). Frames are diffed against the
//! previously presented grid and only changed cell runs are re-emitted.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal, QueueableCommand,
};

use tui_frogger_gfx::FrameBuffer;

use crate::cell::{Cell, CellGrid, PALETTE};

pub struct TermPresenter {
    stdout: io::Stdout,
    buf: Vec<u8>,
    current: CellGrid,
    prev: CellGrid,
    primed: bool,
}

impl TermPresenter {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            buf: Vec::with_capacity(64 * 1024),
            current: CellGrid::new(),
            prev: CellGrid::new(),
            primed: false,
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.flush_buf()?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Force the next draw to re-emit every cell (e.g. after a resize).
    pub fn invalidate(&mut self) {
        self.primed = false;
    }

    /// Present a frame, diffing against the previous one.
    pub fn draw(&mut self, fb: &FrameBuffer) -> Result<()> {
        self.current.load(fb);
        self.buf.clear();
        if self.primed {
            encode_diff_into(&self.prev, &self.current, &mut self.buf)?;
        } else {
            encode_full_into(&self.current, &mut self.buf)?;
            self.primed = true;
        }
        self.flush_buf()?;
        std::mem::swap(&mut self.current, &mut self.prev);
        Ok(())
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Default for TermPresenter {
    fn default() -> Self {
        Self::new()
    }
}

/// Encode a full-frame redraw into `out` without touching stdout.
pub fn encode_full_into(grid: &CellGrid, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    out.queue(cursor::MoveTo(0, 0))?;

    let mut style: Option<Cell> = None;
    for y in 0..CellGrid::HEIGHT {
        for x in 0..CellGrid::WIDTH {
            let cell = grid.get(x, y);
            if style != Some(cell) {
                apply_style_into(out, cell)?;
                style = Some(cell);
            }
            out.queue(Print('▀'))?;
        }
        if y + 1 < CellGrid::HEIGHT {
            out.queue(Print("\r\n"))?;
        }
    }

    out.queue(ResetColor)?;
    Ok(())
}

/// Encode only the changed cell runs into `out`.
pub fn encode_diff_into(prev: &CellGrid, next: &CellGrid, out: &mut Vec<u8>) -> Result<()> {
    let mut style: Option<Cell> = None;

    for_each_changed_run(prev, next, |x, y, len| {
        out.queue(cursor::MoveTo(x as u16, y as u16))?;
        for dx in 0..len {
            let cell = next.get(x + dx, y);
            if style != Some(cell) {
                apply_style_into(out, cell)?;
                style = Some(cell);
            }
            out.queue(Print('▀'))?;
        }
        Ok(())
    })?;

    out.queue(ResetColor)?;
    Ok(())
}

fn apply_style_into(out: &mut Vec<u8>, cell: Cell) -> Result<()> {
    out.queue(SetForegroundColor(palette_color(cell.upper)))?;
    out.queue(SetBackgroundColor(palette_color(cell.lower)))?;
    Ok(())
}

fn palette_color(index: u8) -> Color {
    let rgb = PALETTE[(index & 0xF) as usize];
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

fn for_each_changed_run(
    prev: &CellGrid,
    next: &CellGrid,
    mut f: impl FnMut(i32, i32, i32) -> Result<()>,
) -> Result<()> {
    for y in 0..CellGrid::HEIGHT {
        let mut x = 0;
        while x < CellGrid::WIDTH {
            if prev.get(x, y) == next.get(x, y) {
                x += 1;
                continue;
            }

            let start = x;
            x += 1;
            while x < CellGrid::WIDTH && prev.get(x, y) != next.get(x, y) {
                x += 1;
            }
            f(start, y, x - start)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tui_frogger_gfx::FrameBuffer;

    #[test]
    fn test_changed_run_coalesces_adjacent_cells() {
        let a = CellGrid::new();
        let mut fb = FrameBuffer::screen();
        for x in 4..=9 {
            fb.set_pixel(x, 0, 5);
        }
        let mut b = CellGrid::new();
        b.load(&fb);

        let mut runs = Vec::new();
        for_each_changed_run(&a, &b, |x, y, len| {
            runs.push((x, y, len));
            Ok(())
        })
        .unwrap();
        assert_eq!(runs, vec![(4, 0, 6)]);
    }

    #[test]
    fn test_identical_grids_encode_nothing_but_reset() {
        let a = CellGrid::new();
        let b = CellGrid::new();
        let mut out = Vec::new();
        encode_diff_into(&a, &b, &mut out).unwrap();
        // Only the trailing colour reset.
        let mut reset_only = Vec::new();
        reset_only.queue(ResetColor).unwrap();
        assert_eq!(out, reset_only);
    }

    #[test]
    fn test_full_encode_emits_every_cell() {
        let grid = CellGrid::new();
        let mut out = Vec::new();
        encode_full_into(&grid, &mut out).unwrap();
        // One half-block glyph (3 bytes UTF-8) per cell, at minimum.
        let glyphs = out.windows(3).filter(|w| *w == "▀".as_bytes()).count();
        assert_eq!(glyphs, (CellGrid::WIDTH * CellGrid::HEIGHT) as usize);
    }
}
