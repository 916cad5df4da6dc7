//! TerminalRenderer: flushes a framebuffer to a real terminal.
//!
//! This module intentionally keeps the drawing API small: a full redraw on
//! the first frame and after [`TerminalRenderer::invalidate`], coalesced
//! diff runs otherwise.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::fb::{FrameBuffer, Glyph, Rgb};

pub struct TerminalRenderer {
    stdout: io::Stdout,
    last: Option<FrameBuffer>,
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            last: None,
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.stdout.queue(terminal::EnterAlternateScreen)?;
        self.stdout.queue(cursor::Hide)?;
        self.stdout.queue(terminal::DisableLineWrap)?;
        self.stdout.flush()?;
        Ok(())
    }

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

    /// Force the next draw to be a full redraw.
    ///
    /// Useful on terminal resize events.
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    /// Draw a framebuffer, swapping it into internal state.
    ///
    /// Callers keep one `FrameBuffer` and pass it in every frame. The
    /// renderer diffs against the previous frame, flushes only the changed
    /// runs, and hands the old allocation back through the same reference so
    /// nothing is cloned per frame.
    pub fn draw_swap(&mut self, fb: &mut FrameBuffer) -> Result<()> {
        match self.last.take() {
            Some(mut prev) if prev.width() == fb.width() && prev.height() == fb.height() => {
                self.diff_redraw(fb, &prev)?;
                std::mem::swap(fb, &mut prev);
                self.last = Some(prev);
            }
            _ => {
                self.full_redraw(fb)?;
                self.last = Some(fb.clone());
            }
        }
        self.stdout.flush()?;
        Ok(())
    }

    fn full_redraw(&mut self, fb: &FrameBuffer) -> Result<()> {
        self.stdout.queue(terminal::Clear(terminal::ClearType::All))?;
        for y in 0..fb.height() {
            self.stdout.queue(cursor::MoveTo(0, y))?;
            for x in 0..fb.width() {
                if let Some(glyph) = fb.get(x, y) {
                    queue_glyph(&mut self.stdout, glyph)?;
                }
            }
        }
        Ok(())
    }

    fn diff_redraw(&mut self, next: &FrameBuffer, prev: &FrameBuffer) -> Result<()> {
        let stdout = &mut self.stdout;
        for_each_changed_run(prev, next, |x, y, len| {
            stdout.queue(cursor::MoveTo(x, y))?;
            for i in 0..len {
                if let Some(glyph) = next.get(x + i, y) {
                    queue_glyph(stdout, glyph)?;
                }
            }
            Ok(())
        })?;
        Ok(())
    }
}

fn rgb_to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

fn queue_glyph(out: &mut io::Stdout, glyph: Glyph) -> io::Result<()> {
    out.queue(SetForegroundColor(rgb_to_color(glyph.style.fg)))?;
    out.queue(SetBackgroundColor(rgb_to_color(glyph.style.bg)))?;
    let weight = if glyph.style.bold {
        Attribute::Bold
    } else {
        Attribute::NormalIntensity
    };
    out.queue(SetAttribute(weight))?;
    out.queue(Print(glyph.ch))?;
    Ok(())
}

/// Walk the cells that differ between two same-size frames, coalescing
/// horizontally adjacent changes into `(x, y, len)` runs.
pub fn for_each_changed_run<F>(prev: &FrameBuffer, next: &FrameBuffer, mut f: F) -> io::Result<()>
where
    F: FnMut(u16, u16, u16) -> io::Result<()>,
{
    let (w, h) = (next.width(), next.height());
    for y in 0..h {
        let mut x = 0;
        while x < w {
            if prev.get(x, y) == next.get(x, y) {
                x += 1;
                continue;
            }
            let start = x;
            x += 1;
            while x < w && prev.get(x, y) != next.get(x, y) {
                x += 1;
            }
            f(start, y, x - start)?;
        }
    }
    Ok(())
}
