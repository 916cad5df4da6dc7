//! LifeView: maps the simulator state into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use tui_life_core::Simulator;

use crate::fb::{FrameBuffer, GlyphStyle, Rgb};

/// Glyph used for a live cell.
pub const ALIVE_CH: char = '█';
/// Glyph used for a dead cell.
pub const DEAD_CH: char = ' ';

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

/// Frame-local driver state shown in the status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hud {
    pub paused: bool,
    pub step_ms: u64,
}

/// Renders the committed grid, a border, and a status line.
///
/// The grid is centered in the viewport; when the terminal is smaller than
/// the torus, the top-left window of the grid that fits is shown. The
/// simulation itself is never resized.
pub struct LifeView {
    alive: GlyphStyle,
    dead: GlyphStyle,
    border: GlyphStyle,
    status: GlyphStyle,
}

impl Default for LifeView {
    fn default() -> Self {
        Self {
            alive: GlyphStyle {
                fg: Rgb::new(120, 220, 120),
                bg: Rgb::new(0, 0, 0),
                bold: true,
            },
            dead: GlyphStyle::default(),
            border: GlyphStyle {
                fg: Rgb::new(130, 130, 140),
                bg: Rgb::new(0, 0, 0),
                bold: false,
            },
            status: GlyphStyle {
                fg: Rgb::new(170, 170, 180),
                bg: Rgb::new(0, 0, 0),
                bold: false,
            },
        }
    }
}

impl LifeView {
    /// Render one full frame into `fb`, resizing it to the viewport.
    pub fn render_into(&self, sim: &Simulator, viewport: Viewport, hud: Hud, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(self.dead.glyph(DEAD_CH));

        if viewport.width == 0 || viewport.height == 0 {
            return;
        }

        // The bottom row belongs to the status line.
        let body_h = viewport.height - 1;

        let grid = sim.current_state();
        let grid_w = grid.width().min(u16::MAX as usize) as u16;
        let grid_h = grid.height().min(u16::MAX as usize) as u16;

        // Visible window of the torus, leaving room for the border.
        let vis_w = grid_w.min(viewport.width.saturating_sub(2));
        let vis_h = grid_h.min(body_h.saturating_sub(2));

        if vis_w > 0 && vis_h > 0 {
            let frame_w = vis_w + 2;
            let frame_h = vis_h + 2;
            let start_x = viewport.width.saturating_sub(frame_w) / 2;
            let start_y = body_h.saturating_sub(frame_h) / 2;

            self.draw_border(fb, start_x, start_y, frame_w, frame_h);

            for vy in 0..vis_h {
                for vx in 0..vis_w {
                    let state = grid.get(vx as usize, vy as usize);
                    let glyph = if state.is_alive() {
                        self.alive.glyph(ALIVE_CH)
                    } else {
                        self.dead.glyph(DEAD_CH)
                    };
                    fb.set(start_x + 1 + vx, start_y + 1 + vy, glyph);
                }
            }
        }

        let tag = if hud.paused { "  [paused]" } else { "" };
        let status = format!(
            "gen {}  pop {}  {} ms{}  space pause  +/- speed  r reseed  q quit",
            sim.generation(),
            grid.population(),
            hud.step_ms,
            tag,
        );
        fb.put_str(0, viewport.height - 1, &status, self.status);
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
        let right = x + w - 1;
        let bottom = y + h - 1;

        fb.put_char(x, y, '┌', self.border);
        fb.put_char(right, y, '┐', self.border);
        fb.put_char(x, bottom, '└', self.border);
        fb.put_char(right, bottom, '┘', self.border);

        for bx in (x + 1)..right {
            fb.put_char(bx, y, '─', self.border);
            fb.put_char(bx, bottom, '─', self.border);
        }
        for by in (y + 1)..bottom {
            fb.put_char(x, by, '│', self.border);
            fb.put_char(right, by, '│', self.border);
        }
    }
}
