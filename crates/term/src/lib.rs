//! Terminal rendering module.
//!
//! A small, game-oriented rendering layer for the terminal. It avoids TUI
//! widget frameworks and instead renders into a plain framebuffer that is
//! diffed and flushed to the terminal backend.
//!
//! Goals:
//! - Keep `core` deterministic and testable (the view is pure)
//! - Redraw only what changed between frames
//! - Restore the terminal cleanly on every exit path

pub mod fb;
pub mod renderer;
pub mod view;

pub use tui_life_core as core;
pub use tui_life_types as types;

pub use fb::{FrameBuffer, Glyph, GlyphStyle, Rgb};
pub use renderer::{for_each_changed_run, TerminalRenderer};
pub use view::{Hud, LifeView, Viewport, ALIVE_CH, DEAD_CH};
