//! Key mapping from terminal events to simulation control actions.

use crate::types::SimAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to simulation control actions.
pub fn action_for_key(key: KeyEvent) -> Option<SimAction> {
    match key.code {
        KeyCode::Char(' ') | KeyCode::Char('p') | KeyCode::Char('P') => {
            Some(SimAction::TogglePause)
        }

        KeyCode::Char('+') | KeyCode::Char('=') | KeyCode::Up => Some(SimAction::SpeedUp),
        KeyCode::Char('-') | KeyCode::Char('_') | KeyCode::Down => Some(SimAction::SlowDown),

        KeyCode::Char('r') | KeyCode::Char('R') => Some(SimAction::Reseed),

        _ => None,
    }
}

/// Check if the key should end the simulation.
///
/// In raw mode Ctrl+C arrives as an ordinary key event rather than a signal,
/// so it is handled here alongside the quit keys; the driver checks this
/// between steps and shuts down cleanly.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
