//! Key mapping from terminal events to player actions.

use crate::types::PlayerAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to player actions.
pub fn handle_key_event(key: KeyEvent) -> Option<PlayerAction> {
    match key.code {
        // Cursor
        KeyCode::Left
        | KeyCode::Char('h')
        | KeyCode::Char('H')
        | KeyCode::Char('a')
        | KeyCode::Char('A') => Some(PlayerAction::CursorLeft),
        KeyCode::Right
        | KeyCode::Char('l')
        | KeyCode::Char('L')
        | KeyCode::Char('d')
        | KeyCode::Char('D') => Some(PlayerAction::CursorRight),
        KeyCode::Up
        | KeyCode::Char('k')
        | KeyCode::Char('K')
        | KeyCode::Char('w')
        | KeyCode::Char('W') => Some(PlayerAction::CursorUp),
        KeyCode::Down
        | KeyCode::Char('j')
        | KeyCode::Char('J')
        | KeyCode::Char('s')
        | KeyCode::Char('S') => Some(PlayerAction::CursorDown),

        // Tap / cancel
        KeyCode::Char(' ') | KeyCode::Enter => Some(PlayerAction::Select),
        KeyCode::Esc | KeyCode::Backspace => Some(PlayerAction::Cancel),

        // New board
        KeyCode::Char('r') | KeyCode::Char('R') => Some(PlayerAction::Reset),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
