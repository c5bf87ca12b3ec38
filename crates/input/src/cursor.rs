//! Board cursor driven by the cursor actions.

use crate::types::PlayerAction;

/// Cursor position on a square board; clamps at the edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    row: u8,
    col: u8,
    size: u8,
}

impl Cursor {
    /// Start in the top-left cell of a `size` x `size` board.
    pub fn new(size: u8) -> Self {
        Self {
            row: 0,
            col: 0,
            size: size.max(1),
        }
    }

    pub fn row(&self) -> u8 {
        self.row
    }

    pub fn col(&self) -> u8 {
        self.col
    }

    /// Flattened board index under the cursor.
    pub fn index(&self) -> usize {
        (self.row as usize) * (self.size as usize) + (self.col as usize)
    }

    /// Move for a cursor action. Returns true if the position changed.
    /// Non-cursor actions are ignored.
    pub fn apply(&mut self, action: PlayerAction) -> bool {
        let (row, col) = (self.row, self.col);
        let last = self.size - 1;
        match action {
            PlayerAction::CursorUp => self.row = self.row.saturating_sub(1),
            PlayerAction::CursorDown => self.row = (self.row + 1).min(last),
            PlayerAction::CursorLeft => self.col = self.col.saturating_sub(1),
            PlayerAction::CursorRight => self.col = (self.col + 1).min(last),
            _ => return false,
        }
        (row, col) != (self.row, self.col)
    }
}
