//! Terminal input module.
//!
//! Independent of any rendering code. It maps `crossterm` key events into
//! [`crate::types::PlayerAction`] and tracks the board cursor those actions move.

pub mod cursor;
pub mod map;

pub use sheep_crush_types as types;

pub use cursor::Cursor;
pub use map::{handle_key_event, should_quit};
