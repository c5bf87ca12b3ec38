//! Terminal rendering for the match engine.
//!
//! A small, game-oriented rendering layer: the board view draws a
//! [`GameSnapshot`](crate::core::GameSnapshot) into a framebuffer, and the
//! renderer flushes framebuffer diffs to the terminal. No widget toolkit.
//!
//! Each board cell is drawn 2 columns wide so cells look roughly square.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use sheep_crush_core as core;
pub use sheep_crush_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{kind_color, tile_glyphs, AnchorY, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
