//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the match-3 rules and the resolution engine.
//! It has **no dependencies** on terminals or I/O, making it:
//!
//! - **Deterministic**: the same seed (or injected RNG) replays the same game
//! - **Testable**: fixtures can start from any board
//! - **Portable**: can drive a terminal, a GUI or a headless harness
//!
//! # Module Structure
//!
//! - [`board`]: square tile grid, gravity and refill
//! - [`matcher`]: row, column and shape match detection
//! - [`special`]: special creation, wildcard combos and expansion
//! - [`game_state`]: swap validation, selection and the cascade controller
//! - [`scoring`]: per-step score calculation
//! - [`rng`]: seedable tile sources
//! - [`config`]: engine configuration (defaults and environment)
//! - [`snapshot`]: read-only state copies for rendering layers
//!
//! # Game Rules
//!
//! - **Swaps**: two orthogonally adjacent tiles; kept only if they make a match
//!   (or pair a wildcard with another special)
//! - **Matches**: runs of three or more of one kind, plus L/T/+ shapes where
//!   runs of one kind cross
//! - **Specials**: row of 4 → row clear, column of 4 → column clear,
//!   run of 5 → wildcard, shape → blast
//! - **Cascades**: cleared cells fall and refill until no match remains
//!
//! # Example
//!
//! ```
//! use sheep_crush_core::GameState;
//! use sheep_crush_core::types::SwapOutcome;
//!
//! let mut game = GameState::new_game(8, Some(12345)).unwrap();
//! let state = game.current_state();
//! assert_eq!(state.tiles.len(), 64);
//! assert!(!state.busy);
//!
//! // Non-adjacent cells are never swapped
//! let result = game.try_swap(0, 63);
//! assert_eq!(result.outcome, SwapOutcome::Ignored);
//! assert_eq!(result.state, state);
//! ```

pub mod board;
pub mod cell_set;
pub mod config;
pub mod error;
pub mod game_state;
pub mod matcher;
pub mod rng;
pub mod scoring;
pub mod snapshot;
pub mod special;

pub use sheep_crush_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use cell_set::CellSet;
pub use config::EngineConfig;
pub use error::EngineError;
pub use game_state::{CreatedSpecial, GameState, SelectOutcome, StepReport, SwapResult};
pub use matcher::{find_matches, MatchGroup, Matches};
pub use rng::{SequenceRng, SimpleRng, TileRng};
pub use scoring::{calculate_step_score, StepScore};
pub use snapshot::{GameSnapshot, MoveSummary};
pub use special::SwapContext;
