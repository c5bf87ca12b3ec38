//! Core types module - shared data structures and rule constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are plain data with no game logic, making them usable in any
//! context (engine, terminal rendering, snapshot export).
//!
//! # Board Dimensions
//!
//! The board is always square:
//!
//! - **Default size**: 8x8
//! - **Supported sizes**: 5..=16 per side
//! - **Addressing**: `(row, col)` or flattened index `row * size + col`
//!
//! # Rule Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `MIN_MATCH_LEN` | 3 | Shortest run that counts as a match |
//! | `FILL_RETRY_LIMIT` | 20 | Redraws before falling back to a kind scan |
//! | `CASCADE_LIMIT` | 20 | Maximum resolution steps per move |
//! | `TILE_POINTS` | 10 | Points per cleared tile |
//! | `SPECIAL_TRIGGER_POINTS` | 50 | Points per special triggered in a step |
//! | `CASCADE_BONUS_POINTS` | 25 | Points per cascade level beyond the first step |
//!
//! # Examples
//!
//! ```
//! use sheep_crush_types::{PlayerAction, Tile, TileKind, SpecialKind, DEFAULT_BOARD_SIZE};
//!
//! let tile = Tile::plain(TileKind::SheepSky);
//! assert!(!tile.is_empty());
//! assert_eq!(tile.special, None);
//!
//! let special = tile.with_special(SpecialKind::Blast);
//! assert_eq!(special.kind, Some(TileKind::SheepSky));
//!
//! // Parse kinds and actions from strings (case-insensitive)
//! assert_eq!(TileKind::from_str("sheep-rust"), Some(TileKind::SheepRust));
//! assert_eq!(PlayerAction::from_str("select"), Some(PlayerAction::Select));
//!
//! assert_eq!(DEFAULT_BOARD_SIZE, 8);
//! ```

use serde::{Deserialize, Serialize};

/// Default board side length (8x8)
pub const DEFAULT_BOARD_SIZE: u8 = 8;

/// Smallest supported board side length
pub const MIN_BOARD_SIZE: u8 = 5;

/// Largest supported board side length
pub const MAX_BOARD_SIZE: u8 = 16;

/// Maximum number of cells on any supported board
pub const MAX_CELLS: usize = (MAX_BOARD_SIZE as usize) * (MAX_BOARD_SIZE as usize);

/// Shortest run of identical kinds that counts as a match
pub const MIN_MATCH_LEN: usize = 3;

/// Random redraws per cell before the fill falls back to scanning kinds in order
pub const FILL_RETRY_LIMIT: u32 = 20;

/// Maximum resolution steps for a single move
pub const CASCADE_LIMIT: u32 = 20;

/// Points per cleared tile
pub const TILE_POINTS: u32 = 10;

/// Points per special tile triggered within a step
pub const SPECIAL_TRIGGER_POINTS: u32 = 50;

/// Points per cascade level beyond the first step of a move
pub const CASCADE_BONUS_POINTS: u32 = 25;

/// Fewest kinds that still guarantee a match-free fill
pub const MIN_KIND_COUNT: u8 = 3;

/// Number of base tile kinds
pub const KIND_COUNT: u8 = 5;

/// The five base tile kinds
///
/// Kinds are interchangeable symbols; kind equality is the only thing that
/// makes two tiles match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TileKind {
    SheepCream,
    SheepOlive,
    SheepRust,
    SheepSky,
    SheepDark,
}

impl TileKind {
    /// All kinds in draw order
    pub const ALL: [TileKind; KIND_COUNT as usize] = [
        TileKind::SheepCream,
        TileKind::SheepOlive,
        TileKind::SheepRust,
        TileKind::SheepSky,
        TileKind::SheepDark,
    ];

    /// Position of this kind in [`TileKind::ALL`]
    pub fn index(&self) -> usize {
        match self {
            TileKind::SheepCream => 0,
            TileKind::SheepOlive => 1,
            TileKind::SheepRust => 2,
            TileKind::SheepSky => 3,
            TileKind::SheepDark => 4,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Parse kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use sheep_crush_types::TileKind;
    ///
    /// assert_eq!(TileKind::from_str("Sheep-Cream"), Some(TileKind::SheepCream));
    /// assert_eq!(TileKind::from_str("sheep-dark"), Some(TileKind::SheepDark));
    /// assert_eq!(TileKind::from_str("bell"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "sheep-cream" => Some(TileKind::SheepCream),
            "sheep-olive" => Some(TileKind::SheepOlive),
            "sheep-rust" => Some(TileKind::SheepRust),
            "sheep-sky" => Some(TileKind::SheepSky),
            "sheep-dark" => Some(TileKind::SheepDark),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TileKind::SheepCream => "sheep-cream",
            TileKind::SheepOlive => "sheep-olive",
            TileKind::SheepRust => "sheep-rust",
            TileKind::SheepSky => "sheep-sky",
            TileKind::SheepDark => "sheep-dark",
        }
    }
}

/// Area-of-effect behaviour carried by a special tile
///
/// - **RowClear**: clears its whole row
/// - **ColumnClear**: clears its whole column
/// - **Blast**: clears the 3x3 neighbourhood around it
/// - **Wildcard**: clears every tile of a target kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SpecialKind {
    RowClear,
    ColumnClear,
    Blast,
    Wildcard,
}

impl SpecialKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SpecialKind::RowClear => "row-clear",
            SpecialKind::ColumnClear => "column-clear",
            SpecialKind::Blast => "blast",
            SpecialKind::Wildcard => "wildcard",
        }
    }
}

/// A single board cell
///
/// `kind == None` marks an empty cell. Empty cells only exist between the
/// clear and refill phases of a resolution step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Tile {
    pub kind: Option<TileKind>,
    pub special: Option<SpecialKind>,
}

impl Tile {
    pub const EMPTY: Tile = Tile {
        kind: None,
        special: None,
    };

    pub const fn plain(kind: TileKind) -> Self {
        Self {
            kind: Some(kind),
            special: None,
        }
    }

    /// Same kind, carrying `special`
    pub const fn with_special(self, special: SpecialKind) -> Self {
        Self {
            kind: self.kind,
            special: Some(special),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.kind.is_none()
    }

    pub fn is_special(&self) -> bool {
        self.special.is_some()
    }

    pub fn is_wildcard(&self) -> bool {
        self.special == Some(SpecialKind::Wildcard)
    }
}

/// Result of a swap attempt
///
/// - **Accepted**: the swap was committed and resolved
/// - **Rejected**: a legal attempt that produced no match (board reverted)
/// - **Ignored**: caller error (busy, out of range, identical or non-adjacent indices)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SwapOutcome {
    Accepted,
    Rejected,
    Ignored,
}

impl SwapOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            SwapOutcome::Accepted => "accepted",
            SwapOutcome::Rejected => "rejected",
            SwapOutcome::Ignored => "ignored",
        }
    }
}

/// Orientation of a detected match group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Row,
    Column,
    /// Union of a row run and a column run of the same kind that cross (L/T/+)
    Shape,
}

/// Engine phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// Accepting input
    #[default]
    Idle,
    /// A swap was accepted and the cascade has not settled yet
    Resolving,
}

/// Player intents produced by an input layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerAction {
    /// Move the board cursor one cell up
    CursorUp,
    /// Move the board cursor one cell down
    CursorDown,
    /// Move the board cursor one cell left
    CursorLeft,
    /// Move the board cursor one cell right
    CursorRight,
    /// Tap the tile under the cursor
    Select,
    /// Drop the pending selection
    Cancel,
    /// Start a fresh board
    Reset,
}

impl PlayerAction {
    /// Parse action from string
    ///
    /// # Examples
    ///
    /// ```
    /// use sheep_crush_types::PlayerAction;
    ///
    /// assert_eq!(PlayerAction::from_str("cursorLeft"), Some(PlayerAction::CursorLeft));
    /// assert_eq!(PlayerAction::from_str("RESET"), Some(PlayerAction::Reset));
    /// assert_eq!(PlayerAction::from_str("hardDrop"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "cursorup" => Some(PlayerAction::CursorUp),
            "cursordown" => Some(PlayerAction::CursorDown),
            "cursorleft" => Some(PlayerAction::CursorLeft),
            "cursorright" => Some(PlayerAction::CursorRight),
            "select" => Some(PlayerAction::Select),
            "cancel" => Some(PlayerAction::Cancel),
            "reset" => Some(PlayerAction::Reset),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            PlayerAction::CursorUp => "cursorUp",
            PlayerAction::CursorDown => "cursorDown",
            PlayerAction::CursorLeft => "cursorLeft",
            PlayerAction::CursorRight => "cursorRight",
            PlayerAction::Select => "select",
            PlayerAction::Cancel => "cancel",
            PlayerAction::Reset => "reset",
        }
    }
}
