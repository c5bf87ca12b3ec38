use serde::{Deserialize, Serialize};

use crate::types::{SpecialKind, Tile, DEFAULT_BOARD_SIZE};

/// Summary of one resolved move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MoveSummary {
    /// Resolution steps that cleared tiles
    pub steps: u32,
    pub points: u32,
    pub tiles_cleared: u32,
    pub specials_triggered: u32,
    pub special_created: Option<SpecialKind>,
    /// The cascade limit stopped resolution early
    pub capped: bool,
}

/// Read-only copy of the engine state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub size: u8,
    /// Row-major tiles, `size * size` long
    pub tiles: Vec<Tile>,
    pub score: u32,
    /// A move is still resolving
    pub busy: bool,
    pub selected: Option<usize>,
    pub cascade_depth: u32,
    pub moves: u32,
    pub episode_id: u32,
    pub seed: u32,
    pub last_move: Option<MoveSummary>,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.size = DEFAULT_BOARD_SIZE;
        self.tiles.clear();
        self.score = 0;
        self.busy = false;
        self.selected = None;
        self.cascade_depth = 0;
        self.moves = 0;
        self.episode_id = 0;
        self.seed = 0;
        self.last_move = None;
    }

    /// Tile at (row, col), if on the board
    pub fn tile(&self, row: u8, col: u8) -> Option<Tile> {
        if row >= self.size || col >= self.size {
            return None;
        }
        let index = (row as usize) * (self.size as usize) + (col as usize);
        self.tiles.get(index).copied()
    }

    pub fn accepts_input(&self) -> bool {
        !self.busy
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        let mut s = Self {
            size: DEFAULT_BOARD_SIZE,
            tiles: Vec::new(),
            score: 0,
            busy: false,
            selected: None,
            cascade_depth: 0,
            moves: 0,
            episode_id: 0,
            seed: 0,
            last_move: None,
        };
        s.clear();
        s
    }
}
