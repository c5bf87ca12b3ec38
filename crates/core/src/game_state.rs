//! Game state module - the match engine
//!
//! Ties together the board, match detection, specials, scoring and the RNG.
//! A move goes `Idle -> Resolving -> Idle`:
//!
//! 1. [`GameState::begin_swap`] validates and commits a swap.
//! 2. [`GameState::step`] runs one resolution step (detect, create/expand
//!    specials, score, clear, gravity, refill) until the board settles.
//!
//! [`GameState::try_swap`] does both in one call. Swaps attempted while a
//! move is resolving are ignored.

use log::{debug, trace, warn};

use crate::board::Board;
use crate::cell_set::CellSet;
use crate::config::EngineConfig;
use crate::error::EngineError;
use crate::matcher::find_matches;
use crate::rng::{SimpleRng, TileRng};
use crate::scoring::{calculate_step_score, StepScore};
use crate::snapshot::{GameSnapshot, MoveSummary};
use crate::special::{self, SwapContext};
use crate::types::{Phase, SpecialKind, SwapOutcome};

/// A special created during a step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CreatedSpecial {
    pub index: usize,
    pub special: SpecialKind,
}

/// What one resolution step did
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepReport {
    /// 1 for the first step of a move
    pub depth: u32,
    pub cleared: CellSet,
    pub specials_triggered: u32,
    pub special_created: Option<CreatedSpecial>,
    pub score: StepScore,
    /// Game score after this step
    pub total_score: u32,
    /// Tiles moved by gravity
    pub fallen: usize,
    /// Cells refilled with fresh tiles
    pub refilled: usize,
}

/// Result of [`GameState::try_swap`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwapResult {
    pub outcome: SwapOutcome,
    /// Every resolution step of the move, empty unless accepted
    pub steps: Vec<StepReport>,
    pub state: GameSnapshot,
}

/// Result of tapping a tile
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectOutcome {
    /// Busy or out of range
    Ignored,
    /// The tile is now the pending selection
    Selected(usize),
    /// The pending tile was tapped again
    Deselected,
    /// Tapped next to the pending tile; the swap was attempted and resolved
    Swapped(SwapResult),
    /// Like `Swapped`, but only begun (see [`GameState::select_deferred`])
    Began(SwapOutcome),
}

enum Tap {
    Ignored,
    Selected(usize),
    Deselected,
    Swap(usize, usize),
}

/// Complete engine state
#[derive(Debug, Clone)]
pub struct GameState<R: TileRng = SimpleRng> {
    config: EngineConfig,
    board: Board,
    rng: R,
    /// Seed reported in snapshots.
    seed: u32,
    score: u32,
    phase: Phase,
    selected: Option<usize>,
    /// Swap of the move in progress, consumed by its first step.
    pending_swap: Option<SwapContext>,
    /// Steps run by the current (or last) move.
    cascade_depth: u32,
    /// Accepted swaps this episode.
    moves: u32,
    /// Monotonic episode id (increments on reset).
    episode_id: u32,
    current_move: MoveSummary,
    last_move: Option<MoveSummary>,
}

impl GameState<SimpleRng> {
    /// Start a new game on a `size` x `size` board
    ///
    /// Without a seed one is derived from the system clock.
    pub fn new_game(size: u8, seed: Option<u32>) -> Result<Self, EngineError> {
        let config = EngineConfig {
            size,
            seed,
            ..EngineConfig::default()
        };
        Self::with_config(config)
    }

    pub fn with_config(config: EngineConfig) -> Result<Self, EngineError> {
        let seed = config.resolved_seed();
        let config = EngineConfig {
            seed: Some(seed),
            ..config
        };
        Self::with_rng(config, SimpleRng::new(seed))
    }
}

impl<R: TileRng> GameState<R> {
    /// Start a new game drawing every tile from `rng`
    pub fn with_rng(config: EngineConfig, mut rng: R) -> Result<Self, EngineError> {
        config.validate()?;
        let board = Board::generate(config.size, config.kind_count, config.fill_retries, &mut rng)?;
        Self::from_board(board, config, rng)
    }

    /// Resume from an existing board (fixtures, replays)
    ///
    /// The board is taken as is; the configured size is replaced by the
    /// board's own size.
    pub fn from_board(board: Board, config: EngineConfig, rng: R) -> Result<Self, EngineError> {
        let config = EngineConfig {
            size: board.size(),
            ..config
        };
        config.validate()?;
        let seed = config.seed.unwrap_or(0);
        debug!(
            "new game: size={} kinds={} seed={}",
            config.size, config.kind_count, seed
        );

        Ok(Self {
            config,
            board,
            rng,
            seed,
            score: 0,
            phase: Phase::Idle,
            selected: None,
            pending_swap: None,
            cascade_depth: 0,
            moves: 0,
            episode_id: 0,
            current_move: MoveSummary::default(),
            last_move: None,
        })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn size(&self) -> u8 {
        self.board.size()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// A move is resolving; swaps are ignored until it settles
    pub fn busy(&self) -> bool {
        self.phase == Phase::Resolving
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn cascade_depth(&self) -> u32 {
        self.cascade_depth
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    pub fn last_move(&self) -> Option<MoveSummary> {
        self.last_move
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.size = self.board.size();
        out.tiles.clear();
        out.tiles.extend_from_slice(self.board.tiles());
        out.score = self.score;
        out.busy = self.busy();
        out.selected = self.selected;
        out.cascade_depth = self.cascade_depth;
        out.moves = self.moves;
        out.episode_id = self.episode_id;
        out.seed = self.seed;
        out.last_move = self.last_move;
    }

    /// Read-only copy of the current state
    pub fn current_state(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Swap two adjacent tiles and resolve the whole move
    pub fn try_swap(&mut self, a: usize, b: usize) -> SwapResult {
        let outcome = self.begin_swap(a, b);
        let mut steps = Vec::new();
        if outcome == SwapOutcome::Accepted {
            while let Some(report) = self.step() {
                steps.push(report);
            }
        }
        SwapResult {
            outcome,
            steps,
            state: self.current_state(),
        }
    }

    /// Validate and commit a swap without resolving it
    ///
    /// - `Ignored`: busy, out of range, identical or non-adjacent cells.
    ///   Nothing changes.
    /// - `Rejected`: the swap makes no match and is not a wildcard combo.
    ///   The board is restored.
    /// - `Accepted`: the engine is now resolving; drive it with [`Self::step`].
    pub fn begin_swap(&mut self, a: usize, b: usize) -> SwapOutcome {
        if self.busy() || !self.board.are_adjacent(a, b) {
            return SwapOutcome::Ignored;
        }
        self.selected = None;

        let swap = SwapContext::new(a, b);
        self.board.swap(a, b);
        if !special::is_combo(&self.board, swap) && find_matches(&self.board).is_empty() {
            self.board.swap(a, b);
            debug!("swap {} <-> {} rejected: no match", a, b);
            return SwapOutcome::Rejected;
        }

        self.phase = Phase::Resolving;
        self.pending_swap = Some(swap);
        self.cascade_depth = 0;
        self.moves = self.moves.saturating_add(1);
        self.current_move = MoveSummary::default();
        debug!("swap {} <-> {} accepted (move {})", a, b, self.moves);
        SwapOutcome::Accepted
    }

    /// Run one resolution step
    ///
    /// Returns `None` once the board has settled (the engine is idle again),
    /// or when the cascade limit stops the move.
    pub fn step(&mut self) -> Option<StepReport> {
        if self.phase != Phase::Resolving {
            return None;
        }

        let swap = self.pending_swap.take();
        let matches = find_matches(&self.board);
        if swap.is_none() && matches.is_empty() {
            self.settle();
            return None;
        }
        if self.cascade_depth >= self.config.cascade_limit.max(1) {
            warn!(
                "cascade limit of {} steps reached, settling with matches on the board",
                self.config.cascade_limit
            );
            self.current_move.capped = true;
            self.settle();
            return None;
        }

        let mut created = None;
        let combo = swap.and_then(|s| special::wildcard_combo(&mut self.board, s));
        let (seed, pre_triggered, pre_count) = match combo {
            Some(combo) => {
                let mut seed = combo.cleared;
                seed.union_with(matches.cells());
                debug!("wildcard combo: {} cells seeded", seed.len());
                (seed, combo.triggered_cells, combo.triggered)
            }
            None => {
                if matches.is_empty() {
                    self.settle();
                    return None;
                }
                if let Some(s) = swap {
                    created = special::plan_special(&self.board, &matches, s);
                }
                (*matches.cells(), CellSet::new(), 0)
            }
        };

        let expansion = special::expand(
            &self.board,
            seed,
            pre_triggered,
            swap,
            self.config.kind_count,
            &mut self.rng,
        );
        let mut cleared = expansion.cleared;
        if let Some(plan) = created {
            cleared.remove(plan.anchor);
        }
        let triggered = pre_count + expansion.triggered;
        let depth = self.cascade_depth + 1;
        let score = calculate_step_score(cleared.len(), triggered, depth);

        self.board.clear_cells(&cleared);
        if let Some(plan) = created {
            self.board.set_special(plan.anchor, plan.special);
            debug!("{} created at {}", plan.special.as_str(), plan.anchor);
        }
        let fallen = self.board.apply_gravity();
        let refilled =
            self.board
                .refill(self.config.kind_count, self.config.fill_retries, &mut self.rng);

        self.cascade_depth = depth;
        self.score = self.score.saturating_add(score.total);

        let summary = &mut self.current_move;
        summary.steps = summary.steps.saturating_add(1);
        summary.points = summary.points.saturating_add(score.total);
        summary.tiles_cleared = summary.tiles_cleared.saturating_add(cleared.len() as u32);
        summary.specials_triggered = summary.specials_triggered.saturating_add(triggered);
        if let Some(plan) = created {
            summary.special_created = Some(plan.special);
        }

        trace!(
            "step {}: cleared={} triggered={} points={} fallen={} refilled={}",
            depth,
            cleared.len(),
            triggered,
            score.total,
            fallen,
            refilled
        );

        Some(StepReport {
            depth,
            cleared,
            specials_triggered: triggered,
            special_created: created.map(|plan| CreatedSpecial {
                index: plan.anchor,
                special: plan.special,
            }),
            score,
            total_score: self.score,
            fallen,
            refilled,
        })
    }

    fn settle(&mut self) {
        self.phase = Phase::Idle;
        self.pending_swap = None;
        self.last_move = Some(self.current_move);
        debug!(
            "move settled: steps={} points={} score={}",
            self.current_move.steps, self.current_move.points, self.score
        );
    }

    /// Tap a tile; an adjacent second tap swaps and resolves
    pub fn select(&mut self, index: usize) -> SelectOutcome {
        match self.tap(index) {
            Tap::Ignored => SelectOutcome::Ignored,
            Tap::Selected(i) => SelectOutcome::Selected(i),
            Tap::Deselected => SelectOutcome::Deselected,
            Tap::Swap(a, b) => SelectOutcome::Swapped(self.try_swap(a, b)),
        }
    }

    /// Tap a tile; an adjacent second tap only begins the swap
    ///
    /// Used by front ends that animate each step themselves.
    pub fn select_deferred(&mut self, index: usize) -> SelectOutcome {
        match self.tap(index) {
            Tap::Ignored => SelectOutcome::Ignored,
            Tap::Selected(i) => SelectOutcome::Selected(i),
            Tap::Deselected => SelectOutcome::Deselected,
            Tap::Swap(a, b) => SelectOutcome::Began(self.begin_swap(a, b)),
        }
    }

    fn tap(&mut self, index: usize) -> Tap {
        if self.busy() || index >= self.board.len() {
            return Tap::Ignored;
        }
        match self.selected {
            None => {
                self.selected = Some(index);
                Tap::Selected(index)
            }
            Some(pending) if pending == index => {
                self.selected = None;
                Tap::Deselected
            }
            Some(pending) if self.board.are_adjacent(pending, index) => {
                self.selected = None;
                Tap::Swap(pending, index)
            }
            Some(_) => {
                self.selected = Some(index);
                Tap::Selected(index)
            }
        }
    }

    /// Drop the pending selection
    pub fn cancel_selection(&mut self) {
        self.selected = None;
    }

    /// Start a new episode on a fresh board
    ///
    /// Allowed at any time, including mid-cascade. The RNG stream continues,
    /// so a reset board differs from the first one.
    pub fn reset(&mut self) -> Result<GameSnapshot, EngineError> {
        let board = Board::generate(
            self.board.size(),
            self.config.kind_count,
            self.config.fill_retries,
            &mut self.rng,
        )?;
        self.board = board;
        self.phase = Phase::Idle;
        self.selected = None;
        self.pending_swap = None;
        self.score = 0;
        self.cascade_depth = 0;
        self.moves = 0;
        self.current_move = MoveSummary::default();
        self.last_move = None;
        self.episode_id = self.episode_id.wrapping_add(1);
        debug!("reset: episode {}", self.episode_id);
        Ok(self.current_state())
    }
}
