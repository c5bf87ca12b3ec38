//! Construction-time engine errors.
//!
//! Caller mistakes during play (busy engine, bad indices) are not errors; they
//! surface as `SwapOutcome::Ignored` / `SelectOutcome::Ignored`.

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    #[error("board size {size} is outside the supported range {min}..={max}")]
    InvalidSize { size: u8, min: u8, max: u8 },
    #[error("kind count {count} is outside the supported range {min}..={max}")]
    InvalidKindCount { count: u8, min: u8, max: u8 },
    #[error("board of size {size} needs {expected} tiles, got {found}")]
    TileCount {
        size: u8,
        expected: usize,
        found: usize,
    },
    #[error("no tile kind fits at row {row}, col {col} without completing a match")]
    Initialization { row: u8, col: u8 },
}
