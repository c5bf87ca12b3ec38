//! Engine configuration.

use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::EngineError;
use crate::types::{
    CASCADE_LIMIT, DEFAULT_BOARD_SIZE, FILL_RETRY_LIMIT, KIND_COUNT, MAX_BOARD_SIZE,
    MIN_BOARD_SIZE, MIN_KIND_COUNT,
};

/// Engine configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Board side length
    pub size: u8,
    /// Number of base kinds in play (the first `kind_count` of `TileKind::ALL`)
    pub kind_count: u8,
    /// RNG seed; `None` derives one from the system clock
    pub seed: Option<u32>,
    /// Maximum resolution steps per move
    pub cascade_limit: u32,
    /// Random redraws per cell before falling back to a kind scan
    pub fill_retries: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_BOARD_SIZE,
            kind_count: KIND_COUNT,
            seed: None,
            cascade_limit: CASCADE_LIMIT,
            fill_retries: FILL_RETRY_LIMIT,
        }
    }
}

impl EngineConfig {
    /// Create from environment variables
    ///
    /// - `SHEEP_CRUSH_SIZE`: board side length (default 8)
    /// - `SHEEP_CRUSH_KINDS`: kinds in play (default 5)
    /// - `SHEEP_CRUSH_SEED`: RNG seed (default: system clock)
    /// - `SHEEP_CRUSH_CASCADE_LIMIT`: steps per move (default 20)
    /// - `SHEEP_CRUSH_FILL_RETRIES`: redraws per cell (default 20)
    ///
    /// Missing or unparseable values fall back to the defaults. Range checks
    /// happen later in [`EngineConfig::validate`].
    pub fn from_env() -> Self {
        use std::env;

        let defaults = Self::default();

        let size = env::var("SHEEP_CRUSH_SIZE")
            .ok()
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.size);

        let kind_count = env::var("SHEEP_CRUSH_KINDS")
            .ok()
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.kind_count);

        let seed = env::var("SHEEP_CRUSH_SEED")
            .ok()
            .and_then(|s| s.trim().parse().ok());

        let cascade_limit = env::var("SHEEP_CRUSH_CASCADE_LIMIT")
            .ok()
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.cascade_limit);

        let fill_retries = env::var("SHEEP_CRUSH_FILL_RETRIES")
            .ok()
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.fill_retries);

        Self {
            size,
            kind_count,
            seed,
            cascade_limit,
            fill_retries,
        }
    }

    pub fn with_size(mut self, size: u8) -> Self {
        self.size = size;
        self
    }

    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_kind_count(mut self, kind_count: u8) -> Self {
        self.kind_count = kind_count;
        self
    }

    pub fn validate(&self) -> Result<(), EngineError> {
        validate_size(self.size)?;
        if !(MIN_KIND_COUNT..=KIND_COUNT).contains(&self.kind_count) {
            return Err(EngineError::InvalidKindCount {
                count: self.kind_count,
                min: MIN_KIND_COUNT,
                max: KIND_COUNT,
            });
        }
        Ok(())
    }

    /// The configured seed, or one derived from the system clock
    pub fn resolved_seed(&self) -> u32 {
        self.seed.unwrap_or_else(clock_seed)
    }
}

pub fn validate_size(size: u8) -> Result<(), EngineError> {
    if (MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size) {
        Ok(())
    } else {
        Err(EngineError::InvalidSize {
            size,
            min: MIN_BOARD_SIZE,
            max: MAX_BOARD_SIZE,
        })
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ (d.as_secs() as u32))
        .unwrap_or(1)
}
