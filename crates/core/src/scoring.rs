//! Scoring module - per-step points for a resolution cascade
//!
//! Each resolution step scores on its own:
//!
//! `10 * cleared + 50 * specials triggered + 25 * max(0, depth - 1)`
//!
//! where `depth` is 1 for the first step of a move. Totals saturate rather
//! than wrap.

use crate::types::{CASCADE_BONUS_POINTS, SPECIAL_TRIGGER_POINTS, TILE_POINTS};

/// Score calculation result for one step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StepScore {
    /// Points for the cleared tiles.
    pub tile_points: u32,
    /// Flat bonus for every special that fired.
    pub special_points: u32,
    /// Bonus for steps after the first.
    pub cascade_bonus: u32,
    pub total: u32,
}

/// Points for `cleared` tiles
pub fn calculate_tile_points(cleared: usize) -> u32 {
    (cleared as u32).saturating_mul(TILE_POINTS)
}

/// Points for `triggered` specials
pub fn calculate_special_points(triggered: u32) -> u32 {
    triggered.saturating_mul(SPECIAL_TRIGGER_POINTS)
}

/// Cascade bonus for a step at `depth` (1-based)
pub fn calculate_cascade_bonus(depth: u32) -> u32 {
    depth.saturating_sub(1).saturating_mul(CASCADE_BONUS_POINTS)
}

/// Calculate the complete score for one resolution step
pub fn calculate_step_score(cleared: usize, triggered: u32, depth: u32) -> StepScore {
    let tile_points = calculate_tile_points(cleared);
    let special_points = calculate_special_points(triggered);
    let cascade_bonus = calculate_cascade_bonus(depth);
    let total = tile_points
        .saturating_add(special_points)
        .saturating_add(cascade_bonus);

    StepScore {
        tile_points,
        special_points,
        cascade_bonus,
        total,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tile_points() {
        assert_eq!(calculate_tile_points(0), 0);
        assert_eq!(calculate_tile_points(3), 30);
        assert_eq!(calculate_tile_points(64), 640);
    }

    #[test]
    fn test_cascade_bonus() {
        assert_eq!(calculate_cascade_bonus(0), 0);
        assert_eq!(calculate_cascade_bonus(1), 0);
        assert_eq!(calculate_cascade_bonus(2), 25);
        assert_eq!(calculate_cascade_bonus(5), 100);
    }

    #[test]
    fn test_first_step_of_three() {
        let score = calculate_step_score(3, 0, 1);
        assert_eq!(score.tile_points, 30);
        assert_eq!(score.special_points, 0);
        assert_eq!(score.cascade_bonus, 0);
        assert_eq!(score.total, 30);
    }

    #[test]
    fn test_cascade_step_with_special() {
        // Third step: 8 tiles and one row clear
        let score = calculate_step_score(8, 1, 3);
        assert_eq!(score.tile_points, 80);
        assert_eq!(score.special_points, 50);
        assert_eq!(score.cascade_bonus, 50);
        assert_eq!(score.total, 180);
    }

    #[test]
    fn test_total_saturates() {
        let score = calculate_step_score(usize::MAX, u32::MAX, u32::MAX);
        assert_eq!(score.total, u32::MAX);
    }
}
