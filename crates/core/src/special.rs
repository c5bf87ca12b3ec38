//! Special tiles - creation, wildcard combos and breadth-first expansion
//!
//! A move creates at most one special, on its first resolution step, at the
//! swap anchor. Specials that enter a clear set trigger exactly once and pull
//! their area of effect into the same set.
//!
//! | Special | Effect |
//! |---------|--------|
//! | `RowClear` | whole row |
//! | `ColumnClear` | whole column |
//! | `Blast` | 3x3 neighbourhood, clipped at the edges |
//! | `Wildcard` | every tile of the target kind |

use std::collections::VecDeque;

use crate::board::Board;
use crate::cell_set::CellSet;
use crate::matcher::Matches;
use crate::rng::{draw_kind, TileRng};
use crate::types::{Orientation, SpecialKind, TileKind};

/// The two cells of an accepted swap
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SwapContext {
    /// First tapped cell
    pub origin: usize,
    /// Cell the origin tile moved into
    pub destination: usize,
}

impl SwapContext {
    pub fn new(origin: usize, destination: usize) -> Self {
        Self {
            origin,
            destination,
        }
    }

    /// The other swapped cell, if `index` is one of the two
    pub fn partner_of(&self, index: usize) -> Option<usize> {
        if index == self.origin {
            Some(self.destination)
        } else if index == self.destination {
            Some(self.origin)
        } else {
            None
        }
    }
}

/// Where a new special goes and which one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpecialPlan {
    pub anchor: usize,
    pub special: SpecialKind,
}

/// Pick the special created by the first step of a move
///
/// The anchor is the swap destination if it was matched, else the origin.
/// Among the groups containing the anchor: a shape gives `Blast`, a run of
/// five or more gives `Wildcard`, a row run of four gives `RowClear` and a
/// column run of four gives `ColumnClear`. Anchors that already carry a
/// special get nothing.
pub fn plan_special(board: &Board, matches: &Matches, swap: SwapContext) -> Option<SpecialPlan> {
    let cells = matches.cells();
    let anchor = if cells.contains(swap.destination) {
        swap.destination
    } else if cells.contains(swap.origin) {
        swap.origin
    } else {
        return None;
    };

    if board.get(anchor).map_or(true, |t| t.is_special()) {
        return None;
    }

    let mut shape = false;
    let mut long_run = false;
    let mut row_four = false;
    let mut column_four = false;
    for group in matches.groups_containing(anchor) {
        match group.orientation {
            Orientation::Shape => shape = true,
            _ if group.len() >= 5 => long_run = true,
            Orientation::Row if group.len() == 4 => row_four = true,
            Orientation::Column if group.len() == 4 => column_four = true,
            _ => {}
        }
    }

    let special = if shape {
        SpecialKind::Blast
    } else if long_run {
        SpecialKind::Wildcard
    } else if row_four {
        SpecialKind::RowClear
    } else if column_four {
        SpecialKind::ColumnClear
    } else {
        return None;
    };

    Some(SpecialPlan { anchor, special })
}

/// Seed of a wildcard combo step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Combo {
    /// Cells that enter the clear set before expansion
    pub cleared: CellSet,
    /// Wildcards consumed by the combo itself; they do not trigger again
    pub triggered_cells: CellSet,
    /// Triggers already accounted for (one per consumed wildcard)
    pub triggered: u32,
}

/// True when the swapped pair is a wildcard plus any other special
pub fn is_combo(board: &Board, swap: SwapContext) -> bool {
    match (board.get(swap.origin), board.get(swap.destination)) {
        (Some(a), Some(b)) => {
            (a.is_wildcard() && b.is_special()) || (b.is_wildcard() && a.is_special())
        }
        _ => false,
    }
}

/// Apply a wildcard combo to the board, if the swapped pair forms one
///
/// - Wildcard + Wildcard: the whole board enters the clear set.
/// - Wildcard + special `S` of kind `k`: every other tile of kind `k` becomes
///   an `S` and enters the clear set with the wildcard.
pub fn wildcard_combo(board: &mut Board, swap: SwapContext) -> Option<Combo> {
    if !is_combo(board, swap) {
        return None;
    }
    let a = board.get(swap.origin)?;
    let b = board.get(swap.destination)?;

    if a.is_wildcard() && b.is_wildcard() {
        let cleared: CellSet = (0..board.len()).collect();
        let triggered_cells: CellSet = [swap.origin, swap.destination].into_iter().collect();
        return Some(Combo {
            cleared,
            triggered_cells,
            triggered: 2,
        });
    }

    let (wildcard, other) = if a.is_wildcard() {
        (swap.origin, b)
    } else {
        (swap.destination, a)
    };
    let kind = other.kind?;
    let special = other.special?;

    let promoted: Vec<usize> = board
        .indices_of_kind(kind)
        .filter(|&i| i != wildcard)
        .collect();
    let mut cleared = CellSet::new();
    for index in promoted {
        board.set_special(index, special);
        cleared.insert(index);
    }
    cleared.insert(wildcard);

    let mut triggered_cells = CellSet::new();
    triggered_cells.insert(wildcard);

    Some(Combo {
        cleared,
        triggered_cells,
        triggered: 1,
    })
}

/// Result of expanding a clear set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Expansion {
    pub cleared: CellSet,
    /// Specials triggered during this expansion
    pub triggered: u32,
}

/// Grow `seed` by triggering every special it reaches, breadth-first
///
/// Cells already in `triggered` are cleared but do not fire again. `swap` is
/// only passed on the first step of a move; it decides the target kind of a
/// wildcard that was one of the swapped tiles.
pub fn expand<R: TileRng + ?Sized>(
    board: &Board,
    seed: CellSet,
    mut triggered: CellSet,
    swap: Option<SwapContext>,
    kind_count: u8,
    rng: &mut R,
) -> Expansion {
    let mut cleared = seed;
    let mut queue: VecDeque<usize> = seed.iter().collect();
    let mut fired = 0u32;
    let mut effect = Vec::new();

    while let Some(index) = queue.pop_front() {
        let Some(tile) = board.get(index) else {
            continue;
        };
        let Some(special) = tile.special else {
            continue;
        };
        if !triggered.insert(index) {
            continue;
        }
        fired += 1;

        effect.clear();
        match special {
            SpecialKind::RowClear => {
                if let Some((row, _)) = board.coord(index) {
                    effect.extend(board.row_indices(row));
                }
            }
            SpecialKind::ColumnClear => {
                if let Some((_, col)) = board.coord(index) {
                    effect.extend(board.column_indices(col));
                }
            }
            SpecialKind::Blast => effect.extend(board.neighborhood(index)),
            SpecialKind::Wildcard => {
                let target = wildcard_target(board, index, swap, kind_count, rng);
                effect.extend(board.indices_of_kind(target));
            }
        }

        for &cell in &effect {
            let occupied = board.get(cell).is_some_and(|t| !t.is_empty());
            if occupied && cleared.insert(cell) {
                queue.push_back(cell);
            }
        }
    }

    Expansion {
        cleared,
        triggered: fired,
    }
}

fn wildcard_target<R: TileRng + ?Sized>(
    board: &Board,
    index: usize,
    swap: Option<SwapContext>,
    kind_count: u8,
    rng: &mut R,
) -> TileKind {
    swap.and_then(|s| s.partner_of(index))
        .and_then(|partner| board.get(partner))
        .and_then(|t| t.kind)
        .or_else(|| board.get(index).and_then(|t| t.kind))
        .unwrap_or_else(|| draw_kind(rng, kind_count))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matcher::find_matches;
    use crate::rng::SimpleRng;
    use crate::types::Tile;

    const A: TileKind = TileKind::SheepCream;
    const B: TileKind = TileKind::SheepOlive;

    // 5x5 fixture rows (kind indices):
    // 0 1 2 3 4
    // 2 3 4 0 1
    // 4 0 1 2 3
    // 1 2 3 4 0
    // 3 4 0 1 2

    fn plan(board: &Board, origin: usize, destination: usize) -> Option<SpecialPlan> {
        plan_special(board, &find_matches(board), SwapContext::new(origin, destination))
    }

    fn run(board: &Board, seed: &[usize]) -> Expansion {
        let mut rng = SimpleRng::new(1);
        expand(
            board,
            seed.iter().copied().collect(),
            CellSet::new(),
            None,
            5,
            &mut rng,
        )
    }

    #[test]
    fn row_of_four_makes_row_clear_at_destination() {
        let board = Board::pattern(5).with_kinds(&[(0, A), (1, A), (2, A), (3, A)]);
        assert_eq!(
            plan(&board, 8, 3),
            Some(SpecialPlan {
                anchor: 3,
                special: SpecialKind::RowClear
            })
        );
    }

    #[test]
    fn unmatched_destination_falls_back_to_origin() {
        let board = Board::pattern(5).with_kinds(&[(0, A), (1, A), (2, A), (3, A)]);
        assert_eq!(plan(&board, 1, 6).map(|p| p.anchor), Some(1));
    }

    #[test]
    fn column_of_four_makes_column_clear() {
        let board = Board::pattern(5).with_kinds(&[(4, B), (9, B), (14, B), (19, B)]);
        assert_eq!(
            plan(&board, 8, 9).map(|p| p.special),
            Some(SpecialKind::ColumnClear)
        );
    }

    #[test]
    fn run_of_five_makes_wildcard() {
        let board = Board::pattern(5).with_kinds(&[(0, A), (1, A), (2, A), (3, A), (4, A)]);
        assert_eq!(
            plan(&board, 7, 2).map(|p| p.special),
            Some(SpecialKind::Wildcard)
        );
    }

    #[test]
    fn shape_makes_blast() {
        let board = Board::pattern(5).with_kinds(&[(0, A), (1, A), (2, A), (5, A), (10, A)]);
        assert_eq!(
            plan(&board, 1, 0),
            Some(SpecialPlan {
                anchor: 0,
                special: SpecialKind::Blast
            })
        );
    }

    #[test]
    fn run_of_three_makes_nothing() {
        let board = Board::pattern(5).with_kinds(&[(0, A), (1, A), (2, A)]);
        assert_eq!(plan(&board, 7, 2), None);
    }

    #[test]
    fn special_anchor_is_not_respecialized() {
        let mut board = Board::pattern(5).with_kinds(&[(0, A), (1, A), (2, A), (3, A)]);
        board.set_special(3, SpecialKind::Blast);
        assert_eq!(plan(&board, 8, 3), None);
    }

    #[test]
    fn row_clear_takes_the_row() {
        let mut board = Board::pattern(5);
        board.set_special(12, SpecialKind::RowClear);
        let exp = run(&board, &[12]);
        assert_eq!(exp.cleared.to_vec(), vec![10, 11, 12, 13, 14]);
        assert_eq!(exp.triggered, 1);
    }

    #[test]
    fn specials_chain_breadth_first() {
        let mut board = Board::pattern(5);
        board.set_special(12, SpecialKind::RowClear);
        board.set_special(14, SpecialKind::ColumnClear);
        let exp = run(&board, &[12]);
        assert_eq!(exp.cleared.to_vec(), vec![4, 9, 10, 11, 12, 13, 14, 19, 24]);
        assert_eq!(exp.triggered, 2);
    }

    #[test]
    fn each_special_triggers_once() {
        let mut board = Board::pattern(5);
        board.set_special(10, SpecialKind::RowClear);
        board.set_special(12, SpecialKind::RowClear);
        let exp = run(&board, &[10, 12]);
        assert_eq!(exp.cleared.len(), 5);
        assert_eq!(exp.triggered, 2);
    }

    #[test]
    fn blast_is_clipped_at_corner() {
        let mut board = Board::pattern(5);
        board.set_special(0, SpecialKind::Blast);
        let exp = run(&board, &[0]);
        assert_eq!(exp.cleared.to_vec(), vec![0, 1, 5, 6]);
    }

    #[test]
    fn wildcard_targets_own_kind_off_swap() {
        let mut board = Board::pattern(5);
        board.set_special(12, SpecialKind::Wildcard);
        let exp = run(&board, &[12]);
        // Olive cells of the fixture
        assert_eq!(exp.cleared.to_vec(), vec![1, 9, 12, 15, 23]);
    }

    #[test]
    fn swapped_wildcard_targets_partner_kind() {
        let mut board = Board::pattern(5);
        board.set_special(12, SpecialKind::Wildcard);
        let mut rng = SimpleRng::new(1);
        let exp = expand(
            &board,
            [12].into_iter().collect(),
            CellSet::new(),
            Some(SwapContext::new(12, 13)),
            5,
            &mut rng,
        );
        // 13 is rust
        assert_eq!(exp.cleared.to_vec(), vec![2, 5, 12, 13, 16, 24]);
    }

    #[test]
    fn pre_triggered_cells_do_not_fire() {
        let mut board = Board::pattern(5);
        board.set_special(12, SpecialKind::Wildcard);
        let mut rng = SimpleRng::new(1);
        let exp = expand(
            &board,
            [12].into_iter().collect(),
            [12].into_iter().collect(),
            None,
            5,
            &mut rng,
        );
        assert_eq!(exp.cleared.to_vec(), vec![12]);
        assert_eq!(exp.triggered, 0);
    }

    #[test]
    fn wildcard_with_plain_tile_is_not_a_combo() {
        let mut board = Board::pattern(5);
        board.set_special(12, SpecialKind::Wildcard);
        assert!(!is_combo(&board, SwapContext::new(12, 13)));
        assert_eq!(wildcard_combo(&mut board, SwapContext::new(12, 13)), None);
    }

    #[test]
    fn wildcard_with_row_clear_promotes_partner_kind() {
        let mut board = Board::pattern(5);
        board.set_special(12, SpecialKind::Wildcard);
        board.set_special(13, SpecialKind::RowClear);

        let combo = wildcard_combo(&mut board, SwapContext::new(13, 12)).unwrap();
        assert_eq!(combo.cleared.to_vec(), vec![2, 5, 12, 13, 16, 24]);
        assert_eq!(combo.triggered, 1);
        assert_eq!(combo.triggered_cells.to_vec(), vec![12]);
        for i in [2, 5, 16, 24] {
            assert_eq!(board.get(i).unwrap().special, Some(SpecialKind::RowClear));
        }
        assert_eq!(board.get(12).unwrap().special, Some(SpecialKind::Wildcard));

        let mut rng = SimpleRng::new(1);
        let exp = expand(&board, combo.cleared, combo.triggered_cells, None, 5, &mut rng);
        // Promoted tiles sit in every row
        assert_eq!(exp.cleared.len(), 25);
        assert_eq!(exp.triggered, 5);
    }

    #[test]
    fn double_wildcard_clears_everything() {
        let mut board = Board::pattern(5);
        board.set(7, Tile::plain(A).with_special(SpecialKind::Wildcard));
        board.set(8, Tile::plain(B).with_special(SpecialKind::Wildcard));

        let combo = wildcard_combo(&mut board, SwapContext::new(7, 8)).unwrap();
        assert_eq!(combo.cleared.len(), 25);
        assert_eq!(combo.triggered, 2);
        assert!(combo.triggered_cells.contains(7));
        assert!(combo.triggered_cells.contains(8));
    }
}
