//! Board module - manages the tile grid
//!
//! The board is a square grid where each cell holds a [`Tile`].
//! Uses flat row-major storage; a cell is addressed either by `(row, col)` or
//! by its flattened index `row * size + col`.
//! Row 0 is the top of the board; gravity pulls tiles towards the last row.

use crate::cell_set::CellSet;
use crate::config::validate_size;
use crate::error::EngineError;
use crate::rng::{draw_kind, TileRng};
use crate::types::{SpecialKind, Tile, TileKind, MIN_MATCH_LEN};

/// The game board - `size` x `size` tiles in row-major order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: u8,
    tiles: Vec<Tile>,
}

impl Board {
    /// Create a board with every cell empty
    pub fn empty(size: u8) -> Result<Self, EngineError> {
        validate_size(size)?;
        let n = size as usize;
        Ok(Self {
            size,
            tiles: vec![Tile::EMPTY; n * n],
        })
    }

    /// Create from row-major tiles (fixtures, replays)
    pub fn from_tiles(size: u8, tiles: Vec<Tile>) -> Result<Self, EngineError> {
        validate_size(size)?;
        let expected = (size as usize) * (size as usize);
        if tiles.len() != expected {
            return Err(EngineError::TileCount {
                size,
                expected,
                found: tiles.len(),
            });
        }
        Ok(Self { size, tiles })
    }

    /// Create from row-major plain kinds
    pub fn from_kinds(size: u8, kinds: &[TileKind]) -> Result<Self, EngineError> {
        Self::from_tiles(size, kinds.iter().map(|k| Tile::plain(*k)).collect())
    }

    /// Fill a fresh board with no pre-existing matches
    ///
    /// Cells are filled in row-major order. Each cell draws a random kind and
    /// redraws up to `retries` times while the draw would complete a run with
    /// its left or upper neighbours. After that the allowed kinds are scanned
    /// in order; if every kind completes a run the fill fails.
    pub fn generate<R: TileRng + ?Sized>(
        size: u8,
        kind_count: u8,
        retries: u32,
        rng: &mut R,
    ) -> Result<Self, EngineError> {
        let mut board = Self::empty(size)?;
        for index in 0..board.len() {
            let kind = board.pick_kind(index, kind_count, retries, rng).ok_or(
                EngineError::Initialization {
                    row: (index / size as usize) as u8,
                    col: (index % size as usize) as u8,
                },
            )?;
            board.tiles[index] = Tile::plain(kind);
        }
        Ok(board)
    }

    /// Side length of the board
    pub fn size(&self) -> u8 {
        self.size
    }

    /// Number of cells
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Calculate flat index from (row, col) coordinates
    #[inline(always)]
    pub fn index(&self, row: u8, col: u8) -> Option<usize> {
        if row >= self.size || col >= self.size {
            return None;
        }
        Some((row as usize) * (self.size as usize) + (col as usize))
    }

    /// Calculate (row, col) from a flat index
    #[inline(always)]
    pub fn coord(&self, index: usize) -> Option<(u8, u8)> {
        if index >= self.tiles.len() {
            return None;
        }
        let n = self.size as usize;
        Some(((index / n) as u8, (index % n) as u8))
    }

    /// Get tile at flat index
    /// Returns None if out of bounds
    pub fn get(&self, index: usize) -> Option<Tile> {
        self.tiles.get(index).copied()
    }

    /// Get tile at (row, col)
    pub fn get_at(&self, row: u8, col: u8) -> Option<Tile> {
        self.index(row, col).map(|i| self.tiles[i])
    }

    /// Set tile at flat index
    /// Returns false if out of bounds
    pub fn set(&mut self, index: usize, tile: Tile) -> bool {
        match self.tiles.get_mut(index) {
            Some(slot) => {
                *slot = tile;
                true
            }
            None => false,
        }
    }

    /// Give the tile at `index` a special, keeping its kind
    pub fn set_special(&mut self, index: usize, special: SpecialKind) -> bool {
        match self.tiles.get_mut(index) {
            Some(slot) if !slot.is_empty() => {
                slot.special = Some(special);
                true
            }
            _ => false,
        }
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// True when both indices are on the board and exactly one step apart
    /// (Manhattan distance 1)
    pub fn are_adjacent(&self, a: usize, b: usize) -> bool {
        match (self.coord(a), self.coord(b)) {
            (Some((ra, ca)), Some((rb, cb))) => ra.abs_diff(rb) + ca.abs_diff(cb) == 1,
            _ => false,
        }
    }

    /// Exchange two tiles. Out-of-range indices are a no-op.
    pub fn swap(&mut self, a: usize, b: usize) {
        if a < self.tiles.len() && b < self.tiles.len() {
            self.tiles.swap(a, b);
        }
    }

    /// Indices of one row, left to right
    pub fn row_indices(&self, row: u8) -> impl Iterator<Item = usize> {
        let n = self.size as usize;
        let start = (row as usize) * n;
        let end = if row < self.size { start + n } else { start };
        start..end
    }

    /// Indices of one column, top to bottom
    pub fn column_indices(&self, col: u8) -> impl Iterator<Item = usize> {
        let n = self.size as usize;
        let rows = if col < self.size { n } else { 0 };
        (0..rows).map(move |r| r * n + col as usize)
    }

    /// Indices of the 3x3 neighbourhood centred on `index`, clipped at edges
    pub fn neighborhood(&self, index: usize) -> impl Iterator<Item = usize> + '_ {
        let centre = self.coord(index);
        (-1i16..=1)
            .flat_map(|dr| (-1i16..=1).map(move |dc| (dr, dc)))
            .filter_map(move |(dr, dc)| {
                let (row, col) = centre?;
                let r = row as i16 + dr;
                let c = col as i16 + dc;
                if r < 0 || c < 0 {
                    return None;
                }
                self.index(r as u8, c as u8)
            })
    }

    /// Indices of every tile whose kind is `kind`
    pub fn indices_of_kind(&self, kind: TileKind) -> impl Iterator<Item = usize> + '_ {
        self.tiles
            .iter()
            .enumerate()
            .filter(move |(_, t)| t.kind == Some(kind))
            .map(|(i, _)| i)
    }

    /// Would placing `kind` at `index` complete a run of `MIN_MATCH_LEN` or
    /// more with the non-empty tiles already on the board?
    pub fn completes_run(&self, index: usize, kind: TileKind) -> bool {
        let Some((row, col)) = self.coord(index) else {
            return false;
        };
        let horizontal =
            1 + self.count_same(row, col, 0, -1, kind) + self.count_same(row, col, 0, 1, kind);
        let vertical =
            1 + self.count_same(row, col, -1, 0, kind) + self.count_same(row, col, 1, 0, kind);
        horizontal >= MIN_MATCH_LEN || vertical >= MIN_MATCH_LEN
    }

    fn count_same(&self, row: u8, col: u8, dr: i16, dc: i16, kind: TileKind) -> usize {
        let mut count = 0;
        let (mut r, mut c) = (row as i16 + dr, col as i16 + dc);
        while r >= 0 && c >= 0 {
            match self.index(r as u8, c as u8) {
                Some(i) if self.tiles[i].kind == Some(kind) => count += 1,
                _ => break,
            }
            r += dr;
            c += dc;
        }
        count
    }

    /// Choose a kind for `index` that does not complete a run, if one exists
    fn pick_kind<R: TileRng + ?Sized>(
        &self,
        index: usize,
        kind_count: u8,
        retries: u32,
        rng: &mut R,
    ) -> Option<TileKind> {
        for _ in 0..retries.max(1) {
            let kind = draw_kind(rng, kind_count);
            if !self.completes_run(index, kind) {
                return Some(kind);
            }
        }
        TileKind::ALL
            .iter()
            .take(kind_count as usize)
            .copied()
            .find(|k| !self.completes_run(index, *k))
    }

    /// Empty every cell in `cells`
    pub fn clear_cells(&mut self, cells: &CellSet) -> usize {
        let mut cleared = 0;
        for index in cells.iter() {
            if let Some(slot) = self.tiles.get_mut(index) {
                *slot = Tile::EMPTY;
                cleared += 1;
            }
        }
        cleared
    }

    /// Let tiles fall into the empty cells below them
    ///
    /// Works per column with a two-pointer pass from the bottom, preserving the
    /// relative order of tiles. Empty cells end up at the top.
    /// Returns the number of tiles that moved.
    pub fn apply_gravity(&mut self) -> usize {
        let n = self.size as usize;
        let mut moved = 0;

        for col in 0..n {
            let mut write_row = n;
            for read_row in (0..n).rev() {
                let read = read_row * n + col;
                if self.tiles[read].is_empty() {
                    continue;
                }
                write_row -= 1;
                if write_row != read_row {
                    let write = write_row * n + col;
                    self.tiles[write] = self.tiles[read];
                    self.tiles[read] = Tile::EMPTY;
                    moved += 1;
                }
            }
        }

        moved
    }

    /// Fill every empty cell with a fresh plain tile
    ///
    /// Columns are filled left to right, each from the bottom up, so every
    /// draw is checked against already-settled neighbours. When no kind avoids
    /// completing a run, the last draw is kept and the cascade resolves it.
    /// Returns the number of cells filled.
    pub fn refill<R: TileRng + ?Sized>(
        &mut self,
        kind_count: u8,
        retries: u32,
        rng: &mut R,
    ) -> usize {
        let n = self.size as usize;
        let mut filled = 0;

        for col in 0..n {
            for row in (0..n).rev() {
                let index = row * n + col;
                if !self.tiles[index].is_empty() {
                    continue;
                }
                let kind = self
                    .pick_kind(index, kind_count, retries, rng)
                    .unwrap_or_else(|| draw_kind(rng, kind_count));
                self.tiles[index] = Tile::plain(kind);
                filled += 1;
            }
        }

        filled
    }

    /// True when no cell is empty
    pub fn is_full(&self) -> bool {
        self.tiles.iter().all(|t| !t.is_empty())
    }

    /// Fixture board with no runs anywhere: kind = (2 * row + col) mod 5
    #[cfg(test)]
    pub(crate) fn pattern(size: u8) -> Self {
        let n = size as usize;
        let kinds: Vec<TileKind> = (0..n * n)
            .map(|i| TileKind::ALL[(2 * (i / n) + i % n) % 5])
            .collect();
        Self::from_kinds(size, &kinds).unwrap()
    }

    /// Overwrite the plain kinds of a fixture from a list of (index, kind)
    #[cfg(test)]
    pub(crate) fn with_kinds(mut self, cells: &[(usize, TileKind)]) -> Self {
        for &(i, k) in cells {
            self.tiles[i] = Tile::plain(k);
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matcher::find_matches;
    use crate::rng::SimpleRng;

    #[test]
    fn test_board_index_calculation() {
        let board = Board::empty(8).unwrap();
        assert_eq!(board.index(0, 0), Some(0));
        assert_eq!(board.index(0, 7), Some(7));
        assert_eq!(board.index(1, 0), Some(8));
        assert_eq!(board.index(7, 7), Some(63));
        assert_eq!(board.index(8, 0), None);
        assert_eq!(board.index(0, 8), None);

        assert_eq!(board.coord(10), Some((1, 2)));
        assert_eq!(board.coord(64), None);
    }

    #[test]
    fn test_invalid_sizes() {
        assert!(matches!(Board::empty(4), Err(EngineError::InvalidSize { .. })));
        assert!(matches!(Board::empty(17), Err(EngineError::InvalidSize { .. })));
        assert!(matches!(
            Board::from_tiles(5, vec![Tile::EMPTY; 24]),
            Err(EngineError::TileCount {
                expected: 25,
                found: 24,
                ..
            })
        ));
    }

    #[test]
    fn test_adjacency() {
        let board = Board::empty(8).unwrap();
        assert!(board.are_adjacent(0, 1));
        assert!(board.are_adjacent(0, 8));
        assert!(!board.are_adjacent(0, 0));
        assert!(!board.are_adjacent(0, 9));
        // End of one row and start of the next are not neighbours.
        assert!(!board.are_adjacent(7, 8));
        assert!(!board.are_adjacent(63, 64));
    }

    #[test]
    fn test_pattern_has_no_matches() {
        for size in 5..=16 {
            assert!(find_matches(&Board::pattern(size)).is_empty());
        }
    }

    #[test]
    fn test_generate_has_no_matches_and_no_specials() {
        for seed in 0..50 {
            let mut rng = SimpleRng::new(seed);
            let board = Board::generate(8, 5, 20, &mut rng).unwrap();
            assert!(board.is_full());
            assert!(board.tiles().iter().all(|t| t.special.is_none()));
            assert!(find_matches(&board).is_empty(), "seed {}", seed);
        }
    }

    #[test]
    fn test_generate_with_three_kinds_never_fails() {
        for seed in 0..50 {
            let mut rng = SimpleRng::new(seed);
            let board = Board::generate(16, 3, 0, &mut rng).unwrap();
            assert!(find_matches(&board).is_empty());
        }
    }

    #[test]
    fn test_generate_with_one_kind_fails() {
        let mut rng = SimpleRng::new(1);
        assert_eq!(
            Board::generate(5, 1, 20, &mut rng),
            Err(EngineError::Initialization { row: 0, col: 2 })
        );
    }

    #[test]
    fn test_completes_run_checks_both_sides() {
        let a = TileKind::SheepCream;
        let b = TileKind::SheepOlive;
        let mut board = Board::empty(5).unwrap();
        board.set(0, Tile::plain(a));
        board.set(2, Tile::plain(a));
        board.set(6, Tile::plain(b));
        board.set(11, Tile::plain(b));

        // Between two A's.
        assert!(board.completes_run(1, a));
        // Above two B's.
        assert!(board.completes_run(1, b));
        // Below two B's.
        assert!(board.completes_run(16, b));
        assert!(!board.completes_run(1, TileKind::SheepRust));
        assert!(!board.completes_run(3, a));
    }

    #[test]
    fn test_gravity_preserves_order() {
        let kinds = [
            TileKind::SheepCream,
            TileKind::SheepOlive,
            TileKind::SheepRust,
        ];
        let mut board = Board::empty(5).unwrap();
        // Column 0: rows 0, 1, 3 filled; rows 2, 4 empty.
        board.set(0, Tile::plain(kinds[0]));
        board.set(5, Tile::plain(kinds[1]));
        board.set(15, Tile::plain(kinds[2]));

        let moved = board.apply_gravity();
        assert_eq!(moved, 3);
        assert_eq!(board.get_at(4, 0), Some(Tile::plain(kinds[2])));
        assert_eq!(board.get_at(3, 0), Some(Tile::plain(kinds[1])));
        assert_eq!(board.get_at(2, 0), Some(Tile::plain(kinds[0])));
        assert_eq!(board.get_at(1, 0), Some(Tile::EMPTY));
        assert_eq!(board.get_at(0, 0), Some(Tile::EMPTY));
    }

    #[test]
    fn test_gravity_keeps_specials() {
        let mut board = Board::pattern(5);
        board.set_special(0, SpecialKind::Blast);
        let top = board.get(0).unwrap();
        board.set(5, Tile::EMPTY);
        board.apply_gravity();
        assert_eq!(board.get(5), Some(top));
        assert_eq!(board.get(0), Some(Tile::EMPTY));
    }

    #[test]
    fn test_clear_gravity_refill_leaves_full_board() {
        let mut board = Board::pattern(8);
        let cells: CellSet = [0, 9, 18, 27, 36].into_iter().collect();
        assert_eq!(board.clear_cells(&cells), 5);
        assert!(!board.is_full());

        board.apply_gravity();
        let mut rng = SimpleRng::new(3);
        assert_eq!(board.refill(5, 20, &mut rng), 5);
        assert!(board.is_full());
        assert!(find_matches(&board).is_empty());
    }

    #[test]
    fn test_neighborhood_is_clipped() {
        let board = Board::empty(5).unwrap();
        let corner: Vec<usize> = board.neighborhood(0).collect();
        assert_eq!(corner, vec![0, 1, 5, 6]);
        let centre: Vec<usize> = board.neighborhood(12).collect();
        assert_eq!(centre, vec![6, 7, 8, 11, 12, 13, 16, 17, 18]);
    }

    #[test]
    fn test_row_and_column_indices() {
        let board = Board::empty(5).unwrap();
        assert_eq!(board.row_indices(1).collect::<Vec<_>>(), vec![5, 6, 7, 8, 9]);
        assert_eq!(
            board.column_indices(2).collect::<Vec<_>>(),
            vec![2, 7, 12, 17, 22]
        );
        assert_eq!(board.row_indices(5).count(), 0);
    }
}
