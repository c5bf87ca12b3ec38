//! Match detection
//!
//! Scans every row and column for maximal runs of identical kinds, then derives
//! shape groups where a row run and a column run of the same kind cross.
//! Specials take part in runs through their own kind.

use arrayvec::ArrayVec;

use crate::board::Board;
use crate::cell_set::CellSet;
use crate::types::{Orientation, TileKind, MAX_BOARD_SIZE, MIN_MATCH_LEN};

/// Maximum cells in one group (a full row crossed with a full column)
pub const MAX_GROUP_CELLS: usize = 2 * MAX_BOARD_SIZE as usize;

/// One detected match
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchGroup {
    /// Flattened indices, in scan order
    pub cells: ArrayVec<usize, MAX_GROUP_CELLS>,
    pub orientation: Orientation,
    pub kind: TileKind,
}

impl MatchGroup {
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn contains(&self, index: usize) -> bool {
        self.cells.contains(&index)
    }
}

/// All groups found on a board plus the union of their cells
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Matches {
    groups: Vec<MatchGroup>,
    cells: CellSet,
}

impl Matches {
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Row groups first, then column groups, then shapes
    pub fn groups(&self) -> &[MatchGroup] {
        &self.groups
    }

    /// Union of every group's cells
    pub fn cells(&self) -> &CellSet {
        &self.cells
    }

    pub fn groups_containing(&self, index: usize) -> impl Iterator<Item = &MatchGroup> + '_ {
        self.groups.iter().filter(move |g| g.contains(index))
    }
}

/// Detect every match group on the board
pub fn find_matches(board: &Board) -> Matches {
    let mut groups = Vec::new();

    for row in 0..board.size() {
        scan_line(board, board.row_indices(row), Orientation::Row, &mut groups);
    }
    let row_groups = groups.len();
    for col in 0..board.size() {
        scan_line(board, board.column_indices(col), Orientation::Column, &mut groups);
    }

    let mut shapes = Vec::new();
    for row_group in &groups[..row_groups] {
        for col_group in &groups[row_groups..] {
            if row_group.kind != col_group.kind {
                continue;
            }
            if !row_group.cells.iter().any(|i| col_group.contains(*i)) {
                continue;
            }
            let mut cells = row_group.cells.clone();
            for &i in &col_group.cells {
                if !cells.contains(&i) {
                    cells.push(i);
                }
            }
            shapes.push(MatchGroup {
                cells,
                orientation: Orientation::Shape,
                kind: row_group.kind,
            });
        }
    }
    groups.extend(shapes);

    let mut cells = CellSet::new();
    for group in &groups {
        cells.extend(group.cells.iter().copied());
    }

    Matches { groups, cells }
}

/// Collect maximal runs along one line of indices
fn scan_line(
    board: &Board,
    line: impl Iterator<Item = usize>,
    orientation: Orientation,
    out: &mut Vec<MatchGroup>,
) {
    let tiles = board.tiles();
    let mut run: ArrayVec<usize, MAX_GROUP_CELLS> = ArrayVec::new();
    let mut run_kind: Option<TileKind> = None;

    for index in line {
        let kind = tiles[index].kind;
        if kind.is_some() && kind == run_kind {
            run.push(index);
            continue;
        }
        flush_run(&run, run_kind, orientation, out);
        run.clear();
        run_kind = kind;
        if kind.is_some() {
            run.push(index);
        }
    }
    flush_run(&run, run_kind, orientation, out);
}

fn flush_run(
    run: &ArrayVec<usize, MAX_GROUP_CELLS>,
    kind: Option<TileKind>,
    orientation: Orientation,
    out: &mut Vec<MatchGroup>,
) {
    if let Some(kind) = kind {
        if run.len() >= MIN_MATCH_LEN {
            out.push(MatchGroup {
                cells: run.clone(),
                orientation,
                kind,
            });
        }
    }
}
