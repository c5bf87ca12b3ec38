use sheep_crush::core::{find_matches, Board, CellSet, EngineError, SimpleRng};
use sheep_crush::types::{
    Tile, TileKind, FILL_RETRY_LIMIT, KIND_COUNT, MAX_BOARD_SIZE, MIN_BOARD_SIZE,
};

/// Match-free board: kind = (2 * row + col) mod 5
fn pattern(size: u8) -> Board {
    let n = size as usize;
    let kinds: Vec<TileKind> = (0..n * n)
        .map(|i| TileKind::ALL[(2 * (i / n) + i % n) % 5])
        .collect();
    Board::from_kinds(size, &kinds).unwrap()
}

#[test]
fn test_generated_boards_are_full_and_match_free() {
    for size in MIN_BOARD_SIZE..=MAX_BOARD_SIZE {
        for seed in [1, 7, 42, 12345, u32::MAX] {
            let mut rng = SimpleRng::new(seed);
            let board = Board::generate(size, KIND_COUNT, FILL_RETRY_LIMIT, &mut rng).unwrap();
            assert_eq!(board.len(), size as usize * size as usize);
            assert!(board.is_full());
            assert!(board.tiles().iter().all(|t| !t.is_special()));
            assert!(find_matches(&board).is_empty(), "size {} seed {}", size, seed);
        }
    }
}

#[test]
fn test_generation_with_three_kinds() {
    for seed in 0..20 {
        let mut rng = SimpleRng::new(seed);
        let board = Board::generate(8, 3, FILL_RETRY_LIMIT, &mut rng).unwrap();
        assert!(find_matches(&board).is_empty());
        assert!(board
            .tiles()
            .iter()
            .all(|t| matches!(t.kind, Some(k) if k.index() < 3)));
    }
}

#[test]
fn test_size_and_tile_count_errors() {
    assert!(matches!(Board::empty(4), Err(EngineError::InvalidSize { size: 4, .. })));
    assert!(matches!(Board::empty(17), Err(EngineError::InvalidSize { size: 17, .. })));
    assert_eq!(
        Board::from_tiles(5, vec![Tile::EMPTY; 24]),
        Err(EngineError::TileCount {
            size: 5,
            expected: 25,
            found: 24
        })
    );
}

#[test]
fn test_coordinates_and_adjacency() {
    let board = pattern(6);
    assert_eq!(board.index(2, 3), Some(15));
    assert_eq!(board.coord(15), Some((2, 3)));
    assert_eq!(board.index(6, 0), None);
    assert_eq!(board.coord(36), None);

    assert!(board.are_adjacent(15, 16));
    assert!(board.are_adjacent(15, 9));
    assert!(!board.are_adjacent(5, 6)); // row wrap
    assert!(!board.are_adjacent(15, 22)); // diagonal
    assert!(!board.are_adjacent(15, 15));
    assert!(!board.are_adjacent(35, 36));
}

#[test]
fn test_gravity_keeps_column_order() {
    let mut board = pattern(5);
    // Column 0 top to bottom: cream, rust, dark, olive, sky
    let cleared: CellSet = [5, 15].into_iter().collect();
    assert_eq!(board.clear_cells(&cleared), 2);
    assert_eq!(board.apply_gravity(), 2);

    assert_eq!(board.get_at(0, 0), Some(Tile::EMPTY));
    assert_eq!(board.get_at(1, 0), Some(Tile::EMPTY));
    assert_eq!(board.get_at(2, 0), Some(Tile::plain(TileKind::SheepCream)));
    assert_eq!(board.get_at(3, 0), Some(Tile::plain(TileKind::SheepDark)));
    assert_eq!(board.get_at(4, 0), Some(Tile::plain(TileKind::SheepSky)));

    // Other columns are untouched
    assert_eq!(board.get_at(0, 1), pattern(5).get_at(0, 1));
}

#[test]
fn test_refill_fills_only_empty_cells() {
    let mut board = pattern(8);
    let cleared: CellSet = [0, 1, 2, 8, 9, 10].into_iter().collect();
    board.clear_cells(&cleared);
    board.apply_gravity();

    let mut rng = SimpleRng::new(3);
    assert_eq!(board.refill(KIND_COUNT, FILL_RETRY_LIMIT, &mut rng), 6);
    assert!(board.is_full());
    assert!(find_matches(&board).is_empty());
    assert_eq!(board.refill(KIND_COUNT, FILL_RETRY_LIMIT, &mut rng), 0);
}
