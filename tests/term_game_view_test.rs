use sheep_crush::core::{GameSnapshot, GameState, MoveSummary};
use sheep_crush::term::{tile_glyphs, AnchorY, GameView, Viewport};
use sheep_crush::types::{SpecialKind, Tile, TileKind};

fn snapshot(seed: u32) -> GameSnapshot {
    GameState::new_game(8, Some(seed)).unwrap().current_state()
}

#[test]
fn board_frame_is_drawn_with_corners() {
    let view = GameView::default().with_anchor_y(AnchorY::Top);
    let snap = snapshot(1);
    // 8 cells * 2 columns + 2 border columns, 8 rows + 2 border rows.
    let fb = view.render(&snap, None, Viewport::new(18, 10));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(17, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 9).unwrap().ch, '└');
    assert_eq!(fb.get(17, 9).unwrap().ch, '┘');
    assert_eq!(fb.get(0, 4).unwrap().ch, '│');
    assert_eq!(fb.get(8, 0).unwrap().ch, '─');
}

#[test]
fn tiles_fill_two_columns_each() {
    let view = GameView::default().with_anchor_y(AnchorY::Top);
    let mut snap = snapshot(2);
    snap.tiles[0] = Tile::plain(TileKind::SheepRust).with_special(SpecialKind::RowClear);
    let fb = view.render(&snap, None, Viewport::new(18, 10));

    assert_eq!(fb.get(1, 1).unwrap().ch, '◀');
    assert_eq!(fb.get(2, 1).unwrap().ch, '▶');
    for index in 1..64 {
        let (row, col) = ((index / 8) as u16, (index % 8) as u16);
        let glyphs = tile_glyphs(snap.tiles[index]);
        assert_eq!(fb.get(1 + col * 2, 1 + row).unwrap().ch, glyphs[0]);
        assert_eq!(fb.get(2 + col * 2, 1 + row).unwrap().ch, glyphs[1]);
    }
}

#[test]
fn board_is_centered_in_large_viewport() {
    let view = GameView::default();
    let fb = view.render(&snapshot(3), None, Viewport::new(40, 20));
    // (40 - 18) / 2 = 11 and (20 - 10) / 2 = 5
    assert_eq!(fb.get(11, 5).unwrap().ch, '┌');
    assert_eq!(fb.get(28, 14).unwrap().ch, '┘');
}

#[test]
fn side_panel_shows_score_and_status() {
    let view = GameView::default();
    let mut snap = snapshot(4);
    snap.score = 4321;
    snap.moves = 7;
    snap.last_move = Some(MoveSummary {
        steps: 2,
        points: 85,
        tiles_cleared: 6,
        ..MoveSummary::default()
    });
    let fb = view.render(&snap, None, Viewport::new(80, 24));

    let text: Vec<String> = (0..24).map(|y| fb.row_text(y)).collect();
    let joined = text.join("\n");
    assert!(joined.contains("SCORE"));
    assert!(joined.contains("4321"));
    assert!(joined.contains("MOVES"));
    assert!(joined.contains("READY"));
    assert!(joined.contains("+85 x2"));

    snap.busy = true;
    snap.cascade_depth = 3;
    let fb = view.render(&snap, None, Viewport::new(80, 24));
    let joined: String = (0..24).map(|y| fb.row_text(y) + "\n").collect();
    assert!(joined.contains("CASCADE 3"));
}

#[test]
fn narrow_viewport_skips_side_panel() {
    let view = GameView::default();
    let fb = view.render(&snapshot(5), None, Viewport::new(20, 12));
    let joined: String = (0..12).map(|y| fb.row_text(y)).collect();
    assert!(!joined.contains("SCORE"));
}

#[test]
fn render_into_reuses_buffer_across_sizes() {
    let view = GameView::default();
    let snap = snapshot(6);
    let mut fb = view.render(&snap, Some(0), Viewport::new(80, 24));
    view.render_into(&snap, Some(0), Viewport::new(30, 12), &mut fb);
    assert_eq!(fb.width(), 30);
    assert_eq!(fb.height(), 12);
    assert_eq!(fb, view.render(&snap, Some(0), Viewport::new(30, 12)));
}
