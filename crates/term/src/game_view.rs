//! GameView: maps a [`GameSnapshot`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{SpecialKind, Tile, TileKind};

const BOARD_BG: Rgb = Rgb::new(30, 34, 30);
const PANEL_BG: Rgb = Rgb::new(0, 0, 0);
const SELECTED_BG: Rgb = Rgb::new(90, 84, 36);
const CURSOR_BG: Rgb = Rgb::new(64, 68, 112);
const CURSOR_ON_SELECTED_BG: Rgb = Rgb::new(128, 112, 52);

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// Board renderer for the terminal runner.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 roughly squares a cell in common terminal fonts.
        Self {
            cell_w: 2,
            cell_h: 1,
            anchor_y: AnchorY::Center,
        }
    }
}

/// Where the board frame landed in the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Frame {
    x: u16,
    y: u16,
    w: u16,
    h: u16,
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Render into an existing framebuffer.
    ///
    /// `cursor` is the flattened index under the player's cursor, if any.
    /// Callers can reuse one framebuffer across frames.
    pub fn render_into(
        &self,
        snap: &GameSnapshot,
        cursor: Option<usize>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        let size = snap.size as u16;
        let frame_w = size * self.cell_w + 2;
        let frame_h = size * self.cell_h + 2;
        let frame = Frame {
            x: viewport.width.saturating_sub(frame_w) / 2,
            y: match self.anchor_y {
                AnchorY::Center => viewport.height.saturating_sub(frame_h) / 2,
                AnchorY::Top => 0,
            },
            w: frame_w,
            h: frame_h,
        };

        let border = CellStyle::new(Rgb::new(200, 200, 190), PANEL_BG);
        draw_border(fb, frame, border);

        for (index, tile) in snap.tiles.iter().enumerate() {
            let row = (index / snap.size.max(1) as usize) as u16;
            let col = (index % snap.size.max(1) as usize) as u16;
            let bg = match (snap.selected == Some(index), cursor == Some(index)) {
                (true, true) => CURSOR_ON_SELECTED_BG,
                (false, true) => CURSOR_BG,
                (true, false) => SELECTED_BG,
                (false, false) => BOARD_BG,
            };
            let mut style = tile_style(*tile).on(bg);
            if cursor == Some(index) {
                style = style.bold();
            }
            self.draw_tile(fb, frame, row, col, tile_glyphs(*tile), style);
        }

        self.draw_side_panel(fb, snap, viewport, frame);
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(
        &self,
        snap: &GameSnapshot,
        cursor: Option<usize>,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, cursor, viewport, &mut fb);
        fb
    }

    fn draw_tile(
        &self,
        fb: &mut FrameBuffer,
        frame: Frame,
        row: u16,
        col: u16,
        glyphs: [char; 2],
        style: CellStyle,
    ) {
        let px = frame.x + 1 + col * self.cell_w;
        let py = frame.y + 1 + row * self.cell_h;
        for dy in 0..self.cell_h {
            for dx in 0..self.cell_w {
                let ch = if dx == 0 {
                    glyphs[0]
                } else if dx == self.cell_w - 1 {
                    glyphs[1]
                } else {
                    ' '
                };
                fb.put_char(px + dx, py + dy, ch, style);
            }
        }
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        frame: Frame,
    ) {
        let panel_x = frame.x.saturating_add(frame.w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 12 {
            return;
        }

        let label = CellStyle::new(Rgb::new(220, 220, 220), PANEL_BG).bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);
        let dim = value.dim();

        let mut y = frame.y;
        fb.put_str(panel_x, y, "SCORE", label);
        y += 1;
        fb.put_u32(panel_x, y, snap.score, value);
        y += 2;

        fb.put_str(panel_x, y, "MOVES", label);
        y += 1;
        fb.put_u32(panel_x, y, snap.moves, value);
        y += 2;

        fb.put_str(panel_x, y, "STATUS", label);
        y += 1;
        if snap.busy {
            let x = fb.put_str(panel_x, y, "CASCADE ", value);
            fb.put_u32(x, y, snap.cascade_depth, value);
        } else if snap.selected.is_some() {
            fb.put_str(panel_x, y, "PICK A NEIGHBOUR", value);
        } else {
            fb.put_str(panel_x, y, "READY", value);
        }
        y += 2;

        fb.put_str(panel_x, y, "LAST MOVE", label);
        y += 1;
        match snap.last_move {
            Some(last) => {
                let x = fb.put_str(panel_x, y, "+", value);
                let x = fb.put_u32(x, y, last.points, value);
                let x = fb.put_str(x, y, " x", dim);
                fb.put_u32(x, y, last.steps, dim);
                if let Some(special) = last.special_created {
                    y += 1;
                    fb.put_str(panel_x, y, special.as_str(), value);
                }
                if last.capped {
                    y += 1;
                    fb.put_str(panel_x, y, "capped", dim);
                }
            }
            None => {
                fb.put_str(panel_x, y, "-", value);
            }
        }
        y += 2;

        for line in [
            "move  arrows/hjkl",
            "tap   space/enter",
            "esc   cancel",
            "r     new board",
            "q     quit",
        ] {
            if y >= viewport.height {
                break;
            }
            fb.put_str(panel_x, y, line, dim);
            y += 1;
        }
    }
}

fn draw_border(fb: &mut FrameBuffer, frame: Frame, style: CellStyle) {
    let Frame { x, y, w, h } = frame;
    if w < 2 || h < 2 {
        return;
    }

    fb.put_char(x, y, '┌', style);
    fb.put_char(x + w - 1, y, '┐', style);
    fb.put_char(x, y + h - 1, '└', style);
    fb.put_char(x + w - 1, y + h - 1, '┘', style);

    for dx in 1..w - 1 {
        fb.put_char(x + dx, y, '─', style);
        fb.put_char(x + dx, y + h - 1, '─', style);
    }
    for dy in 1..h - 1 {
        fb.put_char(x, y + dy, '│', style);
        fb.put_char(x + w - 1, y + dy, '│', style);
    }
}

/// Wool colour per sheep kind.
pub fn kind_color(kind: TileKind) -> Rgb {
    match kind {
        TileKind::SheepCream => Rgb::new(240, 230, 200),
        TileKind::SheepOlive => Rgb::new(150, 170, 80),
        TileKind::SheepRust => Rgb::new(200, 100, 60),
        TileKind::SheepSky => Rgb::new(120, 180, 235),
        TileKind::SheepDark => Rgb::new(150, 120, 170),
    }
}

/// Two glyphs for one board cell.
pub fn tile_glyphs(tile: Tile) -> [char; 2] {
    match (tile.kind, tile.special) {
        (None, _) => ['·', ' '],
        (Some(_), None) => ['◖', '◗'],
        (Some(_), Some(SpecialKind::RowClear)) => ['◀', '▶'],
        (Some(_), Some(SpecialKind::ColumnClear)) => ['▲', '▼'],
        (Some(_), Some(SpecialKind::Blast)) => ['✶', '✶'],
        (Some(_), Some(SpecialKind::Wildcard)) => ['★', '★'],
    }
}

fn tile_style(tile: Tile) -> CellStyle {
    match tile.kind {
        Some(kind) => {
            let style = CellStyle::new(kind_color(kind), BOARD_BG);
            if tile.is_special() {
                style.bold()
            } else {
                style
            }
        }
        None => CellStyle::new(Rgb::new(90, 90, 100), BOARD_BG).dim(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn glyphs_distinguish_specials() {
        let plain = Tile::plain(TileKind::SheepSky);
        assert_eq!(tile_glyphs(plain), ['◖', '◗']);
        assert_eq!(tile_glyphs(plain.with_special(SpecialKind::Wildcard)), ['★', '★']);
        assert_eq!(tile_glyphs(Tile::EMPTY)[0], '·');
    }

    #[test]
    fn each_kind_has_its_own_colour() {
        for (i, a) in TileKind::ALL.iter().enumerate() {
            for b in &TileKind::ALL[i + 1..] {
                assert_ne!(kind_color(*a), kind_color(*b));
            }
        }
    }
}
