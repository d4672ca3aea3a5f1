//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::snapshot::{CardSnapshot, GameSnapshot};
use crate::term::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Difficulty, SYMBOL_ALPHABET};

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

/// Format seconds as `MM:SS`.
pub fn format_mm_ss(total_secs: u32) -> String {
    format!("{:02}:{:02}", total_secs / 60, total_secs % 60)
}

/// Per-symbol foreground colors, indexed by alphabet position.
const SYMBOL_COLORS: [Rgb; 15] = [
    Rgb::new(120, 170, 255),
    Rgb::new(235, 90, 100),
    Rgb::new(250, 140, 70),
    Rgb::new(110, 220, 130),
    Rgb::new(240, 215, 90),
    Rgb::new(255, 180, 60),
    Rgb::new(175, 150, 250),
    Rgb::new(95, 210, 220),
    Rgb::new(230, 110, 180),
    Rgb::new(130, 200, 90),
    Rgb::new(170, 175, 190),
    Rgb::new(100, 150, 230),
    Rgb::new(250, 120, 130),
    Rgb::new(200, 160, 120),
    Rgb::new(90, 180, 175),
];

fn symbol_color(symbol: &str) -> Rgb {
    SYMBOL_ALPHABET
        .iter()
        .position(|&s| s == symbol)
        .map(|i| SYMBOL_COLORS[i])
        .unwrap_or(Rgb::new(220, 220, 225))
}

fn symbol_char(symbol: &str) -> char {
    symbol.chars().next().unwrap_or('?')
}

/// A lightweight terminal renderer for the card grid and HUD.
pub struct GameView {
    /// Card tile width in terminal columns.
    tile_w: u16,
    /// Card tile height in terminal rows.
    tile_h: u16,
    /// Gap between tiles, both axes.
    gap: u16,
}

impl Default for GameView {
    fn default() -> Self {
        Self {
            tile_w: 7,
            tile_h: 3,
            gap: 1,
        }
    }
}

impl GameView {
    pub fn new(tile_w: u16, tile_h: u16, gap: u16) -> Self {
        Self { tile_w, tile_h, gap }
    }

    /// Render a snapshot into a framebuffer. `cursor` is the id of the card
    /// under the keyboard cursor.
    pub fn render(&self, snap: &GameSnapshot, cursor: usize, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        fb.clear(CellStyle::default());

        self.draw_header(&mut fb, snap);

        let (cols, _rows) = snap.difficulty.grid();
        let grid_w = (cols) * self.tile_w + cols.saturating_sub(1) * self.gap;
        let grid_x = viewport.width.saturating_sub(grid_w) / 2;
        let grid_y = 5;

        for card in &snap.cards {
            let col = (card.id as u16) % cols;
            let row = (card.id as u16) / cols;
            let x = grid_x + col * (self.tile_w + self.gap);
            let y = grid_y + row * (self.tile_h + self.gap);
            let selected = card.id == cursor && !snap.game_over;
            self.draw_card(&mut fb, x, y, card, selected);
        }

        if snap.game_over {
            self.draw_victory_banner(&mut fb, snap, grid_y, cols);
        }

        let hints = CellStyle::default().dim();
        fb.put_str_centered(
            viewport.height.saturating_sub(1),
            "move: arrows/wasd  flip: enter  1/2/3: difficulty  r: restart  q: quit",
            hints,
        );

        fb
    }

    fn draw_header(&self, fb: &mut FrameBuffer, snap: &GameSnapshot) {
        fb.put_str_centered(0, "M E M O R Y  M A T R I X", CellStyle::default().bold());

        // Difficulty tabs, active one highlighted.
        let labels: Vec<String> = Difficulty::ALL
            .iter()
            .enumerate()
            .map(|(i, level)| format!("[{}] {}", i + 1, level.as_str()))
            .collect();
        let total: u16 = labels.iter().map(|l| l.chars().count() as u16).sum::<u16>()
            + 3 * (labels.len() as u16 - 1);
        let mut x = fb.width().saturating_sub(total) / 2;
        for (label, level) in labels.iter().zip(Difficulty::ALL) {
            let style = if level == snap.difficulty {
                CellStyle::new(Rgb::new(240, 215, 90), Rgb::new(12, 12, 20)).bold()
            } else {
                CellStyle::default().dim()
            };
            fb.put_str(x, 2, label, style);
            x += label.chars().count() as u16 + 3;
        }

        let best = snap
            .best_time
            .map(format_mm_ss)
            .unwrap_or_else(|| "--:--".to_string());
        let stats = format!(
            "Moves {:>3}   Time {}   Best {}",
            snap.moves,
            format_mm_ss(snap.elapsed_secs),
            best
        );
        fb.put_str_centered(3, &stats, CellStyle::default());
    }

    fn draw_card(&self, fb: &mut FrameBuffer, x: u16, y: u16, card: &CardSnapshot, selected: bool) {
        let (bg, fg, ch, bold, dim) = if card.is_matched {
            (
                Rgb::new(24, 52, 34),
                symbol_color(card.symbol),
                symbol_char(card.symbol),
                false,
                true,
            )
        } else if card.is_flipped {
            (
                Rgb::new(55, 58, 78),
                symbol_color(card.symbol),
                symbol_char(card.symbol),
                true,
                false,
            )
        } else {
            (
                Rgb::new(36, 40, 62),
                Rgb::new(140, 145, 170),
                '?',
                false,
                false,
            )
        };

        let bg = if selected { lighten(bg) } else { bg };
        let mut style = CellStyle::new(fg, bg);
        style.bold = bold;
        style.dim = dim;

        fb.fill_rect(x, y, self.tile_w, self.tile_h, ' ', style);
        fb.put_char(x + self.tile_w / 2, y + self.tile_h / 2, ch, style);
    }

    fn draw_victory_banner(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, grid_y: u16, cols: u16) {
        let rows = snap.cards.len() as u16 / cols;
        let grid_h = rows * self.tile_h + rows.saturating_sub(1) * self.gap;
        let mid = grid_y + grid_h / 2;

        let banner = CellStyle::new(Rgb::new(20, 20, 24), Rgb::new(240, 215, 90)).bold();
        let line = format!(
            "  You won in {} moves and {}!  ",
            snap.moves,
            format_mm_ss(snap.elapsed_secs)
        );
        let pad = " ".repeat(line.chars().count());

        fb.put_str_centered(mid.saturating_sub(1), &pad, banner);
        fb.put_str_centered(mid, &line, banner);
        fb.put_str_centered(mid + 1, "  Press r to play again  ", banner);
    }
}

fn lighten(c: Rgb) -> Rgb {
    Rgb::new(
        c.r.saturating_add(45),
        c.g.saturating_add(45),
        c.b.saturating_add(45),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameState;
    use crate::types::Difficulty;

    fn text_of(fb: &FrameBuffer) -> String {
        let mut out = String::new();
        for y in 0..fb.height() {
            for x in 0..fb.width() {
                out.push(fb.get(x, y).map(|c| c.ch).unwrap_or(' '));
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn test_format_mm_ss() {
        assert_eq!(format_mm_ss(0), "00:00");
        assert_eq!(format_mm_ss(5), "00:05");
        assert_eq!(format_mm_ss(65), "01:05");
        assert_eq!(format_mm_ss(600), "10:00");
    }

    #[test]
    fn test_every_symbol_has_a_color() {
        for symbol in SYMBOL_ALPHABET {
            assert_ne!(symbol_color(symbol), Rgb::new(220, 220, 225));
        }
    }

    #[test]
    fn test_face_down_cards_render_as_question_marks() {
        let state = GameState::new(Difficulty::Easy, 42);
        let view = GameView::default();
        let fb = view.render(&state.snapshot(), 0, Viewport::new(80, 24));

        let text = text_of(&fb);
        let question_marks = text.chars().filter(|&c| c == '?').count();
        assert_eq!(question_marks, Difficulty::Easy.card_count());
    }

    #[test]
    fn test_flipped_card_shows_its_symbol() {
        let mut state = GameState::new(Difficulty::Easy, 42);
        state.flip(0);
        let symbol = symbol_char(state.cards()[0].symbol);

        let view = GameView::default();
        let fb = view.render(&state.snapshot(), 0, Viewport::new(80, 24));
        assert!(text_of(&fb).contains(symbol));
    }

    #[test]
    fn test_hud_shows_stats() {
        let mut state = GameState::new(Difficulty::Medium, 42);
        state.set_best_time(Some(83));
        state.flip(0);
        state.tick(65_000);

        let view = GameView::default();
        let fb = view.render(&state.snapshot(), 0, Viewport::new(80, 24));
        let text = text_of(&fb);

        assert!(text.contains("Time 01:05"));
        assert!(text.contains("Best 01:23"));
    }

    #[test]
    fn test_hud_without_record_shows_placeholder() {
        let state = GameState::new(Difficulty::Easy, 42);
        let view = GameView::default();
        let fb = view.render(&state.snapshot(), 0, Viewport::new(80, 24));
        assert!(text_of(&fb).contains("Best --:--"));
    }

    #[test]
    fn test_victory_banner() {
        let state = GameState::new(Difficulty::Easy, 42);
        let mut snap = state.snapshot();
        snap.game_over = true;
        snap.moves = 9;
        snap.elapsed_secs = 42;

        let view = GameView::default();
        let fb = view.render(&snap, 0, Viewport::new(80, 24));
        let text = text_of(&fb);
        assert!(text.contains("You won in 9 moves and 00:42!"));
        assert!(text.contains("Press r to play again"));
    }

    #[test]
    fn test_hard_grid_fits_default_terminal() {
        let view = GameView::default();
        let (cols, rows) = Difficulty::Hard.grid();
        let grid_w = cols * 7 + (cols - 1);
        let grid_h = rows * 3 + (rows - 1);
        assert!(grid_w <= 80);
        assert!(5 + grid_h < 24, "grid must leave room for the hint row");

        // And rendering stays in-bounds on an 80x24 viewport.
        let state = GameState::new(Difficulty::Hard, 7);
        let fb = view.render(&state.snapshot(), 0, Viewport::new(80, 24));
        assert_eq!(fb.width(), 80);
        assert_eq!(fb.height(), 24);
    }
}
