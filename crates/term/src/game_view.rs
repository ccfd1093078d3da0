//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{color_of, GameSnapshot};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{GamePhase, PieceKind};

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

/// A lightweight terminal renderer for the game.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
    show_fps: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

const SCREEN_BG: Rgb = Rgb::new(0, 0, 0);
const FIELD_BG: Rgb = Rgb::from_rgba(0x2020_20ff);
const GRID_FG: Rgb = Rgb::from_rgba(0x4040_40ff);
const HINT_FG: Rgb = Rgb::from_rgba(0x8080_80ff);
const FPS_FG: Rgb = Rgb::from_rgba(0x8080_ffff);
const TEXT_FG: Rgb = Rgb::new(255, 255, 255);

const TITLE_MENU: [&str; 4] = [
    "SPACE  start a game",
    "H      high score",
    "R      rules",
    "ESC    quit",
];

const RULES: [&str; 6] = [
    "Complete whole rows of blocks; more rows at once score more.",
    "A full row disappears and you are awarded points.",
    "The game goes on while the field has room.",
    "When a new piece has no room to appear, the game is over.",
    "Your best score is kept and can be viewed from the menu.",
    "Have fun!",
];

const CONTROLS: [&str; 5] = [
    "<- ->  move",
    "Z / X  rotate",
    "DOWN   soft drop",
    "UP     hard drop",
    "P      pause",
];

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
            anchor_y: AnchorY::Center,
            show_fps: true,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w,
            cell_h,
            ..Self::default()
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    pub fn with_fps(mut self, show_fps: bool) -> Self {
        self.show_fps = show_fps;
        self
    }

    /// Render the current game state into an existing framebuffer.
    ///
    /// This is the allocation-free hot path. Callers can reuse a framebuffer
    /// across frames and only resize when the terminal size changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        if snap.phase.shows_playfield() {
            self.draw_playing(fb, snap, viewport);
        } else {
            match snap.phase {
                GamePhase::HighScoreView => self.draw_high_score(fb, snap, viewport),
                GamePhase::RulesView => self.draw_rules(fb, viewport),
                _ => self.draw_title(fb, viewport),
            }
        }

        if self.show_fps {
            draw_fps(fb, snap);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_title(&self, fb: &mut FrameBuffer, viewport: Viewport) {
        let text = CellStyle::new(TEXT_FG, SCREEN_BG);
        let block_h = TITLE_MENU.len() as u16 + 2;
        let mut y = self.top_for(viewport, block_h);

        fb.put_str_centered(0, viewport.width, y, "B L O C K F A L L", text.bold());
        y = y.saturating_add(2);

        let menu_w = TITLE_MENU.iter().map(|s| s.len()).max().unwrap_or(0) as u16;
        let x = viewport.width.saturating_sub(menu_w) / 2;
        for line in TITLE_MENU {
            fb.put_str(x, y, line, text);
            y = y.saturating_add(1);
        }
    }

    fn draw_high_score(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, viewport: Viewport) {
        let text = CellStyle::new(TEXT_FG, SCREEN_BG);
        let hint = CellStyle::new(HINT_FG, SCREEN_BG);
        let y = self.top_for(viewport, 3);

        let label = "HIGH SCORE: ";
        let digits = decimal_width(snap.high_score);
        let x = viewport.width.saturating_sub(label.len() as u16 + digits) / 2;
        let x = fb.put_str(x, y, label, text.bold());
        fb.put_u32(x, y, snap.high_score, text.bold());

        fb.put_str_centered(0, viewport.width, y.saturating_add(2), "SPACE - back", hint);
    }

    fn draw_rules(&self, fb: &mut FrameBuffer, viewport: Viewport) {
        let text = CellStyle::new(TEXT_FG, SCREEN_BG);
        let hint = CellStyle::new(HINT_FG, SCREEN_BG);
        let block_h = RULES.len() as u16 + 4;
        let mut y = self.top_for(viewport, block_h);

        fb.put_str_centered(0, viewport.width, y, "RULES", text.bold());
        y = y.saturating_add(2);

        let rules_w = RULES.iter().map(|s| s.len()).max().unwrap_or(0) as u16;
        let x = viewport.width.saturating_sub(rules_w) / 2;
        for line in RULES {
            fb.put_str(x, y, line, text);
            y = y.saturating_add(1);
        }

        fb.put_str_centered(0, viewport.width, y.saturating_add(1), "SPACE - back", hint);
    }

    fn draw_playing(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, viewport: Viewport) {
        let board_px_w = u16::from(snap.width) * self.cell_w;
        let board_px_h = u16::from(snap.height) * self.cell_h;
        let frame_w = board_px_w + 2;
        let frame_h = board_px_h + 2;

        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(frame_h) / 2,
            AnchorY::Top => 0,
        };

        let border = CellStyle::new(Rgb::new(200, 200, 200), SCREEN_BG);
        self.draw_border(fb, start_x, start_y, frame_w, frame_h, border);

        // Locked board cells.
        for y in 0..i32::from(snap.height) {
            for x in 0..i32::from(snap.width) {
                match snap.cell(x, y).flatten() {
                    Some(kind) => self.draw_board_cell(fb, start_x, start_y, x, y, kind),
                    None => self.draw_empty_cell(fb, start_x, start_y, x, y),
                }
            }
        }

        // Active piece, clipped to the field.
        if let Some(active) = snap.active {
            for (x, y) in active.blocks() {
                if x >= 0 && x < i32::from(snap.width) && y >= 0 && y < i32::from(snap.height) {
                    self.draw_board_cell(fb, start_x, start_y, x, y, active.kind);
                }
            }
        }

        self.draw_side_panel(fb, snap, viewport, start_x, start_y, frame_w);

        let hint = CellStyle::new(HINT_FG, SCREEN_BG);
        let below = start_y.saturating_add(frame_h);
        match snap.phase {
            GamePhase::Paused => {
                self.draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, "PAUSED");
                fb.put_str_centered(start_x, frame_w, below, "SPACE - resume", hint);
            }
            GamePhase::GameOver => {
                self.draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, "GAME OVER");
                fb.put_str_centered(start_x, frame_w, below, "SPACE - back to menu", hint);
            }
            _ => {}
        }
    }

    fn top_for(&self, viewport: Viewport, block_h: u16) -> u16 {
        match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(block_h) / 2,
            AnchorY::Top => 1,
        }
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
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

    fn draw_empty_cell(&self, fb: &mut FrameBuffer, start_x: u16, start_y: u16, x: i32, y: i32) {
        let style = CellStyle::new(GRID_FG, FIELD_BG).dim();
        self.fill_cell_rect(fb, start_x, start_y, x, y, '·', style);
    }

    fn draw_board_cell(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        x: i32,
        y: i32,
        kind: PieceKind,
    ) {
        let style = CellStyle::new(Rgb::from_rgba(color_of(kind)), FIELD_BG).bold();
        self.fill_cell_rect(fb, start_x, start_y, x, y, '█', style);
    }

    /// `cell_x`/`cell_y` must already be inside the field.
    #[allow(clippy::too_many_arguments)]
    fn fill_cell_rect(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        cell_x: i32,
        cell_y: i32,
        ch: char,
        style: CellStyle,
    ) {
        let px = start_x + 1 + cell_x as u16 * self.cell_w;
        let py = start_y + 1 + cell_y as u16 * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
    ) {
        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        if panel_x >= viewport.width {
            return;
        }
        let panel_w = viewport.width - panel_x;
        if panel_w < 12 {
            return;
        }

        let label = CellStyle::new(Rgb::new(220, 220, 220), SCREEN_BG).bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), SCREEN_BG);
        let hint = CellStyle::new(HINT_FG, SCREEN_BG);

        let mut y = start_y;
        for (name, amount) in [
            ("LINES", snap.lines),
            ("LEVEL", snap.level),
            ("SCORE", snap.score),
            ("HIGH SCORE", snap.high_score),
        ] {
            fb.put_str(panel_x, y, name, label);
            y = y.saturating_add(1);
            fb.put_u32(panel_x, y, amount, value);
            y = y.saturating_add(2);
        }

        if panel_w >= 16 {
            for line in CONTROLS {
                if y >= viewport.height {
                    break;
                }
                fb.put_str(panel_x, y, line, hint);
                y = y.saturating_add(1);
            }
        }
    }

    fn draw_overlay_text(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
        text: &str,
    ) {
        let mid_y = start_y.saturating_add(frame_h / 2);
        let style = CellStyle::new(TEXT_FG, SCREEN_BG).bold();
        fb.put_str_centered(start_x, frame_w, mid_y, text, style);
    }
}

/// "FPS: 59.9" in the top-left corner, one decimal place.
fn draw_fps(fb: &mut FrameBuffer, snap: &GameSnapshot) {
    let Some(fps) = snap.fps() else {
        return;
    };
    let style = CellStyle::new(FPS_FG, SCREEN_BG);
    let tenths = (fps * 10.0).round().min(u32::MAX as f32) as u32;

    let x = fb.put_str(0, 0, "FPS: ", style);
    let x = fb.put_u32(x, 0, tenths / 10, style);
    let x = fb.put_str(x, 0, ".", style);
    fb.put_u32(x, 0, tenths % 10, style);
}

fn decimal_width(mut n: u32) -> u16 {
    let mut width = 1;
    while n >= 10 {
        n /= 10;
        width += 1;
    }
    width
}
