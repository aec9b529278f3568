//! Frame composer: reconciles "what changed" with "what must be redrawn".
//!
//! Two strategies over the same scene walk:
//!
//! - **Full repaint** (`compose_full`): background, then every dynamic
//!   element in fixed z-order.
//! - **Dirty-rectangle repaint** (`compose_incremental`): damage rects
//!   from every entity that moved or changed sprite (union of previous
//!   and current boxes) plus fixed regions whose scalar state changed;
//!   background is restored inside the damage and the scene is redrawn
//!   clipped to each rect, in the same z-order.
//!
//! The two must produce pixel-identical frames for the same world state;
//! `compose_incremental` exists purely to cut pixel writes.
//!
//! Call exactly one compose per simulation step: entity `prev_*` state is
//! latched per tick, so skipping steps would leave stale damage behind.

use arrayvec::ArrayVec;

use tui_frogger_core::{Entity, World};
use tui_frogger_types::palette;
use tui_frogger_types::{
    Direction, Sprite, BAR_H, BAR_W, BAR_X0, BAR_Y0, HOME_ROW_Y, HOME_SLOT_X, SCORE_CAP, TILE_H,
    TILE_W,
};

use crate::atlas::{bake_background, Atlas, SPRITE_H, SPRITE_W};
use crate::fb::{FrameBuffer, Rect};
use crate::font;

/// Damage list capacity; overflow falls back to a full repaint.
pub const MAX_DAMAGE: usize = 96;

const SCORE_RECT: Rect = Rect::new(8, 8, 104, 8);
const LIVES_RECT: Rect = Rect::new(8, 242, 80, 14);
const BAR_RECT: Rect = Rect::new(BAR_X0, BAR_Y0, BAR_W, BAR_H);

/// What was last drawn for the frog; a change in any field damages it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct FrogView {
    x: i32,
    y: i32,
    sprite: Sprite,
    facing: Direction,
}

/// Scalar state as of the last presented frame. Entities track their own
/// previous positions; everything else that can move pixels lives here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Presented {
    generation: u32,
    game_over: bool,
    score: u32,
    lives: u32,
    bar_columns: i32,
    filled: [bool; 5],
    fly_target: Option<usize>,
    captured: Sprite,
    frog: FrogView,
    death_marker: Option<(i32, i32)>,
}

pub struct Composer {
    atlas: Atlas,
    background: FrameBuffer,
    presented: Option<Presented>,
}

impl Composer {
    pub fn new() -> Self {
        Self {
            atlas: Atlas::new(),
            background: bake_background(),
            presented: None,
        }
    }

    /// Force the next incremental compose to repaint everything.
    pub fn invalidate(&mut self) {
        self.presented = None;
    }

    /// Repaint the whole frame from scratch.
    pub fn compose_full(&mut self, world: &World, fb: &mut FrameBuffer) {
        fb.clone_from(&self.background);
        self.draw_scene(world, fb, Rect::SCREEN);
        self.presented = Some(Self::snapshot(world));
    }

    /// Repaint only damaged regions of a frame previously composed into
    /// `fb`. Falls back to a full repaint when there is no previous frame,
    /// the world was rebuilt, or the damage list overflows.
    pub fn compose_incremental(&mut self, world: &World, fb: &mut FrameBuffer) {
        let cur = Self::snapshot(world);
        let damage = match self.presented {
            Some(prev) => Self::collect_damage(world, &prev, &cur),
            None => None,
        };
        let Some(damage) = damage else {
            self.compose_full(world, fb);
            return;
        };

        for r in &damage {
            fb.copy_rect_from(&self.background, *r);
        }
        for r in &damage {
            self.draw_scene(world, fb, *r);
        }
        self.presented = Some(cur);
    }

    fn snapshot(world: &World) -> Presented {
        let mut filled = [false; 5];
        for (i, slot) in world.homes.iter().enumerate() {
            filled[i] = slot.filled;
        }
        Presented {
            generation: world.generation(),
            game_over: world.game_over(),
            score: world.score(),
            lives: world.lives(),
            bar_columns: world.bar_columns(),
            filled,
            fly_target: if world.fly.visible { world.fly.target } else { None },
            captured: world.captured_sprite(),
            frog: FrogView {
                x: world.frog.entity.x,
                y: world.frog.entity.y,
                sprite: world.frog.entity.sprite,
                facing: world.frog.facing,
            },
            death_marker: world.death_marker.map(|m| (m.x, m.y)),
        }
    }

    fn collect_damage(
        world: &World,
        prev: &Presented,
        cur: &Presented,
    ) -> Option<ArrayVec<Rect, MAX_DAMAGE>> {
        // A rebuilt world or an overlay toggle dirties everything.
        if prev.generation != cur.generation || prev.game_over != cur.game_over {
            return None;
        }

        let mut rects: ArrayVec<Rect, MAX_DAMAGE> = ArrayVec::new();
        let mut overflow = false;
        {
            let mut push = |r: Rect| {
                if let Some(clipped) = r.clipped_to_screen() {
                    if rects.try_push(clipped).is_err() {
                        overflow = true;
                    }
                }
            };

            for lane in world.hazards.iter().chain(world.logs.iter()) {
                for e in &lane.entities {
                    if e.changed() {
                        push(entity_rect(e).union(entity_prev_rect(e)));
                    }
                }
            }
            for row in &world.turtles {
                for e in &row.entities {
                    if e.changed() {
                        push(entity_rect(e).union(entity_prev_rect(e)));
                    }
                }
            }

            if prev.frog != cur.frog {
                push(frog_rect(&prev.frog).union(frog_rect(&cur.frog)));
            }

            if prev.death_marker != cur.death_marker {
                if let Some((x, y)) = prev.death_marker {
                    push(Rect::new(x, y, TILE_W, TILE_H));
                }
                if let Some((x, y)) = cur.death_marker {
                    push(Rect::new(x, y, TILE_W, TILE_H));
                }
            }

            for i in 0..HOME_SLOT_X.len() {
                let marker_changed = prev.filled[i] != cur.filled[i]
                    || (cur.filled[i] && prev.captured != cur.captured)
                    || (prev.fly_target == Some(i)) != (cur.fly_target == Some(i));
                if marker_changed {
                    push(Rect::new(HOME_SLOT_X[i], HOME_ROW_Y, TILE_W, TILE_H));
                }
            }

            if prev.score != cur.score {
                push(SCORE_RECT);
            }
            if prev.lives != cur.lives {
                push(LIVES_RECT);
            }
            if prev.bar_columns != cur.bar_columns {
                push(BAR_RECT);
            }
        }

        if overflow {
            None
        } else {
            Some(rects)
        }
    }

    /// Draw every dynamic element intersecting `clip`, back to front:
    /// home markers, platforms, hazards, frog, death marker, HUD, overlay.
    fn draw_scene(&self, world: &World, fb: &mut FrameBuffer, clip: Rect) {
        let captured = world.captured_sprite();
        for (i, slot) in world.homes.iter().enumerate() {
            if slot.filled {
                self.blit(fb, captured, slot.x, HOME_ROW_Y, clip);
            }
            if world.fly.targets(i) {
                self.blit(fb, Sprite::Fly, slot.x, HOME_ROW_Y, clip);
            }
        }

        for lane in &world.logs {
            for e in &lane.entities {
                self.draw_log(fb, e, clip);
            }
        }
        for row in &world.turtles {
            for (i, e) in row.entities.iter().enumerate() {
                if !row.is_hidden(i) {
                    self.blit(fb, e.sprite, e.x, e.y, clip);
                }
            }
        }
        for lane in &world.hazards {
            for e in &lane.entities {
                if e.width_tiles == 2 {
                    self.blit(fb, Sprite::TruckCab, e.x, e.y, clip);
                    self.blit(fb, Sprite::TruckTail, e.x + TILE_W, e.y, clip);
                } else {
                    self.blit(fb, e.sprite, e.x, e.y, clip);
                }
            }
        }

        let frog = &world.frog;
        self.blit_oriented(
            fb,
            frog.entity.sprite,
            frog.entity.x,
            frog.entity.y,
            frog.facing,
            clip,
        );

        if let Some(m) = &world.death_marker {
            self.blit(fb, Sprite::Skull, m.x, m.y, clip);
        }

        self.draw_hud(world, fb, clip);

        if world.game_over() {
            self.draw_overlay(world, fb, clip);
        }
    }

    fn draw_log(&self, fb: &mut FrameBuffer, e: &Entity, clip: Rect) {
        let n = e.width_tiles as i32;
        if n <= 1 {
            self.blit(fb, Sprite::LogMid, e.x, e.y, clip);
            return;
        }
        self.blit(fb, Sprite::LogLeft, e.x, e.y, clip);
        for i in 1..n - 1 {
            self.blit(fb, Sprite::LogMid, e.x + i * TILE_W, e.y, clip);
        }
        self.blit(fb, Sprite::LogRight, e.x + (n - 1) * TILE_W, e.y, clip);
    }

    fn draw_hud(&self, world: &World, fb: &mut FrameBuffer, clip: Rect) {
        for i in 0..world.lives() as i32 {
            self.blit(fb, Sprite::Frog, 8 + i * TILE_W, 242, clip);
        }

        self.draw_text(fb, "SCORE", 8, 8, palette::WHITE, clip);
        self.draw_number(fb, world.score(), 60, 8, palette::WHITE, clip);

        let cols = world.bar_columns();
        if cols > 0 {
            let bar = Rect::new(BAR_X0 + (BAR_W - cols), BAR_Y0, cols, BAR_H);
            if let Some(r) = bar.intersection(&clip) {
                fb.fill_rect(r, palette::BAR);
            }
        }
    }

    fn draw_overlay(&self, world: &World, fb: &mut FrameBuffer, clip: Rect) {
        self.draw_text(fb, "GAME OVER", 76, 100, palette::RED, clip);
        self.draw_text(fb, "FINAL SCORE", 68, 120, palette::RED, clip);
        self.draw_number(fb, world.score(), 96, 140, palette::RED, clip);
        self.draw_text(fb, "PRESS ENTER TO RESTART", 24, 180, palette::RED, clip);
    }

    fn blit(&self, fb: &mut FrameBuffer, sprite: Sprite, sx: i32, sy: i32, clip: Rect) {
        self.blit_oriented(fb, sprite, sx, sy, Direction::Up, clip);
    }

    /// Copy a sprite block, rotated for the given facing, skipping
    /// transparent pixels and clipping to `clip`.
    fn blit_oriented(
        &self,
        fb: &mut FrameBuffer,
        sprite: Sprite,
        sx: i32,
        sy: i32,
        facing: Direction,
        clip: Rect,
    ) {
        let bounds = Rect::new(sx, sy, SPRITE_W, SPRITE_H);
        let Some(area) = bounds.intersection(&clip) else {
            return;
        };
        let block = self.atlas.block(sprite);
        for y in area.y..area.y + area.h {
            for x in area.x..area.x + area.w {
                let dx = x - sx;
                let dy = y - sy;
                let (ux, uy) = match facing {
                    Direction::Up => (dx, dy),
                    Direction::Down => (SPRITE_W - 1 - dx, SPRITE_H - 1 - dy),
                    Direction::Left => (SPRITE_W - 1 - dy, dx),
                    Direction::Right => (dy, SPRITE_H - 1 - dx),
                };
                let c = block[(uy * SPRITE_W + ux) as usize];
                if c != palette::TRANSPARENT {
                    fb.set_pixel(x, y, c);
                }
            }
        }
    }

    fn draw_glyph(
        &self,
        fb: &mut FrameBuffer,
        glyph: &[u8; 8],
        x: i32,
        y: i32,
        color: u8,
        clip: Rect,
    ) {
        for (dy, row) in glyph.iter().enumerate() {
            for dx in 0..font::GLYPH_W {
                if row & (0x80 >> dx) != 0 {
                    let px = x + dx;
                    let py = y + dy as i32;
                    if clip.contains(px, py) {
                        fb.set_pixel(px, py, color);
                    }
                }
            }
        }
    }

    fn draw_text(&self, fb: &mut FrameBuffer, text: &str, x: i32, y: i32, color: u8, clip: Rect) {
        let mut cx = x;
        for ch in text.chars() {
            if let Some(g) = font::glyph(ch) {
                self.draw_glyph(fb, g, cx, y, color, clip);
            }
            cx += font::GLYPH_W;
        }
    }

    /// Draw a number left-aligned at `x`, most significant digit first.
    fn draw_number(&self, fb: &mut FrameBuffer, value: u32, x: i32, y: i32, color: u8, clip: Rect) {
        let mut value = value.min(SCORE_CAP);
        if value == 0 {
            self.draw_glyph(fb, font::digit(0), x, y, color, clip);
            return;
        }

        let mut digits = 0;
        let mut probe = value;
        while probe > 0 {
            probe /= 10;
            digits += 1;
        }

        let mut cx = x + (digits - 1) * font::GLYPH_W;
        while value > 0 {
            self.draw_glyph(fb, font::digit(value % 10), cx, y, color, clip);
            value /= 10;
            cx -= font::GLYPH_W;
        }
    }
}

impl Default for Composer {
    fn default() -> Self {
        Self::new()
    }
}

fn entity_rect(e: &Entity) -> Rect {
    Rect::new(e.x, e.y, e.width_px(), e.height_px())
}

fn entity_prev_rect(e: &Entity) -> Rect {
    Rect::new(e.prev_x, e.prev_y, e.width_px(), e.height_px())
}

fn frog_rect(v: &FrogView) -> Rect {
    Rect::new(v.x, v.y, TILE_W, TILE_H)
}
