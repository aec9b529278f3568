//! Sprite/tile atlas: fixed-size pixel blocks behind a lookup.
//!
//! Sprites are 16×16 blocks of 4-bit palette indices, with index 0
//! transparent. The blocks are painted once at construction; the atlas
//! itself carries no game logic.

use tui_frogger_types::palette::*;
use tui_frogger_types::{
    Sprite, FB_H, FB_W, HOME_ROW_Y, HOME_SLOT_X, RIVER_TOP, ROAD_TOP, TILE_H, TILE_W,
};

use crate::fb::FrameBuffer;

pub const SPRITE_W: i32 = TILE_W;
pub const SPRITE_H: i32 = TILE_H;

/// One 16×16 sprite block, row-major.
pub type Block = [u8; (SPRITE_W * SPRITE_H) as usize];

fn px(b: &mut Block, x: i32, y: i32, c: u8) {
    if (0..SPRITE_W).contains(&x) && (0..SPRITE_H).contains(&y) {
        b[(y * SPRITE_W + x) as usize] = c;
    }
}

fn fill(b: &mut Block, x: i32, y: i32, w: i32, h: i32, c: u8) {
    for dy in 0..h {
        for dx in 0..w {
            px(b, x + dx, y + dy, c);
        }
    }
}

fn hline(b: &mut Block, x0: i32, x1: i32, y: i32, c: u8) {
    for x in x0..=x1 {
        px(b, x, y, c);
    }
}

/// Mirror the left half onto the right, for symmetric sprites.
fn mirror_h(b: &mut Block) {
    for y in 0..SPRITE_H {
        for x in 0..SPRITE_W / 2 {
            let c = b[(y * SPRITE_W + x) as usize];
            b[(y * SPRITE_W + (SPRITE_W - 1 - x)) as usize] = c;
        }
    }
}

fn frog() -> Block {
    let mut b = [0; 256];
    // Head and body, eye on the left then mirrored.
    fill(&mut b, 5, 3, 3, 4, FROG);
    fill(&mut b, 4, 7, 4, 7, FROG);
    px(&mut b, 5, 3, WHITE);
    px(&mut b, 5, 4, BLACK);
    // Folded front and hind legs.
    fill(&mut b, 2, 5, 2, 4, LEAF);
    fill(&mut b, 2, 11, 2, 4, LEAF);
    mirror_h(&mut b);
    // Belly stripe after mirroring so it stays centered.
    fill(&mut b, 6, 9, 4, 3, LIME);
    b
}

fn frog_hop() -> Block {
    let mut b = [0; 256];
    fill(&mut b, 5, 2, 3, 4, FROG);
    fill(&mut b, 4, 6, 4, 7, FROG);
    px(&mut b, 5, 2, WHITE);
    px(&mut b, 5, 3, BLACK);
    // Legs stretched for the jump.
    fill(&mut b, 1, 1, 2, 6, LEAF);
    fill(&mut b, 1, 10, 2, 6, LEAF);
    px(&mut b, 3, 6, LEAF);
    mirror_h(&mut b);
    fill(&mut b, 6, 8, 4, 3, LIME);
    b
}

fn skull() -> Block {
    let mut b = [0; 256];
    fill(&mut b, 4, 3, 4, 6, WHITE);
    fill(&mut b, 3, 5, 5, 4, WHITE);
    fill(&mut b, 5, 5, 2, 2, BLACK);
    px(&mut b, 7, 8, BLACK);
    // Jaw with tooth gaps.
    fill(&mut b, 5, 10, 3, 3, WHITE);
    px(&mut b, 6, 11, BLACK);
    mirror_h(&mut b);
    b
}

fn fly() -> Block {
    let mut b = [0; 256];
    fill(&mut b, 7, 6, 2, 5, BLACK);
    px(&mut b, 7, 5, BLACK);
    px(&mut b, 8, 5, BLACK);
    // Wings.
    fill(&mut b, 4, 6, 3, 2, SKY);
    fill(&mut b, 9, 6, 3, 2, SKY);
    px(&mut b, 5, 9, SKY);
    px(&mut b, 10, 9, SKY);
    b
}

fn home_a() -> Block {
    let mut b = [0; 256];
    fill(&mut b, 5, 3, 3, 3, FROG);
    fill(&mut b, 3, 6, 5, 7, FROG);
    px(&mut b, 5, 3, WHITE);
    px(&mut b, 5, 4, BLACK);
    mirror_h(&mut b);
    b
}

fn home_b() -> Block {
    let mut b = [0; 256];
    // Settled pose, eyes closed.
    fill(&mut b, 5, 5, 3, 2, FROG);
    fill(&mut b, 3, 7, 5, 6, FROG);
    px(&mut b, 5, 6, BLACK);
    mirror_h(&mut b);
    b
}

fn car(body: u8, trim: u8, nose_left: bool) -> Block {
    let mut b = [0; 256];
    fill(&mut b, 1, 5, 14, 7, body);
    fill(&mut b, 0, 7, 16, 3, body);
    // Cockpit glass toward the nose.
    let glass_x = if nose_left { 3 } else { 9 };
    fill(&mut b, glass_x, 6, 4, 3, trim);
    // Tail stripe.
    let stripe_x = if nose_left { 12 } else { 2 };
    fill(&mut b, stripe_x, 5, 2, 7, trim);
    // Wheels.
    fill(&mut b, 2, 3, 3, 2, BLACK);
    fill(&mut b, 11, 3, 3, 2, BLACK);
    fill(&mut b, 2, 12, 3, 2, BLACK);
    fill(&mut b, 11, 12, 3, 2, BLACK);
    b
}

fn truck_cab() -> Block {
    let mut b = [0; 256];
    // Cab on the left (the truck drives left), trailer hitch behind.
    fill(&mut b, 1, 5, 7, 7, SLATE);
    fill(&mut b, 1, 6, 2, 3, SKY);
    fill(&mut b, 8, 4, 8, 9, WHITE);
    fill(&mut b, 2, 12, 3, 2, BLACK);
    fill(&mut b, 10, 12, 4, 2, BLACK);
    b
}

fn truck_tail() -> Block {
    let mut b = [0; 256];
    fill(&mut b, 0, 4, 15, 9, WHITE);
    hline(&mut b, 0, 14, 8, SLATE);
    fill(&mut b, 9, 12, 4, 2, BLACK);
    b
}

fn log_mid() -> Block {
    let mut b = [0; 256];
    fill(&mut b, 0, 5, 16, 7, WOOD);
    hline(&mut b, 0, 15, 5, BARK);
    hline(&mut b, 0, 15, 11, BARK);
    // Grain flecks.
    px(&mut b, 3, 8, BARK);
    px(&mut b, 9, 7, BARK);
    px(&mut b, 13, 9, BARK);
    b
}

fn log_left() -> Block {
    let mut b = log_mid();
    // Blunt the end and show end grain.
    fill(&mut b, 0, 5, 3, 7, TRANSPARENT);
    for y in 6..11 {
        px(&mut b, 3, y, BARK);
    }
    fill(&mut b, 4, 7, 2, 3, ORANGE);
    b
}

fn log_right() -> Block {
    let mut b = log_mid();
    fill(&mut b, 13, 5, 3, 7, TRANSPARENT);
    for y in 6..11 {
        px(&mut b, 12, y, BARK);
    }
    b
}

fn turtle(phase: usize) -> Block {
    let mut b = [0; 256];
    // Shell.
    fill(&mut b, 4, 5, 8, 7, OLIVE);
    fill(&mut b, 5, 4, 6, 9, OLIVE);
    fill(&mut b, 6, 6, 4, 4, LEAF);
    // Head pointing left, the direction of travel.
    fill(&mut b, 1, 7, 3, 3, FROG);
    px(&mut b, 1, 7, BLACK);
    // Paddling legs, offset per animation phase.
    let kick = phase as i32;
    fill(&mut b, 4 - kick, 2, 3, 2, FROG);
    fill(&mut b, 9 + kick, 2, 3, 2, FROG);
    fill(&mut b, 4 - kick, 13, 3, 2, FROG);
    fill(&mut b, 9 + kick, 13, 3, 2, FROG);
    b
}

fn turtle_dive() -> Block {
    let mut b = [0; 256];
    // Low profile, mostly underwater.
    fill(&mut b, 4, 7, 8, 4, OLIVE);
    fill(&mut b, 6, 8, 4, 2, LEAF);
    px(&mut b, 2, 8, SKY);
    px(&mut b, 13, 9, SKY);
    b
}

/// The sprite atlas.
pub struct Atlas {
    blocks: [Block; Sprite::COUNT],
}

impl Atlas {
    pub fn new() -> Self {
        let mut blocks = [[0u8; 256]; Sprite::COUNT];
        blocks[Sprite::Frog.index()] = frog();
        blocks[Sprite::FrogHop.index()] = frog_hop();
        blocks[Sprite::Skull.index()] = skull();
        blocks[Sprite::Fly.index()] = fly();
        blocks[Sprite::HomeA.index()] = home_a();
        blocks[Sprite::HomeB.index()] = home_b();
        blocks[Sprite::Buggy.index()] = car(YELLOW, RED, true);
        blocks[Sprite::Bulldozer.index()] = car(ORANGE, BLACK, false);
        blocks[Sprite::Sedan.index()] = car(SKY, WHITE, true);
        blocks[Sprite::Racer.index()] = car(RED, WHITE, false);
        blocks[Sprite::TruckCab.index()] = truck_cab();
        blocks[Sprite::TruckTail.index()] = truck_tail();
        blocks[Sprite::LogLeft.index()] = log_left();
        blocks[Sprite::LogMid.index()] = log_mid();
        blocks[Sprite::LogRight.index()] = log_right();
        blocks[Sprite::TurtleA.index()] = turtle(0);
        blocks[Sprite::TurtleB.index()] = turtle(1);
        blocks[Sprite::TurtleC.index()] = turtle(2);
        blocks[Sprite::TurtleDive.index()] = turtle_dive();
        Self { blocks }
    }

    pub fn block(&self, sprite: Sprite) -> &Block {
        &self.blocks[sprite.index()]
    }
}

impl Default for Atlas {
    fn default() -> Self {
        Self::new()
    }
}

/// Bake the static background the composer restores damage from.
///
/// Bands top to bottom: grass verge with home bays, river, median strip,
/// road with dashed lane dividers, start strip.
pub fn bake_background() -> FrameBuffer {
    let mut bg = FrameBuffer::screen();

    for y in 0..FB_H {
        for x in 0..FB_W {
            let c = if y < HOME_ROW_Y {
                LEAF
            } else if y < RIVER_TOP {
                // Home bays: dark water openings between grass blocks.
                if HOME_SLOT_X.iter().any(|&sx| x >= sx && x < sx + TILE_W) {
                    BLACK
                } else {
                    LEAF
                }
            } else if y < ROAD_TOP - TILE_H {
                WATER
            } else if y < ROAD_TOP {
                LEAF
            } else if y < FB_H - TILE_H {
                ROAD
            } else {
                LEAF
            };
            bg.set_pixel(x, y, c);
        }
    }

    // Dashed dividers between road lanes.
    for lane_top in [160, 176, 192, 208] {
        for x in 0..FB_W {
            if (x / 8) % 2 == 0 {
                bg.set_pixel(x, lane_top, WHITE);
            }
        }
    }

    bg
}
