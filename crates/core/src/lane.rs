//! Lane tables and fixed-capacity entity rows.
//!
//! Every visually distinct lane is described by one `LaneSpec` entry, and
//! all lanes are built and advanced by the same code. Per-lane identity is
//! the positional index within the lane.

use arrayvec::ArrayVec;
use tui_frogger_types::Sprite;

use crate::entity::Entity;

/// Upper bound on entities in a single lane (the dense turtle row).
pub const MAX_LANE_ENTITIES: usize = 12;

/// Static description of one lane: where it is, what moves in it, how
/// fast, and how the members are spaced at world reset.
#[derive(Debug, Clone, Copy)]
pub struct LaneSpec {
    pub y: i32,
    pub count: usize,
    pub offset: i32,
    pub spacing: i32,
    pub velocity: i32,
    pub sprite: Sprite,
    pub width_tiles: u8,
}

/// Road lanes, bottom to top.
pub const HAZARD_LANES: [LaneSpec; 5] = [
    LaneSpec {
        y: 208,
        count: 3,
        offset: 50,
        spacing: 80,
        velocity: -1,
        sprite: Sprite::Buggy,
        width_tiles: 1,
    },
    LaneSpec {
        y: 192,
        count: 3,
        offset: 30,
        spacing: 90,
        velocity: 2,
        sprite: Sprite::Bulldozer,
        width_tiles: 1,
    },
    LaneSpec {
        y: 176,
        count: 3,
        offset: 70,
        spacing: 85,
        velocity: -1,
        sprite: Sprite::Sedan,
        width_tiles: 1,
    },
    LaneSpec {
        y: 160,
        count: 2,
        offset: 40,
        spacing: 120,
        velocity: 3,
        sprite: Sprite::Racer,
        width_tiles: 1,
    },
    LaneSpec {
        y: 144,
        count: 2,
        offset: 60,
        spacing: 180,
        velocity: -1,
        sprite: Sprite::TruckCab,
        width_tiles: 2,
    },
];

/// Log lanes, top to bottom.
pub const LOG_LANES: [LaneSpec; 3] = [
    LaneSpec {
        y: 48,
        count: 3,
        offset: 0,
        spacing: 96,
        velocity: 1,
        sprite: Sprite::LogMid,
        width_tiles: 4,
    },
    LaneSpec {
        y: 80,
        count: 2,
        offset: 60,
        spacing: 120,
        velocity: 2,
        sprite: Sprite::LogMid,
        width_tiles: 6,
    },
    LaneSpec {
        y: 96,
        count: 3,
        offset: 30,
        spacing: 120,
        velocity: 1,
        sprite: Sprite::LogMid,
        width_tiles: 3,
    },
];

/// One lane's worth of entities.
#[derive(Debug, Clone)]
pub struct Lane {
    pub y: i32,
    pub entities: ArrayVec<Entity, MAX_LANE_ENTITIES>,
}

impl Lane {
    /// Build a lane in its world-reset configuration.
    pub fn from_spec(spec: &LaneSpec) -> Self {
        let mut entities = ArrayVec::new();
        for i in 0..spec.count {
            entities.push(Entity::new(
                spec.offset + i as i32 * spec.spacing,
                spec.y,
                spec.sprite,
                spec.velocity,
                spec.width_tiles,
            ));
        }
        Self { y: spec.y, entities }
    }

    pub fn latch_prev(&mut self) {
        for e in &mut self.entities {
            e.latch_prev();
        }
    }

    pub fn advance(&mut self) {
        for e in &mut self.entities {
            e.advance();
        }
    }

    /// Velocity of the platform under the given pixel column, if any.
    pub fn platform_under(&self, px: i32) -> Option<i32> {
        self.entities
            .iter()
            .find(|e| e.contains_x(px))
            .map(|e| e.velocity)
    }
}
