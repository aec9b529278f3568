//! Turtle rows and the submersion state machine.
//!
//! Each turtle row is a set of clusters of individually drawn turtles
//! moving in lockstep. Exactly one cluster per row — the designated
//! diving cluster — periodically submerges and becomes unsafe to stand
//! on; the other clusters are permanently safe.

use arrayvec::ArrayVec;
use tui_frogger_types::{Sprite, DIVE_START, DIVE_SURFACE, TILE_W, TURTLE_ANIM_TICKS};

use crate::entity::Entity;
use crate::lane::MAX_LANE_ENTITIES;

/// Static description of one turtle row.
#[derive(Debug, Clone, Copy)]
pub struct TurtleRowSpec {
    pub y: i32,
    pub clusters: usize,
    pub per_cluster: usize,
    pub cluster_stride: i32,
    pub velocity: i32,
}

/// The two turtle rows of the river band.
pub const TURTLE_ROWS: [TurtleRowSpec; 2] = [
    TurtleRowSpec {
        y: 64,
        clusters: 4,
        per_cluster: 2,
        cluster_stride: 60,
        velocity: -2,
    },
    TurtleRowSpec {
        y: 112,
        clusters: 4,
        per_cluster: 3,
        cluster_stride: 64,
        velocity: -2,
    },
];

/// Cluster index eligible to dive, per row.
pub const DIVING_CLUSTER: usize = 1;

/// Submersion FSM: Surfaced → Diving/Submerged → Surfaced, driven by a
/// tick counter. The timer never exceeds `DIVE_SURFACE` before resetting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiveFsm {
    pub timer: u32,
    pub submerged: bool,
    pub diving_cluster: usize,
}

/// Boundary crossed by one FSM tick, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiveEvent {
    Submerged,
    Surfaced,
}

impl DiveFsm {
    pub fn new() -> Self {
        Self {
            timer: 0,
            submerged: false,
            diving_cluster: DIVING_CLUSTER,
        }
    }

    /// Advance one tick, reporting threshold crossings.
    pub fn tick(&mut self) -> Option<DiveEvent> {
        self.timer += 1;
        if self.timer == DIVE_START {
            self.submerged = true;
            Some(DiveEvent::Submerged)
        } else if self.timer == DIVE_SURFACE {
            self.submerged = false;
            self.timer = 0;
            Some(DiveEvent::Surfaced)
        } else {
            None
        }
    }
}

impl Default for DiveFsm {
    fn default() -> Self {
        Self::new()
    }
}

/// Shared surface-animation clock for all non-diving turtles.
///
/// Frames cycle A → B → C → B, advancing every few ticks.
#[derive(Debug, Clone, Copy)]
pub struct SurfaceAnim {
    timer: u32,
    frame: usize,
}

const FRAME_SEQ: [Sprite; 4] = [
    Sprite::TurtleA,
    Sprite::TurtleB,
    Sprite::TurtleC,
    Sprite::TurtleB,
];

impl SurfaceAnim {
    pub fn new() -> Self {
        Self { timer: 0, frame: 0 }
    }

    pub fn sprite(&self) -> Sprite {
        FRAME_SEQ[self.frame]
    }

    /// Advance one tick; returns the new sprite when the frame flips.
    pub fn tick(&mut self) -> Option<Sprite> {
        self.timer += 1;
        if self.timer >= TURTLE_ANIM_TICKS {
            self.timer = 0;
            self.frame = (self.frame + 1) % FRAME_SEQ.len();
            Some(self.sprite())
        } else {
            None
        }
    }
}

impl Default for SurfaceAnim {
    fn default() -> Self {
        Self::new()
    }
}

/// One turtle row: its entities (cluster-major order) plus the dive FSM.
#[derive(Debug, Clone)]
pub struct TurtleRow {
    pub y: i32,
    pub per_cluster: usize,
    pub entities: ArrayVec<Entity, MAX_LANE_ENTITIES>,
    pub dive: DiveFsm,
}

impl TurtleRow {
    /// Build a row in its world-reset configuration.
    pub fn from_spec(spec: &TurtleRowSpec) -> Self {
        let mut entities = ArrayVec::new();
        for c in 0..spec.clusters {
            for t in 0..spec.per_cluster {
                entities.push(Entity::new(
                    c as i32 * spec.cluster_stride + t as i32 * TILE_W,
                    spec.y,
                    Sprite::TurtleA,
                    spec.velocity,
                    1,
                ));
            }
        }
        Self {
            y: spec.y,
            per_cluster: spec.per_cluster,
            entities,
            dive: DiveFsm::new(),
        }
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

    /// Cluster index of the entity at the given position.
    pub fn cluster_of(&self, idx: usize) -> usize {
        idx / self.per_cluster
    }

    /// Whether the entity at `idx` is currently submerged (hidden from
    /// rendering and unsafe to stand on).
    pub fn is_hidden(&self, idx: usize) -> bool {
        self.dive.submerged && self.cluster_of(idx) == self.dive.diving_cluster
    }

    /// Advance the dive FSM, updating the diving cluster's sprites at the
    /// thresholds.
    pub fn tick_dive(&mut self) {
        let event = self.dive.tick();
        if let Some(event) = event {
            let sprite = match event {
                DiveEvent::Submerged => Sprite::TurtleDive,
                DiveEvent::Surfaced => Sprite::TurtleB,
            };
            let c = self.dive.diving_cluster;
            let start = c * self.per_cluster;
            for e in &mut self.entities[start..start + self.per_cluster] {
                e.sprite = sprite;
            }
        }
    }

    /// Apply the shared surface-animation frame to every turtle that is
    /// not currently submerged.
    pub fn set_surface_frame(&mut self, sprite: Sprite) {
        let submerged = self.dive.submerged;
        let diving = self.dive.diving_cluster;
        let per = self.per_cluster;
        for (i, e) in self.entities.iter_mut().enumerate() {
            if submerged && i / per == diving {
                continue;
            }
            e.sprite = sprite;
        }
    }

    /// Velocity of the turtle under the given pixel column, skipping
    /// submerged clusters.
    pub fn platform_under(&self, px: i32) -> Option<i32> {
        self.entities
            .iter()
            .enumerate()
            .find(|(i, e)| !self.is_hidden(*i) && e.contains_x(px))
            .map(|(_, e)| e.velocity)
    }
}
