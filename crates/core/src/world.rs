//! The simulation engine.
//!
//! All entity collections and game-state scalars live in one owned
//! `World` aggregate, advanced by exactly one tick per `step` call. The
//! engine performs no I/O; the composer gets a read-only view per tick.
//!
//! The stage order inside `step` is load-bearing: later stages override
//! earlier ones (a command cancels carry, a goal landing preempts the
//! platform probe, and so on). Reordering them changes gameplay.

use arrayvec::ArrayVec;
use tui_frogger_types::{
    Command, Direction, Sprite, CAPTURED_CYCLE, DEATH_MARKER_TICKS, FB_H, FB_W, FROG_START_X,
    FROG_START_Y, HOME_TOLERANCE, HOP_TICKS, RIVER_BOTTOM, RIVER_TOP, SCORE_CAP, SCORE_FORWARD,
    SCORE_HOME, SCORE_HOME_FLY, START_LIVES, TILE_H, TILE_W,
};

use crate::countdown::Countdown;
use crate::entity::Entity;
use crate::goal::{new_slots, Fly, HomeSlot};
use crate::lane::{Lane, HAZARD_LANES, LOG_LANES};
use crate::rng::Lcg;
use crate::turtle::{SurfaceAnim, TurtleRow, TURTLE_ROWS};

/// What the platform probe under the frog found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Footing {
    /// Standing on a platform moving at the given horizontal velocity.
    OnPlatform(i32),
    /// On solid ground, outside the river band.
    Dry,
    /// Inside the river band with nothing underfoot.
    Drowning,
}

/// Result of advancing the world by one tick. Exactly one of these is
/// produced per `step`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// Ordinary tick.
    Continued,
    /// The frog reached a home slot and respawned at the start tile.
    ActorReset,
    /// A life was consumed (or the game restarted) and the world was
    /// rebuilt; score, lives and filled slots persist across it.
    WorldReset,
    /// `game_over` is set; the world is frozen until a restart.
    GameOver,
}

/// The player-controlled actor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frog {
    pub entity: Entity,
    pub facing: Direction,
    pub hopping: bool,
    pub hop_elapsed: u32,
    /// Lowest screen y reached this life; forward-progress points are
    /// awarded only when this watermark improves.
    pub highest_y: i32,
}

impl Frog {
    fn start_hop(&mut self) {
        self.hopping = true;
        self.hop_elapsed = 0;
    }

    fn tick_hop(&mut self) {
        if self.hopping {
            self.hop_elapsed += 1;
            if self.hop_elapsed >= HOP_TICKS {
                self.hopping = false;
                self.hop_elapsed = 0;
            }
        }
    }

    /// Sprite for the current animation phase.
    pub fn current_sprite(&self) -> Sprite {
        if self.hopping && self.hop_elapsed == 1 {
            Sprite::FrogHop
        } else {
            Sprite::Frog
        }
    }
}

/// Skull left where the frog last died; purely presentational.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeathMarker {
    pub x: i32,
    pub y: i32,
    ttl: u32,
}

pub struct World {
    pub hazards: ArrayVec<Lane, 5>,
    pub logs: ArrayVec<Lane, 3>,
    pub turtles: [TurtleRow; 2],
    pub frog: Frog,
    pub homes: [HomeSlot; 5],
    pub fly: Fly,
    pub death_marker: Option<DeathMarker>,
    countdown: Countdown,
    surface_anim: SurfaceAnim,
    captured_timer: u32,
    carry_velocity: i32,
    lives: u32,
    score: u32,
    game_over: bool,
    rng: Lcg,
    seed: u32,
    generation: u32,
}

impl World {
    /// Create a new game with the given RNG seed.
    pub fn new(seed: u32) -> Self {
        let mut world = Self {
            hazards: ArrayVec::new(),
            logs: ArrayVec::new(),
            turtles: [
                TurtleRow::from_spec(&TURTLE_ROWS[0]),
                TurtleRow::from_spec(&TURTLE_ROWS[1]),
            ],
            frog: Frog {
                entity: Entity::new(FROG_START_X, FROG_START_Y, Sprite::Frog, 0, 1),
                facing: Direction::Up,
                hopping: false,
                hop_elapsed: 0,
                highest_y: FROG_START_Y,
            },
            homes: new_slots(),
            fly: Fly::new(),
            death_marker: None,
            countdown: Countdown::new(),
            surface_anim: SurfaceAnim::new(),
            captured_timer: 0,
            carry_velocity: 0,
            lives: START_LIVES,
            score: 0,
            game_over: false,
            rng: Lcg::new(seed),
            seed,
            generation: 0,
        };
        world.reset_world();
        world
    }

    pub fn lives(&self) -> u32 {
        self.lives
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    /// Horizontal velocity the frog inherits this tick from the platform
    /// it stands on (0 on solid ground).
    pub fn carry_velocity(&self) -> i32 {
        self.carry_velocity
    }

    /// Remaining countdown-bar columns, for the HUD.
    pub fn bar_columns(&self) -> i32 {
        self.countdown.columns_remaining()
    }

    /// Which captured-frog marker frame is current.
    pub fn captured_sprite(&self) -> Sprite {
        if self.captured_timer < CAPTURED_CYCLE / 2 {
            Sprite::HomeA
        } else {
            Sprite::HomeB
        }
    }

    /// Bumped whenever the whole world is rebuilt (life lost, restart).
    /// Renderers use it to drop incremental state.
    pub fn generation(&self) -> u32 {
        self.generation
    }

    /// Advance the world by exactly one tick.
    pub fn step(&mut self, command: Command) -> StepOutcome {
        if self.game_over {
            if command == Command::Confirm {
                self.start_new_game();
                return StepOutcome::WorldReset;
            }
            return StepOutcome::GameOver;
        }

        self.latch_prev();

        // Presentation timers (never affect gameplay outcomes).
        self.tick_presentation();

        // Countdown subtick.
        self.countdown.advance_subtick();

        // Platform and hazard motion, with wraparound.
        for lane in &mut self.hazards {
            lane.advance();
        }
        for lane in &mut self.logs {
            lane.advance();
        }
        for row in &mut self.turtles {
            row.advance();
        }

        // Submersion FSMs.
        for row in &mut self.turtles {
            row.tick_dive();
        }

        // Carry: platform motion drags the frog along; leaving the screen
        // sideways is fatal and ends the tick.
        if self.carry_velocity != 0 {
            self.frog.entity.x += self.carry_velocity;
            let x = self.frog.entity.x;
            if x < 0 || x > FB_W - TILE_W {
                // Pin the frog at the edge it slid off before it dies, so
                // it never renders (or freezes) off-screen.
                self.frog.entity.x = x.clamp(0, FB_W - TILE_W);
                return self.consume_life(false);
            }
        }

        // Player command.
        self.apply_command(command);

        // Home-slot landing, only inside the goal band.
        if self.frog.entity.y < RIVER_TOP {
            if let Some(outcome) = self.try_land_home() {
                return outcome;
            }
        }

        // Recompute carry from what is underfoot now.
        self.carry_velocity = match self.probe_platform() {
            Footing::OnPlatform(v) => v,
            Footing::Dry => 0,
            Footing::Drowning => return self.consume_life(true),
        };

        // Vehicles.
        if self.hazard_hit() {
            return self.consume_life(true);
        }

        // Countdown commit.
        if self.countdown.commit() {
            return self.consume_life(false);
        }

        StepOutcome::Continued
    }

    /// Test the frog's tile against every platform in the river band.
    pub fn probe_platform(&self) -> Footing {
        let fx = self.frog.entity.x;
        let fy = self.frog.entity.y;
        if !(RIVER_TOP..=RIVER_BOTTOM).contains(&fy) {
            return Footing::Dry;
        }
        for lane in &self.logs {
            if fy == lane.y {
                if let Some(v) = lane.platform_under(fx) {
                    return Footing::OnPlatform(v);
                }
            }
        }
        for row in &self.turtles {
            if fy == row.y {
                if let Some(v) = row.platform_under(fx) {
                    return Footing::OnPlatform(v);
                }
            }
        }
        Footing::Drowning
    }

    fn apply_command(&mut self, command: Command) {
        let (dx, dy, facing) = match command {
            Command::Up => (0, -TILE_H, Direction::Up),
            Command::Down => (0, TILE_H, Direction::Down),
            Command::Left => (-TILE_W, 0, Direction::Left),
            Command::Right => (TILE_W, 0, Direction::Right),
            Command::None | Command::Confirm => return,
        };

        let e = &mut self.frog.entity;
        e.x = (e.x + dx).clamp(0, FB_W - TILE_W);
        e.y = (e.y + dy).clamp(0, FB_H - TILE_H);
        self.frog.facing = facing;
        self.frog.start_hop();

        // A deliberate move overrides whatever platform was carrying us.
        self.carry_velocity = 0;

        if command == Command::Up && self.frog.entity.y < self.frog.highest_y {
            self.frog.highest_y = self.frog.entity.y;
            self.score = (self.score + SCORE_FORWARD).min(SCORE_CAP);
        }
    }

    fn try_land_home(&mut self) -> Option<StepOutcome> {
        let fx = self.frog.entity.x;
        let slot = (0..self.homes.len())
            .find(|&i| !self.homes[i].filled && (fx - self.homes[i].x).abs() <= HOME_TOLERANCE)?;

        self.homes[slot].filled = true;
        let award = if self.fly.targets(slot) {
            self.fly.despawn();
            SCORE_HOME_FLY
        } else {
            SCORE_HOME
        };
        self.score = (self.score + award).min(SCORE_CAP);

        if self.homes.iter().all(|h| h.filled) {
            self.game_over = true;
            self.latch_prev();
            Some(StepOutcome::GameOver)
        } else {
            self.reset_frog();
            Some(StepOutcome::ActorReset)
        }
    }

    fn hazard_hit(&self) -> bool {
        let fx = self.frog.entity.x;
        let fy = self.frog.entity.y;
        let slack = TILE_W / 2;
        self.hazards
            .iter()
            .flat_map(|lane| lane.entities.iter())
            .any(|e| fy == e.y && fx >= e.x - slack && fx <= e.x + e.width_px() - TILE_W + slack)
    }

    fn consume_life(&mut self, mark: bool) -> StepOutcome {
        if mark {
            self.death_marker = Some(DeathMarker {
                x: self.frog.entity.x,
                y: self.frog.entity.y,
                ttl: DEATH_MARKER_TICKS,
            });
        }
        self.lives = self.lives.saturating_sub(1);
        if self.lives == 0 {
            self.game_over = true;
            // Settle redraw state; the world stays frozen from here.
            self.latch_prev();
            StepOutcome::GameOver
        } else {
            self.reset_world();
            StepOutcome::WorldReset
        }
    }

    fn tick_presentation(&mut self) {
        self.frog.tick_hop();
        self.frog.entity.sprite = self.frog.current_sprite();

        if let Some(sprite) = self.surface_anim.tick() {
            for row in &mut self.turtles {
                row.set_surface_frame(sprite);
            }
        }

        self.fly.tick(&self.homes, &mut self.rng);

        self.captured_timer += 1;
        if self.captured_timer >= CAPTURED_CYCLE {
            self.captured_timer = 0;
        }

        if let Some(marker) = &mut self.death_marker {
            marker.ttl -= 1;
            if marker.ttl == 0 {
                self.death_marker = None;
            }
        }
    }

    fn latch_prev(&mut self) {
        for lane in &mut self.hazards {
            lane.latch_prev();
        }
        for lane in &mut self.logs {
            lane.latch_prev();
        }
        for row in &mut self.turtles {
            row.latch_prev();
        }
        self.frog.entity.latch_prev();
    }

    /// Respawn the frog at the start tile. The entity's previous position
    /// is left alone so the renderer can erase the old image.
    fn place_frog_at_start(&mut self) {
        let e = &mut self.frog.entity;
        e.x = FROG_START_X;
        e.y = FROG_START_Y;
        e.sprite = Sprite::Frog;
        self.frog.facing = Direction::Up;
        self.frog.hopping = false;
        self.frog.hop_elapsed = 0;
        self.frog.highest_y = FROG_START_Y;
    }

    fn reset_frog(&mut self) {
        self.place_frog_at_start();
        self.carry_velocity = 0;
        self.countdown = Countdown::new();
        self.fly.reset_phase();
        self.captured_timer = 0;
        self.surface_anim = SurfaceAnim::new();
    }

    fn reset_world(&mut self) {
        self.hazards = HAZARD_LANES.iter().map(Lane::from_spec).collect();
        self.logs = LOG_LANES.iter().map(Lane::from_spec).collect();
        self.turtles = [
            TurtleRow::from_spec(&TURTLE_ROWS[0]),
            TurtleRow::from_spec(&TURTLE_ROWS[1]),
        ];
        self.reset_frog();
        self.generation = self.generation.wrapping_add(1);
    }

    fn start_new_game(&mut self) {
        self.lives = START_LIVES;
        self.score = 0;
        self.game_over = false;
        self.rng = Lcg::new(self.seed);
        self.homes = new_slots();
        self.fly = Fly::new();
        self.death_marker = None;
        self.reset_world();
    }
}
