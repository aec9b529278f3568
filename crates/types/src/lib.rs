//! Shared types and compile-time configuration.
//!
//! This crate defines the fundamental types used throughout the game. All
//! types are pure data with no external dependencies, so they can be used
//! from the simulation core, the frame composer, and the terminal shims
//! alike.
//!
//! # Screen Geometry
//!
//! The game targets a fixed logical resolution:
//!
//! - **Framebuffer**: 224×256 pixels
//! - **Tile size**: 16×16 pixels (14×16 tile grid)
//! - **River band**: y ∈ [48, 112] — platforms required, water is fatal
//! - **Road band**: y ∈ [144, 224] — vehicle collision is fatal
//! - **Home row**: slots drawn at y = 32, reached when y < 48
//!
//! # Timing
//!
//! The simulation is frame-stepped: one `step` per sync pulse, nominally
//! 60 pulses per second (`TICK_MS` = 16). All gameplay timing is counted
//! in ticks, never in wall-clock time.
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICKS_PER_BAR_COL` | 15 | Ticks per countdown-bar column |
//! | `DIVE_START` | 30 | Tick at which the diving cluster submerges |
//! | `DIVE_SURFACE` | 120 | Tick at which it surfaces again |
//! | `FLY_PERIOD` | 30 | Bonus-fly visibility toggle period |
//! | `HOP_TICKS` | 3 | Length of the frog's hop animation |

/// Logical framebuffer width in pixels.
pub const FB_W: i32 = 224;

/// Logical framebuffer height in pixels.
pub const FB_H: i32 = 256;

/// Tile width in pixels.
pub const TILE_W: i32 = 16;

/// Tile height in pixels.
pub const TILE_H: i32 = 16;

/// Fixed timestep interval in milliseconds (~60 FPS).
pub const TICK_MS: u64 = 16;

/// First row of the river band (topmost log lane).
pub const RIVER_TOP: i32 = 48;

/// Last row of the river band (bottom turtle lane).
pub const RIVER_BOTTOM: i32 = 112;

/// First vehicle lane of the road band.
pub const ROAD_TOP: i32 = 144;

/// Last row of the road band.
pub const ROAD_BOTTOM: i32 = 224;

/// Row the home-slot markers are drawn on.
pub const HOME_ROW_Y: i32 = 32;

/// Home slot x positions, left to right.
pub const HOME_SLOT_X: [i32; 5] = [8, 56, 104, 152, 200];

/// Horizontal tolerance for landing in a home slot (half a tile).
pub const HOME_TOLERANCE: i32 = TILE_W / 2;

/// Frog spawn x (horizontally centered).
pub const FROG_START_X: i32 = (FB_W - TILE_W) / 2;

/// Frog spawn y (bottom tile row).
pub const FROG_START_Y: i32 = FB_H - TILE_H;

/// Lives granted at the start of a new game.
pub const START_LIVES: u32 = 3;

/// Countdown bar geometry: a right-anchored strip along the bottom edge.
pub const BAR_W: i32 = 118;
pub const BAR_H: i32 = 8;
pub const BAR_Y0: i32 = FB_H - BAR_H;
pub const BAR_X1: i32 = FB_W - 32 - 1;
pub const BAR_X0: i32 = BAR_X1 - BAR_W + 1;

/// Total tick budget of the countdown (30 seconds at 60 FPS).
pub const BAR_TICKS: u32 = 30 * 60;

/// Ticks consumed per countdown-bar column.
pub const TICKS_PER_BAR_COL: u32 = BAR_TICKS / BAR_W as u32;

/// Dive FSM thresholds: the designated cluster submerges at `DIVE_START`
/// and surfaces again at `DIVE_SURFACE`, restarting the cycle.
pub const DIVE_START: u32 = 30;
pub const DIVE_SURFACE: u32 = DIVE_START + 90;

/// Bonus-fly visibility toggle period in ticks.
pub const FLY_PERIOD: u32 = 30;

/// Full cycle of the captured-frog marker animation in ticks.
pub const CAPTURED_CYCLE: u32 = 120;

/// Length of the frog's hop animation in ticks.
pub const HOP_TICKS: u32 = 3;

/// Ticks between turtle surface-animation frames.
pub const TURTLE_ANIM_TICKS: u32 = 3;

/// How long the skull marker lingers after a fatal event, in ticks.
pub const DEATH_MARKER_TICKS: u32 = 45;

/// Points for reaching a new row on the way up.
pub const SCORE_FORWARD: u32 = 10;

/// Points for filling a home slot.
pub const SCORE_HOME: u32 = 100;

/// Points for filling the slot the bonus fly is sitting on.
pub const SCORE_HOME_FLY: u32 = 200;

/// Display cap for the score counter.
pub const SCORE_CAP: u32 = 999_999;

/// Palette indices (4-bit). Index 0 is transparent in sprite data and
/// renders as black where it reaches the framebuffer directly.
pub mod palette {
    pub const TRANSPARENT: u8 = 0x0;
    pub const BLACK: u8 = 0x1;
    pub const FROG: u8 = 0x2;
    pub const LEAF: u8 = 0x3;
    pub const YELLOW: u8 = 0x4;
    pub const ORANGE: u8 = 0x5;
    pub const LIME: u8 = 0x6;
    pub const ROAD: u8 = 0x7;
    pub const SLATE: u8 = 0x8;
    pub const WOOD: u8 = 0x9;
    pub const RED: u8 = 0xA;
    pub const BARK: u8 = 0xB;
    pub const WATER: u8 = 0xC;
    pub const SKY: u8 = 0xD;
    pub const WHITE: u8 = 0xE;
    pub const OLIVE: u8 = 0xF;

    /// Fill colour of the countdown bar.
    pub const BAR: u8 = LIME;
}

/// Facing of the frog; also the orientation applied when its sprite is
/// blitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// One logical command per tick, produced by the input mapper.
///
/// `Confirm` is meaningful only on the game-over screen (restarts the
/// game) and is ignored otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Command {
    #[default]
    None,
    Up,
    Down,
    Left,
    Right,
    Confirm,
}

/// Raw key identity reported by a key scanner, before edge detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanCode {
    Up,
    Down,
    Left,
    Right,
    Confirm,
}

impl From<ScanCode> for Command {
    fn from(code: ScanCode) -> Self {
        match code {
            ScanCode::Up => Command::Up,
            ScanCode::Down => Command::Down,
            ScanCode::Left => Command::Left,
            ScanCode::Right => Command::Right,
            ScanCode::Confirm => Command::Confirm,
        }
    }
}

/// Sprite selector for the 16×16 atlas.
///
/// Entities store one of these; the composer resolves it to pixel data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sprite {
    /// Frog at rest.
    Frog,
    /// Frog mid-hop (legs extended).
    FrogHop,
    /// Skull shown where the frog died.
    Skull,
    /// Bonus fly on a home slot.
    Fly,
    /// Captured frog on a filled slot, two alternating frames.
    HomeA,
    HomeB,
    /// Vehicles, one flavour per road lane.
    Buggy,
    Bulldozer,
    Sedan,
    Racer,
    /// Two-tile truck, cab and trailer halves.
    TruckCab,
    TruckTail,
    /// Log caps and middle fill.
    LogLeft,
    LogMid,
    LogRight,
    /// Turtle surface-animation frames.
    TurtleA,
    TurtleB,
    TurtleC,
    /// Turtle mid-dive, shown while the cluster drops out.
    TurtleDive,
}

impl Sprite {
    /// Number of distinct sprites in the atlas.
    pub const COUNT: usize = 19;

    /// Stable index into the atlas table.
    pub const fn index(self) -> usize {
        match self {
            Sprite::Frog => 0,
            Sprite::FrogHop => 1,
            Sprite::Skull => 2,
            Sprite::Fly => 3,
            Sprite::HomeA => 4,
            Sprite::HomeB => 5,
            Sprite::Buggy => 6,
            Sprite::Bulldozer => 7,
            Sprite::Sedan => 8,
            Sprite::Racer => 9,
            Sprite::TruckCab => 10,
            Sprite::TruckTail => 11,
            Sprite::LogLeft => 12,
            Sprite::LogMid => 13,
            Sprite::LogRight => 14,
            Sprite::TurtleA => 15,
            Sprite::TurtleB => 16,
            Sprite::TurtleC => 17,
            Sprite::TurtleDive => 18,
        }
    }
}
