//! Core simulation engine - pure, deterministic, and testable.
//!
//! This crate contains all the game rules, state management, and the
//! frame-stepped simulation. It has **zero dependencies** on rendering or
//! I/O, making it:
//!
//! - **Deterministic**: the same seed and command sequence produce
//!   identical games
//! - **Testable**: every failure mode is an explicit state transition
//! - **Fast**: the step path allocates nothing
//!
//! # Module Structure
//!
//! - [`entity`]: moving objects with wraparound motion and redraw latching
//! - [`lane`]: table-driven vehicle and log rows
//! - [`turtle`]: turtle clusters with the submersion FSM
//! - [`goal`]: home slots and the bonus-fly lifecycle
//! - [`countdown`]: the column-based time budget
//! - [`rng`]: the seeded LCG behind bonus-fly targeting
//! - [`world`]: the owned aggregate and the `step` tick contract
//!
//! # Example
//!
//! ```
//! use tui_frogger_core::{StepOutcome, World};
//! use tui_frogger_types::Command;
//!
//! let mut world = World::new(1);
//! assert_eq!(world.step(Command::Up), StepOutcome::Continued);
//! assert_eq!(world.score(), 10); // forward-progress bonus
//! ```

pub mod countdown;
pub mod entity;
pub mod goal;
pub mod lane;
pub mod rng;
pub mod turtle;
pub mod world;

pub use tui_frogger_types as types;

// Re-export commonly used types for convenience.
pub use countdown::Countdown;
pub use entity::Entity;
pub use goal::{new_slots, Fly, HomeSlot};
pub use lane::{Lane, LaneSpec, HAZARD_LANES, LOG_LANES, MAX_LANE_ENTITIES};
pub use rng::Lcg;
pub use turtle::{DiveEvent, DiveFsm, SurfaceAnim, TurtleRow, TurtleRowSpec, TURTLE_ROWS};
pub use world::{DeathMarker, Footing, Frog, StepOutcome, World};
