//! Rendering module: atlas, pixel framebuffer, and the frame composer.
//!
//! Everything here is pure (no I/O) and unit-testable: the composer
//! writes palette indices into a [`FrameBuffer`], and a presenter crate
//! turns that into real output. The key property, enforced by tests, is
//! that the dirty-rectangle path produces pixel-identical frames to a
//! full repaint.

pub mod atlas;
pub mod compose;
pub mod fb;
pub mod font;

pub use tui_frogger_core as core;
pub use tui_frogger_types as types;

pub use atlas::{bake_background, Atlas, Block, SPRITE_H, SPRITE_W};
pub use compose::{Composer, MAX_DAMAGE};
pub use fb::{FrameBuffer, Rect};
