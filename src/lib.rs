//! TUI Frogger (workspace facade crate).
//!
//! This package keeps the `tui_frogger::{core,gfx,input,term,types}`
//! public API stable while the implementation lives in dedicated crates
//! under `crates/`.

pub use tui_frogger_core as core;
pub use tui_frogger_gfx as gfx;
pub use tui_frogger_input as input;
pub use tui_frogger_term as term;
pub use tui_frogger_types as types;
