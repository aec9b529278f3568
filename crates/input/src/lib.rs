//! Input module (engine-facing).
//!
//! This crate is intentionally independent of any UI framework beyond
//! `crossterm` key codes. It maps raw key identities into the game's
//! five-key layout and provides the edge-triggered mapper that produces
//! one logical [`Command`](tui_frogger_types::Command) per tick.

pub mod map;
pub mod mapper;

pub use tui_frogger_types as types;

pub use map::{scan_code, should_quit};
pub use mapper::{InputMapper, ScanReport};
